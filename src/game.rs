use crate::error::{Error, Result};
use crate::generator::{
    MINE, check_layout, create_board, create_mine_board, populate_adjacency_counts,
};
use crate::grid::{FlagBoard, MineBoard, RevealMask};
use crate::guess::Guess;
use crate::turn::{TurnResult, apply_turn};
use crate::win_state::{WinState, all_mines_flagged};
use rand::Rng;

/// One game session: the mine layout, the player's flags and what they can see.
#[derive(Clone, Debug)]
pub struct Game {
    mines: MineBoard,
    flags: FlagBoard,
    mask: RevealMask,
    mine_count: u32,
    win_state: WinState,
}

impl Game {
    pub fn new(width: u16, height: u16, mine_count: u32, rng: &mut impl Rng) -> Result<Self> {
        let mut mines = create_mine_board(width, height, mine_count, rng)?;
        populate_adjacency_counts(&mut mines);
        log::info!("new {width}x{height} game with {mine_count} mines");
        Ok(Self {
            mines,
            flags: create_board(width, height)?,
            mask: create_board(width, height)?,
            mine_count,
            win_state: WinState::Playing,
        })
    }

    /// Starts a session on a prepared layout, rejecting it unless the counts are populated
    /// and the protected cell is clear.
    pub fn from_mine_board(mines: MineBoard) -> Result<Self> {
        let (width, height) = mines.dimensions();
        let flags = create_board(width, height)?;
        check_layout(&mines)?;
        Ok(Self {
            flags,
            mask: create_board(width, height)?,
            mine_count: mines.count(|v| *v == MINE) as u32,
            mines,
            win_state: WinState::Playing,
        })
    }

    /// Applies a guess and moves the state machine on.
    ///
    /// Guesses outside this board leave everything unchanged and the game keeps going.
    pub fn take_turn(&mut self, guess: Guess) -> Result<WinState> {
        if self.win_state.is_over() {
            return Err(Error::GameOver);
        }

        let TurnResult { hit_mine, applied } =
            apply_turn(&self.mines, &mut self.flags, &mut self.mask, guess);
        self.win_state = if hit_mine {
            WinState::Lost
        } else if all_mines_flagged(&self.mines, &self.flags) {
            WinState::Won
        } else {
            WinState::Playing
        };

        if self.win_state.is_over() {
            log::info!("game ended {:?} on {:?}", self.win_state, guess);
        } else if applied {
            log::debug!("applied {guess:?}");
        }
        Ok(self.win_state)
    }

    /// Shows the whole board, with flags on exactly the mines. Used for the final render.
    pub fn reveal_all(&mut self) {
        self.mask.fill(true);
        for (pos, value) in self.mines.iter() {
            self.flags[pos] = *value == MINE;
        }
    }

    pub fn mines(&self) -> &MineBoard {
        &self.mines
    }

    pub fn flags(&self) -> &FlagBoard {
        &self.flags
    }

    pub fn mask(&self) -> &RevealMask {
        &self.mask
    }

    pub fn mine_count(&self) -> u32 {
        self.mine_count
    }

    pub fn flag_count(&self) -> usize {
        self.flags.count(|f| *f)
    }

    pub fn win_state(&self) -> WinState {
        self.win_state
    }

    pub fn dimensions(&self) -> (u16, u16) {
        self.mines.dimensions()
    }
}
