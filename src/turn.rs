use crate::generator::MINE;
use crate::grid::{FlagBoard, MineBoard, RevealMask};
use crate::guess::{Guess, Mode};
use crate::reveal::reveal_from;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnResult {
    pub hit_mine: bool,
    /// False when the guess fell outside this board and nothing changed.
    pub applied: bool,
}

/// Applies one validated guess to the flag board and reveal mask.
///
/// A flag also marks the cell as shown so it can be drawn. Destroying a cell
/// first lifts any flag on it, then runs the cascading reveal.
pub fn apply_turn(
    mines: &MineBoard,
    flags: &mut FlagBoard,
    mask: &mut RevealMask,
    guess: Guess,
) -> TurnResult {
    let pos = guess.pos();
    if !mines.contains(pos) {
        log::debug!("guess {pos:?} is outside the {:?} board", mines.dimensions());
        return TurnResult::default();
    }

    let hit_mine = match guess.mode {
        Mode::Flag => {
            flags[pos] = true;
            mask[pos] = true;
            false
        }
        Mode::Destroy => {
            if flags[pos] {
                flags[pos] = false;
                // only shown because of the flag
                mask[pos] = false;
            }
            let hit_mine = mines[pos] == MINE;
            reveal_from(mines, flags, mask, pos);
            hit_mine
        }
    };

    TurnResult {
        hit_mine,
        applied: true,
    }
}
