//! Mine layout generation.

use crate::error::{Error, Result};
use crate::grid::{Grid, MAX_DIMENSION, MIN_DIMENSION, MineBoard};
use crate::util::{DIRS_8, Pos, valid_neighbors};
use rand::Rng;

/// Cell value marking a mine on a [`MineBoard`].
pub const MINE: u8 = 9;

/// The cell that never receives a mine.
pub fn protected_cell(width: u16, height: u16) -> Pos {
    ((width / 2).saturating_sub(1), (height / 2).saturating_sub(1))
}

/// Most mines a `width` x `height` board accepts.
///
/// One cell is protected and one more is kept free so placement always has a choice.
pub fn max_mines(width: u16, height: u16) -> u32 {
    (width as u32 * height as u32).saturating_sub(2)
}

/// Creates a zeroed board, rejecting anything smaller than 2x2.
pub fn create_board<T: Copy + Default>(width: u16, height: u16) -> Result<Grid<T>> {
    let valid = MIN_DIMENSION..=MAX_DIMENSION;
    if !valid.contains(&width) || !valid.contains(&height) {
        return Err(Error::InvalidDimensions { width, height });
    }
    Ok(Grid::new(width, height))
}

/// Places `mines` mines uniformly at random, never on the [`protected_cell`].
///
/// Adjacency counts are not filled in, see [`populate_adjacency_counts`].
pub fn create_mine_board(
    width: u16,
    height: u16,
    mines: u32,
    rng: &mut impl Rng,
) -> Result<MineBoard> {
    let mut board: MineBoard = create_board(width, height)?;
    let max = max_mines(width, height);
    if mines > max {
        return Err(Error::TooManyMines { mines, max });
    }

    let protected = protected_cell(width, height);
    let mut placed = 0;
    while placed < mines {
        let pos = (rng.random_range(0..width), rng.random_range(0..height));
        if pos == protected || board[pos] == MINE {
            continue;
        }
        board[pos] = MINE;
        placed += 1;
    }
    log::debug!("placed {mines} mines on a {width}x{height} board, {protected:?} kept clear");
    Ok(board)
}

/// Writes the number of neighbouring mines into every non-mine cell.
pub fn populate_adjacency_counts(board: &mut MineBoard) {
    let (w, h) = board.dimensions();
    for pos in board.positions() {
        if board[pos] == MINE {
            continue;
        }
        let count = valid_neighbors(&DIRS_8, pos, w, h)
            .filter(|n| board[*n] == MINE)
            .count();
        board[pos] = count as u8;
    }
}

/// Checks a prepared layout: the protected cell is clear and every other cell holds
/// either [`MINE`] or its exact neighbouring mine count.
pub fn check_layout(board: &MineBoard) -> Result<()> {
    let (w, h) = board.dimensions();
    let protected = protected_cell(w, h);
    for (pos @ (x, y), value) in board.iter() {
        let valid = if *value == MINE {
            pos != protected
        } else {
            let around = valid_neighbors(&DIRS_8, pos, w, h)
                .filter(|n| board[*n] == MINE)
                .count();
            *value as usize == around
        };
        if !valid {
            return Err(Error::InvalidLayout { x, y });
        }
    }
    Ok(())
}
