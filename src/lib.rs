//! Rules for a single player game of Minesweeper, plus a small line based terminal front end.
//!
//! The board lives in three grids of the same shape: the mine layout, the player's flags and
//! the reveal mask. A game is driven one [`Guess`] at a time, either through [`Game`] or with
//! the free functions [`apply_turn`] and [`all_mines_flagged`] on grids you own.

pub mod args;
pub mod error;
pub mod game;
pub mod generator;
pub mod grid;
pub mod guess;
pub mod logging;
pub mod reveal;
pub mod turn;
pub mod ui;
pub mod util;
pub mod win_state;

pub use error::{Error, Result};
pub use game::Game;
pub use generator::{MINE, create_board, create_mine_board, populate_adjacency_counts};
pub use grid::{FlagBoard, Grid, MineBoard, RevealMask};
pub use guess::{Guess, Mode};
pub use reveal::reveal_from;
pub use turn::{TurnResult, apply_turn};
pub use win_state::{WinState, all_mines_flagged};
