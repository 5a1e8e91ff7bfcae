use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid board dimensions {width}x{height}, both sides must be between 2 and 65535")]
    InvalidDimensions { width: u16, height: u16 },
    #[error("too many mines: requested {mines}, at most {max} fit")]
    TooManyMines { mines: u32, max: u32 },
    #[error("mine layout is inconsistent at cell ({x}, {y})")]
    InvalidLayout { x: u16, y: u16 },
    #[error("invalid guess {0:?}, expected e.g. `F 1,1` or `D 3,2`")]
    InvalidGuess(String),
    #[error("game already ended, no new guesses are accepted")]
    GameOver,
}

pub type Result<T> = core::result::Result<T, Error>;
