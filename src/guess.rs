use crate::error::{Error, Result};
use crate::grid::MAX_DIMENSION;
use crate::util::Pos;
use std::str::FromStr;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Flag,
    Destroy,
}

impl Mode {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'F' => Some(Self::Flag),
            'D' => Some(Self::Destroy),
            _ => None,
        }
    }
}

/// One turn's worth of player input, with zero based coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Guess {
    pub x: u16,
    pub y: u16,
    pub mode: Mode,
}

impl Guess {
    /// Validates one based player coordinates against [`MAX_DIMENSION`].
    ///
    /// Note the row comes before the column. The actual board size is checked
    /// later, when the guess is applied.
    pub fn new(mode: char, y_input: u16, x_input: u16) -> Option<Self> {
        let mode = Mode::from_char(mode)?;
        let valid = 1..=MAX_DIMENSION;
        if !valid.contains(&x_input) || !valid.contains(&y_input) {
            return None;
        }
        Some(Self {
            x: x_input - 1,
            y: y_input - 1,
            mode,
        })
    }

    pub fn pos(&self) -> Pos {
        (self.x, self.y)
    }
}

/// Parses the prompt syntax `<mode> <x>,<y>`, e.g. `F 1,1` or `d 3, 2`.
impl FromStr for Guess {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidGuess(s.trim().to_owned());

        let s = s.trim();
        let mut chars = s.chars();
        let mode = chars.next().ok_or_else(invalid)?.to_ascii_uppercase();
        let (x, y) = chars.as_str().split_once(',').ok_or_else(invalid)?;
        let x: u16 = x.trim().parse().map_err(|_| invalid())?;
        let y: u16 = y.trim().parse().map_err(|_| invalid())?;

        Self::new(mode, y, x).ok_or_else(invalid)
    }
}
