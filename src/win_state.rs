use crate::generator::MINE;
use crate::grid::{FlagBoard, MineBoard};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum WinState {
    #[default]
    Playing,
    Lost,
    Won,
}

impl WinState {
    pub fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// True once every mine carries a flag. Flags on safe cells don't matter.
pub fn all_mines_flagged(mines: &MineBoard, flags: &FlagBoard) -> bool {
    debug_assert!(mines.same_shape(flags));
    mines
        .iter()
        .filter(|(_, v)| **v == MINE)
        .all(|(pos, _)| flags[pos])
}
