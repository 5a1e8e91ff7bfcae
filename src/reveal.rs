use crate::grid::{FlagBoard, MineBoard, RevealMask};
use crate::util::{DIRS_8, Pos, valid_neighbors};

/// Reveals `origin` and cascades through connected zero cells.
///
/// Already revealed and flagged cells are left alone, as are positions off the board.
/// Zero cells push all their neighbours, so the numbered border of a zero region is
/// revealed too, but nothing past it. Returns how many cells were newly revealed.
pub fn reveal_from(
    mines: &MineBoard,
    flags: &FlagBoard,
    mask: &mut RevealMask,
    origin: Pos,
) -> usize {
    debug_assert!(mines.same_shape(flags) && mines.same_shape(mask));
    let (w, h) = mines.dimensions();

    let mut revealed = 0;
    let mut stack = vec![origin];
    while let Some(pos) = stack.pop() {
        let (Some(false), Some(false)) = (mask.get(pos).copied(), flags.get(pos).copied()) else {
            continue;
        };
        mask[pos] = true;
        revealed += 1;

        if mines[pos] == 0 {
            stack.extend(valid_neighbors(&DIRS_8, pos, w, h).filter(|n| !mask[*n]));
        }
    }

    log::trace!("reveal at {origin:?} uncovered {revealed} cells");
    revealed
}
