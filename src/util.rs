/// Column and row of a cell, zero based.
pub type Pos = (u16, u16);

pub const DIRS_8: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

pub fn xy_i((x, y): Pos, w: u16, h: u16) -> Option<usize> {
    if w <= x || h <= y {
        None
    } else {
        Some(y as usize * w as usize + x as usize)
    }
}

pub fn i_xy(index: usize, w: u16, h: u16) -> Option<Pos> {
    let ws = w as usize;
    let hs = h as usize;
    if ws == 0 || index >= (ws * hs) {
        None
    } else {
        Some(((index % ws) as u16, (index / ws) as u16))
    }
}

/// Neighbours of `(x, y)` in the given directions that fall inside a `w` x `h` board.
///
/// Offsets that would leave the board are dropped, never clamped onto an edge.
pub fn valid_neighbors(
    dirs: &[(i8, i8)],
    (x, y): Pos,
    w: u16,
    h: u16,
) -> impl Iterator<Item = Pos> {
    dirs.iter()
        .map(|(dx, dy)| (*dx as i16, *dy as i16))
        .filter_map(move |(dx, dy)| Some((x.checked_add_signed(dx)?, y.checked_add_signed(dy)?)))
        .filter(move |(i, j)| w > *i && h > *j)
}
