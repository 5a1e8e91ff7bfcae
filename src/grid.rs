use crate::util::{Pos, i_xy, xy_i};
use std::ops::{Index, IndexMut};

/// Largest supported board side.
pub const MAX_DIMENSION: u16 = u16::MAX;
/// Smallest supported board side, leaving room for the protected centre and one more cell.
pub const MIN_DIMENSION: u16 = 2;

/// Fixed size two dimensional cell store, row major.
///
/// Indexing with a position outside `width x height` panics: callers are expected to
/// bounds check with [`Grid::contains`] or use [`Grid::get`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    width: u16,
    height: u16,
    cells: Vec<T>,
}

/// Mine layout: `9` marks a mine, `0..=8` the number of adjacent mines.
pub type MineBoard = Grid<u8>;
/// Player flags.
pub type FlagBoard = Grid<bool>;
/// Cells shown to the player.
pub type RevealMask = Grid<bool>;

impl<T: Copy + Default> Grid<T> {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![T::default(); width as usize * height as usize],
        }
    }

    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }
}

impl<T> Grid<T> {
    /// Builds a grid from cells given row by row, starting at `y = 0`.
    pub fn from_cells(width: u16, height: u16, cells: Vec<T>) -> Option<Self> {
        if cells.len() == width as usize * height as usize {
            Some(Self {
                width,
                height,
                cells,
            })
        } else {
            None
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn dimensions(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn contains(&self, pos: Pos) -> bool {
        xy_i(pos, self.width, self.height).is_some()
    }

    pub fn same_shape<U>(&self, other: &Grid<U>) -> bool {
        self.dimensions() == other.dimensions()
    }

    pub fn get(&self, pos: Pos) -> Option<&T> {
        xy_i(pos, self.width, self.height).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, pos: Pos) -> Option<&mut T> {
        xy_i(pos, self.width, self.height).map(|i| &mut self.cells[i])
    }

    /// Every position, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<T> {
        let (w, h) = (self.width, self.height);
        (0..w as usize * h as usize).filter_map(move |i| i_xy(i, w, h))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pos, &T)> {
        self.positions().zip(self.cells.iter())
    }

    pub fn count(&self, mut predicate: impl FnMut(&T) -> bool) -> usize {
        self.cells.iter().filter(|c| predicate(c)).count()
    }

    fn index_of(&self, pos: Pos) -> usize {
        match xy_i(pos, self.width, self.height) {
            Some(i) => i,
            None => panic!(
                "cell {:?} out of bounds for {}x{} grid",
                pos, self.width, self.height
            ),
        }
    }
}

impl<T> Index<Pos> for Grid<T> {
    type Output = T;

    fn index(&self, pos: Pos) -> &T {
        &self.cells[self.index_of(pos)]
    }
}

impl<T> IndexMut<Pos> for Grid<T> {
    fn index_mut(&mut self, pos: Pos) -> &mut T {
        let i = self.index_of(pos);
        &mut self.cells[i]
    }
}
