use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use crate::data::Pos;

/// Row-major grid. Equality and hashing go through the cells (and the dimensions,
/// which are constant within one puzzle anyway).
#[derive(Clone, PartialEq, Eq, Hash)]
pub(crate) struct Vec2d<T> {
    data: Vec<T>,
    rows: u8,
    cols: u8,
}

impl<T> Vec2d<T> {
    pub(crate) fn rows(&self) -> u8 {
        self.rows
    }

    pub(crate) fn cols(&self) -> u8 {
        self.cols
    }

    pub(crate) fn contains(&self, pos: Pos) -> bool {
        pos.r < self.rows && pos.c < self.cols
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    fn index_of(&self, pos: Pos) -> usize {
        debug_assert!(self.contains(pos), "{:?} outside of {}x{}", pos, self.rows, self.cols);
        usize::from(pos.r) * usize::from(self.cols) + usize::from(pos.c)
    }
}

impl<T: Clone> Vec2d<T> {
    /// The caller makes sure both dimensions are at most `MAX_SIZE`.
    pub(crate) fn new(rows: u8, cols: u8, default: T) -> Self {
        Vec2d {
            data: vec![default; usize::from(rows) * usize::from(cols)],
            rows,
            cols,
        }
    }
}

impl<T: Display> Display for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.chunks(usize::from(self.cols)).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

impl<T: Debug> Debug for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(usize::from(self.cols)) {
            writeln!(f, "{:?}", row)?;
        }
        Ok(())
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, index: Pos) -> &Self::Output {
        let index = self.index_of(index);
        &self.data[index]
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        let index = self.index_of(index);
        &mut self.data[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexing_row_major() {
        let mut grid = Vec2d::new(2, 3, 0);
        grid[Pos::new(1, 2)] = 7;
        grid[Pos::new(0, 1)] = 3;
        assert_eq!(grid.iter().cloned().collect::<Vec<_>>(), vec![0, 3, 0, 0, 0, 7]);
        assert!(grid.contains(Pos::new(1, 2)));
        assert!(!grid.contains(Pos::new(2, 0)));
        assert!(!grid.contains(Pos::new(0, 3)));
    }

    #[test]
    fn formatting() {
        let mut grid = Vec2d::new(2, 3, 0);
        grid[Pos::new(1, 0)] = 5;
        assert_eq!(grid.to_string(), "0 0 0\n5 0 0");
        assert_eq!(format!("{:?}", grid), "[0, 0, 0]\n[5, 0, 0]\n");
    }
}
