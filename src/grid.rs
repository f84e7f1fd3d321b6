//! Fixed-size, row-major grid addressed by signed coordinates.
//!
//! Coordinates are `i64` so neighbour arithmetic like `x - 1` can step off
//! the grid and be checked with [`Grid::contains`] instead of underflowing.

use std::ops::{Index, IndexMut};

use crate::error::{StreamError, StreamResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// A `width` × `height` grid with every cell set to `default`.
    pub fn new(width: usize, height: usize, default: T) -> Self {
        Grid {
            width,
            height,
            cells: vec![default; width * height],
        }
    }
}

impl<T> Grid<T> {
    /// Parses a block of text rows, mapping every character through `cell`.
    ///
    /// All rows must have the same number of characters.
    pub fn from_rows<S, F>(rows: &[S], mut cell: F) -> StreamResult<Self>
    where
        S: AsRef<str>,
        F: FnMut(char) -> T,
    {
        let width = rows.first().map_or(0, |row| row.as_ref().chars().count());
        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let before = cells.len();
            cells.extend(row.as_ref().chars().map(&mut cell));
            if cells.len() - before != width {
                return Err(StreamError::Parse(format!(
                    "grid row {} has {} cells, expected {}",
                    y,
                    cells.len() - before,
                    width
                )));
            }
        }
        Ok(Grid {
            width,
            height: rows.len(),
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        self.offset(x, y).is_some()
    }

    /// The cell at (`x`, `y`), or `None` off the grid.
    pub fn get(&self, x: i64, y: i64) -> Option<&T> {
        self.offset(x, y).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, x: i64, y: i64) -> Option<&mut T> {
        let i = self.offset(x, y)?;
        Some(&mut self.cells[i])
    }

    /// Overwrites a cell. Panics if (`x`, `y`) is off the grid.
    pub fn set(&mut self, x: i64, y: i64, value: T) {
        self[(x, y)] = value;
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks() rejects a zero chunk size
        self.cells.chunks(self.width.max(1))
    }

    fn offset(&self, x: i64, y: i64) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    fn offset_or_panic(&self, x: i64, y: i64) -> usize {
        match self.offset(x, y) {
            Some(i) => i,
            None => panic!(
                "({}, {}) is outside the {}x{} grid",
                x, y, self.width, self.height
            ),
        }
    }
}

impl<T> Index<(i64, i64)> for Grid<T> {
    type Output = T;

    fn index(&self, (x, y): (i64, i64)) -> &T {
        &self.cells[self.offset_or_panic(x, y)]
    }
}

impl<T> IndexMut<(i64, i64)> for Grid<T> {
    fn index_mut(&mut self, (x, y): (i64, i64)) -> &mut T {
        let i = self.offset_or_panic(x, y);
        &mut self.cells[i]
    }
}
