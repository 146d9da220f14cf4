//! Fixed-size, bounds-checked 2-D storage.

use crate::error::MazeError;

/// A `num_rows` x `num_cols` grid stored row-major in a flat buffer.
///
/// Dimensions are fixed at construction; every access is bounds-checked
/// and reports [`MazeError::OutOfRange`] instead of panicking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Vec<T>,
    num_rows: usize,
    num_cols: usize,
}

impl<T: Copy> Grid<T> {
    /// Allocate a grid with every cell set to `fill`
    pub fn new(num_rows: usize, num_cols: usize, fill: T) -> Self {
        Self {
            cells: vec![fill; num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.num_rows && col < self.num_cols
    }

    pub fn get(&self, row: usize, col: usize) -> Result<T, MazeError> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx])
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), MazeError> {
        let idx = self.index(row, col)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Rewrite every cell in place
    pub fn update_all(&mut self, mut f: impl FnMut(T) -> T) {
        for cell in self.cells.iter_mut() {
            *cell = f(*cell);
        }
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        (0..self.num_rows).map(move |row| {
            let begin = row * self.num_cols;
            &self.cells[begin..begin + self.num_cols]
        })
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, MazeError> {
        if !self.contains(row, col) {
            return Err(MazeError::OutOfRange {
                row,
                col,
                num_rows: self.num_rows,
                num_cols: self.num_cols,
            });
        }
        Ok(row * self.num_cols + col)
    }
}
