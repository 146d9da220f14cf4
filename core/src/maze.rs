//! Maze engine: the grid of cell markers plus start and exit positions.

use std::fmt;

use crate::cell::{Cell, Direction, Position};
use crate::error::MazeError;
use crate::grid::Grid;

/// A rectangular maze that can be solved with [`Maze::find_path`].
///
/// The grid is allocated once, all cells `Open`. Walls, start and exit are
/// configured through the setters; start and exit only record positions and
/// never change the marker of the cell they point at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    pub(crate) cells: Grid<Cell>,
    pub(crate) start: Option<Position>,
    pub(crate) exit: Option<Position>,
}

impl Maze {
    /// Create a maze with every cell open and no start or exit
    pub fn new(num_rows: usize, num_cols: usize) -> Self {
        Self {
            cells: Grid::new(num_rows, num_cols, Cell::Open),
            start: None,
            exit: None,
        }
    }

    pub fn num_rows(&self) -> usize {
        self.cells.num_rows()
    }

    pub fn num_cols(&self) -> usize {
        self.cells.num_cols()
    }

    /// Fill the given cell with a wall marker
    pub fn set_wall(&mut self, row: usize, col: usize) -> Result<(), MazeError> {
        self.cells.set(row, col, Cell::Wall)
    }

    pub fn set_start(&mut self, row: usize, col: usize) -> Result<(), MazeError> {
        self.start = Some(self.checked(row, col)?);
        Ok(())
    }

    pub fn set_exit(&mut self, row: usize, col: usize) -> Result<(), MazeError> {
        self.exit = Some(self.checked(row, col)?);
        Ok(())
    }

    pub fn start(&self) -> Option<Position> {
        self.start
    }

    pub fn exit(&self) -> Option<Position> {
        self.exit
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, MazeError> {
        self.cells.get(row, col)
    }

    /// Clear every `Tried` and `Path` marker so the maze can be solved again.
    ///
    /// Walls, start and exit are left as they are.
    pub fn reset(&mut self) {
        self.cells.update_all(|cell| {
            if cell.is_search_mark() {
                Cell::Open
            } else {
                cell
            }
        });
        tracing::trace!("Maze reset ({}x{})", self.num_rows(), self.num_cols());
    }

    /// Text rendering: one line per row, cells space-separated
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// All cells currently marked as lying on the solution path, row-major
    pub fn path_cells(&self) -> Vec<Position> {
        self.positions_marked(Cell::Path)
    }

    /// All cells currently holding `marker`, row-major
    pub fn positions_marked(&self, marker: Cell) -> Vec<Position> {
        let mut found = Vec::new();
        for (row, cells) in self.cells.rows().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == marker {
                    found.push(Position::new(row, col));
                }
            }
        }
        found
    }

    /// Open, in-bounds cardinal neighbors of `pos`.
    ///
    /// Cells are examined North, East, South, West and returned in the
    /// reverse of that order. Pushing them onto the frontier one by one
    /// therefore leaves North on top.
    pub fn neighbors(&self, pos: Position) -> Neighbors {
        let mut found = Neighbors::default();

        for dir in Direction::ALL {
            let next = pos.step(dir);
            // Out-of-bounds steps (including wrapped ones) fail the lookup
            if matches!(self.cells.get(next.row, next.col), Ok(cell) if cell.is_open()) {
                found.push(next);
            }
        }

        found.cells[..found.len].reverse();
        found
    }

    pub(crate) fn mark(&mut self, pos: Position, marker: Cell) -> Result<(), MazeError> {
        self.cells.set(pos.row, pos.col, marker)
    }

    fn checked(&self, row: usize, col: usize) -> Result<Position, MazeError> {
        if self.cells.contains(row, col) {
            Ok(Position::new(row, col))
        } else {
            Err(MazeError::OutOfRange {
                row,
                col,
                num_rows: self.num_rows(),
                num_cols: self.num_cols(),
            })
        }
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell.token())?;
            }
        }
        Ok(())
    }
}

/// Up to four neighbor positions, stored inline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Neighbors {
    cells: [Position; 4],
    len: usize,
}

impl Neighbors {
    fn push(&mut self, pos: Position) {
        self.cells[self.len] = pos;
        self.len += 1;
    }

    pub fn as_slice(&self) -> &[Position] {
        &self.cells[..self.len]
    }

    pub fn contains(&self, pos: &Position) -> bool {
        self.as_slice().contains(pos)
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }
}

impl IntoIterator for Neighbors {
    type Item = Position;
    type IntoIter = std::iter::Take<std::array::IntoIter<Position, 4>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter().take(self.len)
    }
}
