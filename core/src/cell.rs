//! Cell markers, positions and the four cardinal directions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Marker character for a wall cell
pub const WALL_TOKEN: char = '*';
/// Marker character for a cell on the solution path
pub const PATH_TOKEN: char = 'x';
/// Marker character for a cell visited by the search
pub const TRIED_TOKEN: char = 'o';
/// Filler character for an unmarked cell
pub const OPEN_TOKEN: char = '_';

/// The state held by a single maze cell.
///
/// Cells start `Open`. The search moves them to `Tried` and, once the exit
/// is reached, the cells of the winning route to `Path`. Only
/// [`Maze::reset`](crate::Maze::reset) moves them back, and walls are never
/// touched by either.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Open,
    Wall,
    Tried,
    Path,
}

impl Cell {
    /// Character used when rendering this cell
    pub fn token(self) -> char {
        match self {
            Cell::Open => OPEN_TOKEN,
            Cell::Wall => WALL_TOKEN,
            Cell::Tried => TRIED_TOKEN,
            Cell::Path => PATH_TOKEN,
        }
    }

    /// Inverse of [`Cell::token`]
    pub fn from_token(token: char) -> Option<Self> {
        match token {
            OPEN_TOKEN => Some(Cell::Open),
            WALL_TOKEN => Some(Cell::Wall),
            TRIED_TOKEN => Some(Cell::Tried),
            PATH_TOKEN => Some(Cell::Path),
            _ => None,
        }
    }

    /// Whether the search may still step onto this cell
    pub fn is_open(self) -> bool {
        self == Cell::Open
    }

    /// Whether [`Maze::reset`](crate::Maze::reset) clears this marker
    pub fn is_search_mark(self) -> bool {
        matches!(self, Cell::Tried | Cell::Path)
    }
}

/// A zero-based (row, column) grid coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The adjacent coordinate in `dir`.
    ///
    /// Stepping off the top or left edge wraps to `usize::MAX`, which every
    /// bounds check rejects.
    pub fn step(self, dir: Direction) -> Self {
        let (dr, dc) = dir.delta();
        Self {
            row: self.row.wrapping_add_signed(dr),
            col: self.col.wrapping_add_signed(dc),
        }
    }

    /// True when `other` is one cardinal step away
    pub fn is_adjacent(self, other: Position) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Cardinal directions, in the order neighbors are examined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Discovery order used by the neighbor generator
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// (row delta, column delta)
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }
}
