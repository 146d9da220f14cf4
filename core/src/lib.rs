//! Maze model and depth-first path search
//!
//! This crate provides the cell-state model, a fixed-size grid, the LIFO
//! stacks the search runs on and the search itself. It has no I/O; the
//! `maze-host` crate loads maze descriptions and reports results.
//!
//! ```
//! use maze_core::Maze;
//!
//! let mut maze = Maze::new(3, 3);
//! maze.set_wall(1, 1).unwrap();
//! maze.set_start(0, 0).unwrap();
//! maze.set_exit(2, 2).unwrap();
//!
//! assert!(maze.find_path().unwrap());
//! println!("{}", maze);
//! ```

pub mod cell;
pub mod error;
pub mod frontier;
pub mod grid;
pub mod maze;
pub mod search;
pub mod stack;

// Re-export commonly used types for convenience
pub use cell::{Cell, Direction, Position, OPEN_TOKEN, PATH_TOKEN, TRIED_TOKEN, WALL_TOKEN};
pub use error::MazeError;
pub use frontier::Frontier;
pub use grid::Grid;
pub use maze::{Maze, Neighbors};
pub use search::Solution;
pub use stack::Stack;
