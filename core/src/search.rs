//! Depth-first path search with explicit backtracking.
//!
//! Two stacks drive the search:
//! 1. The path stack holds the route from start to the current cell
//! 2. The frontier holds every discovered, not yet visited cell
//!
//! Each step pops the frontier and walks onto that cell. At a dead end the
//! path stack is unwound until its top is adjacent to the next frontier
//! cell, so the route always stays connected. Unwound cells keep their
//! `Tried` marker.

use crate::cell::{Cell, Position};
use crate::error::MazeError;
use crate::frontier::Frontier;
use crate::maze::Maze;
use crate::stack::Stack;

/// Outcome of a call to [`Maze::solve`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    /// Whether the exit was reached
    pub found: bool,
    /// Route from start to exit inclusive; empty when not found
    pub path: Vec<Position>,
    /// Every cell the search stepped onto, in visit order
    pub visited: Vec<Position>,
}

impl Solution {
    fn not_found(visited: Vec<Position>) -> Self {
        Self {
            found: false,
            path: Vec::new(),
            visited,
        }
    }
}

impl Maze {
    /// Search for a path from start to exit.
    ///
    /// Returns `Ok(true)` and marks the route with `Path` markers when the
    /// exit is reachable, `Ok(false)` otherwise. Fails only if start or exit
    /// has not been set.
    pub fn find_path(&mut self) -> Result<bool, MazeError> {
        self.solve().map(|solution| solution.found)
    }

    /// Like [`Maze::find_path`], but also reports the route and visit order.
    pub fn solve(&mut self) -> Result<Solution, MazeError> {
        let start = self
            .start
            .ok_or(MazeError::PreconditionFailed("start cell has not been set"))?;
        let exit = self
            .exit
            .ok_or(MazeError::PreconditionFailed("exit cell has not been set"))?;

        tracing::debug!("Searching {}x{} maze from {} to {}", self.num_rows(), self.num_cols(), start, exit);

        if self.cell(start.row, start.col)? == Cell::Wall {
            tracing::debug!("Start cell {} is a wall", start);
            return Ok(Solution::not_found(Vec::new()));
        }

        if start == exit {
            self.mark(start, Cell::Path)?;
            return Ok(Solution {
                found: true,
                path: vec![start],
                visited: vec![start],
            });
        }

        let capacity = self.num_rows() * self.num_cols();
        let mut path = Stack::with_capacity(capacity);
        let mut frontier = Frontier::new();
        let mut visited = Vec::new();

        self.visit(start, &mut path, &mut visited)?;
        for next in self.neighbors(start) {
            frontier.push(next);
        }

        while !frontier.is_empty() {
            let Some(current) = self.next_candidate(&mut frontier)? else {
                break;
            };

            self.visit(current, &mut path, &mut visited)?;

            if current == exit {
                let route = self.mark_route(&mut path)?;
                tracing::debug!("Exit reached: route of {} cells, {} visited", route.len(), visited.len());
                return Ok(Solution {
                    found: true,
                    path: route,
                    visited,
                });
            }

            let moves = self.neighbors(current);
            if !moves.is_empty() {
                for next in moves {
                    frontier.push(next);
                }
                continue;
            }

            // Dead end
            if frontier.is_empty() || !self.backtrack(&mut path, &frontier)? {
                break;
            }
        }

        tracing::debug!("No path found after visiting {} cells", visited.len());
        Ok(Solution::not_found(visited))
    }

    fn visit(
        &mut self,
        pos: Position,
        path: &mut Stack<Position>,
        visited: &mut Vec<Position>,
    ) -> Result<(), MazeError> {
        self.mark(pos, Cell::Tried)?;
        path.push(pos);
        visited.push(pos);
        tracing::trace!("Visit {} (path length {})", pos, path.len());
        Ok(())
    }

    /// Pop frontier entries until one that has not been visited yet.
    ///
    /// The frontier never holds duplicates and cells leave it before they
    /// are visited, so a stale entry is not expected; any that show up are
    /// discarded rather than walked onto a second time.
    fn next_candidate(&self, frontier: &mut Frontier) -> Result<Option<Position>, MazeError> {
        while !frontier.is_empty() {
            let pos = frontier.pop()?;
            if self.cell(pos.row, pos.col)? != Cell::Tried {
                return Ok(Some(pos));
            }
            tracing::trace!("Discarding stale frontier entry {}", pos);
        }
        Ok(None)
    }

    /// Unwind the path until its top can step onto the frontier's top.
    ///
    /// Returns `false` when the path empties first.
    fn backtrack(&self, path: &mut Stack<Position>, frontier: &Frontier) -> Result<bool, MazeError> {
        let target = frontier.peek()?;

        loop {
            let top = *path.peek()?;
            if self.neighbors(top).contains(&target) {
                tracing::trace!("Backtracked to {} towards {}", top, target);
                return Ok(true);
            }
            path.pop()?;
            if path.is_empty() {
                return Ok(false);
            }
        }
    }

    /// Drain the path stack, marking each cell, and return it start-first
    fn mark_route(&mut self, path: &mut Stack<Position>) -> Result<Vec<Position>, MazeError> {
        let mut route = Vec::with_capacity(path.len());
        while !path.is_empty() {
            let pos = path.pop()?;
            self.mark(pos, Cell::Path)?;
            route.push(pos);
        }
        route.reverse();
        Ok(route)
    }
}
