//! Deduplicating frontier stack.
//!
//! Candidate cells are inserted with a "reinsert-to-top" push: a cell that
//! is already waiting somewhere on the stack is lifted to the top instead of
//! being added twice. The freshest discovery of a cell therefore always
//! shadows older ones made from other branches of the path.

use std::collections::HashSet;

use crate::cell::Position;
use crate::error::MazeError;
use crate::stack::Stack;

/// LIFO stack of candidate positions that never holds a duplicate.
///
/// A membership set sits beside the stack so the common case (a cell not
/// yet on the frontier) is decided without scanning.
#[derive(Clone, Debug, Default)]
pub struct Frontier {
    stack: Stack<Position>,
    members: HashSet<Position>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `pos` so it ends up on top, dropping any older occurrence.
    pub fn push(&mut self, pos: Position) {
        if let Ok(top) = self.stack.peek() {
            if *top == pos {
                return;
            }
        }

        if !self.members.insert(pos) {
            self.stack.remove(&pos);
        }
        self.stack.push(pos);
    }

    pub fn pop(&mut self) -> Result<Position, MazeError> {
        let pos = self.stack.pop()?;
        self.members.remove(&pos);
        Ok(pos)
    }

    pub fn peek(&self) -> Result<Position, MazeError> {
        self.stack.peek().copied()
    }

    pub fn contains(&self, pos: &Position) -> bool {
        self.members.contains(pos)
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Iterate from the top of the frontier down
    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.stack.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_push_on_empty() {
        let mut frontier = Frontier::new();
        frontier.push(p(0, 1));
        assert_eq!(frontier.peek(), Ok(p(0, 1)));
        assert_eq!(frontier.len(), 1);
    }

    #[test]
    fn test_push_same_as_top_is_noop() {
        let mut frontier = Frontier::new();
        frontier.push(p(0, 1));
        frontier.push(p(0, 1));
        assert_eq!(frontier.len(), 1);
    }

    #[test]
    fn test_reinsert_lifts_to_top() {
        let mut frontier = Frontier::new();
        frontier.push(p(1, 0));
        frontier.push(p(0, 1));
        frontier.push(p(2, 2));
        frontier.push(p(1, 0));

        let order: Vec<Position> = frontier.iter().copied().collect();
        assert_eq!(order, vec![p(1, 0), p(2, 2), p(0, 1)]);
        assert_eq!(frontier.len(), 3, "frontier must not hold duplicates");
    }

    #[test]
    fn test_pop_clears_membership() {
        let mut frontier = Frontier::new();
        frontier.push(p(0, 0));
        frontier.push(p(0, 1));
        assert_eq!(frontier.pop(), Ok(p(0, 1)));
        assert!(!frontier.contains(&p(0, 1)));
        assert!(frontier.contains(&p(0, 0)));

        // A popped cell pushed again is a plain push, not a reinsert
        frontier.push(p(0, 1));
        assert_eq!(frontier.len(), 2);
    }

    #[test]
    fn test_empty_access() {
        let mut frontier = Frontier::new();
        assert!(frontier.is_empty());
        assert_eq!(frontier.pop(), Err(MazeError::EmptyStackAccess));
        assert_eq!(frontier.peek(), Err(MazeError::EmptyStackAccess));
    }
}
