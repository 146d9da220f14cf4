//! LIFO stack used for both the path and the frontier.

use crate::error::MazeError;

/// A Vec-backed LIFO stack whose `pop`/`peek` report
/// [`MazeError::EmptyStackAccess`] rather than returning `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Result<T, MazeError> {
        self.items.pop().ok_or(MazeError::EmptyStackAccess)
    }

    pub fn peek(&self) -> Result<&T, MazeError> {
        self.items.last().ok_or(MazeError::EmptyStackAccess)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate from the top of the stack down to the bottom
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter().rev()
    }

    /// Items from the bottom of the stack up to the top
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: PartialEq> Stack<T> {
    /// Remove the occurrence of `item` nearest the top.
    ///
    /// Returns `false` if it is not on the stack.
    pub fn remove(&mut self, item: &T) -> bool {
        match self.items.iter().rposition(|x| x == item) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifo_order() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);
        assert_eq!(stack.peek(), Ok(&3));
        assert_eq!(stack.pop(), Ok(3));
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_empty_access() {
        let mut stack: Stack<u8> = Stack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.peek(), Err(MazeError::EmptyStackAccess));
        assert_eq!(stack.pop(), Err(MazeError::EmptyStackAccess));
    }

    #[test]
    fn test_iter_top_down() {
        let mut stack = Stack::new();
        for i in 0..4 {
            stack.push(i);
        }
        let seen: Vec<i32> = stack.iter().copied().collect();
        assert_eq!(seen, vec![3, 2, 1, 0]);
        assert_eq!(stack.len(), 4, "iteration must not consume the stack");
    }

    #[test]
    fn test_remove_from_middle() {
        let mut stack = Stack::new();
        for i in [1, 2, 3] {
            stack.push(i);
        }
        assert!(stack.remove(&2));
        assert!(!stack.remove(&9));
        assert_eq!(stack.as_slice(), &[1, 3]);
    }
}
