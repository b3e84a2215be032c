//! Reserve stack: pieces set aside for later, last in first out

use crate::error::ContainerError;
use crate::piece::Piece;

/// Fixed-capacity LIFO of pieces
#[derive(Debug, Clone)]
pub struct ReserveStack {
    /// Base at index 0, top at the end
    items: Vec<Piece>,
    capacity: usize,
}

impl ReserveStack {
    /// Create an empty stack.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "ReserveStack capacity must be > 0");
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Place a piece on top
    pub fn push(&mut self, piece: Piece) -> Result<(), ContainerError> {
        if self.is_full() {
            return Err(ContainerError::CapacityExceeded);
        }
        self.items.push(piece);
        Ok(())
    }

    /// Remove and return the top piece
    pub fn pop(&mut self) -> Result<Piece, ContainerError> {
        self.items.pop().ok_or(ContainerError::Empty)
    }

    pub fn peek_top(&self) -> Option<&Piece> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Pieces top first
    pub fn snapshot(&self) -> Vec<Piece> {
        self.items.iter().rev().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::PieceFactory;

    #[test]
    fn test_lifo_order() {
        let mut factory = PieceFactory::with_seed(11);
        let mut stack = ReserveStack::new(3);
        let a = factory.generate();
        let b = factory.generate();
        stack.push(a).unwrap();
        stack.push(b).unwrap();
        assert_eq!(stack.peek_top(), Some(&b));
        assert_eq!(stack.snapshot(), vec![b, a]);
        assert_eq!(stack.pop(), Ok(b));
        assert_eq!(stack.pop(), Ok(a));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_push_full_rejected() {
        let mut factory = PieceFactory::with_seed(11);
        let mut stack = ReserveStack::new(3);
        for _ in 0..3 {
            stack.push(factory.generate()).unwrap();
        }
        assert!(stack.is_full());
        let before = stack.snapshot();
        assert_eq!(
            stack.push(factory.generate()),
            Err(ContainerError::CapacityExceeded)
        );
        assert_eq!(stack.snapshot(), before);
        assert_eq!(stack.len(), 3);
    }

    #[test]
    fn test_pop_empty_rejected() {
        let mut stack = ReserveStack::new(2);
        assert_eq!(stack.pop(), Err(ContainerError::Empty));
        assert_eq!(stack.pop(), Err(ContainerError::Empty));
        assert_eq!(stack.len(), 0);
        assert!(stack.snapshot().is_empty());
    }
}
