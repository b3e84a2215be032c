//! Lookahead queue: fixed-capacity circular buffer of upcoming pieces
//!
//! Slots are a boxed array sized once at construction. `front` points at the
//! next piece to leave, `back` at the slot the next arrival goes into, and
//! `len` is tracked explicitly because `front == back` holds both when the
//! queue is empty and when it is full.

use crate::error::ContainerError;
use crate::factory::PieceFactory;
use crate::piece::Piece;

/// Fixed-capacity FIFO of pieces
#[derive(Debug, Clone)]
pub struct PieceQueue {
    slots: Box<[Option<Piece>]>,
    front: usize,
    back: usize,
    len: usize,
}

impl PieceQueue {
    /// Create an empty queue.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "PieceQueue capacity must be > 0");
        Self {
            slots: vec![None; capacity].into_boxed_slice(),
            front: 0,
            back: 0,
            len: 0,
        }
    }

    /// Create a queue pre-filled with `capacity` freshly generated pieces,
    /// stored in generation order.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn initialize(capacity: usize, factory: &mut PieceFactory) -> Self {
        let mut queue = Self::with_capacity(capacity);
        for slot in queue.slots.iter_mut() {
            *slot = Some(factory.generate());
        }
        // Full: back has wrapped around onto front
        queue.len = capacity;
        queue
    }

    /// Append a piece at the back
    pub fn enqueue(&mut self, piece: Piece) -> Result<(), ContainerError> {
        if self.is_full() {
            return Err(ContainerError::CapacityExceeded);
        }
        self.slots[self.back] = Some(piece);
        self.back = (self.back + 1) % self.capacity();
        self.len += 1;
        Ok(())
    }

    /// Remove and return the piece at the front
    pub fn dequeue(&mut self) -> Result<Piece, ContainerError> {
        if self.is_empty() {
            return Err(ContainerError::Empty);
        }
        let piece = self.slots[self.front].take().ok_or(ContainerError::Empty)?;
        self.front = (self.front + 1) % self.capacity();
        self.len -= 1;
        Ok(piece)
    }

    /// The piece that would be dequeued next
    pub fn peek_front(&self) -> Option<&Piece> {
        if self.is_empty() {
            None
        } else {
            self.slots[self.front].as_ref()
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Iterate from front to back without consuming
    pub fn iter(&self) -> impl Iterator<Item = &Piece> + '_ {
        (0..self.len).filter_map(move |offset| {
            let index = (self.front + offset) % self.capacity();
            self.slots[index].as_ref()
        })
    }

    /// Pieces in order, front first
    pub fn snapshot(&self) -> Vec<Piece> {
        self.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(queue: &PieceQueue) -> Vec<u64> {
        queue.iter().map(|p| p.id()).collect()
    }

    #[test]
    fn test_initialize_fills_in_order() {
        for capacity in 1..=8 {
            let mut factory = PieceFactory::with_seed(3);
            let queue = PieceQueue::initialize(capacity, &mut factory);
            assert_eq!(queue.len(), capacity);
            assert!(queue.is_full());
            let expected: Vec<u64> = (0..capacity as u64).collect();
            assert_eq!(ids(&queue), expected);
        }
    }

    #[test]
    fn test_initialized_queue_cycles_in_order() {
        let mut factory = PieceFactory::with_seed(3);
        let mut queue = PieceQueue::initialize(3, &mut factory);
        assert_eq!(queue.enqueue(factory.generate()), Err(ContainerError::CapacityExceeded));
        for _ in 0..3 {
            let front = queue.dequeue().unwrap();
            queue.enqueue(factory.generate()).unwrap();
            assert!(queue.is_full());
            assert_eq!(queue.snapshot().last().map(|p| p.id()), Some(front.id() + 4));
        }
        assert_eq!(ids(&queue), vec![4, 5, 6]);
    }

    #[test]
    fn test_dequeue_returns_front() {
        let mut factory = PieceFactory::with_seed(3);
        let mut queue = PieceQueue::initialize(5, &mut factory);
        let front = *queue.peek_front().unwrap();
        assert_eq!(queue.dequeue(), Ok(front));
        assert_eq!(front.id(), 0);
        assert_eq!(queue.len(), 4);
        assert_eq!(queue.peek_front().unwrap().id(), 1);
    }

    #[test]
    fn test_dequeue_empty_is_rejected_repeatedly() {
        let mut queue = PieceQueue::with_capacity(3);
        for _ in 0..3 {
            assert_eq!(queue.dequeue(), Err(ContainerError::Empty));
            assert_eq!(queue.len(), 0);
        }
        assert!(queue.peek_front().is_none());
    }

    #[test]
    fn test_enqueue_full_leaves_contents() {
        let mut factory = PieceFactory::with_seed(9);
        let mut queue = PieceQueue::initialize(5, &mut factory);
        let before = queue.snapshot();
        let extra = factory.generate();
        assert_eq!(queue.enqueue(extra), Err(ContainerError::CapacityExceeded));
        assert_eq!(queue.snapshot(), before);
        assert_eq!(queue.len(), 5);
    }

    #[test]
    fn test_wraps_around() {
        let mut factory = PieceFactory::with_seed(5);
        let mut queue = PieceQueue::initialize(3, &mut factory);
        // Cycle through the buffer several times
        for _ in 0..10 {
            queue.dequeue().unwrap();
            queue.enqueue(factory.generate()).unwrap();
        }
        assert_eq!(ids(&queue), vec![10, 11, 12]);
        assert_eq!(queue.peek_front().unwrap().id(), 10);
    }

    #[test]
    fn test_drain_then_refill() {
        let mut factory = PieceFactory::with_seed(5);
        let mut queue = PieceQueue::initialize(4, &mut factory);
        queue.dequeue().unwrap();
        queue.dequeue().unwrap();
        assert_eq!(ids(&queue), vec![2, 3]);
        while queue.dequeue().is_ok() {}
        assert!(queue.is_empty());
        queue.enqueue(factory.generate()).unwrap();
        assert_eq!(ids(&queue), vec![4]);
        assert!(!queue.is_full());
    }

    #[test]
    #[should_panic]
    fn test_zero_capacity_panics() {
        let _ = PieceQueue::with_capacity(0);
    }
}
