//! Common traits for priority queue data structures
//!
//! [`Heap`] is the programmatic contract of a max-priority queue that stores
//! `(priority, item)` pairs: the item is an opaque payload and the priority is
//! any totally ordered key. It mirrors the shape of `std::collections::BinaryHeap`
//! (also a max-heap) while keeping the ordering key separate from the data.
//!
//! Accessing the front of an empty queue is a caller contract violation. It is
//! reported as [`HeapError::Empty`] and is always detected before any state is
//! touched.

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// `front` or `pop` was called on a heap with no entries
    #[error("operation requires a non-empty heap")]
    Empty,
}

/// Base trait for max-priority queues
///
/// - `push` inserts an entry
/// - `pop` removes and returns an entry of maximum priority
/// - `front` returns the payload of a maximum-priority entry
///
/// Entries with equal priority leave the queue in an unspecified relative order.
///
/// # Example
///
/// ```rust
/// use dynamic_containers::Heap;
/// use dynamic_containers::binary_max::BinaryMaxHeap;
///
/// let mut heap = BinaryMaxHeap::new();
/// heap.push(3, "three");
/// heap.push(1, "one");
/// heap.push(2, "two");
///
/// assert_eq!(heap.front(), Ok(&"three"));
/// assert_eq!(heap.pop(), Ok((3, "three")));
/// assert_eq!(heap.len(), 2);
/// ```
pub trait Heap<T, P: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element with the given priority
    ///
    /// # Time Complexity
    /// O(log n), amortized over buffer growth.
    fn push(&mut self, priority: P, item: T);

    /// Returns the maximum priority and associated item without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<(&P, &T)>;

    /// Returns the item with maximum priority without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap holds no entries.
    fn front<'a>(&'a self) -> Result<&'a T, HeapError>
    where
        P: 'a,
    {
        self.peek().map(|(_, item)| item).ok_or(HeapError::Empty)
    }

    /// Removes and returns an entry of maximum priority
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap holds no entries; the heap is
    /// left untouched in that case.
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Result<(P, T), HeapError>;
}
