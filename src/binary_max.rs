//! Binary max-heap over a resizable slot buffer
//!
//! The priority queue at the centre of this crate. Entries are `(priority, item)`
//! pairs kept in a [`SlotBuffer`] whose slots form an implicit binary tree:
//! slot `i` has parent `(i - 1) / 2` and children `2i + 1` and `2i + 2`.
//!
//! # Invariants
//!
//! After every public operation returns:
//! 1. `len() <= capacity()`
//! 2. every non-root slot's priority is `<=` its parent's priority
//! 3. the buffer's capacity never drops below `len()` and is never zero once
//!    an entry has been stored
//!
//! Ties are not broken by insertion order. Among equal priorities the slot
//! layout decides which entry is at the front.
//!
//! # Time Complexity
//!
//! | Operation | Complexity           |
//! |-----------|----------------------|
//! | `push`    | O(log n) amortized   |
//! | `pop`     | O(log n)             |
//! | `front`   | O(1)                 |
//! | `len`     | O(1)                 |
//!
//! # Example
//!
//! ```rust
//! use dynamic_containers::Heap;
//! use dynamic_containers::binary_max::BinaryMaxHeap;
//!
//! let mut heap = BinaryMaxHeap::new();
//! heap.push(5, 'A');
//! heap.push(3, 'B');
//! heap.push(8, 'C');
//! heap.push(3, 'D');
//!
//! assert_eq!(heap.front(), Ok(&'C'));
//! assert_eq!(heap.pop(), Ok((8, 'C')));
//! assert_eq!(heap.front(), Ok(&'A'));
//! ```

use log::debug;

use crate::storage::{GrowthPolicy, SlotBuffer};
use crate::traits::{Heap, HeapError};

/// A binary max-heap priority queue
///
/// This heap stores (priority, item) pairs and always yields an element with
/// the maximum priority first. Capacity grows by [`GrowthPolicy::HEAP`] unless
/// another policy is supplied through [`BinaryMaxHeap::with_policy`].
///
/// Cloning performs a deep copy of the live entries into an independent buffer.
#[derive(Debug, Clone)]
pub struct BinaryMaxHeap<T, P: Ord> {
    /// The heap data stored as (priority, item) slots
    data: SlotBuffer<(P, T)>,
}

impl<T, P: Ord> Heap<T, P> for BinaryMaxHeap<T, P> {
    fn new() -> Self {
        Self::with_policy(GrowthPolicy::HEAP)
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, priority: P, item: T) {
        self.data.push((priority, item));
        self.sift_up(self.data.len() - 1);
    }

    fn peek(&self) -> Option<(&P, &T)> {
        self.data.as_slice().first().map(|(p, t)| (p, t))
    }

    fn pop(&mut self) -> Result<(P, T), HeapError> {
        if self.data.is_empty() {
            debug!("pop rejected: heap is empty");
            return Err(HeapError::Empty);
        }

        // The last slot fills the root; a lone root is simply removed.
        let max = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Ok(max)
    }
}

impl<T, P: Ord> BinaryMaxHeap<T, P> {
    /// Creates an empty heap that grows according to `policy`
    pub fn with_policy(policy: GrowthPolicy) -> Self {
        Self {
            data: SlotBuffer::new(policy),
        }
    }

    /// Creates an empty heap with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: SlotBuffer::with_capacity(capacity, GrowthPolicy::HEAP),
        }
    }

    /// Number of allocated slots
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reallocates the slot buffer to `target` slots
    ///
    /// The target is clamped up to `len()` and up to 1, so live entries are
    /// never lost and capacity never becomes zero. Slot order is preserved.
    pub fn resize(&mut self, target: usize) {
        self.data.resize(target);
    }

    /// Iterates over the live entries in slot (array) order
    ///
    /// Slot order is heap order, not priority order: only the first entry is
    /// guaranteed to be a maximum.
    pub fn iter(&self) -> impl Iterator<Item = (&P, &T)> + '_ {
        self.data.iter().map(|(p, t)| (p, t))
    }

    /// Live slots in array order
    pub(crate) fn slots(&self) -> &[(P, T)] {
        self.data.as_slice()
    }

    #[inline]
    fn priority(&self, index: usize) -> &P {
        &self.data.as_slice()[index].0
    }

    /// Index of the parent of slot `index`
    #[inline]
    pub(crate) fn parent_index(index: usize) -> usize {
        debug_assert!(index > 0, "the root has no parent");
        (index - 1) / 2
    }

    /// True if slot `index` has no in-range children
    #[inline]
    pub(crate) fn is_leaf(&self, index: usize) -> bool {
        let len = self.data.len();
        2 * index + 1 >= len && 2 * index + 2 >= len
    }

    /// Index of the larger child of a non-leaf slot
    ///
    /// The right child wins only if it exists and its priority strictly
    /// exceeds the left child's; a lone child or a tie yields the left child.
    pub(crate) fn big_child_index(&self, index: usize) -> usize {
        debug_assert!(!self.is_leaf(index), "a leaf has no children");
        let left = 2 * index + 1;
        let right = 2 * index + 2;
        if right < self.data.len() && self.priority(right) > self.priority(left) {
            right
        } else {
            left
        }
    }

    /// Move element at index up while it strictly exceeds its parent
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = Self::parent_index(index);
            if self.priority(index) > self.priority(parent) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down while its bigger child strictly exceeds it
    fn sift_down(&mut self, mut index: usize) {
        while !self.is_leaf(index) {
            let child = self.big_child_index(index);
            if self.priority(index) >= self.priority(child) {
                break;
            }
            self.data.swap(index, child);
            index = child;
        }
    }
}

impl<T, P: Ord> Default for BinaryMaxHeap<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Ord> Extend<(P, T)> for BinaryMaxHeap<T, P> {
    fn extend<I: IntoIterator<Item = (P, T)>>(&mut self, iter: I) {
        for (priority, item) in iter {
            self.push(priority, item);
        }
    }
}

impl<T, P: Ord> FromIterator<(P, T)> for BinaryMaxHeap<T, P> {
    fn from_iter<I: IntoIterator<Item = (P, T)>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}
