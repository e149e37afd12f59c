//! Cursor-based sequence over a growable slot buffer
//!
//! A [`Sequence`] is an ordered list with an internal cursor. The cursor either
//! designates the *current item* or sits past the end, in which case there is
//! no current item. Insertions always make the new entry current:
//!
//! - [`Sequence::insert`] places the entry before the current item, or at the
//!   front when there is none
//! - [`Sequence::attach`] places the entry after the current item, or at the
//!   end when there is none
//!
//! Storage grows by [`GrowthPolicy::SEQUENCE`].
//!
//! # Example
//!
//! ```rust
//! use dynamic_containers::sequence::Sequence;
//!
//! let mut seq = Sequence::new();
//! seq.attach(1);
//! seq.attach(3);
//! seq.insert(2);
//!
//! seq.start();
//! let mut seen = Vec::new();
//! while let Ok(item) = seq.current() {
//!     seen.push(*item);
//!     seq.advance();
//! }
//! assert_eq!(seen, vec![1, 2, 3]);
//! ```

use thiserror::Error;

use crate::storage::{GrowthPolicy, SlotBuffer};

/// Initial capacity of a sequence created with `new`
pub const DEFAULT_CAPACITY: usize = 30;

/// Error type for cursor operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// The cursor is past the end of the sequence
    #[error("sequence has no current item")]
    NoCurrent,
}

/// An ordered sequence with an internal cursor
#[derive(Debug, Clone)]
pub struct Sequence<T> {
    data: SlotBuffer<T>,
    /// Index of the current item; equal to `len()` when there is none
    cursor: usize,
}

impl<T> Sequence<T> {
    /// Creates an empty sequence with [`DEFAULT_CAPACITY`] slots
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty sequence with `capacity` slots (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: SlotBuffer::with_capacity(capacity.max(1), GrowthPolicy::SEQUENCE),
            cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Items from front to back, independent of the cursor
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Moves the cursor to the first item
    pub fn start(&mut self) {
        self.cursor = 0;
    }

    /// Moves the cursor to the next item
    ///
    /// Advancing from the last item leaves no current item. Without a current
    /// item this does nothing.
    pub fn advance(&mut self) {
        if self.is_item() {
            self.cursor += 1;
        }
    }

    /// True if the cursor designates an item
    pub fn is_item(&self) -> bool {
        self.cursor < self.data.len()
    }

    /// Returns the current item
    ///
    /// # Errors
    /// Returns [`SequenceError::NoCurrent`] if there is no current item.
    pub fn current(&self) -> Result<&T, SequenceError> {
        self.data
            .as_slice()
            .get(self.cursor)
            .ok_or(SequenceError::NoCurrent)
    }

    /// Inserts `entry` before the current item (or at the front)
    pub fn insert(&mut self, entry: T) {
        if !self.is_item() {
            self.cursor = 0;
        }
        self.data.insert(self.cursor, entry);
    }

    /// Inserts `entry` after the current item (or at the end)
    pub fn attach(&mut self, entry: T) {
        if self.is_item() {
            self.cursor += 1;
            self.data.insert(self.cursor, entry);
        } else {
            self.data.push(entry);
            self.cursor = self.data.len() - 1;
        }
    }

    /// Removes and returns the current item
    ///
    /// The item that followed it, if any, becomes current.
    ///
    /// # Errors
    /// Returns [`SequenceError::NoCurrent`] if there is no current item.
    pub fn remove_current(&mut self) -> Result<T, SequenceError> {
        if !self.is_item() {
            return Err(SequenceError::NoCurrent);
        }
        Ok(self.data.remove(self.cursor))
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}
