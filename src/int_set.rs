//! Unordered sets of `i32` over flat arrays
//!
//! Two flavours share the same semantics:
//!
//! - [`BoundedIntSet`]: a fixed array of `N` slots; inserts past the bound fail
//!   with [`SetError`].
//! - [`DynamicIntSet`]: a [`SlotBuffer`] that grows by [`GrowthPolicy::INT_SET`].
//!
//! Membership is a linear scan and removal shifts the trailing elements left,
//! so insertion order is preserved. Set algebra keeps `self`'s elements first,
//! in order, followed by any new elements in `other`'s order.
//!
//! Equality ignores order: two sets are equal when they have the same size and
//! each is a subset of the other.
//!
//! # Example
//!
//! ```rust
//! use dynamic_containers::int_set::DynamicIntSet;
//!
//! let a: DynamicIntSet = [1, 2, 3].into_iter().collect();
//! let b: DynamicIntSet = [3, 4].into_iter().collect();
//!
//! assert_eq!(a.union_with(&b).as_slice(), &[1, 2, 3, 4]);
//! assert_eq!(a.intersect(&b).as_slice(), &[3]);
//! assert_eq!(a.subtract(&b).to_string(), "1  2");
//! ```

use std::fmt;

use log::debug;
use thiserror::Error;

use crate::storage::{GrowthPolicy, SlotBuffer};

/// Default number of slots in a [`BoundedIntSet`]
pub const DEFAULT_BOUND: usize = 20;

/// Initial capacity of a [`DynamicIntSet`] created with `new`
pub const DEFAULT_CAPACITY: usize = 1;

/// Error type for bounded set operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetError {
    /// `add` of a new element to a set already holding its bound
    #[error("set is full ({bound} elements)")]
    Full { bound: usize },
    /// The result of a union would not fit in the bound
    #[error("result needs {needed} elements but the bound is {bound}")]
    CapacityExceeded { needed: usize, bound: usize },
}

fn is_subset(this: &[i32], other: &[i32]) -> bool {
    if this.is_empty() {
        return true;
    }
    this.len() <= other.len() && this.iter().all(|x| other.contains(x))
}

fn write_elements(f: &mut fmt::Formatter<'_>, elements: &[i32]) -> fmt::Result {
    let mut iter = elements.iter();
    if let Some(first) = iter.next() {
        write!(f, "{}", first)?;
        for x in iter {
            write!(f, "  {}", x)?;
        }
    }
    Ok(())
}

// ============================================================================
// BoundedIntSet
// ============================================================================

/// A set of at most `N` integers stored inline
#[derive(Debug, Clone, Copy)]
pub struct BoundedIntSet<const N: usize = DEFAULT_BOUND> {
    data: [i32; N],
    used: usize,
}

impl<const N: usize> BoundedIntSet<N> {
    /// Creates an empty set
    pub fn new() -> Self {
        Self {
            data: [0; N],
            used: 0,
        }
    }

    /// Maximum number of elements
    pub const fn bound(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.used
    }

    pub fn is_empty(&self) -> bool {
        self.used == 0
    }

    /// Elements in insertion order
    pub fn as_slice(&self) -> &[i32] {
        &self.data[..self.used]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i32> {
        self.as_slice().iter()
    }

    pub fn contains(&self, value: i32) -> bool {
        self.as_slice().contains(&value)
    }

    pub fn is_subset_of(&self, other: &Self) -> bool {
        is_subset(self.as_slice(), other.as_slice())
    }

    /// Elements of `self` followed by the elements of `other` not in `self`
    ///
    /// # Errors
    /// Returns [`SetError::CapacityExceeded`] if the union holds more than `N`
    /// elements.
    pub fn union_with(&self, other: &Self) -> Result<Self, SetError> {
        let extra = other.subtract(self);
        let needed = self.used + extra.used;
        if needed > N {
            debug!("union rejected: needs {} of {} slots", needed, N);
            return Err(SetError::CapacityExceeded { needed, bound: N });
        }

        let mut result = *self;
        for &x in extra.iter() {
            result.push_unchecked(x);
        }
        Ok(result)
    }

    /// Elements of `self` that are also in `other`
    pub fn intersect(&self, other: &Self) -> Self {
        let mut result = Self::new();
        for &x in self.iter().filter(|x| other.contains(**x)) {
            result.push_unchecked(x);
        }
        result
    }

    /// Elements of `self` that are not in `other`
    pub fn subtract(&self, other: &Self) -> Self {
        let mut result = Self::new();
        for &x in self.iter().filter(|x| !other.contains(**x)) {
            result.push_unchecked(x);
        }
        result
    }

    /// Removes every element
    pub fn reset(&mut self) {
        self.used = 0;
    }

    /// Adds `value` if absent, returning whether it was added
    ///
    /// # Errors
    /// Returns [`SetError::Full`] if `value` is absent and the set already
    /// holds `N` elements.
    pub fn add(&mut self, value: i32) -> Result<bool, SetError> {
        if self.contains(value) {
            return Ok(false);
        }
        if self.used == N {
            debug!("add({}) rejected: bounded set is full", value);
            return Err(SetError::Full { bound: N });
        }
        self.push_unchecked(value);
        Ok(true)
    }

    /// Removes `value` if present, returning whether it was removed
    pub fn remove(&mut self, value: i32) -> bool {
        match self.as_slice().iter().position(|&x| x == value) {
            Some(index) => {
                self.data.copy_within(index + 1..self.used, index);
                self.used -= 1;
                true
            }
            None => false,
        }
    }

    fn push_unchecked(&mut self, value: i32) {
        debug_assert!(self.used < N);
        self.data[self.used] = value;
        self.used += 1;
    }
}

impl<const N: usize> Default for BoundedIntSet<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PartialEq for BoundedIntSet<N> {
    fn eq(&self, other: &Self) -> bool {
        self.used == other.used && self.is_subset_of(other) && other.is_subset_of(self)
    }
}

impl<const N: usize> Eq for BoundedIntSet<N> {}

impl<const N: usize> fmt::Display for BoundedIntSet<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_elements(f, self.as_slice())
    }
}

// ============================================================================
// DynamicIntSet
// ============================================================================

/// A growable set of integers
#[derive(Debug, Clone)]
pub struct DynamicIntSet {
    data: SlotBuffer<i32>,
}

impl DynamicIntSet {
    /// Creates an empty set with [`DEFAULT_CAPACITY`] slots
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty set with `capacity` slots (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: SlotBuffer::with_capacity(capacity.max(1), GrowthPolicy::INT_SET),
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

    /// Elements in insertion order
    pub fn as_slice(&self) -> &[i32] {
        self.data.as_slice()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i32> {
        self.data.iter()
    }

    pub fn contains(&self, value: i32) -> bool {
        self.as_slice().contains(&value)
    }

    pub fn is_subset_of(&self, other: &Self) -> bool {
        is_subset(self.as_slice(), other.as_slice())
    }

    /// Elements of `self` followed by the elements of `other` not in `self`
    ///
    /// The result is sized up front to hold the whole union.
    pub fn union_with(&self, other: &Self) -> Self {
        let extra = other.subtract(self);
        let mut result = self.clone();
        let needed = result.len() + extra.len();
        if result.capacity() < needed {
            result.data.resize(needed);
        }
        for &x in extra.iter() {
            result.data.push(x);
        }
        result
    }

    /// Elements of `self` that are also in `other`
    pub fn intersect(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.capacity());
        for &x in self.iter().filter(|x| other.contains(**x)) {
            result.data.push(x);
        }
        result
    }

    /// Elements of `self` that are not in `other`
    pub fn subtract(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.capacity());
        for &x in self.iter().filter(|x| !other.contains(**x)) {
            result.data.push(x);
        }
        result
    }

    /// Removes every element; capacity is kept
    pub fn reset(&mut self) {
        self.data.clear();
    }

    /// Adds `value` if absent, returning whether it was added
    pub fn add(&mut self, value: i32) -> bool {
        if self.contains(value) {
            return false;
        }
        self.data.push(value);
        true
    }

    /// Removes `value` if present, returning whether it was removed
    pub fn remove(&mut self, value: i32) -> bool {
        match self.as_slice().iter().position(|&x| x == value) {
            Some(index) => {
                self.data.remove(index);
                true
            }
            None => false,
        }
    }
}

impl Default for DynamicIntSet {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for DynamicIntSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset_of(other) && other.is_subset_of(self)
    }
}

impl Eq for DynamicIntSet {}

impl fmt::Display for DynamicIntSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_elements(f, self.as_slice())
    }
}

impl Extend<i32> for DynamicIntSet {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for x in iter {
            self.add(x);
        }
    }
}

impl FromIterator<i32> for DynamicIntSet {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
