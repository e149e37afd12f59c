//! Growable slot storage with an explicit capacity policy
//!
//! Every dynamic container in this crate keeps its entries in a [`SlotBuffer`]:
//! a contiguous array whose *logical* capacity is tracked separately from the
//! number of live entries and grown by a configurable [`GrowthPolicy`] rather
//! than by `Vec`'s own amortization strategy.
//!
//! # Design
//!
//! - Slots `[0, len)` hold live entries; nothing beyond `len` is observable.
//! - `capacity >= len` always holds, and `capacity` is never zero once the
//!   buffer has been asked to hold anything.
//! - Growth moves entries into a freshly reserved allocation in their
//!   physical order. Only the containers themselves ever reorder slots.
//!
//! # Example
//!
//! ```rust
//! use dynamic_containers::storage::{GrowthPolicy, SlotBuffer};
//!
//! let mut buffer = SlotBuffer::new(GrowthPolicy::HEAP);
//! assert_eq!(buffer.capacity(), 0);
//!
//! buffer.push('a');
//! buffer.push('b');
//! buffer.push('c');
//! // 0 -> 1 -> 2 -> 3 under a factor of 1.5
//! assert_eq!(buffer.capacity(), 3);
//! assert_eq!(buffer.as_slice(), &['a', 'b', 'c']);
//! ```

use log::trace;
use thiserror::Error;

/// Error returned when constructing an invalid [`GrowthPolicy`]
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PolicyError {
    /// The factor was below 1.0, NaN or infinite
    #[error("growth factor must be a finite value >= 1.0, got {0}")]
    InvalidFactor(f64),
}

/// Multiplicative capacity growth policy
///
/// When an insert would overflow the buffer, the new capacity is
/// `max(capacity + 1, ceil(capacity * factor))`, so growth is strictly
/// increasing even for capacities 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthPolicy {
    factor: f64,
}

impl GrowthPolicy {
    /// Growth used by the priority queue
    pub const HEAP: GrowthPolicy = GrowthPolicy { factor: 1.5 };

    /// Growth used by [`DynamicIntSet`](crate::int_set::DynamicIntSet)
    pub const INT_SET: GrowthPolicy = GrowthPolicy { factor: 1.5 };

    /// Growth used by [`Sequence`](crate::sequence::Sequence)
    pub const SEQUENCE: GrowthPolicy = GrowthPolicy { factor: 1.25 };

    /// Creates a policy with the given growth factor
    ///
    /// # Errors
    /// Returns [`PolicyError::InvalidFactor`] unless `factor` is finite and at least 1.0.
    pub fn new(factor: f64) -> Result<Self, PolicyError> {
        if !factor.is_finite() || factor < 1.0 {
            return Err(PolicyError::InvalidFactor(factor));
        }
        Ok(Self { factor })
    }

    /// Returns the growth factor
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Computes the capacity that follows `current`
    ///
    /// The result is always strictly greater than `current`.
    #[inline]
    pub fn next_capacity(&self, current: usize) -> usize {
        // `as` saturates, so enormous capacities clamp rather than wrap
        let scaled = (current as f64 * self.factor).ceil() as usize;
        scaled.max(current.saturating_add(1))
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::HEAP
    }
}

// ============================================================================
// SlotBuffer
// ============================================================================

/// Contiguous entry storage with a separately tracked logical capacity
///
/// The backing `Vec` is always reserved exactly to `capacity`, so it never
/// reallocates on its own: the only reallocation path is [`SlotBuffer::resize`].
#[derive(Debug)]
pub struct SlotBuffer<E> {
    slots: Vec<E>,
    capacity: usize,
    policy: GrowthPolicy,
}

impl<E> SlotBuffer<E> {
    /// Creates an empty buffer with zero capacity
    pub fn new(policy: GrowthPolicy) -> Self {
        Self {
            slots: Vec::new(),
            capacity: 0,
            policy,
        }
    }

    /// Creates an empty buffer with room for `capacity` entries
    pub fn with_capacity(capacity: usize, policy: GrowthPolicy) -> Self {
        let mut slots = Vec::new();
        slots.reserve_exact(capacity);
        Self {
            slots,
            capacity,
            policy,
        }
    }

    /// Number of live entries
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Logical capacity (number of allocated slots)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Live entries in physical order
    #[inline]
    pub fn as_slice(&self) -> &[E] {
        &self.slots
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [E] {
        &mut self.slots
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.slots.iter()
    }

    /// Grows the buffer if one more entry would overflow it
    #[inline]
    pub fn reserve_one(&mut self) {
        if self.slots.len() + 1 > self.capacity {
            self.grow();
        }
    }

    /// Grows the buffer to the next capacity given by the policy
    pub fn grow(&mut self) {
        let target = self.policy.next_capacity(self.capacity);
        self.resize(target);
    }

    /// Reallocates to `target` slots, clamped to `max(target, len, 1)`
    ///
    /// Live entries keep their physical order. Resizing to the current
    /// capacity is a no-op.
    pub fn resize(&mut self, target: usize) {
        let target = target.max(self.slots.len()).max(1);
        if target == self.capacity {
            return;
        }

        let mut fresh = Vec::new();
        fresh.reserve_exact(target);
        fresh.extend(self.slots.drain(..));

        trace!(
            "slot buffer resized: capacity {} -> {} ({} live)",
            self.capacity,
            target,
            fresh.len()
        );

        self.slots = fresh;
        self.capacity = target;
    }

    /// Appends an entry, growing first if needed
    pub fn push(&mut self, entry: E) {
        self.reserve_one();
        self.slots.push(entry);
    }

    /// Inserts an entry at `index`, shifting later entries right
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, entry: E) {
        self.reserve_one();
        self.slots.insert(index, entry);
    }

    /// Removes the entry at `index`, shifting later entries left
    ///
    /// # Panics
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> E {
        self.slots.remove(index)
    }

    /// Removes the entry at `index`, moving the last entry into its slot
    ///
    /// # Panics
    /// Panics if `index >= len`.
    pub fn swap_remove(&mut self, index: usize) -> E {
        self.slots.swap_remove(index)
    }

    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
    }

    /// Drops every live entry; capacity is unchanged
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

impl<E: Clone> Clone for SlotBuffer<E> {
    /// Deep copy of the live entries into an independent allocation of the
    /// same logical capacity
    fn clone(&self) -> Self {
        let mut slots = Vec::new();
        slots.reserve_exact(self.capacity);
        slots.extend_from_slice(&self.slots);
        Self {
            slots,
            capacity: self.capacity,
            policy: self.policy,
        }
    }
}

impl<E> Default for SlotBuffer<E> {
    fn default() -> Self {
        Self::new(GrowthPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_always_grows() {
        let policy = GrowthPolicy::HEAP;
        assert_eq!(policy.next_capacity(0), 1);
        assert_eq!(policy.next_capacity(1), 2);
        assert_eq!(policy.next_capacity(2), 3);
        assert_eq!(policy.next_capacity(3), 5);
        assert_eq!(policy.next_capacity(4), 6);
        assert_eq!(policy.next_capacity(5), 8);
        assert_eq!(policy.next_capacity(7), 11);
        assert_eq!(policy.next_capacity(9), 14);
        assert_eq!(policy.next_capacity(10), 15);

        let seq = GrowthPolicy::SEQUENCE;
        assert_eq!(seq.next_capacity(1), 2);
        assert_eq!(seq.next_capacity(4), 5);
        assert_eq!(seq.next_capacity(5), 7);
        assert_eq!(seq.next_capacity(30), 38);
    }

    #[test]
    fn test_policy_rejects_bad_factors() {
        assert_eq!(GrowthPolicy::new(0.5), Err(PolicyError::InvalidFactor(0.5)));
        assert!(GrowthPolicy::new(f64::NAN).is_err());
        assert!(GrowthPolicy::new(f64::INFINITY).is_err());
        assert_eq!(GrowthPolicy::new(1.0).map(|p| p.factor()), Ok(1.0));
    }

    #[test]
    fn test_unit_factor_still_grows() {
        let policy = GrowthPolicy::new(1.0).unwrap();
        let mut buffer = SlotBuffer::new(policy);
        for i in 0..10 {
            buffer.push(i);
            assert_eq!(buffer.capacity(), i + 1);
        }
    }

    #[test]
    fn test_push_grows_monotonically() {
        let mut buffer = SlotBuffer::new(GrowthPolicy::HEAP);
        let mut last = buffer.capacity();
        for i in 0..200 {
            let full = buffer.len() == buffer.capacity();
            buffer.push(i);
            if full {
                assert!(buffer.capacity() > last);
            } else {
                assert_eq!(buffer.capacity(), last);
            }
            assert!(buffer.capacity() >= buffer.len());
            last = buffer.capacity();
        }
        assert_eq!(buffer.as_slice(), (0..200).collect::<Vec<_>>().as_slice());
    }

    #[test]
    fn test_resize_clamps_to_len_and_one() {
        let mut buffer: SlotBuffer<u8> = SlotBuffer::new(GrowthPolicy::HEAP);
        buffer.resize(0);
        assert_eq!(buffer.capacity(), 1);

        for i in 0..5 {
            buffer.push(i);
        }
        buffer.resize(2);
        assert_eq!(buffer.capacity(), 5);
        assert_eq!(buffer.as_slice(), &[0, 1, 2, 3, 4]);

        buffer.resize(16);
        assert_eq!(buffer.capacity(), 16);
        assert_eq!(buffer.as_slice(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = SlotBuffer::with_capacity(4, GrowthPolicy::HEAP);
        original.push(String::from("a"));
        original.push(String::from("b"));

        let mut copy = original.clone();
        assert_eq!(copy.capacity(), 4);
        copy.push(String::from("c"));
        copy.as_mut_slice()[0].push('!');

        assert_eq!(original.as_slice(), &["a", "b"]);
        assert_eq!(copy.as_slice(), &["a!", "b", "c"]);
    }

    #[test]
    fn test_insert_and_remove_shift() {
        let mut buffer = SlotBuffer::new(GrowthPolicy::SEQUENCE);
        buffer.push(1);
        buffer.push(3);
        buffer.insert(1, 2);
        buffer.insert(0, 0);
        assert_eq!(buffer.as_slice(), &[0, 1, 2, 3]);
        assert_eq!(buffer.remove(1), 1);
        assert_eq!(buffer.as_slice(), &[0, 2, 3]);
        buffer.clear();
        assert!(buffer.is_empty());
        assert!(buffer.capacity() >= 4);
    }
}
