//! Dynamic Containers for Rust
//!
//! This crate provides a priority queue realized as a binary max-heap over an
//! explicitly managed growable array, together with a few companion containers
//! built on the same storage.
//!
//! # Features
//!
//! - **Binary Max-Heap**: O(log n) push and pop, O(1) front; capacity grows by a
//!   documented factor (1.5) rather than `Vec`'s own policy
//! - **Slot Buffer**: growable storage with a separate logical capacity and a
//!   clamping `resize` that never drops live entries
//! - **Integer Sets**: bounded (inline array) and dynamic sets of `i32` with
//!   union, intersection and difference
//! - **Cursor Sequence**: ordered list with an internal cursor supporting
//!   insert-before, attach-after and remove-current
//! - **Polynomials**: recursive evaluation and rendering
//!
//! # Example
//!
//! ```rust
//! use dynamic_containers::binary_max::BinaryMaxHeap;
//! use dynamic_containers::{Heap, HeapError};
//!
//! let mut heap = BinaryMaxHeap::new();
//! heap.push(5, "five");
//! heap.push(10, "ten");
//! heap.push(1, "one");
//!
//! assert_eq!(heap.front(), Ok(&"ten"));
//! assert_eq!(heap.pop(), Ok((10, "ten")));
//! assert_eq!(heap.len(), 2);
//!
//! heap.pop().unwrap();
//! heap.pop().unwrap();
//! assert_eq!(heap.pop(), Err(HeapError::Empty));
//! ```

pub mod binary_max;
pub mod int_set;
pub mod poly;
pub mod render;
pub mod sequence;
pub mod storage;
pub mod traits;

// Re-export the main trait for convenience
pub use traits::{Heap, HeapError};
