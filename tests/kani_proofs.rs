//! Kani verification proofs for the binary max-heap
//!
//! Kani is AWS's model checker for Rust. It can verify properties of Rust code
//! by checking all possible executions up to certain bounds.
//!
//! To run these proofs:
//!   cargo kani

#[cfg(kani)]
use dynamic_containers::binary_max::BinaryMaxHeap;
#[cfg(kani)]
use dynamic_containers::{Heap, HeapError};

/// Proof that push always increments the length and keeps len <= capacity
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_push_increments_len() {
    let mut heap: BinaryMaxHeap<u32, u32> = BinaryMaxHeap::new();
    heap.push(kani::any(), kani::any());
    heap.push(kani::any(), kani::any());
    let initial_len = heap.len();

    heap.push(kani::any(), kani::any());

    assert!(heap.len() == initial_len + 1);
    assert!(heap.len() <= heap.capacity());
}

/// Proof that pop on an empty heap is rejected and changes nothing
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_empty_pop_rejected() {
    let mut heap: BinaryMaxHeap<u32, u32> = BinaryMaxHeap::new();

    if kani::any() {
        heap.push(kani::any(), kani::any());
        let _ = heap.pop();
    }
    let capacity = heap.capacity();

    assert!(heap.pop() == Err(HeapError::Empty));
    assert!(heap.front() == Err(HeapError::Empty));
    assert!(heap.is_empty());
    assert!(heap.capacity() == capacity);
}

/// Proof that pop returns the maximum of three arbitrary priorities
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_pop_returns_max() {
    let mut heap: BinaryMaxHeap<u8, u32> = BinaryMaxHeap::new();

    let p1: u32 = kani::any();
    let p2: u32 = kani::any();
    let p3: u32 = kani::any();

    heap.push(p1, 1);
    heap.push(p2, 2);
    heap.push(p3, 3);

    let (popped, _) = heap.pop().unwrap();
    assert!(popped >= p1 && popped >= p2 && popped >= p3);
    assert!(popped == p1 || popped == p2 || popped == p3);
    assert!(heap.len() == 2);
}

/// Proof that draining four entries yields non-increasing priorities
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_drain_is_sorted() {
    let mut heap: BinaryMaxHeap<(), u8> = BinaryMaxHeap::new();
    for _ in 0..4 {
        heap.push(kani::any(), ());
    }

    let mut last = u8::MAX;
    while let Ok((priority, _)) = heap.pop() {
        assert!(priority <= last);
        last = priority;
    }
}

/// Proof that a clone is unaffected by pops on the original
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_clone_independent() {
    let mut heap: BinaryMaxHeap<u8, u8> = BinaryMaxHeap::new();
    heap.push(kani::any(), kani::any());
    heap.push(kani::any(), kani::any());

    let copy = heap.clone();
    let front = *copy.front().unwrap();
    let _ = heap.pop();
    let _ = heap.pop();

    assert!(copy.len() == 2);
    assert!(*copy.front().unwrap() == front);
}
