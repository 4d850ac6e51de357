//! Heap proofs
//!
//! These proofs verify the heap against symbolic inputs:
//! - Heap property after symbolic inserts
//! - Extraction returns the maximum
//! - Growth keeps every element
//! - Empty heap edge cases

#[cfg(kani)]
use indexed_max_heap::{HeapError, IndexedMaxHeap};

/// Proof: Empty heap operations are safe
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(5)]
fn verify_empty_heap_operations() {
    let capacity: usize = kani::any();
    kani::assume(capacity >= 1 && capacity <= 4);
    let mut heap = IndexedMaxHeap::with_capacity(capacity).expect("capacity is non-zero");

    assert!(heap.is_empty());
    assert!(heap.peek().is_none());
    assert!(heap.pop() == Err(HeapError::EmptyHeap));
}

/// Proof: Zero capacity is rejected without panicking
#[cfg(kani)]
#[kani::proof]
fn verify_zero_capacity_rejected() {
    assert!(matches!(
        IndexedMaxHeap::with_capacity(0),
        Err(HeapError::InvalidCapacity { capacity: 0 })
    ));
}

/// Proof: Inserting symbolic values keeps the heap property and the maximum
/// at the root, across a growth boundary
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_insert_keeps_heap_property() {
    let mut heap = IndexedMaxHeap::with_capacity(2).expect("capacity is non-zero");
    let values: [i64; 4] = kani::any();

    let mut max = i64::MIN;
    for value in values {
        heap.insert(value).expect("insert never fails");
        if value > max {
            max = value;
        }
        assert!(heap.is_valid_heap());
        assert!(heap.peek() == Some(max));
    }
    assert!(heap.capacity() == 4);
}

/// Proof: Popping returns elements in non-increasing order
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_pop_order() {
    let mut heap = IndexedMaxHeap::with_capacity(1).expect("capacity is non-zero");
    let values: [i64; 4] = kani::any();
    for value in values {
        heap.insert(value).expect("insert never fails");
    }

    let mut last = i64::MAX;
    for _ in 0..4 {
        let value = heap.pop().expect("heap holds four elements");
        assert!(value <= last);
        last = value;
        assert!(heap.is_valid_heap());
    }
    assert!(heap.pop() == Err(HeapError::EmptyHeap));
}
