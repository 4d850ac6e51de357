//! Error type for heap operations

use thiserror::Error;

/// Error type for heap operations
///
/// `EmptyHeap` and `InvalidCapacity` are caller errors; `AllocationFailed`
/// reports that the allocator refused the heap's storage. The three lookup
/// variants come from the adjacency layer; seeing one outside of it means the
/// heap's own bookkeeping is inconsistent (see [`HeapError::is_internal`]).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `pop` was called on a heap with no occupied slots
    #[error("cannot pop from an empty heap")]
    EmptyHeap,
    /// The index has no entry in the precomputed adjacency index
    #[error("index {index} is not present in the adjacency index")]
    IndexNotMapped { index: usize },
    /// The child slot exists structurally but is not occupied
    #[error("node at index {index} does not have the requested child")]
    NoSuchChild { index: usize },
    /// The node is the root, or its parent slot is not occupied
    #[error("node at index {index} does not have a parent")]
    NoSuchParent { index: usize },
    /// The requested capacity is zero or above [`MAX_CAPACITY`](crate::config::MAX_CAPACITY)
    #[error("heap capacity must be between 1 and the maximum capacity, got {capacity}")]
    InvalidCapacity { capacity: usize },
    /// The allocator refused storage for `capacity` slots
    #[error("failed to allocate storage for {capacity} slots")]
    AllocationFailed { capacity: usize },
}

impl HeapError {
    /// Returns true for errors produced by the index lookup layer.
    ///
    /// These never reach callers of `insert`/`pop` while the shape invariant
    /// holds.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            HeapError::IndexNotMapped { .. }
                | HeapError::NoSuchChild { .. }
                | HeapError::NoSuchParent { .. }
        )
    }
}
