//! Indexed Max-Heap for Rust
//!
//! This crate provides an array-backed binary max-heap of integers whose
//! parent/child navigation is driven by a precomputed adjacency index.
//!
//! # Features
//!
//! - **Adjacency index**: every slot's parent and children are computed once,
//!   breadth-first, in O(capacity); lookups are a bounds check plus a field read
//! - **Directional rebalancing**: `insert` only sifts up, `pop` only sifts down
//! - **In-place growth**: storage and adjacency double together, preserving all
//!   stored values and previously computed links
//! - **Errors as values**: every failure is a [`HeapError`], including lookup
//!   misses that indicate an internal inconsistency
//!
//! # Example
//!
//! ```rust
//! use indexed_max_heap::IndexedMaxHeap;
//!
//! let mut heap = IndexedMaxHeap::with_capacity(2).unwrap();
//! heap.insert(3).unwrap();
//! heap.insert(7).unwrap();
//! heap.insert(5).unwrap(); // grows to 4 slots
//!
//! assert_eq!(heap.capacity(), 4);
//! assert_eq!(heap.pop(), Ok(7));
//! assert_eq!(heap.pop(), Ok(5));
//! assert_eq!(heap.pop(), Ok(3));
//! assert!(heap.pop().is_err());
//! ```

pub mod adjacency;
pub mod config;
pub mod error;
pub mod indexed;

pub use adjacency::{AdjacencyIndex, Link};
pub use config::{GrowthTrigger, HeapConfig};
pub use error::HeapError;
pub use indexed::IndexedMaxHeap;
