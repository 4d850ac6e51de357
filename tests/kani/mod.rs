//! Kani proof harnesses
//!
//! This module contains the Kani verification proofs for the indexed heap.
//! The files are organized by category:
//!
//! - `adjacency_proofs.rs`: Adjacency index agrees with level-order arithmetic
//! - `heap_proofs.rs`: Heap property, extraction order and growth

#[cfg(kani)]
#[path = "adjacency_proofs.rs"]
mod adjacency_proofs;
#[cfg(kani)]
#[path = "heap_proofs.rs"]
mod heap_proofs;
