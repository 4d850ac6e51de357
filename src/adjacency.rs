//! Precomputed parent/child index for a level-order complete binary tree
//!
//! [`AdjacencyIndex`] stores one fixed-width [`Link`] record per slot so that
//! the heap can answer "who is my parent" and "who are my children" with a
//! bounds check and a field read, instead of recomputing index arithmetic on
//! every step of a sift.
//!
//! # Layout
//!
//! The index is built breadth-first, one level at a time. Level 0 holds the
//! root (index 0); level `k + 1` starts right after level `k` ends and is twice
//! as wide. For a node at position `offset` within a level whose successor
//! level starts at `level_end`, the children are:
//!
//! | Child | Index                      |
//! |-------|----------------------------|
//! | left  | `level_end + 2 * offset`     |
//! | right | `level_end + 2 * offset + 1` |
//!
//! Every index below the requested capacity is *linked* (carries both child
//! links). The children of linked nodes get entries too, holding only their
//! parent link, so an index of capacity `n` has `2n + 1` entries.
//!
//! # Example
//!
//! ```rust
//! use indexed_max_heap::adjacency::{AdjacencyIndex, Link};
//!
//! let index = AdjacencyIndex::new(3);
//! assert_eq!(index.len(), 7);
//! assert_eq!(
//!     index.get(1),
//!     Some(Link { parent: Some(0), left: Some(3), right: Some(4) })
//! );
//! assert_eq!(index.get(6), Some(Link { parent: Some(2), left: None, right: None }));
//! assert_eq!(index.get(7), None);
//! ```

use std::collections::TryReserveError;

use log::trace;

/// Parent and child slots of a single node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Link {
    /// Parent slot; `None` for the root
    pub parent: Option<usize>,
    /// Left child slot; `None` until the node is linked
    pub left: Option<usize>,
    /// Right child slot; `None` until the node is linked
    pub right: Option<usize>,
}

/// Dense slot -> [`Link`] table, extendable in place
#[derive(Debug, Clone)]
pub struct AdjacencyIndex {
    links: Vec<Link>,
    /// Indices `[0, linked)` carry child links.
    linked: usize,
    /// First index of the level containing the next node to link.
    level_start: usize,
    level_len: usize,
}

impl AdjacencyIndex {
    /// Builds the index for a tree of `capacity` slots.
    ///
    /// Runs in O(capacity) with constant extra space.
    ///
    /// # Panics
    /// Panics if the links do not fit in memory; see [`AdjacencyIndex::try_new`].
    pub fn new(capacity: usize) -> Self {
        let mut index = Self::root();
        index.extend_to(capacity);
        index
    }

    /// Builds the index for a tree of `capacity` slots, returning an error
    /// instead of panicking if the links cannot be allocated.
    pub fn try_new(capacity: usize) -> Result<Self, TryReserveError> {
        let mut index = Self::root();
        index.try_extend_to(capacity)?;
        Ok(index)
    }

    fn root() -> Self {
        Self {
            links: vec![Link::default()],
            linked: 0,
            level_start: 0,
            level_len: 1,
        }
    }

    /// Links every index below `capacity`, resuming where the last build
    /// stopped. Existing entries are never modified except to add the child
    /// links of newly linked nodes. Shrinking is a no-op.
    ///
    /// # Panics
    /// Panics if the new links do not fit in memory; see
    /// [`AdjacencyIndex::try_extend_to`].
    pub fn extend_to(&mut self, capacity: usize) {
        if let Err(e) = self.try_extend_to(capacity) {
            panic!("adjacency index for {} slots: {}", capacity, e);
        }
    }

    /// Like [`AdjacencyIndex::extend_to`], but reports allocation failure.
    /// On error the index is left unchanged.
    pub fn try_extend_to(&mut self, capacity: usize) -> Result<(), TryReserveError> {
        if capacity <= self.linked {
            return Ok(());
        }
        trace!(
            "extending adjacency index from {} to {} linked slots",
            self.linked,
            capacity
        );
        // Saturates into a `CapacityOverflow` error instead of wrapping
        let additional = (capacity - self.linked).saturating_mul(2);
        self.links.try_reserve_exact(additional)?;
        self.link_up_to(capacity);
        Ok(())
    }

    /// Storage for the new links must already be reserved.
    fn link_up_to(&mut self, capacity: usize) {
        while self.linked < capacity {
            let level_end = self.level_start + self.level_len;
            if self.linked == level_end {
                self.level_start = level_end;
                self.level_len *= 2;
                continue;
            }

            let parent = self.linked;
            let offset = parent - self.level_start;
            let left = level_end + 2 * offset;
            let right = left + 1;
            // Children are discovered in level order, so they are always the
            // next two entries.
            debug_assert_eq!(self.links.len(), left);

            self.links[parent].left = Some(left);
            self.links[parent].right = Some(right);
            let child = Link {
                parent: Some(parent),
                ..Link::default()
            };
            self.links.push(child);
            self.links.push(child);
            self.linked += 1;
        }
    }

    /// Returns the record for `index`, or `None` if it has no entry.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Link> {
        self.links.get(index).copied()
    }

    /// Number of indices with an entry.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Always false: the root entry exists from construction.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Number of indices carrying child links.
    pub fn linked(&self) -> usize {
        self.linked
    }
}
