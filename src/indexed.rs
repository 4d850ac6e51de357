//! Indexed binary max-heap
//!
//! An array-backed max-heap of `i64` values whose parent/child navigation goes
//! through a precomputed [`AdjacencyIndex`] instead of inline index arithmetic.
//!
//! The backing storage always has exactly `capacity` slots; the occupied
//! elements are the prefix `[0, len)` in level order. When an insert needs
//! more room the storage and the adjacency index are both doubled in place,
//! keeping every stored value and every computed link.
//!
//! # Time Complexity
//!
//! | Operation | Complexity          |
//! |-----------|---------------------|
//! | `insert`  | O(log n) amortized  |
//! | `pop`     | O(log n)            |
//! | `peek`    | O(1)                |
//! | lookups   | O(1)                |
//!
//! # Example
//!
//! ```rust
//! use indexed_max_heap::{HeapError, IndexedMaxHeap};
//!
//! let mut heap = IndexedMaxHeap::with_capacity(6).unwrap();
//! for value in 1..=5 {
//!     heap.insert(value).unwrap();
//! }
//!
//! assert_eq!(heap.peek(), Some(5));
//! assert_eq!(heap.pop(), Ok(5));
//! assert_eq!(heap.pop(), Ok(4));
//! assert_eq!(heap.pop(), Ok(3));
//! assert_eq!(heap.pop(), Ok(2));
//! assert_eq!(heap.pop(), Ok(1));
//! assert_eq!(heap.pop(), Err(HeapError::EmptyHeap));
//! ```

use log::{debug, error};

use crate::adjacency::{AdjacencyIndex, Link};
use crate::config::{GrowthTrigger, HeapConfig, DEFAULT_CAPACITY, MAX_CAPACITY};
use crate::error::HeapError;

/// A binary max-heap with a precomputed adjacency index
///
/// Invariants maintained across every public call:
/// - occupied slots are exactly `[0, len)`
/// - every occupied parent is `>=` each of its occupied children
/// - every slot below `capacity` is linked in the adjacency index
#[derive(Debug, Clone)]
pub struct IndexedMaxHeap {
    /// Backing storage; `slots.len()` is the capacity
    slots: Vec<i64>,
    /// Index of the last occupied slot, `None` when empty
    last: Option<usize>,
    adjacency: AdjacencyIndex,
    growth: GrowthTrigger,
}

impl IndexedMaxHeap {
    /// Creates an empty heap with `capacity` slots and the default growth
    /// trigger.
    ///
    /// # Errors
    /// - `InvalidCapacity` if `capacity` is zero or above `MAX_CAPACITY`
    /// - `AllocationFailed` if the storage cannot be allocated
    pub fn with_capacity(capacity: usize) -> Result<Self, HeapError> {
        Self::with_config(HeapConfig::default().with_initial_capacity(capacity))
    }

    /// Creates an empty heap from `config`.
    ///
    /// # Errors
    /// - `InvalidCapacity` if `config.initial_capacity` is zero or above
    ///   `MAX_CAPACITY`
    /// - `AllocationFailed` if the storage cannot be allocated
    pub fn with_config(config: HeapConfig) -> Result<Self, HeapError> {
        let capacity = config.initial_capacity;
        if capacity == 0 || capacity > MAX_CAPACITY {
            return Err(HeapError::InvalidCapacity { capacity });
        }
        debug!(
            "creating indexed max-heap with {} slots ({:?})",
            capacity, config.growth
        );

        let alloc_failed = |_| HeapError::AllocationFailed { capacity };
        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity).map_err(alloc_failed)?;
        slots.resize(capacity, 0);
        let adjacency = AdjacencyIndex::try_new(capacity).map_err(alloc_failed)?;

        Ok(Self {
            slots,
            last: None,
            adjacency,
            growth: config.growth,
        })
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.last.map_or(0, |last| last + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.last.is_none()
    }

    /// Number of allocated slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the maximum without removing it.
    pub fn peek(&self) -> Option<i64> {
        self.last.map(|_| self.slots[0])
    }

    /// The occupied slots in level order.
    pub fn as_slice(&self) -> &[i64] {
        &self.slots[..self.len()]
    }

    pub fn adjacency(&self) -> &AdjacencyIndex {
        &self.adjacency
    }

    /// Checks the heap invariant over the occupied range using closed-form
    /// parent arithmetic, independently of the adjacency index.
    pub fn is_valid_heap(&self) -> bool {
        let occupied = self.as_slice();
        (1..occupied.len()).all(|i| occupied[(i - 1) / 2] >= occupied[i])
    }

    /// Inserts `value`, growing the storage first if the growth trigger fires.
    ///
    /// # Errors
    /// - `AllocationFailed` if growth is needed but the doubled storage
    ///   cannot be allocated; the heap is left unchanged
    /// - a lookup error reports an internal inconsistency in the adjacency
    ///   index and never occurs while the heap's invariants hold
    pub fn insert(&mut self, value: i64) -> Result<(), HeapError> {
        let index = self.len();
        if self.growth.should_grow(index, self.capacity()) {
            self.grow()?;
        }

        self.slots[index] = value;
        self.last = Some(index);
        self.sift_up(index)
    }

    /// Inserts every value from `values`, stopping at the first error.
    pub fn try_extend<I>(&mut self, values: I) -> Result<(), HeapError>
    where
        I: IntoIterator<Item = i64>,
    {
        for value in values {
            self.insert(value)?;
        }
        Ok(())
    }

    /// Removes and returns the maximum.
    ///
    /// # Errors
    /// Returns `HeapError::EmptyHeap` if no slot is occupied.
    pub fn pop(&mut self) -> Result<i64, HeapError> {
        let last = self.last.ok_or(HeapError::EmptyHeap)?;
        let max = self.slots[0];

        self.slots[0] = self.slots[last];
        self.last = last.checked_sub(1);
        self.sift_down(0)?;

        Ok(max)
    }

    /// Index of the left child of `index`.
    ///
    /// # Errors
    /// - `IndexNotMapped` if `index` has no child links in the adjacency index
    /// - `NoSuchChild` if the left child slot is not occupied
    pub fn left_child(&self, index: usize) -> Result<usize, HeapError> {
        let child = self.link(index)?.left;
        self.occupied_child(index, child)
    }

    /// Index of the right child of `index`.
    ///
    /// # Errors
    /// - `IndexNotMapped` if `index` has no child links in the adjacency index
    /// - `NoSuchChild` if the right child slot is not occupied
    pub fn right_child(&self, index: usize) -> Result<usize, HeapError> {
        let child = self.link(index)?.right;
        self.occupied_child(index, child)
    }

    /// Index of the parent of `index`.
    ///
    /// # Errors
    /// - `IndexNotMapped` if `index` has no entry in the adjacency index
    /// - `NoSuchParent` if `index` is the root or its parent is not occupied
    pub fn parent(&self, index: usize) -> Result<usize, HeapError> {
        let parent = self
            .link(index)?
            .parent
            .ok_or(HeapError::NoSuchParent { index })?;
        if !self.is_occupied(parent) {
            return Err(HeapError::NoSuchParent { index });
        }
        Ok(parent)
    }

    fn link(&self, index: usize) -> Result<Link, HeapError> {
        self.adjacency
            .get(index)
            .ok_or(HeapError::IndexNotMapped { index })
    }

    fn occupied_child(&self, index: usize, child: Option<usize>) -> Result<usize, HeapError> {
        let child = child.ok_or(HeapError::IndexNotMapped { index })?;
        if !self.is_occupied(child) {
            return Err(HeapError::NoSuchChild { index });
        }
        Ok(child)
    }

    #[inline]
    fn is_occupied(&self, index: usize) -> bool {
        self.last.is_some_and(|last| index <= last)
    }

    /// Doubles the storage and links the new slots. The reallocation moves
    /// the whole previous buffer before it is released. Nothing is modified
    /// unless both reservations succeed.
    fn grow(&mut self) -> Result<(), HeapError> {
        let old = self.capacity();
        let new = old
            .checked_mul(2)
            .filter(|&new| new <= MAX_CAPACITY)
            .ok_or(HeapError::AllocationFailed {
                capacity: old.saturating_mul(2),
            })?;
        debug!("growing indexed max-heap from {} to {} slots", old, new);

        let alloc_failed = |_| HeapError::AllocationFailed { capacity: new };
        self.slots.try_reserve_exact(new - old).map_err(alloc_failed)?;
        self.adjacency.try_extend_to(new).map_err(alloc_failed)?;
        self.slots.resize(new, 0);
        Ok(())
    }

    /// Moves the element at `index` toward the root until its parent is not
    /// smaller. Only `insert` calls this.
    fn sift_up(&mut self, mut index: usize) -> Result<(), HeapError> {
        loop {
            let parent = match self.parent(index) {
                Ok(parent) => parent,
                Err(HeapError::NoSuchParent { .. }) => return Ok(()),
                Err(e) => return Err(e),
            };
            if self.slots[index] <= self.slots[parent] {
                return Ok(());
            }
            self.slots.swap(index, parent);
            index = parent;
        }
    }

    /// Moves the element at `index` toward the leaves, swapping with the
    /// larger occupied child, until no child is larger. Only `pop` calls this.
    fn sift_down(&mut self, mut index: usize) -> Result<(), HeapError> {
        loop {
            // Shape invariant: no left child means no right child either.
            let Some(left) = vacant_as_none(self.left_child(index))? else {
                return Ok(());
            };
            let larger = match vacant_as_none(self.right_child(index))? {
                Some(right) if self.slots[right] > self.slots[left] => right,
                _ => left,
            };
            if self.slots[index] >= self.slots[larger] {
                return Ok(());
            }
            self.slots.swap(index, larger);
            index = larger;
        }
    }
}

/// Turns a `NoSuchChild` lookup into `None`, propagating every other error.
fn vacant_as_none(lookup: Result<usize, HeapError>) -> Result<Option<usize>, HeapError> {
    match lookup {
        Ok(child) => Ok(Some(child)),
        Err(HeapError::NoSuchChild { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

impl Default for IndexedMaxHeap {
    fn default() -> Self {
        Self {
            slots: vec![0; DEFAULT_CAPACITY],
            last: None,
            adjacency: AdjacencyIndex::new(DEFAULT_CAPACITY),
            growth: GrowthTrigger::default(),
        }
    }
}

/// Draining iterator returned by [`IndexedMaxHeap::into_iter`]; yields values
/// in non-increasing order.
#[derive(Debug)]
pub struct IntoIter {
    heap: IndexedMaxHeap,
}

impl Iterator for IntoIter {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        match self.heap.pop() {
            Ok(value) => Some(value),
            Err(HeapError::EmptyHeap) => None,
            Err(e) => {
                error!("draining indexed max-heap stopped early: {}", e);
                if cfg!(debug_assertions) {
                    unreachable!("internal lookup failure while draining: {}", e);
                }
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for IntoIter {}

impl IntoIterator for IndexedMaxHeap {
    type Item = i64;
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter {
        IntoIter { heap: self }
    }
}
