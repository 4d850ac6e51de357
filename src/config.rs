//! Construction-time configuration for [`IndexedMaxHeap`](crate::IndexedMaxHeap)

use std::mem::size_of;

use crate::adjacency::Link;

/// Default number of slots allocated by [`HeapConfig::default`].
pub const DEFAULT_CAPACITY: usize = 16;

/// Largest capacity whose adjacency index (`2 * capacity + 1` links) fits in
/// a single allocation of at most `isize::MAX` bytes.
pub const MAX_CAPACITY: usize = (isize::MAX as usize / size_of::<Link>() - 1) / 2;

/// When `insert` doubles the backing storage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GrowthTrigger {
    /// Grow only when every slot is occupied.
    #[default]
    WhenFull,
    /// Grow when inserting would occupy the last free slot, keeping one slot
    /// spare at all times.
    OneSlotEarly,
}

impl GrowthTrigger {
    /// Returns true if a heap holding `len` elements in `capacity` slots must
    /// grow before the next insert.
    #[inline]
    pub fn should_grow(self, len: usize, capacity: usize) -> bool {
        match self {
            GrowthTrigger::WhenFull => len >= capacity,
            GrowthTrigger::OneSlotEarly => len + 1 >= capacity,
        }
    }
}

/// Heap configuration
///
/// # Example
///
/// ```rust
/// use indexed_max_heap::{GrowthTrigger, HeapConfig, IndexedMaxHeap};
///
/// let config = HeapConfig::default()
///     .with_initial_capacity(4)
///     .with_growth(GrowthTrigger::OneSlotEarly);
/// let heap = IndexedMaxHeap::with_config(config).unwrap();
/// assert_eq!(heap.capacity(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapConfig {
    /// Slots allocated (and linked) at construction; must be in
    /// `1..=MAX_CAPACITY`
    pub initial_capacity: usize,
    /// Growth policy used by `insert`
    pub growth: GrowthTrigger,
}

impl HeapConfig {
    /// Sets the number of slots allocated at construction.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Sets the growth trigger used by `insert`.
    pub fn with_growth(mut self, growth: GrowthTrigger) -> Self {
        self.growth = growth;
        self
    }
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            growth: GrowthTrigger::default(),
        }
    }
}
