//! Construction hints for the level heap.
//!
//! Every field only pre-sizes storage. A heap built with tiny hints behaves
//! exactly like one built with huge hints; it just reallocates more often.

/// Capacity hints for a [`LimitHeap`](crate::LimitHeap).
///
/// ## Example
///
/// ```
/// use level_heap::{HeapConfig, LimitHeap, Side};
///
/// let config = HeapConfig::with_orders(10_000);
/// let heap = LimitHeap::with_config(Side::Buy, config);
/// assert!(heap.capacity() >= 10_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapConfig {
    /// Expected number of distinct price levels (sizes the level index and arena)
    pub level_capacity: usize,

    /// Expected number of resting orders (sizes the order index and arena)
    pub order_capacity: usize,

    /// Initial capacity of the heap array
    pub heap_capacity: usize,
}

impl HeapConfig {
    /// Default level hint
    pub const DEFAULT_LEVELS: usize = 64;

    /// Default order hint
    pub const DEFAULT_ORDERS: usize = 1024;

    /// Create a config from explicit hints.
    pub fn new(level_capacity: usize, order_capacity: usize, heap_capacity: usize) -> Self {
        Self {
            level_capacity,
            order_capacity,
            heap_capacity,
        }
    }

    /// Derive level and heap hints from an expected order count.
    ///
    /// Assumes roughly sixteen orders per level, never fewer than the
    /// default level hint.
    pub fn with_orders(order_capacity: usize) -> Self {
        let levels = (order_capacity / 16).max(Self::DEFAULT_LEVELS);
        Self::new(levels, order_capacity, levels)
    }
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LEVELS, Self::DEFAULT_ORDERS, Self::DEFAULT_LEVELS)
    }
}
