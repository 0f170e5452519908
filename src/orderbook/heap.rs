//! One side of the book as a binary heap of price levels.
//!
//! ## Architecture
//!
//! - **Slab** (nodes): every resting order, wrapped in an [`OrderNode`]
//! - **Slab** (levels): every live [`PriceLevel`]
//! - **Level index**: price → level key, the only record of which prices exist
//! - **Order index**: order id → node key, for O(1) cancel
//! - **Heap array**: level keys ordered by the side comparator
//!
//! ## Lazy Level Deletion
//!
//! Cancelling an order never touches the heap array, so a level can sit in
//! the heap after its last order is gone. Empty levels are purged only when
//! they reach the root, at the start of every `peek`/`pop`. `pop` purges a
//! second time after taking the head order, because that order may have
//! been the last one at the root. Once any public read returns, the root
//! level (if any) is non-empty.
//!
//! ## Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Push (existing price) | O(1) |
//! | Push (new price) | O(log L) |
//! | Pop / Peek | O(log L) amortized |
//! | Remove by id | O(1) |
//!
//! L is the number of levels held in the heap array.
//!
//! ## Example
//!
//! ```
//! use level_heap::{LimitHeap, Order, Side};
//!
//! let mut bids = LimitHeap::new(Side::Buy);
//! bids.push(Order::buy(1, 100)).unwrap();
//! bids.push(Order::buy(2, 105)).unwrap();
//! bids.push(Order::buy(3, 100)).unwrap();
//!
//! assert_eq!(bids.peek().map(|o| o.id), Some(2));
//! assert_eq!(bids.pop().map(|o| o.id), Some(2));
//! assert_eq!(bids.pop().map(|o| o.id), Some(1));
//! assert_eq!(bids.pop().map(|o| o.id), Some(3));
//! assert!(bids.pop().is_none());
//! ```

use sha2::{Digest, Sha256};
use slab::Slab;
use tracing::{debug, trace};

use crate::config::HeapConfig;
use crate::error::{HeapError, Result};
use crate::orderbook::index::KeyIndex;
use crate::orderbook::{OrderNode, PriceLevel};
use crate::types::{Order, Side};

/// Price-time priority queue for a single side.
#[derive(Debug)]
pub struct LimitHeap {
    /// Side fixed at construction; picks the comparator
    kind: Side,

    /// Resting order storage
    nodes: Slab<OrderNode>,

    /// Level storage, including empty levels not yet purged
    levels: Slab<PriceLevel>,

    /// Price to level slab key
    level_index: KeyIndex<i64>,

    /// Order id to node slab key
    order_index: KeyIndex<u64>,

    /// Level slab keys in heap order
    heap: Vec<usize>,

    /// Total resting orders across all levels
    size: usize,
}

impl LimitHeap {
    /// Create an empty heap with default capacity hints.
    pub fn new(kind: Side) -> Self {
        Self::with_config(kind, HeapConfig::default())
    }

    /// Create an empty heap sized from `config`.
    pub fn with_config(kind: Side, config: HeapConfig) -> Self {
        Self {
            kind,
            nodes: Slab::with_capacity(config.order_capacity),
            levels: Slab::with_capacity(config.level_capacity),
            level_index: KeyIndex::with_capacity(config.level_capacity),
            order_index: KeyIndex::with_capacity(config.order_capacity),
            heap: Vec::with_capacity(config.heap_capacity),
            size: 0,
        }
    }

    /// Create an empty heap from explicit hints.
    ///
    /// # Example
    ///
    /// ```
    /// use level_heap::{LimitHeap, Side};
    ///
    /// let heap = LimitHeap::with_capacity(Side::Sell, 100, 10_000, 100);
    /// assert!(heap.capacity() >= 10_000);
    /// assert!(heap.is_empty());
    /// ```
    pub fn with_capacity(
        kind: Side,
        level_capacity: usize,
        order_capacity: usize,
        heap_capacity: usize,
    ) -> Self {
        Self::with_config(
            kind,
            HeapConfig::new(level_capacity, order_capacity, heap_capacity),
        )
    }

    // ========================================================================
    // Size and Identity
    // ========================================================================

    /// The side this heap holds.
    #[inline]
    pub fn kind(&self) -> Side {
        self.kind
    }

    /// Number of resting orders (not levels).
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Pre-allocated order slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Levels currently held in the heap array, including empty levels
    /// that have not been purged yet.
    #[inline]
    pub fn level_count(&self) -> usize {
        self.heap.len()
    }

    // ========================================================================
    // Queue Operations
    // ========================================================================

    /// Add an order behind every resting order at its price.
    ///
    /// # Errors
    ///
    /// - [`HeapError::SideMismatch`] if the order is for the other side
    /// - [`HeapError::DuplicateOrder`] if the id is already resting
    pub fn push(&mut self, order: Order) -> Result<()> {
        if order.side != self.kind {
            return Err(HeapError::SideMismatch {
                order_id: order.id,
                expected: self.kind,
                actual: order.side,
            });
        }
        if self.order_index.contains(order.id) {
            return Err(HeapError::DuplicateOrder(order.id));
        }

        let order_id = order.id;
        let price = order.price;

        let key = self.nodes.insert(OrderNode::new(order));
        self.order_index.put(order_id, key);

        match self.level_index.get(price) {
            Some(level_key) => {
                let level = self.levels.get_mut(level_key).expect("Invalid level key");
                level.push_back(key, &mut self.nodes);
            }
            None => {
                let mut level = PriceLevel::new(price);
                level.push_back(key, &mut self.nodes);
                let level_key = self.levels.insert(level);
                self.level_index.put(price, level_key);
                self.heap.push(level_key);
                self.sift_up(self.heap.len() - 1);
                trace!(side = %self.kind, price, "price level created");
            }
        }

        self.size += 1;
        debug_assert_eq!(self.size, self.order_index.len());
        Ok(())
    }

    /// Remove and return the best order, or `None` when nothing rests.
    pub fn pop(&mut self) -> Option<Order> {
        self.purge();
        let Some(&root) = self.heap.first() else {
            debug_assert!(self.order_index.is_empty(), "orders rest outside any level");
            return None;
        };

        let key = self
            .levels
            .get_mut(root)
            .expect("Invalid level key")
            .pop_front(&mut self.nodes)
            .expect("purged root level is empty");

        // The order just taken may have been the root's last
        self.purge();

        let node = self.nodes.remove(key);
        self.order_index.remove(node.order_id());
        self.size -= 1;
        debug_assert_eq!(self.size, self.order_index.len());

        Some(node.order)
    }

    /// The best order without removing it.
    ///
    /// Takes `&mut self` because empty levels at the root are purged first.
    pub fn peek(&mut self) -> Option<&Order> {
        self.purge();
        let root = *self.heap.first()?;
        let key = self.levels.get(root)?.peek_front()?;
        self.nodes.get(key).map(|node| &node.order)
    }

    /// Best resting price.
    pub fn best_price(&mut self) -> Option<i64> {
        self.peek().map(|order| order.price)
    }

    /// Cancel a resting order by id in O(1).
    ///
    /// The order's level is left in the heap even if it is now empty; it is
    /// purged when it next reaches the root.
    ///
    /// # Panics
    ///
    /// Panics if `order_id` is not resting. Use [`try_remove`](Self::try_remove)
    /// when that cannot be guaranteed.
    pub fn remove(&mut self, order_id: u64) -> Order {
        let key = self.order_index.remove(order_id);
        let price = self.nodes.get(key).expect("Invalid slab key").price();
        let level_key = self
            .level_index
            .get(price)
            .expect("resting order has no price level");

        self.levels
            .get_mut(level_key)
            .expect("Invalid level key")
            .unlink(key, &mut self.nodes);
        self.size -= 1;
        debug_assert_eq!(self.size, self.order_index.len());

        self.nodes.remove(key).order
    }

    /// Cancel a resting order by id, reporting an absent id as an error.
    pub fn try_remove(&mut self, order_id: u64) -> Result<Order> {
        if !self.order_index.contains(order_id) {
            return Err(HeapError::OrderNotFound(order_id));
        }
        Ok(self.remove(order_id))
    }

    /// Pop every order in priority order.
    pub fn drain(&mut self) -> impl Iterator<Item = Order> + '_ {
        std::iter::from_fn(move || self.pop())
    }

    /// Drop every order and level, keeping allocated capacity.
    pub fn clear(&mut self) {
        debug!(side = %self.kind, orders = self.size, levels = self.heap.len(), "clearing heap");
        self.nodes.clear();
        self.levels.clear();
        self.level_index.clear();
        self.order_index.clear();
        self.heap.clear();
        self.size = 0;
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    #[inline]
    pub fn contains(&self, order_id: u64) -> bool {
        self.order_index.contains(order_id)
    }

    /// A resting order by id.
    pub fn get(&self, order_id: u64) -> Option<&Order> {
        let key = self.order_index.get(order_id)?;
        self.nodes.get(key).map(|node| &node.order)
    }

    /// The level at `price`, if one exists (it may be empty and unpurged).
    pub fn level(&self, price: i64) -> Option<&PriceLevel> {
        let level_key = self.level_index.get(price)?;
        self.levels.get(level_key)
    }

    /// Orders resting at `price`, oldest first.
    pub fn orders_at(&self, price: i64) -> impl Iterator<Item = &Order> + '_ {
        self.level(price)
            .into_iter()
            .flat_map(move |level| level.iter(&self.nodes))
            .filter_map(move |key| self.nodes.get(key).map(|node| &node.order))
    }

    // ========================================================================
    // State Root
    // ========================================================================

    /// SHA-256 over the resting orders in priority order.
    ///
    /// Two heaps holding the same orders at the same queue positions produce
    /// the same root, regardless of how their heap arrays are laid out or
    /// how many empty levels are still unpurged.
    pub fn state_root(&self) -> [u8; 32] {
        let mut live: Vec<&PriceLevel> = self
            .heap
            .iter()
            .filter_map(|&level_key| self.levels.get(level_key))
            .filter(|level| !level.is_empty())
            .collect();
        live.sort_by(|a, b| match self.kind {
            Side::Buy => b.price.cmp(&a.price),
            Side::Sell => a.price.cmp(&b.price),
        });

        let mut hasher = Sha256::new();
        hasher.update([self.kind.to_u8()]);

        let mut buf = Vec::with_capacity(Order::ENCODED_LEN);
        for level in live {
            hasher.update(level.price.to_le_bytes());
            hasher.update((level.order_count as u64).to_le_bytes());
            for key in level.iter(&self.nodes) {
                buf.clear();
                self.nodes[key].order.encode(&mut buf);
                hasher.update(&buf);
            }
        }

        let mut root = [0u8; 32];
        root.copy_from_slice(&hasher.finalize());
        root
    }

    /// [`state_root`](Self::state_root) as a hex string.
    pub fn state_root_hex(&self) -> String {
        hex::encode(self.state_root())
    }

    // ========================================================================
    // Heap Maintenance
    // ========================================================================

    /// Drop empty levels from the root until the root has orders.
    fn purge(&mut self) {
        while let Some(&root) = self.heap.first() {
            if !self.levels[root].is_empty() {
                return;
            }

            let last = self.heap.len() - 1;
            self.heap.swap(0, last);
            self.heap.pop();
            self.sift_down(0);

            let level = self.levels.remove(root);
            self.level_index.remove(level.price);
            trace!(side = %self.kind, price = level.price, "empty price level purged");
        }
    }

    #[inline]
    fn price_at(&self, position: usize) -> i64 {
        self.levels[self.heap[position]].price
    }

    #[inline]
    fn better_at(&self, a: usize, b: usize) -> bool {
        self.kind.better(self.price_at(a), self.price_at(b))
    }

    fn sift_up(&mut self, mut child: usize) {
        while child > 0 {
            let parent = (child - 1) / 2;
            if !self.better_at(child, parent) {
                break;
            }
            self.heap.swap(parent, child);
            child = parent;
        }
    }

    fn sift_down(&mut self, mut parent: usize) {
        let n = self.heap.len();
        loop {
            let left = 2 * parent + 1;
            if left >= n {
                break;
            }
            let right = left + 1;
            let child = if right < n && self.better_at(right, left) {
                right
            } else {
                left
            };
            if !self.better_at(child, parent) {
                break;
            }
            self.heap.swap(parent, child);
            parent = child;
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
