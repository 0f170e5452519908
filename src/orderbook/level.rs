//! Price level management for orders at the same price.
//!
//! ## Design
//!
//! A `PriceLevel` represents all resting orders at a single price point.
//! Orders are threaded into a singly-linked FIFO chain (price-time
//! priority); each node also records which slot points at it, so any
//! node can be unlinked in O(1).
//!
//! ## Queue Structure
//!
//! ```text
//! head ──> order1 ──> order2 ──> order3 <── tail
//!  ^         │ ^        │ ^
//!  └─inward──┘ └─inward─┘ └─inward (After(order2))
//! ```
//!
//! - New orders are appended at the tail
//! - The heap pops orders from the head
//! - Any order can be unlinked in O(1) through its `inward` slot
//!
//! The level knows nothing about the heap that holds it.

use slab::Slab;

use crate::orderbook::node::{Inward, OrderNode};

/// A price level containing orders at a single price.
///
/// The actual order data lives in the slab; this struct only
/// holds the queue metadata.
#[derive(Debug, Clone)]
pub struct PriceLevel {
    /// Price for this level (ticks)
    pub price: i64,

    /// Total quantity resting at this level
    pub total_quantity: u64,

    /// Head of the order queue (oldest order, slab key)
    pub head: Option<usize>,

    /// Tail of the order queue (newest order, slab key)
    pub tail: Option<usize>,

    /// Number of orders at this price level
    pub order_count: usize,
}

impl PriceLevel {
    /// Create a new empty price level
    pub fn new(price: i64) -> Self {
        Self {
            price,
            total_quantity: 0,
            head: None,
            tail: None,
            order_count: 0,
        }
    }

    /// Check if the price level is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Append an order to the tail of the queue
    ///
    /// # Panics
    ///
    /// Panics if `key` (or the current tail) is not in the slab
    pub fn push_back(&mut self, key: usize, nodes: &mut Slab<OrderNode>) {
        let inward = match self.tail {
            Some(tail_key) => {
                let tail_node = nodes.get_mut(tail_key).expect("Invalid tail key");
                tail_node.outward = Some(key);
                Inward::After(tail_key)
            }
            None => {
                self.head = Some(key);
                Inward::Head
            }
        };

        let node = nodes.get_mut(key).expect("Invalid slab key");
        node.inward = Some(inward);
        node.outward = None;

        self.tail = Some(key);
        self.order_count += 1;
        self.total_quantity = self.total_quantity.saturating_add(node.quantity());
    }

    /// Remove and return the head order's slab key
    ///
    /// Returns `None` if the level is empty.
    pub fn pop_front(&mut self, nodes: &mut Slab<OrderNode>) -> Option<usize> {
        let key = self.head?;

        let node = nodes.get_mut(key).expect("Invalid head key");
        let next = node.outward;
        let quantity = node.quantity();
        node.unlink();

        self.head = next;
        match next {
            Some(next_key) => {
                nodes.get_mut(next_key).expect("Invalid next key").inward = Some(Inward::Head);
            }
            None => self.tail = None,
        }

        self.order_count -= 1;
        self.total_quantity = self.total_quantity.saturating_sub(quantity);

        Some(key)
    }

    /// Unlink an arbitrary order from the queue
    ///
    /// Writes the node's `outward` through the slot named by its `inward`,
    /// hands the node's `inward` to its successor, and pulls `tail` back to
    /// the predecessor when the node was the tail.
    ///
    /// # Panics
    ///
    /// Panics if `key` is not a linked member of this level
    pub fn unlink(&mut self, key: usize, nodes: &mut Slab<OrderNode>) {
        let node = nodes.get(key).expect("Invalid slab key");
        let inward = node.inward.expect("order node is not linked into a level");
        let outward = node.outward;
        let quantity = node.quantity();

        match inward {
            Inward::Head => self.head = outward,
            Inward::After(prev) => {
                nodes.get_mut(prev).expect("Invalid prev key").outward = outward;
            }
        }

        match outward {
            Some(next) => {
                nodes.get_mut(next).expect("Invalid next key").inward = Some(inward);
            }
            None => {
                self.tail = match inward {
                    Inward::Head => None,
                    Inward::After(prev) => Some(prev),
                };
            }
        }

        nodes.get_mut(key).expect("Invalid slab key").unlink();

        self.order_count -= 1;
        self.total_quantity = self.total_quantity.saturating_sub(quantity);
    }

    /// Get the head order's slab key (oldest order)
    #[inline]
    pub fn peek_front(&self) -> Option<usize> {
        self.head
    }

    /// Walk the queue from head to tail, yielding slab keys.
    pub fn iter<'a>(&self, nodes: &'a Slab<OrderNode>) -> LevelIter<'a> {
        LevelIter {
            nodes,
            next: self.head,
        }
    }
}

/// Iterator over the slab keys of a level, oldest first.
pub struct LevelIter<'a> {
    nodes: &'a Slab<OrderNode>,
    next: Option<usize>,
}

impl Iterator for LevelIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let key = self.next?;
        self.next = self.nodes.get(key).and_then(|node| node.outward);
        Some(key)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
