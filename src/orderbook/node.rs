//! Order node for slab-based storage.
//!
//! ## Design
//!
//! `OrderNode` wraps an `Order` with the two intrusive relations that
//! thread it into a price level:
//!
//! - `outward`: the next (newer) node in the level, or `None` at the tail
//! - `inward`: the slot that currently points at this node
//!
//! `inward` names a slot rather than a node. The slot is either the level's
//! head or the `outward` field of the predecessor, so unlinking is a single
//! write through `inward` with no scan and no branch on "am I the head".
//!
//! ## Slab Integration
//!
//! Per official slab docs (https://docs.rs/slab/0.4.11):
//! - Keys are `usize` values returned by `slab.insert()`
//! - Keys may be reused after `slab.remove()`
//! - O(1) insert, remove, and lookup
//!
//! Relations are slab keys, never references.

use crate::types::Order;

/// The slot currently referencing a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inward {
    /// The owning level's `head` slot
    Head,
    /// The `outward` slot of the node with this slab key
    After(usize),
}

/// Order node stored in the slab.
///
/// ## Memory Layout
///
/// ```text
/// OrderNode {
///     order: Order
///     inward: Option<Inward> (16 bytes with alignment)
///     outward: Option<usize> (16 bytes with alignment)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct OrderNode {
    /// The actual order data
    pub order: Order,

    /// Slot referencing this node; None when unlinked
    pub inward: Option<Inward>,

    /// Next order in the price level queue (slab key)
    /// None if this is the tail (newest order)
    pub outward: Option<usize>,
}

impl OrderNode {
    /// Create a new order node (not yet linked)
    ///
    /// # Example
    ///
    /// ```
    /// use level_heap::orderbook::OrderNode;
    /// use level_heap::types::Order;
    ///
    /// let node = OrderNode::new(Order::buy(1, 100));
    ///
    /// assert!(node.inward.is_none());
    /// assert!(node.outward.is_none());
    /// ```
    #[inline]
    pub fn new(order: Order) -> Self {
        Self {
            order,
            inward: None,
            outward: None,
        }
    }

    /// Check if this node is unlinked (not part of any price level)
    #[inline]
    pub fn is_unlinked(&self) -> bool {
        self.inward.is_none() && self.outward.is_none()
    }

    /// Clear both relations.
    #[inline]
    pub fn unlink(&mut self) {
        self.inward = None;
        self.outward = None;
    }

    #[inline]
    pub fn order_id(&self) -> u64 {
        self.order.id
    }

    #[inline]
    pub fn price(&self) -> i64 {
        self.order.price
    }

    #[inline]
    pub fn quantity(&self) -> u64 {
        self.order.quantity
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
