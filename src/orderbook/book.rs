//! Two-sided book built from one [`LimitHeap`] per side.
//!
//! ## Price Ordering
//!
//! - **Bids** (buy orders): best bid = highest price
//! - **Asks** (sell orders): best ask = lowest price
//!
//! The book only routes. It never crosses the sides, so a bid at or above
//! the best ask simply rests; deciding what to do about that belongs to
//! whatever sits on top of the book.
//!
//! ## Example
//!
//! ```
//! use level_heap::{Order, OrderBook, Side};
//!
//! let mut book = OrderBook::new();
//!
//! book.push(Order::buy(1, 100)).unwrap();
//! book.push(Order::sell(2, 103)).unwrap();
//!
//! assert_eq!(book.best_bid(), Some(100));
//! assert_eq!(book.best_ask(), Some(103));
//! assert_eq!(book.spread(), Some(3));
//! ```

use crate::config::HeapConfig;
use crate::error::{HeapError, Result};
use crate::orderbook::LimitHeap;
use crate::types::{Order, Side};

/// Bid and ask heaps for one instrument.
#[derive(Debug)]
pub struct OrderBook {
    bids: LimitHeap,
    asks: LimitHeap,
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderBook {
    /// Create an empty book with default capacity hints.
    pub fn new() -> Self {
        Self::with_config(HeapConfig::default())
    }

    /// Create an empty book; `config` sizes each side.
    pub fn with_config(config: HeapConfig) -> Self {
        Self {
            bids: LimitHeap::with_config(Side::Buy, config),
            asks: LimitHeap::with_config(Side::Sell, config),
        }
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    /// Total resting orders on both sides.
    #[inline]
    pub fn len(&self) -> usize {
        self.bids.size() + self.asks.size()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn bid_count(&self) -> usize {
        self.bids.size()
    }

    #[inline]
    pub fn ask_count(&self) -> usize {
        self.asks.size()
    }

    /// The heap holding `side`.
    pub fn side(&self, side: Side) -> &LimitHeap {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut LimitHeap {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }

    // ========================================================================
    // Order Management
    // ========================================================================

    /// Rest an order on its own side.
    ///
    /// # Errors
    ///
    /// [`HeapError::DuplicateOrder`] if the id already rests on either side.
    pub fn push(&mut self, order: Order) -> Result<()> {
        if self.contains(order.id) {
            return Err(HeapError::DuplicateOrder(order.id));
        }
        self.side_mut(order.side).push(order)
    }

    /// Cancel an order by id, whichever side it rests on.
    ///
    /// # Example
    ///
    /// ```
    /// use level_heap::{HeapError, Order, OrderBook};
    ///
    /// let mut book = OrderBook::new();
    /// book.push(Order::sell(42, 100)).unwrap();
    ///
    /// assert_eq!(book.cancel(42).map(|o| o.id), Ok(42));
    /// assert_eq!(book.cancel(42), Err(HeapError::OrderNotFound(42)));
    /// ```
    pub fn cancel(&mut self, order_id: u64) -> Result<Order> {
        if self.bids.contains(order_id) {
            Ok(self.bids.remove(order_id))
        } else if self.asks.contains(order_id) {
            Ok(self.asks.remove(order_id))
        } else {
            Err(HeapError::OrderNotFound(order_id))
        }
    }

    /// Remove and return the best order on `side`.
    pub fn pop(&mut self, side: Side) -> Option<Order> {
        self.side_mut(side).pop()
    }

    /// The best order on `side`.
    pub fn peek(&mut self, side: Side) -> Option<&Order> {
        self.side_mut(side).peek()
    }

    #[inline]
    pub fn contains(&self, order_id: u64) -> bool {
        self.bids.contains(order_id) || self.asks.contains(order_id)
    }

    pub fn get(&self, order_id: u64) -> Option<&Order> {
        self.bids.get(order_id).or_else(|| self.asks.get(order_id))
    }

    // ========================================================================
    // Best Bid/Ask
    // ========================================================================

    /// Highest resting buy price.
    pub fn best_bid(&mut self) -> Option<i64> {
        self.bids.best_price()
    }

    /// Lowest resting sell price.
    pub fn best_ask(&mut self) -> Option<i64> {
        self.asks.best_price()
    }

    /// best_ask - best_bid
    ///
    /// `None` if either side is empty, the sides are crossed, or the
    /// difference does not fit in an `i64`.
    pub fn spread(&mut self) -> Option<i64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) if ask >= bid => ask.checked_sub(bid),
            _ => None,
        }
    }

    /// Clear all orders from the book
    pub fn clear(&mut self) {
        self.bids.clear();
        self.asks.clear();
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
