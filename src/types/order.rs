//! Order types for the level heap.
//!
//! ## Price Representation
//!
//! Prices are signed integers in ticks. The heap never interprets the
//! scale; it only compares prices, so any fixed tick size works.
//!
//! ## Canonical Encoding
//!
//! [`Order::encode`] writes a fixed-size little-endian record used when
//! hashing book state. The layout never changes between runs, so the same
//! book always produces the same bytes.

use std::fmt;

// ============================================================================
// Side enum
// ============================================================================

/// Order side: Buy or Sell
///
/// The side of a heap fixes its comparator:
/// - Buy: higher price is better
/// - Sell: lower price is better
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// Buy order (bid) - wants to purchase the asset
    #[default]
    Buy,
    /// Sell order (ask) - wants to sell the asset
    Sell,
}

impl Side {
    /// Convert to u8 for encoding
    pub fn to_u8(self) -> u8 {
        match self {
            Side::Buy => 0,
            Side::Sell => 1,
        }
    }

    /// Returns true if `a` has strictly better priority than `b` on this side.
    ///
    /// ```
    /// use level_heap::types::Side;
    ///
    /// assert!(Side::Buy.better(105, 100));
    /// assert!(Side::Sell.better(100, 105));
    /// assert!(!Side::Buy.better(100, 100));
    /// ```
    #[inline]
    pub fn better(self, a: i64, b: i64) -> bool {
        match self {
            Side::Buy => a > b,
            Side::Sell => a < b,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => f.write_str("BUY"),
            Side::Sell => f.write_str("SELL"),
        }
    }
}

// ============================================================================
// Order struct
// ============================================================================

/// A resting limit order.
///
/// The order itself carries no link fields; the heap wraps it in an
/// [`OrderNode`](crate::orderbook::OrderNode) that threads it into its
/// price level.
///
/// ## Example
///
/// ```
/// use level_heap::types::{Order, Side};
///
/// let order = Order::new(
///     1,          // id
///     Side::Buy,  // side
///     100,        // price (ticks)
///     10,         // quantity
///     0,          // timestamp
/// );
/// assert_eq!(order.side, Side::Buy);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Order {
    /// Unique order identifier
    pub id: u64,

    /// Order side, fixed for the life of the order
    pub side: Side,

    /// Limit price in ticks
    pub price: i64,

    /// Resting quantity
    pub quantity: u64,

    /// Arrival timestamp (caller-defined units)
    pub timestamp: u64,
}

impl Order {
    /// Size of the canonical encoding: 8 + 1 + 8 + 8 + 8
    pub const ENCODED_LEN: usize = 33;

    /// Create a new limit order
    ///
    /// # Arguments
    ///
    /// * `id` - Unique order identifier
    /// * `side` - Buy or Sell
    /// * `price` - Limit price in ticks
    /// * `quantity` - Quantity to rest
    /// * `timestamp` - Arrival timestamp
    pub fn new(id: u64, side: Side, price: i64, quantity: u64, timestamp: u64) -> Self {
        Self {
            id,
            side,
            price,
            quantity,
            timestamp,
        }
    }

    /// Shorthand for a buy order with unit quantity.
    pub fn buy(id: u64, price: i64) -> Self {
        Self::new(id, Side::Buy, price, 1, 0)
    }

    /// Shorthand for a sell order with unit quantity.
    pub fn sell(id: u64, price: i64) -> Self {
        Self::new(id, Side::Sell, price, 1, 0)
    }

    /// Append the canonical little-endian encoding of this order to `out`.
    pub fn encode(&self, out: &mut Vec<u8>) {
        out.reserve(Self::ENCODED_LEN);
        out.extend_from_slice(&self.id.to_le_bytes());
        out.push(self.side.to_u8());
        out.extend_from_slice(&self.price.to_le_bytes());
        out.extend_from_slice(&self.quantity.to_le_bytes());
        out.extend_from_slice(&self.timestamp.to_le_bytes());
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
