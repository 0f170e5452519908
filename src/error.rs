//! Error types for the level heap.
//!
//! Only malformed input is reported through [`HeapError`]. Contract
//! violations on the unchecked paths (`LimitHeap::remove` with an id that
//! is not resting, index misuse) panic instead.

use thiserror::Error;

use crate::types::Side;

/// Result type alias for heap operations.
pub type Result<T> = std::result::Result<T, HeapError>;

/// Recoverable errors raised by [`LimitHeap`](crate::LimitHeap) and
/// [`OrderBook`](crate::OrderBook).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeapError {
    /// Order pushed onto the heap for the other side
    #[error("order {order_id} is {actual} but the heap holds {expected} orders")]
    SideMismatch {
        order_id: u64,
        expected: Side,
        actual: Side,
    },

    /// Order id is already resting in the heap
    #[error("order {0} is already resting")]
    DuplicateOrder(u64),

    /// Order id is not resting in the heap
    #[error("order {0} not found")]
    OrderNotFound(u64),
}
