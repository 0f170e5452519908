//! # Level Heap
//!
//! One side of a limit order book as a price-time priority queue.
//!
//! ## Architecture
//!
//! - **Types**: Order and Side
//! - **OrderBook**: price levels, the level heap and a two-sided wrapper
//! - **Config / Error**: construction hints and recoverable errors
//!
//! ## Design Principles
//!
//! 1. **Price-time priority**: best price first, FIFO within a price
//! 2. **O(1) cancel**: every order records the slot that points at it
//! 3. **Lazy purge**: empty levels leave the heap when they reach the root
//! 4. **Single owner**: no locking; one thread owns a side

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Order, Side
pub mod types;

/// Price levels, the level heap and the two-sided book
pub mod orderbook;

/// Construction hints
pub mod config;

/// Recoverable errors
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use config::HeapConfig;
pub use error::{HeapError, Result};
pub use orderbook::{LimitHeap, OrderBook, OrderNode, PriceLevel};
pub use types::{Order, Side};
