//! Core data types for the level heap
//!
//! ## Types
//!
//! - [`Order`]: A resting limit order
//! - [`Side`]: Buy or Sell, which also fixes price priority

mod order;

pub use order::{Order, Side};
