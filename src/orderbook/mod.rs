//! Order book side structures.
//!
//! ## Architecture
//!
//! Each side of the book is a [`LimitHeap`]:
//!
//! - **Slab-based storage**: O(1) order insertion, removal, and lookup
//! - **Price levels**: intrusive FIFO chains, one per price
//! - **Binary heap**: price levels ordered best-first for the side
//!
//! ## Components
//!
//! - [`OrderNode`]: Wrapper around `Order` with intrusive link slots
//! - [`PriceLevel`]: FIFO chain of orders at a single price point
//! - [`KeyIndex`]: Strict price/id → slab key map
//! - [`LimitHeap`]: Heap of price levels for one side
//! - [`OrderBook`]: One heap per side, no crossing
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Push at existing price | O(1) |
//! | Push at new price | O(log L) |
//! | Cancel order by ID | O(1) |
//! | Peek / Pop best | O(log L) amortized |

pub mod node;
pub mod level;
pub mod index;
pub mod heap;
pub mod book;

pub use node::{Inward, OrderNode};
pub use level::PriceLevel;
pub use index::KeyIndex;
pub use heap::LimitHeap;
pub use book::OrderBook;
