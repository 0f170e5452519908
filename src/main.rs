//! Level Heap - Demo Binary
//!
//! Walks a bid heap and an ask heap through pushes, cancels and pops and
//! logs what comes out. Run with `cargo run`.

use level_heap::{LimitHeap, Order, OrderBook, Side};
use tracing::info;

fn main() -> level_heap::Result<()> {
    tracing_subscriber::fmt::init();

    info!("Level heap demo");

    // Price then time priority on the bid side
    let mut bids = LimitHeap::new(Side::Buy);
    bids.push(Order::buy(1, 100))?;
    bids.push(Order::buy(2, 105))?;
    bids.push(Order::buy(3, 100))?;
    info!(size = bids.size(), levels = bids.level_count(), "bids loaded");

    while let Some(order) = bids.pop() {
        info!(id = order.id, price = order.price, "popped bid");
    }

    // Cancel from the middle of a level
    let mut asks = LimitHeap::new(Side::Sell);
    for id in 1..=3 {
        asks.push(Order::sell(id, 100))?;
    }
    let cancelled = asks.remove(2);
    info!(id = cancelled.id, remaining = asks.size(), "cancelled ask");
    info!(root = %asks.state_root_hex(), "ask state root");

    while let Some(order) = asks.pop() {
        info!(id = order.id, price = order.price, "popped ask");
    }

    // Both sides together
    let mut book = OrderBook::new();
    for (id, price) in [(10, 99), (11, 101), (12, 98)] {
        book.push(Order::buy(id, price))?;
        book.push(Order::sell(id + 100, price + 5))?;
    }
    let (bid, ask, spread) = (book.best_bid(), book.best_ask(), book.spread());
    info!(?bid, ?ask, ?spread, "book top");

    Ok(())
}
