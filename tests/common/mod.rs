//! Shared helpers for the integration tests.
//!
//! - [`OrderSet`]: identity set of orders, used to track what should rest
//! - [`Model`]: naive price-time queue the heap is checked against
//! - order generators driven by a seeded `ChaCha8Rng`

#![allow(dead_code)]

use std::collections::HashMap;

use level_heap::{Order, Side};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// OrderSet
// ============================================================================

/// Set of orders keyed by identity.
///
/// `for_each` visits every contained order exactly once, in no particular
/// order.
#[derive(Debug, Default)]
pub struct OrderSet {
    orders: HashMap<u64, Order>,
}

impl OrderSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, order: &Order) {
        self.orders.insert(order.id, order.clone());
    }

    pub fn remove(&mut self, order: &Order) {
        self.orders.remove(&order.id);
    }

    pub fn contains(&self, order: &Order) -> bool {
        self.orders.get(&order.id) == Some(order)
    }

    pub fn for_each<F: FnMut(&Order)>(&self, mut visit: F) {
        for order in self.orders.values() {
            visit(order);
        }
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

// ============================================================================
// Reference model
// ============================================================================

/// Linear-scan price-time queue. Slow and obviously correct.
#[derive(Debug)]
pub struct Model {
    side: Side,
    seq: u64,
    /// (price, arrival sequence, order)
    resting: Vec<(i64, u64, Order)>,
}

impl Model {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            seq: 0,
            resting: Vec::new(),
        }
    }

    pub fn push(&mut self, order: Order) {
        self.seq += 1;
        self.resting.push((order.price, self.seq, order));
    }

    fn best_index(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, (price, seq, _)) in self.resting.iter().enumerate() {
            best = match best {
                None => Some(i),
                Some(b) => {
                    let (best_price, best_seq, _) = &self.resting[b];
                    let wins = self.side.better(*price, *best_price)
                        || (price == best_price && seq < best_seq);
                    if wins {
                        Some(i)
                    } else {
                        Some(b)
                    }
                }
            };
        }
        best
    }

    pub fn peek(&self) -> Option<&Order> {
        self.best_index().map(|i| &self.resting[i].2)
    }

    pub fn pop(&mut self) -> Option<Order> {
        let i = self.best_index()?;
        Some(self.resting.remove(i).2)
    }

    pub fn remove(&mut self, id: u64) -> Option<Order> {
        let i = self.resting.iter().position(|(_, _, o)| o.id == id)?;
        Some(self.resting.remove(i).2)
    }

    pub fn len(&self) -> usize {
        self.resting.len()
    }

    pub fn ids(&self) -> Vec<u64> {
        self.resting.iter().map(|(_, _, o)| o.id).collect()
    }
}

// ============================================================================
// Generators
// ============================================================================

/// `count` orders with unique ids and random prices in `[-spread, spread]`.
pub fn random_orders(count: usize, side: Side, spread: i64, seed: u64) -> Vec<Order> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            Order::new(
                (i + 1) as u64,
                side,
                rng.gen_range(-spread..=spread),
                rng.gen_range(1..=1_000),
                i as u64,
            )
        })
        .collect()
}

/// Deterministic shuffle of `orders`.
pub fn scramble(orders: &[Order], seed: u64) -> Vec<Order> {
    let mut out = orders.to_vec();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for i in 0..out.len() {
        let j = rng.gen_range(0..out.len());
        out.swap(i, j);
    }
    out
}

/// Every order visited by `set.for_each`.
pub fn extract_all(set: &OrderSet) -> Vec<Order> {
    let mut out = Vec::new();
    set.for_each(|order| out.push(order.clone()));
    out
}
