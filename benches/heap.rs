//! Benchmarks for the level heap.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark group
//! cargo bench -- order_operations
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{
    black_box, criterion_group, criterion_main,
    BatchSize, BenchmarkId, Criterion, Throughput,
};
use std::time::Duration;

use level_heap::{HeapConfig, LimitHeap, Order, Side};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// HELPER FUNCTIONS - Deterministic order generation
// ============================================================================

/// Heap holding `count` bids spread over `levels` prices, ids 1..=count.
fn populated_bids(count: usize, levels: i64) -> LimitHeap {
    let mut heap = LimitHeap::with_config(Side::Buy, HeapConfig::with_orders(count * 2));
    for i in 0..count {
        let price = (i as i64) % levels;
        heap.push(Order::buy((i + 1) as u64, price)).unwrap();
    }
    heap
}

fn generate_order_batch(count: usize, seed: u64) -> Vec<Order> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|i| Order::new((i + 1) as u64, Side::Sell, rng.gen_range(-500..=500), 1, i as u64))
        .collect()
}

// ============================================================================
// BENCHMARK: Order Operations
// ============================================================================

fn bench_order_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_operations");

    group.measurement_time(Duration::from_secs(5));

    group.bench_function("push_new_level", |b| {
        b.iter_batched(
            || populated_bids(1_000, 100),
            |mut heap| {
                // Price above every level: allocates and sifts to the root
                black_box(heap.push(Order::buy(1_000_000, 1_000)))
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("push_existing_level", |b| {
        b.iter_batched(
            || populated_bids(1_000, 100),
            |mut heap| black_box(heap.push(Order::buy(1_000_000, 50))),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("cancel_order", |b| {
        b.iter_batched(
            || populated_bids(1_000, 100),
            |mut heap| black_box(heap.remove(500)),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("pop_best", |b| {
        b.iter_batched(
            || populated_bids(1_000, 100),
            |mut heap| black_box(heap.pop()),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ============================================================================
// BENCHMARK: Throughput
// ============================================================================

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("throughput");

    group.measurement_time(Duration::from_secs(10));
    group.sample_size(50);

    for batch_size in [1_000, 10_000, 50_000] {
        group.throughput(Throughput::Elements(batch_size as u64));

        group.bench_with_input(
            BenchmarkId::new("push_then_drain", batch_size),
            &batch_size,
            |b, &size| {
                let orders = generate_order_batch(size, 42);

                b.iter_batched(
                    || {
                        let heap = LimitHeap::with_config(Side::Sell, HeapConfig::with_orders(size));
                        (heap, orders.clone())
                    },
                    |(mut heap, orders)| {
                        for order in orders {
                            heap.push(order).unwrap();
                        }
                        black_box(heap.drain().count())
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Lazy Purge
// ============================================================================

fn bench_lazy_purge(c: &mut Criterion) {
    let mut group = c.benchmark_group("lazy_purge");

    group.measurement_time(Duration::from_secs(5));

    // Every level emptied by cancels; one peek purges them all
    group.bench_function("peek_after_cancelling_1k_levels", |b| {
        b.iter_batched(
            || {
                let mut heap = populated_bids(1_000, 1_000);
                for id in 1..=1_000 {
                    heap.remove(id);
                }
                heap
            },
            |mut heap| black_box(heap.peek().is_none()),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ============================================================================
// CRITERION ENTRY POINT
// ============================================================================

criterion_group!(
    benches,
    bench_order_operations,
    bench_throughput,
    bench_lazy_purge
);

criterion_main!(benches);
