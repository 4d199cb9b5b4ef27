//! # Bloom Scalable Benchmarks
//!
//! | Operation | Cost |
//! |-----------|------|
//! | Fixed/Sized add, query | O(k) |
//! | Scalable query | O(k·F), F = filters in the chain |
//! | Scalable add | query + O(k), plus one allocation on growth |

use bloom_scalable::{FixedFilter, HashIndexer, MembershipFilter, ScalableFilter, SizedFilter};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;

// ============================================================================
// Hash position derivation
// ============================================================================

fn bench_hash_indexer(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash-indexer");

    group.bench_function("digest_str", |b| {
        b.iter(|| black_box(HashIndexer::new(black_box("0xABCD1234567890ABCDEF"))))
    });

    let indexer = HashIndexer::new("0xABCD1234567890ABCDEF");
    for k in [3usize, 7, 14] {
        group.bench_with_input(BenchmarkId::new("positions", k), &k, |b, &k| {
            b.iter(|| black_box(indexer.positions(k, 1 << 20).unwrap()))
        });
    }

    group.finish();
}

// ============================================================================
// Single filters
// ============================================================================

fn bench_sized_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("sized-filter");
    let mut rng = rand::thread_rng();

    for capacity in [1_000usize, 100_000] {
        let keys: Vec<u64> = (0..capacity).map(|_| rng.gen()).collect();

        group.throughput(Throughput::Elements(capacity as u64));
        group.bench_with_input(BenchmarkId::new("fill", capacity), &keys, |b, keys| {
            b.iter(|| {
                let mut filter = SizedFilter::new(keys.len() as f64, 0.01).unwrap();
                filter.add_all(keys).unwrap();
                black_box(filter.inner().bits_set())
            })
        });

        let mut filter = SizedFilter::new(capacity as f64, 0.01).unwrap();
        filter.add_all(&keys).unwrap();
        group.throughput(Throughput::Elements(1));
        group.bench_function(BenchmarkId::new("query_hit", capacity), |b| {
            b.iter(|| black_box(filter.query(&keys[0]).unwrap()))
        });
        group.bench_function(BenchmarkId::new("query_miss", capacity), |b| {
            b.iter(|| black_box(filter.query(&u64::MAX).unwrap()))
        });
    }

    group.finish();
}

fn bench_fixed_filter_cardinality(c: &mut Criterion) {
    let mut filter = FixedFilter::new(1 << 16, 7).unwrap();
    for i in 0..5_000u32 {
        filter.add(&i).unwrap();
    }

    c.bench_function("fixed-filter/approximate_cardinality", |b| {
        b.iter(|| black_box(filter.approximate_cardinality()))
    });
}

// ============================================================================
// Scalable chain
// ============================================================================

fn bench_scalable_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalable-filter");
    let mut rng = rand::thread_rng();

    for items in [1_000usize, 50_000] {
        let keys: Vec<u64> = (0..items).map(|_| rng.gen()).collect();

        group.throughput(Throughput::Elements(items as u64));
        group.bench_with_input(BenchmarkId::new("fill_from_128", items), &keys, |b, keys| {
            b.iter(|| {
                let mut filter = ScalableFilter::new(0.01).unwrap();
                filter.add_all(keys).unwrap();
                black_box(filter.filter_count())
            })
        });

        let mut filter = ScalableFilter::new(0.01).unwrap();
        filter.add_all(&keys).unwrap();
        group.throughput(Throughput::Elements(1));
        // A miss has to consult every filter in the chain
        group.bench_function(BenchmarkId::new("query_miss", items), |b| {
            b.iter(|| black_box(filter.query(&u64::MAX).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_hash_indexer,
    bench_sized_filter,
    bench_fixed_filter_cardinality,
    bench_scalable_filter
);
criterion_main!(benches);
