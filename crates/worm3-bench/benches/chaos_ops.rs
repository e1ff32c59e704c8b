//! Criterion micro-benchmarks for the chaos cascade.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;
use worm3_bench::{unstable_world, BENCH_SIZES};
use worm3_chaos::{ChaosLevel, ChaosPropagator};

/// Benchmark: one level-4 chaos tick over a cube with ten flipped pairs.
///
/// The input lattice is reused every iteration, so each tick sees the same
/// candidates and only the RNG stream advances.
fn bench_chaos_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("chaos_tick");
    let chaos = ChaosPropagator::new(ChaosLevel::MAX);
    for size in BENCH_SIZES {
        let world = unstable_world(size, 10, 42).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        group.bench_with_input(BenchmarkId::from_parameter(size), &world, |b, w| {
            b.iter(|| black_box(chaos.step(w.lattice(), w.map(), &mut rng)));
        });
    }
    group.finish();
}

/// Benchmark: collect the unstable candidates of a flipped cube.
fn bench_candidates(c: &mut Criterion) {
    let mut group = c.benchmark_group("chaos_candidates");
    for size in BENCH_SIZES {
        let world = unstable_world(size, 10, 7).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &world, |b, w| {
            b.iter(|| black_box(ChaosPropagator::candidates(w.lattice())));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_chaos_tick, bench_candidates);
criterion_main!(benches);
