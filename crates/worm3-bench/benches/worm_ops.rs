//! Criterion micro-benchmarks for worm movement and the world frame tick.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use worm3_bench::{unstable_world, worm_world, BENCH_SIZES};

/// Benchmark: one worm step from a fresh game.
fn bench_worm_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("worm_step");
    for size in BENCH_SIZES {
        let world = worm_world(size, 42).unwrap();
        let game = world.worm().unwrap().clone();
        group.bench_with_input(BenchmarkId::from_parameter(size), &world, |b, w| {
            b.iter(|| {
                let mut g = game.clone();
                black_box(g.step(w.lattice(), w.map()))
            });
        });
    }
    group.finish();
}

/// Benchmark: a frame that fires the worm clock.
fn bench_world_advance_worm(c: &mut Criterion) {
    let mut group = c.benchmark_group("world_advance_worm");
    for size in BENCH_SIZES {
        let world = worm_world(size, 42).unwrap();
        let dt = world.worm().unwrap().move_interval();
        group.bench_with_input(BenchmarkId::from_parameter(size), &world, |b, w| {
            b.iter(|| black_box(w.advance(dt)));
        });
    }
    group.finish();
}

/// Benchmark: a frame that fires the chaos clock.
fn bench_world_advance_chaos(c: &mut Criterion) {
    let mut group = c.benchmark_group("world_advance_chaos");
    for size in BENCH_SIZES {
        let world = unstable_world(size, 10, 42).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &world, |b, w| {
            b.iter(|| black_box(w.advance(1.0)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_worm_step,
    bench_world_advance_worm,
    bench_world_advance_chaos
);
criterion_main!(benches);
