//! Criterion micro-benchmarks for cycle execution.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use petri_bench::{glider_profile, soup_profile};
use petri_engine::World;

/// Benchmark: 100 cycles of a lone glider on a 256x256 board.
///
/// The sparse case: per cycle the tracker bounds the scan to a few
/// dozen cells out of 65K.
fn bench_cycle_sparse_glider(c: &mut Criterion) {
    c.bench_function("cycle_sparse_glider_256", |b| {
        b.iter(|| {
            let mut world = glider_profile();
            for _ in 0..100 {
                black_box(world.cycle());
            }
            black_box(world.population())
        });
    });
}

/// Benchmark: 20 cycles of a dense 128x128 soup.
///
/// The chaotic case: most of the board stays dirty, so this measures
/// the engine's overhead over a plain full scan.
fn bench_cycle_dense_soup(c: &mut Criterion) {
    c.bench_function("cycle_dense_soup_128", |b| {
        b.iter(|| {
            let mut world = soup_profile(128, 128, 42);
            for _ in 0..20 {
                black_box(world.cycle());
            }
            black_box(world.population())
        });
    });
}

/// Benchmark: the idle fast path on a settled board.
fn bench_cycle_idle(c: &mut Criterion) {
    let mut world = World::new(256, 256).unwrap();
    // Settle: an empty board is idle from the start.
    world.cycle();
    c.bench_function("cycle_idle_256", |b| {
        b.iter(|| black_box(world.cycle()));
    });
}

/// Benchmark: direct edits marking dirtiness without cycling.
fn bench_toggle_edits(c: &mut Criterion) {
    c.bench_function("toggle_edits_4k", |b| {
        b.iter(|| {
            let mut world = World::new(128, 128).unwrap();
            for i in 0u32..4096 {
                world.toggle_cell(i % 128, (i / 128) % 128);
            }
            black_box(world.population())
        });
    });
}

criterion_group!(
    benches,
    bench_cycle_sparse_glider,
    bench_cycle_dense_soup,
    bench_cycle_idle,
    bench_toggle_edits,
);
criterion_main!(benches);
