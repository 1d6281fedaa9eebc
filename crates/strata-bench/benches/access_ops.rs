//! Criterion micro-benchmarks for Array3D access paths.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use strata_array::Array3D;
use strata_bench::{index_sequence, mixed_sequence, signed_sequence};

type Grid = Array3D<f32, 16, 32, 32>;

fn grid() -> Box<Grid> {
    Box::new(Grid::from_fn(|[i, j, k]| (i * 1024 + j * 32 + k) as f32))
}

/// Benchmark: Full sweep of 16K cells via three-index access vs linear access.
fn bench_sweep(c: &mut Criterion) {
    let g = grid();

    c.bench_function("sweep_indexed_16k", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for i in 0..Grid::dim3() {
                for j in 0..Grid::dim2() {
                    for k in 0..Grid::dim1() {
                        acc += *g.get(i, j, k);
                    }
                }
            }
            black_box(acc)
        });
    });

    c.bench_function("sweep_linear_16k", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for idx in 0..Grid::size() {
                acc += *g.get_l(idx);
            }
            black_box(acc)
        });
    });
}

/// Benchmark: 4K random reads through the unchecked, default-valued and
/// checked tiers.
fn bench_random_access(c: &mut Criterion) {
    let g = grid();
    let hits = index_sequence(4096, *Grid::dimensions(), 42);
    let mixed = mixed_sequence(4096, *Grid::dimensions(), 42);
    let fallback = -1.0f32;

    c.bench_function("random_get_4k", |b| {
        b.iter(|| {
            for &inds in &hits {
                black_box(g[inds]);
            }
        });
    });

    c.bench_function("random_dget_mixed_4k", |b| {
        b.iter(|| {
            for &inds in &mixed {
                black_box(*g.dget_at(&fallback, inds));
            }
        });
    });

    c.bench_function("random_try_get_mixed_4k", |b| {
        b.iter(|| {
            for &[i, j, k] in &mixed {
                let _ = black_box(g.try_get(i, j, k));
            }
        });
    });
}

/// Benchmark: Unsigned vs signed bounds predicates over 4K triples.
fn bench_bounds(c: &mut Criterion) {
    let unsigned = mixed_sequence(4096, *Grid::dimensions(), 9);
    let signed = signed_sequence(4096, *Grid::dimensions(), 9);

    c.bench_function("in_bounds_4k", |b| {
        b.iter(|| {
            let n = unsigned
                .iter()
                .filter(|&&inds| Grid::in_bounds_at(black_box(inds)))
                .count();
            black_box(n)
        });
    });

    c.bench_function("in_bounds_signed_4k", |b| {
        b.iter(|| {
            let n = signed
                .iter()
                .filter(|&&inds| Grid::in_bounds_signed_at(black_box(inds)))
                .count();
            black_box(n)
        });
    });
}

criterion_group!(benches, bench_sweep, bench_random_access, bench_bounds);
criterion_main!(benches);
