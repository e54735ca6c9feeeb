// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! Copying versus in-place dispatch over dense rows.
//!
//! Run with `--features parallel_proc` to compare the Rayon row loop.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rowmatrix::{DenseVector, RowMatrix};

const COLS: usize = 1024;

fn build(rows: usize) -> RowMatrix<DenseVector<f64>> {
    let data = (0..rows)
        .map(|r| DenseVector::from_vec((0..COLS).map(|c| (r * COLS + c) as f64 * 1e-3).collect()))
        .collect();
    RowMatrix::from_rows(1, 0, COLS as u64, data)
}

fn bench_broadcast_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("broadcast_add");
    let v = DenseVector::from_vec(vec![0.5f64; COLS]);

    for rows in [16usize, 128, 1024] {
        let m = build(rows);

        group.bench_with_input(BenchmarkId::new("copy", rows), &rows, |b, _| {
            b.iter(|| m.add_vec(black_box(&v)))
        });

        let mut target = m.clone();
        group.bench_with_input(BenchmarkId::new("in_place", rows), &rows, |b, _| {
            b.iter(|| {
                target.iadd_vec(black_box(&v)).map(|t| t.num_rows())
            })
        });
    }
    group.finish();
}

fn bench_reductions(c: &mut Criterion) {
    let mut group = c.benchmark_group("reductions");
    let m = build(1024);
    let weights = DenseVector::from_vec(vec![0.25f64; 1024]);
    let x = DenseVector::from_vec(vec![1.0f64; COLS]);

    group.bench_function("norm", |b| b.iter(|| black_box(&m).norm()));
    group.bench_function("dot", |b| b.iter(|| m.dot(black_box(&x))));
    group.bench_function("trans_dot", |b| b.iter(|| m.trans_dot(black_box(&weights))));
    group.finish();
}

criterion_group!(benches, bench_broadcast_add, bench_reductions);
criterion_main!(benches);
