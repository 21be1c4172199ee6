//! Benchmarks for grid table layout and rendering.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rstgen_table::{column_widths, render_grid};

/// Build a grid with `rows` x `columns` cells of varying length.
fn create_grid(rows: usize, columns: usize) -> Vec<Vec<String>> {
    (0..rows)
        .map(|r| {
            (0..columns)
                .map(|c| "x".repeat((r * 7 + c * 3) % 23))
                .collect()
        })
        .collect()
}

fn bench_column_widths(c: &mut Criterion) {
    let mut group = c.benchmark_group("column_widths");

    for size in [4, 16, 64] {
        let grid = create_grid(size, size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &grid, |b, grid| {
            b.iter(|| column_widths(grid).unwrap());
        });
    }

    group.finish();
}

fn bench_render_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_grid");

    for size in [4, 16, 64] {
        let grid = create_grid(size, size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &grid, |b, grid| {
            b.iter(|| render_grid(grid).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_column_widths, bench_render_grid);
criterion_main!(benches);
