//! Criterion micro-benchmarks for matrix construction and the direct solve.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use heatgrid::prelude::*;
use heatgrid_assembly::assemble;
use heatgrid_bench::{reference_profile, square_plate};
use heatgrid_solver::{solve, LinearSystem};

/// Benchmark: matrix form of the reference plate.
fn bench_to_matrix_reference(c: &mut Criterion) {
    let grid = reference_profile().unwrap();
    let system = LinearSystem::from(assemble(&grid).unwrap());

    c.bench_function("to_matrix_reference_20x20", |b| {
        b.iter(|| black_box(system.to_matrix().unwrap()));
    });
}

/// Benchmark: partial vs full pivoting on the reference plate.
fn bench_solve_strategies(c: &mut Criterion) {
    let grid = reference_profile().unwrap();
    let system = LinearSystem::from(assemble(&grid).unwrap());

    let mut group = c.benchmark_group("solve_reference_20x20");
    for strategy in [SolverStrategy::PartialPivotLu, SolverStrategy::FullPivotLu] {
        let config = SolverConfig::with_strategy(strategy);
        group.bench_function(strategy.name(), |b| {
            b.iter(|| black_box(solve(&system, &config).unwrap()));
        });
    }
    group.finish();
}

/// Benchmark: end-to-end assemble + solve on growing plates.
fn bench_end_to_end_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble_and_solve");
    group.sample_size(20);
    for n in [8u32, 16, 32] {
        let grid = square_plate(n).unwrap();
        group.bench_function(format!("{n}x{n}"), |b| {
            b.iter(|| {
                let system = LinearSystem::from(assemble(&grid).unwrap());
                black_box(solve(&system, &SolverConfig::default()).unwrap())
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_to_matrix_reference,
    bench_solve_strategies,
    bench_end_to_end_scaling
);
criterion_main!(benches);
