//! Criterion micro-benchmarks for single walks and small Laplace solves.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use walkfield_bench::{reference_solver, small_solver};
use walkfield_core::{seeded_rng, Cell};
use walkfield_laplace::{default_step_budget, walk, BoundaryConditions, LaplaceSolver};
use walkfield_space::SquareGrid;
use walkfield_test_utils::fixtures::FIXED_SEED;

fn bench_walk_from_centre(c: &mut Criterion) {
    let grid = SquareGrid::new(51).unwrap();
    let field = BoundaryConditions::default().to_field(&grid);
    let budget = default_step_budget(51);
    let start = Cell::new(25, 25);
    let mut rng = seeded_rng(FIXED_SEED);

    c.bench_function("walk_centre_51", |b| {
        b.iter(|| {
            let out = walk(&grid, &field, black_box(start), budget, &mut rng).unwrap();
            black_box(out.value);
        });
    });
}

fn bench_walk_near_edge(c: &mut Criterion) {
    let grid = SquareGrid::new(51).unwrap();
    let field = BoundaryConditions::default().to_field(&grid);
    let budget = default_step_budget(51);
    let mut rng = seeded_rng(FIXED_SEED);

    c.bench_function("walk_near_edge_51", |b| {
        b.iter(|| {
            let out = walk(&grid, &field, black_box(Cell::new(1, 25)), budget, &mut rng).unwrap();
            black_box(out.value);
        });
    });
}

fn bench_solve_small(c: &mut Criterion) {
    let config = small_solver(FIXED_SEED).unwrap();
    c.bench_function("solve_21x21_n20", |b| {
        b.iter(|| {
            let mut solver = LaplaceSolver::new(config.clone()).unwrap();
            let report = solver.solve().unwrap();
            black_box(report.field);
        });
    });
}

fn bench_estimate_reference_centre(c: &mut Criterion) {
    let mut solver = LaplaceSolver::new(reference_solver(FIXED_SEED).unwrap()).unwrap();
    let grid = *solver.grid();
    let field = solver.config().boundary.to_field(&grid);
    let centre = grid.centre();

    c.bench_function("estimate_centre_51_n200", |b| {
        b.iter(|| black_box(solver.estimate(&field, black_box(centre)).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_walk_from_centre,
    bench_walk_near_edge,
    bench_solve_small,
    bench_estimate_reference_centre
);
criterion_main!(benches);
