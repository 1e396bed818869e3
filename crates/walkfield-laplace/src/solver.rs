//! Monte-Carlo Laplace solver.
//!
//! For each interior cell `(i, j)` the solver runs `N` independent
//! walks, sums the boundary values they reach, and stores `sum / N` in
//! the potential field. Boundary cells are never recomputed.
//!
//! Results are written in place while later cells are still being
//! solved. This is sound because a walk halts on the first boundary
//! cell it touches and so only ever reads boundary entries.
//!
//! Cost is `O(L² · N · E[walk length])` with `E[walk length]` itself
//! `O(L²)` near the centre; keep `L` modest.

use std::time::Instant;

use tracing::{debug, info, instrument, warn};
use walkfield_core::{seeded_rng, Cell, ConfigError, SimRng};
use walkfield_space::{Field, SquareGrid};

use crate::boundary::BoundaryConditions;
use crate::config::SolverConfig;
use crate::error::{SolveError, WalkError};
use crate::metrics::SolveMetrics;
use crate::walker::RandomWalker;

/// Output of [`LaplaceSolver::solve`].
#[derive(Clone, Debug)]
pub struct SolveReport {
    /// The `L × L` potential field.
    pub field: Field<f64>,
    /// Work counters for the solve.
    pub metrics: SolveMetrics,
}

/// Random-walk estimator for the Laplace equation on a square grid.
///
/// Owns its generator, so consecutive solves with one solver continue
/// the same random stream. Construct a new solver to replay a seed.
///
/// # Examples
///
/// ```
/// use walkfield_laplace::{LaplaceSolver, SolverConfig};
///
/// let config = SolverConfig::builder()
///     .grid_size(7)
///     .walks_per_point(20)
///     .seed(1)
///     .build()
///     .unwrap();
/// let report = LaplaceSolver::new(config).unwrap().solve().unwrap();
/// assert_eq!(report.metrics.cells_solved, 25);
/// assert_eq!(report.field[(6, 3)], 5.0);
/// ```
#[derive(Debug)]
pub struct LaplaceSolver {
    config: SolverConfig,
    grid: SquareGrid,
    rng: SimRng,
}

impl LaplaceSolver {
    /// Validate `config` and create a solver seeded from `config.seed`.
    pub fn new(config: SolverConfig) -> Result<Self, SolveError> {
        config.validate()?;
        let grid = SquareGrid::new(config.grid_size)?;
        let rng = seeded_rng(config.seed);
        Ok(Self { config, grid, rng })
    }

    /// The validated configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// The solver's grid.
    pub fn grid(&self) -> &SquareGrid {
        &self.grid
    }

    /// Solve with the configured boundary conditions.
    #[instrument(
        skip(self),
        fields(
            size = self.config.grid_size,
            walks = self.config.walks_per_point,
            seed = self.config.seed
        )
    )]
    pub fn solve(&mut self) -> Result<SolveReport, SolveError> {
        let mut field = self.config.boundary.to_field(&self.grid);
        let metrics = self.solve_field(&mut field)?;
        Ok(SolveReport { field, metrics })
    }

    /// Solve in place over a caller-prepared field.
    ///
    /// The boundary entries of `field` are the Dirichlet data and may
    /// vary along an edge. Interior entries are reset to zero and then
    /// each written exactly once.
    ///
    /// # Errors
    ///
    /// - `FieldSizeMismatch` if `field` does not match the grid
    /// - `Config(InvalidBoundaryValue)` if a boundary entry is not finite
    /// - `WalkDiverged` if any walk exceeds the step budget; the field
    ///   is left partially solved
    #[instrument(skip(self, field), fields(size = self.config.grid_size))]
    pub fn solve_field(&mut self, field: &mut Field<f64>) -> Result<SolveMetrics, SolveError> {
        self.check_field(field)?;
        let started = Instant::now();
        let size = self.grid.size();
        let walks = self.config.walks_per_point;
        let budget = self.config.step_budget();

        info!(size, walks, budget, "starting Laplace solve");

        for cell in self.grid.interior_cells() {
            field[(cell.x, cell.y)] = 0.0;
        }

        let mut metrics = SolveMetrics::default();
        for x in 1..size - 1 {
            for y in 1..size - 1 {
                let cell = Cell::new(x, y);
                let mean = self.mean_of_walks(field, cell, &mut metrics)?;
                field[(x, y)] = mean;
                metrics.cells_solved += 1;
            }
            debug!(line = x, of = size - 2, "solved line");
        }

        metrics.elapsed_us = started.elapsed().as_micros() as u64;
        info!(
            cells = metrics.cells_solved,
            walks = metrics.walks,
            mean_walk_length = metrics.mean_walk_length(),
            elapsed_us = metrics.elapsed_us,
            "Laplace solve finished"
        );
        Ok(metrics)
    }

    /// The `N`-walk estimate at a single cell of `field`, without
    /// writing anything.
    pub fn estimate(&mut self, field: &Field<f64>, cell: Cell) -> Result<f64, SolveError> {
        self.check_field(field)?;
        self.grid.check(cell)?;
        let mut metrics = SolveMetrics::default();
        self.mean_of_walks(field, cell, &mut metrics)
    }

    fn mean_of_walks(
        &mut self,
        field: &Field<f64>,
        cell: Cell,
        metrics: &mut SolveMetrics,
    ) -> Result<f64, SolveError> {
        let walks = self.config.walks_per_point;
        let budget = self.config.step_budget();
        let mut sum = 0.0;
        for _ in 0..walks {
            let outcome = RandomWalker::new(self.grid, field, cell, budget)?
                .run(&mut self.rng)
                .map_err(|e| {
                    if let WalkError::Diverged { start, budget } = &e {
                        warn!(%start, budget, "walk diverged");
                    }
                    e
                })?;
            metrics.record_walk(outcome.steps);
            sum += outcome.value;
        }
        Ok(sum / walks as f64)
    }

    fn check_field(&self, field: &Field<f64>) -> Result<(), SolveError> {
        if field.size() != self.grid.size() {
            return Err(SolveError::FieldSizeMismatch {
                expected: self.grid.size(),
                actual: field.size(),
            });
        }
        for cell in self.grid.boundary_cells() {
            let value = field[(cell.x, cell.y)];
            if !value.is_finite() {
                let edge = self
                    .grid
                    .edges_of(cell)
                    .first()
                    .map(|e| e.name())
                    .unwrap_or("unknown");
                return Err(ConfigError::InvalidBoundaryValue { edge, value }.into());
            }
        }
        Ok(())
    }
}

/// Solve on an `L × L` grid with `N` walks per interior cell and the
/// default seed.
pub fn solve(
    grid_size: usize,
    boundary: BoundaryConditions,
    walks_per_point: usize,
) -> Result<Field<f64>, SolveError> {
    let config = SolverConfig::builder()
        .grid_size(grid_size)
        .boundary(boundary)
        .walks_per_point(walks_per_point)
        .build()?;
    Ok(LaplaceSolver::new(config)?.solve()?.field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use walkfield_space::Edge;

    fn solver(size: usize, walks: usize, seed: u64) -> LaplaceSolver {
        let config = SolverConfig::builder()
            .grid_size(size)
            .walks_per_point(walks)
            .seed(seed)
            .build()
            .unwrap();
        LaplaceSolver::new(config).unwrap()
    }

    #[test]
    fn uniform_boundary_gives_uniform_interior() {
        // Every walk reads the same value, so the estimate is exact.
        let config = SolverConfig::builder()
            .grid_size(9)
            .walks_per_point(5)
            .boundary(BoundaryConditions::uniform(3.0))
            .build()
            .unwrap();
        let report = LaplaceSolver::new(config).unwrap().solve().unwrap();
        for (_, v) in report.field.iter() {
            assert_eq!(v, 3.0);
        }
    }

    #[test]
    fn interior_values_lie_between_boundary_extremes() {
        let report = solver(9, 30, 4).solve().unwrap();
        for (cell, v) in report.field.iter() {
            assert!((0.0..=5.0).contains(&v), "{cell}: {v}");
        }
    }

    #[test]
    fn metrics_count_every_walk() {
        let report = solver(6, 10, 2).solve().unwrap();
        assert_eq!(report.metrics.cells_solved, 16);
        assert_eq!(report.metrics.walks, 160);
        assert!(report.metrics.total_steps >= report.metrics.walks);
        assert!(report.metrics.longest_walk >= 1);
    }

    #[test]
    fn tiny_budget_diverges() {
        let config = SolverConfig::builder()
            .grid_size(11)
            .walks_per_point(1)
            .max_walk_steps(1)
            .build()
            .unwrap();
        let err = LaplaceSolver::new(config).unwrap().solve().unwrap_err();
        // The centre needs five steps, so some walk must run out.
        assert!(
            matches!(err, SolveError::WalkDiverged { budget: 1, .. }),
            "{err:?}"
        );
    }

    #[test]
    fn solve_field_rejects_wrong_size() {
        let mut s = solver(5, 1, 0);
        let mut field = Field::new(6);
        assert_eq!(
            s.solve_field(&mut field).unwrap_err(),
            SolveError::FieldSizeMismatch {
                expected: 5,
                actual: 6
            }
        );
    }

    #[test]
    fn solve_field_rejects_nan_boundary() {
        let mut s = solver(5, 1, 0);
        let mut field = BoundaryConditions::default().to_field(s.grid());
        field[(2, 0)] = f64::NAN;
        match s.solve_field(&mut field) {
            Err(SolveError::Config(ConfigError::InvalidBoundaryValue { edge, .. })) => {
                assert_eq!(edge, "bottom");
            }
            other => panic!("expected InvalidBoundaryValue, got {other:?}"),
        }
    }

    #[test]
    fn solve_field_resets_stale_interior() {
        let mut s = solver(5, 4, 0);
        let grid = *s.grid();
        let mut field = BoundaryConditions::uniform(1.0).to_field(&grid);
        field[(2, 2)] = 99.0;
        s.solve_field(&mut field).unwrap();
        assert_eq!(field[(2, 2)], 1.0);
    }

    #[test]
    fn estimate_on_boundary_is_exact() {
        let mut s = solver(5, 8, 0);
        let field = BoundaryConditions::default()
            .with_edge(Edge::Left, 2.0)
            .to_field(s.grid());
        assert_eq!(s.estimate(&field, Cell::new(0, 2)).unwrap(), 2.0);
    }

    #[test]
    fn free_solve_validates() {
        assert_eq!(
            solve(2, BoundaryConditions::default(), 10).unwrap_err(),
            SolveError::Config(ConfigError::GridTooSmall { size: 2, min: 3 })
        );
        let field = solve(5, BoundaryConditions::default(), 10).unwrap();
        assert_eq!(field.size(), 5);
    }
}
