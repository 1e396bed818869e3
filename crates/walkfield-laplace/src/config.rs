//! Solver configuration and validation.
//!
//! [`SolverConfig`] is the input for constructing a [`LaplaceSolver`](crate::LaplaceSolver).
//! Build one with [`SolverConfig::builder`] or start from
//! [`Default`] and adjust fields; [`validate()`](SolverConfig::validate)
//! runs again when the solver is constructed.

use walkfield_core::ConfigError;

use crate::boundary::BoundaryConditions;
use crate::walker::default_step_budget;

/// Smallest grid with at least one interior cell.
pub const MIN_GRID_SIZE: usize = 3;

/// Configuration for a Laplace solve.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig {
    /// Side length `L` of the square domain. Default: 51.
    pub grid_size: usize,
    /// Number of walks averaged per interior cell (`N`). Default: 200.
    pub walks_per_point: usize,
    /// Dirichlet values on the four edges.
    pub boundary: BoundaryConditions,
    /// Seed for the walk generator. Default: 0.
    pub seed: u64,
    /// Per-walk step budget. `None` uses [`default_step_budget`].
    pub max_walk_steps: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            grid_size: 51,
            walks_per_point: 200,
            boundary: BoundaryConditions::default(),
            seed: 0,
            max_walk_steps: None,
        }
    }
}

impl SolverConfig {
    /// Start a builder from the defaults.
    pub fn builder() -> SolverConfigBuilder {
        SolverConfigBuilder {
            config: Self::default(),
        }
    }

    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// - `GridTooSmall` if `grid_size < 3` (no interior cell)
    /// - `ZeroWalks` if `walks_per_point == 0`
    /// - `ZeroStepBudget` if `max_walk_steps == Some(0)`
    /// - `InvalidBoundaryValue` if any edge value is NaN or infinite
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < MIN_GRID_SIZE {
            return Err(ConfigError::GridTooSmall {
                size: self.grid_size,
                min: MIN_GRID_SIZE,
            });
        }
        if self.walks_per_point == 0 {
            return Err(ConfigError::ZeroWalks);
        }
        if self.max_walk_steps == Some(0) {
            return Err(ConfigError::ZeroStepBudget);
        }
        self.boundary.validate()
    }

    /// The effective per-walk step budget.
    pub fn step_budget(&self) -> u64 {
        self.max_walk_steps
            .unwrap_or_else(|| default_step_budget(self.grid_size))
    }
}

/// Builder for [`SolverConfig`].
#[derive(Clone, Debug)]
pub struct SolverConfigBuilder {
    config: SolverConfig,
}

impl SolverConfigBuilder {
    /// Set the side length `L`.
    pub fn grid_size(mut self, size: usize) -> Self {
        self.config.grid_size = size;
        self
    }

    /// Set the number of walks per interior cell.
    pub fn walks_per_point(mut self, walks: usize) -> Self {
        self.config.walks_per_point = walks;
        self
    }

    /// Set the boundary conditions.
    pub fn boundary(mut self, boundary: BoundaryConditions) -> Self {
        self.config.boundary = boundary;
        self
    }

    /// Set the generator seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Override the per-walk step budget.
    pub fn max_walk_steps(mut self, steps: u64) -> Self {
        self.config.max_walk_steps = Some(steps);
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> Result<SolverConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use walkfield_space::Edge;

    #[test]
    fn defaults_match_reference_run() {
        let c = SolverConfig::builder().build().unwrap();
        assert_eq!(c.grid_size, 51);
        assert_eq!(c.walks_per_point, 200);
        assert_eq!(c.step_budget(), 100 * 51 * 51);
    }

    #[test]
    fn rejects_grid_without_interior() {
        assert_eq!(
            SolverConfig::builder().grid_size(2).build(),
            Err(ConfigError::GridTooSmall { size: 2, min: 3 })
        );
        assert!(SolverConfig::builder().grid_size(3).build().is_ok());
    }

    #[test]
    fn rejects_zero_walks() {
        assert_eq!(
            SolverConfig::builder().walks_per_point(0).build(),
            Err(ConfigError::ZeroWalks)
        );
    }

    #[test]
    fn rejects_zero_budget() {
        assert_eq!(
            SolverConfig::builder().max_walk_steps(0).build(),
            Err(ConfigError::ZeroStepBudget)
        );
    }

    #[test]
    fn rejects_infinite_boundary() {
        let bc = BoundaryConditions::default().with_edge(Edge::Top, f64::INFINITY);
        assert_eq!(
            SolverConfig::builder().boundary(bc).build(),
            Err(ConfigError::InvalidBoundaryValue {
                edge: "top",
                value: f64::INFINITY
            })
        );
    }

    #[test]
    fn explicit_budget_overrides_default() {
        let c = SolverConfig::builder().max_walk_steps(17).build().unwrap();
        assert_eq!(c.step_budget(), 17);
    }
}
