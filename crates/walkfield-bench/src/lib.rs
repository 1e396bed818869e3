//! Benchmark profiles for the walkfield solvers.
//!
//! - [`reference_solver`]: the 51×51, 200-walk Laplace run
//! - [`small_solver`]: a 21×21 grid that finishes in milliseconds
//! - [`reference_diffusion`]: 1000 particles on a 101×101 grid

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use walkfield_core::ConfigError;
use walkfield_diffusion::DiffusionConfig;
use walkfield_laplace::{BoundaryConditions, SolverConfig};

/// The reference Laplace profile: `L = 51`, `N = 200`, hot top and
/// right edges.
pub fn reference_solver(seed: u64) -> Result<SolverConfig, ConfigError> {
    SolverConfig::builder()
        .grid_size(51)
        .walks_per_point(200)
        .boundary(BoundaryConditions::default())
        .seed(seed)
        .build()
}

/// A reduced Laplace profile for per-iteration benchmarking.
pub fn small_solver(seed: u64) -> Result<SolverConfig, ConfigError> {
    SolverConfig::builder()
        .grid_size(21)
        .walks_per_point(20)
        .seed(seed)
        .build()
}

/// The reference diffusion profile: 1000 particles centred on a
/// 101×101 grid.
pub fn reference_diffusion(seed: u64) -> Result<DiffusionConfig, ConfigError> {
    DiffusionConfig::builder()
        .grid_size(101)
        .num_particles(1000)
        .seed(seed)
        .build()
}
