//! Ready-made configurations for tests and benchmarks.

use walkfield_diffusion::{DiffusionConfig, DiffusionSimulator, Placement};
use walkfield_laplace::{BoundaryConditions, LaplaceSolver, SolverConfig};
use walkfield_space::Edge;

/// Seed used wherever a test only needs reproducibility.
pub const FIXED_SEED: u64 = 0x5eed;

/// The default hot top/right, grounded bottom/left boundary.
pub fn hot_corner() -> BoundaryConditions {
    BoundaryConditions::default()
}

/// A single hot edge over an otherwise grounded boundary.
pub fn hot_edge(edge: Edge) -> BoundaryConditions {
    BoundaryConditions::uniform(0.0).with_edge(edge, BoundaryConditions::HOT)
}

/// A solver over the hot-corner boundary.
pub fn solver(size: usize, walks: usize, seed: u64) -> LaplaceSolver {
    let config = SolverConfig::builder()
        .grid_size(size)
        .walks_per_point(walks)
        .boundary(hot_corner())
        .seed(seed)
        .build()
        .expect("fixture solver config is valid");
    LaplaceSolver::new(config).expect("fixture solver builds")
}

/// A simulator with all particles at the centre.
pub fn centred_simulator(size: usize, particles: usize, seed: u64) -> DiffusionSimulator {
    simulator(size, particles, seed, Placement::Centre)
}

/// A simulator with an explicit placement.
pub fn simulator(
    size: usize,
    particles: usize,
    seed: u64,
    placement: Placement,
) -> DiffusionSimulator {
    let config = DiffusionConfig::builder()
        .grid_size(size)
        .num_particles(particles)
        .seed(seed)
        .placement(placement)
        .build()
        .expect("fixture diffusion config is valid");
    DiffusionSimulator::new(config).expect("fixture simulator builds")
}
