//! Walkfield: random-walk Monte-Carlo methods on square grids.
//!
//! This is the facade crate that re-exports the public API of the
//! walkfield sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use walkfield::prelude::*;
//!
//! // Potential on a 9×9 plate, top and right edges held at 5.
//! let config = SolverConfig::builder()
//!     .grid_size(9)
//!     .walks_per_point(50)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! let report = LaplaceSolver::new(config).unwrap().solve().unwrap();
//! assert_eq!(report.field[(8, 4)], 5.0);
//!
//! // 200 particles spreading from the centre of a 21×21 box.
//! let config = DiffusionConfig::builder()
//!     .grid_size(21)
//!     .num_particles(200)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! let mut sim = DiffusionSimulator::new(config).unwrap();
//! let series = sim.run(100).unwrap();
//! assert!(series.last().unwrap().1 > 0.0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `walkfield-core` | Cells, tick IDs, seeded RNG, config errors |
//! | [`space`] | `walkfield-space` | Square grid geometry and dense fields |
//! | [`laplace`] | `walkfield-laplace` | Boundary conditions, walker, solver |
//! | [`diffusion`] | `walkfield-diffusion` | Particles, simulator, entropy |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and the seeded generator (`walkfield-core`).
pub use walkfield_core as types;

/// Square grid geometry and dense per-cell fields (`walkfield-space`).
///
/// [`space::SquareGrid`] classifies cells as boundary or interior;
/// [`space::Field`] stores one value per cell.
pub use walkfield_space as space;

/// Monte-Carlo Laplace solver (`walkfield-laplace`).
///
/// Configure with [`laplace::SolverConfig`], run with
/// [`laplace::LaplaceSolver`], or call [`laplace::solve`] directly.
pub use walkfield_laplace as laplace;

/// Random-walk diffusion and Shannon entropy (`walkfield-diffusion`).
pub use walkfield_diffusion as diffusion;

/// Common imports for typical walkfield usage.
///
/// ```rust
/// use walkfield::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use walkfield_core::{seeded_rng, Cell, ConfigError, SimRng, TickId};

    // Space
    pub use walkfield_space::{Edge, Field, SquareGrid};

    // Laplace
    pub use walkfield_laplace::{
        BoundaryConditions, LaplaceSolver, SolveError, SolveMetrics, SolveReport, SolverConfig,
    };

    // Diffusion
    pub use walkfield_diffusion::{
        entropy, DiffusionConfig, DiffusionError, DiffusionSimulator, EntropySeries,
        MarginalHistogram, Placement, RunMetrics,
    };
}
