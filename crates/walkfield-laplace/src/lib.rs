//! Monte-Carlo random-walk solver for the Laplace equation.
//!
//! The potential at an interior cell is estimated as the mean boundary
//! value reached by unbiased random walks started at that cell (the
//! discrete mean-value property of harmonic functions).
//!
//! # Pipeline
//!
//! 1. [`BoundaryConditions`] fills the boundary cells of a potential
//!    [`Field`](walkfield_space::Field) with Dirichlet data.
//! 2. [`RandomWalker`] walks from a start cell until it reaches the
//!    boundary, within a step budget.
//! 3. [`LaplaceSolver`] runs `N` walks per interior cell and writes
//!    their mean into the field.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod boundary;
pub mod config;
pub mod error;
pub mod metrics;
pub mod solver;
pub mod walker;

pub use boundary::BoundaryConditions;
pub use config::{SolverConfig, SolverConfigBuilder};
pub use error::{SolveError, WalkError};
pub use metrics::SolveMetrics;
pub use solver::{solve, LaplaceSolver, SolveReport};
pub use walker::{default_step_budget, walk, RandomWalker, WalkOutcome, WalkState};
