//! Discrete random-walk diffusion.
//!
//! A population of [`Particle`]s starts concentrated (by default all at
//! the centre cell) and spreads by independent rejection-sampled unit
//! steps that never leave the domain. [`DiffusionSimulator`] keeps an
//! occupancy grid and a 1D marginal histogram in sync with the
//! particles and records the Shannon [`entropy`] of the occupancy
//! distribution after every tick.
//!
//! # Tick order
//!
//! For each particle in index order: remove it from its cell and
//! column, move it, add it to its new cell and column. After the last
//! particle the tick is complete and both structures sum to the
//! particle count.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod entropy;
pub mod error;
pub mod histogram;
pub mod metrics;
pub mod particle;
pub mod simulator;

pub use config::{DiffusionConfig, DiffusionConfigBuilder, Placement};
pub use entropy::{entropy, max_entropy, EntropySeries};
pub use error::DiffusionError;
pub use histogram::MarginalHistogram;
pub use metrics::RunMetrics;
pub use particle::{Direction, Particle, MAX_MOVE_ATTEMPTS};
pub use simulator::DiffusionSimulator;
