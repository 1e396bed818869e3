//! Core types for the walkfield random-walk simulators.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the Laplace and diffusion pipelines:
//! cell coordinates, tick identifiers, the seeded random source, and
//! the configuration error taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod rng;

pub use error::ConfigError;
pub use id::{Cell, TickId};
pub use rng::{seeded_rng, SimRng};
