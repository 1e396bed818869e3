//! Spatial data structures for walkfield simulations.
//!
//! [`SquareGrid`] is the fixed `L × L` domain shared by both pipelines.
//! It classifies cells as boundary or interior and converts between
//! [`Cell`](walkfield_core::Cell) coordinates and flat indices.
//! [`Field`] is the dense per-cell storage used for the potential field
//! and the occupancy grid.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod field;
pub mod grid;

pub use error::SpaceError;
pub use field::Field;
pub use grid::{Edge, SquareGrid};
