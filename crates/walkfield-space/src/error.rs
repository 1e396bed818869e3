//! Error types for grid construction and field access.

use std::fmt;
use walkfield_core::Cell;

/// Errors arising from grid construction or cell lookups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// Attempted to construct a grid with zero cells.
    EmptySpace,
    /// A cell lies outside the grid.
    CoordOutOfBounds {
        /// The offending cell.
        cell: Cell,
        /// Side length of the grid.
        size: usize,
    },
    /// A buffer does not hold exactly `L * L` values.
    SizeMismatch {
        /// Expected number of values.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySpace => write!(f, "grid must have at least one cell"),
            Self::CoordOutOfBounds { cell, size } => {
                write!(f, "cell {cell} out of bounds for a {size}x{size} grid")
            }
            Self::SizeMismatch { expected, actual } => {
                write!(f, "expected {expected} values, got {actual}")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
