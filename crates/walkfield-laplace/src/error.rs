//! Error types for random walks and Laplace solves.

use std::error::Error;
use std::fmt;

use walkfield_core::{Cell, ConfigError};
use walkfield_space::SpaceError;

/// Errors from a single [`RandomWalker`](crate::RandomWalker) run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WalkError {
    /// The start cell lies outside the grid.
    StartOutOfBounds {
        /// The requested start cell.
        cell: Cell,
        /// Side length of the grid.
        size: usize,
    },
    /// The field does not match the grid it is walked on.
    FieldSizeMismatch {
        /// Side length of the grid.
        grid: usize,
        /// Side length of the field.
        field: usize,
    },
    /// The walk used its whole step budget without reaching a boundary
    /// cell.
    Diverged {
        /// Where the walk started.
        start: Cell,
        /// The step budget that was exhausted.
        budget: u64,
    },
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartOutOfBounds { cell, size } => {
                write!(f, "walk start {cell} outside a {size}x{size} grid")
            }
            Self::FieldSizeMismatch { grid, field } => {
                write!(f, "field side {field} does not match grid side {grid}")
            }
            Self::Diverged { start, budget } => {
                write!(
                    f,
                    "walk from {start} did not reach the boundary within {budget} steps"
                )
            }
        }
    }
}

impl Error for WalkError {}

/// Errors from [`LaplaceSolver`](crate::LaplaceSolver).
#[derive(Clone, Debug, PartialEq)]
pub enum SolveError {
    /// The solver configuration is invalid.
    Config(ConfigError),
    /// A grid or field operation failed.
    Space(SpaceError),
    /// A walk exceeded its step budget. Fatal for the whole solve.
    WalkDiverged {
        /// The interior cell being solved.
        cell: Cell,
        /// The per-walk step budget.
        budget: u64,
    },
    /// A caller-supplied field has the wrong side length.
    FieldSizeMismatch {
        /// Side length of the solver grid.
        expected: usize,
        /// Side length of the supplied field.
        actual: usize,
    },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Space(e) => write!(f, "space: {e}"),
            Self::WalkDiverged { cell, budget } => {
                write!(
                    f,
                    "walk from {cell} diverged after {budget} steps; check the boundary configuration"
                )
            }
            Self::FieldSizeMismatch { expected, actual } => {
                write!(f, "field side {actual} does not match solver grid side {expected}")
            }
        }
    }
}

impl Error for SolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Space(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for SolveError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<SpaceError> for SolveError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

impl From<WalkError> for SolveError {
    fn from(e: WalkError) -> Self {
        match e {
            WalkError::StartOutOfBounds { cell, size } => {
                Self::Space(SpaceError::CoordOutOfBounds { cell, size })
            }
            WalkError::FieldSizeMismatch { grid, field } => Self::FieldSizeMismatch {
                expected: grid,
                actual: field,
            },
            WalkError::Diverged { start, budget } => Self::WalkDiverged {
                cell: start,
                budget,
            },
        }
    }
}
