//! Configuration errors shared by every walkfield pipeline.
//!
//! Configuration is validated once, before any simulation starts. The
//! subsystem crates wrap [`ConfigError`] in their own error enums so a
//! caller can tell a bad setup apart from a failure mid-run.

use std::error::Error;
use std::fmt;

/// Errors detected while validating a solver or simulator configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The grid is too small for the requested pipeline.
    GridTooSmall {
        /// The configured side length `L`.
        size: usize,
        /// The smallest side length the pipeline accepts.
        min: usize,
    },
    /// The Laplace solver was asked for zero walks per point.
    ZeroWalks,
    /// The diffusion simulator was asked for zero particles.
    ZeroParticles,
    /// More particles than a per-cell `u32` count can hold.
    TooManyParticles {
        /// The configured particle count.
        count: usize,
        /// The largest accepted count.
        max: usize,
    },
    /// The per-walk step budget is zero.
    ZeroStepBudget,
    /// A Dirichlet boundary value is NaN or infinite.
    InvalidBoundaryValue {
        /// Name of the edge carrying the value.
        edge: &'static str,
        /// The offending value.
        value: f64,
    },
    /// The initial particle placement lies outside the grid.
    PlacementOutOfBounds {
        /// Requested x coordinate.
        x: usize,
        /// Requested y coordinate.
        y: usize,
        /// Grid side length.
        size: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridTooSmall { size, min } => {
                write!(f, "grid size {size} is below the minimum of {min}")
            }
            Self::ZeroWalks => write!(f, "walks_per_point must be at least 1"),
            Self::ZeroParticles => write!(f, "num_particles must be at least 1"),
            Self::TooManyParticles { count, max } => {
                write!(f, "num_particles {count} exceeds the maximum of {max}")
            }
            Self::ZeroStepBudget => write!(f, "max_walk_steps must be at least 1"),
            Self::InvalidBoundaryValue { edge, value } => {
                write!(f, "boundary value for {edge} edge must be finite, got {value}")
            }
            Self::PlacementOutOfBounds { x, y, size } => {
                write!(f, "placement ({x}, {y}) is outside a {size}x{size} grid")
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_limit() {
        let e = ConfigError::GridTooSmall { size: 2, min: 3 };
        assert_eq!(e.to_string(), "grid size 2 is below the minimum of 3");
    }

    #[test]
    fn display_boundary_value() {
        let e = ConfigError::InvalidBoundaryValue {
            edge: "top",
            value: f64::INFINITY,
        };
        assert!(e.to_string().contains("top"));
        assert!(e.to_string().contains("inf"));
    }

    #[test]
    fn is_std_error() {
        let e: Box<dyn Error> = Box::new(ConfigError::ZeroWalks);
        assert!(e.source().is_none());
    }
}
