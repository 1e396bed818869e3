//! Error types for the diffusion simulator.

use std::error::Error;
use std::fmt;

use walkfield_core::{Cell, ConfigError, TickId};
use walkfield_space::SpaceError;

/// Errors from [`DiffusionSimulator`](crate::DiffusionSimulator).
#[derive(Clone, Debug, PartialEq)]
pub enum DiffusionError {
    /// The simulator configuration is invalid.
    Config(ConfigError),
    /// A grid or field operation failed.
    Space(SpaceError),
    /// Every draw in the retry loop proposed a move off the grid.
    MoveExhausted {
        /// Where the particle was stuck.
        position: Cell,
        /// Draws made before giving up.
        attempts: u32,
    },
    /// Occupancy grid or marginal histogram no longer sums to the
    /// particle count. Indicates a bug in the update logic.
    InvariantViolation {
        /// The tick after which the mismatch was detected.
        tick: TickId,
        /// Number of particles.
        expected: u64,
        /// Sum of the occupancy grid.
        occupancy: u64,
        /// Sum of the marginal histogram.
        marginal: u64,
    },
}

impl fmt::Display for DiffusionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Space(e) => write!(f, "space: {e}"),
            Self::MoveExhausted { position, attempts } => {
                write!(f, "no in-bounds move from {position} after {attempts} draws")
            }
            Self::InvariantViolation {
                tick,
                expected,
                occupancy,
                marginal,
            } => write!(
                f,
                "particle count not conserved at tick {tick}: \
                 expected {expected}, occupancy sums to {occupancy}, marginal to {marginal}"
            ),
        }
    }
}

impl Error for DiffusionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Space(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for DiffusionError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<SpaceError> for DiffusionError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}
