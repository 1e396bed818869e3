//! Strongly-typed identifiers and the [`Cell`] coordinate type.

use std::fmt;

/// Integer coordinate of a grid cell, `(x, y)`.
///
/// `x` is the horizontal axis and `y` the vertical axis in Cartesian
/// orientation: `y == 0` is the bottom edge, `y == L - 1` the top edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Cell {
    /// Horizontal coordinate.
    pub x: usize,
    /// Vertical coordinate.
    pub y: usize,
}

impl Cell {
    /// Create a cell at `(x, y)`.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

/// Monotonically increasing tick counter.
///
/// Incremented each time the diffusion simulator advances one step.
/// `TickId(0)` is the state before any step has run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TickId(pub u64);

impl TickId {
    /// The tick after this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
