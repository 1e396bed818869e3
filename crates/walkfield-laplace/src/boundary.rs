//! Dirichlet boundary conditions.

use walkfield_core::{Cell, ConfigError};
use walkfield_space::{Edge, Field, SquareGrid};

/// One fixed scalar per edge of the domain.
///
/// The default holds the top and right edges at
/// [`HOT`](Self::HOT) and the bottom and left edges at zero, so the
/// two hot edges share the corner `(L-1, L-1)`. A corner cell lies on
/// two edges and takes the mean of their values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundaryConditions {
    /// Value on `y == L - 1`.
    pub top: f64,
    /// Value on `x == L - 1`.
    pub right: f64,
    /// Value on `y == 0`.
    pub bottom: f64,
    /// Value on `x == 0`.
    pub left: f64,
}

impl Default for BoundaryConditions {
    fn default() -> Self {
        Self {
            top: Self::HOT,
            right: Self::HOT,
            bottom: 0.0,
            left: 0.0,
        }
    }
}

impl BoundaryConditions {
    /// Value of the hot edges in the default configuration.
    pub const HOT: f64 = 5.0;

    /// Every edge held at `value`.
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Replace the value of one edge.
    pub fn with_edge(mut self, edge: Edge, value: f64) -> Self {
        match edge {
            Edge::Top => self.top = value,
            Edge::Right => self.right = value,
            Edge::Bottom => self.bottom = value,
            Edge::Left => self.left = value,
        }
        self
    }

    /// The value held on `edge`.
    pub fn value(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        }
    }

    /// Reject NaN and infinite edge values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for edge in Edge::ALL {
            let value = self.value(edge);
            if !value.is_finite() {
                return Err(ConfigError::InvalidBoundaryValue {
                    edge: edge.name(),
                    value,
                });
            }
        }
        Ok(())
    }

    /// The configured value at `cell`, or `None` for interior and
    /// out-of-range cells.
    pub fn value_at(&self, grid: &SquareGrid, cell: Cell) -> Option<f64> {
        let edges = grid.edges_of(cell);
        match edges.as_slice() {
            [] => None,
            [edge] => Some(self.value(*edge)),
            [a, b, ..] => Some(0.5 * (self.value(*a) + self.value(*b))),
        }
    }

    /// Write the boundary values into `field`, leaving interior cells
    /// untouched.
    pub fn apply(&self, grid: &SquareGrid, field: &mut Field<f64>) {
        for cell in grid.boundary_cells() {
            if let Some(v) = self.value_at(grid, cell) {
                field[(cell.x, cell.y)] = v;
            }
        }
    }

    /// A fresh potential field: boundary values set, interior zero.
    pub fn to_field(&self, grid: &SquareGrid) -> Field<f64> {
        let mut field = Field::new(grid.size());
        self.apply(grid, &mut field);
        field
    }
}
