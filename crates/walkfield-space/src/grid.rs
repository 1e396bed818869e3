//! Fixed-size square domain with boundary classification.

use crate::error::SpaceError;
use smallvec::SmallVec;
use std::fmt;
use walkfield_core::Cell;

/// One of the four edges of a [`SquareGrid`], named in Cartesian
/// orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// `y == L - 1`.
    Top,
    /// `x == L - 1`.
    Right,
    /// `y == 0`.
    Bottom,
    /// `x == 0`.
    Left,
}

impl Edge {
    /// All four edges, clockwise from the top.
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    /// Lower-case edge name, used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Right => "right",
            Edge::Bottom => "bottom",
            Edge::Left => "left",
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A square `L × L` grid.
///
/// Each cell has coordinate `(x, y)` with `0 <= x, y < L`. A cell is a
/// boundary cell when it lies on any of the four edges; every other
/// cell is interior. Flat indices are `x * L + y`, so the first index
/// of a [`Field`](crate::Field) is `x`.
///
/// # Examples
///
/// ```
/// use walkfield_space::SquareGrid;
///
/// let grid = SquareGrid::new(5).unwrap();
/// assert!(grid.is_boundary(0, 3));
/// assert!(grid.is_boundary(2, 4));
/// assert!(!grid.is_boundary(2, 2));
/// assert_eq!(grid.interior_cells().count(), 9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SquareGrid {
    size: usize,
}

impl SquareGrid {
    /// Create a grid with side length `size`.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if `size` is 0. Pipelines
    /// impose their own larger minimums on top of this.
    pub fn new(size: usize) -> Result<Self, SpaceError> {
        if size == 0 {
            return Err(SpaceError::EmptySpace);
        }
        Ok(Self { size })
    }

    /// Side length `L`.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells, `L * L`.
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Always returns `false`; construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `(x, y)` lies on one of the four edges.
    ///
    /// Pure predicate over the grid shape. Coordinates outside the grid
    /// are not boundary cells.
    pub fn is_boundary(&self, x: usize, y: usize) -> bool {
        let last = self.size - 1;
        self.contains(x, y) && (x == 0 || x == last || y == 0 || y == last)
    }

    /// [`is_boundary`](Self::is_boundary) for a [`Cell`].
    pub fn is_boundary_cell(&self, cell: Cell) -> bool {
        self.is_boundary(cell.x, cell.y)
    }

    /// Whether `(x, y)` is inside the grid and not on an edge.
    pub fn is_interior(&self, x: usize, y: usize) -> bool {
        self.contains(x, y) && !self.is_boundary(x, y)
    }

    /// Whether `(x, y)` is inside the grid.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    /// Flat index of `cell`, or `None` if it lies outside the grid.
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        if self.contains(cell.x, cell.y) {
            Some(cell.x * self.size + cell.y)
        } else {
            None
        }
    }

    /// Cell at flat `index`, or `None` if `index >= L * L`.
    pub fn cell_at(&self, index: usize) -> Option<Cell> {
        if index < self.cell_count() {
            Some(Cell::new(index / self.size, index % self.size))
        } else {
            None
        }
    }

    /// Check that `cell` lies inside the grid.
    pub fn check(&self, cell: Cell) -> Result<(), SpaceError> {
        if self.contains(cell.x, cell.y) {
            Ok(())
        } else {
            Err(SpaceError::CoordOutOfBounds {
                cell,
                size: self.size,
            })
        }
    }

    /// The centre cell, `((L-1)/2, (L-1)/2)`.
    pub fn centre(&self) -> Cell {
        let c = (self.size - 1) / 2;
        Cell::new(c, c)
    }

    /// Every cell in flat-index order (`x` outer, `y` inner).
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.size).flat_map(move |x| (0..self.size).map(move |y| Cell::new(x, y)))
    }

    /// Interior cells in flat-index order. Empty when `L < 3`.
    pub fn interior_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells().filter(|c| !self.is_boundary_cell(*c))
    }

    /// Boundary cells in flat-index order.
    pub fn boundary_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells().filter(|c| self.is_boundary_cell(*c))
    }

    /// The edges `cell` lies on: none for interior cells, one for edge
    /// cells, two for corners.
    pub fn edges_of(&self, cell: Cell) -> SmallVec<[Edge; 2]> {
        let mut edges = SmallVec::new();
        if !self.contains(cell.x, cell.y) {
            return edges;
        }
        let last = self.size - 1;
        for edge in Edge::ALL {
            let on = match edge {
                Edge::Top => cell.y == last,
                Edge::Right => cell.x == last,
                Edge::Bottom => cell.y == 0,
                Edge::Left => cell.x == 0,
            };
            // A 1x1 grid is on all four edges; keep the first two.
            if on && edges.len() < 2 {
                edges.push(edge);
            }
        }
        edges
    }
}
