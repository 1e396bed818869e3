//! Unbiased random walk from a start cell to the boundary.
//!
//! A [`RandomWalker`] is a small state machine:
//!
//! ```text
//! Walking ──(reached boundary)──▶ Terminated { value, exit }
//!    │
//!    └──(step budget spent)────▶ Diverged
//! ```
//!
//! Each step moves up (`y+1`), down (`y-1`), right (`x+1`) or left
//! (`x-1`) with probability 1/4. No bounds check is needed: a walker
//! only steps while it is on an interior cell, and every neighbour of
//! an interior cell is inside the grid.

use rand::Rng;
use walkfield_core::Cell;
use walkfield_space::{Field, SquareGrid};

use crate::error::WalkError;

/// Default per-walk step budget for a grid of side `size`: `100 * L²`.
///
/// The expected exit time from the centre grows like `L²`, so this
/// leaves two orders of magnitude of headroom.
pub fn default_step_budget(size: usize) -> u64 {
    let l = size as u64;
    100 * l * l
}

/// State of a [`RandomWalker`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WalkState {
    /// On an interior cell, still moving.
    Walking,
    /// Reached a boundary cell.
    Terminated {
        /// The field value at the exit cell.
        value: f64,
        /// The boundary cell reached.
        exit: Cell,
    },
    /// Spent the step budget without reaching the boundary.
    Diverged,
}

/// Result of a walk that reached the boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WalkOutcome {
    /// The boundary value read at the exit cell.
    pub value: f64,
    /// The boundary cell reached.
    pub exit: Cell,
    /// Number of unit steps taken.
    pub steps: u64,
}

/// A single random walk over a potential field.
///
/// Borrows the field read-only; walks never write.
#[derive(Debug)]
pub struct RandomWalker<'a> {
    grid: SquareGrid,
    field: &'a Field<f64>,
    budget: u64,
    start: Cell,
    position: Cell,
    steps: u64,
    state: WalkState,
}

impl<'a> RandomWalker<'a> {
    /// Place a walker at `start`.
    ///
    /// A walker placed on a boundary cell is already terminated.
    pub fn new(
        grid: SquareGrid,
        field: &'a Field<f64>,
        start: Cell,
        budget: u64,
    ) -> Result<Self, WalkError> {
        if field.size() != grid.size() {
            return Err(WalkError::FieldSizeMismatch {
                grid: grid.size(),
                field: field.size(),
            });
        }
        if !grid.contains(start.x, start.y) {
            return Err(WalkError::StartOutOfBounds {
                cell: start,
                size: grid.size(),
            });
        }
        let state = if grid.is_boundary_cell(start) {
            WalkState::Terminated {
                value: field[(start.x, start.y)],
                exit: start,
            }
        } else {
            WalkState::Walking
        };
        Ok(Self {
            grid,
            field,
            budget,
            start,
            position: start,
            steps: 0,
            state,
        })
    }

    /// Current state.
    pub fn state(&self) -> WalkState {
        self.state
    }

    /// Current position.
    pub fn position(&self) -> Cell {
        self.position
    }

    /// Steps taken so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Take one step if still walking, and return the new state.
    ///
    /// Terminal states are sticky: calling `advance` on a terminated or
    /// diverged walker draws nothing and returns the same state.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> WalkState {
        if self.state != WalkState::Walking {
            return self.state;
        }
        if self.steps >= self.budget {
            self.state = WalkState::Diverged;
            return self.state;
        }

        let Cell { x, y } = self.position;
        self.position = match rng.gen_range(0..4u8) {
            0 => Cell::new(x, y + 1), // up
            1 => Cell::new(x, y - 1), // down
            2 => Cell::new(x + 1, y), // right
            _ => Cell::new(x - 1, y), // left
        };
        self.steps += 1;

        if self.grid.is_boundary_cell(self.position) {
            self.state = WalkState::Terminated {
                value: self.field[(self.position.x, self.position.y)],
                exit: self.position,
            };
        }
        self.state
    }

    /// Walk until the walker terminates or diverges.
    pub fn run<R: Rng + ?Sized>(mut self, rng: &mut R) -> Result<WalkOutcome, WalkError> {
        loop {
            match self.advance(rng) {
                WalkState::Walking => {}
                WalkState::Terminated { value, exit } => {
                    return Ok(WalkOutcome {
                        value,
                        exit,
                        steps: self.steps,
                    });
                }
                WalkState::Diverged => {
                    return Err(WalkError::Diverged {
                        start: self.start,
                        budget: self.budget,
                    });
                }
            }
        }
    }
}

/// Walk from `start` to the boundary of `grid` and return the boundary
/// value reached.
pub fn walk<R: Rng + ?Sized>(
    grid: &SquareGrid,
    field: &Field<f64>,
    start: Cell,
    budget: u64,
    rng: &mut R,
) -> Result<WalkOutcome, WalkError> {
    RandomWalker::new(*grid, field, start, budget)?.run(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoundaryConditions;
    use proptest::prelude::*;
    use walkfield_core::seeded_rng;

    fn setup(size: usize) -> (SquareGrid, Field<f64>) {
        let grid = SquareGrid::new(size).unwrap();
        let field = BoundaryConditions::default().to_field(&grid);
        (grid, field)
    }

    #[test]
    fn boundary_start_terminates_without_stepping() {
        let (grid, field) = setup(5);
        let mut rng = seeded_rng(0);
        let out = walk(&grid, &field, Cell::new(4, 2), 10, &mut rng).unwrap();
        assert_eq!(out.steps, 0);
        assert_eq!(out.exit, Cell::new(4, 2));
        assert_eq!(out.value, 5.0);
    }

    #[test]
    fn interior_start_ends_on_boundary() {
        let (grid, field) = setup(9);
        let mut rng = seeded_rng(3);
        for _ in 0..200 {
            let out = walk(&grid, &field, Cell::new(4, 4), 10_000, &mut rng).unwrap();
            assert!(grid.is_boundary_cell(out.exit));
            assert!(out.steps >= 4, "centre of 9x9 is 4 steps from any edge");
            assert_eq!(out.value, field[(out.exit.x, out.exit.y)]);
        }
    }

    #[test]
    fn exhausted_budget_diverges() {
        let (grid, field) = setup(11);
        let mut rng = seeded_rng(1);
        // The centre is 5 steps from every edge.
        let err = walk(&grid, &field, Cell::new(5, 5), 4, &mut rng).unwrap_err();
        assert_eq!(
            err,
            WalkError::Diverged {
                start: Cell::new(5, 5),
                budget: 4
            }
        );
    }

    #[test]
    fn terminal_states_are_sticky() {
        let (grid, field) = setup(5);
        let mut rng = seeded_rng(9);
        let mut w = RandomWalker::new(grid, &field, Cell::new(2, 2), 0).unwrap();
        assert_eq!(w.advance(&mut rng), WalkState::Diverged);
        assert_eq!(w.advance(&mut rng), WalkState::Diverged);
        assert_eq!(w.steps(), 0);
        assert_eq!(w.position(), Cell::new(2, 2));
    }

    #[test]
    fn single_steps_are_unit_moves() {
        let (grid, field) = setup(21);
        let mut rng = seeded_rng(5);
        let mut w = RandomWalker::new(grid, &field, Cell::new(10, 10), 1_000).unwrap();
        let mut prev = w.position();
        while w.advance(&mut rng) == WalkState::Walking {
            let p = w.position();
            let d = p.x.abs_diff(prev.x) + p.y.abs_diff(prev.y);
            assert_eq!(d, 1);
            prev = p;
        }
    }

    #[test]
    fn rejects_mismatched_field() {
        let grid = SquareGrid::new(5).unwrap();
        let field = Field::new(6);
        assert_eq!(
            RandomWalker::new(grid, &field, Cell::new(2, 2), 10).unwrap_err(),
            WalkError::FieldSizeMismatch { grid: 5, field: 6 }
        );
    }

    #[test]
    fn rejects_out_of_bounds_start() {
        let (grid, field) = setup(5);
        assert_eq!(
            RandomWalker::new(grid, &field, Cell::new(5, 1), 10).unwrap_err(),
            WalkError::StartOutOfBounds {
                cell: Cell::new(5, 1),
                size: 5
            }
        );
    }

    #[test]
    fn default_budget_scales_with_area() {
        assert_eq!(default_step_budget(51), 260_100);
    }

    proptest! {
        #[test]
        fn walk_returns_an_edge_value(
            size in 3usize..16,
            sx in 0usize..16,
            sy in 0usize..16,
            seed in any::<u64>(),
        ) {
            let (grid, field) = setup(size);
            let start = Cell::new(sx % size, sy % size);
            let mut rng = seeded_rng(seed);
            let out = walk(&grid, &field, start, default_step_budget(size), &mut rng).unwrap();
            prop_assert!(grid.is_boundary_cell(out.exit));
            prop_assert!([0.0, 2.5, 5.0].contains(&out.value));
            prop_assert_eq!(out.value, field[(out.exit.x, out.exit.y)]);
        }
    }
}
