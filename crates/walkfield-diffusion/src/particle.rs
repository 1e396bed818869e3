//! A single diffusing particle and its rejection-sampled step.

use std::fmt;

use rand::Rng;
use walkfield_core::Cell;
use walkfield_space::SquareGrid;

use crate::error::DiffusionError;

/// Upper bound on draws per move.
///
/// A corner cell rejects half of all draws, so the chance of hitting
/// this bound there is `2^-64`.
pub const MAX_MOVE_ATTEMPTS: u32 = 64;

/// Candidate unit move, one per quarter of `[0, 1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `x + 1`, drawn from `[0, 0.25)`.
    PlusX,
    /// `x - 1`, drawn from `[0.25, 0.5)`.
    MinusX,
    /// `y + 1`, drawn from `[0.5, 0.75)`.
    PlusY,
    /// `y - 1`, drawn from `[0.75, 1)`.
    MinusY,
}

impl Direction {
    /// Map a uniform draw `r ∈ [0, 1)` to its quarter.
    pub fn from_draw(r: f64) -> Self {
        if r < 0.25 {
            Direction::PlusX
        } else if r < 0.5 {
            Direction::MinusX
        } else if r < 0.75 {
            Direction::PlusY
        } else {
            Direction::MinusY
        }
    }

    /// The cell reached by moving from `from` in this direction, or
    /// `None` if that would leave a grid of side `size`.
    pub fn apply(self, from: Cell, size: usize) -> Option<Cell> {
        let Cell { x, y } = from;
        match self {
            Direction::PlusX => (x + 1 < size).then(|| Cell::new(x + 1, y)),
            Direction::MinusX => x.checked_sub(1).map(|nx| Cell::new(nx, y)),
            Direction::PlusY => (y + 1 < size).then(|| Cell::new(x, y + 1)),
            Direction::MinusY => y.checked_sub(1).map(|ny| Cell::new(x, ny)),
        }
    }
}

/// A particle at an integer position.
///
/// Particles have no identity beyond their position; any number may
/// share a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Particle {
    position: Cell,
}

impl Particle {
    /// A particle at `(x, y)`.
    pub fn new(x: usize, y: usize) -> Self {
        Self {
            position: Cell::new(x, y),
        }
    }

    /// A particle at `cell`.
    pub fn at(cell: Cell) -> Self {
        Self { position: cell }
    }

    /// Current position.
    pub fn position(&self) -> Cell {
        self.position
    }

    /// Current x coordinate.
    pub fn x(&self) -> usize {
        self.position.x
    }

    /// Current y coordinate.
    pub fn y(&self) -> usize {
        self.position.y
    }

    /// Move one cell, staying inside `grid`.
    ///
    /// Draws `r ∈ [0, 1)` and proposes the [`Direction`] for its
    /// quarter. A proposal that would leave the grid rejects the whole
    /// draw and a new one is made, so at edges and corners the move is
    /// uniform over the legal directions. Returns the number of
    /// rejected draws.
    ///
    /// # Errors
    ///
    /// `MoveExhausted` if [`MAX_MOVE_ATTEMPTS`] draws are all rejected,
    /// which only happens on a 1×1 grid or with a broken generator.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        grid: &SquareGrid,
        rng: &mut R,
    ) -> Result<u32, DiffusionError> {
        for attempt in 0..MAX_MOVE_ATTEMPTS {
            let r: f64 = rng.gen();
            if let Some(next) = Direction::from_draw(r).apply(self.position, grid.size()) {
                self.position = next;
                return Ok(attempt);
            }
        }
        Err(DiffusionError::MoveExhausted {
            position: self.position,
            attempts: MAX_MOVE_ATTEMPTS,
        })
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use walkfield_core::seeded_rng;

    #[test]
    fn quarters_map_to_directions() {
        assert_eq!(Direction::from_draw(0.0), Direction::PlusX);
        assert_eq!(Direction::from_draw(0.2499), Direction::PlusX);
        assert_eq!(Direction::from_draw(0.25), Direction::MinusX);
        assert_eq!(Direction::from_draw(0.5), Direction::PlusY);
        assert_eq!(Direction::from_draw(0.75), Direction::MinusY);
        assert_eq!(Direction::from_draw(0.9999), Direction::MinusY);
    }

    #[test]
    fn apply_rejects_leaving_the_grid() {
        let corner = Cell::new(0, 0);
        assert_eq!(Direction::MinusX.apply(corner, 3), None);
        assert_eq!(Direction::MinusY.apply(corner, 3), None);
        assert_eq!(Direction::PlusX.apply(corner, 3), Some(Cell::new(1, 0)));
        let far = Cell::new(2, 2);
        assert_eq!(Direction::PlusX.apply(far, 3), None);
        assert_eq!(Direction::PlusY.apply(far, 3), None);
    }

    #[test]
    fn interior_step_has_no_rejections() {
        let grid = SquareGrid::new(5).unwrap();
        let mut rng = seeded_rng(0);
        for _ in 0..100 {
            let mut p = Particle::new(2, 2);
            assert_eq!(p.step(&grid, &mut rng).unwrap(), 0);
            let d = p.x().abs_diff(2) + p.y().abs_diff(2);
            assert_eq!(d, 1);
        }
    }

    #[test]
    fn corner_moves_only_inward() {
        let grid = SquareGrid::new(4).unwrap();
        let mut rng = seeded_rng(11);
        let mut seen_x = false;
        let mut seen_y = false;
        for _ in 0..200 {
            let mut p = Particle::new(3, 3);
            p.step(&grid, &mut rng).unwrap();
            match (p.x(), p.y()) {
                (2, 3) => seen_x = true,
                (3, 2) => seen_y = true,
                other => panic!("illegal move to {other:?}"),
            }
        }
        assert!(seen_x && seen_y, "both legal directions should occur");
    }

    #[test]
    fn single_cell_grid_exhausts() {
        let grid = SquareGrid::new(1).unwrap();
        let mut rng = seeded_rng(0);
        let mut p = Particle::new(0, 0);
        assert_eq!(
            p.step(&grid, &mut rng),
            Err(DiffusionError::MoveExhausted {
                position: Cell::new(0, 0),
                attempts: MAX_MOVE_ATTEMPTS
            })
        );
    }

    #[test]
    fn display_shows_position() {
        assert_eq!(Particle::new(4, 9).to_string(), "(4, 9)");
    }

    proptest! {
        #[test]
        fn particle_never_leaves_the_grid(
            size in 2usize..12,
            x in 0usize..12,
            y in 0usize..12,
            seed in any::<u64>(),
            moves in 1usize..200,
        ) {
            let grid = SquareGrid::new(size).unwrap();
            let mut p = Particle::new(x % size, y % size);
            let mut rng = seeded_rng(seed);
            for _ in 0..moves {
                p.step(&grid, &mut rng).unwrap();
                prop_assert!(grid.contains(p.x(), p.y()), "escaped to {}", p);
            }
        }
    }
}
