//! Dense per-cell storage over a [`SquareGrid`](crate::SquareGrid).

use crate::error::SpaceError;
use std::ops::{Index, IndexMut};
use walkfield_core::Cell;

/// An `L × L` array of values addressed by `(x, y)`.
///
/// Storage is flat with index `x * L + y`, so [`line`](Field::line)
/// returns every `y` for a fixed `x` as one contiguous slice. Indexing
/// with `field[(x, y)]` panics on out-of-range coordinates, like slice
/// indexing; [`get`](Field::get) and [`set`](Field::set) are the
/// checked forms.
#[derive(Clone, Debug, PartialEq)]
pub struct Field<T> {
    size: usize,
    data: Vec<T>,
}

impl<T: Copy + Default> Field<T> {
    /// A field of side `size` filled with `T::default()`.
    pub fn new(size: usize) -> Self {
        Self::filled(size, T::default())
    }
}

impl<T: Copy> Field<T> {
    /// A field of side `size` with every cell set to `value`.
    pub fn filled(size: usize, value: T) -> Self {
        Self {
            size,
            data: vec![value; size * size],
        }
    }

    /// Wrap an existing buffer of exactly `size * size` values.
    pub fn from_vec(size: usize, data: Vec<T>) -> Result<Self, SpaceError> {
        if data.len() != size * size {
            return Err(SpaceError::SizeMismatch {
                expected: size * size,
                actual: data.len(),
            });
        }
        Ok(Self { size, data })
    }

    /// Side length `L`.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Value at `(x, y)`, or `None` if out of range.
    pub fn get(&self, x: usize, y: usize) -> Option<T> {
        self.offset(x, y).map(|i| self.data[i])
    }

    /// Value at `cell`, or `None` if out of range.
    pub fn at(&self, cell: Cell) -> Option<T> {
        self.get(cell.x, cell.y)
    }

    /// Overwrite the value at `(x, y)`.
    pub fn set(&mut self, x: usize, y: usize, value: T) -> Result<(), SpaceError> {
        let i = self.offset(x, y).ok_or(SpaceError::CoordOutOfBounds {
            cell: Cell::new(x, y),
            size: self.size,
        })?;
        self.data[i] = value;
        Ok(())
    }

    /// All values for a fixed `x`, ordered by `y`.
    pub fn line(&self, x: usize) -> Option<&[T]> {
        if x < self.size {
            Some(&self.data[x * self.size..(x + 1) * self.size])
        } else {
            None
        }
    }

    /// The flat buffer, `x * L + y` ordered.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterate `(cell, value)` pairs in flat order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, T)> + '_ {
        let size = self.size;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, &v)| (Cell::new(i / size, i % size), v))
    }

    /// A copy with `x` and `y` swapped.
    ///
    /// Display layers that draw row-major images use this to present
    /// the field in Cartesian orientation.
    pub fn transposed(&self) -> Self {
        let n = self.size;
        let mut data = Vec::with_capacity(self.data.len());
        for y in 0..n {
            for x in 0..n {
                data.push(self.data[x * n + y]);
            }
        }
        Self { size: n, data }
    }

    fn offset(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.size && y < self.size {
            Some(x * self.size + y)
        } else {
            None
        }
    }
}

impl Field<u32> {
    /// Sum of all counts, widened to avoid overflow.
    pub fn total(&self) -> u64 {
        self.data.iter().map(|&c| u64::from(c)).sum()
    }
}

impl<T: Copy> Index<(usize, usize)> for Field<T> {
    type Output = T;

    fn index(&self, (x, y): (usize, usize)) -> &T {
        assert!(
            x < self.size && y < self.size,
            "({x}, {y}) out of bounds for a {size}x{size} field",
            size = self.size
        );
        &self.data[x * self.size + y]
    }
}

impl<T: Copy> IndexMut<(usize, usize)> for Field<T> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut T {
        assert!(
            x < self.size && y < self.size,
            "({x}, {y}) out of bounds for a {size}x{size} field",
            size = self.size
        );
        &mut self.data[x * self.size + y]
    }
}
