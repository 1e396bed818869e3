//! One-dimensional projection of the occupancy grid.

/// Particle counts per `x` column, summed over `y`.
///
/// A derived view of the occupancy grid, updated incrementally by the
/// simulator rather than recomputed each tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarginalHistogram {
    counts: Vec<u64>,
}

impl MarginalHistogram {
    /// An empty histogram with `size` columns.
    pub fn new(size: usize) -> Self {
        Self {
            counts: vec![0; size],
        }
    }

    /// Number of columns, `L`.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the histogram has no columns.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Count in column `x`, or `None` if out of range.
    pub fn get(&self, x: usize) -> Option<u64> {
        self.counts.get(x).copied()
    }

    /// Add `n` particles to column `x`. Returns `false` if `x` is out
    /// of range.
    pub fn add(&mut self, x: usize, n: u64) -> bool {
        match self.counts.get_mut(x) {
            Some(c) => {
                *c += n;
                true
            }
            None => false,
        }
    }

    /// Remove one particle from column `x`. Returns `false` if `x` is
    /// out of range or the column is already empty.
    pub fn remove(&mut self, x: usize) -> bool {
        match self.counts.get_mut(x) {
            Some(c) if *c > 0 => {
                *c -= 1;
                true
            }
            _ => false,
        }
    }

    /// Sum over all columns.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// The counts, indexed by `x`.
    pub fn as_slice(&self) -> &[u64] {
        &self.counts
    }

    /// The abscissa `0, 1, .., L-1` matching [`as_slice`](Self::as_slice),
    /// for plotting.
    pub fn positions(&self) -> Vec<f64> {
        (0..self.counts.len()).map(|x| x as f64).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_remove() {
        let mut h = MarginalHistogram::new(4);
        assert!(h.add(2, 3));
        assert!(h.remove(2));
        assert_eq!(h.get(2), Some(2));
        assert_eq!(h.total(), 2);
    }

    #[test]
    fn remove_from_empty_column_fails() {
        let mut h = MarginalHistogram::new(2);
        assert!(!h.remove(0));
        assert_eq!(h.total(), 0);
    }

    #[test]
    fn out_of_range_is_rejected() {
        let mut h = MarginalHistogram::new(2);
        assert!(!h.add(2, 1));
        assert!(!h.remove(5));
        assert_eq!(h.get(2), None);
    }

    #[test]
    fn positions_span_columns() {
        let h = MarginalHistogram::new(3);
        assert_eq!(h.positions(), vec![0.0, 1.0, 2.0]);
        assert_eq!(h.len(), 3);
        assert!(!h.is_empty());
    }
}
