//! Discrete Shannon entropy of an occupancy grid.

use walkfield_core::TickId;
use walkfield_space::Field;

/// Shannon entropy `S = -Σ p ln p` of the occupancy distribution.
///
/// `p` for a cell is its count divided by the total particle count.
/// Empty cells contribute nothing. An empty grid has entropy 0.
pub fn entropy(occupancy: &Field<u32>) -> f64 {
    let total = occupancy.total();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    let s = occupancy
        .as_slice()
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = f64::from(c) / total;
            p * p.ln()
        })
        .sum::<f64>();
    // -0.0 for a single occupied cell; rounding can overshoot ln(L²).
    (-s).clamp(0.0, max_entropy(occupancy.size()))
}

/// Upper bound on [`entropy`] for a grid of side `size`: `ln(L²)`,
/// reached when every cell holds the same count.
pub fn max_entropy(size: usize) -> f64 {
    ((size * size) as f64).ln()
}

/// Entropy recorded once per tick, in tick order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntropySeries {
    entries: Vec<(TickId, f64)>,
}

impl EntropySeries {
    /// An empty series.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty series with room for `n` ticks.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            entries: Vec::with_capacity(n),
        }
    }

    /// Append the entropy recorded after `tick`.
    pub fn push(&mut self, tick: TickId, entropy: f64) {
        debug_assert!(
            self.entries.last().map_or(true, |&(t, _)| t < tick),
            "ticks must be strictly increasing"
        );
        self.entries.push((tick, entropy));
    }

    /// Number of recorded ticks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recent entry.
    pub fn last(&self) -> Option<(TickId, f64)> {
        self.entries.last().copied()
    }

    /// All `(tick, entropy)` pairs.
    pub fn as_slice(&self) -> &[(TickId, f64)] {
        &self.entries
    }

    /// Iterate `(tick, entropy)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (TickId, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Tick numbers as plot abscissae.
    pub fn ticks(&self) -> Vec<u64> {
        self.entries.iter().map(|(t, _)| t.0).collect()
    }

    /// Entropy values in tick order.
    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|&(_, s)| s).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concentrated_is_zero() {
        let mut g: Field<u32> = Field::new(5);
        g[(2, 2)] = 1000;
        assert_eq!(entropy(&g), 0.0);
    }

    #[test]
    fn empty_is_zero() {
        let g: Field<u32> = Field::new(5);
        assert_eq!(entropy(&g), 0.0);
    }

    #[test]
    fn two_equal_cells_is_ln2() {
        let mut g: Field<u32> = Field::new(3);
        g[(0, 0)] = 7;
        g[(2, 1)] = 7;
        assert!((entropy(&g) - 2f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn uniform_reaches_maximum() {
        let g: Field<u32> = Field::filled(6, 3);
        assert!((entropy(&g) - max_entropy(6)).abs() < 1e-9);
    }

    #[test]
    fn uniform_never_exceeds_maximum() {
        for size in 2..120 {
            for count in [1, 3, 7] {
                let g: Field<u32> = Field::filled(size, count);
                let s = entropy(&g);
                assert!(s <= max_entropy(size), "L = {size}, c = {count}: {s}");
            }
        }
    }

    #[test]
    fn uneven_is_below_maximum() {
        let mut g: Field<u32> = Field::filled(4, 1);
        g[(0, 0)] = 10;
        let s = entropy(&g);
        assert!(s > 0.0 && s < max_entropy(4));
    }

    #[test]
    fn series_records_in_order() {
        let mut series = EntropySeries::with_capacity(2);
        series.push(TickId(1), 0.5);
        series.push(TickId(2), 0.7);
        assert_eq!(series.len(), 2);
        assert_eq!(series.ticks(), vec![1, 2]);
        assert_eq!(series.values(), vec![0.5, 0.7]);
        assert_eq!(series.last(), Some((TickId(2), 0.7)));
    }
}
