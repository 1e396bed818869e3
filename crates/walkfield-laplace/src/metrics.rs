//! Per-solve statistics.

/// Work counters collected during one solve.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SolveMetrics {
    /// Interior cells whose potential was estimated.
    pub cells_solved: usize,
    /// Walks completed.
    pub walks: u64,
    /// Unit steps summed over all walks.
    pub total_steps: u64,
    /// Steps taken by the longest walk.
    pub longest_walk: u64,
    /// Wall-clock time for the solve, in microseconds.
    pub elapsed_us: u64,
}

impl SolveMetrics {
    /// Mean steps per walk, or 0 if no walk ran.
    pub fn mean_walk_length(&self) -> f64 {
        if self.walks == 0 {
            0.0
        } else {
            self.total_steps as f64 / self.walks as f64
        }
    }

    pub(crate) fn record_walk(&mut self, steps: u64) {
        self.walks += 1;
        self.total_steps += steps;
        self.longest_walk = self.longest_walk.max(steps);
    }
}
