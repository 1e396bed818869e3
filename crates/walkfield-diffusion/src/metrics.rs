//! Cumulative simulator statistics.

/// Work counters accumulated over the simulator's lifetime.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunMetrics {
    /// Ticks completed.
    pub ticks: u64,
    /// Particle moves applied.
    pub moves: u64,
    /// Draws rejected because they proposed leaving the grid.
    pub rejected_draws: u64,
    /// Wall-clock time spent in `run`, in microseconds.
    pub elapsed_us: u64,
}

impl RunMetrics {
    /// Fraction of all draws that were rejected, or 0 before any move.
    pub fn rejection_rate(&self) -> f64 {
        let draws = self.moves + self.rejected_draws;
        if draws == 0 {
            0.0
        } else {
            self.rejected_draws as f64 / draws as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_rate() {
        assert_eq!(RunMetrics::default().rejection_rate(), 0.0);
        let m = RunMetrics {
            moves: 3,
            rejected_draws: 1,
            ..Default::default()
        };
        assert_eq!(m.rejection_rate(), 0.25);
    }
}
