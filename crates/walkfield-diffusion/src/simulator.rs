//! The diffusion simulator.
//!
//! [`DiffusionSimulator`] is the single mutator of its particles,
//! occupancy grid and marginal histogram. All mutating methods take
//! `&mut self`; callers read state through shared borrows between
//! ticks.

use std::time::Instant;

use tracing::{debug, info, instrument, trace};
use walkfield_core::{seeded_rng, SimRng, TickId};
use walkfield_space::{Field, SquareGrid};

use crate::config::DiffusionConfig;
use crate::entropy::{entropy, EntropySeries};
use crate::error::DiffusionError;
use crate::histogram::MarginalHistogram;
use crate::metrics::RunMetrics;
use crate::particle::Particle;

/// Ticks between progress lines at debug level.
const PROGRESS_INTERVAL: u64 = 100;

/// Random-walk diffusion of a particle population on a square grid.
///
/// # Examples
///
/// ```
/// use walkfield_diffusion::{DiffusionConfig, DiffusionSimulator};
///
/// let config = DiffusionConfig::builder()
///     .grid_size(11)
///     .num_particles(50)
///     .seed(3)
///     .build()
///     .unwrap();
/// let mut sim = DiffusionSimulator::new(config).unwrap();
/// assert_eq!(sim.entropy(), 0.0);
///
/// let series = sim.run(20).unwrap();
/// assert_eq!(series.len(), 20);
/// assert_eq!(sim.occupancy().total(), 50);
/// ```
#[derive(Debug)]
pub struct DiffusionSimulator {
    config: DiffusionConfig,
    grid: SquareGrid,
    rng: SimRng,
    particles: Vec<Particle>,
    occupancy: Field<u32>,
    marginal: MarginalHistogram,
    series: EntropySeries,
    tick: TickId,
    metrics: RunMetrics,
}

impl DiffusionSimulator {
    /// Validate `config` and place every particle at the start cell.
    pub fn new(config: DiffusionConfig) -> Result<Self, DiffusionError> {
        config.validate()?;
        let grid = SquareGrid::new(config.grid_size)?;
        let start = config.start_cell();
        grid.check(start)?;

        let n = config.num_particles;
        let particles = vec![Particle::at(start); n];

        let mut occupancy = Field::new(grid.size());
        // n <= u32::MAX is checked by validate().
        occupancy.set(start.x, start.y, n as u32)?;
        let mut marginal = MarginalHistogram::new(grid.size());
        marginal.add(start.x, n as u64);

        Ok(Self {
            rng: seeded_rng(config.seed),
            config,
            grid,
            particles,
            occupancy,
            marginal,
            series: EntropySeries::new(),
            tick: TickId(0),
            metrics: RunMetrics::default(),
        })
    }

    /// Advance every particle by one tick.
    ///
    /// Does not record entropy; [`run`](Self::run) does. In debug
    /// builds the conservation invariant is checked after the tick. A
    /// particle whose move fails is put back where it was before the
    /// error is returned.
    pub fn step(&mut self) -> Result<TickId, DiffusionError> {
        for i in 0..self.particles.len() {
            let from = self.particles[i].position();
            self.remove_from(from.x, from.y)?;

            let rejected = match self.particles[i].step(&self.grid, &mut self.rng) {
                Ok(rejected) => rejected,
                Err(e) => {
                    self.occupancy[(from.x, from.y)] += 1;
                    self.marginal.add(from.x, 1);
                    return Err(e);
                }
            };
            self.metrics.moves += 1;
            self.metrics.rejected_draws += u64::from(rejected);

            let to = self.particles[i].position();
            self.occupancy[(to.x, to.y)] += 1;
            self.marginal.add(to.x, 1);
        }

        self.tick = self.tick.next();
        self.metrics.ticks += 1;

        if cfg!(debug_assertions) {
            self.check_invariants()?;
        }
        Ok(self.tick)
    }

    /// Run `num_ticks` ticks, recording entropy after each.
    ///
    /// Returns the whole series, including entries from earlier runs.
    #[instrument(
        skip(self),
        fields(
            size = self.config.grid_size,
            particles = self.config.num_particles,
            seed = self.config.seed
        )
    )]
    pub fn run(&mut self, num_ticks: u64) -> Result<&EntropySeries, DiffusionError> {
        let started = Instant::now();
        info!(from_tick = %self.tick, num_ticks, "starting diffusion run");

        for _ in 0..num_ticks {
            let tick = self.step()?;
            let s = entropy(&self.occupancy);
            self.series.push(tick, s);
            trace!(%tick, entropy = s, "tick complete");
            if tick.0 % PROGRESS_INTERVAL == 0 {
                debug!(%tick, entropy = s, "diffusion progress");
            }
        }

        self.metrics.elapsed_us += started.elapsed().as_micros() as u64;
        info!(
            tick = %self.tick,
            entropy = self.entropy(),
            rejection_rate = self.metrics.rejection_rate(),
            "diffusion run finished"
        );
        Ok(&self.series)
    }

    /// Verify that the occupancy grid and marginal histogram both sum
    /// to the particle count.
    pub fn check_invariants(&self) -> Result<(), DiffusionError> {
        let expected = self.particles.len() as u64;
        if self.occupancy.total() != expected || self.marginal.total() != expected {
            return Err(self.violation());
        }
        Ok(())
    }

    /// Entropy of the current occupancy grid.
    pub fn entropy(&self) -> f64 {
        entropy(&self.occupancy)
    }

    /// The validated configuration.
    pub fn config(&self) -> &DiffusionConfig {
        &self.config
    }

    /// The simulation grid.
    pub fn grid(&self) -> &SquareGrid {
        &self.grid
    }

    /// Number of completed ticks.
    pub fn tick(&self) -> TickId {
        self.tick
    }

    /// All particles, in processing order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Per-cell particle counts.
    pub fn occupancy(&self) -> &Field<u32> {
        &self.occupancy
    }

    /// Particle counts per `x` column.
    pub fn marginal(&self) -> &MarginalHistogram {
        &self.marginal
    }

    /// The `0..L` abscissa for plotting the marginal histogram.
    pub fn marginal_positions(&self) -> Vec<f64> {
        self.marginal.positions()
    }

    /// Entropy recorded by [`run`](Self::run) so far.
    pub fn entropy_series(&self) -> &EntropySeries {
        &self.series
    }

    /// Cumulative work counters.
    pub fn metrics(&self) -> &RunMetrics {
        &self.metrics
    }

    fn remove_from(&mut self, x: usize, y: usize) -> Result<(), DiffusionError> {
        if self.occupancy[(x, y)] == 0 || !self.marginal.remove(x) {
            return Err(self.violation());
        }
        self.occupancy[(x, y)] -= 1;
        Ok(())
    }

    fn violation(&self) -> DiffusionError {
        DiffusionError::InvariantViolation {
            tick: self.tick,
            expected: self.particles.len() as u64,
            occupancy: self.occupancy.total(),
            marginal: self.marginal.total(),
        }
    }
}
