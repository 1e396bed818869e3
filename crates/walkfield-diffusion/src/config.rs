//! Simulator configuration and validation.

use walkfield_core::{Cell, ConfigError};

/// Smallest grid on which every cell has a legal move.
pub const MIN_GRID_SIZE: usize = 2;

/// Largest particle population a `u32` per-cell count can hold.
pub const MAX_PARTICLES: usize = u32::MAX as usize;

/// Where particles start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Placement {
    /// All particles at the centre cell `((L-1)/2, (L-1)/2)`.
    #[default]
    Centre,
    /// All particles at the given cell.
    At(Cell),
}

/// Configuration for a [`DiffusionSimulator`](crate::DiffusionSimulator).
#[derive(Clone, Debug, PartialEq)]
pub struct DiffusionConfig {
    /// Side length `L` of the square domain. Default: 101.
    pub grid_size: usize,
    /// Number of particles. Default: 1000.
    pub num_particles: usize,
    /// Seed for the move generator. Default: 0.
    pub seed: u64,
    /// Initial placement. Default: [`Placement::Centre`].
    pub placement: Placement,
}

impl Default for DiffusionConfig {
    fn default() -> Self {
        Self {
            grid_size: 101,
            num_particles: 1000,
            seed: 0,
            placement: Placement::Centre,
        }
    }
}

impl DiffusionConfig {
    /// Start a builder from the defaults.
    pub fn builder() -> DiffusionConfigBuilder {
        DiffusionConfigBuilder {
            config: Self::default(),
        }
    }

    /// The start cell implied by [`placement`](Self::placement).
    pub fn start_cell(&self) -> Cell {
        match self.placement {
            Placement::Centre => {
                let c = self.grid_size.saturating_sub(1) / 2;
                Cell::new(c, c)
            }
            Placement::At(cell) => cell,
        }
    }

    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// - `GridTooSmall` if `grid_size < 2`
    /// - `ZeroParticles` if `num_particles == 0`
    /// - `TooManyParticles` if `num_particles` exceeds [`MAX_PARTICLES`]
    /// - `PlacementOutOfBounds` if the start cell is outside the grid
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < MIN_GRID_SIZE {
            return Err(ConfigError::GridTooSmall {
                size: self.grid_size,
                min: MIN_GRID_SIZE,
            });
        }
        if self.num_particles == 0 {
            return Err(ConfigError::ZeroParticles);
        }
        if self.num_particles > MAX_PARTICLES {
            return Err(ConfigError::TooManyParticles {
                count: self.num_particles,
                max: MAX_PARTICLES,
            });
        }
        let start = self.start_cell();
        if start.x >= self.grid_size || start.y >= self.grid_size {
            return Err(ConfigError::PlacementOutOfBounds {
                x: start.x,
                y: start.y,
                size: self.grid_size,
            });
        }
        Ok(())
    }
}

/// Builder for [`DiffusionConfig`].
#[derive(Clone, Debug)]
pub struct DiffusionConfigBuilder {
    config: DiffusionConfig,
}

impl DiffusionConfigBuilder {
    /// Set the side length `L`.
    pub fn grid_size(mut self, size: usize) -> Self {
        self.config.grid_size = size;
        self
    }

    /// Set the number of particles.
    pub fn num_particles(mut self, n: usize) -> Self {
        self.config.num_particles = n;
        self
    }

    /// Set the generator seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Set the initial placement.
    pub fn placement(mut self, placement: Placement) -> Self {
        self.config.placement = placement;
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> Result<DiffusionConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_run() {
        let c = DiffusionConfig::builder().build().unwrap();
        assert_eq!(c.grid_size, 101);
        assert_eq!(c.num_particles, 1000);
        assert_eq!(c.start_cell(), Cell::new(50, 50));
    }

    #[test]
    fn rejects_single_cell_grid() {
        assert_eq!(
            DiffusionConfig::builder().grid_size(1).build(),
            Err(ConfigError::GridTooSmall { size: 1, min: 2 })
        );
    }

    #[test]
    fn rejects_zero_particles() {
        assert_eq!(
            DiffusionConfig::builder().num_particles(0).build(),
            Err(ConfigError::ZeroParticles)
        );
    }

    #[test]
    fn rejects_placement_outside_grid() {
        assert_eq!(
            DiffusionConfig::builder()
                .grid_size(5)
                .placement(Placement::At(Cell::new(1, 5)))
                .build(),
            Err(ConfigError::PlacementOutOfBounds {
                x: 1,
                y: 5,
                size: 5
            })
        );
    }

    #[test]
    fn explicit_placement_is_used() {
        let c = DiffusionConfig::builder()
            .grid_size(5)
            .placement(Placement::At(Cell::new(0, 4)))
            .build()
            .unwrap();
        assert_eq!(c.start_cell(), Cell::new(0, 4));
    }
}
