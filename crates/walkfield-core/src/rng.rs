//! Seeded random source shared by both pipelines.
//!
//! Every stochastic component draws from a single [`SimRng`] created
//! from an explicit `u64` seed, so identical configurations replay
//! bit-identically.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The generator used throughout walkfield.
pub type SimRng = ChaCha8Rng;

/// Build the simulation generator for `seed`.
pub fn seeded_rng(seed: u64) -> SimRng {
    ChaCha8Rng::seed_from_u64(seed)
}
