//! Test fixtures and assertion helpers for walkfield development.
//!
//! Shared by the unit and integration tests of the solver and
//! simulator crates, and by the benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use walkfield_diffusion::DiffusionSimulator;
use walkfield_space::Field;

/// Largest `|f(x, y) - f(y, x)|` over the whole field.
///
/// The default boundary (hot top and right edges) is symmetric under
/// reflection across the `x == y` diagonal, so a converged solution
/// should score close to zero.
pub fn mirror_asymmetry(field: &Field<f64>) -> f64 {
    let size = field.size();
    let mut worst: f64 = 0.0;
    for x in 0..size {
        for y in (x + 1)..size {
            worst = worst.max((field[(x, y)] - field[(y, x)]).abs());
        }
    }
    worst
}

/// Largest absolute difference between two fields of the same size.
///
/// # Panics
///
/// Panics if the sizes differ.
pub fn max_abs_diff(a: &Field<f64>, b: &Field<f64>) -> f64 {
    assert_eq!(a.size(), b.size(), "field sizes differ");
    a.as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(p, q)| (p - q).abs())
        .fold(0.0, f64::max)
}

/// Mean over a `(2r+1) × (2r+1)` window centred on `(x, y)`, clipped
/// to the field.
pub fn neighbourhood_mean(field: &Field<f64>, x: usize, y: usize, r: usize) -> f64 {
    let size = field.size();
    let mut sum = 0.0;
    let mut n = 0usize;
    for i in x.saturating_sub(r)..=(x + r).min(size - 1) {
        for j in y.saturating_sub(r)..=(y + r).min(size - 1) {
            sum += field[(i, j)];
            n += 1;
        }
    }
    sum / n as f64
}

/// Assert that occupancy, marginal histogram and particle list all
/// agree on the population size, and that every particle sits inside
/// the grid.
///
/// # Panics
///
/// Panics with a descriptive message on the first disagreement.
pub fn assert_conserved(sim: &DiffusionSimulator) {
    let n = sim.config().num_particles as u64;
    assert_eq!(sim.particles().len() as u64, n, "particle list length");
    assert_eq!(
        sim.occupancy().total(),
        n,
        "occupancy total at tick {}",
        sim.tick()
    );
    assert_eq!(
        sim.marginal().total(),
        n,
        "marginal total at tick {}",
        sim.tick()
    );
    let size = sim.grid().size();
    for p in sim.particles() {
        assert!(
            p.x() < size && p.y() < size,
            "particle {p} left a {size}x{size} grid"
        );
    }
}

/// Whether `value` lies in `[lo, hi]`.
pub fn within(value: f64, lo: f64, hi: f64) -> bool {
    (lo..=hi).contains(&value)
}
