//! Entropy growth of particles diffusing from the centre of a box.
//!
//! Runs 1000 particles on a 101×101 grid for 3000 ticks, then prints
//! the entropy curve and the final `x` marginal as text bar charts.

use walkfield::diffusion::max_entropy;
use walkfield::prelude::*;

const TICKS: u64 = 3000;
const CHART_ROWS: usize = 30;
const BAR_WIDTH: usize = 60;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .init();

    println!("=== Random-walk diffusion ===\n");

    let config = DiffusionConfig::builder()
        .grid_size(101)
        .num_particles(1000)
        .seed(42)
        .build()
        .unwrap();
    let size = config.grid_size;
    let n = config.num_particles;
    let mut sim = DiffusionSimulator::new(config).unwrap();
    let series = sim.run(TICKS).unwrap().clone();

    let ceiling = max_entropy(size).min((n as f64).ln());
    println!("Entropy (ceiling {ceiling:.3}):");
    let stride = (series.len() / CHART_ROWS).max(1);
    for (tick, s) in series.iter().step_by(stride) {
        let w = ((s / ceiling) * BAR_WIDTH as f64).round() as usize;
        println!("{:>6} {:<width$} {s:.3}", tick.0, "#".repeat(w), width = BAR_WIDTH);
    }

    println!("\nMarginal distribution over x:");
    let marginal = sim.marginal();
    let peak = marginal.as_slice().iter().copied().max().unwrap_or(1).max(1);
    for (x, &count) in marginal.as_slice().iter().enumerate().step_by(4) {
        let w = (count as usize * BAR_WIDTH) / peak as usize;
        println!("{x:>4} {:<width$} {count}", "*".repeat(w), width = BAR_WIDTH);
    }

    let m = sim.metrics();
    println!();
    println!("  ticks:           {}", m.ticks);
    println!("  moves:           {}", m.moves);
    println!("  rejection rate:  {:.4}", m.rejection_rate());
    println!("  final entropy:   {:.4}", sim.entropy());
}
