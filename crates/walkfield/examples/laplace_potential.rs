//! Potential on a square plate with two hot edges.
//!
//! Solves the reference 51×51 problem with 200 walks per cell and
//! prints the field as a character heat map, top edge first.
//!
//! Set `RUST_LOG=walkfield_laplace=debug` to watch line-by-line
//! progress.

use walkfield::prelude::*;

const SHADES: &[u8] = b" .:-=+*#%@";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .init();

    println!("=== Random-walk Laplace solver ===\n");

    let config = SolverConfig::builder()
        .grid_size(51)
        .walks_per_point(200)
        .boundary(BoundaryConditions::default())
        .seed(42)
        .build()
        .unwrap();
    let size = config.grid_size;
    let report = LaplaceSolver::new(config).unwrap().solve().unwrap();
    let field = &report.field;

    for y in (0..size).rev() {
        let row: String = (0..size)
            .map(|x| {
                let t = (field[(x, y)] / BoundaryConditions::HOT).clamp(0.0, 1.0);
                SHADES[(t * (SHADES.len() - 1) as f64).round() as usize] as char
            })
            .collect();
        println!("{row}");
    }

    let m = &report.metrics;
    println!();
    println!("  cells solved:      {}", m.cells_solved);
    println!("  walks:             {}", m.walks);
    println!("  mean walk length:  {:.1}", m.mean_walk_length());
    println!("  longest walk:      {}", m.longest_walk);
    println!("  elapsed:           {:.2} s", m.elapsed_us as f64 / 1e6);
    println!(
        "  u(centre) = {:.3}, u(1, 1) = {:.3}, u(L-2, L-2) = {:.3}",
        field[(size / 2, size / 2)],
        field[(1, 1)],
        field[(size - 2, size - 2)]
    );
}
