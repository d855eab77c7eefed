//! Curve plotting demo.
//!
//! Resolves each curve name given on the command line and prints an ASCII
//! plot of it over [0, 1]. With no arguments, plots one variant of every
//! family.
//!
//! Usage:
//!   cargo run --example curve_plot -- in-cubic OutBounce "in out elastic"

use anyhow::{Context, Result};
use ease::{Curve, CurveFn};

const WIDTH: usize = 48;
const HEIGHT: usize = 16;
// Rows above 1.0 and below 0.0 so overshooting curves stay visible
const MARGIN: usize = 4;

fn plot(name: &str, f: CurveFn<f64>) {
    let rows = HEIGHT + 2 * MARGIN + 1;
    let mut grid = vec![vec![' '; WIDTH + 1]; rows];

    for col in 0..=WIDTH {
        let p = col as f64 / WIDTH as f64;
        let y = f(p);
        let row = (y * HEIGHT as f64).round() as isize + MARGIN as isize;
        if (0..rows as isize).contains(&row) {
            grid[rows - 1 - row as usize][col] = '*';
        }
    }

    println!("{name}");
    for (i, line) in grid.iter().enumerate() {
        let axis = match rows - 1 - i {
            r if r == MARGIN + HEIGHT => "1.0 |",
            r if r == MARGIN => "0.0 |",
            _ => "    |",
        };
        println!("{axis}{}", line.iter().collect::<String>());
    }
    println!("    +{}", "-".repeat(WIDTH + 1));
    println!();
}

fn main() -> Result<()> {
    let mut names: Vec<String> = std::env::args().skip(1).collect();
    if names.is_empty() {
        names = [
            Curve::InOutQuadratic,
            Curve::OutSine,
            Curve::InOutCircular,
            Curve::OutElastic,
            Curve::InOutBack,
            Curve::OutBounce,
        ]
        .iter()
        .map(|curve| curve.to_string())
        .collect();
    }

    for name in &names {
        let f = ease::get_by_name::<f64>(name)
            .with_context(|| format!("'{name}' does not name a curve"))?;
        plot(name, f);
    }

    Ok(())
}
