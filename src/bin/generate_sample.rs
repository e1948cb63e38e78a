//! Writes illustrative sample files for every entry of the built-in table.
//!
//! The data are the first four harmonic-oscillator eigenfunctions (Hermite
//! functions), picked by the number at the end of each file name, so the
//! renderer can be tried without the upstream solver. They are not the
//! eigenfunctions of the labelled potentials.
//!
//! Usage: `generate-sample [DIR]` (default: current directory).

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use psi_plot::data::table;

/// Sampling grid, in Å.
const X_MIN: f64 = -4.0;
const X_MAX: f64 = 4.0;
const STEP: f64 = 0.01;

/// Normalised Hermite function ψₙ(x) = (2ⁿ n! √π)^-½ Hₙ(x) e^(-x²/2).
fn hermite_function(n: usize, x: f64) -> f64 {
    let (mut h_prev, mut h) = (1.0, 2.0 * x);
    if n == 0 {
        h = 1.0;
    }
    for k in 1..n {
        let next = 2.0 * x * h - 2.0 * k as f64 * h_prev;
        h_prev = h;
        h = next;
    }
    let factorial: f64 = (1..=n).map(|k| k as f64).product();
    let norm = (2f64.powi(n as i32) * factorial * std::f64::consts::PI.sqrt()).sqrt();
    h * (-x * x / 2.0).exp() / norm
}

/// State index from a name like `harmonic 2.txt`.
fn state_index(path: &Path) -> usize {
    path.file_stem()
        .and_then(|s| s.to_str())
        .and_then(|s| s.rsplit(' ').next())
        .and_then(|n| n.parse().ok())
        .unwrap_or(0)
}

/// One `%.5f ` per value and a newline per line, as the solver writes them.
fn format_line(values: &[f64]) -> String {
    let mut line = String::with_capacity(values.len() * 9);
    for v in values {
        let _ = write!(line, "{v:.5} ");
    }
    line.push('\n');
    line
}

fn main() -> Result<()> {
    env_logger::init();

    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let steps = ((X_MAX - X_MIN) / STEP).round() as usize;
    let xs: Vec<f64> = (0..=steps).map(|i| X_MIN + i as f64 * STEP).collect();

    let entries = table::builtin();
    for entry in &entries {
        let n = state_index(&entry.path);
        let ys: Vec<f64> = xs.iter().map(|&x| hermite_function(n, x)).collect();

        let path = out_dir.join(&entry.path);
        let contents = format_line(&xs) + &format_line(&ys);
        std::fs::write(&path, contents)
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("Wrote state {n} to {}", path.display());
    }

    println!(
        "Wrote {} sample files ({} points each) to {}",
        entries.len(),
        xs.len(),
        out_dir.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hermite_functions_are_normalised() {
        for n in 0..4 {
            let norm: f64 = (0..=8000)
                .map(|i| -8.0 + i as f64 * 0.002)
                .map(|x| hermite_function(n, x).powi(2) * 0.002)
                .sum();
            assert!((norm - 1.0).abs() < 1e-3, "n={n}: {norm}");
        }
    }

    #[test]
    fn parity_alternates() {
        assert!((hermite_function(0, 0.7) - hermite_function(0, -0.7)).abs() < 1e-12);
        assert!((hermite_function(1, 0.7) + hermite_function(1, -0.7)).abs() < 1e-12);
        assert!((hermite_function(3, 0.7) + hermite_function(3, -0.7)).abs() < 1e-12);
    }

    #[test]
    fn reads_state_index_from_name() {
        assert_eq!(state_index(Path::new("harmonic 2.txt")), 2);
        assert_eq!(state_index(Path::new("quartic 3")), 3);
        assert_eq!(state_index(Path::new("custom.txt")), 0);
    }

    #[test]
    fn lines_parse_back() {
        let text = format_line(&[-0.5, 0.0, 1.25]) + &format_line(&[1.0, 2.0, 3.0]);
        assert!(text.starts_with("-0.50000 0.00000 1.25000 \n"));
        let s = psi_plot::data::loader::parse_series(&text).unwrap();
        assert_eq!(s.x, vec![-0.5, 0.0, 1.25]);
    }
}
