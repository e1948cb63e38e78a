use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Fixed prefix of every plot title.
pub const TITLE_PREFIX: &str = "Wavefunction associated with E=";

/// Separator between the energy and the potential label in the title.
pub const TITLE_SEPARATOR: &str = " for V=";

/// Suffix appended to the input file name to form the image path.
pub const OUTPUT_SUFFIX: &str = ".png";

// ---------------------------------------------------------------------------
// SampleSeries – one wavefunction read from disk
// ---------------------------------------------------------------------------

/// A sampled wavefunction: positions and amplitudes of equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries {
    /// Positions (Å).
    pub x: Vec<f64>,
    /// Amplitudes ψ (Å^-1/2) – same length as `x`.
    pub y: Vec<f64>,
}

impl SampleSeries {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the series holds no samples.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate over `(x, ψ)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Horizontal extent, widened when all x values coincide.
    pub fn x_range(&self) -> (f64, f64) {
        widen(min_max(&self.x))
    }

    /// Vertical extent, widened when all ψ values coincide.
    pub fn y_range(&self) -> (f64, f64) {
        widen(min_max(&self.y))
    }
}

fn min_max(values: &[f64]) -> (f64, f64) {
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if min.is_finite() && max.is_finite() {
        (min, max)
    } else {
        (0.0, 0.0)
    }
}

/// A chart needs a non-zero span on both axes.
fn widen((min, max): (f64, f64)) -> (f64, f64) {
    if max > min {
        return (min, max);
    }
    let half = if min != 0.0 {
        min.abs() * 0.05
    } else {
        0.5
    };
    (min - half, max + half)
}

// ---------------------------------------------------------------------------
// PlotDescriptor – what to render and how to label it
// ---------------------------------------------------------------------------

/// One entry of the render table: an input file and its two title labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotDescriptor {
    /// Sample file, relative to the data directory unless absolute.
    pub path: PathBuf,
    /// Eigenenergy label, e.g. `3.380695eV`.
    pub energy: String,
    /// Potential label, e.g. `3$eV/\AA^2x^2$`.
    pub potential: String,
}

impl PlotDescriptor {
    pub fn new(
        path: impl Into<PathBuf>,
        energy: impl Into<String>,
        potential: impl Into<String>,
    ) -> Self {
        PlotDescriptor {
            path: path.into(),
            energy: energy.into(),
            potential: potential.into(),
        }
    }

    /// The plot title, built only from the two literal labels.
    pub fn title(&self) -> String {
        format!(
            "{TITLE_PREFIX}{}{TITLE_SEPARATOR}{}",
            self.energy, self.potential
        )
    }

    /// Resolve `path` against `base` unless it is already absolute.
    pub fn resolve(&self, base: &Path) -> PathBuf {
        if self.path.is_absolute() {
            self.path.clone()
        } else {
            base.join(&self.path)
        }
    }
}

/// `<input>.png` – the suffix is appended, never substituted for an extension.
pub fn output_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(OUTPUT_SUFFIX);
    PathBuf::from(name)
}
