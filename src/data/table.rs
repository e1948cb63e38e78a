use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::PlotDescriptor;

// ---------------------------------------------------------------------------
// Built-in table
// ---------------------------------------------------------------------------

const HARMONIC: &str = r"3$eV/\AA^2x^2$";
const LINEAR: &str = r"1$eV/\AA|x|$";
const CUBIC: &str = r"5$eV/\AA^3|x|^3$";
const QUARTIC: &str = r"5$eV/\AA^4x^4$";

/// `(file, energy, potential)` for the four lowest states of each potential.
const BUILTIN: [(&str, &str, &str); 16] = [
    ("harmonic 0.txt", "3.380695eV", HARMONIC),
    ("harmonic 1.txt", "10.14244eV", HARMONIC),
    ("harmonic 2.txt", "16.90392eV", HARMONIC),
    ("harmonic 3.txt", "23.66585eV", HARMONIC),
    ("linear 0.txt", "1.591175eV", LINEAR),
    ("linear 1.txt", "3.651801eV", LINEAR),
    ("linear 2.txt", "5.073221eV", LINEAR),
    ("linear 3.txt", "6.384832eV", LINEAR),
    ("cubic 0.txt", "4.344862eV", CUBIC),
    ("cubic 1.txt", "14.65646eV", CUBIC),
    ("cubic 2.txt", "27.05777eV", CUBIC),
    ("cubic 3.txt", "40.44586eV", CUBIC),
    ("quartic 0.txt", "4.422897eV", QUARTIC),
    ("quartic 1.txt", "15.84949eV", QUARTIC),
    ("quartic 2.txt", "31.09916eV", QUARTIC),
    ("quartic 3.txt", "48.57378eV", QUARTIC),
];

/// The default render table, in render order.
pub fn builtin() -> Vec<PlotDescriptor> {
    BUILTIN
        .iter()
        .map(|&(path, energy, potential)| PlotDescriptor::new(path, energy, potential))
        .collect()
}

// ---------------------------------------------------------------------------
// External tables
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read table '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON table '{path}': {source}", path = path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid CSV table '{path}': {source}", path = path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("entry {index} of '{path}' has an empty path", path = path.display())]
    EmptyPath { path: PathBuf, index: usize },

    #[error("unsupported table extension: .{0} (expected .json or .csv)")]
    UnsupportedExtension(String),
}

/// Load a render table from a file.  Dispatch by extension.
///
/// * `.json` – `[{ "path": "...", "energy": "...", "potential": "..." }, ...]`
/// * `.csv`  – header `path,energy,potential`, one entry per row
pub fn load_table(path: &Path) -> Result<Vec<PlotDescriptor>, TableError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let table = match ext.as_str() {
        "json" => load_json(path)?,
        "csv" => load_csv(path)?,
        other => return Err(TableError::UnsupportedExtension(other.to_string())),
    };

    if let Some(index) = table.iter().position(|d| d.path.as_os_str().is_empty()) {
        return Err(TableError::EmptyPath {
            path: path.to_path_buf(),
            index,
        });
    }

    log::debug!("Loaded {} table entries from {}", table.len(), path.display());
    Ok(table)
}

fn load_json(path: &Path) -> Result<Vec<PlotDescriptor>, TableError> {
    let text = std::fs::read_to_string(path).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| TableError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn load_csv(path: &Path) -> Result<Vec<PlotDescriptor>, TableError> {
    let csv_err = |source| TableError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(csv_err)?;

    reader
        .deserialize::<PlotDescriptor>()
        .map(|row| row.map_err(csv_err))
        .collect()
}

/// Serialise a table in the layout accepted by [`load_table`] for `.json`.
pub fn to_json(table: &[PlotDescriptor]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(table)
}
