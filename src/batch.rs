use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::data::model::PlotDescriptor;
use crate::render::{self, RenderError};

// ---------------------------------------------------------------------------
// Failure policy
// ---------------------------------------------------------------------------

/// What to do when one entry of the table cannot be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Policy {
    /// Stop at the first failure. Images already written stay on disk.
    #[default]
    FailFast,
    /// Record the failure and continue with the next entry.
    KeepGoing,
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Result of a batch that ran to the end of its table.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Written images, in table order.
    pub rendered: Vec<PathBuf>,
    /// Inputs that failed under [`Policy::KeepGoing`], in table order.
    pub failures: Vec<(PathBuf, RenderError)>,
}

impl BatchReport {
    /// Whether every entry was rendered.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("entry {index} ('{path}') failed after {completed} image(s) were written: {source}", path = path.display())]
    Aborted {
        index: usize,
        path: PathBuf,
        completed: usize,
        #[source]
        source: RenderError,
    },
}

// ---------------------------------------------------------------------------
// Driver
// ---------------------------------------------------------------------------

/// Render every descriptor in order. Relative paths are resolved against
/// `base_dir`.
pub fn run(
    table: &[PlotDescriptor],
    base_dir: &Path,
    policy: Policy,
) -> Result<BatchReport, BatchError> {
    let mut report = BatchReport::default();
    log::info!(
        "Rendering {} entries from {} ({:?})",
        table.len(),
        base_dir.display(),
        policy
    );

    for (index, entry) in table.iter().enumerate() {
        let resolved = PlotDescriptor {
            path: entry.resolve(base_dir),
            ..entry.clone()
        };

        match render::render(&resolved) {
            Ok(out) => report.rendered.push(out),
            Err(source) => match policy {
                Policy::FailFast => {
                    return Err(BatchError::Aborted {
                        index,
                        path: resolved.path,
                        completed: report.rendered.len(),
                        source,
                    });
                }
                Policy::KeepGoing => {
                    log::warn!("Skipping {}: {source}", resolved.path.display());
                    report.failures.push((resolved.path, source));
                }
            },
        }
    }

    log::info!(
        "Batch finished: {} rendered, {} failed",
        report.rendered.len(),
        report.failures.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::output_path;

    const SAMPLE: &str = "0 1 2\n0 0.5 1\n";

    fn table() -> Vec<PlotDescriptor> {
        vec![
            PlotDescriptor::new("first.txt", "1eV", "a"),
            PlotDescriptor::new("missing.txt", "2eV", "b"),
            PlotDescriptor::new("third.txt", "3eV", "c"),
        ]
    }

    fn setup() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("first.txt"), SAMPLE).unwrap();
        std::fs::write(dir.path().join("third.txt"), SAMPLE).unwrap();
        dir
    }

    #[test]
    fn renders_all_entries_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let table = vec![
            PlotDescriptor::new("b.txt", "1eV", "x"),
            PlotDescriptor::new("a.txt", "2eV", "x"),
        ];
        for d in &table {
            std::fs::write(dir.path().join(&d.path), SAMPLE).unwrap();
        }

        let report = run(&table, dir.path(), Policy::FailFast).unwrap();
        assert!(report.is_success());
        assert_eq!(
            report.rendered,
            vec![
                dir.path().join("b.txt.png"),
                dir.path().join("a.txt.png")
            ]
        );
    }

    #[test]
    fn fail_fast_stops_at_first_error() {
        let dir = setup();

        let err = run(&table(), dir.path(), Policy::FailFast).unwrap_err();
        let BatchError::Aborted {
            index,
            path,
            completed,
            ..
        } = err;
        assert_eq!(index, 1);
        assert_eq!(path, dir.path().join("missing.txt"));
        assert_eq!(completed, 1);

        assert!(output_path(&dir.path().join("first.txt")).exists());
        assert!(!output_path(&dir.path().join("third.txt")).exists());
    }

    #[test]
    fn keep_going_isolates_failures() {
        let dir = setup();

        let report = run(&table(), dir.path(), Policy::KeepGoing).unwrap();
        assert!(!report.is_success());
        assert_eq!(report.rendered.len(), 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].0, dir.path().join("missing.txt"));
        assert!(output_path(&dir.path().join("third.txt")).exists());
    }

    #[test]
    fn empty_table_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let report = run(&[], dir.path(), Policy::FailFast).unwrap();
        assert!(report.is_success());
        assert!(report.rendered.is_empty());
    }
}
