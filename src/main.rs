mod cli;
mod logging;

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use psi_plot::batch;
use psi_plot::data::table;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = logging::setup_logging(cli.verbose, cli.quiet) {
        eprintln!("Warning: logger already initialised: {e}");
    }

    let code = exit_code(run(&cli), &mut std::io::stderr());
    if code != 0 {
        std::process::exit(code);
    }
}

/// Map the outcome of [`run`] to a process exit code. A fatal error is
/// written to `err` once and not logged again.
fn exit_code(outcome: Result<bool>, err: &mut impl Write) -> i32 {
    match outcome {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(e) => {
            let _ = writeln!(err, "Error: {e:#}");
            1
        }
    }
}

/// Returns whether every entry was rendered.
fn run(cli: &Cli) -> Result<bool> {
    log::debug!("Parsed arguments: {cli:?}");

    let entries = match &cli.table {
        Some(path) => table::load_table(path)
            .with_context(|| format!("loading render table {}", path.display()))?,
        None => table::builtin(),
    };

    if cli.print_table {
        println!("{}", table::to_json(&entries).context("serialising render table")?);
        return Ok(true);
    }

    let report = batch::run(&entries, &cli.data_dir, cli.policy())?;

    for (path, err) in &report.failures {
        eprintln!("Failed: {}: {err}", path.display());
    }
    println!(
        "Rendered {} of {} plots.",
        report.rendered.len(),
        entries.len()
    );

    Ok(report.is_success())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_error_is_reported_once() {
        let mut err = Vec::new();
        let outcome = Err(anyhow::anyhow!("missing.txt not found")).context("entry 1 failed");

        assert_eq!(exit_code(outcome, &mut err), 1);
        let text = String::from_utf8(err).unwrap();
        assert_eq!(text, "Error: entry 1 failed: missing.txt not found\n");
        assert_eq!(text.matches("not found").count(), 1);
    }

    #[test]
    fn batch_outcome_sets_exit_code() {
        let mut err = Vec::new();
        assert_eq!(exit_code(Ok(true), &mut err), 0);
        assert_eq!(exit_code(Ok(false), &mut err), 1);
        assert!(err.is_empty());
    }
}
