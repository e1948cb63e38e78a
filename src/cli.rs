use std::path::PathBuf;

use clap::Parser;
use psi_plot::batch::Policy;

/// Render wavefunction sample files to PNG plots.
///
/// Without arguments, renders the built-in table of harmonic, linear, cubic
/// and quartic states from the current directory and stops at the first
/// failure.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Cli {
    /// Read the render table from a .json or .csv file instead of the built-in one
    #[arg(short, long, value_name = "PATH")]
    pub table: Option<PathBuf>,

    /// Directory that relative sample paths are resolved against
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// Continue with the remaining entries when one fails
    #[arg(short, long)]
    pub keep_going: bool,

    /// Print the selected table as JSON and exit
    #[arg(long)]
    pub print_table: bool,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn policy(&self) -> Policy {
        if self.keep_going {
            Policy::KeepGoing
        } else {
            Policy::FailFast
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_plain_invocation() {
        let cli = Cli::try_parse_from(["psi-plot"]).unwrap();
        assert!(cli.table.is_none());
        assert_eq!(cli.data_dir, PathBuf::from("."));
        assert_eq!(cli.policy(), Policy::FailFast);
        assert!(!cli.print_table);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "psi-plot",
            "--table",
            "states.csv",
            "-d",
            "out dir",
            "-k",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.table, Some(PathBuf::from("states.csv")));
        assert_eq!(cli.data_dir, PathBuf::from("out dir"));
        assert_eq!(cli.policy(), Policy::KeepGoing);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["psi-plot", "-q", "-v"]).is_err());
    }
}
