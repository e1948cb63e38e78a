use env_logger::{Builder, Env};
use log::LevelFilter;

/// Level forced by the command line, or `None` to defer to `RUST_LOG`.
pub fn level_for(verbosity: u8, quiet: bool) -> Option<LevelFilter> {
    if quiet {
        return Some(LevelFilter::Error);
    }
    match verbosity {
        0 => None,
        1 => Some(LevelFilter::Info),
        2 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    }
}

/// Install the global logger. `RUST_LOG` applies when no flag overrides it;
/// the default is warnings and errors only.
pub fn setup_logging(verbosity: u8, quiet: bool) -> Result<(), log::SetLoggerError> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level_for(verbosity, quiet) {
        builder.filter_level(level);
    }
    builder.format_target(false).try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_for(0, false), None);
        assert_eq!(level_for(1, false), Some(LevelFilter::Info));
        assert_eq!(level_for(2, false), Some(LevelFilter::Debug));
        assert_eq!(level_for(7, false), Some(LevelFilter::Trace));
        assert_eq!(level_for(3, true), Some(LevelFilter::Error));
    }

    #[test]
    fn second_initialisation_is_an_error() {
        // The first call may already have happened in another test.
        let _ = setup_logging(3, false);
        assert!(setup_logging(0, false).is_err());
        log::trace!("logger installed");
    }
}
