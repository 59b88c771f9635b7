//! Logging setup.
//!
//! Logs are written to stderr through `tracing-subscriber` so stdout only
//! carries the merge summary. `RUST_LOG` takes precedence over the
//! verbosity flags when it is set.

use tracing_subscriber::EnvFilter;

/// Default filter directive for the given verbosity flags.
#[must_use]
pub const fn level_for(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Initialize the global subscriber.
///
/// `filter_override` replaces both the flags and `RUST_LOG`.
///
/// # Errors
///
/// Returns an error if the filter directive is invalid or a global
/// subscriber is already installed.
pub fn init_logging(
    verbose: u8,
    quiet: bool,
    filter_override: Option<&str>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = match filter_override {
        Some(directive) => EnvFilter::try_new(directive)?,
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level_for(verbose, quiet))),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(level_for(3, true), "error");
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0, false), "warn");
        assert_eq!(level_for(1, false), "debug");
        assert_eq!(level_for(2, false), "trace");
        assert_eq!(level_for(9, false), "trace");
    }
}
