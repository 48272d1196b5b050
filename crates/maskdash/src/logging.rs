//! Tracing filter setup.

use tracing::Level;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "warn";

/// Filter from `RUST_LOG`, with `--verbose` adding a DEBUG directive.
#[must_use]
pub fn env_filter(verbose: bool) -> EnvFilter {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    with_verbosity(filter, verbose)
}

/// Filter from an explicit directive string instead of the environment.
#[must_use]
pub fn filter_from(directives: Option<&str>, verbose: bool) -> EnvFilter {
    let filter = directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE));
    with_verbosity(filter, verbose)
}

fn with_verbosity(filter: EnvFilter, verbose: bool) -> EnvFilter {
    if verbose {
        filter.add_directive(Level::DEBUG.into())
    } else {
        filter
    }
}
