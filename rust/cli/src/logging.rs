//! Diagnostic logging setup for the `bingo` binary.
//!
//! Command output goes to stdout; tracing output always goes to stderr so
//! it never mixes with JSON written by `generate` or `cfg`.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Default directives when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn,bingo_engine=warn,bingo_cli=warn";

pub fn build_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize logging for the application.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_logging() {
    let subscriber = fmt()
        .with_env_filter(build_filter())
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("global subscriber already installed");
    }
}
