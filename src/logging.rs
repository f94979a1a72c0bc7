//! Tracing subscriber setup.
//!
//! Logs go to stderr so they never mix with replies on stdout. `RUST_LOG`
//! takes precedence over the level chosen by `--verbose`.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Later calls are ignored.
pub fn init(verbose: bool) {
    let default_level = if verbose { "mygpt=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
