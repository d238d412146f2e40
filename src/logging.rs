//! Diagnostic logging on stderr.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "NJOURNAL_LOG";

/// Install the global subscriber. `verbose` wins over the environment.
/// Safe to call more than once: later calls are no-ops.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("naturejournal=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
