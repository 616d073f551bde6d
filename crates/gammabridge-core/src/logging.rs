//! Logging setup for host entry points.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `gammabridge_core=trace`.
pub const LOG_ENV: &str = "GAMMABRIDGE_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install a stderr `fmt` subscriber filtered by [`LOG_ENV`].
///
/// Returns `false` when a global subscriber was already installed, which is
/// the normal case for a host that configures its own logging.
pub fn init() -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
