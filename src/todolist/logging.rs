//! Diagnostic logging bootstrap.
//!
//! Logs go to stderr; stdout belongs to the list. The level comes from the
//! command line verbosity count.

use tracing_subscriber::EnvFilter;

pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::new(level_for(verbosity));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
