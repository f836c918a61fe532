//! Diagnostic logging setup.
//!
//! Logs go to stderr so stdout carries only the generated script.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an explicit filter directive (e.g. `exportgen=debug`).
pub const LOG_ENV: &str = "EXPORTGEN_LOG";

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
