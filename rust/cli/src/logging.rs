//! Diagnostic logging to stderr.
//!
//! The engine reports resolution and settlement through `tracing` events.
//! `RUST_LOG` takes precedence over the configured `log_level`.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Install the global subscriber. Repeated calls keep the first subscriber.
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
