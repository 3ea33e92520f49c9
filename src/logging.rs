//! Tracing/logging initialization.
//!
//! Logs go to stderr so they never mix with the CSV written to stdout.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Initialize tracing for the process.
///
/// `RUST_LOG` takes precedence; otherwise `default_level` applies.
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(default_level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_str().to_lowercase()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
