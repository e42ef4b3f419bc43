//! Opt-in tracing output for test runs.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize a tracing subscriber for test debugging.
///
/// Uses the `RUST_LOG` environment variable to determine the log level,
/// defaulting to "info" if not set. Safe to call from every test; only the
/// first call in a process installs the subscriber.
pub fn init() {
    let fmt_layer = fmt::layer().with_target(true).compact();
    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init();
}
