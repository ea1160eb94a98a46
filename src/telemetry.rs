//! Logging setup for the binaries.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs a global subscriber filtered by `RUST_LOG`, defaulting to `info`.
///
/// Does nothing if a subscriber is already installed.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer().with_target(false).with_thread_ids(false);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}
