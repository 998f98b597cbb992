//! Diagnostics via `RUST_LOG`, written to stderr.
//!
//! The library only emits events; binaries call [`init`] once at startup.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. Defaults to `warn` if `RUST_LOG` is unset.
///
/// ```bash
/// RUST_LOG=game_console=trace game_console program.txt
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
