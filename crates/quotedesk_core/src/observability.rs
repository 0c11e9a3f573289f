//! Tracing subscriber initialization.

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Installs the global `fmt` subscriber.
///
/// The filter comes from `RUST_LOG` when set, otherwise from
/// `default_directive` (e.g. `"info"` for the webhook server and `"warn"`
/// for the console so log lines do not interleave with the prompt).
///
/// Calling this twice is harmless: the second installation attempt is
/// ignored.
pub fn init_tracing(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok();

    debug!(installed, default_directive, "Tracing initialized");
}
