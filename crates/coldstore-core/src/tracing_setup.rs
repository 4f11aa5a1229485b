//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the tracing/logging system.
///
/// Reads `COLDSTORE_LOG` for per-subsystem log levels, e.g.
/// `COLDSTORE_LOG=coldstore_analysis=debug,coldstore_core=info`.
/// Falls back to `coldstore=info` if unset or invalid.
///
/// Idempotent; calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("COLDSTORE_LOG")
            .unwrap_or_else(|_| EnvFilter::new("coldstore=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
