//! Tracing initialization helper.
//!
//! Sets up a process-wide subscriber once, with an env filter from
//! `RUST_LOG` (silent by default so test output stays clean) and compact
//! formatting. The server binary installs its own subscriber and does not
//! go through this.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

/// Initialize tracing for the current process.
///
/// Safe to call from every test; only the first call installs the
/// subscriber.
pub fn init() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("off")).unwrap();

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_thread_ids(false).compact())
            .init();
    });
}
