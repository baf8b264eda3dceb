//! Logging setup
//!
//! Structured logging through the `tracing` crate. Host applications that
//! already install their own subscriber can skip this; relocation events are
//! emitted either way.

use tracing_subscriber::{fmt, EnvFilter};

/// Install a formatting subscriber filtered by `MEDIAPATH_LOG` (falling back
/// to `default_level`). A subscriber installed earlier wins; calling this
/// twice is harmless.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_env("MEDIAPATH_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt().with_env_filter(filter).with_target(true).try_init();
}
