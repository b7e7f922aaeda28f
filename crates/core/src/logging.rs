//! Diagnostic logging.
//!
//! Logs go to stderr only: stdout carries protocol lines and must never see
//! anything else.

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `directive` when set. An invalid directive falls
/// back to `info`. Calling this more than once is harmless; later calls are
/// ignored.
pub fn init(directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_LEVEL));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        debug!(directive, "logging initialized");
    }
}
