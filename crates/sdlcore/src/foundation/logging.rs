//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
///
/// Panics if a logger was already installed; use [`try_init`] when that is
/// an expected condition (for example in tests).
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system, tolerating an already-installed logger
///
/// Returns `true` if this call installed the logger.
pub fn try_init() -> bool {
    env_logger::try_init().is_ok()
}
