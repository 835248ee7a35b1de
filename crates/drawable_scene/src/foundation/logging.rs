//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
///
/// Reads the filter from `RUST_LOG`. Call once from the application; tests and
/// libraries should leave logger setup to the binary.
pub fn init() {
    env_logger::init();
}

/// Initialize logging, ignoring an already-installed logger
///
/// Useful for test harnesses where several entry points may race to set up logging.
pub fn try_init() -> bool {
    env_logger::try_init().is_ok()
}
