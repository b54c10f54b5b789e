//! Logging setup shared by the console binaries.

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use crate::tracing::{LogFormat, LogSettings};

/// Initialize process-wide logging with default settings.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    tracing::init(&LogSettings::default());
}
