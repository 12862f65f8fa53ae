//! Tracing and logging setup shared by the workspace binaries.

/// Initialize process-wide tracing, with the log format taken from
/// `GILDED_ROSE_LOG_FORMAT`.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_from_env();
}

/// Tracing configuration (filters, formats).
pub mod tracing;

pub use self::tracing::LogFormat;
