//! Error types for the Easel engine
//!
//! This module defines the error types used throughout the engine,
//! including backend, resource, and initialization failures.

use std::fmt;

/// Result type for Easel engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Easel engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (OpenGL, etc.)
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Invalid resource or request (texture, shader, zero-size surface, etc.)
    InvalidResource(String),

    /// Initialization failed (engine, backend, subsystems)
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Log an ERROR diagnostic and return early with a `BackendError`
///
/// The backend crates use this for failures that must reach the diagnostic
/// stream (shader build failures, incomplete framebuffers) while still
/// propagating a `Result` to the caller.
///
/// # Example
///
/// ```no_run
/// # use easel_engine::engine_bail;
/// # fn f() -> easel_engine::easel::Result<()> {
/// engine_bail!("easel::gl", "framebuffer incomplete: status {:#x}", 0x8cd6);
/// # }
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {{
        $crate::engine_error!($source, $($arg)*);
        return Err($crate::easel::Error::BackendError(format!($($arg)*)));
    }};
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
