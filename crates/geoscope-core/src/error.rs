//! Error handling for geoscope.
//!
//! The error surface is deliberately small: degenerate geometry (zero-area
//! bounds, zero-length segments) is substituted with minimal defaults and
//! never fails, so only genuine resource failures reach callers.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for geoscope.
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// The raster surface could not be allocated at the requested size.
    #[error("Failed to allocate {width}x{height} raster surface")]
    SurfaceAllocation {
        /// Requested surface width in pixels.
        width: u32,
        /// Requested surface height in pixels.
        height: u32,
    },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
