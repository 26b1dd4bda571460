//! Error types for the roost store
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//! Only infrastructure failures live here; user-input problems are reported by
//! the executor's own error type.

use std::io;
use thiserror::Error;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the store and its configuration
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (document flush, config read)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
