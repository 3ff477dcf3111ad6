//! Error types for the palette engine.

use thiserror::Error;

/// Result type alias using the palette [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Error kinds surfaced by the palette engine.
///
/// Configuration and validation errors surface synchronously at setup or
/// registration time. Search itself never fails: a query always resolves to
/// a (possibly empty) result list.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid option value at engine construction
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed command descriptor at registration time
    #[error("Invalid command: {0}")]
    Validation(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
