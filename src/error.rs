//! Error types for the advisory toolkit

use thiserror::Error;

/// Result type alias for advisory operations
pub type Result<T> = std::result::Result<T, AdvisoryError>;

#[derive(Error, Debug)]
pub enum AdvisoryError {

    // =============================
    // Advisory Errors
    // =============================

    /// Malformed or out-of-range user input. Raised by the tool controllers
    /// before any provider call; never reaches the gateway.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The provider call failed, returned a non-success status, or returned
    /// a response that does not match the expected structure.
    #[error("Provider error: {0}")]
    Provider(String),

    // =============================
    // External Library Conversions
    // =============================

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
