//! Error types for scanlog core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps them to
//! user-friendly messages. Read-side persistence problems (missing or
//! corrupt documents) are deliberately NOT errors - they degrade to
//! empty/default values per the storage contract.

use thiserror::Error;

/// Result type alias for scanlog operations.
pub type Result<T> = std::result::Result<T, ScanlogError>;

/// Core error type for scanlog operations.
#[derive(Debug, Error)]
pub enum ScanlogError {
    /// Storage backend error (write-side only)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Data validation or serialization error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<std::io::Error> for ScanlogError {
    fn from(err: std::io::Error) -> Self {
        ScanlogError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for ScanlogError {
    fn from(err: serde_json::Error) -> Self {
        ScanlogError::Validation(err.to_string())
    }
}
