//! Core error types for Voltaic

use thiserror::Error;

/// Main error type for Voltaic operations
#[derive(Error, Debug)]
pub enum VoltaicError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Parsing error: {0}")]
    Parse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Result type alias for Voltaic operations
pub type VoltaicResult<T> = Result<T, VoltaicError>;

impl From<serde_json::Error> for VoltaicError {
    fn from(err: serde_json::Error) -> Self {
        VoltaicError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for VoltaicError {
    fn from(err: anyhow::Error) -> Self {
        VoltaicError::Other(err.to_string())
    }
}
