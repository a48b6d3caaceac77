//! Error types for Coinpocket
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// Main error type for the Coinpocket core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("Encoding error: {0}")]
    Codec(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for Coinpocket
pub type Result<T> = std::result::Result<T, CoreError>;
