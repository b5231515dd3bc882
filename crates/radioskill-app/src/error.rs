//! Error types for Radioskill app services
//!
//! Application-level errors that wrap engine errors and add app-specific variants.

use radioskill::error::RadioError;
use thiserror::Error;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] RadioError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Missing resource: {0}")]
    Resource(String),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Host error: {0}")]
    Host(String),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Engine(RadioError::Network(e))
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Engine(RadioError::Io(e))
    }
}

/// Result type alias for Radioskill app services
pub type Result<T> = std::result::Result<T, AppError>;
