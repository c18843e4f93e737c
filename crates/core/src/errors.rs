//! Core error types for the CoinSwap application.

use thiserror::Error;

use crate::swap::SwapError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the swap calculator.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Swap failed: {0}")]
    Swap(#[from] SwapError),

    #[error("Token '{0}' not found")]
    TokenNotFound(String),

    #[error("Preference store error: {0}")]
    Preferences(String),
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

// === From implementations for common error types ===

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Preferences(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Preferences(err.to_string())
    }
}
