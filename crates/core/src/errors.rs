//! Core error types for the conversion engine.
//!
//! Only configuration, persistence and rate-fetch failures are errors.
//! An expression that does not evaluate is `None`, a conversion without
//! usable rates is zero; neither goes through this type.

use betterconvert_market_data::{NetworkError, RetryClass};
use thiserror::Error;

use crate::fx::FxError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Fx error: {0}")]
    Fx(#[from] FxError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True when the failure came from the rate source rather than the engine.
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Fx(FxError::Fetch(_)))
    }

    /// True when the same refresh may succeed on a later trigger.
    ///
    /// Bad URLs, rejected requests and unreadable payloads will fail the same
    /// way again and need a configuration change instead.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Fx(FxError::Fetch(e)) => e.retry_class() == RetryClass::WithBackoff,
            _ => false,
        }
    }
}

impl From<NetworkError> for Error {
    fn from(err: NetworkError) -> Self {
        Error::Fx(FxError::Fetch(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::Json(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
