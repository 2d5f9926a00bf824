//! Error types and retry classification for the rate-fetch boundary.
//!
//! - [`NetworkError`]: every way fetching a rate table can fail
//! - [`RetryClass`]: whether a failure is worth retrying

mod retry;

pub use retry::RetryClass;

use thiserror::Error;

/// Errors that can occur while fetching exchange rates.
///
/// These are the only failures the engine ever propagates as `Err`. The
/// refresh service reports them to its caller and keeps the existing rates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// The endpoint URL could not be built (missing key, malformed base code).
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The server answered with a non-success HTTP status.
    #[error("Bad request: HTTP {status}")]
    BadRequest {
        /// HTTP status code returned by the server
        status: u16,
    },

    /// The payload was well-formed but the provider reported a failure,
    /// or it described a different base currency than requested.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The payload could not be decoded into a rate table.
    #[error("Decoding error: {0}")]
    DecodingError(String),
}

impl NetworkError {
    /// Returns the retry classification for this error.
    ///
    /// ```
    /// use betterconvert_market_data::errors::{NetworkError, RetryClass};
    ///
    /// let error = NetworkError::BadRequest { status: 503 };
    /// assert_eq!(error.retry_class(), RetryClass::WithBackoff);
    ///
    /// let error = NetworkError::DecodingError("missing field".to_string());
    /// assert_eq!(error.retry_class(), RetryClass::Never);
    /// ```
    pub fn retry_class(&self) -> RetryClass {
        match self {
            Self::InvalidUrl(_) | Self::DecodingError(_) => RetryClass::Never,

            Self::BadRequest { status } if *status == 429 || *status >= 500 => {
                RetryClass::WithBackoff
            }
            Self::BadRequest { .. } => RetryClass::Never,

            Self::InvalidResponse(_) => RetryClass::WithBackoff,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_never_retries() {
        let error = NetworkError::InvalidUrl("missing api key".to_string());
        assert_eq!(error.retry_class(), RetryClass::Never);
    }

    #[test]
    fn test_client_errors_never_retry() {
        assert_eq!(
            NetworkError::BadRequest { status: 404 }.retry_class(),
            RetryClass::Never
        );
        assert_eq!(
            NetworkError::BadRequest { status: 403 }.retry_class(),
            RetryClass::Never
        );
    }

    #[test]
    fn test_rate_limit_and_server_errors_retry_with_backoff() {
        assert_eq!(
            NetworkError::BadRequest { status: 429 }.retry_class(),
            RetryClass::WithBackoff
        );
        assert_eq!(
            NetworkError::BadRequest { status: 502 }.retry_class(),
            RetryClass::WithBackoff
        );
    }

    #[test]
    fn test_error_messages() {
        let error = NetworkError::BadRequest { status: 500 };
        assert_eq!(error.to_string(), "Bad request: HTTP 500");

        let error = NetworkError::DecodingError("expected value".to_string());
        assert!(error.to_string().contains("expected value"));
    }
}
