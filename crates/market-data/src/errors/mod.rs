//! Error types for the market data crate.
//!
//! Every failure a price provider can hit is folded into [`MarketDataError`].
//! Callers at the application boundary decide how to degrade (the token
//! service turns any of these into an empty token list).

use thiserror::Error;

/// Errors that can occur while fetching a price snapshot.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The provider answered with a non-success HTTP status.
    #[error("Unexpected status from {provider}: {status}")]
    HttpStatus {
        /// The provider that returned the status
        provider: String,
        /// The HTTP status code
        status: u16,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The response body could not be decoded into price samples.
    #[error("Invalid payload from {provider}: {message}")]
    InvalidPayload {
        /// The provider that returned the payload
        provider: String,
        /// Decoder error message
        message: String,
    },

    /// A provider-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Maps a transport error from `reqwest` into the matching variant,
    /// attributing it to `provider`.
    pub fn from_transport(provider: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            MarketDataError::Timeout {
                provider: provider.to_string(),
            }
        } else if err.is_decode() {
            MarketDataError::InvalidPayload {
                provider: provider.to_string(),
                message: err.to_string(),
            }
        } else {
            MarketDataError::Network(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MarketDataError::HttpStatus {
            provider: "SWITCHEO".to_string(),
            status: 503,
        };
        assert_eq!(err.to_string(), "Unexpected status from SWITCHEO: 503");

        let err = MarketDataError::InvalidPayload {
            provider: "SWITCHEO".to_string(),
            message: "expected array".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid payload from SWITCHEO: expected array"
        );
    }
}
