//! Error types and failure classification for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: The main error enum for all adapter and chain operations
//! - [`FailureKind`]: Coarse classification used for diagnostics and logging

mod kind;

pub use kind::FailureKind;

use thiserror::Error;

/// Errors that can occur while resolving a quote.
///
/// Adapters never let a fault escape: every network error, bad status,
/// undecodable payload or missing field is turned into one of these variants
/// and handed back to the registry, which uses it only to advance the chain.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The symbol could not be normalized (empty, bad characters, too long).
    #[error("Unsupported symbol: {0}")]
    SymbolUnsupported(String),

    /// The resolver has no mapping of this symbol for the provider.
    #[error("Resolution failed for provider: {provider}")]
    ResolutionFailed {
        /// The provider that cannot handle the symbol
        provider: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// Connection-level failure talking to the provider.
    #[error("Network error: {provider} - {message}")]
    Network {
        /// The provider that could not be reached
        provider: String,
        /// The transport error message
        message: String,
    },

    /// The provider answered with a non-success HTTP status.
    #[error("Upstream status {status}: {provider}")]
    UpstreamStatus {
        /// The provider that answered
        provider: String,
        /// The HTTP status code returned
        status: u16,
    },

    /// The provider returned a body we could not decode.
    #[error("Malformed response: {provider} - {message}")]
    MalformedResponse {
        /// The provider that returned the payload
        provider: String,
        /// What went wrong while decoding
        message: String,
    },

    /// The payload decoded but the value we need is absent.
    #[error("Missing field: {provider} - {field}")]
    MissingField {
        /// The provider that returned the payload
        provider: String,
        /// The field or key that was expected
        field: String,
    },

    /// The provider returned a zero, negative or non-finite price.
    #[error("Invalid price from {provider}: {price}")]
    InvalidPrice {
        /// The provider that returned the price
        provider: String,
        /// The rejected value
        price: f64,
    },

    /// Every applicable provider was tried and none produced a quote.
    /// Recovered by the synthetic generator, never surfaced to callers.
    #[error("All sources exhausted for {symbol}")]
    AllSourcesExhausted {
        /// The canonical symbol being resolved
        symbol: String,
        /// Message of the last provider failure, if any provider was tried
        last_error: Option<String>,
    },
}

impl MarketDataError {
    /// Returns the failure classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use fxquote_market_data::errors::{FailureKind, MarketDataError};
    ///
    /// let error = MarketDataError::Timeout { provider: "YAHOO".to_string() };
    /// assert_eq!(error.kind(), FailureKind::Network);
    ///
    /// let error = MarketDataError::SymbolUnsupported("??".to_string());
    /// assert_eq!(error.kind(), FailureKind::SymbolUnsupported);
    /// ```
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Timeout { .. } | Self::Network { .. } => FailureKind::Network,

            Self::UpstreamStatus { .. }
            | Self::MalformedResponse { .. }
            | Self::MissingField { .. }
            | Self::InvalidPrice { .. } => FailureKind::MalformedResponse,

            Self::SymbolUnsupported(_) | Self::ResolutionFailed { .. } => {
                FailureKind::SymbolUnsupported
            }

            Self::AllSourcesExhausted { .. } => FailureKind::AllSourcesExhausted,
        }
    }

    /// Convert a transport error into a typed failure for `provider`.
    pub fn from_reqwest(provider: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                provider: provider.to_string(),
            }
        } else if err.is_decode() {
            Self::MalformedResponse {
                provider: provider.to_string(),
                message: err.to_string(),
            }
        } else if let Some(status) = err.status() {
            Self::UpstreamStatus {
                provider: provider.to_string(),
                status: status.as_u16(),
            }
        } else {
            Self::Network {
                provider: provider.to_string(),
                message: err.to_string(),
            }
        }
    }
}
