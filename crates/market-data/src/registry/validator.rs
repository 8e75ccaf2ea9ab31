//! Quote validation.
//!
//! Rejects provider results that cannot back a successful quote:
//! - Non-finite prices (NaN, infinity)
//! - Zero or negative prices
//! - Quotes the provider itself marked unsuccessful
//!
//! Implausibly large prices are accepted with a warning.

use log::warn;

use crate::errors::MarketDataError;
use crate::models::Quote;

/// Validation severity levels.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValidationSeverity {
    /// Hard failure - reject quote, try next provider.
    Hard,
    /// Soft warning - accept quote but log warning.
    Soft,
}

/// Quote validator configuration.
#[derive(Clone, Debug)]
pub struct ValidatorConfig {
    /// Prices above this are logged as suspicious.
    pub warn_above: f64,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            warn_above: 1_000_000_000.0,
        }
    }
}

/// Quote data validator.
#[derive(Clone, Debug, Default)]
pub struct QuoteValidator {
    config: ValidatorConfig,
}

impl QuoteValidator {
    /// Create a new validator with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator with custom configuration.
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Classify a quote. `None` means no issue.
    pub fn check(&self, quote: &Quote) -> Option<ValidationSeverity> {
        if !quote.success || !quote.price.is_finite() || quote.price <= 0.0 {
            Some(ValidationSeverity::Hard)
        } else if quote.price > self.config.warn_above {
            Some(ValidationSeverity::Soft)
        } else {
            None
        }
    }

    /// Validate a quote returned by `provider`.
    ///
    /// Returns Ok(()) if the quote may be returned to callers. Warnings are
    /// logged but do not cause rejection.
    pub fn validate(&self, provider: &str, quote: &Quote) -> Result<(), MarketDataError> {
        match self.check(quote) {
            Some(ValidationSeverity::Hard) => Err(MarketDataError::InvalidPrice {
                provider: provider.to_string(),
                price: quote.price,
            }),
            Some(ValidationSeverity::Soft) => {
                warn!(
                    "Suspicious price {} for {} from '{}'",
                    quote.price, quote.symbol, provider
                );
                Ok(())
            }
            None => Ok(()),
        }
    }
}
