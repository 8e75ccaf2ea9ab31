use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::symbol::Symbol;

/// Canonical price quote returned to callers.
///
/// Exactly one provider (or the synthetic generator) backs each quote; values
/// from different sources are never blended.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Whether a price was produced
    pub success: bool,

    /// Canonical symbol (EURUSD)
    pub symbol: String,

    /// Current price, provider-native precision
    pub price: f64,

    /// Instant of retrieval, not of the exchange print
    pub timestamp: DateTime<Utc>,

    /// Percent change against the 1-day reference close (0 when unknown)
    pub change_1d: f64,

    /// Percent change against the 5-day reference close (0 when unknown)
    pub change_5d: f64,

    /// Same as `symbol`; kept for consumers that read the pair name
    pub currency_pair: String,

    /// Provider or method that produced the price
    pub source: String,

    /// Diagnostic message, present when a fallback path was taken
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Quote {
    /// Create a successful quote stamped with the current time.
    pub fn new(symbol: &Symbol, price: f64, source: impl Into<String>) -> Self {
        Self {
            success: true,
            symbol: symbol.to_string(),
            price,
            timestamp: Utc::now(),
            change_1d: 0.0,
            change_5d: 0.0,
            currency_pair: symbol.to_string(),
            source: source.into(),
            error: None,
        }
    }

    /// Attach derived percent changes.
    pub fn with_changes(mut self, change_1d: f64, change_5d: f64) -> Self {
        self.change_1d = change_1d;
        self.change_5d = change_5d;
        self
    }

    /// Attach a diagnostic message.
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

/// Round `value` to `places` decimal places.
pub(crate) fn round_dp(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
