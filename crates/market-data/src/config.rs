//! Upstream endpoint configuration.

use std::time::Duration;

/// Default bound on every upstream call.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Base URLs of every upstream the adapters talk to.
///
/// Defaults point at the public services; tests and deployments can point
/// any of them elsewhere.
#[derive(Clone, Debug)]
pub struct UpstreamConfig {
    pub yahoo_url: String,
    pub currency_api_url: String,
    pub exchange_rate_api_url: String,
    pub metals_url: String,
    pub investing_url: String,
    pub forex_factory_url: String,
    pub request_timeout: Duration,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            yahoo_url: "https://query1.finance.yahoo.com".to_string(),
            currency_api_url: "https://cdn.jsdelivr.net/npm/@fawazahmed0/currency-api@latest/v1"
                .to_string(),
            exchange_rate_api_url: "https://api.exchangerate-api.com/v4".to_string(),
            metals_url: "https://api.metals.live/v1".to_string(),
            investing_url: "https://www.investing.com".to_string(),
            forex_factory_url: "https://www.forexfactory.com".to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl UpstreamConfig {
    /// Point every upstream at the same base URL (mock servers).
    pub fn with_base_url(base: &str) -> Self {
        let base = base.trim_end_matches('/').to_string();
        Self {
            yahoo_url: base.clone(),
            currency_api_url: base.clone(),
            exchange_rate_api_url: base.clone(),
            metals_url: base.clone(),
            investing_url: base.clone(),
            forex_factory_url: base,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Build the shared HTTP client bounded by `request_timeout`.
    pub fn build_http_client(&self) -> Result<reqwest::Client, reqwest::Error> {
        reqwest::Client::builder()
            .timeout(self.request_timeout)
            .build()
    }
}
