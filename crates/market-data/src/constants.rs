//! Provider identifiers and source labels.

/// Provider identifiers
pub const PROVIDER_YAHOO: &str = "YAHOO";
pub const PROVIDER_CURRENCY_API: &str = "CURRENCY_API";
pub const PROVIDER_EXCHANGE_RATE_API: &str = "EXCHANGE_RATE_API";
pub const PROVIDER_CURRENCY_API_REVERSE: &str = "CURRENCY_API_REVERSE";
pub const PROVIDER_EXCHANGE_RATE_API_CROSS: &str = "EXCHANGE_RATE_API_CROSS";
pub const PROVIDER_EXCHANGE_RATE_API_REVERSE: &str = "EXCHANGE_RATE_API_REVERSE";
pub const PROVIDER_METALS_LIVE: &str = "METALS_LIVE";
pub const PROVIDER_INVESTING: &str = "INVESTING";

/// Source labels written into `Quote::source`
pub const SOURCE_YAHOO: &str = "Yahoo Finance";
pub const SOURCE_CURRENCY_API: &str = "fawazahmed0/currency-api";
pub const SOURCE_EXCHANGE_RATE_API: &str = "exchangerate-api.com";
pub const SOURCE_METALS_LIVE: &str = "metals.live";
pub const SOURCE_INVESTING: &str = "investing.com";
pub const SOURCE_SYNTHETIC: &str = "Mock Data (Yahoo Finance unavailable)";

/// Upstream names reported alongside the composite forex snapshot.
pub const SNAPSHOT_DATA_SOURCES: &[&str] = &["ForexFactory", "yfinance", "investing.com"];

/// Browser-like user agent for HTML pages that reject bare clients.
pub const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
