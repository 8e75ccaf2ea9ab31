//! Yahoo Finance market data provider.
//!
//! This provider reads the v8 chart API for every symbol shape:
//! - Foreign exchange rates (e.g., EURUSD=X)
//! - Metal futures (e.g., GC=F)
//! - Cryptocurrencies (e.g., BTC-USD)
//!
//! The price is the last close of today's 1-minute series, falling back to
//! the last daily close of the past five days. Percent changes are computed
//! from the hourly and daily series on a best-effort basis, each bounded by
//! its own history timeout so a slow series never costs the price.

mod models;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Client;
use tracing::debug;

use crate::constants::{BROWSER_USER_AGENT, PROVIDER_YAHOO, SOURCE_YAHOO};
use crate::errors::MarketDataError;
use crate::models::{round_dp, ProviderInstrument, Quote, Symbol};
use crate::provider::{http, MarketDataProvider, ProviderCapabilities, ALL_SYMBOL_KINDS};

use models::YahooChartResponse;

/// Default bound on each percent-change series.
pub const DEFAULT_HISTORY_TIMEOUT: Duration = Duration::from_secs(2);

/// Yahoo Finance market data provider.
pub struct YahooProvider {
    client: Client,
    base_url: String,
    history_timeout: Duration,
}

impl YahooProvider {
    /// Create a provider that talks to `base_url` (normally
    /// `https://query1.finance.yahoo.com`).
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            history_timeout: DEFAULT_HISTORY_TIMEOUT,
        }
    }

    /// Bound each percent-change series by `timeout`. Must stay well below
    /// the registry's per-provider budget.
    pub fn with_history_timeout(mut self, timeout: Duration) -> Self {
        self.history_timeout = timeout;
        self
    }

    fn extract_ticker(instrument: &ProviderInstrument) -> Result<String, MarketDataError> {
        match instrument {
            ProviderInstrument::Ticker { symbol } => Ok(symbol.to_string()),
            _ => Err(MarketDataError::ResolutionFailed {
                provider: PROVIDER_YAHOO.to_string(),
            }),
        }
    }

    /// Fetch the non-null closes of one chart series.
    async fn fetch_closes(
        &self,
        ticker: &str,
        range: &str,
        interval: &str,
    ) -> Result<Vec<f64>, MarketDataError> {
        let url = format!(
            "{}/v8/finance/chart/{}?range={}&interval={}",
            self.base_url, ticker, range, interval
        );

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));

        let body = http::get_text(&self.client, PROVIDER_YAHOO, &url, headers).await?;
        let chart: YahooChartResponse =
            serde_json::from_str(&body).map_err(|e| MarketDataError::MalformedResponse {
                provider: PROVIDER_YAHOO.to_string(),
                message: format!("Failed to parse chart response: {}", e),
            })?;

        Ok(chart.closes())
    }

    /// Current price: last intraday close, else last daily close.
    async fn fetch_price(&self, ticker: &str) -> Result<f64, MarketDataError> {
        match self.fetch_closes(ticker, "1d", "1m").await {
            Ok(intraday) => match intraday.last() {
                Some(price) => return Ok(*price),
                None => debug!("No intraday bars for {}, trying daily series", ticker),
            },
            Err(e) => debug!(
                "Intraday series failed for {} ({}), trying daily series",
                ticker, e
            ),
        }

        let daily = self.fetch_closes(ticker, "5d", "1d").await?;
        daily
            .last()
            .copied()
            .ok_or_else(|| MarketDataError::MissingField {
                provider: PROVIDER_YAHOO.to_string(),
                field: "chart.result[0].indicators.quote[0].close".to_string(),
            })
    }

    /// Percent change of `price` against the first close of a series.
    /// Zero unless the series has at least two bars.
    async fn fetch_change(&self, ticker: &str, price: f64, range: &str, interval: &str) -> f64 {
        let history = self.fetch_closes(ticker, range, interval);
        match tokio::time::timeout(self.history_timeout, history).await {
            Ok(Ok(closes)) => percent_change(price, &closes),
            Ok(Err(e)) => {
                debug!("No {} history for {}: {}", range, ticker, e);
                0.0
            }
            Err(_) => {
                debug!("{} history for {} timed out", range, ticker);
                0.0
            }
        }
    }
}

/// Percent change of `current` against the first value of `series`,
/// rounded to 2 decimals.
fn percent_change(current: f64, series: &[f64]) -> f64 {
    match series.first() {
        Some(first) if series.len() > 1 && *first != 0.0 => {
            round_dp((current - first) / first * 100.0, 2)
        }
        _ => 0.0,
    }
}

#[async_trait]
impl MarketDataProvider for YahooProvider {
    fn id(&self) -> &'static str {
        PROVIDER_YAHOO
    }

    fn priority(&self) -> u8 {
        1
    }

    fn capabilities(&self) -> ProviderCapabilities {
        ProviderCapabilities {
            symbol_kinds: ALL_SYMBOL_KINDS,
        }
    }

    async fn get_latest_quote(
        &self,
        symbol: &Symbol,
        instrument: ProviderInstrument,
    ) -> Result<Quote, MarketDataError> {
        let ticker = Self::extract_ticker(&instrument)?;
        let price = self.fetch_price(&ticker).await?;

        let (change_1d, change_5d) = tokio::join!(
            self.fetch_change(&ticker, price, "1d", "1h"),
            self.fetch_change(&ticker, price, "5d", "1d"),
        );

        Ok(Quote::new(symbol, price, SOURCE_YAHOO).with_changes(change_1d, change_5d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn chart(closes: &[Option<f64>]) -> serde_json::Value {
        serde_json::json!({
            "chart": {
                "result": [{"indicators": {"quote": [{"close": closes}]}}],
                "error": null
            }
        })
    }

    fn ticker(symbol: &str) -> ProviderInstrument {
        ProviderInstrument::Ticker {
            symbol: Arc::from(symbol),
        }
    }

    async fn mount_series(server: &MockServer, range: &str, interval: &str, closes: &[Option<f64>]) {
        Mock::given(method("GET"))
            .and(path("/v8/finance/chart/EURUSD=X"))
            .and(query_param("range", range))
            .and(query_param("interval", interval))
            .respond_with(ResponseTemplate::new(200).set_body_json(chart(closes)))
            .mount(server)
            .await;
    }

    #[test]
    fn test_percent_change() {
        assert_eq!(percent_change(110.0, &[100.0, 105.0]), 10.0);
        assert_eq!(percent_change(110.0, &[100.0]), 0.0);
        assert_eq!(percent_change(110.0, &[]), 0.0);
        assert_eq!(percent_change(1.0842, &[1.08, 1.09]), 0.39);
    }

    #[tokio::test]
    async fn test_latest_quote_with_changes() {
        let server = MockServer::start().await;
        mount_series(&server, "1d", "1m", &[Some(1.08), None, Some(1.1)]).await;
        mount_series(&server, "1d", "1h", &[Some(1.0), Some(1.05)]).await;
        mount_series(&server, "5d", "1d", &[Some(1.1)]).await;

        let provider = YahooProvider::new(Client::new(), server.uri());
        let symbol = Symbol::parse("EURUSD").unwrap();
        let quote = provider
            .get_latest_quote(&symbol, ticker("EURUSD=X"))
            .await
            .unwrap();

        assert_eq!(quote.price, 1.1);
        assert_eq!(quote.source, SOURCE_YAHOO);
        assert_eq!(quote.change_1d, 10.0);
        // Single daily bar
        assert_eq!(quote.change_5d, 0.0);
    }

    #[tokio::test]
    async fn test_falls_back_to_daily_close() {
        let server = MockServer::start().await;
        mount_series(&server, "1d", "1m", &[]).await;
        mount_series(&server, "5d", "1d", &[Some(1.07), Some(1.09)]).await;

        let provider = YahooProvider::new(Client::new(), server.uri());
        let symbol = Symbol::parse("EURUSD").unwrap();
        let quote = provider
            .get_latest_quote(&symbol, ticker("EURUSD=X"))
            .await
            .unwrap();

        assert_eq!(quote.price, 1.09);
        // Hourly series unavailable
        assert_eq!(quote.change_1d, 0.0);
    }

    #[tokio::test]
    async fn test_intraday_error_falls_back_to_daily_close() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v8/finance/chart/EURUSD=X"))
            .and(query_param("interval", "1m"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        mount_series(&server, "5d", "1d", &[Some(1.07), Some(1.08)]).await;

        let provider = YahooProvider::new(Client::new(), server.uri());
        let symbol = Symbol::parse("EURUSD").unwrap();
        let quote = provider
            .get_latest_quote(&symbol, ticker("EURUSD=X"))
            .await
            .unwrap();

        assert_eq!(quote.price, 1.08);
        assert_eq!(quote.change_5d, percent_change(1.08, &[1.07, 1.08]));
    }

    #[tokio::test]
    async fn test_slow_history_keeps_price() {
        let server = MockServer::start().await;
        mount_series(&server, "1d", "1m", &[Some(1.0842)]).await;
        Mock::given(method("GET"))
            .and(path("/v8/finance/chart/EURUSD=X"))
            .and(query_param("interval", "1h"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(chart(&[Some(1.0), Some(1.05)]))
                    .set_delay(Duration::from_millis(1500)),
            )
            .mount(&server)
            .await;
        mount_series(&server, "5d", "1d", &[Some(1.08), Some(1.09)]).await;

        let provider = YahooProvider::new(Client::new(), server.uri())
            .with_history_timeout(Duration::from_millis(200));
        let symbol = Symbol::parse("EURUSD").unwrap();
        let quote = tokio::time::timeout(
            Duration::from_secs(1),
            provider.get_latest_quote(&symbol, ticker("EURUSD=X")),
        )
        .await
        .expect("history must not hold the quote back")
        .unwrap();

        assert_eq!(quote.price, 1.0842);
        assert_eq!(quote.source, SOURCE_YAHOO);
        assert_eq!(quote.change_1d, 0.0);
        assert_eq!(quote.change_5d, percent_change(1.0842, &[1.08, 1.09]));
    }

    #[tokio::test]
    async fn test_non_success_status_is_typed_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let provider = YahooProvider::new(Client::new(), server.uri());
        let symbol = Symbol::parse("EURUSD").unwrap();
        let result = provider.get_latest_quote(&symbol, ticker("EURUSD=X")).await;

        assert!(matches!(
            result,
            Err(MarketDataError::UpstreamStatus { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn test_invalid_payload_is_typed_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
            .mount(&server)
            .await;

        let provider = YahooProvider::new(Client::new(), server.uri());
        let symbol = Symbol::parse("EURUSD").unwrap();
        let result = provider.get_latest_quote(&symbol, ticker("EURUSD=X")).await;

        assert!(matches!(
            result,
            Err(MarketDataError::MalformedResponse { .. })
        ));
    }

    #[tokio::test]
    async fn test_wrong_instrument_rejected() {
        let provider = YahooProvider::new(Client::new(), "http://127.0.0.1:9");
        let symbol = Symbol::parse("EURUSD").unwrap();
        let instrument = ProviderInstrument::PageSlug {
            slug: Arc::from("eur-usd"),
        };

        let result = provider.get_latest_quote(&symbol, instrument).await;
        assert!(matches!(
            result,
            Err(MarketDataError::ResolutionFailed { .. })
        ));
    }
}
