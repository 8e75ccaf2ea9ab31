//! Market Data Client - facade over the provider chain and the news track.
//!
//! # Architecture
//!
//! ```text
//!            Symbol
//!              |
//!              v
//!   +---------------------+        +------------------+
//!   |  ProviderRegistry   | -----> |  first valid     |
//!   |  (priority chain)   |        |  Quote           |
//!   +---------------------+        +------------------+
//!              | AllSourcesExhausted         ^
//!              v                             |
//!   +---------------------+                  |
//!   |  synthetic_quote    | -----------------+
//!   +---------------------+
//!
//!   NewsSource --(empty / error)--> fallback_news
//! ```
//!
//! The price track never fails: exhaustion of the real sources is recovered
//! by the synthetic generator. The news track never fails either. The
//! snapshot runs both concurrently.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use reqwest::Client;
use serde::Serialize;

use crate::config::UpstreamConfig;
use crate::constants::*;
use crate::models::{NewsItem, Quote, Symbol};
use crate::news::{resolve_news, ForexFactoryNews, NewsSource};
use crate::provider::currency_api::CurrencyApiProvider;
use crate::provider::exchange_rate_api::ExchangeRateApiProvider;
use crate::provider::investing::InvestingProvider;
use crate::provider::metals_live::MetalsLiveProvider;
use crate::provider::rate_table::{CrossRateProvider, ReverseRateProvider};
use crate::provider::yahoo::YahooProvider;
use crate::provider::MarketDataProvider;
use crate::registry::ProviderRegistry;
use crate::resolver::RulesResolver;
use crate::synthetic::synthetic_quote;

/// Each percent-change series gets this fraction of the per-provider budget.
const HISTORY_TIMEOUT_DIVISOR: u32 = 4;

/// Composite price + news response.
#[derive(Clone, Debug, Serialize)]
pub struct ForexSnapshot {
    pub success: bool,
    pub symbol: String,
    pub price_data: Quote,
    pub news_data: Vec<NewsItem>,
    pub timestamp: DateTime<Utc>,
    pub data_sources: &'static [&'static str],
}

/// Market data client - facade for fetching quotes and news.
///
/// Handles:
/// - Building the provider chain from upstream configuration
/// - Falling back to synthetic quotes when the chain is exhausted
/// - Falling back to canned news when scraping yields nothing
pub struct MarketDataClient {
    registry: ProviderRegistry,
    news: Arc<dyn NewsSource>,
}

impl MarketDataClient {
    /// Create a client from an existing registry and news source.
    pub fn new(registry: ProviderRegistry, news: Arc<dyn NewsSource>) -> Self {
        Self { registry, news }
    }

    /// Create a client wired to every upstream in `config`, sharing `client`.
    pub fn from_config(client: Client, config: &UpstreamConfig) -> Self {
        let registry = ProviderRegistry::new(
            Self::default_providers(&client, config),
            Arc::new(RulesResolver::new()),
        )
        .with_request_timeout(config.request_timeout);

        let news = Arc::new(ForexFactoryNews::new(client, &config.forex_factory_url));

        Self::new(registry, news)
    }

    /// The full price chain, in priority order.
    pub fn default_providers(
        client: &Client,
        config: &UpstreamConfig,
    ) -> Vec<Arc<dyn MarketDataProvider>> {
        let currency_api = CurrencyApiProvider::new(client.clone(), &config.currency_api_url);
        let exchange_rate_api =
            ExchangeRateApiProvider::new(client.clone(), &config.exchange_rate_api_url);

        let providers: Vec<Arc<dyn MarketDataProvider>> = vec![
            Arc::new(
                YahooProvider::new(client.clone(), &config.yahoo_url)
                    .with_history_timeout(config.request_timeout / HISTORY_TIMEOUT_DIVISOR),
            ),
            Arc::new(currency_api.clone()),
            Arc::new(exchange_rate_api.clone()),
            Arc::new(ReverseRateProvider::new(
                PROVIDER_CURRENCY_API_REVERSE,
                4,
                currency_api,
            )),
            Arc::new(CrossRateProvider::new(
                PROVIDER_EXCHANGE_RATE_API_CROSS,
                5,
                exchange_rate_api.clone(),
            )),
            Arc::new(ReverseRateProvider::new(
                PROVIDER_EXCHANGE_RATE_API_REVERSE,
                6,
                exchange_rate_api,
            )),
            Arc::new(MetalsLiveProvider::new(client.clone(), &config.metals_url)),
            Arc::new(InvestingProvider::new(client.clone(), &config.investing_url)),
        ];
        providers
    }

    /// Access the underlying registry.
    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Resolve a quote. Always produces a successful quote.
    ///
    /// When the chain is exhausted the synthetic quote carries the last
    /// provider failure as its `error`.
    pub async fn get_quote(&self, symbol: &Symbol) -> Quote {
        let (result, diagnostics) = self.registry.fetch_latest_quote_with_diagnostics(symbol).await;
        info!(
            "Provider chain for {} ({} called): {}",
            symbol,
            diagnostics.attempted().len(),
            diagnostics.summary()
        );

        match result {
            Ok(quote) => quote,
            Err(e) => {
                warn!("Falling back to synthetic quote for {}: {}", symbol, e);
                let reason = diagnostics
                    .last_error()
                    .map(str::to_string)
                    .unwrap_or_else(|| e.to_string());
                synthetic_quote(symbol, Utc::now(), Some(reason))
            }
        }
    }

    /// Resolve the headline list. Never empty.
    pub async fn get_news(&self) -> Vec<NewsItem> {
        resolve_news(self.news.as_ref(), Utc::now()).await
    }

    /// Resolve price and news concurrently and assemble the snapshot.
    pub async fn get_snapshot(&self, symbol: &Symbol) -> ForexSnapshot {
        let (price_data, news_data) = tokio::join!(self.get_quote(symbol), self.get_news());
        debug!(
            "Snapshot for {}: price from '{}', {} headlines",
            symbol,
            price_data.source,
            news_data.len()
        );

        ForexSnapshot {
            success: true,
            symbol: symbol.to_string(),
            price_data,
            news_data,
            timestamp: Utc::now(),
            data_sources: SNAPSHOT_DATA_SOURCES,
        }
    }
}
