//! exchangerate-api.com provider.
//!
//! `GET {base_url}/latest/EUR` returns `{"base": "EUR", "rates": {"USD": 1.08, ...}}`.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::constants::{PROVIDER_EXCHANGE_RATE_API, SOURCE_EXCHANGE_RATE_API};
use crate::errors::MarketDataError;
use crate::models::{ProviderInstrument, Quote, Symbol};
use crate::provider::rate_table::{direct_quote, RateTable, RateTableSource};
use crate::provider::{http, MarketDataProvider, ProviderCapabilities, PAIR_SYMBOL_KINDS};

/// API response from exchangerate-api.com
#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    /// Missing or null when the base is unknown
    #[serde(default)]
    rates: Option<RateTable>,
}

/// Secondary rate-table provider.
#[derive(Clone)]
pub struct ExchangeRateApiProvider {
    client: Client,
    base_url: String,
}

impl ExchangeRateApiProvider {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl RateTableSource for ExchangeRateApiProvider {
    fn source_id(&self) -> &'static str {
        PROVIDER_EXCHANGE_RATE_API
    }

    fn source_label(&self) -> &'static str {
        SOURCE_EXCHANGE_RATE_API
    }

    async fn fetch_table(&self, base: &str) -> Result<RateTable, MarketDataError> {
        let url = format!("{}/latest/{}", self.base_url, base.to_ascii_uppercase());
        let body: LatestRatesResponse = http::get_json(&self.client, self.source_id(), &url).await?;

        body.rates.ok_or_else(|| MarketDataError::MissingField {
            provider: self.source_id().to_string(),
            field: "rates".to_string(),
        })
    }
}

#[async_trait]
impl MarketDataProvider for ExchangeRateApiProvider {
    fn id(&self) -> &'static str {
        PROVIDER_EXCHANGE_RATE_API
    }

    fn priority(&self) -> u8 {
        3
    }

    fn capabilities(&self) -> ProviderCapabilities {
        ProviderCapabilities {
            symbol_kinds: PAIR_SYMBOL_KINDS,
        }
    }

    async fn get_latest_quote(
        &self,
        symbol: &Symbol,
        instrument: ProviderInstrument,
    ) -> Result<Quote, MarketDataError> {
        direct_quote(self, PROVIDER_EXCHANGE_RATE_API, symbol, &instrument).await
    }
}
