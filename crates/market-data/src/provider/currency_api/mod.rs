//! fawazahmed0 currency-api provider.
//!
//! Serves static JSON rate tables from a CDN mirror, one file per base
//! currency: `GET {base_url}/currencies/eur.json` returns
//! `{"date": "...", "eur": {"usd": 1.08, ...}}`. Codes are lower-case on the
//! wire and upper-cased here.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::constants::{PROVIDER_CURRENCY_API, SOURCE_CURRENCY_API};
use crate::errors::MarketDataError;
use crate::models::{ProviderInstrument, Quote, Symbol};
use crate::provider::rate_table::{direct_quote, RateTable, RateTableSource};
use crate::provider::{http, MarketDataProvider, ProviderCapabilities, PAIR_SYMBOL_KINDS};

/// Primary rate-table provider.
#[derive(Clone)]
pub struct CurrencyApiProvider {
    client: Client,
    base_url: String,
}

impl CurrencyApiProvider {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl RateTableSource for CurrencyApiProvider {
    fn source_id(&self) -> &'static str {
        PROVIDER_CURRENCY_API
    }

    fn source_label(&self) -> &'static str {
        SOURCE_CURRENCY_API
    }

    async fn fetch_table(&self, base: &str) -> Result<RateTable, MarketDataError> {
        let key = base.to_ascii_lowercase();
        let url = format!("{}/currencies/{}.json", self.base_url, key);

        let mut body: HashMap<String, Value> =
            http::get_json(&self.client, self.source_id(), &url).await?;

        let rates = match body.remove(&key) {
            Some(Value::Object(rates)) => rates,
            _ => {
                return Err(MarketDataError::MissingField {
                    provider: self.source_id().to_string(),
                    field: key,
                })
            }
        };

        // Non-numeric entries are dropped rather than failing the whole table
        Ok(rates
            .into_iter()
            .filter_map(|(code, rate)| rate.as_f64().map(|r| (code.to_ascii_uppercase(), r)))
            .collect())
    }
}

#[async_trait]
impl MarketDataProvider for CurrencyApiProvider {
    fn id(&self) -> &'static str {
        PROVIDER_CURRENCY_API
    }

    fn priority(&self) -> u8 {
        2
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
        direct_quote(self, PROVIDER_CURRENCY_API, symbol, &instrument).await
    }
}
