//! metals.live spot price provider.
//!
//! `GET {base_url}/spot/gold` returns a list of spot entries; the first
//! entry's `price` is taken. Only gold and silver are served.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::constants::{PROVIDER_METALS_LIVE, SOURCE_METALS_LIVE};
use crate::errors::MarketDataError;
use crate::models::{ProviderInstrument, Quote, Symbol, SymbolKind};
use crate::provider::{http, MarketDataProvider, ProviderCapabilities};

/// One entry of the spot list
#[derive(Debug, Deserialize)]
struct SpotEntry {
    #[serde(default)]
    price: f64,
}

/// Precious metals spot provider.
pub struct MetalsLiveProvider {
    client: Client,
    base_url: String,
}

impl MetalsLiveProvider {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl MarketDataProvider for MetalsLiveProvider {
    fn id(&self) -> &'static str {
        PROVIDER_METALS_LIVE
    }

    fn priority(&self) -> u8 {
        7
    }

    fn capabilities(&self) -> ProviderCapabilities {
        ProviderCapabilities {
            symbol_kinds: &[SymbolKind::Metal],
        }
    }

    async fn get_latest_quote(
        &self,
        symbol: &Symbol,
        instrument: ProviderInstrument,
    ) -> Result<Quote, MarketDataError> {
        let metal = match &instrument {
            ProviderInstrument::MetalSpot { metal } => metal.to_string(),
            _ => {
                return Err(MarketDataError::ResolutionFailed {
                    provider: PROVIDER_METALS_LIVE.to_string(),
                })
            }
        };

        let url = format!("{}/spot/{}", self.base_url, metal);
        let entries: Vec<SpotEntry> = http::get_json(&self.client, PROVIDER_METALS_LIVE, &url).await?;

        let price = entries
            .first()
            .map(|entry| entry.price)
            .ok_or_else(|| MarketDataError::MissingField {
                provider: PROVIDER_METALS_LIVE.to_string(),
                field: "[0].price".to_string(),
            })?;

        if price <= 0.0 {
            return Err(MarketDataError::InvalidPrice {
                provider: PROVIDER_METALS_LIVE.to_string(),
                price,
            });
        }

        Ok(Quote::new(symbol, price, SOURCE_METALS_LIVE))
    }
}
