//! investing.com page scraper.
//!
//! Fetches the currency-pair page (`{base_url}/currencies/eur-usd`) with
//! browser headers and reads the last price from the `"last_last"` field
//! embedded in the page's JSON state.

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use reqwest::Client;

use crate::constants::{PROVIDER_INVESTING, SOURCE_INVESTING};
use crate::errors::MarketDataError;
use crate::models::{ProviderInstrument, Quote, Symbol};
use crate::provider::http::{self, browser_headers};
use crate::provider::{MarketDataProvider, ProviderCapabilities, PAIR_SYMBOL_KINDS};

lazy_static! {
    static ref LAST_PRICE: Regex = Regex::new(r#""last_last":"([0-9.,]+)""#)
        .expect("Invalid regex pattern");
}

/// Extract the last price from a page body. Thousands separators are ignored.
fn extract_last_price(html: &str) -> Result<f64, MarketDataError> {
    let raw = LAST_PRICE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().replace(',', ""))
        .ok_or_else(|| MarketDataError::MissingField {
            provider: PROVIDER_INVESTING.to_string(),
            field: "last_last".to_string(),
        })?;

    raw.parse::<f64>()
        .map_err(|e| MarketDataError::MalformedResponse {
            provider: PROVIDER_INVESTING.to_string(),
            message: format!("Unparsable price '{}': {}", raw, e),
        })
}

/// HTML scraping provider, last in the chain of real sources.
pub struct InvestingProvider {
    client: Client,
    base_url: String,
}

impl InvestingProvider {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl MarketDataProvider for InvestingProvider {
    fn id(&self) -> &'static str {
        PROVIDER_INVESTING
    }

    fn priority(&self) -> u8 {
        8
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
        let slug = match &instrument {
            ProviderInstrument::PageSlug { slug } => slug.to_string(),
            _ => {
                return Err(MarketDataError::ResolutionFailed {
                    provider: PROVIDER_INVESTING.to_string(),
                })
            }
        };

        let url = format!("{}/currencies/{}", self.base_url, slug);
        let html = http::get_text(&self.client, PROVIDER_INVESTING, &url, browser_headers()).await?;
        let price = extract_last_price(&html)?;

        Ok(Quote::new(symbol, price, SOURCE_INVESTING))
    }
}
