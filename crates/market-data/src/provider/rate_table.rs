//! Rate-table sources and the prices derived from them.
//!
//! A rate table maps currency codes to the amount of that currency one unit
//! of the table's base buys. Besides the direct lookup each rate service
//! offers, two derivations work over any table source:
//!
//! - [`ReverseRateProvider`] fetches the table keyed by the quote currency
//!   and inverts the base entry (`price = 1 / rate`).
//! - [`CrossRateProvider`] fetches the USD table once and divides
//!   `rates[quote] / rates[base]`.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{ProviderInstrument, Quote, Symbol};
use crate::provider::{MarketDataProvider, ProviderCapabilities, PAIR_SYMBOL_KINDS};

/// Currency code (upper-case) -> rate against the table base.
pub type RateTable = HashMap<String, f64>;

/// A service that returns a full rate table for a base currency.
#[async_trait]
pub trait RateTableSource: Send + Sync {
    /// Identifier used in errors raised by this source.
    fn source_id(&self) -> &'static str;

    /// Label written into `Quote::source` for prices from this table.
    fn source_label(&self) -> &'static str;

    /// Fetch the table keyed by `base` (upper-case 3-letter code).
    async fn fetch_table(&self, base: &str) -> Result<RateTable, MarketDataError>;
}

/// Look up `code` in `table`, failing when it is absent.
pub fn lookup_rate(provider: &str, table: &RateTable, code: &str) -> Result<f64, MarketDataError> {
    table
        .get(code)
        .copied()
        .ok_or_else(|| MarketDataError::MissingField {
            provider: provider.to_string(),
            field: format!("rates.{}", code),
        })
}

fn extract_pair(
    provider: &str,
    instrument: &ProviderInstrument,
) -> Result<(String, String), MarketDataError> {
    match instrument {
        ProviderInstrument::CurrencyPair { base, quote } => {
            Ok((base.to_ascii_uppercase(), quote.to_ascii_uppercase()))
        }
        _ => Err(MarketDataError::ResolutionFailed {
            provider: provider.to_string(),
        }),
    }
}

/// Direct lookup of `quote` in the table keyed by `base`.
pub(crate) async fn direct_quote<S: RateTableSource + ?Sized>(
    source: &S,
    provider: &str,
    symbol: &Symbol,
    instrument: &ProviderInstrument,
) -> Result<Quote, MarketDataError> {
    let (base, quote) = extract_pair(provider, instrument)?;
    let table = source.fetch_table(&base).await?;
    let price = lookup_rate(provider, &table, &quote)?;

    Ok(Quote::new(symbol, price, source.source_label()))
}

/// Derives a pair's price by inverting the rate of the opposite direction.
pub struct ReverseRateProvider<S> {
    id: &'static str,
    priority: u8,
    source: S,
}

impl<S: RateTableSource> ReverseRateProvider<S> {
    pub fn new(id: &'static str, priority: u8, source: S) -> Self {
        Self {
            id,
            priority,
            source,
        }
    }
}

#[async_trait]
impl<S: RateTableSource> MarketDataProvider for ReverseRateProvider<S> {
    fn id(&self) -> &'static str {
        self.id
    }

    fn priority(&self) -> u8 {
        self.priority
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
        let (base, quote) = extract_pair(self.id, &instrument)?;
        let table = self.source.fetch_table(&quote).await?;
        let reverse = lookup_rate(self.id, &table, &base)?;

        if reverse == 0.0 {
            return Err(MarketDataError::InvalidPrice {
                provider: self.id.to_string(),
                price: reverse,
            });
        }

        Ok(Quote::new(
            symbol,
            1.0 / reverse,
            format!("{} (reverse)", self.source.source_label()),
        ))
    }
}

/// Derives a pair's price from the USD table of the source.
pub struct CrossRateProvider<S> {
    id: &'static str,
    priority: u8,
    source: S,
}

impl<S: RateTableSource> CrossRateProvider<S> {
    pub fn new(id: &'static str, priority: u8, source: S) -> Self {
        Self {
            id,
            priority,
            source,
        }
    }

    fn usd_rate(&self, table: &RateTable, code: &str) -> Result<f64, MarketDataError> {
        if code == "USD" {
            return Ok(1.0);
        }
        lookup_rate(self.id, table, code)
    }
}

#[async_trait]
impl<S: RateTableSource> MarketDataProvider for CrossRateProvider<S> {
    fn id(&self) -> &'static str {
        self.id
    }

    fn priority(&self) -> u8 {
        self.priority
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
        let (base, quote) = extract_pair(self.id, &instrument)?;
        let table = self.source.fetch_table("USD").await?;

        let base_rate = self.usd_rate(&table, &base)?;
        let quote_rate = self.usd_rate(&table, &quote)?;

        if base_rate == 0.0 {
            return Err(MarketDataError::InvalidPrice {
                provider: self.id.to_string(),
                price: base_rate,
            });
        }

        Ok(Quote::new(
            symbol,
            quote_rate / base_rate,
            format!("{} (cross-rate)", self.source.source_label()),
        ))
    }
}
