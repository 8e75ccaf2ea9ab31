//! Rules resolver - deterministic symbol -> provider identifier mapping.
//!
//! This resolver combines the static ticker table with shape rules to
//! convert canonical symbols to provider-specific identifiers.

use std::borrow::Cow;
use std::sync::Arc;

use crate::constants::*;
use crate::errors::MarketDataError;
use crate::models::{ProviderId, ProviderInstrument, Symbol};

use super::ticker_map::{metal_spot_name, yahoo_ticker, YAHOO_FX_SUFFIX};
use super::traits::{ResolutionSource, ResolvedInstrument, SymbolResolver};

/// Resolves provider instruments from the ticker table and shape rules.
///
/// # Supported Providers
///
/// - `YAHOO`: table ticker (GC=F, BTC-USD) or `<SYMBOL>=X`
/// - rate-table providers (`CURRENCY_API`, `EXCHANGE_RATE_API` and their
///   reverse/cross variants): 6-letter split into base/quote
/// - `METALS_LIVE`: XAUUSD and XAGUSD only
/// - `INVESTING`: 6-letter split into a `base-quote` page slug
#[derive(Clone, Debug, Default)]
pub struct RulesResolver;

impl RulesResolver {
    /// Create a new RulesResolver.
    pub fn new() -> Self {
        Self
    }

    fn resolve_ticker(symbol: &Symbol) -> ResolvedInstrument {
        match yahoo_ticker(symbol.as_str()) {
            Some(ticker) => ResolvedInstrument {
                instrument: ProviderInstrument::Ticker {
                    symbol: Arc::from(ticker),
                },
                source: ResolutionSource::Table,
            },
            None => ResolvedInstrument {
                instrument: ProviderInstrument::Ticker {
                    symbol: Arc::from(format!("{}{}", symbol, YAHOO_FX_SUFFIX)),
                },
                source: ResolutionSource::Rules,
            },
        }
    }

    fn resolve_pair(symbol: &Symbol) -> Option<ResolvedInstrument> {
        let (base, quote) = symbol.pair()?;
        Some(ResolvedInstrument {
            instrument: ProviderInstrument::CurrencyPair {
                base: Cow::Owned(base.to_string()),
                quote: Cow::Owned(quote.to_string()),
            },
            source: ResolutionSource::Rules,
        })
    }

    fn resolve_metal(symbol: &Symbol) -> Option<ResolvedInstrument> {
        let metal = metal_spot_name(symbol.as_str())?;
        Some(ResolvedInstrument {
            instrument: ProviderInstrument::MetalSpot {
                metal: Cow::Borrowed(metal),
            },
            source: ResolutionSource::Table,
        })
    }

    fn resolve_page(symbol: &Symbol) -> Option<ResolvedInstrument> {
        let (base, quote) = symbol.pair()?;
        Some(ResolvedInstrument {
            instrument: ProviderInstrument::PageSlug {
                slug: Arc::from(format!(
                    "{}-{}",
                    base.to_ascii_lowercase(),
                    quote.to_ascii_lowercase()
                )),
            },
            source: ResolutionSource::Rules,
        })
    }
}

impl SymbolResolver for RulesResolver {
    fn resolve(
        &self,
        provider: &ProviderId,
        symbol: &Symbol,
    ) -> Result<ResolvedInstrument, MarketDataError> {
        let resolved = match provider.as_ref() {
            PROVIDER_YAHOO => Some(Self::resolve_ticker(symbol)),
            PROVIDER_CURRENCY_API
            | PROVIDER_EXCHANGE_RATE_API
            | PROVIDER_CURRENCY_API_REVERSE
            | PROVIDER_EXCHANGE_RATE_API_CROSS
            | PROVIDER_EXCHANGE_RATE_API_REVERSE => Self::resolve_pair(symbol),
            PROVIDER_METALS_LIVE => Self::resolve_metal(symbol),
            PROVIDER_INVESTING => Self::resolve_page(symbol),
            _ => None,
        };

        resolved.ok_or_else(|| MarketDataError::ResolutionFailed {
            provider: provider.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(provider: &'static str, raw: &str) -> Result<ResolvedInstrument, MarketDataError> {
        let symbol = Symbol::parse(raw).unwrap();
        RulesResolver::new().resolve(&Cow::Borrowed(provider), &symbol)
    }

    #[test]
    fn test_yahoo_table_hit() {
        let resolved = resolve(PROVIDER_YAHOO, "XAUUSD").unwrap();
        assert_eq!(resolved.source, ResolutionSource::Table);
        assert_eq!(
            resolved.instrument,
            ProviderInstrument::Ticker {
                symbol: Arc::from("GC=F")
            }
        );
    }

    #[test]
    fn test_yahoo_default_suffix() {
        let resolved = resolve(PROVIDER_YAHOO, "USDSEK").unwrap();
        assert_eq!(resolved.source, ResolutionSource::Rules);
        assert_eq!(
            resolved.instrument,
            ProviderInstrument::Ticker {
                symbol: Arc::from("USDSEK=X")
            }
        );
    }

    #[test]
    fn test_case_does_not_change_identifiers() {
        for provider in [PROVIDER_YAHOO, PROVIDER_CURRENCY_API, PROVIDER_INVESTING] {
            let lower = resolve(provider, "eurusd").unwrap();
            let upper = resolve(provider, "EURUSD").unwrap();
            assert_eq!(lower, upper);
        }
    }

    #[test]
    fn test_rate_providers_split_pair() {
        for provider in [
            PROVIDER_CURRENCY_API,
            PROVIDER_EXCHANGE_RATE_API,
            PROVIDER_CURRENCY_API_REVERSE,
            PROVIDER_EXCHANGE_RATE_API_CROSS,
            PROVIDER_EXCHANGE_RATE_API_REVERSE,
        ] {
            let resolved = resolve(provider, "GBPJPY").unwrap();
            assert_eq!(
                resolved.instrument,
                ProviderInstrument::CurrencyPair {
                    base: Cow::Borrowed("GBP"),
                    quote: Cow::Borrowed("JPY"),
                }
            );
        }
    }

    #[test]
    fn test_rate_providers_reject_non_pairs() {
        let result = resolve(PROVIDER_CURRENCY_API, "US30");
        assert!(matches!(
            result,
            Err(MarketDataError::ResolutionFailed { .. })
        ));
    }

    #[test]
    fn test_metals_only_gold_and_silver() {
        let resolved = resolve(PROVIDER_METALS_LIVE, "XAGUSD").unwrap();
        assert_eq!(
            resolved.instrument,
            ProviderInstrument::MetalSpot {
                metal: Cow::Borrowed("silver")
            }
        );
        assert!(resolve(PROVIDER_METALS_LIVE, "EURUSD").is_err());
        assert!(resolve(PROVIDER_METALS_LIVE, "XPTUSD").is_err());
    }

    #[test]
    fn test_investing_slug() {
        let resolved = resolve(PROVIDER_INVESTING, "EURUSD").unwrap();
        assert_eq!(
            resolved.instrument,
            ProviderInstrument::PageSlug {
                slug: Arc::from("eur-usd")
            }
        );
    }

    #[test]
    fn test_unknown_provider_fails() {
        assert!(resolve("NOPE", "EURUSD").is_err());
    }
}
