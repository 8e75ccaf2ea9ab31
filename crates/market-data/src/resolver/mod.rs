//! Symbol resolution for market data providers.
//!
//! This module converts canonical symbols (e.g., `EURUSD`) to the identifier
//! each provider expects.
//!
//! # Resolution Precedence
//!
//! Given `(provider_id, symbol)`:
//!
//! 1. **Time-series provider**: static ticker table, else `<SYMBOL>=X`
//! 2. **Rate-table providers**: 6-letter split into 3-letter base/quote codes
//! 3. **Metals provider**: gold/silver spot names for XAUUSD/XAGUSD
//! 4. **Scraped pages**: `base-quote` slug from the 6-letter split
//! 5. **If cannot resolve** -> return `ResolutionFailed`, the registry skips the provider
//!
//! # Example
//!
//! ```
//! use std::borrow::Cow;
//! use fxquote_market_data::models::{ProviderInstrument, Symbol};
//! use fxquote_market_data::resolver::{RulesResolver, SymbolResolver};
//!
//! let symbol = Symbol::parse("eurusd").unwrap();
//! let resolved = RulesResolver::new()
//!     .resolve(&Cow::Borrowed("YAHOO"), &symbol)
//!     .unwrap();
//! assert_eq!(
//!     resolved.instrument,
//!     ProviderInstrument::Ticker { symbol: "EURUSD=X".into() }
//! );
//! ```

mod rules_resolver;
mod ticker_map;
mod traits;

pub use rules_resolver::RulesResolver;
pub use ticker_map::{metal_spot_name, yahoo_ticker, YAHOO_FX_SUFFIX, YAHOO_TICKERS};
pub use traits::{ResolutionSource, ResolvedInstrument, SymbolResolver};
