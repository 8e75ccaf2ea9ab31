use serde::{Deserialize, Serialize};

use super::types::{Currency, ProviderSymbol};

/// Provider-specific instrument parameters.
/// Produced by the resolver, consumed by providers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProviderInstrument {
    /// Single ticker for time-series services (Yahoo: "EURUSD=X", "GC=F", "BTC-USD")
    Ticker { symbol: ProviderSymbol },

    /// Base/quote codes for rate-table services
    CurrencyPair { base: Currency, quote: Currency },

    /// Spot list name for metal services ("gold", "silver")
    MetalSpot { metal: Currency },

    /// Path slug for scraped pages ("eur-usd")
    PageSlug { slug: ProviderSymbol },
}
