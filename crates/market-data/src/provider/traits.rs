//! Market data provider trait definitions.
//!
//! This module defines the core `MarketDataProvider` trait that every
//! upstream adapter implements.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{ProviderInstrument, Quote, Symbol};

use super::capabilities::ProviderCapabilities;

/// Trait for market data providers.
///
/// Implement this trait to add support for a new price source. The registry
/// uses the provider's capabilities and priority to decide when to call it.
///
/// An implementation must not panic or leak a fault past this boundary:
/// transport errors, bad statuses and unexpected payloads all come back as
/// `Err(MarketDataError)`.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use fxquote_market_data::provider::{MarketDataProvider, ProviderCapabilities, ALL_SYMBOL_KINDS};
///
/// struct MyProvider;
///
/// #[async_trait]
/// impl MarketDataProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     fn capabilities(&self) -> ProviderCapabilities {
///         ProviderCapabilities { symbol_kinds: ALL_SYMBOL_KINDS }
///     }
///
///     // ... implement get_latest_quote
/// }
/// ```
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "YAHOO", "CURRENCY_API", etc.
    /// Used for logging, diagnostics and resolution.
    fn id(&self) -> &'static str;

    /// Provider priority for ordering.
    ///
    /// Lower values = higher priority. Default is 10.
    fn priority(&self) -> u8 {
        10
    }

    /// Describes which symbol shapes this provider can serve.
    fn capabilities(&self) -> ProviderCapabilities;

    /// Fetch the latest quote for a symbol.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The canonical symbol being resolved
    /// * `instrument` - The provider-specific instrument parameters (already resolved)
    async fn get_latest_quote(
        &self,
        symbol: &Symbol,
        instrument: ProviderInstrument,
    ) -> Result<Quote, MarketDataError>;
}
