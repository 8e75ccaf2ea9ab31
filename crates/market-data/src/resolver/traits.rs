//! Resolution traits for the market data crate.
//!
//! Defines the core abstraction for mapping canonical symbols to
//! provider-specific identifiers.

use crate::errors::MarketDataError;
use crate::models::{ProviderId, Symbol};

// Re-export ProviderInstrument for convenience
pub use crate::models::ProviderInstrument;

/// Resolution result containing the resolved instrument and its source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedInstrument {
    /// The provider-specific instrument parameters.
    pub instrument: ProviderInstrument,
    /// Where this resolution came from.
    pub source: ResolutionSource,
}

/// Indicates how an instrument was resolved.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResolutionSource {
    /// From the static lookup table of well-known symbols.
    Table,
    /// Derived from the symbol's shape (default suffix, base/quote split).
    Rules,
}

/// Maps a canonical symbol to the identifier a provider expects.
///
/// Implementations must be pure: the same `(provider, symbol)` always
/// resolves to the same instrument.
pub trait SymbolResolver: Send + Sync {
    /// Resolve a provider-specific instrument.
    ///
    /// # Returns
    /// * `Ok(resolved)` - Successfully resolved instrument
    /// * `Err(MarketDataError::ResolutionFailed)` - The provider cannot serve this symbol
    fn resolve(
        &self,
        provider: &ProviderId,
        symbol: &Symbol,
    ) -> Result<ResolvedInstrument, MarketDataError>;
}
