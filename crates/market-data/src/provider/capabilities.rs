//! Provider capabilities.
//!
//! Describes which symbol shapes a provider can serve. The registry only
//! invokes providers whose capabilities cover the requested symbol.

use crate::models::SymbolKind;

/// Every symbol shape, for providers that accept anything.
pub const ALL_SYMBOL_KINDS: &[SymbolKind] = &[
    SymbolKind::Fx,
    SymbolKind::Metal,
    SymbolKind::Crypto,
    SymbolKind::Other,
];

/// Every 6-letter pair shape.
pub const PAIR_SYMBOL_KINDS: &[SymbolKind] =
    &[SymbolKind::Fx, SymbolKind::Metal, SymbolKind::Crypto];

/// Describes the capabilities of a market data provider.
#[derive(Clone, Debug)]
pub struct ProviderCapabilities {
    /// Symbol shapes this provider supports.
    pub symbol_kinds: &'static [SymbolKind],
}

impl ProviderCapabilities {
    /// Whether the provider can serve a symbol of `kind`.
    pub fn supports(&self, kind: SymbolKind) -> bool {
        self.symbol_kinds.contains(&kind)
    }
}
