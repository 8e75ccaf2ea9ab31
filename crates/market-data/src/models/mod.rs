//! Market data models
//!
//! This module contains the core data types for quote resolution:
//! - `types` - Type aliases for common identifiers (ProviderId, Currency, ProviderSymbol)
//! - `symbol` - Canonical symbol identity (Symbol) and its shape (SymbolKind)
//! - `provider_params` - Provider-specific instrument parameters (ProviderInstrument)
//! - `quote` - The canonical quote record (Quote)
//! - `news` - Market news entries (NewsItem, Impact)

mod news;
mod provider_params;
mod quote;
mod symbol;
mod types;

pub use news::{Impact, NewsItem};
pub use provider_params::ProviderInstrument;
pub use quote::Quote;
pub use symbol::{Symbol, SymbolKind};
pub use types::{Currency, ProviderId, ProviderSymbol};

pub(crate) use quote::round_dp;
