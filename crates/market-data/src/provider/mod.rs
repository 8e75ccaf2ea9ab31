//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - The `MarketDataProvider` trait that all providers implement
//! - Provider capabilities (which symbol shapes each provider serves)
//! - Concrete provider implementations, one per upstream service
//! - Rate-table derivations (reverse and cross rates) shared by the rate services
//!
//! # Provider Resolution
//!
//! Providers receive pre-resolved `ProviderInstrument` parameters. The
//! mapping from a canonical `Symbol` to provider-specific parameters happens
//! in the resolver module, not in the providers themselves.

mod capabilities;
pub(crate) mod http;
mod traits;

pub mod currency_api;
pub mod exchange_rate_api;
pub mod investing;
pub mod metals_live;
pub mod rate_table;
pub mod yahoo;

// Re-exports
pub use capabilities::{ProviderCapabilities, ALL_SYMBOL_KINDS, PAIR_SYMBOL_KINDS};
pub use traits::MarketDataProvider;
