//! FX Quote Market Data Crate
//!
//! This crate resolves a current price for a currency, metal or crypto
//! symbol from a prioritized chain of public market data sources, with a
//! deterministic synthetic fallback when every source fails.
//!
//! # Overview
//!
//! The market data crate supports:
//! - Multiple symbol shapes: FX pairs, precious metals, crypto, free-form tickers
//! - Multiple providers: Yahoo Finance, two rate-table APIs (direct, reverse
//!   and cross-rate derivations), a metals spot API and an HTML scraper
//! - Provider-agnostic symbol resolution
//! - A news track with a canned fallback list
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |   HTTP request   | --> |     Symbol       |  (canonical identity)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |    Resolver      |  (ticker table + rules)
//!                          +------------------+
//!                                  |
//!                                  v
//!                         +-------------------+
//!                         | ProviderInstrument|  (provider-specific)
//!                         +-------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |    Registry      |  (priority chain)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |      Quote       |  (or synthetic fallback)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`Symbol`] - Canonical, upper-case symbol
//! - [`ProviderInstrument`] - Provider-specific lookup parameters
//! - [`Quote`] - Canonical price record
//! - [`NewsItem`] - Market headline
//! - [`MarketDataClient`] - Facade running the price and news tracks

pub mod client;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod news;
pub mod provider;
pub mod registry;
pub mod resolver;
pub mod synthetic;

// Re-export all public types from models
pub use models::{
    Currency, Impact, NewsItem, ProviderId, ProviderInstrument, ProviderSymbol, Quote, Symbol,
    SymbolKind,
};

pub use client::{ForexSnapshot, MarketDataClient};
pub use config::UpstreamConfig;
pub use errors::{FailureKind, MarketDataError};

// Re-export resolver types
pub use resolver::{ResolutionSource, ResolvedInstrument, RulesResolver, SymbolResolver};

// Re-export provider types
pub use news::{ForexFactoryNews, NewsSource};
pub use provider::currency_api::CurrencyApiProvider;
pub use provider::exchange_rate_api::ExchangeRateApiProvider;
pub use provider::investing::InvestingProvider;
pub use provider::metals_live::MetalsLiveProvider;
pub use provider::rate_table::{CrossRateProvider, RateTableSource, ReverseRateProvider};
pub use provider::yahoo::YahooProvider;
pub use provider::{MarketDataProvider, ProviderCapabilities};

// Re-export registry types
pub use registry::{
    FetchDiagnostics, ProviderAttempt, ProviderRegistry, QuoteValidator, SkipReason,
    ValidationSeverity,
};
