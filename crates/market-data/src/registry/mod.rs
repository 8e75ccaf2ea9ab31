//! Provider registry module.
//!
//! This module provides orchestration for market data providers, including:
//! - Provider registration and priority ordering
//! - Capability filtering and per-provider symbol resolution
//! - Quote data validation
//! - Skip/failure diagnostics

mod provider_registry;
mod skip_reason;
mod validator;

pub use provider_registry::ProviderRegistry;
pub use skip_reason::{FetchDiagnostics, ProviderAttempt, SkipReason};
pub use validator::{QuoteValidator, ValidationSeverity, ValidatorConfig};
