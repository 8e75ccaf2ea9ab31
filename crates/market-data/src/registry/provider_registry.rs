//! Provider registry for orchestrating market data providers.
//!
//! The registry walks providers in priority order, handling:
//! - Provider selection based on symbol shape
//! - Symbol resolution per provider
//! - A bounded wait on every provider call
//! - Quote validation
//! - Diagnostic tracking for debugging provider selection
//!
//! Each provider is called at most once per fetch and the walk stops at the
//! first valid quote.

use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};

use super::{FetchDiagnostics, QuoteValidator, SkipReason};
use crate::config::DEFAULT_REQUEST_TIMEOUT;
use crate::errors::MarketDataError;
use crate::models::{ProviderId, Quote, Symbol};
use crate::provider::MarketDataProvider;
use crate::resolver::SymbolResolver;

/// Provider registry for orchestrating market data fetching.
pub struct ProviderRegistry {
    /// Sorted by ascending priority; ties keep registration order.
    providers: Vec<Arc<dyn MarketDataProvider>>,
    resolver: Arc<dyn SymbolResolver>,
    validator: QuoteValidator,
    request_timeout: Duration,
}

impl ProviderRegistry {
    /// Create a new provider registry.
    ///
    /// # Arguments
    ///
    /// * `providers` - List of market data providers, in any order
    /// * `resolver` - Symbol resolver for provider-specific symbol mapping
    pub fn new(
        mut providers: Vec<Arc<dyn MarketDataProvider>>,
        resolver: Arc<dyn SymbolResolver>,
    ) -> Self {
        providers.sort_by_key(|p| p.priority());

        Self {
            providers,
            resolver,
            validator: QuoteValidator::new(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Bound every provider call by `timeout`.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Get all registered providers, in chain order.
    pub fn providers(&self) -> &[Arc<dyn MarketDataProvider>] {
        &self.providers
    }

    /// Fetch the latest quote for a symbol.
    ///
    /// Returns [`MarketDataError::AllSourcesExhausted`] when no provider
    /// produced a valid quote.
    pub async fn fetch_latest_quote(&self, symbol: &Symbol) -> Result<Quote, MarketDataError> {
        self.fetch_latest_quote_with_diagnostics(symbol).await.0
    }

    /// Fetch the latest quote, returning a record of every provider
    /// considered alongside the result.
    ///
    /// Tries providers in order:
    /// 1. Skip providers whose capabilities exclude the symbol's shape
    /// 2. Resolve the symbol for the provider (skip on failure)
    /// 3. Call the provider, bounded by the request timeout
    /// 4. Validate the quote
    /// 5. On any failure, move on to the next provider
    pub async fn fetch_latest_quote_with_diagnostics(
        &self,
        symbol: &Symbol,
    ) -> (Result<Quote, MarketDataError>, FetchDiagnostics) {
        let mut diagnostics = FetchDiagnostics::new();
        let kind = symbol.kind();
        let mut last_error: Option<MarketDataError> = None;

        for provider in &self.providers {
            let provider_id: ProviderId = Cow::Borrowed(provider.id());

            if !provider.capabilities().supports(kind) {
                debug!(
                    "Provider '{}' does not serve {:?} symbols, skipping",
                    provider_id, kind
                );
                diagnostics.record_skip(provider_id, SkipReason::SymbolKindMismatch);
                continue;
            }

            let resolved = match self.resolver.resolve(&provider_id, symbol) {
                Ok(r) => r,
                Err(e) => {
                    debug!(
                        "Resolution failed for provider '{}': {}, trying next",
                        provider_id, e
                    );
                    diagnostics.record_skip(
                        provider_id,
                        SkipReason::ResolutionFailed {
                            message: e.to_string(),
                        },
                    );
                    continue;
                }
            };

            debug!(
                "Fetching {} from provider '{}' with {:?} (source: {:?})",
                symbol, provider_id, resolved.instrument, resolved.source
            );

            let outcome = tokio::time::timeout(
                self.request_timeout,
                provider.get_latest_quote(symbol, resolved.instrument),
            )
            .await
            .unwrap_or_else(|_| {
                Err(MarketDataError::Timeout {
                    provider: provider_id.to_string(),
                })
            })
            .and_then(|quote| {
                self.validator.validate(&provider_id, &quote)?;
                Ok(quote)
            });

            match outcome {
                Ok(quote) => {
                    info!(
                        "Resolved {} from '{}' ({})",
                        symbol, provider_id, quote.source
                    );
                    diagnostics.record_success(provider_id);
                    return (Ok(quote), diagnostics);
                }
                Err(e) => {
                    warn!(
                        "Provider '{}' failed for {} ({}): {}",
                        provider_id,
                        symbol,
                        e.kind(),
                        e
                    );
                    diagnostics.record_error(provider_id, e.to_string());
                    last_error = Some(e);
                }
            }
        }

        debug!("Provider chain for {}: {}", symbol, diagnostics.summary());

        (
            Err(MarketDataError::AllSourcesExhausted {
                symbol: symbol.to_string(),
                last_error: last_error.map(|e| e.to_string()),
            }),
            diagnostics,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProviderInstrument, SymbolKind};
    use crate::provider::{ProviderCapabilities, ALL_SYMBOL_KINDS, PAIR_SYMBOL_KINDS};
    use crate::resolver::{ResolutionSource, ResolvedInstrument};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, Copy)]
    enum Behavior {
        Succeed(f64),
        Fail,
        Hang,
    }

    struct MockProvider {
        id: &'static str,
        priority: u8,
        kinds: &'static [SymbolKind],
        behavior: Behavior,
        call_count: AtomicUsize,
    }

    impl MockProvider {
        fn new(id: &'static str, priority: u8, behavior: Behavior) -> Arc<Self> {
            Arc::new(Self {
                id,
                priority,
                kinds: ALL_SYMBOL_KINDS,
                behavior,
                call_count: AtomicUsize::new(0),
            })
        }

        fn pairs_only(id: &'static str, priority: u8, behavior: Behavior) -> Arc<Self> {
            Arc::new(Self {
                id,
                priority,
                kinds: PAIR_SYMBOL_KINDS,
                behavior,
                call_count: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl MarketDataProvider for MockProvider {
        fn id(&self) -> &'static str {
            self.id
        }

        fn priority(&self) -> u8 {
            self.priority
        }

        fn capabilities(&self) -> ProviderCapabilities {
            ProviderCapabilities {
                symbol_kinds: self.kinds,
            }
        }

        async fn get_latest_quote(
            &self,
            symbol: &Symbol,
            _instrument: ProviderInstrument,
        ) -> Result<Quote, MarketDataError> {
            self.call_count.fetch_add(1, Ordering::SeqCst);

            match self.behavior {
                Behavior::Succeed(price) => Ok(Quote::new(symbol, price, self.id)),
                Behavior::Fail => Err(MarketDataError::UpstreamStatus {
                    provider: self.id.to_string(),
                    status: 500,
                }),
                Behavior::Hang => {
                    tokio::time::sleep(Duration::from_secs(30)).await;
                    Ok(Quote::new(symbol, 1.0, self.id))
                }
            }
        }
    }

    /// Resolves everything except the provider named "UNRESOLVABLE".
    struct MockResolver;

    impl SymbolResolver for MockResolver {
        fn resolve(
            &self,
            provider: &ProviderId,
            symbol: &Symbol,
        ) -> Result<ResolvedInstrument, MarketDataError> {
            if provider.as_ref() == "UNRESOLVABLE" {
                return Err(MarketDataError::ResolutionFailed {
                    provider: provider.to_string(),
                });
            }
            Ok(ResolvedInstrument {
                instrument: ProviderInstrument::Ticker {
                    symbol: Arc::from(symbol.as_str()),
                },
                source: ResolutionSource::Rules,
            })
        }
    }

    fn registry(providers: Vec<Arc<dyn MarketDataProvider>>) -> ProviderRegistry {
        ProviderRegistry::new(providers, Arc::new(MockResolver))
    }

    fn eurusd() -> Symbol {
        Symbol::parse("EURUSD").unwrap()
    }

    #[test]
    fn test_provider_ordering_by_priority() {
        let registry = registry(vec![
            MockProvider::new("LOW_PRIORITY", 20, Behavior::Fail),
            MockProvider::new("HIGH_PRIORITY", 5, Behavior::Fail),
            MockProvider::new("MED_PRIORITY", 10, Behavior::Fail),
        ]);

        let ids: Vec<_> = registry.providers().iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["HIGH_PRIORITY", "MED_PRIORITY", "LOW_PRIORITY"]);
    }

    #[tokio::test]
    async fn test_first_success_short_circuits() {
        let first = MockProvider::new("FIRST", 1, Behavior::Succeed(1.08));
        let second = MockProvider::new("SECOND", 2, Behavior::Succeed(1.09));
        let third = MockProvider::new("THIRD", 3, Behavior::Succeed(1.10));
        let registry = registry(vec![first.clone(), second.clone(), third.clone()]);

        let quote = registry.fetch_latest_quote(&eurusd()).await.unwrap();

        assert_eq!(quote.source, "FIRST");
        assert_eq!(first.calls(), 1);
        assert_eq!(second.calls(), 0);
        assert_eq!(third.calls(), 0);
    }

    #[tokio::test]
    async fn test_failure_advances_to_next() {
        let first = MockProvider::new("FIRST", 1, Behavior::Fail);
        let second = MockProvider::new("SECOND", 2, Behavior::Succeed(1.09));
        let third = MockProvider::new("THIRD", 3, Behavior::Succeed(1.10));
        let registry = registry(vec![first.clone(), second.clone(), third.clone()]);

        let (result, diagnostics) = registry.fetch_latest_quote_with_diagnostics(&eurusd()).await;

        assert_eq!(result.unwrap().source, "SECOND");
        assert_eq!(first.calls(), 1);
        assert_eq!(second.calls(), 1);
        assert_eq!(third.calls(), 0);
        assert!(diagnostics.summary().contains("FIRST: ERROR"));
        assert!(diagnostics.has_success());
    }

    #[tokio::test]
    async fn test_invalid_price_advances() {
        let zero = MockProvider::new("ZERO", 1, Behavior::Succeed(0.0));
        let good = MockProvider::new("GOOD", 2, Behavior::Succeed(1.27));
        let registry = registry(vec![zero.clone(), good.clone()]);

        let quote = registry.fetch_latest_quote(&eurusd()).await.unwrap();

        assert_eq!(quote.source, "GOOD");
        assert_eq!(zero.calls(), 1);
    }

    #[tokio::test]
    async fn test_kind_mismatch_skipped_without_call() {
        let pairs = MockProvider::pairs_only("PAIRS", 1, Behavior::Succeed(1.0));
        let any = MockProvider::new("ANY", 2, Behavior::Succeed(39000.0));
        let registry = registry(vec![pairs.clone(), any.clone()]);

        let symbol = Symbol::parse("US30").unwrap();
        let (result, diagnostics) = registry.fetch_latest_quote_with_diagnostics(&symbol).await;

        assert_eq!(result.unwrap().source, "ANY");
        assert_eq!(pairs.calls(), 0);
        assert!(diagnostics.summary().contains("PAIRS: SKIPPED (SymbolKindMismatch)"));
    }

    #[tokio::test]
    async fn test_resolution_failure_skipped_without_call() {
        let unresolvable = MockProvider::new("UNRESOLVABLE", 1, Behavior::Succeed(1.0));
        let other = MockProvider::new("OTHER", 2, Behavior::Succeed(1.1));
        let registry = registry(vec![unresolvable.clone(), other.clone()]);

        let quote = registry.fetch_latest_quote(&eurusd()).await.unwrap();

        assert_eq!(quote.source, "OTHER");
        assert_eq!(unresolvable.calls(), 0);
    }

    #[tokio::test]
    async fn test_timeout_treated_as_failure() {
        let slow = MockProvider::new("SLOW", 1, Behavior::Hang);
        let fast = MockProvider::new("FAST", 2, Behavior::Succeed(1.2));
        let registry = registry(vec![slow.clone(), fast.clone()])
            .with_request_timeout(Duration::from_millis(50));

        let (result, diagnostics) = registry.fetch_latest_quote_with_diagnostics(&eurusd()).await;

        assert_eq!(result.unwrap().source, "FAST");
        assert_eq!(diagnostics.errors()[0].1, "Timeout: SLOW");
    }

    #[tokio::test]
    async fn test_all_failed_reports_exhaustion() {
        let first = MockProvider::new("FIRST", 1, Behavior::Fail);
        let second = MockProvider::new("SECOND", 2, Behavior::Fail);
        let registry = registry(vec![first.clone(), second.clone()]);

        let result = registry.fetch_latest_quote(&eurusd()).await;

        match result {
            Err(MarketDataError::AllSourcesExhausted { symbol, last_error }) => {
                assert_eq!(symbol, "EURUSD");
                assert_eq!(last_error.as_deref(), Some("Upstream status 500: SECOND"));
            }
            other => panic!("expected exhaustion, got {:?}", other),
        }
        assert_eq!(first.calls(), 1);
        assert_eq!(second.calls(), 1);
    }

    #[tokio::test]
    async fn test_empty_registry_exhausts() {
        let registry = registry(vec![]);
        let result = registry.fetch_latest_quote(&eurusd()).await;
        assert!(matches!(
            result,
            Err(MarketDataError::AllSourcesExhausted {
                last_error: None,
                ..
            })
        ));
    }
}
