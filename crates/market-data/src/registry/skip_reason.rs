//! Skip reason tracking for provider selection diagnostics.

use crate::models::ProviderId;

/// Why a provider was skipped during fetch.
#[derive(Clone, Debug)]
pub enum SkipReason {
    /// Provider doesn't support this symbol shape (Fx/Metal/Crypto/Other).
    SymbolKindMismatch,

    /// Symbol resolution failed.
    ResolutionFailed { message: String },
}

/// Record of a single provider attempt during a fetch.
#[derive(Clone, Debug)]
pub struct ProviderAttempt {
    pub provider_id: ProviderId,
    pub skipped: Option<SkipReason>,
    pub error: Option<String>,
    pub success: bool,
}

/// Detailed result of a fetch operation with skip diagnostics.
#[derive(Clone, Debug, Default)]
pub struct FetchDiagnostics {
    pub attempts: Vec<ProviderAttempt>,
}

impl FetchDiagnostics {
    pub fn new() -> Self {
        Self {
            attempts: Vec::new(),
        }
    }

    pub fn record_skip(&mut self, provider_id: ProviderId, reason: SkipReason) {
        self.attempts.push(ProviderAttempt {
            provider_id,
            skipped: Some(reason),
            error: None,
            success: false,
        });
    }

    pub fn record_error(&mut self, provider_id: ProviderId, error: String) {
        self.attempts.push(ProviderAttempt {
            provider_id,
            skipped: None,
            error: Some(error),
            success: false,
        });
    }

    pub fn record_success(&mut self, provider_id: ProviderId) {
        self.attempts.push(ProviderAttempt {
            provider_id,
            skipped: None,
            error: None,
            success: true,
        });
    }

    /// Summary for logging/debugging.
    pub fn summary(&self) -> String {
        self.attempts
            .iter()
            .map(|a| {
                if a.success {
                    format!("{}: SUCCESS", a.provider_id)
                } else if let Some(skip) = &a.skipped {
                    format!("{}: SKIPPED ({:?})", a.provider_id, skip)
                } else if let Some(err) = &a.error {
                    format!("{}: ERROR ({})", a.provider_id, err)
                } else {
                    format!("{}: UNKNOWN", a.provider_id)
                }
            })
            .collect::<Vec<_>>()
            .join(" -> ")
    }

    /// Check if any provider succeeded.
    pub fn has_success(&self) -> bool {
        self.attempts.iter().any(|a| a.success)
    }

    /// Providers that were actually called, in order.
    pub fn attempted(&self) -> Vec<&ProviderId> {
        self.attempts
            .iter()
            .filter(|a| a.skipped.is_none())
            .map(|a| &a.provider_id)
            .collect()
    }

    /// Get all errors.
    pub fn errors(&self) -> Vec<(&ProviderId, &str)> {
        self.attempts
            .iter()
            .filter_map(|a| a.error.as_ref().map(|e| (&a.provider_id, e.as_str())))
            .collect()
    }

    /// Message of the most recent provider failure.
    pub fn last_error(&self) -> Option<&str> {
        self.attempts.iter().rev().find_map(|a| a.error.as_deref())
    }
}
