/// Coarse classification of a failed quote attempt.
///
/// Every variant drives the same orchestrator action (advance to the next
/// provider); the classification exists for diagnostics and log summaries.
///
/// | Kind | Typical cause |
/// |------|---------------|
/// | `Network` | timeout, connection refused, DNS failure |
/// | `MalformedResponse` | non-2xx status, undecodable body, missing field, bad price |
/// | `SymbolUnsupported` | normalizer or resolver cannot map the symbol |
/// | `AllSourcesExhausted` | every adapter failed (recovered by synthetic generation) |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FailureKind {
    /// Timeout or connection failure.
    Network,

    /// Unexpected status, JSON or HTML shape.
    MalformedResponse,

    /// The symbol cannot be mapped for this provider.
    SymbolUnsupported,

    /// The whole chain failed.
    AllSourcesExhausted,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Network => "network",
            Self::MalformedResponse => "malformed_response",
            Self::SymbolUnsupported => "symbol_unsupported",
            Self::AllSourcesExhausted => "all_sources_exhausted",
        };
        f.write_str(label)
    }
}
