use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::MarketDataError;

/// Longest symbol accepted from a caller.
const MAX_SYMBOL_LEN: usize = 12;

/// Metal codes recognized as the base of a 6-letter pair.
const METAL_CODES: &[&str] = &["XAU", "XAG", "XPT", "XPD"];

/// Crypto codes recognized as the base of a 6-letter pair.
const CRYPTO_CODES: &[&str] = &["BTC", "ETH"];

/// Shape of a canonical symbol.
///
/// Providers declare which shapes they can serve; the registry skips a
/// provider whose capabilities do not cover the symbol's shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SymbolKind {
    /// 6-letter currency pair (EURUSD)
    Fx,
    /// 6-letter precious metal pair (XAUUSD)
    Metal,
    /// 6-letter crypto pair (BTCUSD)
    Crypto,
    /// Anything that is not a 6-letter pair
    Other,
}

/// Canonical, upper-case symbol.
///
/// Normalization is pure: the same input always yields the same symbol,
/// independent of case and of `/`, `-`, `_` or space separators.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Symbol {
    code: Arc<str>,
}

impl Symbol {
    /// Normalize a user-supplied symbol.
    ///
    /// Fails with [`MarketDataError::SymbolUnsupported`] when the symbol is
    /// empty, longer than 12 characters, or contains anything other than
    /// ASCII letters and digits once separators are removed.
    pub fn parse(raw: &str) -> Result<Self, MarketDataError> {
        let code: String = raw
            .trim()
            .chars()
            .filter(|c| !matches!(c, '/' | '-' | '_' | ' '))
            .map(|c| c.to_ascii_uppercase())
            .collect();

        if code.is_empty()
            || code.len() > MAX_SYMBOL_LEN
            || !code.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(MarketDataError::SymbolUnsupported(raw.to_string()));
        }

        Ok(Self {
            code: Arc::from(code),
        })
    }

    /// The canonical code, e.g. `EURUSD`.
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// Split a 6-letter symbol into its 3-letter base and quote codes.
    ///
    /// Returns `None` for any symbol that is not exactly 6 characters.
    pub fn pair(&self) -> Option<(&str, &str)> {
        if self.code.len() == 6 {
            Some(self.code.split_at(3))
        } else {
            None
        }
    }

    /// Classify the symbol's shape.
    pub fn kind(&self) -> SymbolKind {
        match self.pair() {
            Some((base, _)) if METAL_CODES.contains(&base) => SymbolKind::Metal,
            Some((base, _)) if CRYPTO_CODES.contains(&base) => SymbolKind::Crypto,
            Some(_) => SymbolKind::Fx,
            None => SymbolKind::Other,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive() {
        let lower = Symbol::parse("eurusd").unwrap();
        let upper = Symbol::parse("EURUSD").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.as_str(), "EURUSD");
    }

    #[test]
    fn test_separators_stripped() {
        assert_eq!(Symbol::parse("eur/usd").unwrap().as_str(), "EURUSD");
        assert_eq!(Symbol::parse(" BTC-USD ").unwrap().as_str(), "BTCUSD");
        assert_eq!(Symbol::parse("gbp_jpy").unwrap().as_str(), "GBPJPY");
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(Symbol::parse("").is_err());
        assert!(Symbol::parse("   ").is_err());
        assert!(Symbol::parse("EUR$USD").is_err());
        assert!(Symbol::parse("ABCDEFGHIJKLM").is_err());
    }

    #[test]
    fn test_pair_split() {
        let symbol = Symbol::parse("USDJPY").unwrap();
        assert_eq!(symbol.pair(), Some(("USD", "JPY")));

        let symbol = Symbol::parse("US30").unwrap();
        assert_eq!(symbol.pair(), None);
    }

    #[test]
    fn test_kind() {
        assert_eq!(Symbol::parse("EURUSD").unwrap().kind(), SymbolKind::Fx);
        assert_eq!(Symbol::parse("XAUUSD").unwrap().kind(), SymbolKind::Metal);
        assert_eq!(Symbol::parse("XAGUSD").unwrap().kind(), SymbolKind::Metal);
        assert_eq!(Symbol::parse("BTCUSD").unwrap().kind(), SymbolKind::Crypto);
        assert_eq!(Symbol::parse("SPX").unwrap().kind(), SymbolKind::Other);
    }
}
