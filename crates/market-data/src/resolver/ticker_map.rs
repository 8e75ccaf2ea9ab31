//! Static ticker table for the time-series provider.
//!
//! Maps canonical symbols to Yahoo Finance tickers. Currency pairs use the
//! `=X` suffix, metals map to front-month futures, crypto to dash pairs.
//! Symbols absent from the table fall back to `<SYMBOL>=X`.

/// Default suffix appended to unknown symbols.
pub const YAHOO_FX_SUFFIX: &str = "=X";

/// Canonical symbol -> Yahoo ticker.
pub static YAHOO_TICKERS: &[(&str, &str)] = &[
    ("EURUSD", "EURUSD=X"),
    ("GBPUSD", "GBPUSD=X"),
    ("USDJPY", "USDJPY=X"),
    ("USDCHF", "USDCHF=X"),
    ("AUDUSD", "AUDUSD=X"),
    ("NZDUSD", "NZDUSD=X"),
    ("USDCAD", "USDCAD=X"),
    ("EURGBP", "EURGBP=X"),
    ("EURJPY", "EURJPY=X"),
    // Gold and silver futures
    ("XAUUSD", "GC=F"),
    ("XAGUSD", "SI=F"),
    ("BTCUSD", "BTC-USD"),
    ("ETHUSD", "ETH-USD"),
];

/// Look up the Yahoo ticker for a canonical symbol.
pub fn yahoo_ticker(symbol: &str) -> Option<&'static str> {
    YAHOO_TICKERS
        .iter()
        .find(|(canonical, _)| *canonical == symbol)
        .map(|(_, ticker)| *ticker)
}

/// Spot list name for the metals provider.
pub fn metal_spot_name(symbol: &str) -> Option<&'static str> {
    match symbol {
        "XAUUSD" => Some("gold"),
        "XAGUSD" => Some("silver"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_majors_metals_and_crypto() {
        assert_eq!(yahoo_ticker("EURUSD"), Some("EURUSD=X"));
        assert_eq!(yahoo_ticker("EURJPY"), Some("EURJPY=X"));
        assert_eq!(yahoo_ticker("XAUUSD"), Some("GC=F"));
        assert_eq!(yahoo_ticker("XAGUSD"), Some("SI=F"));
        assert_eq!(yahoo_ticker("BTCUSD"), Some("BTC-USD"));
        assert_eq!(yahoo_ticker("ETHUSD"), Some("ETH-USD"));
        assert_eq!(yahoo_ticker("USDSEK"), None);
    }

    #[test]
    fn test_metal_spot_name() {
        assert_eq!(metal_spot_name("XAUUSD"), Some("gold"));
        assert_eq!(metal_spot_name("XAGUSD"), Some("silver"));
        assert_eq!(metal_spot_name("XAUEUR"), None);
    }
}
