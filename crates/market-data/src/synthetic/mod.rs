//! Synthetic quote generation.
//!
//! The last-resort price source. A synthetic price is a pure function of the
//! symbol and the current 60-second window:
//!
//! ```text
//! bucket    = floor(unix_seconds / 60)
//! variation = (fnv1a64(symbol + bucket) mod 200 - 100) / 10_000     // [-1%, +0.99%]
//! price     = round(base + base * variation, 5)
//! ```
//!
//! The hash is 64-bit FNV-1a over the UTF-8 bytes, so results are identical
//! across processes and platforms.

use chrono::{DateTime, Utc};

use crate::constants::SOURCE_SYNTHETIC;
use crate::models::{round_dp, Quote, Symbol};

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Length of one synthetic price window.
pub const BUCKET_SECONDS: i64 = 60;

/// Base price for symbols outside [`BASE_PRICES`].
pub const DEFAULT_BASE_PRICE: f64 = 1.0;

/// Reference prices the variation is applied to.
pub static BASE_PRICES: &[(&str, f64)] = &[
    ("EURUSD", 1.0950),
    ("GBPUSD", 1.2650),
    ("USDJPY", 149.50),
    ("USDCHF", 0.8750),
    ("AUDUSD", 0.6550),
    ("NZDUSD", 0.6150),
    ("USDCAD", 1.3550),
    ("EURGBP", 0.8650),
    ("EURJPY", 163.50),
    ("XAUUSD", 2045.50),
    ("BTCUSD", 43500.00),
    ("ETHUSD", 2650.00),
];

/// 64-bit FNV-1a hash.
pub fn fnv1a64(input: &str) -> u64 {
    input.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Base price for a canonical symbol.
pub fn base_price(symbol: &str) -> f64 {
    BASE_PRICES
        .iter()
        .find(|(code, _)| *code == symbol)
        .map(|(_, price)| *price)
        .unwrap_or(DEFAULT_BASE_PRICE)
}

/// Index of the 60-second window containing `at`.
pub fn time_bucket(at: DateTime<Utc>) -> i64 {
    at.timestamp().div_euclid(BUCKET_SECONDS)
}

/// Map a hash into `[-(span/2), span/2)` and scale by `divisor`.
fn centered(hash: u64, span: u64, divisor: f64) -> f64 {
    ((hash % span) as f64 - (span / 2) as f64) / divisor
}

/// Deterministic price for `symbol` in the window containing `at`.
pub fn synthetic_price(symbol: &Symbol, at: DateTime<Utc>) -> f64 {
    let base = base_price(symbol.as_str());
    let hash = fnv1a64(&format!("{}{}", symbol, time_bucket(at)));
    let variation = centered(hash, 200, 10_000.0);

    round_dp(base + base * variation, 5)
}

/// Deterministic pseudo-changes for a symbol. Independent of time.
pub fn synthetic_changes(symbol: &Symbol) -> (f64, f64) {
    let change_1d = centered(fnv1a64(symbol.as_str()), 200, 100.0);
    let change_5d = centered(fnv1a64(&format!("{}week", symbol)), 500, 100.0);

    (round_dp(change_1d, 2), round_dp(change_5d, 2))
}

/// Build the fallback quote for `symbol` at `at`.
///
/// `error` carries the reason real sources were abandoned, if known.
pub fn synthetic_quote(symbol: &Symbol, at: DateTime<Utc>, error: Option<String>) -> Quote {
    let (change_1d, change_5d) = synthetic_changes(symbol);
    let mut quote = Quote::new(symbol, synthetic_price(symbol, at), SOURCE_SYNTHETIC)
        .with_changes(change_1d, change_5d);
    quote.timestamp = at;
    quote.error = error;
    quote
}
