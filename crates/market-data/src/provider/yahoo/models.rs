//! Yahoo Finance chart API response models.
//!
//! Only the close series is read; every other field of the chart payload is
//! ignored.

use serde::Deserialize;

/// Main response wrapper for the v8 chart API
#[derive(Debug, Deserialize)]
pub struct YahooChartResponse {
    pub chart: YahooChart,
}

/// Chart container. `result` is null when Yahoo reports an error.
#[derive(Debug, Deserialize)]
pub struct YahooChart {
    #[serde(default)]
    pub result: Option<Vec<YahooChartResult>>,
}

/// Individual series from the chart API
#[derive(Debug, Deserialize)]
pub struct YahooChartResult {
    pub indicators: YahooIndicators,
}

#[derive(Debug, Deserialize)]
pub struct YahooIndicators {
    #[serde(default)]
    pub quote: Vec<YahooQuoteIndicator>,
}

/// OHLCV arrays; bars without a print carry `null`.
#[derive(Debug, Deserialize)]
pub struct YahooQuoteIndicator {
    #[serde(default)]
    pub close: Vec<Option<f64>>,
}

impl YahooChartResponse {
    /// Non-null closes of the first series, oldest first.
    pub fn closes(&self) -> Vec<f64> {
        self.chart
            .result
            .as_ref()
            .and_then(|results| results.first())
            .and_then(|result| result.indicators.quote.first())
            .map(|quote| quote.close.iter().flatten().copied().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closes_skip_nulls() {
        let json = r#"{
            "chart": {
                "result": [{
                    "meta": {"currency": "USD", "symbol": "EURUSD=X"},
                    "timestamp": [1, 2, 3],
                    "indicators": {"quote": [{"close": [1.081, null, 1.0842]}]}
                }],
                "error": null
            }
        }"#;
        let response: YahooChartResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.closes(), vec![1.081, 1.0842]);
    }

    #[test]
    fn test_error_payload_has_no_closes() {
        let json = r#"{
            "chart": {
                "result": null,
                "error": {"code": "Not Found", "description": "No data found, symbol may be delisted"}
            }
        }"#;
        let response: YahooChartResponse = serde_json::from_str(json).unwrap();
        assert!(response.closes().is_empty());
    }

    #[test]
    fn test_empty_indicator_arrays() {
        let json = r#"{"chart": {"result": [{"indicators": {"quote": [{}]}}]}}"#;
        let response: YahooChartResponse = serde_json::from_str(json).unwrap();
        assert!(response.closes().is_empty());
    }
}
