use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Symbol served when `/forex` is called without one.
pub const DEFAULT_SYMBOL: &str = "EURUSD";

pub const SERVICE_NAME: &str = "forex-data-scraper";

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceHealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: DateTime<Utc>,
}

/// Body of every 4xx/5xx answer.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    pub timestamp: DateTime<Utc>,
}
