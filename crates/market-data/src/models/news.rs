use serde::{Deserialize, Serialize};

/// Expected market impact of a news entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Low,
    Medium,
    High,
}

/// A market news headline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    /// Wall-clock time formatted as `HH:MM`
    pub time: String,
    pub impact: Impact,
    /// 3-letter currency the headline relates to
    pub currency: String,
}
