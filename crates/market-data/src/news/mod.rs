//! News track.
//!
//! Headlines are scraped from the ForexFactory home page on a best-effort
//! basis. When the page cannot be fetched, or yields no usable titles, a
//! fixed list of three canned items is used instead, so the track always
//! produces a non-empty list.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;
use reqwest::Client;

use crate::errors::MarketDataError;
use crate::models::{Impact, NewsItem};
use crate::provider::http::{self, browser_headers};

/// Provider ID constant
const PROVIDER_ID: &str = "FOREX_FACTORY";

/// Most headlines returned from one scrape.
pub const MAX_NEWS_ITEMS: usize = 5;

/// Titles this short or shorter are page furniture, not headlines.
const MIN_TITLE_LEN: usize = 5;

lazy_static! {
    /// Headline patterns, tried in order. The last capture group is the title.
    static ref NEWS_PATTERNS: Vec<Regex> = vec![
        // Linked story inside a news block
        Regex::new(r#"(?is)<div[^>]*class="[^"]*news[^"]*"[^>]*>.*?<a[^>]*href="([^"]*)"[^>]*>([^<]+)</a>"#)
            .expect("Invalid regex pattern"),
        // Calendar row event cell
        Regex::new(r#"(?is)<tr[^>]*class="[^"]*calendar_row[^"]*"[^>]*>.*?<td[^>]*class="[^"]*event[^"]*"[^>]*>([^<]+)</td>"#)
            .expect("Invalid regex pattern"),
        Regex::new(r#"(?is)<span[^>]*class="[^"]*event-title[^"]*"[^>]*>([^<]+)</span>"#)
            .expect("Invalid regex pattern"),
    ];
}

/// A source of market headlines.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Unique identifier for this source.
    fn id(&self) -> &'static str;

    /// Fetch the current headlines. An empty list is a valid answer.
    async fn fetch_news(&self) -> Result<Vec<NewsItem>, MarketDataError>;
}

fn format_time(at: DateTime<Utc>) -> String {
    at.format("%H:%M").to_string()
}

/// Extract up to [`MAX_NEWS_ITEMS`] headlines from a page.
///
/// Scraped items carry the scrape time, medium impact and USD.
pub fn parse_news(html: &str, now: DateTime<Utc>) -> Vec<NewsItem> {
    let time = format_time(now);

    NEWS_PATTERNS
        .iter()
        .flat_map(|pattern| pattern.captures_iter(html))
        .filter_map(|caps| {
            caps.iter()
                .skip(1)
                .flatten()
                .last()
                .map(|m| m.as_str().trim().to_string())
        })
        .filter(|title| title.chars().count() > MIN_TITLE_LEN)
        .take(MAX_NEWS_ITEMS)
        .map(|title| NewsItem {
            title,
            time: time.clone(),
            impact: Impact::Medium,
            currency: "USD".to_string(),
        })
        .collect()
}

/// The canned headlines used when scraping yields nothing.
pub fn fallback_news(now: DateTime<Utc>) -> Vec<NewsItem> {
    vec![
        NewsItem {
            title: "Market sentiment remains cautious amid economic data releases".to_string(),
            time: format_time(now),
            impact: Impact::Medium,
            currency: "USD".to_string(),
        },
        NewsItem {
            title: "Central bank policy decisions affecting currency markets".to_string(),
            time: format_time(now - Duration::minutes(30)),
            impact: Impact::High,
            currency: "EUR".to_string(),
        },
        NewsItem {
            title: "Technical analysis shows key support levels holding".to_string(),
            time: format_time(now - Duration::minutes(60)),
            impact: Impact::Low,
            currency: "GBP".to_string(),
        },
    ]
}

/// Resolve the news list: scraped headlines, else the canned list.
pub async fn resolve_news(source: &dyn NewsSource, now: DateTime<Utc>) -> Vec<NewsItem> {
    match source.fetch_news().await {
        Ok(items) if !items.is_empty() => items,
        Ok(_) => {
            debug!("No headlines from '{}', using fallback news", source.id());
            fallback_news(now)
        }
        Err(e) => {
            warn!("News source '{}' failed ({}): {}", source.id(), e.kind(), e);
            fallback_news(now)
        }
    }
}

/// ForexFactory home page scraper.
pub struct ForexFactoryNews {
    client: Client,
    base_url: String,
}

impl ForexFactoryNews {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl NewsSource for ForexFactoryNews {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_news(&self) -> Result<Vec<NewsItem>, MarketDataError> {
        let url = format!("{}/", self.base_url);
        let html = http::get_text(&self.client, PROVIDER_ID, &url, browser_headers()).await?;
        Ok(parse_news(&html, Utc::now()))
    }
}
