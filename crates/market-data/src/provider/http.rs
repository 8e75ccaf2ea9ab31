//! Request helpers shared by the adapters.
//!
//! Every helper turns transport errors, non-2xx statuses and undecodable
//! bodies into `MarketDataError` tagged with the calling provider.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::constants::BROWSER_USER_AGENT;
use crate::errors::MarketDataError;

/// Headers for HTML pages served to browsers only.
pub fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    headers
}

async fn send(provider: &str, request: RequestBuilder) -> Result<reqwest::Response, MarketDataError> {
    let response = request
        .send()
        .await
        .map_err(|e| MarketDataError::from_reqwest(provider, e))?;

    if !response.status().is_success() {
        return Err(MarketDataError::UpstreamStatus {
            provider: provider.to_string(),
            status: response.status().as_u16(),
        });
    }

    Ok(response)
}

/// GET `url` and decode the JSON body.
pub async fn get_json<T: DeserializeOwned>(
    client: &Client,
    provider: &str,
    url: &str,
) -> Result<T, MarketDataError> {
    let response = send(provider, client.get(url)).await?;
    let body = response
        .text()
        .await
        .map_err(|e| MarketDataError::from_reqwest(provider, e))?;

    serde_json::from_str(&body).map_err(|e| MarketDataError::MalformedResponse {
        provider: provider.to_string(),
        message: e.to_string(),
    })
}

/// GET `url` with `headers` and return the body as text.
pub async fn get_text(
    client: &Client,
    provider: &str,
    url: &str,
    headers: HeaderMap,
) -> Result<String, MarketDataError> {
    let response = send(provider, client.get(url).headers(headers)).await?;
    response
        .text()
        .await
        .map_err(|e| MarketDataError::from_reqwest(provider, e))
}
