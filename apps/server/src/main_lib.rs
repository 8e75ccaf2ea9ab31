use std::sync::Arc;

use anyhow::Context;
use fxquote_market_data::MarketDataClient;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub client: MarketDataClient,
}

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Build the shared HTTP client and the provider chain.
pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let http = config
        .upstream
        .build_http_client()
        .context("Failed to build HTTP client")?;
    let client = MarketDataClient::from_config(http, &config.upstream);

    Ok(Arc::new(AppState { client }))
}
