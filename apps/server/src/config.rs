use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use fxquote_market_data::UpstreamConfig;

pub const DEFAULT_PORT: u16 = 8001;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    /// `text` or `json`
    pub log_format: String,
    pub upstream: UpstreamConfig,
}

impl Config {
    /// Load `.env`, then read the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = lookup("FXQ_LISTEN_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = match lookup("FXQ_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid FXQ_PORT: {}", raw))?,
            None => DEFAULT_PORT,
        };
        let listen_addr: SocketAddr = format!("{}:{}", host, port)
            .parse()
            .with_context(|| format!("Invalid FXQ_LISTEN_HOST: {}", host))?;

        let cors_allow = lookup("FXQ_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let timeout_secs: u64 = match lookup("FXQ_REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid FXQ_REQUEST_TIMEOUT_SECS: {}", raw))?,
            None => 10,
        };
        if timeout_secs == 0 {
            anyhow::bail!("Invalid FXQ_REQUEST_TIMEOUT_SECS: must be at least 1");
        }
        let request_timeout = Duration::from_secs(timeout_secs);

        let log_format = lookup("FXQ_LOG_FORMAT").unwrap_or_else(|| "text".into());

        let defaults = UpstreamConfig::default();
        let upstream = UpstreamConfig {
            yahoo_url: lookup("FXQ_YAHOO_URL").unwrap_or(defaults.yahoo_url),
            currency_api_url: lookup("FXQ_CURRENCY_API_URL").unwrap_or(defaults.currency_api_url),
            exchange_rate_api_url: lookup("FXQ_EXCHANGE_RATE_API_URL")
                .unwrap_or(defaults.exchange_rate_api_url),
            metals_url: lookup("FXQ_METALS_URL").unwrap_or(defaults.metals_url),
            investing_url: lookup("FXQ_INVESTING_URL").unwrap_or(defaults.investing_url),
            forex_factory_url: lookup("FXQ_FOREX_FACTORY_URL")
                .unwrap_or(defaults.forex_factory_url),
            request_timeout,
        };

        Ok(Self {
            listen_addr,
            cors_allow,
            log_format,
            upstream,
        })
    }

    /// Override the listening port (startup argument).
    pub fn with_port(mut self, port: u16) -> Self {
        self.listen_addr.set_port(port);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.listen_addr.to_string(), "0.0.0.0:8001");
        assert_eq!(config.cors_allow, vec!["*".to_string()]);
        assert_eq!(config.upstream.request_timeout, Duration::from_secs(10));
        assert_eq!(config.log_format, "text");
        assert_eq!(config.upstream.yahoo_url, "https://query1.finance.yahoo.com");
    }

    #[test]
    fn overrides() {
        let config = config(&[
            ("FXQ_LISTEN_HOST", "127.0.0.1"),
            ("FXQ_PORT", "5001"),
            ("FXQ_REQUEST_TIMEOUT_SECS", "3"),
            ("FXQ_CORS_ALLOW_ORIGINS", "http://a.test, http://b.test"),
            ("FXQ_METALS_URL", "http://metals.test"),
        ])
        .unwrap();
        assert_eq!(config.listen_addr.to_string(), "127.0.0.1:5001");
        assert_eq!(config.cors_allow.len(), 2);
        assert_eq!(config.upstream.request_timeout, Duration::from_secs(3));
        assert_eq!(config.upstream.metals_url, "http://metals.test");
    }

    #[test]
    fn invalid_port_is_fatal() {
        assert!(config(&[("FXQ_PORT", "eighty")]).is_err());
        assert!(config(&[("FXQ_PORT", "70000")]).is_err());
    }

    #[test]
    fn invalid_timeout_is_fatal() {
        assert!(config(&[("FXQ_REQUEST_TIMEOUT_SECS", "0")]).is_err());
        assert!(config(&[("FXQ_REQUEST_TIMEOUT_SECS", "soon")]).is_err());
        assert!(config(&[("FXQ_REQUEST_TIMEOUT_SECS", "1")]).is_ok());
    }

    #[test]
    fn invalid_host_is_fatal() {
        assert!(config(&[("FXQ_LISTEN_HOST", "not a host")]).is_err());
    }

    #[test]
    fn port_argument_wins() {
        let config = config(&[("FXQ_PORT", "5001")]).unwrap().with_port(9000);
        assert_eq!(config.listen_addr.port(), 9000);
    }
}
