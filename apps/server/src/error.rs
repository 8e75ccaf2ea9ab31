use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use fxquote_market_data::MarketDataError;
use thiserror::Error;

use crate::models::ErrorEnvelope;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{message}")]
    InvalidSymbol { symbol: String, message: String },
    #[error("{message}")]
    BadRequest { message: String },
    #[error("{message}")]
    Internal {
        symbol: Option<String>,
        message: String,
    },
}

impl ApiError {
    pub fn invalid_symbol(symbol: &str, err: MarketDataError) -> Self {
        ApiError::InvalidSymbol {
            symbol: symbol.to_string(),
            message: err.to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            message: message.into(),
        }
    }

    pub fn internal(symbol: Option<&str>, err: impl std::fmt::Display) -> Self {
        ApiError::Internal {
            symbol: symbol.map(str::to_string),
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, symbol) = match &self {
            ApiError::InvalidSymbol { symbol, .. } => {
                (StatusCode::BAD_REQUEST, Some(symbol.clone()))
            }
            ApiError::BadRequest { .. } => (StatusCode::BAD_REQUEST, None),
            ApiError::Internal { symbol, .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, symbol.clone())
            }
        };
        tracing::warn!(
            "{} for symbol {}: {}",
            status.as_u16(),
            symbol.as_deref().unwrap_or("-"),
            self
        );
        let body = Json(ErrorEnvelope {
            success: false,
            error: self.to_string(),
            symbol,
            timestamp: Utc::now(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
