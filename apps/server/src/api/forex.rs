use std::sync::Arc;

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::get,
    Json, Router,
};
use fxquote_market_data::Symbol;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;
use crate::models::DEFAULT_SYMBOL;

fn parse_symbol(raw: &str) -> ApiResult<Symbol> {
    Symbol::parse(raw).map_err(|e| ApiError::invalid_symbol(raw, e))
}

/// First `symbol` value of the query string; later repeats are ignored.
fn first_symbol(params: &[(String, String)]) -> Option<&str> {
    params
        .iter()
        .find(|(key, _)| key == "symbol")
        .map(|(_, value)| value.as_str())
}

/// Current quote for `?symbol=` (default EURUSD). Never fails for a
/// well-formed symbol: exhausted upstreams yield a synthetic quote.
async fn get_forex(
    State(state): State<Arc<AppState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ApiResult<Json<Value>> {
    let Query(params) = query.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let raw = first_symbol(&params).unwrap_or(DEFAULT_SYMBOL);
    let symbol = parse_symbol(raw)?;

    let quote = state.client.get_quote(&symbol).await;
    let body =
        serde_json::to_value(&quote).map_err(|e| ApiError::internal(Some(symbol.as_str()), e))?;
    Ok(Json(body))
}

/// Price and headlines for a symbol, resolved concurrently.
async fn get_forex_data(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Value>> {
    let Path(raw) = path.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let symbol = parse_symbol(&raw)?;

    let snapshot = state.client.get_snapshot(&symbol).await;
    let body = serde_json::to_value(&snapshot)
        .map_err(|e| ApiError::internal(Some(symbol.as_str()), e))?;
    Ok(Json(body))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/forex", get(get_forex))
        .route("/api/forex-data/{symbol}", get(get_forex_data))
}
