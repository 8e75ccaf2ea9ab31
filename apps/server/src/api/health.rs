use std::sync::Arc;

use axum::{routing::get, Json, Router};
use chrono::Utc;

use crate::main_lib::AppState;
use crate::models::{HealthResponse, ServiceHealthResponse, SERVICE_NAME};

/// Liveness of the quote service. Makes no upstream calls.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

/// Liveness of the snapshot service. Makes no upstream calls.
async fn api_health() -> Json<ServiceHealthResponse> {
    Json(ServiceHealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        timestamp: Utc::now(),
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health))
        .route("/api/health", get(api_health))
}
