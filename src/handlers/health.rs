//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    timestamp: i64,
}

#[derive(Serialize)]
pub struct BackendHealthResponse {
    healthy: bool,
    url: String,
}

pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().timestamp(),
    })
}

/// Reachability of the prediction service
pub async fn backend(State(state): State<AppState>) -> Json<BackendHealthResponse> {
    Json(BackendHealthResponse {
        healthy: state.client.check_health().await,
        url: state.client.base_url().to_string(),
    })
}
