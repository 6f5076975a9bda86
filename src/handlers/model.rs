//! Model info handler

use axum::{extract::State, Json};

use crate::{AppResult, AppState};

/// Pass the prediction service's model info through unchanged
pub async fn info(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    let info = state.client.model_info().await?;
    Ok(Json(info))
}
