//! Error handling

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;

use crate::client::PredictionError;
use crate::models::ScenarioError;
use crate::session::SubmitError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    // Request errors
    ValidationError(String),

    // Submission gate
    Busy,

    // External service errors
    PredictionFailed(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            AppError::Busy => (StatusCode::CONFLICT, "A simulation is already running"),
            AppError::PredictionFailed(msg) => {
                tracing::warn!("Prediction service error: {}", msg);
                (StatusCode::BAD_GATEWAY, msg.as_str())
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<ScenarioError> for AppError {
    fn from(err: ScenarioError) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<PredictionError> for AppError {
    fn from(err: PredictionError) -> Self {
        AppError::PredictionFailed(err.to_string())
    }
}

impl From<SubmitError> for AppError {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::Busy => AppError::Busy,
            SubmitError::Prediction(e) => e.into(),
        }
    }
}
