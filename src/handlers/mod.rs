//! HTTP handlers

pub mod health;
pub mod dashboard;
pub mod scenario;
pub mod simulation;
pub mod model;

use axum::{extract::rejection::JsonRejection, Json};

use crate::{AppError, AppResult};

/// Unwrap an optional JSON body.
///
/// A request without a JSON content type gets `T::default()`; any other
/// rejection (malformed JSON, wrong field types) is a validation error.
pub(crate) fn json_or_default<T: Default>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(rejection) => Err(AppError::ValidationError(rejection.body_text())),
    }
}
