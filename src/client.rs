//! Prediction API Client
//!
//! HTTP client for the external prediction service. One call per
//! operation: no retries, no caching, no timeout beyond reqwest's default.

use serde::Deserialize;
use thiserror::Error;

use crate::constants;
use crate::models::{RiskAssessment, ScenarioInput};

/// Prediction service configuration
#[derive(Debug, Clone)]
pub struct PredictionConfig {
    pub base_url: String,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            base_url: constants::DEFAULT_PREDICTION_API_URL.to_string(),
        }
    }
}

/// Prediction client errors
///
/// `Display` is the message shown to the user.
#[derive(Debug, Clone, Error)]
pub enum PredictionError {
    #[error("{0}")]
    Network(String),

    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Invalid response: {0}")]
    Parse(String),
}

impl PredictionError {
    /// HTTP status returned by the service, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Prediction API client
#[derive(Debug, Clone)]
pub struct PredictionClient {
    config: PredictionConfig,
    http_client: reqwest::Client,
}

impl PredictionClient {
    /// Create new client
    pub fn new(config: PredictionConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Create client for a base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::new(PredictionConfig { base_url: base_url.into() })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Submit a scenario and parse the assessment
    pub async fn predict(&self, scenario: &ScenarioInput) -> Result<RiskAssessment, PredictionError> {
        let url = self.url(constants::PREDICT_PATH);

        tracing::debug!("POST {}", url);

        let response = self.http_client
            .post(&url)
            .json(scenario)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Error calling prediction API: {}", e);
                PredictionError::Network(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            let error = http_error(status, &body);
            tracing::error!("Prediction failed ({}): {}", status, error);
            return Err(error);
        }

        response.json().await.map_err(|e| {
            tracing::error!("Error parsing prediction response: {}", e);
            PredictionError::Parse(e.to_string())
        })
    }

    /// Check service health. Any 2xx is healthy; failures are logged, not raised.
    pub async fn check_health(&self) -> bool {
        let url = self.url(constants::HEALTH_PATH);

        match self.http_client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::warn!("Prediction service health check failed: {}", e);
                false
            }
        }
    }

    /// Fetch model information as opaque JSON
    pub async fn model_info(&self) -> Result<serde_json::Value, PredictionError> {
        let url = self.url(constants::MODEL_INFO_PATH);

        let response = self.http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Error fetching model info: {}", e);
                PredictionError::Network(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            return Err(PredictionError::Http {
                status,
                message: status_message(status),
            });
        }

        response.json().await
            .map_err(|e| PredictionError::Parse(e.to_string()))
    }
}

/// Build the error for a non-2xx prediction response.
///
/// Prefers the server's `{"error": "..."}` message, else the status code.
fn http_error(status: u16, body: &str) -> PredictionError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| status_message(status));

    PredictionError::Http { status, message }
}

fn status_message(status: u16) -> String {
    format!("HTTP error! status: {}", status)
}
