//! Risk assessment model
//!
//! The record returned by the prediction service for one scenario.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub incident_occurred: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incident_probability: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// 0-3, not validated
    pub true_risk_level: i64,
    pub avalon_evac_recommendation: bool,
    pub avalon_shutdown_recommendation: bool,
    pub human_override: bool,
    pub top_contributors: Vec<Contributor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incident_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_metadata: Option<ModelMetadata>,
}

/// One entry of the ordered contributor list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contributor {
    pub feature: String,
    /// Normalized impact, nominally 0.0-1.0
    pub impact: f64,
    pub value: ContributorValue,
}

/// Raw feature value echoed back by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContributorValue {
    Number(f64),
    Flag(bool),
    Text(String),
}

/// Model provenance reported alongside a prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub model_type: String,
    pub model_source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_url: Option<String>,
    #[serde(default)]
    pub n_features: Option<u32>,
    pub using_scaler: bool,
    pub using_feature_names: bool,
    #[serde(default)]
    pub is_real_model: bool,
}

impl ModelMetadata {
    /// Whether the model ran with its scaler and the trained feature order
    pub fn is_fully_configured(&self) -> bool {
        self.using_scaler && self.using_feature_names
    }
}
