//! Scenario builder handlers

use axum::{extract::Query, Json};
use serde::Deserialize;

use crate::generator::ScenarioGenerator;
use crate::models::{RiskTier, ScenarioInput};
use crate::{AppError, AppResult};

#[derive(Debug, Deserialize, Default)]
pub struct TierQuery {
    pub tier: Option<String>,
}

/// Resolve an optional tier name, defaulting to moderate
pub fn parse_tier(tier: Option<&str>) -> AppResult<RiskTier> {
    match tier {
        None => Ok(RiskTier::default()),
        Some(name) => name.parse().map_err(AppError::ValidationError),
    }
}

/// Manual form defaults
pub async fn default_scenario() -> Json<ScenarioInput> {
    Json(ScenarioInput::default())
}

/// Preview a generated scenario without submitting it
pub async fn random_scenario(Query(query): Query<TierQuery>) -> AppResult<Json<ScenarioInput>> {
    let tier = parse_tier(query.tier.as_deref())?;
    Ok(Json(ScenarioGenerator::from_entropy().generate(tier)))
}
