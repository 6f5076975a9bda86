//! Simulation handlers
//!
//! Both producers end in the same submission path: the session stores the
//! scenario, calls the prediction service and records the outcome.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use serde_json::{Map, Value};

use super::json_or_default;
use super::scenario::parse_tier;
use crate::generator::ScenarioGenerator;
use crate::models::ScenarioInput;
use crate::view::{self, DashboardView};
use crate::{AppResult, AppState};

#[derive(Debug, Deserialize, Default)]
pub struct RandomSimulationRequest {
    pub tier: Option<String>,
}

/// Submit the manual form: field edits applied over the defaults
pub async fn manual(
    State(state): State<AppState>,
    edits: Result<Json<Map<String, Value>>, JsonRejection>,
) -> AppResult<Json<DashboardView>> {
    let edits = json_or_default(edits)?;
    let scenario = ScenarioInput::from_edits(&edits)?;

    tracing::debug!("Manual scenario with {} edited fields", edits.len());

    run(state, scenario).await
}

/// Generate a scenario for the requested tier and submit it
pub async fn random(
    State(state): State<AppState>,
    req: Result<Json<RandomSimulationRequest>, JsonRejection>,
) -> AppResult<Json<DashboardView>> {
    let req = json_or_default(req)?;
    let tier = parse_tier(req.tier.as_deref())?;
    let scenario = ScenarioGenerator::from_entropy().generate(tier);

    tracing::debug!("Random scenario for tier {}", tier);

    run(state, scenario).await
}

async fn run(state: AppState, scenario: ScenarioInput) -> AppResult<Json<DashboardView>> {
    state.session.submit(&state.client, scenario).await?;
    Ok(Json(view::dashboard(&state.session.snapshot())))
}
