//! Presentation layer
//!
//! Pure functions from the session snapshot to a view model. Thresholds used
//! here are display hints only; the service's verdict is never re-derived.

pub mod html;

use serde::Serialize;
use uuid::Uuid;

use crate::constants;
use crate::models::{
    ContributorValue, ModelMetadata, Notice, ParamValue, RiskAssessment, ScenarioInput,
};
use crate::session::SessionSnapshot;

const RISK_LABELS: [&str; 4] = ["LOW", "MODERATE", "HIGH", "CRITICAL"];
const RISK_COLORS: [&str; 4] = ["success", "primary", "warning", "destructive"];

fn level_index(level: i64) -> Option<usize> {
    usize::try_from(level).ok().filter(|i| *i < RISK_LABELS.len())
}

/// "LOW" .. "CRITICAL", or "UNKNOWN" outside 0-3
pub fn risk_label(level: i64) -> &'static str {
    level_index(level).map(|i| RISK_LABELS[i]).unwrap_or("UNKNOWN")
}

pub fn risk_color(level: i64) -> &'static str {
    level_index(level).map(|i| RISK_COLORS[i]).unwrap_or("muted")
}

/// Progress bar fill, `(level + 1) * 25` clamped to 0-100
pub fn risk_progress(level: i64) -> u8 {
    level.saturating_add(1).saturating_mul(25).clamp(0, 100) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlantStatus {
    Simulating,
    AwaitingInput,
    IncidentDetected,
    Nominal,
}

impl PlantStatus {
    pub fn label(self) -> &'static str {
        match self {
            PlantStatus::Simulating => "SIMULATING",
            PlantStatus::AwaitingInput => "AWAITING INPUT",
            PlantStatus::IncidentDetected => "INCIDENT DETECTED",
            PlantStatus::Nominal => "NOMINAL OPERATION",
        }
    }
}

pub fn plant_status(assessment: Option<&RiskAssessment>, busy: bool) -> PlantStatus {
    match assessment {
        _ if busy => PlantStatus::Simulating,
        None => PlantStatus::AwaitingInput,
        Some(a) if a.incident_occurred => PlantStatus::IncidentDetected,
        Some(_) => PlantStatus::Nominal,
    }
}

/// Success notice text describing how the model ran
pub fn provenance_note(metadata: Option<&ModelMetadata>) -> String {
    let model = metadata.map(|m| m.model_type.as_str()).unwrap_or("prediction");
    let suffix = if metadata.is_some_and(ModelMetadata::is_fully_configured) {
        "with scaler & correct feature order"
    } else {
        "WARNING: missing scaler or feature names"
    };
    format!("Analysis from trained {} model ({})", model, suffix)
}

/// Two decimals, ties rounded away from zero
pub fn format_number(value: f64) -> String {
    format!("{:.2}", (value * 100.0).round() / 100.0)
}

/// Whole percent of a normalized impact, ties rounded away from zero
pub fn format_percent(impact: f64) -> String {
    format!("{}%", (impact * 100.0).round() as i64)
}

pub fn format_param(value: &ParamValue) -> String {
    match value {
        ParamValue::Number(n) => format_number(*n),
        ParamValue::Flag(true) => "Yes".to_string(),
        ParamValue::Flag(false) => "No".to_string(),
        ParamValue::Text(s) => s.clone(),
    }
}

fn format_contributor_value(value: &ContributorValue) -> String {
    match value {
        ContributorValue::Number(n) => format_number(*n),
        ContributorValue::Flag(b) => b.to_string(),
        ContributorValue::Text(s) => s.clone(),
    }
}

/// Whether a parameter reading gets the high-risk display style
pub fn is_high_risk(name: &str, value: &ParamValue) -> bool {
    let ParamValue::Number(v) = value else {
        return false;
    };
    match name {
        "core_temp_c" => *v > constants::HIGH_CORE_TEMP_C,
        "coolant_pressure_bar" => *v > constants::HIGH_COOLANT_PRESSURE_BAR,
        "cyber_attack_score" => *v > constants::HIGH_CYBER_ATTACK_SCORE,
        "seismic_activity_index" => *v > constants::HIGH_SEISMIC_ACTIVITY,
        _ => false,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskBadge {
    pub level: i64,
    pub label: &'static str,
    pub color: &'static str,
    pub progress: u8,
}

impl RiskBadge {
    pub fn new(level: i64) -> Self {
        Self {
            level,
            label: risk_label(level),
            color: risk_color(level),
            progress: risk_progress(level),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IncidentBadge {
    pub label: String,
    pub radiation: bool,
    pub overheat: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Readout {
    pub label: &'static str,
    pub text: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuickStat {
    pub label: &'static str,
    pub text: &'static str,
    pub highlight: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContributorView {
    pub feature: String,
    pub percent: String,
    pub bar: f64,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReadingView {
    pub name: String,
    pub value: String,
    pub high_risk: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictionView {
    pub risk: RiskBadge,
    pub human_override: bool,
    pub incident: Option<IncidentBadge>,
    pub readouts: Vec<Readout>,
    pub shutdown: QuickStat,
    pub evacuation: QuickStat,
    pub contributors: Vec<ContributorView>,
    pub readings: Vec<ReadingView>,
    pub provenance: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub title: &'static str,
    pub busy: bool,
    pub status: PlantStatus,
    pub status_label: &'static str,
    pub run_id: Option<Uuid>,
    pub notice: Option<Notice>,
    pub prediction: Option<PredictionView>,
}

impl PredictionView {
    pub fn new(assessment: &RiskAssessment, scenario: &ScenarioInput) -> Self {
        let incident = match (&assessment.incident_type, assessment.incident_occurred) {
            (Some(label), true) => Some(IncidentBadge {
                radiation: label.contains("Radiation"),
                overheat: label.contains("Overheat"),
                label: label.clone(),
            }),
            _ => None,
        };

        let readouts = vec![
            Readout {
                label: "TEMP",
                text: format!("{}°C", scenario.core_temp_c),
                color: if scenario.core_temp_c > constants::HIGH_CORE_TEMP_C { "destructive" } else { "success" },
            },
            Readout {
                label: "PRESS",
                text: format!("{} bar", scenario.coolant_pressure_bar),
                color: if scenario.coolant_pressure_bar > constants::HIGH_COOLANT_PRESSURE_BAR { "warning" } else { "success" },
            },
        ];

        let shutdown = QuickStat {
            label: "Shutdown Rec.",
            text: if assessment.avalon_shutdown_recommendation { "RECOMMENDED" } else { "Not Required" },
            highlight: assessment.avalon_shutdown_recommendation.then_some("warning"),
        };
        let evacuation = QuickStat {
            label: "Evacuation",
            text: if assessment.avalon_evac_recommendation { "REQUIRED" } else { "Not Required" },
            highlight: assessment.avalon_evac_recommendation.then_some("destructive"),
        };

        let contributors = assessment
            .top_contributors
            .iter()
            .map(|c| ContributorView {
                feature: c.feature.clone(),
                percent: format_percent(c.impact),
                bar: (c.impact * 100.0).clamp(0.0, 100.0),
                value: format_contributor_value(&c.value),
            })
            .collect();

        let readings = scenario
            .readings()
            .into_iter()
            .map(|(name, value)| ReadingView {
                high_risk: is_high_risk(&name, &value),
                value: format_param(&value),
                name,
            })
            .collect();

        Self {
            risk: RiskBadge::new(assessment.true_risk_level),
            human_override: assessment.human_override,
            incident,
            readouts,
            shutdown,
            evacuation,
            contributors,
            readings,
            provenance: provenance_note(assessment.model_metadata.as_ref()),
        }
    }
}

/// Build the full dashboard view for a session snapshot
pub fn dashboard(snapshot: &SessionSnapshot) -> DashboardView {
    let status = plant_status(snapshot.assessment.as_ref(), snapshot.busy);

    let prediction = match (&snapshot.assessment, &snapshot.scenario) {
        (Some(assessment), Some(scenario)) if !snapshot.busy => {
            Some(PredictionView::new(assessment, scenario))
        }
        _ => None,
    };

    DashboardView {
        title: constants::APP_NAME,
        busy: snapshot.busy,
        status,
        status_label: status.label(),
        run_id: snapshot.run_id,
        notice: snapshot.notice.clone(),
        prediction,
    }
}
