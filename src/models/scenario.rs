//! Scenario model
//!
//! The flat parameter record describing one simulated plant/environment
//! state. Field names are the prediction service's JSON names.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Number of fields carried by a [`ScenarioInput`]
pub const SCENARIO_FIELD_COUNT: usize = 31;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInput {
    // Plant core & operation
    pub reactor_age_years: u32,
    pub reactor_type_code: String,
    pub reactor_nominal_power_mw: f64,
    pub load_factor_pct: f64,
    pub core_temp_c: f64,
    pub coolant_pressure_bar: f64,
    pub neutron_flux: f64,
    pub control_rod_position_pct: f64,
    pub coolant_flow_rate: f64,
    pub maintenance_score: f64,
    pub days_since_maintenance: u32,
    pub backup_generator_health: f64,

    // Environmental & external
    pub country: String,
    pub ambient_temp_c: f64,
    pub population_within_30km: u64,
    pub env_risk_index: f64,
    pub weather_severity_index: f64,
    pub seismic_activity_index: f64,
    pub co2_avoided_tons_per_hour: f64,

    // Safety & security
    #[serde(rename = "radiation_inside_uSv")]
    pub radiation_inside_usv: f64,
    #[serde(rename = "radiation_outside_uSv")]
    pub radiation_outside_usv: f64,
    pub sensor_anomaly_flag: bool,
    pub cyber_attack_score: f64,

    // Socio-economic & regulatory
    pub grid_demand_index: f64,
    pub market_price_eur_mwh: f64,
    pub staff_fatigue_index: f64,
    pub public_anxiety_index: f64,
    pub social_media_rumour_index: f64,
    pub regulator_scrutiny_score: f64,

    // Risk model scores
    pub avalon_raw_risk_score: f64,
    pub avalon_learned_reward_score: f64,
}

/// Manual form defaults
impl Default for ScenarioInput {
    fn default() -> Self {
        Self {
            reactor_age_years: 15,
            reactor_type_code: "PWR".to_string(),
            reactor_nominal_power_mw: 1000.0,
            load_factor_pct: 85.0,
            core_temp_c: 290.0,
            coolant_pressure_bar: 155.0,
            neutron_flux: 3.5,
            control_rod_position_pct: 45.0,
            coolant_flow_rate: 18000.0,
            maintenance_score: 7.5,
            days_since_maintenance: 45,
            backup_generator_health: 8.0,
            country: "France".to_string(),
            ambient_temp_c: 22.0,
            population_within_30km: 150_000,
            env_risk_index: 3.2,
            weather_severity_index: 2.5,
            seismic_activity_index: 1.2,
            co2_avoided_tons_per_hour: 800.0,
            radiation_inside_usv: 0.5,
            radiation_outside_usv: 0.1,
            sensor_anomaly_flag: false,
            cyber_attack_score: 1.5,
            grid_demand_index: 75.0,
            market_price_eur_mwh: 65.0,
            staff_fatigue_index: 3.5,
            public_anxiety_index: 2.8,
            social_media_rumour_index: 2.2,
            regulator_scrutiny_score: 5.5,
            avalon_raw_risk_score: 3.5,
            avalon_learned_reward_score: 6.2,
        }
    }
}

/// Errors raised while applying form edits
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Unknown scenario field: {0}")]
    UnknownField(String),

    #[error("Invalid scenario value: {0}")]
    InvalidValue(String),
}

/// A single field value as shown in the parameter readings
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Number(f64),
    Flag(bool),
    Text(String),
}

impl ScenarioInput {
    /// Build a scenario from the manual defaults plus a set of field edits
    pub fn from_edits(edits: &Map<String, Value>) -> Result<Self, ScenarioError> {
        let mut scenario = Self::default();
        scenario.apply_edits(edits)?;
        Ok(scenario)
    }

    /// Apply user edits on top of the current values.
    ///
    /// Edits are keyed by JSON field name. The record is left untouched if
    /// any edit names an unknown field or carries a value of the wrong type.
    pub fn apply_edits(&mut self, edits: &Map<String, Value>) -> Result<(), ScenarioError> {
        if edits.is_empty() {
            return Ok(());
        }

        let mut fields = self.to_fields()?;
        for (name, value) in edits {
            if !fields.contains_key(name) {
                return Err(ScenarioError::UnknownField(name.clone()));
            }
            fields.insert(name.clone(), value.clone());
        }

        *self = serde_json::from_value(Value::Object(fields))
            .map_err(|e| ScenarioError::InvalidValue(e.to_string()))?;
        Ok(())
    }

    /// Field name/value pairs in declaration order
    pub fn readings(&self) -> Vec<(String, ParamValue)> {
        let Ok(fields) = self.to_fields() else {
            return Vec::new();
        };

        fields
            .into_iter()
            .filter_map(|(name, value)| {
                let param = match value {
                    Value::Bool(b) => ParamValue::Flag(b),
                    Value::Number(n) => ParamValue::Number(n.as_f64()?),
                    Value::String(s) => ParamValue::Text(s),
                    _ => return None,
                };
                Some((name, param))
            })
            .collect()
    }

    fn to_fields(&self) -> Result<Map<String, Value>, ScenarioError> {
        match serde_json::to_value(self) {
            Ok(Value::Object(fields)) => Ok(fields),
            Ok(_) => Err(ScenarioError::InvalidValue("scenario is not an object".to_string())),
            Err(e) => Err(ScenarioError::InvalidValue(e.to_string())),
        }
    }
}
