//! Random Scenario Generator
//!
//! Produces pseudo-random scenarios biased by a [`RiskTier`]. The tier's
//! multipliers scale core temperature, coolant pressure and the external
//! risk indices; every other field is drawn from a fixed range.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::models::{RiskTier, ScenarioInput};

const REACTOR_TYPES: [&str; 3] = ["PWR", "BWR", "PHWR"];
const COUNTRIES: [&str; 5] = ["France", "USA", "Japan", "Germany", "China"];

pub struct ScenarioGenerator<R: Rng> {
    rng: R,
}

impl ScenarioGenerator<StdRng> {
    /// Generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Deterministic generator
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ScenarioGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn generate(&mut self, tier: RiskTier) -> ScenarioInput {
        let m = tier.multipliers();

        ScenarioInput {
            reactor_age_years: self.rng.gen_range(5..45),
            reactor_type_code: self.pick(&REACTOR_TYPES),
            reactor_nominal_power_mw: self.floor_in(2000.0) + 500.0,
            load_factor_pct: self.floor_in(40.0) + 60.0,
            core_temp_c: ((self.unit() * 80.0 + 270.0) * m.temp).floor(),
            coolant_pressure_bar: ((self.unit() * 50.0 + 140.0) * m.pressure).floor(),
            neutron_flux: self.unit() * 5.0 + 2.0,
            control_rod_position_pct: self.floor_in(100.0),
            coolant_flow_rate: self.floor_in(10000.0) + 15000.0,
            maintenance_score: self.unit() * 10.0,
            days_since_maintenance: self.rng.gen_range(0..180),
            backup_generator_health: self.unit() * 10.0,

            country: self.pick(&COUNTRIES),
            ambient_temp_c: self.floor_in(40.0) - 10.0,
            population_within_30km: self.rng.gen_range(0..500_000),
            env_risk_index: self.unit() * 10.0 * m.risk,
            weather_severity_index: self.unit() * 10.0 * m.risk,
            seismic_activity_index: self.unit() * 10.0 * m.risk,
            co2_avoided_tons_per_hour: self.floor_in(1000.0),

            radiation_inside_usv: self.unit() * 2.0,
            radiation_outside_usv: self.unit() * 0.5,
            sensor_anomaly_flag: self.unit() > 0.7,
            cyber_attack_score: self.unit() * 10.0 * m.risk,

            grid_demand_index: self.floor_in(100.0),
            market_price_eur_mwh: self.floor_in(100.0) + 30.0,
            staff_fatigue_index: self.unit() * 10.0,
            public_anxiety_index: self.unit() * 10.0 * m.risk,
            social_media_rumour_index: self.unit() * 10.0 * m.risk,
            regulator_scrutiny_score: self.unit() * 10.0,

            avalon_raw_risk_score: self.unit() * 10.0 * m.risk,
            avalon_learned_reward_score: self.unit() * 10.0,
        }
    }

    fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn floor_in(&mut self, span: f64) -> f64 {
        (self.unit() * span).floor()
    }

    fn pick(&mut self, choices: &[&str]) -> String {
        choices.choose(&mut self.rng).copied().unwrap_or_default().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: usize = 500;

    fn mean(tier: RiskTier, seed: u64, field: impl Fn(&ScenarioInput) -> f64) -> f64 {
        let mut generator = ScenarioGenerator::seeded(seed);
        let total: f64 = (0..SAMPLES).map(|_| field(&generator.generate(tier))).sum();
        total / SAMPLES as f64
    }

    #[test]
    fn test_critical_tier_raises_means() {
        let fields: [(&str, fn(&ScenarioInput) -> f64); 3] = [
            ("core_temp_c", |s| s.core_temp_c),
            ("seismic_activity_index", |s| s.seismic_activity_index),
            ("cyber_attack_score", |s| s.cyber_attack_score),
        ];

        for (name, field) in fields {
            let low = mean(RiskTier::Low, 7, field);
            let critical = mean(RiskTier::Critical, 11, field);
            assert!(critical > low, "{}: critical mean {} <= low mean {}", name, critical, low);
        }
    }

    #[test]
    fn test_field_ranges() {
        let mut generator = ScenarioGenerator::seeded(42);

        for _ in 0..200 {
            let s = generator.generate(RiskTier::Moderate);
            assert!((5..45).contains(&s.reactor_age_years));
            assert!(REACTOR_TYPES.contains(&s.reactor_type_code.as_str()));
            assert!(COUNTRIES.contains(&s.country.as_str()));
            assert!((270.0..350.0).contains(&s.core_temp_c));
            assert!((140.0..190.0).contains(&s.coolant_pressure_bar));
            assert!((15000.0..25000.0).contains(&s.coolant_flow_rate));
            assert!((-10.0..30.0).contains(&s.ambient_temp_c));
            assert!(s.days_since_maintenance < 180);
            assert!(s.population_within_30km < 500_000);
            assert!(s.seismic_activity_index < 10.0);
            assert_eq!(s.core_temp_c.fract(), 0.0);
        }
    }

    #[test]
    fn test_seeded_generator_is_deterministic() {
        let a = ScenarioGenerator::seeded(3).generate(RiskTier::High);
        let b = ScenarioGenerator::seeded(3).generate(RiskTier::High);
        assert_eq!(a, b);
    }
}
