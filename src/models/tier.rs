//! Risk tier model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Qualitative label used only to bias random scenario generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    #[default]
    Moderate,
    High,
    Critical,
}

/// Multiplicative factors applied by the generator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierMultipliers {
    pub temp: f64,
    pub pressure: f64,
    pub risk: f64,
}

impl RiskTier {
    pub const ALL: [RiskTier; 4] = [RiskTier::Low, RiskTier::Moderate, RiskTier::High, RiskTier::Critical];

    pub fn multipliers(self) -> TierMultipliers {
        match self {
            RiskTier::Low => TierMultipliers { temp: 0.8, pressure: 0.85, risk: 0.7 },
            RiskTier::Moderate => TierMultipliers { temp: 1.0, pressure: 1.0, risk: 1.0 },
            RiskTier::High => TierMultipliers { temp: 1.15, pressure: 1.15, risk: 1.3 },
            RiskTier::Critical => TierMultipliers { temp: 1.3, pressure: 1.3, risk: 1.6 },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Moderate => "moderate",
            RiskTier::High => "high",
            RiskTier::Critical => "critical",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(RiskTier::Low),
            "moderate" => Ok(RiskTier::Moderate),
            "high" => Ok(RiskTier::High),
            "critical" => Ok(RiskTier::Critical),
            other => Err(format!("Unknown risk tier: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tier() {
        assert_eq!("Critical".parse::<RiskTier>(), Ok(RiskTier::Critical));
        assert_eq!(" low ".parse::<RiskTier>(), Ok(RiskTier::Low));
        assert!("extreme".parse::<RiskTier>().is_err());
        assert_eq!(RiskTier::default(), RiskTier::Moderate);
    }

    #[test]
    fn test_multipliers_increase_with_tier() {
        let factors: Vec<_> = RiskTier::ALL.iter().map(|t| t.multipliers()).collect();
        for pair in factors.windows(2) {
            assert!(pair[0].temp <= pair[1].temp);
            assert!(pair[0].pressure <= pair[1].pressure);
            assert!(pair[0].risk < pair[1].risk);
        }
    }
}
