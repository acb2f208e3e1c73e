//! Estimation outputs: blended result, per-method values and risk assessment

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fixed label reported as `calculation_method` on every result
pub const HYBRID_METHOD_LABEL: &str = "Hybrid (Empirical + Theoretical + Regression)";

/// Qualitative risk level, ordered `Low < Medium < High`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}

/// One fired risk check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskEntry {
    pub level: RiskLevel,
    pub description: String,
}

/// Operational risk assessment attached to every result
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RiskFactors {
    /// Fired risks keyed by name (`high_water_pressure`, `low_power`, ...)
    pub risks: BTreeMap<String, RiskEntry>,
    /// One recommendation per fired risk, in check order
    pub recommendations: Vec<String>,
    pub overall_risk_level: RiskLevel,
}

/// Final rounded estimate returned to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvanceRateResult {
    /// Predicted advance rate (mm/min)
    pub advance_rate: f64,
    /// Daily advance assuming a 20 h operating day (m/day)
    pub daily_advance: f64,
    /// Penetration per cutterhead revolution (mm/rev)
    pub penetration_rate: f64,
    /// Specific energy (kWh/m³)
    pub specific_energy: f64,
    /// Confidence of the prediction (0-1)
    pub confidence_score: f64,
    pub risk_factors: RiskFactors,
    pub calculation_method: String,
}

/// Candidate advance rates (mm/min) from the three estimation methods
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MethodRates {
    pub empirical: f64,
    pub theoretical: f64,
    pub regression: f64,
}

impl MethodRates {
    pub fn as_array(&self) -> [f64; 3] {
        [self.empirical, self.theoretical, self.regression]
    }
}

/// Blending weights for the three methods.
///
/// Adjustments are additive and never renormalized, so the sum can drift
/// from 1.0 when several adjustments apply.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MethodWeights {
    pub empirical: f64,
    pub theoretical: f64,
    pub regression: f64,
}

impl MethodWeights {
    pub fn total(&self) -> f64 {
        self.empirical + self.theoretical + self.regression
    }

    /// Weighted sum of the candidate rates
    pub fn blend(&self, rates: &MethodRates) -> f64 {
        rates.empirical * self.empirical
            + rates.theoretical * self.theoretical
            + rates.regression * self.regression
    }
}
