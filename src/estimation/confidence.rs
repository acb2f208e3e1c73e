//! 3-factor confidence scoring for advance rate estimates

use statrs::statistics::Statistics;

use crate::types::{MethodRates, TbmParameters};

/// Number of inputs every request carries
const BASE_PARAMETER_COUNT: f64 = 8.0;

/// Parameter count at which completeness saturates (base + UCS + RQD)
const FULL_PARAMETER_COUNT: f64 = 10.0;

/// Thrust density above which operation is considered strained (kN/m²)
const HIGH_THRUST_DENSITY: f64 = 5000.0;

/// Power density below which operation is considered underpowered (kW/m²)
const LOW_POWER_DENSITY: f64 = 100.0;

/// Sub-scores that make up the confidence score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceBreakdown {
    pub completeness: f64,
    pub consistency: f64,
    pub feasibility: f64,
}

impl ConfidenceBreakdown {
    /// Weights: completeness 40%, consistency 40%, feasibility 20%.
    pub fn score(&self) -> f64 {
        self.completeness * 0.4 + self.consistency * 0.4 + self.feasibility * 0.2
    }
}

/// Score confidence from input completeness, method agreement and
/// operational feasibility.
pub fn score_confidence(params: &TbmParameters, rates: &MethodRates) -> ConfidenceBreakdown {
    ConfidenceBreakdown {
        completeness: score_completeness(params),
        consistency: score_consistency(rates),
        feasibility: score_feasibility(params),
    }
}

/// Completeness: 8 base inputs, +1 each for UCS and RQD, out of 10.
fn score_completeness(params: &TbmParameters) -> f64 {
    let mut available = BASE_PARAMETER_COUNT;
    if params.ucs.is_some() {
        available += 1.0;
    }
    if params.rqd.is_some() {
        available += 1.0;
    }
    (available / FULL_PARAMETER_COUNT).min(1.0)
}

/// Consistency: 1 − coefficient of variation across the three candidate
/// rates (population standard deviation), floored at 0.3.
fn score_consistency(rates: &MethodRates) -> f64 {
    let values = rates.as_array();
    let mean = values.iter().mean();
    let std_dev = values.iter().population_std_dev();
    (1.0 - std_dev / mean).max(0.3)
}

/// Feasibility: penalize very high thrust density and low power density.
fn score_feasibility(params: &TbmParameters) -> f64 {
    let mut score = 1.0;
    if params.thrust_density() > HIGH_THRUST_DENSITY {
        score *= 0.9;
    }
    if params.power_density() < LOW_POWER_DENSITY {
        score *= 0.8;
    }
    score
}
