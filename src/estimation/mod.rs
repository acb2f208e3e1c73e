//! Estimation Engine
//!
//! Deterministic advance rate estimation for tunnel boring machines.
//! Every call is a pure, single-pass function of its input: no I/O, no
//! shared mutable state, no retries.
//!
//! ## Pipeline
//! 1. Three candidate rates: empirical, theoretical, regression
//! 2. Method weights from ground type and machine diameter
//! 3. Weighted blend of the candidates
//! 4. Derived metrics: penetration rate, specific energy, daily advance
//! 5. Confidence score (completeness, consistency, feasibility)
//! 6. Risk assessment with recommendations
//!
//! Input is expected to have passed [`TbmParameters::validate`]; ranges are
//! not re-checked here.

pub mod coefficients;
pub mod confidence;
pub mod methods;
pub mod metrics;
pub mod risk;
pub mod weights;

pub use coefficients::{soil_coefficients, tbm_efficiency, SoilCoefficients};
pub use confidence::{score_confidence, ConfidenceBreakdown};
pub use methods::{empirical_rate, regression_rate, theoretical_rate};
pub use metrics::{daily_advance, penetration_rate, specific_energy};
pub use risk::assess_risk_factors;
pub use weights::method_weights;

use tracing::{debug, info};

use crate::types::{
    AdvanceRateResult, MethodRates, MethodWeights, TbmParameters, HYBRID_METHOD_LABEL,
};

/// Failure inside the engine itself.
///
/// Validated input should never produce one; the guard keeps a non-finite
/// number from ever being returned as a result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimationError {
    #[error("non-finite {quantity} produced ({value})")]
    NonFinite { quantity: &'static str, value: f64 },
}

/// Unrounded intermediate values of one estimate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimateBreakdown {
    pub rates: MethodRates,
    pub weights: MethodWeights,
    pub advance_rate: f64,
    pub confidence: ConfidenceBreakdown,
}

/// Compute candidate rates, weights, blended rate and confidence.
pub fn estimate_breakdown(params: &TbmParameters) -> EstimateBreakdown {
    let rates = MethodRates {
        empirical: empirical_rate(params),
        theoretical: theoretical_rate(params),
        regression: regression_rate(params),
    };
    debug!(
        empirical = rates.empirical,
        theoretical = rates.theoretical,
        regression = rates.regression,
        "Candidate advance rates (mm/min)"
    );

    let weights = method_weights(params);
    debug!(
        empirical = weights.empirical,
        theoretical = weights.theoretical,
        regression = weights.regression,
        "Method weights"
    );

    EstimateBreakdown {
        rates,
        weights,
        advance_rate: weights.blend(&rates),
        confidence: score_confidence(params, &rates),
    }
}

/// Estimate the advance rate for one set of validated parameters.
///
/// All numeric outputs are rounded: rates, energy and daily advance to two
/// decimals, confidence to three.
pub fn estimate(params: &TbmParameters) -> Result<AdvanceRateResult, EstimationError> {
    debug!(
        diameter_m = params.tbm_diameter,
        soil = %params.soil_type,
        tbm = %params.tbm_type,
        "Calculating advance rate"
    );

    let breakdown = estimate_breakdown(params);
    let advance_rate = finite("advance_rate", breakdown.advance_rate)?;

    let penetration = finite(
        "penetration_rate",
        penetration_rate(advance_rate, params.cutterhead_speed),
    )?;
    let energy = finite("specific_energy", specific_energy(params, advance_rate))?;
    let daily = finite("daily_advance", daily_advance(advance_rate))?;
    let confidence = finite("confidence_score", breakdown.confidence.score())?;

    let result = AdvanceRateResult {
        advance_rate: metrics::round_to(advance_rate, 2),
        daily_advance: metrics::round_to(daily, 2),
        penetration_rate: metrics::round_to(penetration, 2),
        specific_energy: metrics::round_to(energy, 2),
        confidence_score: metrics::round_to(confidence, 3),
        risk_factors: assess_risk_factors(params),
        calculation_method: HYBRID_METHOD_LABEL.to_string(),
    };

    info!(
        advance_rate = result.advance_rate,
        confidence = result.confidence_score,
        risk = %result.risk_factors.overall_risk_level,
        "Calculated advance rate (mm/min)"
    );
    Ok(result)
}

fn finite(quantity: &'static str, value: f64) -> Result<f64, EstimationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EstimationError::NonFinite { quantity, value })
    }
}
