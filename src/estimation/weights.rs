//! Method weighting policy

use crate::types::{MethodWeights, TbmParameters};

/// Starting weights before any adjustment
pub const DEFAULT_WEIGHTS: MethodWeights = MethodWeights {
    empirical: 0.4,
    theoretical: 0.35,
    regression: 0.25,
};

/// Diameters outside (3, 12) m favour the empirical method
pub const SMALL_DIAMETER_M: f64 = 3.0;
pub const LARGE_DIAMETER_M: f64 = 12.0;

/// Blending weights for one input.
///
/// Two additive adjustments, applied independently:
/// - Rock with UCS and RQD: theoretical +0.1, empirical and regression −0.05
/// - Diameter > 12 m or < 3 m: empirical +0.1, theoretical and regression −0.05
///
/// The result is not renormalized.
pub fn method_weights(params: &TbmParameters) -> MethodWeights {
    let mut weights = DEFAULT_WEIGHTS;

    if params.soil_type.is_rock() && params.usable_ucs().is_some() && params.usable_rqd().is_some() {
        weights.theoretical += 0.1;
        weights.empirical -= 0.05;
        weights.regression -= 0.05;
    }

    if params.tbm_diameter > LARGE_DIAMETER_M || params.tbm_diameter < SMALL_DIAMETER_M {
        weights.empirical += 0.1;
        weights.theoretical -= 0.05;
        weights.regression -= 0.05;
    }

    weights
}
