//! The three independent advance rate estimation methods
//!
//! Each method returns a candidate rate in mm/min, floored at a method
//! specific minimum:
//! - Empirical: thrust density corrected for ground, machine, depth, water
//! - Theoretical: rock cutting mechanics (rock) or penetration resistance (soil)
//! - Regression: fixed linear model over engineered features

use std::f64::consts::PI;

use super::coefficients::{soil_coefficients, tbm_efficiency};
use crate::types::TbmParameters;

// ============================================================================
// Floors and Caps
// ============================================================================

/// Minimum candidate rate for the empirical method (mm/min)
pub const EMPIRICAL_MIN_RATE: f64 = 0.5;

/// Minimum candidate rate for the theoretical method (mm/min)
pub const THEORETICAL_MIN_RATE: f64 = 0.5;

/// Cap on the soil penetration-resistance rate before power scaling (mm/min)
pub const THEORETICAL_SOIL_CAP: f64 = 50.0;

/// Theoretical rate used for rock when no usable UCS is available (mm/min).
///
/// Validation requires UCS for rock, so validated input never lands here.
pub const THEORETICAL_ROCK_FALLBACK: f64 = 5.0;

/// Regression output bounds (mm/min)
pub const REGRESSION_MIN_RATE: f64 = 0.5;
pub const REGRESSION_MAX_RATE: f64 = 45.0;

// ============================================================================
// Empirical Method
// ============================================================================

/// Empirical advance rate from field-data correlations.
///
/// Formula: rate = (F / A) × 0.1 × k1 × η_tbm × f_depth × f_water
///
/// Where:
/// - F = thrust force (kN), A = face area (m²)
/// - k1 = ground correction factor, η_tbm = machine efficiency
/// - f_depth = max(0.5, 1 − (depth − 10) × 0.01)
/// - f_water = max(0.3, 1 − water_pressure × 0.05)
pub fn empirical_rate(params: &TbmParameters) -> f64 {
    let k1 = soil_coefficients(params.soil_type).k1;
    let efficiency = tbm_efficiency(params.tbm_type);

    let base_rate = params.thrust_density() * 0.1;
    let mut rate = base_rate * k1 * efficiency;

    let depth_factor = (1.0 - (params.depth - 10.0) * 0.01).max(0.5);
    rate *= depth_factor;

    let water_factor = (1.0 - params.water_pressure * 0.05).max(0.3);
    rate *= water_factor;

    rate.max(EMPIRICAL_MIN_RATE)
}

// ============================================================================
// Theoretical Method
// ============================================================================

/// Theoretical rate before power-adequacy scaling and flooring (mm/min).
///
/// Rock with UCS: cutting force against a simplified specific cutting force
///   rate = (P × 1000 / N) / (UCS × 1e6 × 0.1 × D × π) × N × 60 / 1000
///
/// Soil: net thrust (thrust minus chamber support) against penetration
/// resistance, capped at [`THEORETICAL_SOIL_CAP`]
///   rate = (F × 1000 − p_c × 1e5 × A) / (R × 1000 × π × D) × 60 / 1000
pub fn theoretical_base_rate(params: &TbmParameters) -> f64 {
    if params.soil_type.is_rock() {
        match params.usable_ucs() {
            Some(ucs) => {
                // N·m per revolution
                let cutting_force = params.cutterhead_power * 1000.0 / params.cutterhead_speed;
                let specific_cutting_force = ucs * 1e6 * 0.1;
                let rate = cutting_force / (specific_cutting_force * params.tbm_diameter * PI);
                rate * params.cutterhead_speed * 60.0 / 1000.0
            }
            None => THEORETICAL_ROCK_FALLBACK,
        }
    } else {
        let penetration_resistance = soil_coefficients(params.soil_type).resistance * 1000.0;
        let net_thrust =
            params.thrust_force * 1000.0 - params.chamber_pressure * 1e5 * params.face_area();
        let rate = net_thrust / (penetration_resistance * PI * params.tbm_diameter);
        (rate * 60.0 / 1000.0).min(THEORETICAL_SOIL_CAP)
    }
}

/// Power adequacy factor: min(1, P / (D² × 200))
pub fn power_adequacy(params: &TbmParameters) -> f64 {
    (params.cutterhead_power / (params.tbm_diameter.powi(2) * 200.0)).min(1.0)
}

/// Theoretical advance rate from rock/soil mechanics principles.
pub fn theoretical_rate(params: &TbmParameters) -> f64 {
    (theoretical_base_rate(params) * power_adequacy(params)).max(THEORETICAL_MIN_RATE)
}

// ============================================================================
// Regression Method
// ============================================================================

/// Fixed linear model coefficients. Not fitted at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionCoefficients {
    pub intercept: f64,
    pub diameter: f64,
    pub power_per_area: f64,
    pub thrust_per_area: f64,
    pub rotation_speed: f64,
    pub depth_factor: f64,
    pub soil_hardness: f64,
}

pub const REGRESSION_COEFFICIENTS: RegressionCoefficients = RegressionCoefficients {
    intercept: 2.5,
    diameter: -0.8,
    power_per_area: 0.15,
    thrust_per_area: 0.008,
    rotation_speed: 1.2,
    depth_factor: 3.0,
    soil_hardness: -2.1,
};

/// Engineered features fed to the regression model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionFeatures {
    pub diameter: f64,
    pub power_per_area: f64,
    pub thrust_per_area: f64,
    pub rotation_speed: f64,
    pub depth_factor: f64,
    pub soil_hardness: f64,
}

impl RegressionFeatures {
    pub fn from_params(params: &TbmParameters) -> Self {
        Self {
            diameter: params.tbm_diameter,
            power_per_area: params.power_density(),
            thrust_per_area: params.thrust_density(),
            rotation_speed: params.cutterhead_speed,
            depth_factor: 1.0 / (1.0 + params.depth * 0.01),
            soil_hardness: soil_coefficients(params.soil_type).resistance,
        }
    }
}

impl RegressionCoefficients {
    /// Unbounded linear prediction: intercept + Σ coefficient × feature
    pub fn predict(&self, f: &RegressionFeatures) -> f64 {
        self.intercept
            + self.diameter * f.diameter
            + self.power_per_area * f.power_per_area
            + self.thrust_per_area * f.thrust_per_area
            + self.rotation_speed * f.rotation_speed
            + self.depth_factor * f.depth_factor
            + self.soil_hardness * f.soil_hardness
    }
}

/// Regression advance rate, clamped to [0.5, 45.0] mm/min.
pub fn regression_rate(params: &TbmParameters) -> f64 {
    let features = RegressionFeatures::from_params(params);
    REGRESSION_COEFFICIENTS
        .predict(&features)
        .clamp(REGRESSION_MIN_RATE, REGRESSION_MAX_RATE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SoilType, TbmType};

    fn metro_clay() -> TbmParameters {
        TbmParameters {
            tbm_diameter: 6.2,
            tbm_type: TbmType::Epb,
            cutterhead_power: 2000.0,
            soil_type: SoilType::Clay,
            ucs: None,
            rqd: None,
            water_pressure: 1.5,
            thrust_force: 15000.0,
            cutterhead_speed: 2.5,
            chamber_pressure: 1.2,
            depth: 15.0,
            temperature: 18.0,
        }
    }

    fn hard_rock() -> TbmParameters {
        TbmParameters {
            tbm_diameter: 4.5,
            tbm_type: TbmType::Open,
            cutterhead_power: 1500.0,
            soil_type: SoilType::RockHard,
            ucs: Some(150.0),
            rqd: Some(85.0),
            water_pressure: 6.0,
            thrust_force: 8000.0,
            cutterhead_speed: 3.5,
            chamber_pressure: 0.0,
            depth: 80.0,
            temperature: 25.0,
        }
    }

    #[test]
    fn test_empirical_metro() {
        // base = 15000 / (π × 3.1²) × 0.1 = 49.684
        // × 0.8 × 0.85 × 0.95 × 0.925 = 29.69
        let rate = empirical_rate(&metro_clay());
        assert!((rate - 29.69).abs() < 0.01, "empirical ≈ 29.69, got {rate}");
    }

    #[test]
    fn test_empirical_factor_floors() {
        let mut params = metro_clay();
        params.depth = 200.0; // 1 − 1.9 → floored at 0.5
        params.water_pressure = 10.0; // 1 − 0.5 = 0.5, above the 0.3 floor
        let expected = params.thrust_density() * 0.1 * 0.8 * 0.85 * 0.5 * 0.5;
        assert!((empirical_rate(&params) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_empirical_minimum() {
        let mut params = hard_rock();
        params.tbm_diameter = 20.0;
        params.thrust_force = 100.0;
        assert_eq!(empirical_rate(&params), EMPIRICAL_MIN_RATE);
    }

    #[test]
    fn test_theoretical_soil_capped_then_scaled() {
        let params = metro_clay();
        // Net-thrust rate ≈ 58.4 mm/min, capped to 50 before scaling
        assert_eq!(theoretical_base_rate(&params), THEORETICAL_SOIL_CAP);
        let adequacy = 2000.0 / (6.2 * 6.2 * 200.0);
        assert!((power_adequacy(&params) - adequacy).abs() < 1e-12);
        assert!((theoretical_rate(&params) - 50.0 * adequacy).abs() < 1e-9);
    }

    #[test]
    fn test_theoretical_rock_uses_ucs() {
        let params = hard_rock();
        let cutting_force = 1500.0 * 1000.0 / 3.5;
        let expected = cutting_force / (150.0 * 1e6 * 0.1 * 4.5 * PI) * 3.5 * 60.0 / 1000.0;
        assert!((theoretical_base_rate(&params) - expected).abs() < 1e-12);
        // Tiny cutting rate in hard rock is floored
        assert_eq!(theoretical_rate(&params), THEORETICAL_MIN_RATE);
    }

    #[test]
    fn test_theoretical_rock_without_ucs_falls_back() {
        let mut params = hard_rock();
        params.ucs = None;
        assert_eq!(theoretical_base_rate(&params), THEORETICAL_ROCK_FALLBACK);

        params.ucs = Some(0.0);
        assert_eq!(theoretical_base_rate(&params), THEORETICAL_ROCK_FALLBACK);
    }

    #[test]
    fn test_power_adequacy_saturates() {
        let mut params = metro_clay();
        params.tbm_diameter = 2.0;
        params.cutterhead_power = 5000.0;
        assert_eq!(power_adequacy(&params), 1.0);
    }

    #[test]
    fn test_regression_metro() {
        // 2.5 − 4.96 + 9.937 + 3.975 + 3.0 + 2.609 − 1.26 ≈ 15.80
        let rate = regression_rate(&metro_clay());
        assert!((rate - 15.80).abs() < 0.01, "regression ≈ 15.80, got {rate}");
    }

    #[test]
    fn test_regression_clamped() {
        let mut params = metro_clay();
        params.tbm_diameter = 1.0;
        params.cutterhead_power = 10_000.0;
        assert_eq!(regression_rate(&params), REGRESSION_MAX_RATE);

        params.tbm_diameter = 20.0;
        params.cutterhead_power = 100.0;
        params.thrust_force = 100.0;
        params.cutterhead_speed = 0.1;
        params.soil_type = SoilType::RockHard;
        assert_eq!(regression_rate(&params), REGRESSION_MIN_RATE);
    }
}
