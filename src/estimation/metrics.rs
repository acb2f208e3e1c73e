//! Derived excavation metrics

use std::f64::consts::PI;

use crate::types::TbmParameters;

/// Operating hours assumed per day for daily advance
pub const OPERATING_HOURS_PER_DAY: f64 = 20.0;

/// Penetration per cutterhead revolution (mm/rev).
///
/// Returns 0 when the cutterhead is not turning.
pub fn penetration_rate(advance_rate: f64, rpm: f64) -> f64 {
    if rpm > 0.0 {
        advance_rate / rpm
    } else {
        0.0
    }
}

/// Specific energy (kWh/m³) at the given advance rate (mm/min).
///
/// Formula: SE = P / (V̇ × 3600), V̇ = π × (D/2)² × (rate / 1000) / 60
pub fn specific_energy(params: &TbmParameters, advance_rate: f64) -> f64 {
    if advance_rate <= 0.0 {
        return 0.0;
    }
    let radius = params.tbm_diameter / 2.0;
    // m³/s
    let volume_rate = PI * radius * radius * (advance_rate / 1000.0) / 60.0;
    if volume_rate > 0.0 {
        params.cutterhead_power / (volume_rate * 3600.0)
    } else {
        0.0
    }
}

/// Daily advance (m/day) at the given advance rate (mm/min)
pub fn daily_advance(advance_rate: f64) -> f64 {
    advance_rate * 60.0 * OPERATING_HOURS_PER_DAY / 1000.0
}

/// Round half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
