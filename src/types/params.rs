//! Estimation input parameters and whole-object validation

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use super::{SoilType, TbmType};

// ============================================================================
// Field Ranges
// ============================================================================

/// Inclusive physical ranges accepted for each numeric input
pub mod limits {
    use std::ops::RangeInclusive;

    pub const TBM_DIAMETER_M: RangeInclusive<f64> = 1.0..=20.0;
    pub const CUTTERHEAD_POWER_KW: RangeInclusive<f64> = 100.0..=10_000.0;
    pub const UCS_MPA: RangeInclusive<f64> = 0.0..=300.0;
    pub const RQD_PERCENT: RangeInclusive<f64> = 0.0..=100.0;
    pub const WATER_PRESSURE_BAR: RangeInclusive<f64> = 0.0..=10.0;
    pub const THRUST_FORCE_KN: RangeInclusive<f64> = 100.0..=50_000.0;
    pub const CUTTERHEAD_SPEED_RPM: RangeInclusive<f64> = 0.1..=10.0;
    pub const CHAMBER_PRESSURE_BAR: RangeInclusive<f64> = 0.0..=10.0;
    pub const DEPTH_M: RangeInclusive<f64> = 1.0..=200.0;
    pub const TEMPERATURE_C: RangeInclusive<f64> = -10.0..=60.0;
}

fn default_temperature() -> f64 {
    20.0
}

// ============================================================================
// Parameters
// ============================================================================

/// Machine, ground and operating inputs for one advance rate estimate.
///
/// `ucs` and `rqd` are optional in general but required for rock; see
/// [`TbmParameters::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TbmParameters {
    /// TBM diameter (m)
    pub tbm_diameter: f64,
    pub tbm_type: TbmType,
    /// Cutterhead power (kW)
    pub cutterhead_power: f64,

    pub soil_type: SoilType,
    /// Unconfined compressive strength (MPa)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ucs: Option<f64>,
    /// Rock Quality Designation (%)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rqd: Option<f64>,
    /// Groundwater pressure (bar)
    #[serde(default)]
    pub water_pressure: f64,

    /// Thrust force (kN)
    pub thrust_force: f64,
    /// Cutterhead rotation speed (RPM)
    pub cutterhead_speed: f64,
    /// Face support pressure in the excavation chamber (bar)
    #[serde(default)]
    pub chamber_pressure: f64,

    /// Depth below surface (m)
    pub depth: f64,
    /// Ground temperature (°C)
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

impl TbmParameters {
    /// Excavated face area (m²) for the machine diameter.
    pub fn face_area(&self) -> f64 {
        let radius = self.tbm_diameter / 2.0;
        std::f64::consts::PI * radius * radius
    }

    /// Cutterhead power per unit face area (kW/m²)
    pub fn power_density(&self) -> f64 {
        self.cutterhead_power / self.face_area()
    }

    /// Thrust per unit face area (kN/m²)
    pub fn thrust_density(&self) -> f64 {
        self.thrust_force / self.face_area()
    }

    /// UCS that can drive the rock-cutting model: present and non-zero.
    pub fn usable_ucs(&self) -> Option<f64> {
        self.ucs.filter(|ucs| *ucs != 0.0)
    }

    /// RQD that counts towards favouring the theoretical method.
    pub fn usable_rqd(&self) -> Option<f64> {
        self.rqd.filter(|rqd| *rqd != 0.0)
    }

    /// Validate every field in a single pass over the whole object.
    ///
    /// All violations are collected rather than stopping at the first, so a
    /// caller gets the full list of offending fields. The rock rule depends on
    /// `soil_type` jointly with `ucs`/`rqd` and is checked here too.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Vec::new();

        check_range(&mut violations, "tbm_diameter", self.tbm_diameter, limits::TBM_DIAMETER_M, "m");
        check_range(
            &mut violations,
            "cutterhead_power",
            self.cutterhead_power,
            limits::CUTTERHEAD_POWER_KW,
            "kW",
        );
        check_range(
            &mut violations,
            "water_pressure",
            self.water_pressure,
            limits::WATER_PRESSURE_BAR,
            "bar",
        );
        check_range(
            &mut violations,
            "thrust_force",
            self.thrust_force,
            limits::THRUST_FORCE_KN,
            "kN",
        );
        check_range(
            &mut violations,
            "cutterhead_speed",
            self.cutterhead_speed,
            limits::CUTTERHEAD_SPEED_RPM,
            "RPM",
        );
        check_range(
            &mut violations,
            "chamber_pressure",
            self.chamber_pressure,
            limits::CHAMBER_PRESSURE_BAR,
            "bar",
        );
        check_range(&mut violations, "depth", self.depth, limits::DEPTH_M, "m");
        check_range(
            &mut violations,
            "temperature",
            self.temperature,
            limits::TEMPERATURE_C,
            "°C",
        );

        match self.ucs {
            Some(ucs) => check_range(&mut violations, "ucs", ucs, limits::UCS_MPA, "MPa"),
            None if self.soil_type.is_rock() => violations.push(FieldViolation::new(
                "ucs",
                format!("UCS is required for rock types (soil_type = {})", self.soil_type),
            )),
            None => {}
        }

        match self.rqd {
            Some(rqd) => check_range(&mut violations, "rqd", rqd, limits::RQD_PERCENT, "%"),
            None if self.soil_type.is_rock() => violations.push(FieldViolation::new(
                "rqd",
                format!("RQD is required for rock types (soil_type = {})", self.soil_type),
            )),
            None => {}
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { violations })
        }
    }
}

fn check_range(
    violations: &mut Vec<FieldViolation>,
    field: &'static str,
    value: f64,
    range: RangeInclusive<f64>,
    unit: &str,
) {
    // NaN and infinities fail `contains`, so they are reported as out of range
    if !range.contains(&value) {
        violations.push(FieldViolation::new(
            field,
            format!(
                "{field} = {value} is outside the allowed range ({}-{} {unit})",
                range.start(),
                range.end()
            ),
        ));
    }
}

// ============================================================================
// Validation Error
// ============================================================================

/// A single rejected input field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Input rejected before the engine runs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("parameter validation failed: {}", summarize(.violations))]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// Names of the offending fields, in check order
    pub fn fields(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.field.as_str()).collect()
    }
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed_ground() -> TbmParameters {
        serde_json::from_value(serde_json::json!({
            "tbm_diameter": 6.2,
            "tbm_type": "epb",
            "cutterhead_power": 2500,
            "soil_type": "mixed",
            "thrust_force": 35000,
            "cutterhead_speed": 2.5,
            "depth": 25
        }))
        .unwrap()
    }

    #[test]
    fn test_defaults_applied() {
        let params = mixed_ground();
        assert_eq!(params.water_pressure, 0.0);
        assert_eq!(params.chamber_pressure, 0.0);
        assert_eq!(params.temperature, 20.0);
        assert!(params.ucs.is_none());
        assert!(params.rqd.is_none());
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_missing_required_field_fails_deserialization() {
        let result = serde_json::from_value::<TbmParameters>(serde_json::json!({
            "tbm_type": "epb",
            "cutterhead_power": 2500,
            "soil_type": "mixed",
            "thrust_force": 35000,
            "cutterhead_speed": 2.5,
            "depth": 25
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_diameter_bounds() {
        let mut params = mixed_ground();
        params.tbm_diameter = 0.5;
        assert_eq!(params.validate().unwrap_err().fields(), vec!["tbm_diameter"]);
        params.tbm_diameter = 25.0;
        assert_eq!(params.validate().unwrap_err().fields(), vec!["tbm_diameter"]);
        params.tbm_diameter = 20.0;
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_collects_every_violation() {
        let mut params = mixed_ground();
        params.cutterhead_power = 50.0;
        params.depth = 250.0;
        params.temperature = 80.0;
        let err = params.validate().unwrap_err();
        assert_eq!(err.fields(), vec!["cutterhead_power", "depth", "temperature"]);
        assert!(err.to_string().contains("cutterhead_power"));
    }

    #[test]
    fn test_negative_chamber_pressure_rejected() {
        let mut params = mixed_ground();
        params.chamber_pressure = -1.0;
        assert_eq!(params.validate().unwrap_err().fields(), vec!["chamber_pressure"]);
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut params = mixed_ground();
        params.thrust_force = f64::NAN;
        params.cutterhead_speed = f64::INFINITY;
        assert_eq!(
            params.validate().unwrap_err().fields(),
            vec!["thrust_force", "cutterhead_speed"]
        );
    }

    #[test]
    fn test_rock_requires_ucs_and_rqd() {
        let mut params = mixed_ground();
        params.soil_type = SoilType::RockHard;
        let err = params.validate().unwrap_err();
        assert_eq!(err.fields(), vec!["ucs", "rqd"]);

        params.ucs = Some(120.0);
        assert_eq!(params.validate().unwrap_err().fields(), vec!["rqd"]);

        params.rqd = Some(85.0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_rqd_range_checked_for_rock() {
        let mut params = mixed_ground();
        params.soil_type = SoilType::RockMedium;
        params.ucs = Some(120.0);
        params.rqd = Some(150.0);
        assert_eq!(params.validate().unwrap_err().fields(), vec!["rqd"]);
    }

    #[test]
    fn test_soil_does_not_require_ucs() {
        let mut params = mixed_ground();
        params.soil_type = SoilType::Clay;
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_area_derived_values() {
        let mut params = mixed_ground();
        params.tbm_diameter = 2.0;
        params.cutterhead_power = 1000.0;
        params.thrust_force = 3141.592653589793;
        assert!((params.face_area() - std::f64::consts::PI).abs() < 1e-12);
        assert!((params.power_density() - 1000.0 / std::f64::consts::PI).abs() < 1e-9);
        assert!((params.thrust_density() - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_usable_ucs_ignores_zero() {
        let mut params = mixed_ground();
        params.ucs = Some(0.0);
        assert!(params.usable_ucs().is_none());
        params.ucs = Some(45.0);
        assert_eq!(params.usable_ucs(), Some(45.0));
    }
}
