//! Operational risk checks and recommendations

use std::collections::BTreeMap;

use crate::types::{RiskEntry, RiskFactors, RiskLevel, TbmParameters};

/// Water pressure above which face stability is at risk (bar)
pub const HIGH_WATER_PRESSURE_BAR: f64 = 3.0;

/// Power density below which the cutterhead may be underpowered (kW/m²)
pub const LOW_POWER_DENSITY: f64 = 150.0;

/// Depth beyond which pressure management needs extra care (m)
pub const DEEP_TUNNEL_DEPTH_M: f64 = 50.0;

/// UCS above which rock is treated as very hard (MPa)
pub const HARD_ROCK_UCS_MPA: f64 = 100.0;

/// Run every independent risk check and derive the overall level.
pub fn assess_risk_factors(params: &TbmParameters) -> RiskFactors {
    let mut risks = BTreeMap::new();
    let mut recommendations = Vec::new();

    let mut fire = |key: &str, level: RiskLevel, description: String, recommendation: &str| {
        risks.insert(key.to_string(), RiskEntry { level, description });
        recommendations.push(recommendation.to_string());
    };

    if params.water_pressure > HIGH_WATER_PRESSURE_BAR {
        fire(
            "high_water_pressure",
            RiskLevel::High,
            format!(
                "Water pressure of {:?} bar may cause stability issues",
                params.water_pressure
            ),
            "Consider additional ground treatment or pressure relief measures",
        );
    }

    let power_density = params.power_density();
    if power_density < LOW_POWER_DENSITY {
        fire(
            "low_power",
            RiskLevel::Medium,
            format!("Power density of {power_density:.1} kW/m² may be insufficient"),
            "Monitor power consumption and consider reducing advance rate if needed",
        );
    }

    if params.depth > DEEP_TUNNEL_DEPTH_M {
        fire(
            "deep_tunneling",
            RiskLevel::Medium,
            format!("Depth of {:?}m requires careful pressure management", params.depth),
            "Implement enhanced monitoring and ground settlement controls",
        );
    }

    if let Some(ucs) = params.ucs.filter(|_| params.soil_type.is_rock()) {
        if ucs > HARD_ROCK_UCS_MPA {
            fire(
                "hard_rock",
                RiskLevel::High,
                format!("UCS of {ucs:?} MPa indicates very hard rock conditions"),
                "Plan for increased cutter wear and potential advance rate reductions",
            );
        }
    }

    let overall_risk_level = overall_risk_level(&risks);
    RiskFactors {
        risks,
        recommendations,
        overall_risk_level,
    }
}

/// Highest level among fired risks, `Low` when none fired.
pub fn overall_risk_level(risks: &BTreeMap<String, RiskEntry>) -> RiskLevel {
    risks
        .values()
        .map(|r| r.level)
        .max()
        .unwrap_or(RiskLevel::Low)
}
