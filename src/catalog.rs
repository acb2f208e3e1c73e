//! Reference data served alongside the calculator
//!
//! Example scenarios for common tunnel types plus descriptive data for the
//! categorical inputs and the estimation methods. Category listings are
//! built from the enums so they always enumerate the accepted values.

use serde::Serialize;

use crate::estimation::weights::DEFAULT_WEIGHTS;
use crate::types::{SoilType, TbmParameters, TbmType};

// ============================================================================
// Example Scenarios
// ============================================================================

/// A named, pre-configured set of parameters
#[derive(Debug, Clone, Serialize)]
pub struct ExampleScenario {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: TbmParameters,
}

/// Pre-configured examples for metro, highway, water, mining and
/// large-diameter slurry tunnels.
pub fn example_scenarios() -> Vec<ExampleScenario> {
    vec![
        ExampleScenario {
            name: "Metro Tunnel - Soft Ground",
            description: "Typical metro tunnel in urban soft ground conditions",
            parameters: TbmParameters {
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
            },
        },
        ExampleScenario {
            name: "Highway Tunnel - Mixed Ground",
            description: "Highway tunnel through mixed soil and rock conditions",
            parameters: TbmParameters {
                tbm_diameter: 12.5,
                tbm_type: TbmType::MixShield,
                cutterhead_power: 5000.0,
                soil_type: SoilType::Mixed,
                ucs: None,
                rqd: None,
                water_pressure: 3.5,
                thrust_force: 35000.0,
                cutterhead_speed: 1.8,
                chamber_pressure: 2.8,
                depth: 40.0,
                temperature: 22.0,
            },
        },
        ExampleScenario {
            name: "Water Tunnel - Hard Rock",
            description: "Water supply tunnel in hard rock conditions",
            parameters: TbmParameters {
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
            },
        },
        ExampleScenario {
            name: "Mining Tunnel - Soft Rock",
            description: "Mining access tunnel in soft rock",
            parameters: TbmParameters {
                tbm_diameter: 3.5,
                tbm_type: TbmType::Open,
                cutterhead_power: 800.0,
                soil_type: SoilType::RockSoft,
                ucs: Some(45.0),
                rqd: Some(65.0),
                water_pressure: 2.0,
                thrust_force: 5000.0,
                cutterhead_speed: 4.0,
                chamber_pressure: 0.0,
                depth: 120.0,
                temperature: 30.0,
            },
        },
        ExampleScenario {
            name: "Slurry TBM - Sandy Ground",
            description: "Large diameter tunnel using slurry TBM in sandy conditions",
            parameters: TbmParameters {
                tbm_diameter: 15.2,
                tbm_type: TbmType::Slurry,
                cutterhead_power: 7500.0,
                soil_type: SoilType::Sand,
                ucs: None,
                rqd: None,
                water_pressure: 2.5,
                thrust_force: 45000.0,
                cutterhead_speed: 1.2,
                chamber_pressure: 2.0,
                depth: 25.0,
                temperature: 20.0,
            },
        },
    ]
}

// ============================================================================
// Category Listings
// ============================================================================

/// Value, label and description for one categorical option
#[derive(Debug, Clone, Serialize)]
pub struct CategoryOption {
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub fn soil_types() -> Vec<CategoryOption> {
    SoilType::ALL
        .iter()
        .map(|s| CategoryOption {
            value: s.as_str(),
            label: s.label(),
            description: s.description(),
        })
        .collect()
}

pub fn tbm_types() -> Vec<CategoryOption> {
    TbmType::ALL
        .iter()
        .map(|t| CategoryOption {
            value: t.as_str(),
            label: t.label(),
            description: t.description(),
        })
        .collect()
}

// ============================================================================
// Calculation Info
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct MethodInfo {
    pub name: &'static str,
    pub description: &'static str,
    /// Base weight before ground/diameter adjustments
    pub weight: f64,
    pub suitable_for: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MethodCatalog {
    pub empirical: MethodInfo,
    pub theoretical: MethodInfo,
    pub regression: MethodInfo,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParameterGroups {
    pub required: Vec<&'static str>,
    pub optional_for_rock: Vec<&'static str>,
    pub optional: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalculationInfo {
    pub methods: MethodCatalog,
    pub parameters: ParameterGroups,
    pub output_metrics: Vec<&'static str>,
}

/// Method metadata, parameter groups and output metric units
pub fn calculation_info() -> CalculationInfo {
    CalculationInfo {
        methods: MethodCatalog {
            empirical: MethodInfo {
                name: "Empirical Method",
                description: "Based on field data correlations and industry best practices",
                weight: DEFAULT_WEIGHTS.empirical,
                suitable_for: vec!["All soil types", "Established ground conditions"],
            },
            theoretical: MethodInfo {
                name: "Theoretical Method",
                description: "Rock/soil mechanics principles with UCS calculations",
                weight: DEFAULT_WEIGHTS.theoretical,
                suitable_for: vec!["Rock conditions", "When UCS/RQD data available"],
            },
            regression: MethodInfo {
                name: "Regression Method",
                description: "Fixed linear model over engineered machine and ground features",
                weight: DEFAULT_WEIGHTS.regression,
                suitable_for: vec!["Complex conditions", "Large datasets"],
            },
        },
        parameters: ParameterGroups {
            required: vec![
                "tbm_diameter",
                "tbm_type",
                "cutterhead_power",
                "soil_type",
                "thrust_force",
                "cutterhead_speed",
                "depth",
            ],
            optional_for_rock: vec!["ucs", "rqd"],
            optional: vec!["water_pressure", "chamber_pressure", "temperature"],
        },
        output_metrics: vec![
            "advance_rate (mm/min)",
            "daily_advance (m/day)",
            "penetration_rate (mm/rev)",
            "specific_energy (kWh/m³)",
            "confidence_score (0-1)",
            "risk_factors",
        ],
    }
}
