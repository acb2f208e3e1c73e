//! Categorical inputs: ground classification and machine type

use serde::{Deserialize, Serialize};

/// Primary soil or rock type at the tunnel face.
///
/// Closed set. Unknown strings are rejected during deserialization, so an
/// invalid category never reaches the estimation engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum SoilType {
    Clay,
    Sand,
    Silt,
    Gravel,
    #[serde(alias = "soft-rock")]
    RockSoft,
    #[serde(alias = "medium-rock")]
    RockMedium,
    #[serde(alias = "hard-rock")]
    RockHard,
    Mixed,
}

impl SoilType {
    /// Every variant, in catalog order.
    pub const ALL: [SoilType; 8] = [
        SoilType::Clay,
        SoilType::Sand,
        SoilType::Silt,
        SoilType::Gravel,
        SoilType::RockSoft,
        SoilType::RockMedium,
        SoilType::RockHard,
        SoilType::Mixed,
    ];

    /// True for the three rock categories, which require UCS and RQD.
    pub fn is_rock(&self) -> bool {
        matches!(
            self,
            SoilType::RockSoft | SoilType::RockMedium | SoilType::RockHard
        )
    }

    /// Wire value used in JSON requests and responses
    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Clay => "clay",
            SoilType::Sand => "sand",
            SoilType::Silt => "silt",
            SoilType::Gravel => "gravel",
            SoilType::RockSoft => "rock_soft",
            SoilType::RockMedium => "rock_medium",
            SoilType::RockHard => "rock_hard",
            SoilType::Mixed => "mixed",
        }
    }

    /// Get display name for UI
    pub fn label(&self) -> &'static str {
        match self {
            SoilType::Clay => "Clay",
            SoilType::Sand => "Sand",
            SoilType::Silt => "Silt",
            SoilType::Gravel => "Gravel",
            SoilType::RockSoft => "Soft Rock",
            SoilType::RockMedium => "Medium Rock",
            SoilType::RockHard => "Hard Rock",
            SoilType::Mixed => "Mixed",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SoilType::Clay => "Cohesive fine-grained soil",
            SoilType::Sand => "Granular soil with good drainage",
            SoilType::Silt => "Fine-grained soil with low plasticity",
            SoilType::Gravel => "Coarse granular material",
            SoilType::RockSoft => "Weathered or weak rock (UCS < 50 MPa)",
            SoilType::RockMedium => "Medium strength rock (UCS 50-100 MPa)",
            SoilType::RockHard => "Strong rock (UCS > 100 MPa)",
            SoilType::Mixed => "Variable ground conditions",
        }
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tunnel boring machine type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum TbmType {
    /// Earth Pressure Balance
    #[serde(alias = "earth-pressure-balance")]
    Epb,
    Slurry,
    Open,
    #[serde(alias = "mix-shield")]
    MixShield,
}

impl TbmType {
    pub const ALL: [TbmType; 4] = [TbmType::Epb, TbmType::Slurry, TbmType::Open, TbmType::MixShield];

    pub fn as_str(&self) -> &'static str {
        match self {
            TbmType::Epb => "epb",
            TbmType::Slurry => "slurry",
            TbmType::Open => "open",
            TbmType::MixShield => "mixshield",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TbmType::Epb => "EPB (Earth Pressure Balance)",
            TbmType::Slurry => "Slurry TBM",
            TbmType::Open => "Open TBM",
            TbmType::MixShield => "Mix Shield",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TbmType::Epb => "Suitable for cohesive soils and mixed ground",
            TbmType::Slurry => "Ideal for granular soils and high water pressure",
            TbmType::Open => "Used for stable rock conditions",
            TbmType::MixShield => "Versatile for changing ground conditions",
        }
    }
}

impl std::fmt::Display for TbmType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
