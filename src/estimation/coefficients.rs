//! Ground and machine reference tables
//!
//! Read-only constants shared by every estimate. Lookups go through a match
//! on the closed enums, so every category has exactly one entry and the
//! tables cannot be mutated at runtime.

use crate::types::{SoilType, TbmType};

/// Per-ground coefficients used by the estimation methods
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoilCoefficients {
    /// Empirical correction factor
    pub k1: f64,
    /// Theoretical refinement multiplier (not yet used by any method)
    pub k2: f64,
    /// Penetration resistance factor
    pub resistance: f64,
}

const CLAY: SoilCoefficients = SoilCoefficients { k1: 0.8, k2: 1.2, resistance: 0.6 };
const SAND: SoilCoefficients = SoilCoefficients { k1: 1.0, k2: 1.0, resistance: 0.4 };
const SILT: SoilCoefficients = SoilCoefficients { k1: 0.9, k2: 1.1, resistance: 0.5 };
const GRAVEL: SoilCoefficients = SoilCoefficients { k1: 1.2, k2: 0.9, resistance: 0.7 };
const ROCK_SOFT: SoilCoefficients = SoilCoefficients { k1: 0.6, k2: 1.5, resistance: 1.2 };
const ROCK_MEDIUM: SoilCoefficients = SoilCoefficients { k1: 0.4, k2: 2.0, resistance: 2.0 };
const ROCK_HARD: SoilCoefficients = SoilCoefficients { k1: 0.2, k2: 3.0, resistance: 3.5 };
const MIXED: SoilCoefficients = SoilCoefficients { k1: 0.7, k2: 1.3, resistance: 1.0 };

/// Coefficients for a ground category
pub fn soil_coefficients(soil: SoilType) -> &'static SoilCoefficients {
    match soil {
        SoilType::Clay => &CLAY,
        SoilType::Sand => &SAND,
        SoilType::Silt => &SILT,
        SoilType::Gravel => &GRAVEL,
        SoilType::RockSoft => &ROCK_SOFT,
        SoilType::RockMedium => &ROCK_MEDIUM,
        SoilType::RockHard => &ROCK_HARD,
        SoilType::Mixed => &MIXED,
    }
}

/// Machine-type efficiency factor (0-1)
pub fn tbm_efficiency(tbm: TbmType) -> f64 {
    match tbm {
        TbmType::Epb => 0.85,
        TbmType::Slurry => 0.80,
        TbmType::Open => 0.90,
        TbmType::MixShield => 0.82,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_soil_type_has_positive_coefficients() {
        for soil in SoilType::ALL {
            let c = soil_coefficients(soil);
            assert!(c.k1 > 0.0, "{soil}: k1");
            assert!(c.k2 > 0.0, "{soil}: k2");
            assert!(c.resistance > 0.0, "{soil}: resistance");
        }
    }

    #[test]
    fn test_reference_values() {
        let expected = [
            (SoilType::Clay, 0.8, 0.6),
            (SoilType::Sand, 1.0, 0.4),
            (SoilType::Silt, 0.9, 0.5),
            (SoilType::Gravel, 1.2, 0.7),
            (SoilType::RockSoft, 0.6, 1.2),
            (SoilType::RockMedium, 0.4, 2.0),
            (SoilType::RockHard, 0.2, 3.5),
            (SoilType::Mixed, 0.7, 1.0),
        ];
        for (soil, k1, resistance) in expected {
            let c = soil_coefficients(soil);
            assert_eq!(c.k1, k1, "{soil}");
            assert_eq!(c.resistance, resistance, "{soil}");
        }
    }

    #[test]
    fn test_tbm_efficiency_in_unit_interval() {
        for tbm in TbmType::ALL {
            let eff = tbm_efficiency(tbm);
            assert!(eff > 0.0 && eff <= 1.0, "{tbm}: {eff}");
        }
        assert_eq!(tbm_efficiency(TbmType::Epb), 0.85);
        assert_eq!(tbm_efficiency(TbmType::Open), 0.90);
    }
}
