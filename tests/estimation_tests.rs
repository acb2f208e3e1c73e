//! Estimation Engine Tests
//!
//! Properties that must hold for every valid input: the example scenarios
//! plus edge inputs at the range limits.

use tbm_advance::catalog::example_scenarios;
use tbm_advance::estimation::methods::{
    theoretical_base_rate, EMPIRICAL_MIN_RATE, REGRESSION_MAX_RATE, REGRESSION_MIN_RATE,
    THEORETICAL_MIN_RATE, THEORETICAL_SOIL_CAP,
};
use tbm_advance::estimation::weights::DEFAULT_WEIGHTS;
use tbm_advance::{estimate, estimate_breakdown, RiskLevel, SoilType, TbmParameters, TbmType};

fn scenario(name_prefix: &str) -> TbmParameters {
    example_scenarios()
        .into_iter()
        .find(|s| s.name.starts_with(name_prefix))
        .map(|s| s.parameters)
        .unwrap()
}

fn edge_inputs() -> Vec<TbmParameters> {
    let low = TbmParameters {
        tbm_diameter: 1.0,
        tbm_type: TbmType::Open,
        cutterhead_power: 100.0,
        soil_type: SoilType::Gravel,
        ucs: None,
        rqd: None,
        water_pressure: 0.0,
        thrust_force: 100.0,
        cutterhead_speed: 0.1,
        chamber_pressure: 0.0,
        depth: 1.0,
        temperature: -10.0,
    };
    let high = TbmParameters {
        tbm_diameter: 20.0,
        tbm_type: TbmType::Slurry,
        cutterhead_power: 10_000.0,
        soil_type: SoilType::RockHard,
        ucs: Some(300.0),
        rqd: Some(100.0),
        water_pressure: 10.0,
        thrust_force: 50_000.0,
        cutterhead_speed: 10.0,
        chamber_pressure: 10.0,
        depth: 200.0,
        temperature: 60.0,
    };
    let zero_strength_rock = TbmParameters {
        soil_type: SoilType::RockSoft,
        ucs: Some(0.0),
        rqd: Some(0.0),
        ..low.clone()
    };
    vec![low, high, zero_strength_rock]
}

fn all_inputs() -> Vec<TbmParameters> {
    let mut inputs: Vec<_> = example_scenarios().into_iter().map(|s| s.parameters).collect();
    inputs.extend(edge_inputs());
    inputs
}

#[test]
fn every_valid_input_produces_finite_result() {
    for params in all_inputs() {
        params.validate().unwrap();
        let result = estimate(&params).unwrap();
        assert!(result.advance_rate.is_finite() && result.advance_rate > 0.0);
        assert!(result.daily_advance.is_finite() && result.daily_advance >= 0.0);
        assert!(result.penetration_rate.is_finite() && result.penetration_rate >= 0.0);
        assert!(result.specific_energy.is_finite() && result.specific_energy >= 0.0);
        assert!(
            (0.0..=1.0).contains(&result.confidence_score),
            "confidence {} for {params:?}",
            result.confidence_score
        );
    }
}

#[test]
fn candidate_rates_respect_floors_and_clamp() {
    for params in all_inputs() {
        let b = estimate_breakdown(&params);
        assert!(b.rates.empirical >= EMPIRICAL_MIN_RATE);
        assert!(b.rates.theoretical >= THEORETICAL_MIN_RATE);
        assert!((REGRESSION_MIN_RATE..=REGRESSION_MAX_RATE).contains(&b.rates.regression));
        if !params.soil_type.is_rock() {
            let base = theoretical_base_rate(&params);
            assert!(base <= THEORETICAL_SOIL_CAP, "soil base rate {base} for {params:?}");
        }
    }
}

#[test]
fn blended_rate_is_weighted_sum_of_candidates() {
    for params in all_inputs() {
        let b = estimate_breakdown(&params);
        let expected = b.weights.empirical * b.rates.empirical
            + b.weights.theoretical * b.rates.theoretical
            + b.weights.regression * b.rates.regression;
        assert!((b.advance_rate - expected).abs() < 1e-9);
    }
}

#[test]
fn estimate_is_idempotent() {
    for params in all_inputs() {
        assert_eq!(estimate(&params).unwrap(), estimate(&params).unwrap());
    }
}

#[test]
fn daily_advance_assumes_twenty_hour_day() {
    for params in all_inputs() {
        let result = estimate(&params).unwrap();
        let b = estimate_breakdown(&params);
        let expected = b.advance_rate * 60.0 * 20.0 / 1000.0;
        assert!((result.daily_advance - expected).abs() <= 0.005 + 1e-9);
    }
}

#[test]
fn soft_ground_medium_diameter_uses_default_weights() {
    let b = estimate_breakdown(&scenario("Metro"));
    assert_eq!(b.weights, DEFAULT_WEIGHTS);
}

#[test]
fn large_slurry_shifts_weight_to_empirical() {
    let b = estimate_breakdown(&scenario("Slurry"));
    assert!((b.weights.empirical - 0.5).abs() < 1e-9);
    assert!((b.weights.theoretical - 0.30).abs() < 1e-9);
    assert!((b.weights.regression - 0.20).abs() < 1e-9);
}

#[test]
fn hard_rock_water_tunnel_is_high_risk() {
    let result = estimate(&scenario("Water")).unwrap();
    let risks = &result.risk_factors.risks;
    assert!(risks.contains_key("hard_rock"));
    assert!(risks.contains_key("high_water_pressure"));
    assert!(risks.contains_key("deep_tunneling"));
    assert_eq!(result.risk_factors.overall_risk_level, RiskLevel::High);
    assert_eq!(result.risk_factors.recommendations.len(), risks.len());
}

#[test]
fn rock_inputs_reach_full_completeness() {
    let b = estimate_breakdown(&scenario("Mining"));
    assert_eq!(b.confidence.completeness, 1.0);
    let b = estimate_breakdown(&scenario("Metro"));
    assert!((b.confidence.completeness - 0.8).abs() < 1e-12);
}

#[test]
fn rock_without_strength_is_rejected_before_estimation() {
    let mut params = scenario("Water");
    params.ucs = None;
    params.rqd = None;
    let err = params.validate().unwrap_err();
    assert_eq!(err.fields(), vec!["ucs", "rqd"]);
}
