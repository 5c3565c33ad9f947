use proptest::prelude::*;
use wf_core::units::{deg, degf, ft, inch, psi};
use wf_flow::{FlowRegime, WellGeometry};
use wf_pvt::FluidDescription;
use wf_solver::{
    FinalIncrement, ThermalProfile, TraverseConfig, Well, final_pressure, march_to_depth,
    single_traverse,
};

const REFERENCE_PRESSURES: [f64; 11] = [
    200.0,
    244.8721196150212,
    291.9898691972543,
    341.3443982172743,
    392.9414591957235,
    446.79542119602684,
    505.33097860673945,
    569.1002770556311,
    638.2803835640925,
    713.0009534973623,
    793.3402860616761,
];

fn well_with(api: f64, total: f64, increment: f64, angle: f64) -> Well {
    Well::new(
        WellGeometry::new(inch(2.5), ft(total), ft(increment), deg(angle), 0.0006).unwrap(),
        FluidDescription::new(500.0, 0.5, api, 0.7, 1.05, degf(100.0), psi(100.0)).unwrap(),
        ThermalProfile::new(degf(120.0), degf(180.0)).unwrap(),
        psi(200.0),
    )
    .unwrap()
}

fn reference_well() -> Well {
    well_with(35.0, 5000.0, 500.0, 90.0)
}

#[test]
fn regression_profile_at_500_stb_d() {
    let t = march_to_depth(&reference_well(), 500.0, &TraverseConfig::default()).unwrap();

    assert_eq!(t.len(), 11);
    assert_eq!(t.depths(), (0..=10).map(|i| i as f64 * 500.0).collect::<Vec<_>>());
    assert!(t.is_converged());
    assert_eq!(t.shortfall_ft(), 0.0);

    for (got, want) in t.pressures().iter().zip(REFERENCE_PRESSURES) {
        assert!((got - want).abs() < 0.5, "got {got}, want {want}");
    }
    assert!(t.pressures().windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn temperature_is_linear_in_depth() {
    let t = march_to_depth(&reference_well(), 500.0, &TraverseConfig::default()).unwrap();
    for node in t.nodes() {
        let expected = 120.0 + 60.0 * node.depth_ft / 5000.0;
        assert!((node.temperature_f - expected).abs() < 1e-9);
    }
}

#[test]
fn heavy_oil_uses_its_own_correlations() {
    let p = final_pressure(&well_with(25.0, 5000.0, 500.0, 90.0), 500.0, &Default::default())
        .unwrap();
    assert!((p - 866.7580094291939).abs() < 0.5, "p = {p}");
}

#[test]
fn trickle_rate_is_nearly_hydrostatic() {
    let p = final_pressure(&reference_well(), 1e-4, &TraverseConfig::default()).unwrap();
    assert!((p - 2052.920234497481).abs() < 1.0, "p = {p}");
}

#[test]
fn zero_rate_is_hydrostatic() {
    let t = march_to_depth(&reference_well(), 0.0, &TraverseConfig::default()).unwrap();

    assert!(t.is_converged());
    assert_eq!(t.default_friction_steps(), 10);
    for node in &t.nodes()[1..] {
        assert_eq!(node.regime, Some(FlowRegime::BubbleSlug));
        assert_eq!(node.holdup, Some(1.0));
    }
    // Same column of liquid as the trickle case, without the gas
    let trickle = final_pressure(&reference_well(), 1e-4, &TraverseConfig::default()).unwrap();
    assert!((t.bottomhole_pressure() - trickle).abs() < 5.0);
}

#[test]
fn single_traverse_delegates_to_march() {
    let cfg = TraverseConfig::default();
    let w = reference_well();
    assert_eq!(single_traverse(&w, 500.0, &cfg).unwrap(), march_to_depth(&w, 500.0, &cfg).unwrap());
}

#[test]
fn increment_longer_than_well_is_rejected() {
    let geometry = WellGeometry::new(inch(2.5), ft(400.0), ft(500.0), deg(90.0), 0.0006);
    assert!(geometry.is_err());
}

#[test]
fn traverse_serializes_to_json() {
    let t = march_to_depth(&reference_well(), 500.0, &TraverseConfig::default()).unwrap();
    let value = serde_json::to_value(&t).unwrap();
    assert_eq!(value["nodes"].as_array().map(Vec::len), Some(11));
    assert_eq!(value["nodes"][0]["regime"], serde_json::Value::Null);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn node_count_and_depth_order(total in 1000.0f64..8000.0, increment in 100.0f64..1000.0) {
        let w = well_with(35.0, total, increment, 90.0);
        let t = march_to_depth(&w, 500.0, &TraverseConfig::default()).unwrap();

        let expected = (total / increment).floor() as usize + 1;
        prop_assert_eq!(t.len(), expected);
        prop_assert!(t.depths().windows(2).all(|d| d[1] > d[0]));
        prop_assert!(t.shortfall_ft() >= 0.0 && t.shortfall_ft() < increment);
    }

    #[test]
    fn vertical_pressure_never_decreases(rate in 0.0f64..2000.0) {
        let t = march_to_depth(&reference_well(), rate, &TraverseConfig::default()).unwrap();
        prop_assert!(t.pressures().windows(2).all(|p| p[1] >= p[0]));
    }

    #[test]
    fn partial_final_step_lands_on_total_depth(total in 600.0f64..6000.0) {
        let cfg = TraverseConfig {
            final_increment: FinalIncrement::Partial,
            ..Default::default()
        };
        let t = march_to_depth(&well_with(35.0, total, 500.0, 90.0), 500.0, &cfg).unwrap();
        let last = t.depths().last().copied().unwrap();
        prop_assert!((last - total).abs() < 1e-6);
        prop_assert!(t.shortfall_ft() < 1e-6);
    }
}
