//! Property snapshots checked against hand-verified reference values.

use proptest::prelude::*;
use wf_core::units::{degf, psi};
use wf_core::{Tolerances, nearly_equal};
use wf_pvt::{FluidDescription, OilClass, evaluate, evaluate_at};

fn fluid(api: f64) -> FluidDescription {
    FluidDescription::new(500.0, 0.5, api, 0.7, 1.05, degf(100.0), psi(100.0)).unwrap()
}

fn assert_close(actual: f64, expected: f64, what: &str) {
    let tol = Tolerances {
        abs: 1e-12,
        rel: 1e-6,
    };
    assert!(
        nearly_equal(actual, expected, tol),
        "{what}: {actual} != {expected}"
    );
}

#[test]
fn light_oil_below_bubble_point() {
    let pvt = evaluate(1_000.0, 150.0, &fluid(35.0));

    assert_eq!(pvt.oil_class, OilClass::Light);
    assert!(pvt.is_saturated());
    assert!(pvt.oil_compressibility.is_none());
    assert_close(pvt.bubble_point, 3337.4714617765635, "Pb");
    assert_close(pvt.solution_gor, 179.37611709193072, "Rs");
    assert_close(pvt.oil_fvf, 1.1323149935554124, "Bo");
    assert_close(pvt.dead_oil_viscosity, 3.184698860558626, "mu_od");
    assert_close(pvt.oil_viscosity, 1.431862945968123, "mu_o");
    assert_close(pvt.z_factor, 0.8834165587516422, "Z");
    assert_close(pvt.gas_density, 3.507247656887941, "rho_g");
    assert_close(pvt.gas_fvf, 0.015250420053729598, "Bg");
    assert_close(pvt.gas_viscosity, 0.013738047044951514, "mu_g");
    assert_close(pvt.oil_density, 48.34291584976642, "rho_o");
    assert_close(pvt.liquid_density, 53.60448736569653, "rho_l");
    assert_close(pvt.water_viscosity, 0.46322147107907424, "mu_w");
    assert_close(pvt.liquid_viscosity, 1.0692011259638745, "mu_l");
    assert_close(pvt.surface_tension, 46.47371137191364, "sigma");
    assert!(pvt.is_finite());
}

#[test]
fn heavy_oil_uses_heavy_coefficients() {
    let pvt = evaluate(3_000.0, 150.0, &fluid(25.0));

    assert_eq!(pvt.oil_class, OilClass::Heavy);
    assert_close(pvt.bubble_point, 4674.923791914281, "Pb");
    assert_close(pvt.solution_gor, 461.69627437598376, "Rs");
    assert_close(pvt.oil_fvf, 1.2453477565632676, "Bo");
    assert_close(pvt.oil_viscosity, 1.5882228453911997, "mu_o");
    assert_close(pvt.z_factor, 0.8098980389272675, "Z");
    assert_close(pvt.liquid_density, 53.61532853752165, "rho_l");
    assert_close(pvt.liquid_viscosity, 1.1943772413289047, "mu_l");
}

#[test]
fn undersaturated_oil_carries_all_gas_in_solution() {
    let f = fluid(35.0);
    let pvt = evaluate(5_000.0, 150.0, &f);

    assert!(!pvt.is_saturated());
    assert_eq!(pvt.solution_gor, f.total_gor());
    assert_eq!(pvt.free_gor(), 0.0);
    assert!(pvt.oil_compressibility.is_some_and(|co| co > 0.0));
}

#[test]
fn typed_wrapper_matches_field_units() {
    let f = fluid(35.0);
    let a = evaluate(1_000.0, 150.0, &f);
    let b = evaluate_at(psi(1_000.0), degf(150.0), &f);
    assert_close(b.solution_gor, a.solution_gor, "Rs");
    assert_close(b.liquid_density, a.liquid_density, "rho_l");
}

proptest! {
    #[test]
    fn solution_gor_stays_within_total(
        p in 15.0_f64..8_000.0,
        t in 60.0_f64..300.0,
        api in 15.0_f64..55.0,
        glr in 0.0_f64..3_000.0,
    ) {
        let f = FluidDescription::new(glr, 0.5, api, 0.7, 1.05, degf(100.0), psi(100.0)).unwrap();
        let pvt = evaluate(p, t, &f);
        prop_assert!(pvt.solution_gor >= 0.0);
        prop_assert!(pvt.solution_gor <= f.total_gor());
        prop_assert!(pvt.free_gor() >= 0.0);
    }
}
