//! Gas correlations.
//!
//! The compressibility factor is a closed-form fit in pseudo-reduced temperature and
//! pressure (no iteration), with Sutton-style pseudo-critical properties from gas
//! gravity. Viscosity follows Lee-Gonzalez-Eakin.

use wf_core::units::constants::{AIR_MOLECULAR_WEIGHT, GAS_CONSTANT, RANKINE_OFFSET};

/// Apparent molecular weight per unit gas gravity used by the viscosity fit.
const MW_PER_GRAVITY: f64 = 29.0;

/// Gas properties at one (pressure, temperature) condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasProperties {
    /// Pseudo-reduced temperature
    pub reduced_temperature: f64,
    /// Pseudo-reduced pressure
    pub reduced_pressure: f64,
    /// Compressibility factor
    pub z: f64,
    /// Density (lbm/ft³)
    pub density: f64,
    /// Formation volume factor (ft³/scf)
    pub fvf: f64,
    /// Viscosity (cp)
    pub viscosity: f64,
}

impl GasProperties {
    pub fn evaluate(p_psia: f64, t_f: f64, gas_gravity: f64) -> Self {
        let t_r = t_f + RANKINE_OFFSET;
        let (tpc, ppc) = pseudo_critical(gas_gravity);
        let tr = t_r / tpc;
        let pr = p_psia / ppc;
        let z = z_factor(tr, pr);

        let density = 2.7 * gas_gravity * p_psia / (t_r * z);
        let fvf = 0.0283 * z * t_r / p_psia;
        let viscosity = viscosity(t_f, gas_gravity, density);

        Self {
            reduced_temperature: tr,
            reduced_pressure: pr,
            z,
            density,
            fvf,
            viscosity,
        }
    }

    /// Density of air at the same pressure, temperature and Z-factor (lbm/ft³).
    pub fn air_density(&self, p_psia: f64, t_f: f64) -> f64 {
        AIR_MOLECULAR_WEIGHT * p_psia / (GAS_CONSTANT * self.z * (t_f + RANKINE_OFFSET))
    }
}

/// Pseudo-critical temperature (°R) and pressure (psia).
pub fn pseudo_critical(gas_gravity: f64) -> (f64, f64) {
    let tpc = gas_gravity * 314.8148 + 168.5185;
    let ppc = gas_gravity * (-47.619) + 700.4762;
    (tpc, ppc)
}

/// Closed-form compressibility factor.
///
/// Below `tr = 0.92` the leading square root has no real value and the result is NaN.
pub fn z_factor(tr: f64, pr: f64) -> f64 {
    let a = 1.39 * (tr - 0.92).sqrt() - 0.36 * tr - 0.101;
    let b = (0.62 - 0.23 * tr) * pr
        + (0.066 / (tr - 0.86) - 0.037) * pr.powi(2)
        + 0.32 * pr.powi(6) / 10f64.powf(9.0 * (tr - 1.0));
    let c = 0.132 - 0.32 * tr.log10();
    let d = 10f64.powf(0.3106 - 0.49 * tr + 0.1824 * tr.powi(2));
    a + (1.0 - a) * (-b).exp() + c * pr.powf(d)
}

/// Lee-Gonzalez-Eakin gas viscosity (cp).
pub fn viscosity(t_f: f64, gas_gravity: f64, density: f64) -> f64 {
    let t_r = t_f + RANKINE_OFFSET;
    let mw = MW_PER_GRAVITY * gas_gravity;
    let x = 3.5 + 986.0 / t_r + 0.01 * mw;
    let lambda = 2.4 - 0.2 * x;
    let k = (9.4 + 0.02 * mw) * t_r.powf(1.5) / (209.0 + 19.0 * mw + t_r);
    k * 1e-4 * (x * (0.01602 * density).powf(lambda)).exp()
}
