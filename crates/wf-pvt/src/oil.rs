//! Oil correlations: bubble point, solution gas, formation volume factor and viscosity.
//!
//! Solution gas and formation volume factor use Vasquez-Beggs style coefficients that
//! differ between heavy (API ≤ 30) and light (API > 30) crudes. Each coefficient set
//! lives in one [`CorrelationSet`] so the two branches can be audited side by side.
//! Viscosity follows Beggs-Robinson for dead and saturated oil with a Vasquez-Beggs
//! power law above the bubble point.

use wf_core::units::constants::RANKINE_OFFSET;

/// API gravity at or below which the heavy-oil coefficients apply.
pub const HEAVY_OIL_API_LIMIT: f64 = 30.0;

/// Oil gravity class selecting a correlation set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OilClass {
    /// API ≤ 30
    Heavy,
    /// API > 30
    Light,
}

impl OilClass {
    pub fn from_api(api: f64) -> Self {
        if api <= HEAVY_OIL_API_LIMIT {
            Self::Heavy
        } else {
            Self::Light
        }
    }

    pub fn correlations(self) -> &'static CorrelationSet {
        match self {
            Self::Heavy => &HEAVY,
            Self::Light => &LIGHT,
        }
    }
}

/// Coefficients for solution gas ratio and oil formation volume factor.
///
/// `Rs = γg · p^c2 · 10^(c3 · API/T) / c1`, inverted for the bubble point, and
/// `Bo = 1 + a1·Rs + a2·F + a3·Rs·F` with `F = (T − 60)·API/γg`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrelationSet {
    pub class: OilClass,
    pub c1: f64,
    pub c2: f64,
    pub c3: f64,
    pub a1: f64,
    pub a2: f64,
    pub a3: f64,
}

const HEAVY: CorrelationSet = CorrelationSet {
    class: OilClass::Heavy,
    c1: 27.64,
    c2: 1.0937,
    c3: 11.172,
    a1: 4.677e-4,
    a2: 1.751e-5,
    a3: -1.8106e-8,
};

const LIGHT: CorrelationSet = CorrelationSet {
    class: OilClass::Light,
    c1: 56.06,
    c2: 1.187,
    c3: 10.393,
    a1: 4.677e-4,
    a2: 1.1e-5,
    a3: -1.337e-9,
};

impl CorrelationSet {
    fn api_temperature_term(&self, api: f64, t_f: f64) -> f64 {
        10f64.powf(self.c3 * api / (t_f + RANKINE_OFFSET))
    }

    /// Bubble-point pressure (psia) for a given total gas-oil ratio.
    pub fn bubble_point(&self, gor: f64, gas_sg: f64, api: f64, t_f: f64) -> f64 {
        (self.c1 * gor / (gas_sg * self.api_temperature_term(api, t_f))).powf(1.0 / self.c2)
    }

    /// Solution gas ratio (scf/stb), clamped to `[0, gor]`.
    pub fn solution_gor(&self, p_psia: f64, gor: f64, gas_sg: f64, api: f64, t_f: f64) -> f64 {
        let rs = gas_sg * p_psia.powf(self.c2) * self.api_temperature_term(api, t_f) / self.c1;
        rs.max(0.0).min(gor)
    }

    /// Saturated formation volume factor (rb/stb) at solution gas `rs`.
    pub fn saturated_fvf(&self, rs: f64, gas_sg: f64, api: f64, t_f: f64) -> f64 {
        let f = (t_f - 60.0) * (api / gas_sg);
        1.0 + self.a1 * rs + self.a2 * f + self.a3 * rs * f
    }
}

/// Oil properties at one (pressure, temperature) condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OilProperties {
    pub class: OilClass,
    /// Bubble-point pressure (psia)
    pub bubble_point: f64,
    /// Solution gas ratio (scf/stb)
    pub solution_gor: f64,
    /// Formation volume factor (rb/stb)
    pub fvf: f64,
    /// Isothermal compressibility (1/psi), only above the bubble point
    pub compressibility: Option<f64>,
    /// Dead-oil viscosity (cp)
    pub dead_viscosity: f64,
    /// Live-oil viscosity (cp)
    pub viscosity: f64,
}

impl OilProperties {
    /// Evaluate oil properties once per PVT call, picking the correlation set up front.
    pub fn evaluate(p_psia: f64, t_f: f64, gor: f64, gas_sg: f64, api: f64) -> Self {
        let set = OilClass::from_api(api).correlations();

        let bubble_point = set.bubble_point(gor, gas_sg, api, t_f);
        let rs = set.solution_gor(p_psia, gor, gas_sg, api, t_f);

        let (fvf, compressibility) = if p_psia < bubble_point {
            (set.saturated_fvf(rs, gas_sg, api, t_f), None)
        } else {
            let bob = set.saturated_fvf(gor, gas_sg, api, t_f);
            let co = undersaturated_compressibility(p_psia, t_f, rs, gas_sg, api);
            (bob * (co * (bubble_point - p_psia)).exp(), Some(co))
        };

        let dead_viscosity = dead_oil_viscosity(api, t_f);
        let saturated = saturated_viscosity(dead_viscosity, rs);
        let viscosity = if p_psia <= bubble_point {
            saturated
        } else {
            let m = 2.6 * p_psia.powf(1.187) * (-11.513 - 8.98e-5 * p_psia).exp();
            saturated * (p_psia / bubble_point).powf(m)
        };

        Self {
            class: set.class,
            bubble_point,
            solution_gor: rs,
            fvf,
            compressibility,
            dead_viscosity,
            viscosity,
        }
    }
}

/// Undersaturated oil compressibility (1/psi).
fn undersaturated_compressibility(p_psia: f64, t_f: f64, rs: f64, gas_sg: f64, api: f64) -> f64 {
    (-1.433 + 5.0 * rs + 17.2 * t_f - 1.18 * gas_sg + 12.61 * api) / (p_psia * 1e5)
}

/// Beggs-Robinson dead-oil viscosity (cp).
pub fn dead_oil_viscosity(api: f64, t_f: f64) -> f64 {
    let z = 3.0324 - 0.02023 * api;
    let x = 10f64.powf(z) * t_f.powf(-1.163);
    10f64.powf(x) - 1.0
}

/// Beggs-Robinson live-oil viscosity (cp) at solution gas `rs`.
pub fn saturated_viscosity(dead_viscosity: f64, rs: f64) -> f64 {
    let a = 10.715 * (rs + 100.0).powf(-0.515);
    let b = 5.44 * (rs + 150.0).powf(-0.338);
    a * dead_viscosity.powf(b)
}
