//! Full property snapshot at one (pressure, temperature) pair.

use crate::fluid::FluidDescription;
use crate::gas::GasProperties;
use crate::liquid::{LiquidMix, live_oil_density, water_density, water_viscosity};
use crate::oil::{OilClass, OilProperties};
use wf_core::units::{Pressure, Temperature, as_degf, as_psi};

/// Every fluid property evaluated at one local condition.
///
/// Derived-only and ephemeral: the marching solver rebuilds one per fixed-point
/// iteration. Values may be non-finite for conditions outside the correlations'
/// range (see [`PvtSnapshot::is_finite`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PvtSnapshot {
    /// Evaluation pressure (psia)
    pub pressure: f64,
    /// Evaluation temperature (°F)
    pub temperature: f64,
    /// Correlation set used for oil properties
    pub oil_class: OilClass,
    /// Water-oil ratio carried from the fluid description
    pub water_oil_ratio: f64,
    /// Total gas-oil ratio (scf/stb)
    pub total_gor: f64,
    /// Separator-corrected gas gravity
    pub corrected_gas_gravity: f64,
    /// Bubble-point pressure (psia)
    pub bubble_point: f64,
    /// Solution gas ratio (scf/stb)
    pub solution_gor: f64,
    /// Oil formation volume factor (rb/stb)
    pub oil_fvf: f64,
    /// Undersaturated oil compressibility (1/psi)
    pub oil_compressibility: Option<f64>,
    /// Gas compressibility factor
    pub z_factor: f64,
    /// Gas formation volume factor (ft³/scf)
    pub gas_fvf: f64,
    /// Densities (lbm/ft³)
    pub gas_density: f64,
    pub oil_density: f64,
    pub water_density: f64,
    pub liquid_density: f64,
    /// Viscosities (cp)
    pub gas_viscosity: f64,
    pub dead_oil_viscosity: f64,
    pub oil_viscosity: f64,
    pub water_viscosity: f64,
    pub liquid_viscosity: f64,
    /// Gas/liquid surface tension (dyn/cm)
    pub surface_tension: f64,
}

impl PvtSnapshot {
    /// True when the pressure is below the bubble point (free gas present in the oil).
    pub fn is_saturated(&self) -> bool {
        self.pressure < self.bubble_point
    }

    /// Free gas per stock-tank barrel of oil (scf/stb).
    pub fn free_gor(&self) -> f64 {
        self.total_gor - self.solution_gor
    }

    /// True when every property the flow correlation consumes is finite.
    pub fn is_finite(&self) -> bool {
        [
            self.oil_fvf,
            self.gas_fvf,
            self.gas_density,
            self.liquid_density,
            self.gas_viscosity,
            self.liquid_viscosity,
            self.surface_tension,
            self.solution_gor,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// Evaluate all properties at `p_psia` and `t_f` (°F).
pub fn evaluate(p_psia: f64, t_f: f64, fluid: &FluidDescription) -> PvtSnapshot {
    let api = fluid.oil_api;
    let gor = fluid.total_gor();
    let gas_sg = fluid.corrected_gas_gravity();
    let wor = fluid.water_oil_ratio;

    let oil = OilProperties::evaluate(p_psia, t_f, gor, gas_sg, api);
    let gas = GasProperties::evaluate(p_psia, t_f, fluid.gas_gravity);

    let dissolved_gas_sg = gas.density / gas.air_density(p_psia, t_f);
    let rho_o = live_oil_density(
        fluid.oil_specific_gravity(),
        oil.fvf,
        dissolved_gas_sg,
        oil.solution_gor,
    );
    let rho_w = water_density(fluid.water_gravity);
    let mu_w = water_viscosity(t_f);
    let liquid = LiquidMix::blend(wor, oil.fvf, rho_o, rho_w, oil.viscosity, mu_w);

    PvtSnapshot {
        pressure: p_psia,
        temperature: t_f,
        oil_class: oil.class,
        water_oil_ratio: wor,
        total_gor: gor,
        corrected_gas_gravity: gas_sg,
        bubble_point: oil.bubble_point,
        solution_gor: oil.solution_gor,
        oil_fvf: oil.fvf,
        oil_compressibility: oil.compressibility,
        z_factor: gas.z,
        gas_fvf: gas.fvf,
        gas_density: gas.density,
        oil_density: rho_o,
        water_density: rho_w,
        liquid_density: liquid.density,
        gas_viscosity: gas.viscosity,
        dead_oil_viscosity: oil.dead_viscosity,
        oil_viscosity: oil.viscosity,
        water_viscosity: mu_w,
        liquid_viscosity: liquid.viscosity,
        surface_tension: liquid.surface_tension,
    }
}

/// Typed-units wrapper around [`evaluate`].
pub fn evaluate_at(p: Pressure, t: Temperature, fluid: &FluidDescription) -> PvtSnapshot {
    evaluate(as_psi(p), as_degf(t), fluid)
}
