//! Liquid holdup and pressure gradient for the two flow regimes.
//!
//! Bubble/slug flow uses a constant slip velocity and a liquid-only friction term.
//! Transition/mist flow uses Hagedorn-Brown style dimensionless groups with polynomial
//! holdup fits and a two-phase friction term. Neither branch carries an acceleration
//! term.

use crate::friction::{FrictionFactor, chen_friction_factor};
use crate::geometry::WellGeometry;
use crate::regime::{FlowRegime, HoldupClamp, LocalFlow, clamp_holdup};
use wf_core::units::constants::{ATM_PSI, SECONDS_PER_DAY, SQ_IN_PER_SQ_FT};
use wf_pvt::PvtSnapshot;

/// Bubble-rise slip velocity (ft/s).
const SLIP_VELOCITY: f64 = 0.8;

/// Unit conversion in the friction term (lbm²/day² to psf·ft⁴).
const FRICTION_UNITS: f64 = 7.413e10;

/// Reynolds number prefactor for mass rate in lbm/day, diameter in ft, viscosity in cp.
const REYNOLDS_UNITS: f64 = 0.022;

/// Local pressure gradient and the quantities behind it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalGradient {
    /// Pressure gradient (psi/ft of measured length)
    pub gradient: f64,
    /// In-situ liquid holdup
    pub holdup: f64,
    pub regime: FlowRegime,
    pub holdup_clamp: HoldupClamp,
    pub friction: FrictionFactor,
    /// Holdup-weighted mixture density (lbm/ft³)
    pub mixture_density: f64,
    /// Elevation part of the gradient (psi/ft)
    pub elevation_gradient: f64,
    /// Friction part of the gradient (psi/ft)
    pub friction_gradient: f64,
    pub flow: LocalFlow,
}

/// Pressure gradient and holdup at the conditions captured in `pvt`.
///
/// Pure: neither the geometry nor the snapshot is modified.
pub fn gradient_and_holdup(
    rate_stb_d: f64,
    pvt: &PvtSnapshot,
    geometry: &WellGeometry,
) -> LocalGradient {
    let flow = LocalFlow::new(rate_stb_d, pvt, geometry);
    match flow.regime() {
        FlowRegime::BubbleSlug => bubble_slug(&flow, pvt, geometry),
        FlowRegime::TransitionMist => transition_mist(&flow, pvt, geometry),
    }
}

fn bubble_slug(flow: &LocalFlow, pvt: &PvtSnapshot, geometry: &WellGeometry) -> LocalGradient {
    let d = geometry.diameter_ft();
    let area = geometry.area_ft2();
    let rho_l = pvt.liquid_density;

    let ratio = 1.0 + flow.um / SLIP_VELOCITY;
    let raw = 1.0 - 0.5 * (ratio - (ratio.powi(2) - 4.0 * flow.usg / SLIP_VELOCITY).sqrt());
    let (holdup, holdup_clamp) = clamp_holdup(raw, flow.no_slip_holdup);

    let liquid_mass_rate = area * flow.usl * rho_l * SECONDS_PER_DAY;
    let reynolds = REYNOLDS_UNITS * liquid_mass_rate / (d * pvt.liquid_viscosity);
    let friction = chen_friction_factor(reynolds, geometry.roughness);

    let mixture_density = (1.0 - holdup) * pvt.gas_density + holdup * rho_l;
    let elevation_gradient = geometry.sin_inclination() * mixture_density / SQ_IN_PER_SQ_FT;
    let friction_gradient = friction.value * liquid_mass_rate.powi(2)
        / (FRICTION_UNITS * d.powi(5) * rho_l * holdup.powi(2))
        / SQ_IN_PER_SQ_FT;

    LocalGradient {
        gradient: elevation_gradient + friction_gradient,
        holdup,
        regime: FlowRegime::BubbleSlug,
        holdup_clamp,
        friction,
        mixture_density,
        elevation_gradient,
        friction_gradient,
        flow: *flow,
    }
}

/// Dimensionless groups for the transition/mist holdup fit.
#[derive(Debug, Clone, Copy, PartialEq)]
struct VelocityNumbers {
    liquid_velocity: f64,
    gas_velocity: f64,
    diameter: f64,
    liquid_viscosity: f64,
}

impl VelocityNumbers {
    fn new(flow: &LocalFlow, pvt: &PvtSnapshot, diameter_ft: f64) -> Self {
        let rho_l = pvt.liquid_density;
        let sigma = pvt.surface_tension;
        let quarter = (rho_l / sigma).powf(0.25);
        Self {
            liquid_velocity: 1.938 * flow.usl * quarter,
            gas_velocity: 1.938 * flow.usg * quarter,
            diameter: 120.872 * diameter_ft * (rho_l / sigma).sqrt(),
            liquid_viscosity: 0.15726
                * pvt.liquid_viscosity
                * (1.0 / (rho_l * sigma.powi(3))).powf(0.25),
        }
    }

    /// Viscosity number coefficient.
    fn cnl(&self) -> f64 {
        let nl = self.liquid_viscosity;
        7.9595 * nl.powi(6) - 13.144 * nl.powi(5) + 8.3825 * nl.powi(4) - 2.4629 * nl.powi(3)
            + 0.2213 * nl.powi(2)
            + 0.0473 * nl
            + 0.0018
    }

    /// Holdup over the secondary correction factor.
    fn holdup_over_psi(&self, p_psia: f64) -> f64 {
        let g = self.liquid_velocity * p_psia.powf(0.1) * self.cnl()
            / (self.gas_velocity.powf(0.575) * ATM_PSI.powf(0.1) * self.diameter);
        -3.44985871528755e15 * g.powi(6) + 56858620047687.2 * g.powi(5)
            - 368100995579.95 * g.powi(4)
            + 1189881753.18 * g.powi(3)
            - 2037716.09 * g.powi(2)
            + 1868.71 * g
            + 0.1
    }

    /// Secondary correction factor, floored at one.
    fn psi(&self) -> f64 {
        let g = self.gas_velocity * self.liquid_viscosity.powf(0.38) / self.diameter.powf(2.14);
        let psi = 116159.0 * g.powi(4) - 22251.0 * g.powi(3) + 1232.1 * g.powi(2) - 4.8183 * g
            + 0.9116;
        psi.max(1.0)
    }
}

fn transition_mist(flow: &LocalFlow, pvt: &PvtSnapshot, geometry: &WellGeometry) -> LocalGradient {
    let d = geometry.diameter_ft();
    let area = geometry.area_ft2();
    let rho_l = pvt.liquid_density;
    let rho_g = pvt.gas_density;

    let numbers = VelocityNumbers::new(flow, pvt, d);
    let raw = numbers.holdup_over_psi(pvt.pressure) * numbers.psi();
    let (holdup, holdup_clamp) = clamp_holdup(raw, flow.no_slip_holdup);

    let mixture_density = (1.0 - holdup) * rho_g + holdup * rho_l;
    let mass_rate = area * (flow.usl * rho_l + flow.usg * rho_g) * SECONDS_PER_DAY;
    let two_phase_viscosity =
        pvt.liquid_viscosity.powf(holdup) * pvt.gas_viscosity.powf(1.0 - holdup);
    let reynolds = REYNOLDS_UNITS * mass_rate / (d * two_phase_viscosity);
    let friction = chen_friction_factor(reynolds, geometry.roughness);

    let elevation_gradient = geometry.sin_inclination() * mixture_density / SQ_IN_PER_SQ_FT;
    let friction_gradient = friction.value * mass_rate.powi(2)
        / (FRICTION_UNITS * d.powi(5) * mixture_density)
        / SQ_IN_PER_SQ_FT;

    LocalGradient {
        gradient: elevation_gradient + friction_gradient,
        holdup,
        regime: FlowRegime::TransitionMist,
        holdup_clamp,
        friction,
        mixture_density,
        elevation_gradient,
        friction_gradient,
        flow: *flow,
    }
}
