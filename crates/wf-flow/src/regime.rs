//! Local flow description and regime classification.

use crate::common::{clamp, gas_fraction};
use crate::geometry::WellGeometry;
use wf_core::units::constants::{FT3_PER_BBL, SECONDS_PER_DAY};
use wf_pvt::PvtSnapshot;

/// Floor for the bubble/slug boundary.
pub const MIN_REGIME_BOUNDARY: f64 = 0.13;

/// Two-phase flow regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlowRegime {
    /// Gas fraction below the regime boundary
    BubbleSlug,
    /// Everything above the boundary
    TransitionMist,
}

/// How a computed holdup was brought into `[no-slip fraction, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldupClamp {
    None,
    /// Raised to the no-slip liquid fraction
    NoSlip,
    /// Capped at one
    Unity,
}

/// Clamp a raw holdup into the physical range. NaN is passed through unchanged.
pub fn clamp_holdup(raw: f64, no_slip: f64) -> (f64, HoldupClamp) {
    if raw.is_nan() {
        (raw, HoldupClamp::None)
    } else if raw < no_slip {
        (no_slip, HoldupClamp::NoSlip)
    } else if raw > 1.0 {
        (1.0, HoldupClamp::Unity)
    } else {
        (clamp(raw, no_slip, 1.0), HoldupClamp::None)
    }
}

/// In-situ volumetric rates and velocities at one location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalFlow {
    /// Liquid rate at local conditions (ft³/day)
    pub liquid_rate: f64,
    /// Free gas rate at local conditions (ft³/day)
    pub gas_rate: f64,
    /// Gas fraction of the total in-situ rate
    pub gas_fraction: f64,
    /// No-slip liquid fraction
    pub no_slip_holdup: f64,
    /// Superficial liquid velocity (ft/s)
    pub usl: f64,
    /// Superficial gas velocity (ft/s)
    pub usg: f64,
    /// Mixture velocity (ft/s)
    pub um: f64,
    /// Bubble/slug boundary on gas fraction
    pub boundary: f64,
}

impl LocalFlow {
    /// Local rates for `rate_stb_d` of stock-tank oil.
    pub fn new(rate_stb_d: f64, pvt: &PvtSnapshot, geometry: &WellGeometry) -> Self {
        let area = geometry.area_ft2();
        let liquid_rate = (pvt.water_oil_ratio + pvt.oil_fvf) * rate_stb_d * FT3_PER_BBL;
        let gas_rate = pvt.gas_fvf * pvt.free_gor() * rate_stb_d;

        let fg = gas_fraction(gas_rate, liquid_rate);
        let usg = gas_rate / (area * SECONDS_PER_DAY);
        let usl = liquid_rate / (area * SECONDS_PER_DAY);
        let um = usg + usl;
        let boundary = regime_boundary(um, geometry.diameter_ft());

        Self {
            liquid_rate,
            gas_rate,
            gas_fraction: fg,
            no_slip_holdup: 1.0 - fg,
            usl,
            usg,
            um,
            boundary,
        }
    }

    pub fn regime(&self) -> FlowRegime {
        if self.gas_fraction < self.boundary {
            FlowRegime::BubbleSlug
        } else {
            FlowRegime::TransitionMist
        }
    }
}

/// Bubble/slug boundary as a function of mixture velocity (ft/s) and diameter (ft).
pub fn regime_boundary(um: f64, diameter_ft: f64) -> f64 {
    (1.071 - 0.2218 * um.powi(2) / diameter_ft).max(MIN_REGIME_BOUNDARY)
}
