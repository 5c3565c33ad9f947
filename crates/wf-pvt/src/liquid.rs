//! Water properties and water/oil liquid mixing.
//!
//! Mixing weights are the produced water and oil mass per stock-tank barrel of oil
//! (`WOR·ρw` and `Bo·ρo`), not phase fractions of the total stream.

use wf_core::units::constants::{FT3_PER_BBL, WATER_DENSITY_LBM_FT3};

/// Oil/gas interfacial tension (dyn/cm).
pub const OIL_SURFACE_TENSION: f64 = 30.0;
/// Water/gas interfacial tension (dyn/cm).
pub const WATER_SURFACE_TENSION: f64 = 74.0;

/// Density of gas-saturated oil (lbm/ft³).
pub fn live_oil_density(oil_sg: f64, fvf: f64, dissolved_gas_sg: f64, rs: f64) -> f64 {
    WATER_DENSITY_LBM_FT3 * oil_sg / fvf + 0.0764 * dissolved_gas_sg * rs / (fvf * FT3_PER_BBL)
}

/// Water density (lbm/ft³).
pub fn water_density(water_gravity: f64) -> f64 {
    WATER_DENSITY_LBM_FT3 * water_gravity
}

/// Water viscosity (cp).
pub fn water_viscosity(t_f: f64) -> f64 {
    (1.003 - 1.479e-2 * t_f + 1.982e-5 * t_f.powi(2)).exp()
}

/// Blended water/oil liquid properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiquidMix {
    /// Density (lbm/ft³)
    pub density: f64,
    /// Viscosity (cp)
    pub viscosity: f64,
    /// Gas/liquid surface tension (dyn/cm)
    pub surface_tension: f64,
}

impl LiquidMix {
    pub fn blend(
        wor: f64,
        oil_fvf: f64,
        oil_density: f64,
        water_density: f64,
        oil_viscosity: f64,
        water_viscosity: f64,
    ) -> Self {
        let water_mass = wor * water_density;
        let oil_mass = oil_fvf * oil_density;
        let water_weight = water_mass / (water_mass + oil_mass);
        let oil_weight = oil_mass / (water_mass + oil_mass);

        Self {
            density: (water_mass + oil_mass) / (wor + oil_fvf),
            viscosity: water_weight * water_viscosity + oil_weight * oil_viscosity,
            surface_tension: water_weight * WATER_SURFACE_TENSION
                + oil_weight * OIL_SURFACE_TENSION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dry_oil_blend_is_pure_oil() {
        let mix = LiquidMix::blend(0.0, 1.2, 48.0, 65.5, 1.5, 0.6);
        assert!((mix.density - 48.0).abs() < 1e-12);
        assert!((mix.viscosity - 1.5).abs() < 1e-12);
        assert!((mix.surface_tension - OIL_SURFACE_TENSION).abs() < 1e-12);
    }

    #[test]
    fn blend_sits_between_phases() {
        let mix = LiquidMix::blend(1.0, 1.2, 48.0, 65.5, 1.5, 0.6);
        assert!(mix.density > 48.0 && mix.density < 65.5);
        assert!(mix.viscosity > 0.6 && mix.viscosity < 1.5);
        assert!(mix.surface_tension > OIL_SURFACE_TENSION);
        assert!(mix.surface_tension < WATER_SURFACE_TENSION);
    }

    #[test]
    fn dead_stock_tank_oil_density() {
        let rho = live_oil_density(141.5 / 166.5, 1.0, 0.7, 0.0);
        assert!((rho - 62.4 * 141.5 / 166.5).abs() < 1e-12);
    }

    #[test]
    fn water_viscosity_near_one_cp_at_room_temperature() {
        let mu = water_viscosity(68.0);
        assert!(mu > 0.8 && mu < 1.2, "mu = {mu}");
        assert!(water_viscosity(180.0) < mu);
    }
}
