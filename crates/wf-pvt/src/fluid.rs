//! Produced-fluid description.

use crate::error::PvtResult;
use crate::oil::OilClass;
use wf_core::numeric::{ensure_non_negative, ensure_positive};
use wf_core::units::{Pressure, Temperature, as_degf, as_psi, constants::ATM_PSI};

/// Separator pressure (psia) at which the reference gas gravity is reported.
const REFERENCE_SEPARATOR_PSIA: f64 = 114.7;

/// Produced fluid at stock-tank conditions.
///
/// Immutable for a solver run. Ratios are per stock-tank barrel of oil, gravities are
/// relative to water (liquids) or air (gas).
#[derive(Debug, Clone, PartialEq)]
pub struct FluidDescription {
    /// Producing gas-liquid ratio (scf/stb)
    pub gas_liquid_ratio: f64,
    /// Water-oil ratio (stb/stb)
    pub water_oil_ratio: f64,
    /// Oil gravity (°API)
    pub oil_api: f64,
    /// Gas specific gravity (air = 1)
    pub gas_gravity: f64,
    /// Water specific gravity (fresh water = 1)
    pub water_gravity: f64,
    /// Separator temperature
    pub separator_temperature: Temperature,
    /// Separator pressure (gauge)
    pub separator_pressure: Pressure,
}

impl FluidDescription {
    /// Create a validated fluid description.
    pub fn new(
        gas_liquid_ratio: f64,
        water_oil_ratio: f64,
        oil_api: f64,
        gas_gravity: f64,
        water_gravity: f64,
        separator_temperature: Temperature,
        separator_pressure: Pressure,
    ) -> PvtResult<Self> {
        let fluid = Self {
            gas_liquid_ratio,
            water_oil_ratio,
            oil_api,
            gas_gravity,
            water_gravity,
            separator_temperature,
            separator_pressure,
        };
        fluid.validate()?;
        Ok(fluid)
    }

    /// Check that every field is finite and physically meaningful.
    pub fn validate(&self) -> PvtResult<()> {
        ensure_non_negative(self.gas_liquid_ratio, "gas-liquid ratio")?;
        ensure_non_negative(self.water_oil_ratio, "water-oil ratio")?;
        ensure_positive(self.oil_api, "oil API gravity")?;
        ensure_positive(self.gas_gravity, "gas specific gravity")?;
        ensure_positive(self.water_gravity, "water specific gravity")?;
        wf_core::ensure_finite(self.separator_temperature_f(), "separator temperature")?;
        ensure_positive(
            self.separator_pressure_psi() + ATM_PSI,
            "separator absolute pressure",
        )?;
        Ok(())
    }

    pub fn separator_temperature_f(&self) -> f64 {
        as_degf(self.separator_temperature)
    }

    pub fn separator_pressure_psi(&self) -> f64 {
        as_psi(self.separator_pressure)
    }

    /// Oil specific gravity from API gravity.
    pub fn oil_specific_gravity(&self) -> f64 {
        141.5 / (self.oil_api + 131.5)
    }

    /// Total gas-oil ratio (scf/stb of oil) implied by the gas-liquid ratio and water cut.
    pub fn total_gor(&self) -> f64 {
        self.gas_liquid_ratio * (self.water_oil_ratio + 1.0)
    }

    /// Gas gravity corrected to a 100 psig reference separator.
    pub fn corrected_gas_gravity(&self) -> f64 {
        let p_ratio = (self.separator_pressure_psi() + ATM_PSI) / REFERENCE_SEPARATOR_PSIA;
        self.gas_gravity
            * (1.0 + 5.912e-5 * self.oil_api * self.separator_temperature_f() * p_ratio.log10())
    }

    /// Correlation set selected by API gravity.
    pub fn oil_class(&self) -> OilClass {
        OilClass::from_api(self.oil_api)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PvtError;
    use wf_core::units::{degf, psi};

    fn fluid() -> FluidDescription {
        FluidDescription::new(500.0, 0.5, 35.0, 0.7, 1.05, degf(100.0), psi(100.0)).unwrap()
    }

    #[test]
    fn derived_ratios() {
        let f = fluid();
        assert!((f.total_gor() - 750.0).abs() < 1e-9);
        assert!((f.oil_specific_gravity() - 141.5 / 166.5).abs() < 1e-12);
    }

    #[test]
    fn reference_separator_leaves_gas_gravity_unchanged() {
        let f = fluid();
        assert!((f.corrected_gas_gravity() - 0.7).abs() < 1e-9);
    }

    #[test]
    fn low_pressure_separator_reduces_gravity() {
        let mut f = fluid();
        f.separator_pressure = psi(50.0);
        assert!(f.corrected_gas_gravity() < 0.7);
    }

    #[test]
    fn rejects_negative_ratio() {
        let err = FluidDescription::new(-1.0, 0.5, 35.0, 0.7, 1.05, degf(100.0), psi(100.0))
            .unwrap_err();
        assert_eq!(
            err,
            PvtError::NonPhysical {
                what: "gas-liquid ratio"
            }
        );
    }

    #[test]
    fn rejects_nan_gravity() {
        let err = FluidDescription::new(500.0, 0.5, 35.0, f64::NAN, 1.05, degf(100.0), psi(100.0))
            .unwrap_err();
        assert!(matches!(err, PvtError::InvalidArg { .. }));
    }

    #[test]
    fn class_follows_api() {
        assert_eq!(fluid().oil_class(), OilClass::Light);
        let mut heavy = fluid();
        heavy.oil_api = 30.0;
        assert_eq!(heavy.oil_class(), OilClass::Heavy);
    }
}
