//! Linear flowing temperature profile.

use crate::error::SolverResult;
use wf_core::numeric::ensure_finite;
use wf_core::units::{Temperature, as_degf};

/// Wellhead (outlet) and bottomhole (inlet) flowing temperatures.
///
/// Temperature varies linearly with measured depth between the two.
#[derive(Debug, Clone, PartialEq)]
pub struct ThermalProfile {
    pub wellhead_temperature: Temperature,
    pub bottomhole_temperature: Temperature,
}

impl ThermalProfile {
    pub fn new(wellhead: Temperature, bottomhole: Temperature) -> SolverResult<Self> {
        let profile = Self {
            wellhead_temperature: wellhead,
            bottomhole_temperature: bottomhole,
        };
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> SolverResult<()> {
        ensure_finite(self.wellhead_f(), "wellhead temperature")?;
        ensure_finite(self.bottomhole_f(), "bottomhole temperature")?;
        Ok(())
    }

    pub fn wellhead_f(&self) -> f64 {
        as_degf(self.wellhead_temperature)
    }

    pub fn bottomhole_f(&self) -> f64 {
        as_degf(self.bottomhole_temperature)
    }

    /// Temperature gradient (°F/ft) over `total_length_ft`.
    pub fn gradient(&self, total_length_ft: f64) -> f64 {
        (self.bottomhole_f() - self.wellhead_f()) / total_length_ft
    }
}
