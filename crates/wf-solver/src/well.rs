//! Complete well description consumed by the marcher.

use crate::error::{SolverError, SolverResult};
use crate::thermal::ThermalProfile;
use wf_core::units::{Pressure, as_psi};
use wf_flow::WellGeometry;
use wf_pvt::FluidDescription;

/// Geometry, fluid, temperature profile and wellhead boundary pressure.
///
/// Read-only for the duration of a solve and shared across lift-curve rates.
#[derive(Debug, Clone, PartialEq)]
pub struct Well {
    pub geometry: WellGeometry,
    pub fluid: FluidDescription,
    pub thermal: ThermalProfile,
    /// Flowing wellhead pressure (absolute)
    pub wellhead_pressure: Pressure,
}

impl Well {
    pub fn new(
        geometry: WellGeometry,
        fluid: FluidDescription,
        thermal: ThermalProfile,
        wellhead_pressure: Pressure,
    ) -> SolverResult<Self> {
        let well = Self {
            geometry,
            fluid,
            thermal,
            wellhead_pressure,
        };
        well.validate()?;
        Ok(well)
    }

    /// Validate every part; called again before each march since fields are public.
    pub fn validate(&self) -> SolverResult<()> {
        self.geometry.validate()?;
        self.fluid.validate()?;
        self.thermal.validate()?;
        let pwh = self.wellhead_pressure_psi();
        if !(pwh.is_finite() && pwh > 0.0) {
            return Err(SolverError::InvalidInput {
                what: format!("wellhead pressure must be positive, got {pwh} psia"),
            });
        }
        Ok(())
    }

    pub fn wellhead_pressure_psi(&self) -> f64 {
        as_psi(self.wellhead_pressure)
    }

    /// Temperature gradient along the tubing (°F/ft).
    pub fn temperature_gradient(&self) -> f64 {
        self.thermal.gradient(self.geometry.total_length_ft())
    }
}
