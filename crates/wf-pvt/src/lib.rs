//! wf-pvt: black-oil fluid property correlations for wellflow.
//!
//! Provides:
//! - Fluid description (gas-liquid ratio, water cut, gravities, separator conditions)
//! - Oil correlations (bubble point, solution gas, formation volume factor, viscosity)
//!   grouped into two labelled coefficient sets keyed on API gravity
//! - Gas correlations (closed-form Z-factor, density, viscosity, formation volume factor)
//! - Liquid mixing (water/oil weighted density, viscosity and surface tension)
//! - [`PvtSnapshot`]: every property evaluated at one (pressure, temperature) pair
//!
//! All correlations work in oilfield units: psia, °F, lbm/ft³, cp, dyn/cm.
//!
//! # Example
//!
//! ```
//! use wf_core::units::{degf, psi};
//! use wf_pvt::{FluidDescription, evaluate};
//!
//! let fluid = FluidDescription::new(500.0, 0.5, 35.0, 0.7, 1.05, degf(100.0), psi(100.0)).unwrap();
//! let pvt = evaluate(1_000.0, 150.0, &fluid);
//! assert!(pvt.solution_gor <= fluid.total_gor());
//! ```

pub mod error;
pub mod fluid;
pub mod gas;
pub mod liquid;
pub mod oil;
pub mod snapshot;

// Re-exports for ergonomics
pub use error::{PvtError, PvtResult};
pub use fluid::FluidDescription;
pub use gas::GasProperties;
pub use liquid::LiquidMix;
pub use oil::{CorrelationSet, OilClass, OilProperties};
pub use snapshot::{PvtSnapshot, evaluate, evaluate_at};
