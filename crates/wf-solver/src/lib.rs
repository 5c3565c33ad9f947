//! Pressure traverse and vertical lift performance solver.
//!
//! This crate marches pressure and temperature from the wellhead down to total
//! depth in fixed increments. Each increment solves for the pressure drop that is
//! consistent with the two-phase gradient evaluated at mid-step conditions, by
//! fixed-point iteration on fresh PVT properties. A sweep driver runs the march
//! either once (full depth/pressure profile) or for many flow rates (lift curve).

pub mod config;
pub mod error;
pub mod march;
pub mod sweep;
pub mod thermal;
pub mod traverse;
pub mod vlp;
pub mod well;

pub use config::{FinalIncrement, TraverseConfig};
pub use error::{SolverError, SolverResult};
pub use march::{Step, StepOutcome, final_pressure, march_to_depth, solve_step};
pub use sweep::{RateSpacing, RateSweep};
pub use thermal::ThermalProfile;
pub use traverse::{StepConvergence, Traverse, TraverseNode};
pub use vlp::{VlpCurve, VlpPoint, single_traverse, vlp_curve};
pub use well::Well;
