//! wf-flow: two-phase flow correlation for producing tubing.
//!
//! Provides:
//! - Tubing geometry (diameter, length, marching increment, inclination, roughness)
//! - Chen explicit friction factor with a tagged default for degenerate inputs
//! - Flow-regime split between bubble/slug and transition/mist flow
//! - Liquid holdup and local pressure gradient (psi/ft) for each regime
//!
//! The correlation is a pure function of local flow and a [`wf_pvt::PvtSnapshot`];
//! it carries no state between calls.
//!
//! # Example
//!
//! ```
//! use wf_core::units::{deg, degf, ft, inch, psi};
//! use wf_flow::{WellGeometry, gradient_and_holdup};
//! use wf_pvt::{FluidDescription, evaluate};
//!
//! let geometry = WellGeometry::new(inch(2.5), ft(5000.0), ft(500.0), deg(90.0), 0.0006).unwrap();
//! let fluid = FluidDescription::new(500.0, 0.5, 35.0, 0.7, 1.05, degf(100.0), psi(100.0)).unwrap();
//! let pvt = evaluate(215.0, 123.0, &fluid);
//! let local = gradient_and_holdup(500.0, &pvt, &geometry);
//! assert!(local.gradient > 0.0);
//! ```

pub mod common;
pub mod correlation;
pub mod error;
pub mod friction;
pub mod geometry;
pub mod regime;

// Re-exports
pub use correlation::{LocalGradient, gradient_and_holdup};
pub use error::{FlowError, FlowResult};
pub use friction::{DEFAULT_FRICTION_FACTOR, FrictionFactor, FrictionSource, chen_friction_factor};
pub use geometry::WellGeometry;
pub use regime::{FlowRegime, HoldupClamp, LocalFlow};
