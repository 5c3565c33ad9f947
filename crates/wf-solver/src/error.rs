//! Error types for solver operations.

use thiserror::Error;
use wf_core::error::WfError;
use wf_flow::FlowError;
use wf_pvt::PvtError;

/// Errors that can occur while marching a traverse.
///
/// Numerical degeneracies inside a step (default friction factor, clamped holdup,
/// exhausted iteration budget) are recorded on the traverse, never raised here.
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Invalid input: {what}")]
    InvalidInput { what: String },

    #[error("Non-finite {what} at depth {depth_ft} ft")]
    NonFinite { depth_ft: f64, what: &'static str },

    #[error("Flow error: {0}")]
    Flow(#[from] FlowError),

    #[error("Fluid error: {0}")]
    Fluid(#[from] PvtError),
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<WfError> for SolverError {
    fn from(e: WfError) -> Self {
        SolverError::InvalidInput {
            what: e.to_string(),
        }
    }
}

impl From<SolverError> for WfError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::InvalidInput { what: _ } => WfError::InvalidArg { what: "solver input" },
            SolverError::NonFinite { what, .. } => WfError::Invariant { what },
            SolverError::Flow(inner) => inner.into(),
            SolverError::Fluid(inner) => inner.into(),
        }
    }
}
