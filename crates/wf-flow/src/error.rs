//! Error types for flow-correlation inputs.

use thiserror::Error;
use wf_core::error::WfError;
use wf_pvt::PvtError;

/// Errors raised while building flow-correlation inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowError {
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Fluid error: {0}")]
    Fluid(#[from] PvtError),
}

pub type FlowResult<T> = Result<T, FlowError>;

impl From<WfError> for FlowError {
    fn from(e: WfError) -> Self {
        match e {
            WfError::NonFinite { what, .. } => FlowError::NonPhysical { what },
            WfError::InvalidArg { what } => FlowError::InvalidArg { what },
            WfError::Invariant { what } => FlowError::NonPhysical { what },
        }
    }
}

impl From<FlowError> for WfError {
    fn from(e: FlowError) -> Self {
        match e {
            FlowError::NonPhysical { what } => WfError::Invariant { what },
            FlowError::InvalidArg { what } => WfError::InvalidArg { what },
            FlowError::Fluid(inner) => inner.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FlowError::InvalidArg {
            what: "tubing diameter",
        };
        assert!(err.to_string().contains("tubing diameter"));
    }

    #[test]
    fn error_conversion() {
        let flow_err = FlowError::InvalidArg { what: "test" };
        let wf_err: WfError = flow_err.into();
        assert!(matches!(wf_err, WfError::InvalidArg { .. }));

        let fluid_err = FlowError::from(PvtError::InvalidArg { what: "oil API" });
        assert!(fluid_err.to_string().contains("oil API"));
    }
}
