//! Fluid property errors.

use thiserror::Error;
use wf_core::WfError;

/// Result type for fluid operations.
pub type PvtResult<T> = Result<T, PvtError>;

/// Errors raised while describing a fluid.
///
/// Property evaluation itself never fails; these only guard construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PvtError {
    /// Non-physical values (negative gravity, ratio, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

impl From<WfError> for PvtError {
    fn from(err: WfError) -> Self {
        match err {
            WfError::NonFinite { what, .. } => PvtError::InvalidArg { what },
            WfError::InvalidArg { what } => PvtError::NonPhysical { what },
            WfError::Invariant { what } => PvtError::InvalidArg { what },
        }
    }
}

impl From<PvtError> for WfError {
    fn from(err: PvtError) -> Self {
        match err {
            PvtError::NonPhysical { what } => WfError::Invariant { what },
            PvtError::InvalidArg { what } => WfError::InvalidArg { what },
        }
    }
}
