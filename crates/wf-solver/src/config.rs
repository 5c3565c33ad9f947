//! Traverse solver settings.

use crate::error::{SolverError, SolverResult};

/// Handling of a total length that is not a whole number of increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FinalIncrement {
    /// Stop after the last whole increment; the remainder is reported as shortfall.
    #[default]
    Truncate,
    /// Append one shorter step so the last node lands on total depth.
    Partial,
}

/// Fixed-point and marching configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct TraverseConfig {
    /// Iteration budget per depth step
    pub max_iterations: usize,
    /// Relative change in pressure drop accepted as converged
    pub tolerance: f64,
    /// Guard added to the previous pressure drop in the relative change
    pub epsilon: f64,
    /// Pressure drop seed for the first step (psi)
    pub initial_dp_psi: f64,
    pub final_increment: FinalIncrement,
    /// Run lift-curve rates on the rayon pool
    pub parallel: bool,
}

impl Default for TraverseConfig {
    fn default() -> Self {
        Self {
            max_iterations: 200,
            tolerance: 1e-3,
            epsilon: 1e-6,
            initial_dp_psi: 30.0,
            final_increment: FinalIncrement::Truncate,
            parallel: true,
        }
    }
}

impl TraverseConfig {
    pub fn validate(&self) -> SolverResult<()> {
        if self.max_iterations == 0 {
            return Err(SolverError::InvalidInput {
                what: "max_iterations must be at least 1".to_string(),
            });
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(SolverError::InvalidInput {
                what: format!("tolerance must be positive, got {}", self.tolerance),
            });
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(SolverError::InvalidInput {
                what: format!("epsilon must be positive, got {}", self.epsilon),
            });
        }
        if !self.initial_dp_psi.is_finite() {
            return Err(SolverError::InvalidInput {
                what: "initial pressure drop must be finite".to_string(),
            });
        }
        Ok(())
    }
}
