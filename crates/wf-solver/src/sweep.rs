//! Flow-rate sweep generation for lift curves.

use crate::error::{SolverError, SolverResult};
use std::fmt;

/// Spacing of generated rates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RateSpacing {
    /// Uniformly spaced points
    Linear,
    /// Logarithmically spaced points
    Logarithmic,
}

/// Range of flow rates (stb/d) to evaluate. Built only through [`RateSweep::new`],
/// so a sweep always has at least two distinct non-negative bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct RateSweep {
    start: f64,
    end: f64,
    num_points: usize,
    spacing: RateSpacing,
}

impl RateSweep {
    pub fn new(start: f64, end: f64, num_points: usize, spacing: RateSpacing) -> SolverResult<Self> {
        if num_points < 2 {
            return Err(SolverError::InvalidInput {
                what: "rate sweep must have at least 2 points".to_string(),
            });
        }
        if !(start.is_finite() && end.is_finite()) || start < 0.0 || end < 0.0 {
            return Err(SolverError::InvalidInput {
                what: format!("rate sweep bounds must be non-negative, got {start}..{end}"),
            });
        }
        if (start - end).abs() < 1e-12 {
            return Err(SolverError::InvalidInput {
                what: "rate sweep start and end must be different".to_string(),
            });
        }

        Ok(Self {
            start,
            end,
            num_points,
            spacing,
        })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    /// Number of points to generate
    pub fn num_points(&self) -> usize {
        self.num_points
    }

    pub fn spacing(&self) -> RateSpacing {
        self.spacing
    }

    /// Generate all rates in the sweep.
    pub fn generate_points(&self) -> Vec<f64> {
        match self.spacing {
            RateSpacing::Linear => self.generate_linear(),
            RateSpacing::Logarithmic => self.generate_logarithmic(),
        }
    }

    fn generate_linear(&self) -> Vec<f64> {
        let delta = (self.end - self.start) / (self.num_points - 1) as f64;
        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| self.start + i as f64 * delta)
            .collect();

        // Ensure exact endpoint
        points[self.num_points - 1] = self.end;
        points
    }

    fn generate_logarithmic(&self) -> Vec<f64> {
        // Zero rate has no logarithm
        if self.start <= 0.0 || self.end <= 0.0 {
            return self.generate_linear();
        }

        let log_start = self.start.ln();
        let log_delta = (self.end.ln() - log_start) / (self.num_points - 1) as f64;
        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| (log_start + i as f64 * log_delta).exp())
            .collect();

        // Ensure exact endpoints
        points[0] = self.start;
        points[self.num_points - 1] = self.end;
        points
    }
}

impl fmt::Display for RateSpacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Logarithmic => write!(f, "Logarithmic"),
        }
    }
}

impl fmt::Display for RateSweep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rates from {} to {} stb/d ({} points, {})",
            self.start, self.end, self.num_points, self.spacing
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_sweep_generation() {
        let sweep = RateSweep::new(100.0, 500.0, 5, RateSpacing::Linear).unwrap();
        let points = sweep.generate_points();
        assert_eq!(points, vec![100.0, 200.0, 300.0, 400.0, 500.0]);
    }

    #[test]
    fn logarithmic_sweep_generation() {
        let sweep = RateSweep::new(10.0, 1000.0, 3, RateSpacing::Logarithmic).unwrap();
        let points = sweep.generate_points();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], 10.0);
        assert!((points[1] - 100.0).abs() < 1e-9);
        assert_eq!(points[2], 1000.0);
    }

    #[test]
    fn logarithmic_from_zero_falls_back_to_linear() {
        let sweep = RateSweep::new(0.0, 1000.0, 3, RateSpacing::Logarithmic).unwrap();
        assert_eq!(sweep.generate_points(), vec![0.0, 500.0, 1000.0]);
    }

    #[test]
    fn descending_sweep_keeps_order() {
        let sweep = RateSweep::new(900.0, 100.0, 3, RateSpacing::Linear).unwrap();
        assert_eq!(sweep.generate_points(), vec![900.0, 500.0, 100.0]);
    }

    #[test]
    fn reject_invalid_point_count() {
        assert!(RateSweep::new(100.0, 500.0, 1, RateSpacing::Linear).is_err());
        assert!(RateSweep::new(100.0, 500.0, 0, RateSpacing::Logarithmic).is_err());
    }

    #[test]
    fn smallest_sweep_has_both_endpoints() {
        let sweep = RateSweep::new(100.0, 500.0, 2, RateSpacing::Logarithmic).unwrap();
        assert_eq!(sweep.num_points(), 2);
        assert_eq!(sweep.spacing(), RateSpacing::Logarithmic);
        assert_eq!(sweep.generate_points(), vec![sweep.start(), sweep.end()]);
    }

    #[test]
    fn reject_identical_bounds() {
        assert!(RateSweep::new(300.0, 300.0, 5, RateSpacing::Linear).is_err());
    }

    #[test]
    fn reject_negative_bounds() {
        assert!(RateSweep::new(-10.0, 300.0, 5, RateSpacing::Linear).is_err());
    }

    #[test]
    fn display() {
        let sweep = RateSweep::new(100.0, 500.0, 5, RateSpacing::Linear).unwrap();
        assert_eq!(sweep.to_string(), "Rates from 100 to 500 stb/d (5 points, Linear)");
    }
}
