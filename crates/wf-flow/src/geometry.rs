//! Tubing geometry.

use crate::error::{FlowError, FlowResult};
use wf_core::numeric::{ensure_finite, ensure_non_negative, ensure_positive};
use wf_core::units::{Angle, Length, as_ft, as_rad};

/// Relative slack on the step count, absorbing foot/metre round-off.
const STEP_COUNT_SLACK: f64 = 1e-9;

/// Lengths in feet are reported on a micro-foot grid.
const LENGTH_GRID_PER_FT: f64 = 1e6;

/// Leftover length below this is rounding, not a partial step (ft).
pub const MIN_LEFTOVER_FT: f64 = 1e-4;

/// Snap a length in feet onto the micro-foot grid.
fn snap_ft(v: f64) -> f64 {
    (v * LENGTH_GRID_PER_FT).round() / LENGTH_GRID_PER_FT
}

/// Producing tubing, fixed for a solver run.
///
/// Inclination is measured from horizontal, so 90° is a vertical well.
#[derive(Debug, Clone, PartialEq)]
pub struct WellGeometry {
    /// Tubing inner diameter
    pub diameter: Length,
    /// Measured length from wellhead to total depth
    pub total_length: Length,
    /// Marching increment
    pub increment: Length,
    /// Inclination from horizontal
    pub inclination: Angle,
    /// Pipe roughness as used by the friction correlation (dimensionless)
    pub roughness: f64,
}

impl WellGeometry {
    /// Create validated geometry.
    pub fn new(
        diameter: Length,
        total_length: Length,
        increment: Length,
        inclination: Angle,
        roughness: f64,
    ) -> FlowResult<Self> {
        let geometry = Self {
            diameter,
            total_length,
            increment,
            inclination,
            roughness,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Reject non-positive lengths and non-finite angle or roughness.
    pub fn validate(&self) -> FlowResult<()> {
        ensure_positive(self.diameter_ft(), "tubing diameter")?;
        ensure_positive(self.total_length_ft(), "total length")?;
        ensure_positive(self.increment_ft(), "depth increment")?;
        ensure_finite(as_rad(self.inclination), "inclination")?;
        ensure_non_negative(self.roughness, "roughness")?;
        if self.whole_steps() == 0 {
            return Err(FlowError::InvalidArg {
                what: "depth increment longer than total length",
            });
        }
        Ok(())
    }

    pub fn diameter_ft(&self) -> f64 {
        as_ft(self.diameter)
    }

    pub fn total_length_ft(&self) -> f64 {
        snap_ft(as_ft(self.total_length))
    }

    pub fn increment_ft(&self) -> f64 {
        snap_ft(as_ft(self.increment))
    }

    /// Flow area (ft²).
    pub fn area_ft2(&self) -> f64 {
        std::f64::consts::PI * self.diameter_ft().powi(2) / 4.0
    }

    /// Elevation change per unit measured length.
    pub fn sin_inclination(&self) -> f64 {
        as_rad(self.inclination).sin()
    }

    /// Number of whole increments that fit in the total length.
    ///
    /// Lengths that are an exact multiple of the increment before unit conversion
    /// still count as a whole number of steps.
    pub fn whole_steps(&self) -> usize {
        (self.total_length_ft() / self.increment_ft() + STEP_COUNT_SLACK).floor() as usize
    }

    /// Length left over after the whole increments (ft), zero below [`MIN_LEFTOVER_FT`].
    pub fn remainder_ft(&self) -> f64 {
        let covered = self.whole_steps() as f64 * self.increment_ft();
        let leftover = snap_ft(self.total_length_ft() - covered);
        if leftover < MIN_LEFTOVER_FT { 0.0 } else { leftover }
    }

    /// Measured depth (ft) at the bottom of whole increment `step`.
    ///
    /// The last whole increment lands exactly on total length when nothing is left over.
    pub fn node_depth_ft(&self, step: usize) -> f64 {
        let total = self.total_length_ft();
        if step >= self.whole_steps() && self.remainder_ft() == 0.0 {
            return total;
        }
        snap_ft(step as f64 * self.increment_ft()).min(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlowError;
    use wf_core::units::{deg, ft, inch};

    fn tubing(total: f64, inc: f64) -> WellGeometry {
        WellGeometry::new(inch(2.5), ft(total), ft(inc), deg(90.0), 0.0006).unwrap()
    }

    #[test]
    fn derived_quantities() {
        let g = tubing(5000.0, 500.0);
        assert!((g.diameter_ft() - 2.5 / 12.0).abs() < 1e-12);
        assert!((g.area_ft2() - 0.034088).abs() < 1e-6);
        assert!((g.sin_inclination() - 1.0).abs() < 1e-12);
        assert_eq!(g.whole_steps(), 10);
        assert!(g.remainder_ft() < 1e-9);
    }

    #[test]
    fn partial_remainder() {
        let g = tubing(5250.0, 500.0);
        assert_eq!(g.whole_steps(), 10);
        assert!((g.remainder_ft() - 250.0).abs() < 1e-6);
    }

    #[test]
    fn exact_multiple_survives_unit_round_off() {
        let g = tubing(15_850.0, 50.0);
        assert_eq!(g.whole_steps(), 317);
        assert!(g.remainder_ft() < 1e-6);
    }

    #[test]
    fn node_depths_sit_on_the_foot_grid() {
        let g = tubing(5000.0, 500.0);
        let depths: Vec<f64> = (1..=g.whole_steps()).map(|i| g.node_depth_ft(i)).collect();
        let expected: Vec<f64> = (1..=10).map(|i| i as f64 * 500.0).collect();
        assert_eq!(depths, expected);
        assert_eq!(g.increment_ft(), 500.0);
        assert_eq!(g.node_depth_ft(10), g.total_length_ft());
    }

    #[test]
    fn last_node_is_total_length_for_awkward_increment() {
        let g = tubing(1000.0, 1000.0 / 3.0);
        assert_eq!(g.whole_steps(), 3);
        assert_eq!(g.remainder_ft(), 0.0);
        assert_eq!(g.node_depth_ft(3), 1000.0);

        let g = tubing(15_850.0, 50.0);
        assert_eq!(g.node_depth_ft(317), 15_850.0);
        assert_eq!(g.node_depth_ft(1), 50.0);
    }

    #[test]
    fn rejects_non_positive_lengths() {
        let err = WellGeometry::new(inch(0.0), ft(5000.0), ft(500.0), deg(90.0), 0.0006)
            .unwrap_err();
        assert_eq!(
            err,
            FlowError::InvalidArg {
                what: "tubing diameter"
            }
        );
        assert!(WellGeometry::new(inch(2.5), ft(5000.0), ft(-1.0), deg(90.0), 0.0).is_err());
        assert!(WellGeometry::new(inch(2.5), ft(0.0), ft(500.0), deg(90.0), 0.0).is_err());
    }

    #[test]
    fn rejects_increment_longer_than_well() {
        let err = WellGeometry::new(inch(2.5), ft(400.0), ft(500.0), deg(90.0), 0.0006);
        assert!(matches!(err, Err(FlowError::InvalidArg { .. })));
        assert!(WellGeometry::new(inch(2.5), ft(500.0), ft(500.0), deg(90.0), 0.0006).is_ok());
    }

    #[test]
    fn rejects_negative_roughness() {
        assert!(WellGeometry::new(inch(2.5), ft(5000.0), ft(500.0), deg(90.0), -1e-4).is_err());
    }
}
