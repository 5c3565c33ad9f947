//! Chen explicit approximation of the Colebrook friction factor.

/// Friction factor substituted when the correlation cannot be evaluated.
pub const DEFAULT_FRICTION_FACTOR: f64 = 0.02;

/// Where a friction factor value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrictionSource {
    /// Evaluated from the Chen equation
    Chen,
    /// Reynolds number was zero or negative
    DegenerateReynolds,
    /// Reynolds number was NaN or infinite; the value is NaN, not a default
    NonFiniteReynolds,
    /// Reynolds number was usable but the closed form produced a non-finite value
    NonFiniteResult,
}

/// Friction factor tagged with its source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrictionFactor {
    pub value: f64,
    pub source: FrictionSource,
}

impl FrictionFactor {
    fn fallback(source: FrictionSource) -> Self {
        Self {
            value: DEFAULT_FRICTION_FACTOR,
            source,
        }
    }

    /// True when the default value was substituted.
    pub fn is_default(&self) -> bool {
        matches!(
            self.source,
            FrictionSource::DegenerateReynolds | FrictionSource::NonFiniteResult
        )
    }
}

/// Chen friction factor for a Reynolds number and roughness.
///
/// The Reynolds number is checked explicitly; a non-positive value maps to
/// [`FrictionSource::DegenerateReynolds`] rather than attempting the evaluation.
/// A non-finite Reynolds number comes from non-finite fluid properties and is
/// passed on as a NaN factor so the gradient reports it.
pub fn chen_friction_factor(reynolds: f64, roughness: f64) -> FrictionFactor {
    if !reynolds.is_finite() {
        return FrictionFactor {
            value: f64::NAN,
            source: FrictionSource::NonFiniteReynolds,
        };
    }
    if reynolds <= 0.0 {
        return FrictionFactor::fallback(FrictionSource::DegenerateReynolds);
    }

    let inner = (roughness.powf(1.1098) / 2.8257 + (7.149 / reynolds).powf(0.8981)).log10();
    let arg = roughness / 3.7065 - (5.0452 / reynolds) * inner;
    let value = (1.0 / (-4.0 * arg.log10())).powi(2);

    if value.is_finite() {
        FrictionFactor {
            value,
            source: FrictionSource::Chen,
        }
    } else {
        FrictionFactor::fallback(FrictionSource::NonFiniteResult)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turbulent_smooth_pipe() {
        // Blasius-like magnitude (Fanning) around Re = 1e5
        let f = chen_friction_factor(1e5, 0.0);
        assert_eq!(f.source, FrictionSource::Chen);
        assert!(f.value > 0.004 && f.value < 0.005, "f = {}", f.value);
    }

    #[test]
    fn roughness_raises_friction() {
        let smooth = chen_friction_factor(1e5, 0.0).value;
        let rough = chen_friction_factor(1e5, 0.01).value;
        assert!(rough > smooth);
    }

    #[test]
    fn zero_reynolds_uses_default() {
        let f = chen_friction_factor(0.0, 0.0006);
        assert_eq!(f.value, DEFAULT_FRICTION_FACTOR);
        assert_eq!(f.source, FrictionSource::DegenerateReynolds);
        assert!(f.is_default());

        assert!(chen_friction_factor(-10.0, 0.0006).is_default());
    }

    #[test]
    fn nan_reynolds_is_not_masked() {
        let f = chen_friction_factor(f64::NAN, 0.0006);
        assert_eq!(f.source, FrictionSource::NonFiniteReynolds);
        assert!(f.value.is_nan());
        assert!(!f.is_default());
        assert!(chen_friction_factor(f64::INFINITY, 0.0006).value.is_nan());
    }

    #[test]
    fn tiny_reynolds_outside_closed_form() {
        let f = chen_friction_factor(1.0, 0.0);
        assert_eq!(f.source, FrictionSource::NonFiniteResult);
        assert_eq!(f.value, DEFAULT_FRICTION_FACTOR);
    }
}
