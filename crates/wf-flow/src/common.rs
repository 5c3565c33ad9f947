//! Common utilities for flow calculations.

/// Rates at or below this (ft³/day) are treated as no flow.
pub const EPSILON_RATE: f64 = 1e-12;

/// Gas fraction of the total in-situ volumetric rate, zero when nothing flows.
pub fn gas_fraction(gas_rate: f64, liquid_rate: f64) -> f64 {
    let total = gas_rate + liquid_rate;
    if total <= EPSILON_RATE {
        0.0
    } else {
        gas_rate / total
    }
}

/// Clamp a value between min and max.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
