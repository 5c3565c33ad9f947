// wf-core/src/units.rs

use uom::si::f64::{
    Angle as UomAngle, Length as UomLength, Pressure as UomPressure,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (f64)
pub type Angle = UomAngle;
pub type Length = UomLength;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn psi(v: f64) -> Pressure {
    use uom::si::pressure::pound_force_per_square_inch;
    Pressure::new::<pound_force_per_square_inch>(v)
}

#[inline]
pub fn ft(v: f64) -> Length {
    use uom::si::length::foot;
    Length::new::<foot>(v)
}

#[inline]
pub fn inch(v: f64) -> Length {
    use uom::si::length::inch;
    Length::new::<inch>(v)
}

#[inline]
pub fn degf(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_fahrenheit;
    Temperature::new::<degree_fahrenheit>(v)
}

#[inline]
pub fn deg(v: f64) -> Angle {
    use uom::si::angle::degree;
    Angle::new::<degree>(v)
}

#[inline]
pub fn as_psi(p: Pressure) -> f64 {
    use uom::si::pressure::pound_force_per_square_inch;
    p.get::<pound_force_per_square_inch>()
}

#[inline]
pub fn as_ft(l: Length) -> f64 {
    use uom::si::length::foot;
    l.get::<foot>()
}

#[inline]
pub fn as_degf(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::degree_fahrenheit;
    t.get::<degree_fahrenheit>()
}

#[inline]
pub fn as_rad(a: Angle) -> f64 {
    use uom::si::angle::radian;
    a.get::<radian>()
}

/// Oilfield constants shared by the correlations.
pub mod constants {
    /// Cubic feet per stock-tank barrel.
    pub const FT3_PER_BBL: f64 = 5.615;
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
    /// Standard atmosphere in psi.
    pub const ATM_PSI: f64 = 14.7;
    /// Offset from degrees Fahrenheit to degrees Rankine.
    pub const RANKINE_OFFSET: f64 = 460.0;
    /// Fresh water density in lbm/ft³.
    pub const WATER_DENSITY_LBM_FT3: f64 = 62.4;
    pub const SQ_IN_PER_SQ_FT: f64 = 144.0;
    pub const AIR_MOLECULAR_WEIGHT: f64 = 28.97;
    /// Gas constant in psi·ft³/(lb-mol·°R).
    pub const GAS_CONSTANT: f64 = 10.73159;
}
