//! Kinematics provider: angular rates derived from fixed sidereal periods.

use cislunar_core::constants::{
    EARTH_PERIOD_DAYS, EARTH_SIDEREAL_DAY, MARS_PERIOD_DAYS, MOON_PERIOD_DAYS, TAU,
};

/// Revolution rates (radians per real second) of the bodies in the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngularRates {
    /// Earth about the Sun.
    pub primary_revolution: f64,
    /// Moon about the Earth.
    pub secondary_revolution: f64,
    /// Mars about the Sun.
    pub tertiary_revolution: f64,
}

/// Rate (radians per real second) of anything turning once every `period_days`.
///
/// Inputs are not validated: a zero or negative scale yields zero or negative rates.
#[inline]
pub fn angular_rate(period_days: f64, days_per_second: f64, multiplier: f64) -> f64 {
    (TAU / period_days) * days_per_second * multiplier
}

/// Current revolution rates for the given time scale.
pub fn rates(days_per_second: f64, multiplier: f64) -> AngularRates {
    AngularRates {
        primary_revolution: angular_rate(EARTH_PERIOD_DAYS, days_per_second, multiplier),
        secondary_revolution: angular_rate(MOON_PERIOD_DAYS, days_per_second, multiplier),
        tertiary_revolution: angular_rate(MARS_PERIOD_DAYS, days_per_second, multiplier),
    }
}

/// Earth's self-rotation rate (radians per real second), from its sidereal day.
pub fn spin_rate(days_per_second: f64, multiplier: f64) -> f64 {
    angular_rate(EARTH_SIDEREAL_DAY, days_per_second, multiplier)
}
