//! Two-body helpers for the circular, coplanar transfer case.
//!
//! Distances are scene units and times follow whatever base the caller's `mu`
//! was built with (the transfer solver uses simulated days).

use std::f64::consts::PI;

/// Half the period of the transfer ellipse with semi-major axis `(r1 + r2) / 2`.
pub fn hohmann_time_of_flight(r1: f64, r2: f64, mu: f64) -> f64 {
    let a = 0.5 * (r1 + r2);
    PI * (a * a * a / mu).sqrt()
}

/// Eccentricity `(r2 - r1) / (r2 + r1)`; exactly zero when the radii match.
///
/// Signed: negative when r2 < r1, so that ν = 0 always sits at r1.
#[inline]
pub fn transfer_eccentricity(r1: f64, r2: f64) -> f64 {
    (r2 - r1) / (r2 + r1)
}

/// Circular-orbit mean motion `sqrt(mu / r³)`.
#[inline]
pub fn mean_motion(mu: f64, radius: f64) -> f64 {
    (mu / (radius * radius * radius)).sqrt()
}

/// Gravitational parameter for which a circular orbit of `radius` has mean motion `rate`.
///
/// Lets the transfer stay consistent with motion that is animated at a fixed rate
/// instead of integrated from a physical GM.
#[inline]
pub fn circular_mu(rate: f64, radius: f64) -> f64 {
    rate * rate * radius * radius * radius
}

/// Conic radius `a(1 - e²) / (1 + e cos ν)` at true anomaly `nu`.
#[inline]
pub fn conic_radius(semi_major_axis: f64, eccentricity: f64, nu: f64) -> f64 {
    semi_major_axis * (1.0 - eccentricity * eccentricity) / (1.0 + eccentricity * nu.cos())
}
