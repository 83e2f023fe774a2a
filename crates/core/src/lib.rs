//! Core units, constants, and shared primitives for the cislunar transfer workspace.

/// Fixed physical and scene constants.
pub mod constants {
    /// One full turn in radians.
    pub const TAU: f64 = std::f64::consts::TAU;

    /// Sidereal revolution period of the Moon about the Earth (days).
    pub const MOON_PERIOD_DAYS: f64 = 27.321661;
    /// Sidereal revolution period of the Earth about the Sun (days).
    pub const EARTH_PERIOD_DAYS: f64 = 365.256;
    /// Sidereal revolution period of Mars about the Sun (days).
    pub const MARS_PERIOD_DAYS: f64 = 686.98;
    /// Sidereal rotation period of the Earth (days).
    pub const EARTH_SIDEREAL_DAY: f64 = 0.99726968;

    /// Below this length a vector is treated as having no usable direction.
    pub const DIRECTION_EPSILON: f64 = 1e-9;
}

/// Basic unit conversion helpers.
pub mod units {
    /// Convert degrees to radians.
    #[inline]
    pub fn deg_to_rad(v: f64) -> f64 {
        v.to_radians()
    }

    /// Convert radians to degrees.
    #[inline]
    pub fn rad_to_deg(v: f64) -> f64 {
        v.to_degrees()
    }
}

/// Minimal vector helpers to avoid ad-hoc `[f64; 3]` math everywhere.
///
/// Scene axes follow the renderer: Y is the polar axis and the orbital plane is X–Z.
pub mod vector {
    use super::constants::DIRECTION_EPSILON;

    /// Alias for a 3D vector in scene-distance units.
    pub type Vector3 = [f64; 3];

    /// Euclidean norm of a vector.
    #[inline]
    pub fn norm(v: &Vector3) -> f64 {
        dot(v, v).sqrt()
    }

    /// Dot product of two vectors.
    #[inline]
    pub fn dot(a: &Vector3, b: &Vector3) -> f64 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    /// Vector addition.
    #[inline]
    pub fn add(a: &Vector3, b: &Vector3) -> Vector3 {
        [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
    }

    /// Vector subtraction.
    #[inline]
    pub fn sub(a: &Vector3, b: &Vector3) -> Vector3 {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
    }

    /// Scale a vector by a scalar.
    #[inline]
    pub fn scale(v: &Vector3, s: f64) -> Vector3 {
        [v[0] * s, v[1] * s, v[2] * s]
    }

    /// Unit vector along `v`, or `None` when `v` is too short to carry a direction.
    pub fn normalize(v: &Vector3) -> Option<Vector3> {
        let n = norm(v);
        if n < DIRECTION_EPSILON || !n.is_finite() {
            None
        } else {
            Some(scale(v, 1.0 / n))
        }
    }

    /// Drop the polar component, leaving the projection onto the orbital plane.
    #[inline]
    pub fn project_to_plane(v: &Vector3) -> Vector3 {
        [v[0], 0.0, v[2]]
    }

    /// Rotate `v` about the polar axis by `angle` radians.
    ///
    /// Matches a scene-graph `rotation.y`: `+X` turns toward `-Z` for positive angles,
    /// so [`planar_angle`] of the result grows by exactly `angle`.
    pub fn rotate_y(v: &Vector3, angle: f64) -> Vector3 {
        let (s, c) = angle.sin_cos();
        [v[0] * c + v[2] * s, v[1], -v[0] * s + v[2] * c]
    }

    /// Angle of the in-plane projection of `v`, measured from `+X` in the rotation sense.
    #[inline]
    pub fn planar_angle(v: &Vector3) -> f64 {
        (-v[2]).atan2(v[0])
    }

    /// Unit in-plane vector pointing at `angle` (inverse of [`planar_angle`]).
    #[inline]
    pub fn planar_direction(angle: f64) -> Vector3 {
        let (s, c) = angle.sin_cos();
        [c, 0.0, -s]
    }
}

/// Angle arithmetic that stays correct across the 0/2π seam.
pub mod angle {
    use super::constants::TAU;
    use super::vector::{Vector3, planar_angle};
    use std::f64::consts::PI;

    /// Rotational direction used when sweeping along a circular orbit.
    ///
    /// Seen from +Y looking down on the orbital plane, prograde is counter-clockwise
    /// (`+1`) and retrograde clockwise (`-1`). Clockwise is the default.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum TraversalSense {
        /// Same sense as the bodies' spin and revolution (positive angles).
        Prograde,
        /// Opposite to the bodies' motion.
        #[default]
        Retrograde,
    }

    impl TraversalSense {
        /// `+1.0` for prograde, `-1.0` for retrograde.
        #[inline]
        pub fn sign(self) -> f64 {
            match self {
                TraversalSense::Prograde => 1.0,
                TraversalSense::Retrograde => -1.0,
            }
        }

    }

    /// Wrap any real angle into `[0, 2π)`.
    pub fn wrap_two_pi(a: f64) -> f64 {
        let w = a.rem_euclid(TAU);
        // rem_euclid rounds tiny negative inputs up to exactly TAU.
        if w >= TAU { 0.0 } else { w }
    }

    /// Wrap any real angle into `(-π, π]`.
    pub fn wrap_pi(a: f64) -> f64 {
        let w = wrap_two_pi(a);
        if w > PI { w - TAU } else { w }
    }

    /// Counter-clockwise (positive-sense) angle from `from` to `to`, in `[0, 2π)`.
    #[inline]
    pub fn angle_ccw(from: f64, to: f64) -> f64 {
        wrap_two_pi(to - from)
    }

    /// Positive-sense angle between the in-plane projections of two vectors.
    pub fn angle_ccw_between(from: &Vector3, to: &Vector3) -> f64 {
        angle_ccw(planar_angle(from), planar_angle(to))
    }

    /// Sweep needed to travel from `from` to `to` in the given sense, in `[0, 2π)`.
    ///
    /// For the retrograde sense this is the explement of the prograde sweep
    /// (`2π - ccw`), never the negated prograde value.
    pub fn sweep_angle(from: f64, to: f64, sense: TraversalSense) -> f64 {
        match sense {
            TraversalSense::Prograde => angle_ccw(from, to),
            TraversalSense::Retrograde => angle_ccw(to, from),
        }
    }
}
