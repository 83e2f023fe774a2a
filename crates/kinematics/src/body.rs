//! Orbiting bodies and the fixed surface sites they carry.

use cislunar_core::angle::wrap_two_pi;
use cislunar_core::constants::{EARTH_PERIOD_DAYS, EARTH_SIDEREAL_DAY, MOON_PERIOD_DAYS};
use cislunar_core::units::deg_to_rad;
use cislunar_core::vector::{self, Vector3};

use crate::clock::SimulationClock;
use crate::rates::angular_rate;

/// A body revolving about its parent, optionally spinning about its own polar axis.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalBody {
    pub name: String,
    pub revolution_period_days: f64,
    /// Only the primary spins in this scene; the Moon stays locked to its pivot.
    pub spin_period_days: Option<f64>,
    revolution_angle: f64,
    spin_angle: f64,
}

impl OrbitalBody {
    pub fn new(name: impl Into<String>, revolution_period_days: f64) -> Self {
        Self {
            name: name.into(),
            revolution_period_days,
            spin_period_days: None,
            revolution_angle: 0.0,
            spin_angle: 0.0,
        }
    }

    pub fn with_spin(mut self, spin_period_days: f64) -> Self {
        self.spin_period_days = Some(spin_period_days);
        self
    }

    pub fn with_angles(mut self, revolution_angle: f64, spin_angle: f64) -> Self {
        self.revolution_angle = wrap_two_pi(revolution_angle);
        self.spin_angle = wrap_two_pi(spin_angle);
        self
    }

    pub fn earth() -> Self {
        Self::new("EARTH", EARTH_PERIOD_DAYS).with_spin(EARTH_SIDEREAL_DAY)
    }

    pub fn moon() -> Self {
        Self::new("MOON", MOON_PERIOD_DAYS)
    }

    /// Current revolution angle about the parent, in `[0, 2π)`.
    pub fn revolution_angle(&self) -> f64 {
        self.revolution_angle
    }

    /// Current self-rotation angle, in `[0, 2π)`; always zero for non-spinning bodies.
    pub fn spin_angle(&self) -> f64 {
        self.spin_angle
    }

    /// Advance both angles by `days` of simulated time.
    pub fn advance_days(&mut self, days: f64) {
        self.turn(days, 1.0, 1.0);
    }

    /// Advance by `real_dt` wall-clock seconds at the rates the clock currently drives.
    pub fn advance(&mut self, real_dt: f64, clock: &SimulationClock) {
        self.turn(real_dt, clock.days_per_second(), clock.multiplier());
    }

    fn turn(&mut self, dt: f64, days_per_second: f64, multiplier: f64) {
        let revolution = angular_rate(self.revolution_period_days, days_per_second, multiplier);
        self.revolution_angle = wrap_two_pi(self.revolution_angle + revolution * dt);
        if let Some(period) = self.spin_period_days {
            let spin = angular_rate(period, days_per_second, multiplier);
            self.spin_angle = wrap_two_pi(self.spin_angle + spin * dt);
        }
    }
}

/// A fixed point on a body's surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    pub name: String,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub radius: f64,
}

impl Site {
    pub fn new(name: impl Into<String>, latitude_deg: f64, longitude_deg: f64, radius: f64) -> Self {
        Self {
            name: name.into(),
            latitude_deg,
            longitude_deg,
            radius,
        }
    }

    /// Offset from the body centre in the body's local frame (Y up, latitude 0 on the equator).
    pub fn local_offset(&self) -> Vector3 {
        let lat = deg_to_rad(self.latitude_deg);
        let lon = deg_to_rad(self.longitude_deg);
        [
            self.radius * lat.cos() * lon.cos(),
            self.radius * lat.sin(),
            self.radius * lat.cos() * lon.sin(),
        ]
    }

    /// World position when the body sits at `centre` and has turned by `angle` about its polar axis.
    pub fn world_position(&self, centre: &Vector3, angle: f64) -> Vector3 {
        vector::add(centre, &vector::rotate_y(&self.local_offset(), angle))
    }
}
