//! Simulation time scale shared by the kinematics provider and the transfer solver.

use log::{debug, warn};

use crate::rates::{self, AngularRates};

/// Lowest selectable speed (simulation paused).
pub const MIN_DAYS_PER_SECOND: f64 = 0.0;
/// Highest selectable speed.
pub const MAX_DAYS_PER_SECOND: f64 = 5.0;
/// Increment applied by the speed controls.
pub const SPEED_STEP: f64 = 0.1;
/// Speed the scene starts at.
pub const DEFAULT_DAYS_PER_SECOND: f64 = 0.1;

/// Simulated days elapsing per real second, and a free multiplier on top.
///
/// Owned by whoever drives the speed controls; everything else reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationClock {
    days_per_second: f64,
    multiplier: f64,
}

impl SimulationClock {
    /// Clock at `days_per_second` (clamped like the speed controls) with a unit multiplier.
    pub fn new(days_per_second: f64) -> Self {
        let mut clock = Self {
            days_per_second: DEFAULT_DAYS_PER_SECOND,
            multiplier: 1.0,
        };
        clock.set_days_per_second(days_per_second);
        clock
    }

    pub fn days_per_second(&self) -> f64 {
        self.days_per_second
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Set the speed, clamped to `[0, 5]` days/s and rounded to one decimal.
    pub fn set_days_per_second(&mut self, value: f64) {
        if value.is_nan() {
            warn!("ignoring NaN simulation speed");
            return;
        }
        let rounded = (value * 10.0).round() / 10.0;
        let clamped = rounded.clamp(MIN_DAYS_PER_SECOND, MAX_DAYS_PER_SECOND);
        if clamped != value {
            debug!("simulation speed {value} adjusted to {clamped} days/s");
        }
        self.days_per_second = clamped;
    }

    /// Unbounded multiplier; zero or negative values propagate into every rate.
    pub fn set_multiplier(&mut self, multiplier: f64) {
        self.multiplier = multiplier;
    }

    /// "+" speed control.
    pub fn speed_up(&mut self) {
        self.set_days_per_second(self.days_per_second + SPEED_STEP);
    }

    /// "−" speed control.
    pub fn slow_down(&mut self) {
        self.set_days_per_second(self.days_per_second - SPEED_STEP);
    }

    /// Effective simulated days per real second.
    pub fn scale(&self) -> f64 {
        self.days_per_second * self.multiplier
    }

    pub fn is_paused(&self) -> bool {
        self.scale() == 0.0
    }

    /// Simulated days covered by `real_dt` seconds of wall-clock time.
    pub fn simulated_days(&self, real_dt: f64) -> f64 {
        real_dt * self.scale()
    }

    /// Real seconds needed for `days` of simulated time; `None` while paused.
    ///
    /// A negative multiplier runs the scene backwards at the same pace, so the
    /// magnitude of the scale is what counts here.
    pub fn real_seconds(&self, days: f64) -> Option<f64> {
        let pace = self.scale().abs();
        if pace > 0.0 { Some(days / pace) } else { None }
    }

    /// Revolution rates (rad per real second) at the current scale.
    pub fn rates(&self) -> AngularRates {
        rates::rates(self.days_per_second, self.multiplier)
    }

    /// Earth spin rate (rad per real second) at the current scale.
    pub fn spin_rate(&self) -> f64 {
        rates::spin_rate(self.days_per_second, self.multiplier)
    }

    /// Speed label as shown on the control panel.
    pub fn speed_label(&self) -> String {
        format!("{:.1}", self.days_per_second)
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(DEFAULT_DAYS_PER_SECOND)
    }
}
