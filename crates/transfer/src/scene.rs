//! Body tracking for the Earth–Moon scene: where everything is at the current simulated instant.

use cislunar_core::vector::{self, Vector3};
use cislunar_kinematics::{OrbitalBody, SimulationClock, Site};

use crate::mission::{BodyRates, TransferInputs};

/// Earth revolving about the scene origin, the Moon revolving about the Earth, and one site on each.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub primary: OrbitalBody,
    pub secondary: OrbitalBody,
    /// Primary's offset from the scene origin before its revolution is applied.
    pub primary_offset: Vector3,
    /// Secondary's offset from the primary before its revolution is applied.
    pub secondary_orbit_vector: Vector3,
    pub launch: Site,
    pub landing: Site,
    elapsed_days: f64,
}

impl Scene {
    pub fn new(
        primary: OrbitalBody,
        secondary: OrbitalBody,
        primary_offset: Vector3,
        secondary_orbit_vector: Vector3,
        launch: Site,
        landing: Site,
    ) -> Self {
        Self {
            primary,
            secondary,
            primary_offset,
            secondary_orbit_vector,
            launch,
            landing,
            elapsed_days: 0.0,
        }
    }

    /// Simulated days since the scene was created.
    pub fn elapsed_days(&self) -> f64 {
        self.elapsed_days
    }

    pub fn primary_position(&self) -> Vector3 {
        vector::rotate_y(&self.primary_offset, self.primary.revolution_angle())
    }

    pub fn secondary_position(&self) -> Vector3 {
        vector::add(
            &self.primary_position(),
            &vector::rotate_y(&self.secondary_orbit_vector, self.secondary.revolution_angle()),
        )
    }

    pub fn advance_days(&mut self, days: f64) {
        self.primary.advance_days(days);
        self.secondary.advance_days(days);
        self.elapsed_days += days;
    }

    /// Step by `real_dt` wall-clock seconds at the clock's rates; returns the simulated days covered.
    pub fn advance(&mut self, real_dt: f64, clock: &SimulationClock) -> f64 {
        self.primary.advance(real_dt, clock);
        self.secondary.advance(real_dt, clock);
        let days = clock.simulated_days(real_dt);
        self.elapsed_days += days;
        days
    }

    /// Solver inputs for the current instant, with rates taken from `clock`.
    pub fn transfer_inputs(&self, clock: &SimulationClock) -> TransferInputs {
        TransferInputs::from_bodies(
            self.primary_position(),
            &self.primary,
            &self.secondary,
            self.secondary_orbit_vector,
            &self.launch,
            &self.landing,
            BodyRates::from_clock(clock),
        )
    }
}
