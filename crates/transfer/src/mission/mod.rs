//! Anchored transfer planner: ties the ascent, parking sweep, and coast legs to the live site positions.

pub mod ascent;
pub mod coast;
pub mod lifecycle;
pub mod parking;

use std::f64::consts::FRAC_PI_2;

use cislunar_core::angle::{TraversalSense, sweep_angle, wrap_two_pi};
use cislunar_core::units::deg_to_rad;
use cislunar_core::vector::{self, Vector3};
use cislunar_kinematics::{OrbitalBody, SimulationClock, Site, rates, spin_rate};
use cislunar_orbits::{circular_mu, hohmann_time_of_flight, mean_motion, transfer_eccentricity};
use log::{debug, trace};

use crate::frames;
use crate::geometry::TransferGeometry;

/// Fixed-point rounds used to reconcile wait, time of flight, and arrival phase.
///
/// No convergence check is made; three rounds settle the Earth–Moon case but extreme
/// radius ratios have not been characterised.
pub const DEFAULT_ITERATIONS: usize = 3;

/// Tunables for the anchored transfer.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Lead time between lift-off and parking-orbit insertion (simulated days).
    pub ascent_duration_days: f64,
    /// Radius of the circular parking orbit about the primary.
    pub parking_radius: f64,
    pub ascent_segments: usize,
    /// Parking-arc segments per full revolution; the drawn arc uses a share matching its sweep.
    pub parking_segments: usize,
    pub transfer_segments: usize,
    pub sense: TraversalSense,
    /// Downrange lead added at insertion, in radians. Always eastward (the spin
    /// sense), whichever way the parking orbit is then traversed.
    pub entry_lead: f64,
    pub iterations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            ascent_duration_days: 0.02,
            parking_radius: 4.0,
            ascent_segments: 24,
            parking_segments: 64,
            transfer_segments: 128,
            sense: TraversalSense::Retrograde,
            entry_lead: deg_to_rad(30.0),
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

/// Angular rates the solver needs, in radians per simulated day.
///
/// Working per simulated day keeps the solve meaningful while the clock is paused;
/// use [`SimulationClock::real_seconds`] to convert results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyRates {
    pub primary_spin: f64,
    pub secondary_revolution: f64,
}

impl BodyRates {
    /// Rates from the fixed sidereal periods (one simulated day per unit time).
    pub fn sidereal() -> Self {
        Self::at_scale(1.0)
    }

    /// Kinematics provider rates for the clock, rescaled from real seconds to simulated days.
    ///
    /// The sign survives the rescale, so a negative multiplier predicts the bodies
    /// running backwards exactly as they are animated. A paused clock has no rate to
    /// rescale; the sign of its multiplier picks the direction instead.
    pub fn from_clock(clock: &SimulationClock) -> Self {
        let pace = clock.scale().abs();
        if pace == 0.0 {
            let direction = if clock.multiplier() < 0.0 { -1.0 } else { 1.0 };
            return Self::at_scale(direction);
        }
        Self {
            primary_spin: clock.spin_rate() / pace,
            secondary_revolution: clock.rates().secondary_revolution / pace,
        }
    }

    fn at_scale(scale: f64) -> Self {
        Self {
            primary_spin: spin_rate(1.0, scale),
            secondary_revolution: rates(1.0, scale).secondary_revolution,
        }
    }
}

/// Live scene state for one solve. Everything is supplied fresh each call.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferInputs {
    /// World position of the primary's centre.
    pub primary_position: Vector3,
    pub primary_spin_angle: f64,
    /// Launch site offset in the primary's local (unspun) frame.
    pub launch_offset: Vector3,
    /// Secondary's position relative to the primary before its orbital rotation is applied.
    pub secondary_orbit_vector: Vector3,
    pub secondary_orbit_angle: f64,
    /// Landing site offset in the secondary's local frame.
    pub landing_offset: Vector3,
    pub rates: BodyRates,
}

impl TransferInputs {
    /// Assemble inputs from tracked bodies, their sites, and the current rates.
    pub fn from_bodies(
        primary_position: Vector3,
        primary: &OrbitalBody,
        secondary: &OrbitalBody,
        secondary_orbit_vector: Vector3,
        launch: &Site,
        landing: &Site,
        rates: BodyRates,
    ) -> Self {
        Self {
            primary_position,
            primary_spin_angle: primary.spin_angle(),
            launch_offset: launch.local_offset(),
            secondary_orbit_vector,
            secondary_orbit_angle: secondary.revolution_angle(),
            landing_offset: landing.local_offset(),
            rates,
        }
    }

    /// Current world position of the launch site.
    pub fn launch_world_position(&self) -> Vector3 {
        frames::to_world(
            &self.primary_position,
            &frames::launch_site_inertial(&self.launch_offset, self.primary_spin_angle),
        )
    }

    /// Current world position of the landing site.
    pub fn landing_world_position(&self) -> Vector3 {
        frames::to_world(&self.primary_position, &self.landing_relative_at(0.0))
    }

    /// Landing site relative to the primary after `days` more of secondary revolution.
    pub fn landing_relative_at(&self, days: f64) -> Vector3 {
        frames::to_primary_centered_frame(
            &self.secondary_orbit_vector,
            self.secondary_orbit_angle + self.rates.secondary_revolution * days,
            &self.landing_offset,
        )
    }
}

/// In-plane unit direction of the transfer burn (the transfer ellipse's periapsis).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurnDirection {
    pub direction: Vector3,
    /// Planar angle of `direction`, in `[0, 2π)`.
    pub angle: f64,
}

impl BurnDirection {
    pub fn at_angle(angle: f64) -> Self {
        let angle = wrap_two_pi(angle);
        Self {
            direction: vector::planar_direction(angle),
            angle,
        }
    }

    /// Direction opposite the in-plane projection of `arrival`; `None` if the projection vanishes.
    pub fn opposite(arrival: &Vector3) -> Option<Self> {
        let unit = vector::normalize(&vector::project_to_plane(arrival))?;
        let direction = vector::scale(&unit, -1.0);
        Some(Self {
            direction,
            angle: wrap_two_pi(vector::planar_angle(&direction)),
        })
    }

    /// In-plane unit vector 90° ahead of the burn direction in the given sense.
    pub fn prograde_basis(&self, sense: TraversalSense) -> Vector3 {
        vector::planar_direction(self.angle + sense.sign() * FRAC_PI_2)
    }
}

/// Timings and geometric anchors of one anchored solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferPlan {
    pub ascent_days: f64,
    pub wait_days: f64,
    pub time_of_flight_days: f64,
    /// `wait_days + time_of_flight_days`.
    pub total_days: f64,
    /// Effective gravitational parameter (scene units³ / day²).
    pub mu: f64,
    pub parking_mean_motion: f64,
    pub launch_angle: f64,
    pub entry_angle: f64,
    pub burn: BurnDirection,
    /// Parking-orbit travel from entry to burn, in `[0, 2π)`.
    pub sweep: f64,
    pub sense: TraversalSense,
    pub parking_radius: f64,
    /// Predicted arrival radius the time of flight was sized for.
    pub arrival_radius: f64,
    pub eccentricity: f64,
    /// Predicted landing site position at arrival, relative to the primary.
    pub predicted_arrival: Vector3,
}

impl TransferPlan {
    /// Time from lift-off to arrival.
    pub fn mission_days(&self) -> f64 {
        self.ascent_days + self.total_days
    }

    /// In-plane unit vector 90° ahead of the burn direction in the traversal sense.
    pub fn prograde_basis(&self) -> Vector3 {
        self.burn.prograde_basis(self.sense)
    }
}

/// Plan plus freshly allocated geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchoredTransfer {
    pub plan: TransferPlan,
    pub geometry: TransferGeometry,
}

/// Solve the timing problem only.
///
/// `previous` is used solely when the predicted arrival has no in-plane component
/// (the landing site sits on the primary's polar axis); without it the burn falls
/// back to the entry angle, i.e. a zero sweep.
pub fn solve_timing(
    inputs: &TransferInputs,
    config: &SolverConfig,
    previous: Option<BurnDirection>,
) -> TransferPlan {
    let sense = config.sense;
    let ascent = config.ascent_duration_days;
    let r_park = config.parking_radius;

    let launch_angle = frames::launch_site_angle(&inputs.launch_offset, inputs.primary_spin_angle);
    let landing_now = inputs.landing_relative_at(0.0);

    let orbit_radius = vector::norm(&inputs.secondary_orbit_vector);
    let mu = circular_mu(inputs.rates.secondary_revolution, orbit_radius);
    let n_park = mean_motion(mu, r_park);

    let entry_angle =
        wrap_two_pi(launch_angle + inputs.rates.primary_spin * ascent + config.entry_lead);

    let mut wait = 0.0;
    let mut arrival_radius = vector::norm(&landing_now);
    let mut tof = hohmann_time_of_flight(r_park, arrival_radius, mu);
    let mut burn = previous.unwrap_or_else(|| BurnDirection::at_angle(entry_angle));
    let mut predicted = landing_now;
    let mut sweep = sweep_angle(entry_angle, burn.angle, sense);

    for round in 0..config.iterations {
        predicted = inputs.landing_relative_at(ascent + wait + tof);
        burn = match BurnDirection::opposite(&predicted) {
            Some(b) => b,
            None => {
                debug!("predicted arrival lies on the polar axis; keeping burn at {:.4} rad", burn.angle);
                burn
            }
        };
        sweep = sweep_angle(entry_angle, burn.angle, sense);
        wait = sweep / n_park;

        let refined = inputs.landing_relative_at(ascent + wait + tof);
        arrival_radius = vector::norm(&refined);
        tof = hohmann_time_of_flight(r_park, arrival_radius, mu);
        trace!(
            "round {round}: burn={:.5} rad sweep={sweep:.5} wait={wait:.5} d tof={tof:.5} d",
            burn.angle
        );
    }

    let plan = TransferPlan {
        ascent_days: ascent,
        wait_days: wait,
        time_of_flight_days: tof,
        total_days: wait + tof,
        mu,
        parking_mean_motion: n_park,
        launch_angle: wrap_two_pi(launch_angle),
        entry_angle,
        burn,
        sweep,
        sense,
        parking_radius: r_park,
        arrival_radius,
        eccentricity: transfer_eccentricity(r_park, arrival_radius),
        predicted_arrival: predicted,
    };
    debug!(
        "anchored transfer: wait={:.4} d tof={:.4} d total={:.4} d sweep={:.4} rad",
        plan.wait_days, plan.time_of_flight_days, plan.total_days, plan.sweep
    );
    plan
}

/// Solve and overwrite `geometry` in place with the ascent, parking, and transfer arcs.
pub fn solve_into(
    inputs: &TransferInputs,
    config: &SolverConfig,
    previous: Option<BurnDirection>,
    geometry: &mut TransferGeometry,
) -> TransferPlan {
    let plan = solve_timing(inputs, config, previous);
    geometry.fit(config);

    ascent::fill_ascent_arc(
        &mut geometry.ascent,
        &inputs.launch_world_position(),
        &inputs.primary_position,
        &plan,
    );
    parking::fill_parking_arc(
        &mut geometry.parking,
        &inputs.primary_position,
        &plan,
        config.parking_segments,
    );
    coast::fill_transfer_ellipse(
        &mut geometry.transfer,
        &inputs.primary_position,
        &inputs.landing_world_position(),
        &plan,
    );
    plan
}

/// One-shot convenience: solve with freshly allocated buffers.
pub fn plan_transfer(inputs: &TransferInputs, config: &SolverConfig) -> AnchoredTransfer {
    let mut geometry = TransferGeometry::for_config(config);
    let plan = solve_into(inputs, config, None, &mut geometry);
    AnchoredTransfer { plan, geometry }
}
