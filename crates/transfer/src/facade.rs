//! Re-exported APIs for consumers of the transfer crate.

pub use crate::geometry::TransferGeometry;
pub use crate::mission::lifecycle::{MissionControl, MissionEvent, MissionStage, StageDurations};
pub use crate::mission::{
    AnchoredTransfer, BodyRates, BurnDirection, DEFAULT_ITERATIONS, SolverConfig, TransferInputs,
    TransferPlan, plan_transfer, solve_into, solve_timing,
};
pub use crate::scene::Scene;

pub mod scenario {
    //! Conversions from parsed scenario files into runtime values.

    use cislunar_config::{
        ClockConfig, MissionDurations, ScenarioConfig, SenseConfig, SiteConfig, SolverSettings,
    };
    use cislunar_core::angle::TraversalSense;
    use cislunar_core::units::deg_to_rad;
    use cislunar_kinematics::{OrbitalBody, SimulationClock, Site};

    use crate::mission::SolverConfig;
    use crate::mission::lifecycle::StageDurations;
    use crate::scene::Scene;

    pub fn sense(config: SenseConfig) -> TraversalSense {
        match config {
            SenseConfig::Prograde => TraversalSense::Prograde,
            SenseConfig::Retrograde => TraversalSense::Retrograde,
        }
    }

    pub fn solver_config(settings: &SolverSettings) -> SolverConfig {
        SolverConfig {
            ascent_duration_days: settings.ascent_duration_days,
            parking_radius: settings.parking_radius,
            ascent_segments: settings.ascent_segments,
            parking_segments: settings.parking_segments,
            transfer_segments: settings.transfer_segments,
            sense: sense(settings.sense),
            entry_lead: deg_to_rad(settings.entry_lead_deg),
            iterations: settings.iterations,
        }
    }

    pub fn stage_durations(config: &MissionDurations) -> StageDurations {
        StageDurations {
            ascent_s: config.ascent_s,
            park_s: config.park_s,
            transfer_s: config.transfer_s,
            arrival_s: config.arrival_s,
        }
    }

    pub fn site(config: &SiteConfig) -> Site {
        Site::new(
            config.name.clone(),
            config.latitude_deg,
            config.longitude_deg,
            config.radius,
        )
    }

    pub fn clock(config: &ClockConfig) -> SimulationClock {
        let mut clock = SimulationClock::new(config.days_per_second);
        clock.set_multiplier(config.multiplier);
        clock
    }

    /// Build the Earth–Moon scene at the scenario's starting angles.
    pub fn scene(config: &ScenarioConfig) -> Scene {
        let bodies = &config.bodies;
        let primary = OrbitalBody::earth().with_angles(
            deg_to_rad(bodies.primary_revolution_deg),
            deg_to_rad(bodies.primary_spin_deg),
        );
        let secondary =
            OrbitalBody::moon().with_angles(deg_to_rad(bodies.secondary_revolution_deg), 0.0);
        Scene::new(
            primary,
            secondary,
            bodies.primary_offset,
            [bodies.secondary_orbit_radius, 0.0, 0.0],
            site(&config.launch_site),
            site(&config.landing_site),
        )
    }
}
