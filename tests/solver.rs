use std::f64::consts::{FRAC_PI_2, PI, TAU};

use cislunar::config::ScenarioConfig;
use cislunar::core::angle::{TraversalSense, wrap_pi};
use cislunar::core::vector::{self, Vector3};
use cislunar::kinematics::{OrbitalBody, SimulationClock, Site};
use cislunar::orbits::{conic_radius, transfer_eccentricity};
use cislunar::transfer::frames;
use cislunar::transfer::mission::{ascent, coast, parking};
use cislunar::transfer::{
    BodyRates, BurnDirection, SolverConfig, TransferGeometry, TransferInputs, TransferPlan,
    plan_transfer, scenario, solve_into, solve_timing,
};

fn scenario_clock(multiplier: f64) -> SimulationClock {
    let mut clock = SimulationClock::new(0.5);
    clock.set_multiplier(multiplier);
    clock
}

fn scenario_inputs() -> TransferInputs {
    let config = ScenarioConfig::default();
    scenario::scene(&config).transfer_inputs(&scenario_clock(1.0))
}

fn distance(a: &Vector3, b: &Vector3) -> f64 {
    vector::norm(&vector::sub(a, b))
}

fn assert_finite(points: &[Vector3]) {
    for p in points {
        assert!(p.iter().all(|c| c.is_finite()), "non-finite point {p:?}");
    }
}

#[test]
fn scenario_solve_has_consistent_timings() {
    let inputs = scenario_inputs();
    assert_eq!(inputs.primary_position, [30.0, 0.0, 0.0]);

    let config = SolverConfig::default();
    let result = plan_transfer(&inputs, &config);
    let plan = result.plan;

    assert!(plan.wait_days >= 0.0);
    assert!(plan.time_of_flight_days > 0.0);
    assert_eq!(plan.total_days, plan.wait_days + plan.time_of_flight_days);
    assert!(plan.total_days.is_finite());
    assert!((0.0..TAU).contains(&plan.sweep));
    assert!((0.0..TAU).contains(&plan.burn.angle));
    assert!((plan.mission_days() - (plan.ascent_days + plan.total_days)).abs() < 1e-15);
    assert_eq!(result.geometry.ascent.len(), config.ascent_segments + 1);
    assert_eq!(result.geometry.transfer.len(), config.transfer_segments + 1);
}

#[test]
fn identical_inputs_give_identical_output() {
    let inputs = scenario_inputs();
    let config = SolverConfig::default();
    let first = plan_transfer(&inputs, &config);
    let second = plan_transfer(&inputs, &config);
    assert_eq!(first, second);
}

#[test]
fn arcs_are_pinned_to_the_live_sites() {
    let inputs = scenario_inputs();
    for sense in [TraversalSense::Prograde, TraversalSense::Retrograde] {
        let config = SolverConfig {
            sense,
            ..SolverConfig::default()
        };
        let result = plan_transfer(&inputs, &config);
        let geometry = &result.geometry;

        assert_eq!(geometry.ascent[0], inputs.launch_world_position());
        assert_eq!(
            *geometry.transfer.last().unwrap(),
            inputs.landing_world_position()
        );
        assert_eq!(
            *geometry.ascent.last().unwrap(),
            ascent::entry_point(&inputs.primary_position, &result.plan)
        );
        assert_eq!(geometry.parking[0], *geometry.ascent.last().unwrap());
        assert_eq!(
            geometry.transfer[0],
            coast::burn_point(&inputs.primary_position, &result.plan)
        );
        assert!(distance(geometry.parking.last().unwrap(), &geometry.transfer[0]) < 1e-9);
    }
}

#[test]
fn ascent_arrives_along_the_parking_direction() {
    let inputs = scenario_inputs();
    for sense in [TraversalSense::Prograde, TraversalSense::Retrograde] {
        let config = SolverConfig {
            sense,
            ..SolverConfig::default()
        };
        let result = plan_transfer(&inputs, &config);
        let arc = &result.geometry.ascent;
        let n = arc.len();
        let step = vector::normalize(&vector::sub(&arc[n - 1], &arc[n - 2])).unwrap();
        let tangent = ascent::entry_tangent(&result.plan);
        assert!(
            vector::dot(&step, &tangent) > 0.99,
            "{sense:?}: end tangent {step:?} vs {tangent:?}"
        );
    }
}

#[test]
fn entry_lead_is_eastward_in_either_sense() {
    let inputs = scenario_inputs();
    let pro = solve_timing(
        &inputs,
        &SolverConfig {
            sense: TraversalSense::Prograde,
            ..SolverConfig::default()
        },
        None,
    );
    let retro = solve_timing(
        &inputs,
        &SolverConfig {
            sense: TraversalSense::Retrograde,
            ..SolverConfig::default()
        },
        None,
    );
    assert_eq!(pro.entry_angle, retro.entry_angle);

    let lead = SolverConfig::default().entry_lead;
    let spun = pro.launch_angle + inputs.rates.primary_spin * pro.ascent_days;
    assert!(wrap_pi(pro.entry_angle - spun - lead).abs() < 1e-12);
}

#[test]
fn ascent_falls_back_when_launch_lies_on_the_entry_tangent() {
    let inputs = scenario_inputs();
    let plan = solve_timing(&inputs, &SolverConfig::default(), None);
    let primary = inputs.primary_position;
    let entry = ascent::entry_point(&primary, &plan);
    let tangent = ascent::entry_tangent(&plan);

    // Directly behind the entry point on the tangent line, and at the entry point itself.
    let behind = vector::sub(&entry, &vector::scale(&tangent, 1.5));
    for launch in [behind, entry] {
        let mut arc = vec![[0.0; 3]; 25];
        ascent::fill_ascent_arc(&mut arc, &launch, &primary, &plan);
        assert_finite(&arc);
        assert_eq!(arc[0], launch);
        assert_eq!(arc[24], entry);
        for point in &arc {
            let off_line = vector::sub(point, &entry);
            let along = vector::dot(&off_line, &tangent);
            let perpendicular = vector::sub(&off_line, &vector::scale(&tangent, along));
            assert!(vector::norm(&perpendicular) < 1e-2, "{point:?} strays from the line");
        }
    }
}

fn eccentric_plan(sense: TraversalSense) -> TransferPlan {
    let config = SolverConfig {
        sense,
        ..SolverConfig::default()
    };
    let mut plan = solve_timing(&scenario_inputs(), &config, None);
    plan.arrival_radius = 8.5;
    plan.eccentricity = transfer_eccentricity(plan.parking_radius, plan.arrival_radius);
    plan
}

#[test]
fn transfer_ellipse_follows_the_conic_between_the_pins() {
    let primary = [30.0, 0.0, 0.0];
    for sense in [TraversalSense::Prograde, TraversalSense::Retrograde] {
        let plan = eccentric_plan(sense);
        let s = sense.sign();
        let a = 0.5 * (plan.parking_radius + plan.arrival_radius);
        let apoapsis = frames::circle_point(plan.burn.angle + s * PI, plan.arrival_radius);

        // Landing exactly where the conic ends: no residual to blend.
        let mut arc = vec![[0.0; 3]; 129];
        coast::fill_transfer_ellipse(&mut arc, &primary, &frames::to_world(&primary, &apoapsis), &plan);
        for (i, point) in arc.iter().enumerate() {
            let nu = PI * i as f64 / 128.0;
            let expected = conic_radius(a, plan.eccentricity, nu);
            assert!((distance(point, &primary) - expected).abs() < 1e-9, "{sense:?} index {i}");
        }
        let mid = vector::sub(&arc[64], &primary);
        assert!(wrap_pi(vector::planar_angle(&mid) - (plan.burn.angle + s * FRAC_PI_2)).abs() < 1e-9);

        // Landing 0.3 further out: half the radius gap is blended in at ν = π/2.
        let beyond = frames::circle_point(plan.burn.angle + s * PI, plan.arrival_radius + 0.3);
        coast::fill_transfer_ellipse(&mut arc, &primary, &frames::to_world(&primary, &beyond), &plan);
        let expected_mid = conic_radius(a, plan.eccentricity, FRAC_PI_2) + 0.15;
        assert!((distance(&arc[64], &primary) - expected_mid).abs() < 1e-9);
        assert_finite(&arc);
    }
}

#[test]
fn parking_arc_stays_on_the_circle_and_matches_the_sweep() {
    let inputs = scenario_inputs();
    let config = SolverConfig::default();
    let result = plan_transfer(&inputs, &config);
    let plan = result.plan;
    let arc = &result.geometry.parking;

    let segments = parking::parking_segment_count(plan.sweep, config.parking_segments);
    assert_eq!(arc.len(), segments + 1);
    for point in arc {
        let r = distance(point, &inputs.primary_position);
        assert!((r - config.parking_radius).abs() < 1e-9);
    }
    let swept = plan.parking_mean_motion * plan.wait_days;
    assert!((swept - plan.sweep).abs() < 1e-9);
}

#[test]
fn parking_segment_count_has_a_floor_of_one() {
    assert_eq!(parking::parking_segment_count(0.0, 64), 1);
    assert_eq!(parking::parking_segment_count(TAU / 64.0 * 0.5, 64), 1);
    assert_eq!(parking::parking_segment_count(TAU * 0.5, 64), 32);
    assert_eq!(parking::parking_segment_count(f64::NAN, 64), 1);
}

#[test]
fn retrograde_sweeps_the_other_way() {
    let inputs = scenario_inputs();
    let config = SolverConfig {
        sense: TraversalSense::Retrograde,
        ..SolverConfig::default()
    };
    let plan = solve_timing(&inputs, &config, None);
    assert!(plan.wait_days >= 0.0 && plan.time_of_flight_days > 0.0);
    assert!((0.0..TAU).contains(&plan.sweep));

    let burn_from_entry = wrap_pi(plan.entry_angle - plan.sweep - plan.burn.angle);
    assert!(burn_from_entry.abs() < 1e-9);

    let basis = plan.prograde_basis();
    assert!(vector::dot(&basis, &plan.burn.direction).abs() < 1e-12);
    assert!(wrap_pi(vector::planar_angle(&basis) - (plan.burn.angle - FRAC_PI_2)).abs() < 1e-12);
}

#[test]
fn equal_radii_give_a_circular_transfer_arc() {
    let primary = OrbitalBody::earth();
    let secondary = OrbitalBody::moon().with_angles(0.9, 0.0);
    let launch = Site::new("EQ", 0.0, 10.0, 2.0);
    let landing = Site::new("CENTRE", 0.0, 0.0, 0.0);
    let inputs = TransferInputs::from_bodies(
        [0.0; 3],
        &primary,
        &secondary,
        [4.0, 0.0, 0.0],
        &launch,
        &landing,
        BodyRates::sidereal(),
    );

    let config = SolverConfig::default();
    let result = plan_transfer(&inputs, &config);
    assert!(result.plan.eccentricity.abs() < 1e-12);
    assert!(result.plan.time_of_flight_days.is_finite());
    for point in &result.geometry.transfer {
        assert!((vector::norm(point) - 4.0).abs() < 1e-9, "{point:?}");
    }
}

#[test]
fn landing_site_on_the_polar_axis_keeps_the_previous_burn() {
    let primary = OrbitalBody::earth();
    let secondary = OrbitalBody::moon();
    let launch = Site::new("EQ", 0.0, 0.0, 2.0);
    let pole = Site::new("POLE", 90.0, 0.0, 0.5);
    let inputs = TransferInputs::from_bodies(
        [0.0; 3],
        &primary,
        &secondary,
        [0.0, 8.0, 0.0],
        &launch,
        &pole,
        BodyRates::sidereal(),
    );

    let config = SolverConfig {
        ascent_duration_days: 0.0,
        entry_lead: 0.0,
        ..SolverConfig::default()
    };
    let previous = BurnDirection::at_angle(1.0);
    let plan = solve_timing(&inputs, &config, Some(previous));
    assert_eq!(plan.burn, previous);

    let fallback = solve_timing(&inputs, &config, None);
    assert!((fallback.burn.angle - fallback.entry_angle).abs() < 1e-12);
    assert_eq!(fallback.sweep, 0.0);
    assert_eq!(fallback.wait_days, 0.0);
}

#[test]
fn zero_iterations_skip_the_fixed_point() {
    let inputs = scenario_inputs();
    let config = SolverConfig {
        iterations: 0,
        ..SolverConfig::default()
    };
    let plan = solve_timing(&inputs, &config, None);
    assert_eq!(plan.wait_days, 0.0);
    assert!(plan.time_of_flight_days > 0.0);
}

#[test]
fn geometry_buffers_are_reused_between_solves() {
    let config = SolverConfig::default();
    let mut geometry = TransferGeometry::for_config(&config);
    let parking_capacity = geometry.parking.capacity();
    assert!(parking_capacity >= config.parking_segments + 1);

    let clock = scenario_clock(1.0);
    let mut scene = scenario::scene(&ScenarioConfig::default());
    let mut previous = None;
    for _ in 0..20 {
        let plan = solve_into(&scene.transfer_inputs(&clock), &config, previous, &mut geometry);
        previous = Some(plan.burn);
        assert_eq!(geometry.ascent.len(), config.ascent_segments + 1);
        assert_eq!(geometry.transfer.len(), config.transfer_segments + 1);
        assert!(geometry.parking.len() <= config.parking_segments + 1);
        assert_eq!(geometry.parking.capacity(), parking_capacity);
        scene.advance(0.74, &clock);
    }
}

#[test]
fn solve_works_while_the_clock_is_paused() {
    let mut config = ScenarioConfig::default();
    config.clock.days_per_second = 0.0;
    let clock = scenario::clock(&config.clock);
    let mut scene = scenario::scene(&config);
    let before = scene.transfer_inputs(&clock);
    scene.advance(5.0, &clock);
    let after = scene.transfer_inputs(&clock);
    assert_eq!(before, after);
    assert_eq!(after.rates, BodyRates::sidereal());

    let plan = solve_timing(&after, &SolverConfig::default(), None);
    assert!(plan.total_days.is_finite() && plan.total_days > 0.0);
    assert_eq!(clock.real_seconds(plan.total_days), None);
}

#[test]
fn solver_rates_come_from_the_clock() {
    let forward = BodyRates::from_clock(&scenario_clock(1.0));
    let sidereal = BodyRates::sidereal();
    assert!((forward.primary_spin - sidereal.primary_spin).abs() < 1e-12);
    assert!((forward.secondary_revolution - sidereal.secondary_revolution).abs() < 1e-12);

    let backward = BodyRates::from_clock(&scenario_clock(-1.0));
    assert!((backward.secondary_revolution + sidereal.secondary_revolution).abs() < 1e-12);
    assert!((backward.primary_spin + sidereal.primary_spin).abs() < 1e-12);

    let mut paused_backward = SimulationClock::new(0.0);
    paused_backward.set_multiplier(-2.0);
    assert!(BodyRates::from_clock(&paused_backward).secondary_revolution < 0.0);
}

#[test]
fn prediction_follows_the_moon_when_time_runs_backwards() {
    for multiplier in [1.0, -1.0] {
        let clock = scenario_clock(multiplier);
        let mut scene = scenario::scene(&ScenarioConfig::default());
        let before = scene.transfer_inputs(&clock);

        // One real second at 0.5 days/s covers half a simulated day of motion.
        scene.advance(1.0, &clock);
        let after = scene.transfer_inputs(&clock);
        let predicted = before.landing_relative_at(0.5);
        let actual = after.landing_relative_at(0.0);
        assert!(
            distance(&predicted, &actual) < 1e-9,
            "multiplier {multiplier}: predicted {predicted:?}, moon at {actual:?}"
        );

        let a_day_on = after.landing_relative_at(1.0);
        let step = wrap_pi(vector::planar_angle(&a_day_on) - vector::planar_angle(&actual));
        assert!((step - after.rates.secondary_revolution).abs() < 1e-9);
        assert_eq!(step.signum(), multiplier);

        let plan = solve_timing(&after, &SolverConfig::default(), None);
        assert!(plan.total_days.is_finite() && plan.wait_days >= 0.0);
        let toward_arrival = vector::normalize(&vector::project_to_plane(&plan.predicted_arrival)).unwrap();
        assert!((vector::dot(&toward_arrival, &plan.burn.direction) + 1.0).abs() < 1e-12);
    }
}

#[test]
fn scene_moves_the_primary_and_the_landing_site() {
    let clock = scenario_clock(1.0);
    let mut scene = scenario::scene(&ScenarioConfig::default());
    let start_primary = scene.primary_position();
    let start_landing = scene.transfer_inputs(&clock).landing_world_position();
    scene.advance_days(3.0);
    assert!((scene.elapsed_days() - 3.0).abs() < 1e-15);
    assert!(distance(&scene.primary_position(), &start_primary) > 0.0);
    assert!((vector::norm(&scene.primary_position()) - 30.0).abs() < 1e-9);
    let moved = scene.transfer_inputs(&clock).landing_world_position();
    assert!(distance(&moved, &start_landing) > 1.0);
    let moon_gap = distance(&scene.secondary_position(), &scene.primary_position());
    assert!((moon_gap - 8.0).abs() < 1e-9);
}
