//! Ascent leg: lift-off from the launch site into the parking orbit.
//!
//! The curve is the arc of the unique circle that passes through the launch site and
//! the entry point while touching the parking orbit's direction of travel at entry.

use std::f64::consts::FRAC_PI_2;

use cislunar_core::angle::wrap_two_pi;
use cislunar_core::vector::{self, Vector3};
use log::debug;

use super::TransferPlan;
use crate::frames;

/// Below this, the launch site is treated as lying on the entry tangent line.
const TANGENT_DENOMINATOR_EPSILON: f64 = 1e-6;
/// Stand-in for the perpendicular offset when the tangent-circle solve degenerates.
const FALLBACK_OFFSET: f64 = 1e-3;

/// Parking-orbit entry point in world coordinates.
pub fn entry_point(primary_position: &Vector3, plan: &TransferPlan) -> Vector3 {
    frames::to_world(
        primary_position,
        &frames::circle_point(plan.entry_angle, plan.parking_radius),
    )
}

/// Direction of travel along the parking orbit at the entry point.
pub fn entry_tangent(plan: &TransferPlan) -> Vector3 {
    vector::planar_direction(plan.entry_angle + plan.sense.sign() * FRAC_PI_2)
}

/// Overwrite `out` with the ascent arc. The first point is the launch site, the last the entry point.
pub fn fill_ascent_arc(
    out: &mut [Vector3],
    launch_world: &Vector3,
    primary_position: &Vector3,
    plan: &TransferPlan,
) {
    let Some(last) = out.len().checked_sub(1) else {
        return;
    };
    let entry = entry_point(primary_position, plan);
    if last == 0 {
        out[0] = *launch_world;
        return;
    }

    let tangent = entry_tangent(plan);
    let chord = vector::sub(launch_world, &entry);

    // Unit normal toward the launch side, perpendicular to the tangent.
    let along = vector::dot(&chord, &tangent);
    let normal = vector::normalize(&vector::sub(&chord, &vector::scale(&tangent, along)))
        .unwrap_or_else(|| vector::planar_direction(plan.entry_angle + std::f64::consts::PI));

    let mut offset = vector::dot(&chord, &normal);
    if offset < TANGENT_DENOMINATOR_EPSILON {
        debug!("ascent tangent circle degenerate (offset {offset:e}); using fallback");
        offset = FALLBACK_OFFSET;
    }
    let radius = vector::dot(&chord, &chord) / (2.0 * offset);
    let centre = vector::add(&entry, &vector::scale(&normal, radius));

    // Basis at the centre: e1 points at the entry point, e2 along the travel direction.
    let e1 = vector::scale(&normal, -1.0);
    let e2 = tangent;
    let from_centre = vector::sub(launch_world, &centre);
    let phi_launch = vector::dot(&from_centre, &e2).atan2(vector::dot(&from_centre, &e1));
    // Approach the entry point moving along +e2, which means phi increases to zero.
    let phi_start = -wrap_two_pi(-phi_launch);

    for (i, point) in out.iter_mut().enumerate() {
        let phi = phi_start * (1.0 - i as f64 / last as f64);
        let (s, c) = phi.sin_cos();
        *point = vector::add(
            &centre,
            &vector::add(&vector::scale(&e1, radius * c), &vector::scale(&e2, radius * s)),
        );
    }
    out[0] = *launch_world;
    out[last] = entry;
}
