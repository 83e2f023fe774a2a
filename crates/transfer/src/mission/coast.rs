//! Transfer leg: half an ellipse from the burn point (periapsis) out to the landing site.

use std::f64::consts::PI;

use cislunar_core::angle::wrap_pi;
use cislunar_core::vector::{self, Vector3};
use cislunar_orbits::conic_radius;

use super::TransferPlan;
use crate::frames;

/// Burn point in world coordinates.
pub fn burn_point(primary_position: &Vector3, plan: &TransferPlan) -> Vector3 {
    frames::to_world(
        primary_position,
        &vector::scale(&plan.burn.direction, plan.parking_radius),
    )
}

/// Overwrite `out` with the transfer ellipse for ν ∈ [0, π].
///
/// The conic is sized for the predicted arrival; the remaining gap to the landing
/// site's actual position (angle, radius, and height) is blended in with weight
/// `(1 - cos ν) / 2`, so the first point is the burn point and the last point is
/// exactly `landing_world`.
pub fn fill_transfer_ellipse(
    out: &mut [Vector3],
    primary_position: &Vector3,
    landing_world: &Vector3,
    plan: &TransferPlan,
) {
    let Some(last) = out.len().checked_sub(1) else {
        return;
    };
    let start = burn_point(primary_position, plan);
    if last == 0 {
        out[0] = start;
        return;
    }

    let r1 = plan.parking_radius;
    let r2 = plan.arrival_radius;
    let a = 0.5 * (r1 + r2);
    let e = plan.eccentricity;
    let s = plan.sense.sign();

    let landing_relative = vector::sub(landing_world, primary_position);
    let landing_planar = vector::project_to_plane(&landing_relative);
    let apo_angle = plan.burn.angle + s * PI;
    let angle_gap = s * wrap_pi(s * (vector::planar_angle(&landing_planar) - apo_angle));
    let radius_gap = vector::norm(&landing_planar) - r2;
    let height = landing_relative[1];

    for (i, point) in out.iter_mut().enumerate() {
        let nu = PI * i as f64 / last as f64;
        let w = 0.5 * (1.0 - nu.cos());
        let r = conic_radius(a, e, nu) + radius_gap * w;
        let angle = plan.burn.angle + s * nu + angle_gap * w;
        let mut relative = frames::circle_point(angle, r);
        relative[1] = height * w;
        *point = frames::to_world(primary_position, &relative);
    }
    out[0] = start;
    out[last] = *landing_world;
}
