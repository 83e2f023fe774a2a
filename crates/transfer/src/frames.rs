//! Explicit frame composition for the two sites.
//!
//! Every function takes scalar angles and plain vectors, so callers never need a
//! live transform hierarchy to find where a site is.

use cislunar_core::vector::{self, Vector3};

/// Launch site position relative to the primary's centre after the primary has spun by `spin_angle`.
#[inline]
pub fn launch_site_inertial(launch_offset: &Vector3, spin_angle: f64) -> Vector3 {
    vector::rotate_y(launch_offset, spin_angle)
}

/// Inertial angle of the launch site about the primary's polar axis.
#[inline]
pub fn launch_site_angle(launch_offset: &Vector3, spin_angle: f64) -> f64 {
    vector::planar_angle(&launch_site_inertial(launch_offset, spin_angle))
}

/// Position of a site carried by the secondary, relative to the primary's centre.
///
/// The secondary's orbit vector and the site offset ride the same pivot, so both
/// turn through the secondary's orbital angle.
pub fn to_primary_centered_frame(
    secondary_orbit_vector: &Vector3,
    secondary_orbit_angle: f64,
    site_local_offset: &Vector3,
) -> Vector3 {
    vector::rotate_y(
        &vector::add(secondary_orbit_vector, site_local_offset),
        secondary_orbit_angle,
    )
}

/// Point at `radius` along in-plane angle `angle`, relative to the primary's centre.
#[inline]
pub fn circle_point(angle: f64, radius: f64) -> Vector3 {
    vector::scale(&vector::planar_direction(angle), radius)
}

/// Move a primary-centred vector into world coordinates.
#[inline]
pub fn to_world(primary_position: &Vector3, relative: &Vector3) -> Vector3 {
    vector::add(primary_position, relative)
}
