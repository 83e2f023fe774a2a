//! Parking-orbit leg: coast from the insertion point until the burn direction comes around.

use cislunar_core::constants::TAU;
use cislunar_core::vector::Vector3;

use super::TransferPlan;
use crate::frames;

/// Segment count for a sweep, keeping roughly `segments_per_turn` per full revolution.
pub fn parking_segment_count(sweep: f64, segments_per_turn: usize) -> usize {
    let share = (sweep / TAU * segments_per_turn as f64).ceil();
    if share.is_finite() && share >= 1.0 {
        share as usize
    } else {
        1
    }
}

/// Clear `out` and refill it with the arc from the entry angle through `plan.sweep` at the parking radius.
pub fn fill_parking_arc(
    out: &mut Vec<Vector3>,
    primary_position: &Vector3,
    plan: &TransferPlan,
    segments_per_turn: usize,
) {
    let segments = parking_segment_count(plan.sweep, segments_per_turn);
    let step = plan.sense.sign() * plan.sweep / segments as f64;
    out.clear();
    out.extend((0..=segments).map(|i| {
        let angle = plan.entry_angle + step * i as f64;
        frames::to_world(
            primary_position,
            &frames::circle_point(angle, plan.parking_radius),
        )
    }));
}
