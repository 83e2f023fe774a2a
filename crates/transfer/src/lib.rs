//! Anchored Earth–Moon transfer: the per-frame solver, its geometry, and the mission lifecycle.

pub mod frames;
pub mod geometry;
pub mod mission;
pub mod scene;

pub use cislunar_kinematics as kinematics;
pub use cislunar_orbits as orbits;
pub use facade::*;

mod facade;
