//! Anchored Earth–Moon transfer simulation.
//!
//! The solver, kinematics, and supporting math live in member crates; this crate
//! re-exports them under one roof so the binaries and tests share a single entry
//! point.

pub use cislunar_config as config;
pub use cislunar_core as core;
pub use cislunar_export as export;
pub use cislunar_kinematics as kinematics;
pub use cislunar_orbits as orbits;
pub use cislunar_transfer as transfer;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
