//! Time scale, angular rates, and body/site kinematics for the Earth–Moon scene.
//!
//! Everything here is a pure function of the [`SimulationClock`] value handed in by
//! the caller; there is no process-wide time state.

pub mod body;
pub mod clock;
pub mod rates;

pub use body::{OrbitalBody, Site};
pub use clock::SimulationClock;
pub use rates::{AngularRates, angular_rate, rates, spin_rate};
