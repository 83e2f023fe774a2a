//! Caller-owned point buffers the solver overwrites every frame.

use cislunar_core::vector::Vector3;

use crate::mission::SolverConfig;

/// Point sequences for one solve, in world coordinates.
///
/// Allocate once with [`TransferGeometry::for_config`] and hand the same value to
/// every solve; the fixed-length buffers are overwritten in place and the parking
/// arc is truncated and refilled without giving up its capacity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransferGeometry {
    /// Launch site to parking-orbit entry, `ascent_segments + 1` points.
    pub ascent: Vec<Vector3>,
    /// Entry to burn along the parking orbit; length follows the solved sweep.
    pub parking: Vec<Vector3>,
    /// Burn point to the landing site, `transfer_segments + 1` points.
    pub transfer: Vec<Vector3>,
}

impl TransferGeometry {
    pub fn for_config(config: &SolverConfig) -> Self {
        Self {
            ascent: vec![[0.0; 3]; config.ascent_segments + 1],
            parking: Vec::with_capacity(config.parking_segments + 1),
            transfer: vec![[0.0; 3]; config.transfer_segments + 1],
        }
    }

    /// Bring the fixed-length buffers to the sizes `config` expects; no-op when they already match.
    pub(crate) fn fit(&mut self, config: &SolverConfig) {
        self.ascent.resize(config.ascent_segments + 1, [0.0; 3]);
        self.transfer.resize(config.transfer_segments + 1, [0.0; 3]);
    }
}
