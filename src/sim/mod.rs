pub mod binding;
pub mod generator;
pub mod planets;
pub mod scheduler;
pub mod snapshot;
pub mod volume;

pub use binding::*;
pub use generator::*;
pub use planets::*;
pub use scheduler::*;
pub use snapshot::*;
pub use volume::*;

use thiserror::Error;

use crate::host::DeviceId;

/// Cadences and tuning constants for one simulation session.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Ticks between field-membership scans. 10 ticks is one sixth of a
    /// second at the usual 60 ticks/s.
    pub scan_period: u64,
    /// Ticks between planet catalog rebuilds. Planets rarely move relative
    /// to generators, so this is minutes of simulated time.
    pub planet_scan_period: u64,
    /// How hard natural gravity dampens artificial fields. The host game
    /// uses `clamp(1 - 2 * natural, 0, 1)`; the 2.0 is empirical, not
    /// derived.
    pub natural_dampening: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            scan_period: 10,
            planet_scan_period: 60 * 180,
            natural_dampening: 2.0,
        }
    }
}

impl SimConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scan_period(mut self, ticks: u64) -> Self {
        self.scan_period = ticks.max(1);
        self
    }

    pub fn with_planet_scan_period(mut self, ticks: u64) -> Self {
        self.planet_scan_period = ticks.max(1);
        self
    }

    pub fn with_natural_dampening(mut self, dampening: f32) -> Self {
        self.natural_dampening = dampening;
        self
    }
}

#[derive(Debug, Error)]
pub enum SimError {
    /// The device handle stopped resolving while the binding still expected
    /// it to be live.
    #[error("device {0:?} is not present in the host world")]
    DeviceUnavailable(DeviceId),
}
