//! Simulation time tracking.

use serde::{Deserialize, Serialize};

/// Simulation clock state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `delta_time` seconds.
    pub fn advance(&mut self, delta_time: f64) {
        self.tick += 1;
        self.elapsed_secs += delta_time;
    }
}
