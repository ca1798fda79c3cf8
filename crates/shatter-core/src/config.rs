//! Simulation configuration.
//!
//! One explicit structure holding every tunable the engine consumes.
//! How the values are loaded (file, env, host program) is the caller's
//! concern; this crate only defines the shape and the fallback policy.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::*;

/// Per-system enable/disable switches. A disabled system is skipped
/// entirely — no state changes, no logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemToggles {
    pub spawner: bool,
    pub initializer: bool,
    pub gravity: bool,
    pub drag: bool,
    pub rotator: bool,
    pub movement: bool,
    pub boundary: bool,
    pub fragmenter: bool,
    pub projector: bool,
}

impl Default for SystemToggles {
    fn default() -> Self {
        Self {
            // Continuous replenishment is opt-in; everything else runs.
            spawner: false,
            initializer: true,
            gravity: true,
            drag: true,
            rotator: true,
            movement: true,
            boundary: true,
            fragmenter: true,
            projector: true,
        }
    }
}

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Target tick rate in Hz.
    pub tick_rate: u32,
    /// Upper bound on a single tick's delta time in seconds.
    /// Defaults to one tick interval at the target rate.
    pub max_delta_secs: f64,
    /// Canvas width in canvas units.
    pub canvas_width: f64,
    /// Canvas height in canvas units.
    pub canvas_height: f64,
    /// Downward acceleration (units/s²).
    pub gravity_accel: f64,
    /// Velocity decay coefficient (1/s).
    pub drag_coefficient: f64,
    /// Vertical speed clamp (units/s).
    pub max_speed: f64,
    /// Shapes created per second while the spawner is enabled.
    pub spawn_rate: f64,
    /// Extent of a freshly initialized shape.
    pub initial_size: f64,
    /// Size multiplier applied when a colliding shape fragments.
    pub shrink_factor: f64,
    /// Shapes shrinking below this extent are destroyed fragmentless.
    pub min_fragment_size: f64,
    /// Rotation increment in degrees per tick.
    pub angular_speed: f64,
    /// Shapes seeded at engine construction.
    pub initial_shapes: usize,
    pub systems: SystemToggles,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_rate: TICK_RATE,
            max_delta_secs: DT,
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            gravity_accel: GRAVITY_ACCEL,
            drag_coefficient: DRAG_COEFFICIENT,
            max_speed: MAX_SPEED,
            spawn_rate: SPAWN_RATE,
            initial_size: INITIAL_SIZE,
            shrink_factor: SHRINK_FACTOR,
            min_fragment_size: MIN_FRAGMENT_SIZE,
            angular_speed: ANGULAR_SPEED,
            initial_shapes: INITIAL_SHAPES,
            systems: SystemToggles::default(),
        }
    }
}

impl SimConfig {
    /// Replace malformed values with their documented defaults.
    ///
    /// A value a host deserialized from the outside world may be non-finite,
    /// non-positive, or otherwise unusable; each such value falls back to
    /// the matching constant rather than crashing the engine. Every fallback
    /// is logged.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if self.tick_rate == 0 {
            warn!(value = self.tick_rate, "invalid tick_rate, using default");
            self.tick_rate = defaults.tick_rate;
        }
        if !self.max_delta_secs.is_finite() || self.max_delta_secs <= 0.0 {
            warn!(value = self.max_delta_secs, "invalid max_delta_secs, using tick interval");
            self.max_delta_secs = 1.0 / self.tick_rate as f64;
        }
        if !self.canvas_width.is_finite() || self.canvas_width <= 0.0 {
            warn!(value = self.canvas_width, "invalid canvas_width, using default");
            self.canvas_width = defaults.canvas_width;
        }
        if !self.canvas_height.is_finite() || self.canvas_height <= 0.0 {
            warn!(value = self.canvas_height, "invalid canvas_height, using default");
            self.canvas_height = defaults.canvas_height;
        }
        if !self.gravity_accel.is_finite() {
            warn!(value = self.gravity_accel, "invalid gravity_accel, using default");
            self.gravity_accel = defaults.gravity_accel;
        }
        if !self.drag_coefficient.is_finite() || self.drag_coefficient < 0.0 {
            warn!(value = self.drag_coefficient, "invalid drag_coefficient, using default");
            self.drag_coefficient = defaults.drag_coefficient;
        }
        if !self.max_speed.is_finite() || self.max_speed <= 0.0 {
            warn!(value = self.max_speed, "invalid max_speed, using default");
            self.max_speed = defaults.max_speed;
        }
        if !self.spawn_rate.is_finite() || self.spawn_rate < 0.0 {
            warn!(value = self.spawn_rate, "invalid spawn_rate, using default");
            self.spawn_rate = defaults.spawn_rate;
        }
        if !self.initial_size.is_finite() || self.initial_size <= 0.0 {
            warn!(value = self.initial_size, "invalid initial_size, using default");
            self.initial_size = defaults.initial_size;
        }
        if !self.shrink_factor.is_finite()
            || self.shrink_factor <= 0.0
            || self.shrink_factor >= 1.0
        {
            warn!(value = self.shrink_factor, "invalid shrink_factor, using default");
            self.shrink_factor = defaults.shrink_factor;
        }
        if !self.min_fragment_size.is_finite() || self.min_fragment_size <= 0.0 {
            warn!(
                value = self.min_fragment_size,
                "invalid min_fragment_size, using a quarter of initial_size"
            );
            self.min_fragment_size = self.initial_size / 4.0;
        }
        if !self.angular_speed.is_finite() {
            warn!(value = self.angular_speed, "invalid angular_speed, using default");
            self.angular_speed = defaults.angular_speed;
        }

        self
    }

    /// Nominal duration of one tick in seconds at the target rate.
    pub fn tick_interval(&self) -> f64 {
        1.0 / self.tick_rate as f64
    }
}
