//! Simulation constants and default tuning parameters.

/// Default simulation tick rate (Hz).
pub const TICK_RATE: u32 = 100;

/// Seconds per tick at the default rate.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Smallest delta time the scheduler will report. Guards against a host
/// clock that reports zero elapsed time between ticks.
pub const MIN_DELTA_SECS: f64 = 1e-6;

// --- Canvas ---

/// Canvas width in canvas units.
pub const CANVAS_WIDTH: f64 = 240.0;

/// Canvas height in canvas units.
pub const CANVAS_HEIGHT: f64 = 270.0;

// --- Kinematics ---

/// Downward acceleration applied by the gravity system (units/s²).
pub const GRAVITY_ACCEL: f64 = 70.0;

/// Exponential velocity decay coefficient applied by the drag system (1/s).
pub const DRAG_COEFFICIENT: f64 = 0.1;

/// Vertical speed clamp applied by the gravity system (units/s).
pub const MAX_SPEED: f64 = 130.0;

/// Rotation increment in degrees per tick.
pub const ANGULAR_SPEED: f64 = 80.0;

// --- Lifecycle ---

/// Shapes created per second while the spawner is enabled.
pub const SPAWN_RATE: f64 = 100.0;

/// Extent assigned to a freshly initialized shape.
pub const INITIAL_SIZE: f64 = 35.0;

/// Factor applied to a colliding shape's size before fragmenting.
pub const SHRINK_FACTOR: f64 = 0.8;

/// Shapes that would shrink below this extent are destroyed without
/// producing fragments. A quarter of the initial spawn size.
pub const MIN_FRAGMENT_SIZE: f64 = INITIAL_SIZE / 4.0;

/// Shapes seeded into the world at engine construction.
pub const INITIAL_SHAPES: usize = 8;
