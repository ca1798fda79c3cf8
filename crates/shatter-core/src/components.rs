//! ECS components for hecs entities.
//!
//! Components are plain data structs with no behavior of their own.
//! Simulation logic lives in systems, not components.

use serde::{Deserialize, Serialize};

/// 2D position on the canvas. Origin is the top-left corner;
/// x grows rightward, y grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity in canvas units per second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// Shape extent. A shape occupies `magnitude` canvas units on each axis,
/// centered on its position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub magnitude: f64,
}

/// Orientation in degrees. Unbounded — the angle is never wrapped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    pub angle: f64,
}

/// Rotation increment in degrees per tick (not per second).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AngularVelocity {
    pub value: f64,
}

/// Per-axis wall-collision flags. Recomputed from scratch by the boundary
/// collider every tick; never carries state across ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CollisionFlags {
    pub x_hit: bool,
    pub y_hit: bool,
}

/// Marker for shapes that have been created but not yet initialized.
/// The initializer system consumes the marker, exactly once per shape.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Uninitialized;

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Speed magnitude.
    pub fn speed(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl Size {
    pub fn new(magnitude: f64) -> Self {
        Self { magnitude }
    }

    /// Half the extent — the margin a shape needs from each wall.
    pub fn half(&self) -> f64 {
        self.magnitude / 2.0
    }
}

impl CollisionFlags {
    /// True if either axis collided this tick.
    pub fn any(&self) -> bool {
        self.x_hit || self.y_hit
    }
}
