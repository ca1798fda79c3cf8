//! Kinematic integration system.
//!
//! Updates Position from Velocity each tick: position += velocity * dt.
//! Runs after the velocity-shaping systems and before the boundary
//! collider, so the collider always sees this tick's final trajectory.

use hecs::World;

use shatter_core::components::{Position, Velocity};

/// Run kinematic integration for all shapes with Position + Velocity.
pub fn run(world: &mut World, delta_time: f64) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.x += vel.x * delta_time;
        pos.y += vel.y * delta_time;
    }
}
