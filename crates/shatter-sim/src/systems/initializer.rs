//! Initializer system — randomizes the kinematic state of freshly spawned
//! shapes, exactly once per shape.
//!
//! Fragment clones never carry the `Uninitialized` marker: they inherit
//! live values from their parent and skip this system entirely.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use shatter_core::components::{
    AngularVelocity, CollisionFlags, Position, Rotation, Size, Uninitialized, Velocity,
};
use shatter_core::config::SimConfig;

/// Assign starting state to every shape still carrying the marker, then
/// strip the marker so the shape is never initialized twice.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, config: &SimConfig, buffer: &mut Vec<Entity>) {
    buffer.clear();

    for (entity, (_marker, pos, vel, size, rot, ang, flags)) in world.query_mut::<(
        &Uninitialized,
        &mut Position,
        &mut Velocity,
        &mut Size,
        &mut Rotation,
        &mut AngularVelocity,
        &mut CollisionFlags,
    )>() {
        // Symmetric coupling: both axes share one random speed draw.
        let speed = rng.gen_range(1.0..=config.max_speed / 2.0);
        vel.x = speed;
        vel.y = speed;

        size.magnitude = config.initial_size;

        let half = config.initial_size / 2.0;
        pos.x = rng.gen_range(half..config.canvas_width - half);
        pos.y = rng.gen_range(half..config.canvas_height - half);

        rot.angle = rng.gen_range(0.0..360.0);
        ang.value = config.angular_speed;
        *flags = CollisionFlags::default();

        buffer.push(entity);
    }

    for entity in buffer.drain(..) {
        world
            .remove_one::<Uninitialized>(entity)
            .expect("uninitialized marker vanished mid-tick");
    }
}
