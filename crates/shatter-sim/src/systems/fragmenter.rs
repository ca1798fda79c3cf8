//! Fragmenter system — shatters shapes that hit a wall this tick.
//!
//! A colliding shape shrinks by the configured factor. If the result is
//! still at least the minimum fragment size, two fragments are staged:
//! both inherit the parent's position, rotation, angular velocity, and
//! pre-shrink velocity; the second has the axis opposite the collision
//! negated so the pair takes divergent paths. The parent is destroyed
//! either way. Staged fragments enter the world at the next tick boundary,
//! so this pass never revisits its own offspring.

use hecs::{Entity, World};
use tracing::trace;

use shatter_core::components::{
    AngularVelocity, CollisionFlags, Position, Rotation, Size, Velocity,
};
use shatter_core::config::SimConfig;

use crate::world_setup::PendingShape;

pub fn run(
    world: &mut World,
    config: &SimConfig,
    despawn_buffer: &mut Vec<Entity>,
    pending: &mut Vec<PendingShape>,
) {
    despawn_buffer.clear();

    for (entity, (flags, size, vel, pos, rot, ang)) in world.query_mut::<(
        &CollisionFlags,
        &Size,
        &Velocity,
        &Position,
        &Rotation,
        &AngularVelocity,
    )>() {
        if !flags.any() {
            continue;
        }

        let new_size = size.magnitude * config.shrink_factor;
        if new_size >= config.min_fragment_size {
            let keeper = PendingShape {
                position: *pos,
                velocity: *vel,
                size: Size::new(new_size),
                rotation: *rot,
                angular: *ang,
            };
            // The diverging fragment negates the axis the collision did NOT
            // touch, splitting the pair onto mirrored trajectories.
            let diverged = if flags.x_hit {
                Velocity::new(vel.x, -vel.y)
            } else {
                Velocity::new(-vel.x, vel.y)
            };
            pending.push(keeper);
            pending.push(PendingShape {
                velocity: diverged,
                ..keeper
            });
            trace!(parent = entity.id(), new_size, "shape fragmented");
        } else {
            trace!(parent = entity.id(), new_size, "shape below fragment floor, destroyed");
        }

        despawn_buffer.push(entity);
    }

    for entity in despawn_buffer.drain(..) {
        world
            .despawn(entity)
            .expect("fragmenting shape vanished mid-tick");
    }
}
