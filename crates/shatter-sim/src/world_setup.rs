//! Shape spawn factories for populating the simulation world.

use hecs::{Entity, World};

use shatter_core::components::{
    AngularVelocity, CollisionFlags, Position, Rotation, Size, Uninitialized, Velocity,
};

/// A fully-valued shape waiting to enter the world at the next tick
/// boundary. Fragments are staged here so they stay invisible to every
/// system for the remainder of the tick that created them.
#[derive(Debug, Clone, Copy)]
pub struct PendingShape {
    pub position: Position,
    pub velocity: Velocity,
    pub size: Size,
    pub rotation: Rotation,
    pub angular: AngularVelocity,
}

impl PendingShape {
    /// Merge this shape into the live set. Collision flags start cleared;
    /// the boundary collider recomputes them before anything reads them.
    pub fn spawn(self, world: &mut World) -> Entity {
        world.spawn((
            self.position,
            self.velocity,
            self.size,
            self.rotation,
            self.angular,
            CollisionFlags::default(),
        ))
    }
}

/// Spawn one uninitialized shape: the full component set, zeroed values,
/// and the marker the initializer consumes.
pub fn spawn_uninitialized_shape(world: &mut World) -> Entity {
    world.spawn((
        Uninitialized,
        Position::default(),
        Velocity::default(),
        Size::default(),
        Rotation::default(),
        AngularVelocity::default(),
        CollisionFlags::default(),
    ))
}

/// Bulk-spawn `count` uninitialized shapes.
pub fn spawn_uninitialized_shapes(world: &mut World, count: usize) {
    for _ in 0..count {
        spawn_uninitialized_shape(world);
    }
}

/// Spawn a shape with explicit kinematic state, bypassing the initializer.
/// Used by tests and by hosts that stage their own scenarios.
pub fn spawn_shape(
    world: &mut World,
    position: Position,
    velocity: Velocity,
    size: Size,
) -> Entity {
    world.spawn((
        position,
        velocity,
        size,
        Rotation::default(),
        AngularVelocity::default(),
        CollisionFlags::default(),
    ))
}
