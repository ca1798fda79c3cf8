//! Rotator system — advances orientation by the per-tick angular increment.
//!
//! The increment is deliberately NOT scaled by delta time: a shape turns the
//! same number of degrees every tick regardless of tick duration. Unlike the
//! other kinematic systems this makes rotation cadence-dependent; the
//! behavior is preserved from the reference and pinned by a test.

use hecs::World;

use shatter_core::components::{AngularVelocity, Rotation};

pub fn run(world: &mut World) {
    for (_entity, (rot, ang)) in world.query_mut::<(&mut Rotation, &AngularVelocity)>() {
        rot.angle += ang.value;
    }
}
