//! Drag system — exponential velocity decay on both axes.

use hecs::World;

use shatter_core::components::Velocity;
use shatter_core::config::SimConfig;

pub fn run(world: &mut World, config: &SimConfig, delta_time: f64) {
    let decay = 1.0 - config.drag_coefficient * delta_time;
    for (_entity, vel) in world.query_mut::<&mut Velocity>() {
        vel.x *= decay;
        vel.y *= decay;
    }
}
