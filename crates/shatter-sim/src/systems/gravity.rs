//! Gravity system — constant downward acceleration, clamped to max speed.

use hecs::World;

use shatter_core::components::Velocity;
use shatter_core::config::SimConfig;

/// Accelerate every shape downward, keeping vertical speed within
/// `[-max_speed, max_speed]`.
pub fn run(world: &mut World, config: &SimConfig, delta_time: f64) {
    for (_entity, vel) in world.query_mut::<&mut Velocity>() {
        vel.y = (vel.y + config.gravity_accel * delta_time)
            .clamp(-config.max_speed, config.max_speed);
    }
}
