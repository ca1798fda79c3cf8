//! Spawner system — creates new uninitialized shapes at a configured rate.

use hecs::World;
use tracing::debug;

use shatter_core::config::SimConfig;

use crate::world_setup;

/// Spawn `spawn_rate * delta_time` shapes, carrying the fractional
/// remainder across ticks so low rates still spawn eventually instead of
/// being truncated to zero forever.
///
/// Returns the number of shapes created this tick.
pub fn run(world: &mut World, carry: &mut f64, config: &SimConfig, delta_time: f64) -> usize {
    *carry += config.spawn_rate * delta_time;
    let count = carry.floor() as usize;
    *carry -= count as f64;

    world_setup::spawn_uninitialized_shapes(world, count);
    if count > 0 {
        debug!(count, "spawned shapes");
    }
    count
}
