//! Simulation engine — the core of SHATTER.
//!
//! `SimulationEngine` owns the hecs ECS world, derives each tick's delta
//! time, runs the system pipeline in order, and hands per-shape snapshots
//! to the sink. Completely headless, enabling deterministic testing.

use std::time::Instant;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use shatter_core::config::SimConfig;
use shatter_core::constants::MIN_DELTA_SECS;
use shatter_core::sink::SnapshotSink;
use shatter_core::types::SimTime;

use crate::systems;
use crate::world_setup::{self, PendingShape};

/// Wall-clock delta-time source for `tick`.
///
/// The first tick reports one nominal interval (there is no previous call to
/// measure from); every later tick reports real elapsed time, clamped so no
/// system ever observes a zero, negative, or runaway delta.
#[derive(Debug, Default)]
struct TickClock {
    last: Option<Instant>,
}

impl TickClock {
    fn delta(&mut self, nominal: f64, cap: f64) -> f64 {
        let now = Instant::now();
        let elapsed = match self.last {
            Some(previous) => now.duration_since(previous).as_secs_f64(),
            None => nominal,
        };
        self.last = Some(now);
        elapsed.max(MIN_DELTA_SECS).min(cap.max(MIN_DELTA_SECS))
    }
}

/// The simulation engine. Owns the ECS world and all shape lifecycle state.
pub struct SimulationEngine {
    world: World,
    config: SimConfig,
    time: SimTime,
    rng: ChaCha8Rng,
    clock: TickClock,
    /// Fractional spawn credit carried between ticks.
    spawn_carry: f64,
    /// Fragments staged this tick, merged at the next tick boundary.
    pending_fragments: Vec<PendingShape>,
    despawn_buffer: Vec<hecs::Entity>,
    init_buffer: Vec<hecs::Entity>,
}

impl SimulationEngine {
    /// Create a new engine. Malformed config values fall back to their
    /// documented defaults; the initial shape population is seeded
    /// uninitialized and comes alive on the first tick.
    pub fn new(config: SimConfig) -> Self {
        let config = config.sanitized();
        let mut world = World::new();
        world_setup::spawn_uninitialized_shapes(&mut world, config.initial_shapes);

        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self {
            world,
            config,
            time: SimTime::default(),
            rng,
            clock: TickClock::default(),
            spawn_carry: 0.0,
            pending_fragments: Vec::new(),
            despawn_buffer: Vec::new(),
            init_buffer: Vec::new(),
        }
    }

    /// Advance one tick using measured wall-clock delta time.
    pub fn tick(&mut self, sink: &mut dyn SnapshotSink) {
        let delta_time = self
            .clock
            .delta(self.config.tick_interval(), self.config.max_delta_secs);
        self.step(delta_time, sink);
    }

    /// Advance one tick with an explicit delta time — the deterministic
    /// entry point. The delta is floored to a strictly positive epsilon.
    pub fn step(&mut self, delta_time: f64, sink: &mut dyn SnapshotSink) {
        let delta_time = delta_time.max(MIN_DELTA_SECS);

        // Fragments staged last tick become visible now, before any system
        // runs — never mid-pass.
        for fragment in self.pending_fragments.drain(..) {
            fragment.spawn(&mut self.world);
        }

        let toggles = self.config.systems;
        if toggles.spawner {
            systems::spawner::run(&mut self.world, &mut self.spawn_carry, &self.config, delta_time);
        }
        if toggles.initializer {
            systems::initializer::run(&mut self.world, &mut self.rng, &self.config, &mut self.init_buffer);
        }
        if toggles.gravity {
            systems::gravity::run(&mut self.world, &self.config, delta_time);
        }
        if toggles.drag {
            systems::drag::run(&mut self.world, &self.config, delta_time);
        }
        if toggles.rotator {
            systems::rotator::run(&mut self.world);
        }
        if toggles.movement {
            systems::movement::run(&mut self.world, delta_time);
        }
        if toggles.boundary {
            systems::boundary::run(&mut self.world, &self.config);
        }
        if toggles.fragmenter {
            systems::fragmenter::run(
                &mut self.world,
                &self.config,
                &mut self.despawn_buffer,
                &mut self.pending_fragments,
            );
        }
        if toggles.projector {
            systems::projector::run(&self.world, sink);
        }

        self.time.advance(delta_time);
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the effective (sanitized) configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Number of live shapes. Staged fragments are not counted until they
    /// enter the world at the next tick boundary.
    pub fn population(&self) -> u32 {
        self.world.len()
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for staging test scenarios.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
