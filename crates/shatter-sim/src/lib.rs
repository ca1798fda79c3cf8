//! Simulation engine for SHATTER.
//!
//! Owns the hecs ECS world, runs the ordered system pipeline at a fixed
//! tick cadence, and publishes per-shape snapshots through the sink.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use shatter_core as core;
