//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions of `(world, config, delta_time)` — they do not
//! own state. Systems that create or destroy entities never do so while
//! iterating: destructions collect into a buffer applied after the query
//! pass, and new fragments stage in a pending list merged at the next tick
//! boundary.

pub mod boundary;
pub mod drag;
pub mod fragmenter;
pub mod gravity;
pub mod initializer;
pub mod movement;
pub mod projector;
pub mod rotator;
pub mod spawner;
