//! Core types and definitions for the SHATTER simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, configuration, snapshot records, the publish-sink contract,
//! and constants. It has no dependency on the simulation runtime.

pub mod components;
pub mod config;
pub mod constants;
pub mod sink;
pub mod snapshot;
pub mod types;

#[cfg(test)]
mod tests;
