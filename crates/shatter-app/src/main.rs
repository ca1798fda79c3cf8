//! SHATTER — bouncing, shattering shapes published as NDJSON snapshots.
//!
//! Snapshot records go to stdout, one JSON object per shape per tick;
//! logs go to stderr so the two streams never interleave.

use std::sync::mpsc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use shatter_app::sim_loop;
use shatter_core::config::SimConfig;
use shatter_core::sink::{JsonLineSink, SnapshotSink};
use shatter_sim::SimulationEngine;

/// Topic identity the snapshot stream is published under.
const TOPIC: &str = "shapes";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let config = SimConfig::default();
    let engine = SimulationEngine::new(config);

    // The sink must be live before the first tick.
    let mut sink = JsonLineSink::new(TOPIC, std::io::stdout().lock());

    // The sender stays alive for the lifetime of the loop; the process is
    // stopped by the host (signal), which also ends the loop's tick.
    let (_cmd_tx, cmd_rx) = mpsc::channel();
    sim_loop::run(engine, &mut sink, cmd_rx);

    sink.close().context("failed to close snapshot sink")?;
    Ok(())
}
