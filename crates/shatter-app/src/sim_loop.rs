//! Paced simulation loop — runs the engine at the configured tick rate.
//!
//! Commands arrive via `mpsc` channel; a `Shutdown` (or a disconnected
//! sender) stops the loop after the in-flight tick completes, never
//! mid-tick. Closing the sink stays with the caller so it happens exactly
//! once regardless of how the loop ends.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use tracing::info;

use shatter_core::sink::SnapshotSink;
use shatter_sim::SimulationEngine;

/// Commands accepted by the running loop.
#[derive(Debug)]
pub enum LoopCommand {
    Shutdown,
}

/// Drive the engine until shutdown. Each iteration drains pending commands,
/// advances one tick, and sleeps toward the next tick instant.
pub fn run(
    mut engine: SimulationEngine,
    sink: &mut dyn SnapshotSink,
    cmd_rx: mpsc::Receiver<LoopCommand>,
) {
    let tick_duration = Duration::from_secs_f64(engine.config().tick_interval());
    let mut next_tick_time = Instant::now();
    info!(
        tick_rate = engine.config().tick_rate,
        population = engine.population(),
        "simulation loop started"
    );

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Shutdown) => {
                    info!(tick = engine.time().tick, "shutdown requested, stopping");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    info!(tick = engine.time().tick, "command channel closed, stopping");
                    return;
                }
            }
        }

        // 2. Advance one tick
        engine.tick(sink);

        // 3. Sleep until the next tick instant
        next_tick_time += tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick_duration * 2 {
            // Too far behind — reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shatter_core::config::SimConfig;
    use shatter_core::sink::MemorySink;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<LoopCommand>();

        tx.send(LoopCommand::Shutdown).unwrap();
        drop(tx);

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 1);
        assert!(matches!(commands[0], LoopCommand::Shutdown));
    }

    /// The loop ticks until told to stop, then the sink can still be
    /// closed by the caller — exactly once.
    #[test]
    fn test_loop_publishes_then_stops_on_shutdown() {
        let engine = SimulationEngine::new(SimConfig::default());
        let mut sink = MemorySink::new();
        let (tx, rx) = mpsc::channel();

        let stopper = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(50));
            let _ = tx.send(LoopCommand::Shutdown);
        });

        run(engine, &mut sink, rx);
        stopper.join().unwrap();

        assert!(
            !sink.published().is_empty(),
            "loop should have completed at least one tick before shutdown"
        );
        sink.close().unwrap();
    }

    #[test]
    fn test_loop_stops_when_sender_is_dropped() {
        let engine = SimulationEngine::new(SimConfig::default());
        let mut sink = MemorySink::new();
        let (tx, rx) = mpsc::channel::<LoopCommand>();
        drop(tx);

        run(engine, &mut sink, rx);

        assert!(sink.published().is_empty(), "loop must stop before the first tick");
    }
}
