//! The publish-sink contract and the sinks shipped with the engine.
//!
//! The sink is an external collaborator with a narrow surface: construct it
//! before the first tick, publish one record per live shape per tick, close
//! it exactly once after the tick loop stops. Publish failures are soft —
//! the projector logs and moves on; retries, if any, belong to the sink.

use std::io::Write;

use tracing::info;

use crate::snapshot::ShapeSnapshot;

/// Errors produced by a sink.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// Failed to serialize a snapshot record.
    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),

    /// Failed to hand the record to the underlying transport.
    #[error("failed to write snapshot: {0}")]
    Io(#[from] std::io::Error),

    /// The sink was used after `close`.
    #[error("sink is closed")]
    Closed,
}

/// Receives one snapshot per live shape per tick.
pub trait SnapshotSink {
    /// Publish a single shape's snapshot. Fire-and-forget per shape:
    /// an error here never aborts the rest of the tick's batch.
    fn publish(&mut self, snapshot: &ShapeSnapshot) -> Result<(), SinkError>;

    /// Release the sink's resources. Must be called exactly once, after the
    /// tick loop stops. Publishing after close is an error.
    fn close(&mut self) -> Result<(), SinkError>;
}

/// Newline-delimited JSON over any writer. The app binary points this at
/// stdout; tests point it at a `Vec<u8>`.
pub struct JsonLineSink<W: Write> {
    topic: String,
    writer: W,
    closed: bool,
}

impl<W: Write> JsonLineSink<W> {
    /// Open a sink publishing to `topic` over `writer`.
    pub fn new(topic: impl Into<String>, writer: W) -> Self {
        let topic = topic.into();
        info!(topic = %topic, "snapshot sink ready");
        Self {
            topic,
            writer,
            closed: false,
        }
    }

    /// The topic identity this sink was opened with.
    pub fn topic(&self) -> &str {
        &self.topic
    }
}

impl<W: Write> SnapshotSink for JsonLineSink<W> {
    fn publish(&mut self, snapshot: &ShapeSnapshot) -> Result<(), SinkError> {
        if self.closed {
            return Err(SinkError::Closed);
        }
        let line = serde_json::to_string(snapshot)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn close(&mut self) -> Result<(), SinkError> {
        if self.closed {
            return Err(SinkError::Closed);
        }
        self.closed = true;
        self.writer.flush()?;
        info!(topic = %self.topic, "snapshot sink closed");
        Ok(())
    }
}

impl<W: Write> Drop for JsonLineSink<W> {
    fn drop(&mut self) {
        // Backstop only: `close` is still the one sanctioned release path.
        if !self.closed {
            let _ = self.writer.flush();
        }
    }
}

/// In-memory sink for tests and headless embedding.
#[derive(Debug, Default)]
pub struct MemorySink {
    published: Vec<ShapeSnapshot>,
    closed: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every snapshot published so far, in publish order.
    pub fn published(&self) -> &[ShapeSnapshot] {
        &self.published
    }

    /// Drop all captured snapshots, keeping the sink open.
    pub fn clear(&mut self) {
        self.published.clear();
    }
}

impl SnapshotSink for MemorySink {
    fn publish(&mut self, snapshot: &ShapeSnapshot) -> Result<(), SinkError> {
        if self.closed {
            return Err(SinkError::Closed);
        }
        self.published.push(*snapshot);
        Ok(())
    }

    fn close(&mut self) -> Result<(), SinkError> {
        if self.closed {
            return Err(SinkError::Closed);
        }
        self.closed = true;
        Ok(())
    }
}
