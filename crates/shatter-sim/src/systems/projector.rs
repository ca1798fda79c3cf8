//! Projector system — publishes every live shape's visible state.
//!
//! Read-only over the world. Publish is fire-and-forget per shape: a sink
//! error is logged and the rest of the batch still goes out.

use hecs::World;
use tracing::warn;

use shatter_core::components::{Position, Rotation, Size};
use shatter_core::sink::SnapshotSink;
use shatter_core::snapshot::{color_for_id, FillKind, ShapeSnapshot};

/// Publish one snapshot per live shape, in visitation order.
/// Returns the number of snapshots the sink accepted.
pub fn run(world: &World, sink: &mut dyn SnapshotSink) -> usize {
    let mut published = 0;

    for (entity, (pos, size, rot)) in world.query::<(&Position, &Size, &Rotation)>().iter() {
        let snapshot = ShapeSnapshot {
            color: color_for_id(entity.id()),
            x: pos.x,
            y: pos.y,
            size: size.magnitude,
            angle: rot.angle,
            fill_kind: FillKind::Solid,
        };

        match sink.publish(&snapshot) {
            Ok(()) => published += 1,
            Err(err) => warn!(entity = entity.id(), %err, "failed to publish shape snapshot"),
        }
    }

    published
}
