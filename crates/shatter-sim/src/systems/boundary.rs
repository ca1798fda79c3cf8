//! Boundary collider — keeps every shape inside the canvas and reports
//! wall collisions.
//!
//! Two-step test per axis: first a geometric mirror back inside the
//! half-size-adjusted bounds, then a velocity-direction gate. Only a shape
//! that was actually moving into the wall counts as colliding; a shape
//! already moving away (reflected earlier the same tick) is left alone.

use hecs::World;

use shatter_core::components::{CollisionFlags, Position, Size, Velocity};
use shatter_core::config::SimConfig;

/// Clamp positions to the canvas, invert wall-bound velocities, and
/// recompute both collision flags from scratch.
pub fn run(world: &mut World, config: &SimConfig) {
    for (_entity, (pos, vel, size, flags)) in world.query_mut::<(
        &mut Position,
        &mut Velocity,
        &Size,
        &mut CollisionFlags,
    )>() {
        let half = size.half();

        let (x, x_overshoot) = reflect(pos.x, half, config.canvas_width - half);
        let (y, y_overshoot) = reflect(pos.y, half, config.canvas_height - half);
        pos.x = x;
        pos.y = y;

        flags.x_hit = x_overshoot * vel.x < 0.0;
        if flags.x_hit {
            vel.x = -vel.x;
        }
        flags.y_hit = y_overshoot * vel.y < 0.0;
        if flags.y_hit {
            vel.y = -vel.y;
        }
    }
}

/// Mirror `value` back inside `[lo, hi]`.
///
/// Returns the reflected value and the overshoot direction: `-1.0` past the
/// high wall, `+1.0` past the low wall, `0.0` inside bounds. The sign is
/// chosen so that `overshoot * velocity < 0` exactly when the velocity was
/// directed into the overshot wall.
fn reflect(value: f64, lo: f64, hi: f64) -> (f64, f64) {
    if value > hi {
        (hi - (value - hi), -1.0)
    } else if value < lo {
        (lo + (lo - value), 1.0)
    } else {
        (value, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world_setup::spawn_shape;

    fn config() -> SimConfig {
        SimConfig::default()
    }

    #[test]
    fn test_reflect_mirrors_past_walls() {
        assert_eq!(reflect(250.0, 17.5, 222.5), (195.0, -1.0));
        assert_eq!(reflect(10.0, 17.5, 222.5), (25.0, 1.0));
        assert_eq!(reflect(100.0, 17.5, 222.5), (100.0, 0.0));
        // Exactly on a wall is in bounds, not an overshoot.
        assert_eq!(reflect(17.5, 17.5, 222.5), (17.5, 0.0));
        assert_eq!(reflect(222.5, 17.5, 222.5), (222.5, 0.0));
    }

    #[test]
    fn test_inbound_overshoot_inverts_velocity_and_flags() {
        let mut world = World::new();
        let entity = spawn_shape(
            &mut world,
            Position::new(230.0, 100.0),
            Velocity::new(40.0, 0.0),
            Size::new(35.0),
        );

        run(&mut world, &config());

        let pos = world.get::<&Position>(entity).unwrap();
        let vel = world.get::<&Velocity>(entity).unwrap();
        let flags = world.get::<&CollisionFlags>(entity).unwrap();
        assert_eq!(pos.x, 215.0);
        assert_eq!(vel.x, -40.0);
        assert!(flags.x_hit);
        assert!(!flags.y_hit);
    }

    /// A shape past the wall but already moving away must not be flagged —
    /// that would double-invert a reflection from earlier in the tick.
    #[test]
    fn test_outbound_overshoot_is_not_a_collision() {
        let mut world = World::new();
        let entity = spawn_shape(
            &mut world,
            Position::new(230.0, 100.0),
            Velocity::new(-40.0, 0.0),
            Size::new(35.0),
        );

        run(&mut world, &config());

        let pos = world.get::<&Position>(entity).unwrap();
        let vel = world.get::<&Velocity>(entity).unwrap();
        let flags = world.get::<&CollisionFlags>(entity).unwrap();
        assert_eq!(pos.x, 215.0, "position is still mirrored inside");
        assert_eq!(vel.x, -40.0, "velocity is left alone");
        assert!(!flags.x_hit);
    }

    #[test]
    fn test_flags_are_recomputed_every_pass() {
        let mut world = World::new();
        let entity = spawn_shape(
            &mut world,
            Position::new(230.0, 260.0),
            Velocity::new(40.0, 40.0),
            Size::new(35.0),
        );

        run(&mut world, &config());
        assert!(world.get::<&CollisionFlags>(entity).unwrap().any());

        // Next pass: shape is inside and moving away on both axes.
        run(&mut world, &config());
        let flags = world.get::<&CollisionFlags>(entity).unwrap();
        assert!(!flags.x_hit);
        assert!(!flags.y_hit);
    }
}
