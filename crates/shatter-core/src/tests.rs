#[cfg(test)]
mod tests {
    use crate::components::{CollisionFlags, Position, Size, Velocity};
    use crate::config::SimConfig;
    use crate::sink::{JsonLineSink, MemorySink, SinkError, SnapshotSink};
    use crate::snapshot::{color_for_id, FillKind, ShapeColor, ShapeSnapshot, PALETTE};

    fn sample_snapshot() -> ShapeSnapshot {
        ShapeSnapshot {
            color: ShapeColor::Blue,
            x: 120.0,
            y: 135.5,
            size: 35.0,
            angle: 42.0,
            fill_kind: FillKind::Solid,
        }
    }

    /// Verify the color enum round-trips through serde_json.
    #[test]
    fn test_shape_color_serde() {
        for color in PALETTE {
            let json = serde_json::to_string(&color).unwrap();
            let back: ShapeColor = serde_json::from_str(&json).unwrap();
            assert_eq!(color, back);
        }
    }

    #[test]
    fn test_shape_color_wire_names_are_uppercase() {
        assert_eq!(serde_json::to_string(&ShapeColor::Blue).unwrap(), "\"BLUE\"");
        assert_eq!(
            serde_json::to_string(&ShapeColor::Magenta).unwrap(),
            "\"MAGENTA\""
        );
    }

    #[test]
    fn test_fill_kind_serde() {
        let variants = vec![
            FillKind::Solid,
            FillKind::Transparent,
            FillKind::HorizontalHatch,
            FillKind::VerticalHatch,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: FillKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// The wire record must expose exactly the agreed field names.
    #[test]
    fn test_snapshot_wire_fields() {
        let value = serde_json::to_value(sample_snapshot()).unwrap();
        let object = value.as_object().unwrap();

        for field in ["color", "x", "y", "size", "angle", "fill_kind"] {
            assert!(object.contains_key(field), "missing wire field {field}");
        }
        assert_eq!(object.len(), 6);
        assert_eq!(object["color"], "BLUE");
        assert_eq!(object["fill_kind"], "SOLID");
    }

    /// Identity color is a pure function of the entity id.
    #[test]
    fn test_color_for_id_is_stable_and_cyclic() {
        for id in 0..64u32 {
            assert_eq!(color_for_id(id), color_for_id(id));
            assert_eq!(color_for_id(id), color_for_id(id + 8));
        }
        assert_eq!(color_for_id(0), ShapeColor::Purple);
        assert_eq!(color_for_id(7), ShapeColor::Orange);
        assert_eq!(color_for_id(8), ShapeColor::Purple);
    }

    #[test]
    fn test_component_defaults() {
        assert_eq!(Position::default(), Position::new(0.0, 0.0));
        assert_eq!(Velocity::default().speed(), 0.0);
        assert_eq!(Size::new(35.0).half(), 17.5);
        assert!(!CollisionFlags::default().any());
    }

    #[test]
    fn test_config_default_round_trips_through_serde() {
        let config = SimConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: SimConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    /// Partial config documents pick up defaults for missing fields.
    #[test]
    fn test_config_partial_deserialization() {
        let config: SimConfig =
            serde_json::from_str(r#"{"spawn_rate": 5.0, "systems": {"spawner": true}}"#).unwrap();
        assert_eq!(config.spawn_rate, 5.0);
        assert!(config.systems.spawner);
        assert_eq!(config.canvas_width, SimConfig::default().canvas_width);
        assert!(config.systems.gravity);
    }

    /// Malformed values fall back to the documented defaults.
    #[test]
    fn test_config_sanitized_replaces_malformed_values() {
        let config = SimConfig {
            tick_rate: 0,
            canvas_width: -10.0,
            canvas_height: f64::NAN,
            shrink_factor: 1.5,
            spawn_rate: -3.0,
            initial_size: 0.0,
            min_fragment_size: f64::INFINITY,
            max_delta_secs: 0.0,
            ..Default::default()
        }
        .sanitized();

        let defaults = SimConfig::default();
        assert_eq!(config.tick_rate, defaults.tick_rate);
        assert_eq!(config.canvas_width, defaults.canvas_width);
        assert_eq!(config.canvas_height, defaults.canvas_height);
        assert_eq!(config.shrink_factor, defaults.shrink_factor);
        assert_eq!(config.spawn_rate, defaults.spawn_rate);
        assert_eq!(config.initial_size, defaults.initial_size);
        assert_eq!(config.min_fragment_size, defaults.initial_size / 4.0);
        assert_eq!(config.max_delta_secs, config.tick_interval());
    }

    #[test]
    fn test_config_sanitized_keeps_valid_values() {
        let config = SimConfig {
            canvas_width: 500.0,
            shrink_factor: 0.5,
            ..Default::default()
        };
        let sanitized = config.clone().sanitized();
        assert_eq!(config, sanitized);
    }

    #[test]
    fn test_json_line_sink_writes_one_line_per_publish() {
        let mut buffer = Vec::new();
        {
            let mut sink = JsonLineSink::new("shapes", &mut buffer);
            assert_eq!(sink.topic(), "shapes");
            sink.publish(&sample_snapshot()).unwrap();
            sink.publish(&sample_snapshot()).unwrap();
            sink.close().unwrap();
        }

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            let back: ShapeSnapshot = serde_json::from_str(line).unwrap();
            assert_eq!(back, sample_snapshot());
        }
    }

    #[test]
    fn test_sink_rejects_use_after_close() {
        let mut sink = MemorySink::new();
        sink.publish(&sample_snapshot()).unwrap();
        sink.close().unwrap();

        assert!(matches!(
            sink.publish(&sample_snapshot()),
            Err(SinkError::Closed)
        ));
        assert!(matches!(sink.close(), Err(SinkError::Closed)));
        assert_eq!(sink.published().len(), 1);
    }
}
