//! Per-shape snapshot records — the visible state published once per tick.

use serde::{Deserialize, Serialize};

/// The fixed identity palette. A shape's color is `PALETTE[id % 8]`:
/// stable for a given entity id, shared between simultaneously-live shapes
/// once the population exceeds the palette.
pub const PALETTE: [ShapeColor; 8] = [
    ShapeColor::Purple,
    ShapeColor::Blue,
    ShapeColor::Red,
    ShapeColor::Green,
    ShapeColor::Yellow,
    ShapeColor::Cyan,
    ShapeColor::Magenta,
    ShapeColor::Orange,
];

/// Shape identity colors, serialized as uppercase names on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ShapeColor {
    Purple,
    Blue,
    Red,
    Green,
    Yellow,
    Cyan,
    Magenta,
    Orange,
}

/// Shape fill style. The projector always publishes `Solid`; the other
/// variants exist so consumers share one wire vocabulary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FillKind {
    #[default]
    Solid,
    Transparent,
    HorizontalHatch,
    VerticalHatch,
}

/// Immutable record of one live shape's visible state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeSnapshot {
    pub color: ShapeColor,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    /// Orientation in degrees.
    pub angle: f64,
    pub fill_kind: FillKind,
}

/// Deterministic identity color for an entity id.
pub fn color_for_id(id: u32) -> ShapeColor {
    PALETTE[id as usize % PALETTE.len()]
}
