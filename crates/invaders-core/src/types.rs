//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D position on the playfield (abstract pixels, y-up).
/// The origin is the bottom-left corner of the playfield.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity in playfield units **per resolved frame** (not per
/// second): projectile motion is `position += velocity` once per
/// engine update, matching the fixed per-frame unit of the original.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Axis-aligned bounding-box overlap test between two boxes
    /// centered on `self` and `other` with the given full extents.
    pub fn overlaps(&self, w: f64, h: f64, other: &Position, ow: f64, oh: f64) -> bool {
        (self.x - other.x).abs() <= (w + ow) / 2.0 && (self.y - other.y).abs() <= (h + oh) / 2.0
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
