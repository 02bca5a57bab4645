//! Wave snapshot — the complete visible state handed to the
//! application layer after each update.

use serde::{Deserialize, Serialize};

use crate::enums::{AlienTier, Allegiance, WaveOutcome};
use crate::events::AudioEvent;
use crate::types::Position;

/// Everything a renderer or the outer state machine needs, rebuilt
/// from scratch each frame. The engine keeps no reference to it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveSnapshot {
    /// None while the ship is destroyed and not yet replaced.
    pub ship: Option<ShipView>,
    /// Occupied formation slots in row-major order.
    pub aliens: Vec<AlienView>,
    /// Bolts currently in flight, in a stable deterministic order.
    pub bolts: Vec<BoltView>,
    pub score: u32,
    pub lives: u32,
    pub aliens_remaining: u32,
    /// Current seconds between formation steps (shrinks per kill).
    pub step_interval: f64,
    /// True once any surviving alien's lower edge has crossed the
    /// defense line; the wave is lost regardless of lives.
    pub defense_line_breached: bool,
    /// Set once the wave has been decided.
    pub outcome: Option<WaveOutcome>,
    /// Sound cues emitted this frame (empty while muted).
    pub audio_events: Vec<AudioEvent>,
}

/// Ship presence and position for drawing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShipView {
    pub position: Position,
}

/// One occupied formation slot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AlienView {
    pub position: Position,
    pub tier: AlienTier,
    pub row: usize,
    pub col: usize,
}

/// One bolt in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BoltView {
    pub position: Position,
    pub allegiance: Allegiance,
}
