//! Events emitted by the simulation for the external audio collaborator.

use serde::{Deserialize, Serialize};

/// Discrete sound cues. The engine emits these (unless muted); the
/// collaborator decides what, if anything, to play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// The ship fired a bolt.
    ShipFired,
    /// An alien fired a bolt.
    AlienFired,
    /// A player bolt destroyed the alien at (row, col).
    AlienKilled { row: usize, col: usize },
    /// An alien bolt destroyed the ship.
    ShipDestroyed,
}
