//! ECS components for hecs entities, plus the formation slot payload.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in the sim crate's systems, not here.

use serde::{Deserialize, Serialize};

use crate::enums::{AlienTier, Allegiance};
use crate::types::Position;

/// Marks an entity as the player's ship. At most one exists; a
/// destroyed ship is despawned outright, never left as a zombie.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ship;

/// A laser bolt in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bolt {
    pub allegiance: Allegiance,
}

/// Payload of one occupied formation slot. Aliens are not ECS
/// entities: the formation owns them in a fixed grid and destroys
/// them in place by emptying the slot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Alien {
    pub position: Position,
    pub tier: AlienTier,
}

// Position and Velocity from types.rs double as ECS components on
// ship and bolt entities.
