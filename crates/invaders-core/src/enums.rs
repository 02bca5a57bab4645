//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::ALIEN_ROWS;

/// Visual tier of an alien. Purely cosmetic from the engine's point
/// of view — the renderer picks a sprite per tier; score depends on
/// the grid row, not the tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlienTier {
    Scout,
    Soldier,
    Tank,
}

impl AlienTier {
    /// Tier banding by grid row (row 0 = top): the bottom two rows
    /// share a tier, the next two share the next, and so on.
    pub fn for_row(row: usize) -> Self {
        match ((ALIEN_ROWS - 1 - row) / 2) % 3 {
            0 => AlienTier::Tank,
            1 => AlienTier::Soldier,
            _ => AlienTier::Scout,
        }
    }
}

/// Which side the formation is currently marching toward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarchDirection {
    Left,
    #[default]
    Right,
}

/// Who fired a bolt. Kept as an explicit tag rather than inferred
/// from the velocity sign so collision-target selection survives
/// future changes to bolt kinematics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Allegiance {
    Player,
    Alien,
}

/// Terminal result of a wave, once one is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaveOutcome {
    /// Every alien destroyed.
    Won,
    /// Defense line breached, or the ship destroyed with no lives left.
    Lost,
}
