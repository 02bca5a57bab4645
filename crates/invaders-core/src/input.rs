//! Per-frame input intents from the application layer.
//!
//! The engine never polls a keyboard; the driver samples whatever
//! input source it owns and hands the result in as three booleans.

use serde::{Deserialize, Serialize};

/// The player's intents for one frame. Left and right may both be
/// set (the driver decides how to sample keys); the engine applies
/// them in order, so they cancel out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFrame {
    pub move_left: bool,
    pub move_right: bool,
    pub fire: bool,
}

impl InputFrame {
    /// An empty frame: no intents.
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn fire() -> Self {
        Self {
            fire: true,
            ..Self::default()
        }
    }
}
