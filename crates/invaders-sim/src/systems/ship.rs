//! Ship system: apply movement intents and the fire intent.
//!
//! Both are invariant-preserving no-ops when they cannot apply: a
//! destroyed ship ignores intents, and fire is ignored while a
//! player bolt is outstanding.

use hecs::World;

use invaders_core::components::{Bolt, Ship};
use invaders_core::constants::*;
use invaders_core::enums::Allegiance;
use invaders_core::events::AudioEvent;
use invaders_core::input::InputFrame;
use invaders_core::types::Position;

use crate::world_setup;

/// Apply one frame of intents. Left is applied before right, so
/// holding both cancels out. The ship's bounding box is clamped to
/// the playfield.
pub fn run(world: &mut World, input: InputFrame, audio_events: &mut Vec<AudioEvent>) {
    let ship_x = apply_movement(world, input);

    if input.fire {
        if let Some(x) = ship_x {
            if player_bolt_count(world) == 0 {
                world_setup::spawn_player_bolt(world, x);
                audio_events.push(AudioEvent::ShipFired);
            }
        }
    }
}

/// Move the ship per intents; returns its x afterwards, or None if
/// the ship is destroyed.
fn apply_movement(world: &mut World, input: InputFrame) -> Option<f64> {
    let half = SHIP_WIDTH / 2.0;
    for (_entity, (pos, _ship)) in world.query_mut::<(&mut Position, &Ship)>() {
        if input.move_left {
            pos.x = (pos.x - SHIP_MOVEMENT).max(half);
        }
        if input.move_right {
            pos.x = (pos.x + SHIP_MOVEMENT).min(GAME_WIDTH - half);
        }
        return Some(pos.x);
    }
    None
}

/// Number of player bolts currently in flight (0 or 1 by invariant).
fn player_bolt_count(world: &World) -> usize {
    let mut query = world.query::<&Bolt>();
    query
        .iter()
        .filter(|(_, bolt)| bolt.allegiance == Allegiance::Player)
        .count()
}
