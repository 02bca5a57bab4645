//! Collision resolution: bolts against the formation and the ship.
//!
//! Runs after motion, against the positions computed this frame.
//! Bolts are processed in collection order and removals go through
//! the despawn buffer, so simultaneous hits resolve independently
//! and deterministically with ties broken by scan order.

use hecs::{Entity, World};

use invaders_core::components::{Bolt, Ship};
use invaders_core::constants::*;
use invaders_core::enums::Allegiance;
use invaders_core::events::AudioEvent;
use invaders_core::types::Position;

use crate::formation::Formation;

/// Resolve every bolt. Clears hit formation slots, updates score,
/// lives, and the step interval, and despawns spent bolts and a hit
/// ship. Uses a pre-allocated buffer to avoid per-frame allocation.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    formation: &mut Formation,
    score: &mut u32,
    lives: &mut u32,
    step_interval: &mut f64,
    audio_events: &mut Vec<AudioEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    // Frame snapshot of bolt and ship positions.
    let bolts: Vec<(Entity, Position, Allegiance)> = {
        let mut query = world.query::<(&Position, &Bolt)>();
        query
            .iter()
            .map(|(entity, (pos, bolt))| (entity, *pos, bolt.allegiance))
            .collect()
    };
    let mut ship: Option<(Entity, Position)> = {
        let mut query = world.query::<(&Position, &Ship)>();
        query.iter().next().map(|(entity, (pos, _))| (entity, *pos))
    };

    for (bolt_entity, bolt_pos, allegiance) in bolts {
        match allegiance {
            Allegiance::Player => {
                if let Some((row, col)) = first_hit(formation, &bolt_pos) {
                    formation.clear_slot(row, col);
                    *score += (row as u32 + 1) * POINTS_PER_ROW;
                    *step_interval *= SPEED_FACTOR;
                    audio_events.push(AudioEvent::AlienKilled { row, col });
                    despawn_buffer.push(bolt_entity);
                }
            }
            Allegiance::Alien => {
                if let Some((ship_entity, ship_pos)) = ship {
                    if bolt_pos.overlaps(
                        BOLT_WIDTH,
                        BOLT_HEIGHT,
                        &ship_pos,
                        SHIP_WIDTH,
                        SHIP_HEIGHT,
                    ) {
                        despawn_buffer.push(ship_entity);
                        despawn_buffer.push(bolt_entity);
                        *lives = lives.saturating_sub(1);
                        audio_events.push(AudioEvent::ShipDestroyed);
                        ship = None;
                    }
                }
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// First occupied slot the bolt overlaps, scanning row-major. The
/// slot is cleared by the caller, so a later bolt in the same frame
/// cannot hit the same alien twice.
fn first_hit(formation: &Formation, bolt_pos: &Position) -> Option<(usize, usize)> {
    for row in 0..ALIEN_ROWS {
        for col in 0..ALIENS_IN_ROW {
            if let Some(alien) = formation.slot(row, col) {
                if bolt_pos.overlaps(
                    BOLT_WIDTH,
                    BOLT_HEIGHT,
                    &alien.position,
                    ALIEN_WIDTH,
                    ALIEN_HEIGHT,
                ) {
                    return Some((row, col));
                }
            }
        }
    }
    None
}
