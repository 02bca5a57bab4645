//! Snapshot system: reads the world and formation and builds a
//! complete WaveSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use invaders_core::components::{Bolt, Ship};
use invaders_core::enums::WaveOutcome;
use invaders_core::events::AudioEvent;
use invaders_core::state::{AlienView, BoltView, ShipView, WaveSnapshot};
use invaders_core::types::Position;

use crate::formation::Formation;

/// Build a complete WaveSnapshot from the current frame.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    formation: &Formation,
    score: u32,
    lives: u32,
    step_interval: f64,
    outcome: Option<WaveOutcome>,
    audio_events: Vec<AudioEvent>,
) -> WaveSnapshot {
    WaveSnapshot {
        ship: build_ship(world),
        aliens: build_aliens(formation),
        bolts: build_bolts(world),
        score,
        lives,
        aliens_remaining: formation.remaining(),
        step_interval,
        defense_line_breached: formation.defense_line_breached(),
        outcome,
        audio_events,
    }
}

fn build_ship(world: &World) -> Option<ShipView> {
    let mut query = world.query::<(&Position, &Ship)>();
    query
        .iter()
        .next()
        .map(|(_, (pos, _))| ShipView { position: *pos })
}

/// Occupied slots in row-major order.
fn build_aliens(formation: &Formation) -> Vec<AlienView> {
    formation
        .iter()
        .map(|(row, col, alien)| AlienView {
            position: alien.position,
            tier: alien.tier,
            row,
            col,
        })
        .collect()
}

fn build_bolts(world: &World) -> Vec<BoltView> {
    let mut bolts: Vec<(u32, BoltView)> = world
        .query::<(&Position, &Bolt)>()
        .iter()
        .map(|(entity, (pos, bolt))| {
            (
                entity.id(),
                BoltView {
                    position: *pos,
                    allegiance: bolt.allegiance,
                },
            )
        })
        .collect();

    bolts.sort_by_key(|(id, _)| *id);
    bolts.into_iter().map(|(_, view)| view).collect()
}
