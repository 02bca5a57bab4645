//! Cleanup system: removes bolts that have fully left the playfield
//! vertically (past the top or below the bottom).

use hecs::{Entity, World};

use invaders_core::components::Bolt;
use invaders_core::constants::{BOLT_HEIGHT, GAME_HEIGHT};
use invaders_core::types::Position;

/// Despawn out-of-bounds bolts. Uses a pre-allocated buffer to avoid
/// the remove-while-iterating hazard.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (pos, _bolt)) in world.query_mut::<(&Position, &Bolt)>() {
        let above = pos.y - BOLT_HEIGHT / 2.0 > GAME_HEIGHT;
        let below = pos.y + BOLT_HEIGHT / 2.0 < 0.0;
        if above || below {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
