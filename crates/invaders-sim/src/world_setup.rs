//! Entity spawn factories for the wave world.
//!
//! Creates the ship and bolt entities with their component bundles.
//! Aliens are not spawned here — the formation grid owns them.

use hecs::World;

use invaders_core::components::{Bolt, Ship};
use invaders_core::constants::*;
use invaders_core::enums::Allegiance;
use invaders_core::types::{Position, Velocity};

/// Spawn a fresh ship centered at the bottom of the playfield.
pub fn spawn_ship(world: &mut World) -> hecs::Entity {
    world.spawn((Ship, Position::new(GAME_WIDTH / 2.0, SHIP_Y)))
}

/// Spawn an upward player bolt at the ship's nose.
pub fn spawn_player_bolt(world: &mut World, ship_x: f64) -> hecs::Entity {
    let nose_y = SHIP_Y + SHIP_HEIGHT / 2.0 + BOLT_HEIGHT / 2.0;
    world.spawn((
        Bolt {
            allegiance: Allegiance::Player,
        },
        Position::new(ship_x, nose_y),
        Velocity::new(0.0, BOLT_SPEED),
    ))
}

/// Spawn a downward alien bolt just below the shooter.
pub fn spawn_alien_bolt(world: &mut World, shooter: Position) -> hecs::Entity {
    let muzzle_y = shooter.y - ALIEN_HEIGHT / 2.0 - BOLT_HEIGHT / 2.0;
    world.spawn((
        Bolt {
            allegiance: Allegiance::Alien,
        },
        Position::new(shooter.x, muzzle_y),
        Velocity::new(0.0, -BOLT_SPEED),
    ))
}
