//! Bolt motion: position += velocity once per resolved frame.
//!
//! Velocities are expressed per frame, not per second — bolt travel
//! is tied to the frame cadence, matching the original behavior.

use hecs::World;

use invaders_core::components::Bolt;
use invaders_core::types::{Position, Velocity};

pub fn run(world: &mut World) {
    for (_entity, (pos, vel, _bolt)) in world.query_mut::<(&mut Position, &Velocity, &Bolt)>() {
        pos.x += vel.x;
        pos.y += vel.y;
    }
}
