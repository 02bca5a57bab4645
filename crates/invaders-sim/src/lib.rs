//! Wave simulation engine.
//!
//! Owns the hecs ECS world (ship and bolts), the alien formation
//! grid, and the seeded RNG; runs the per-frame systems in a fixed
//! order and produces WaveSnapshots for the application layer.

pub mod engine;
pub mod formation;
pub mod systems;
pub mod world_setup;

pub use engine::WaveEngine;
pub use invaders_core as core;
