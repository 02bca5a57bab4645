//! Per-frame systems, run by the engine in a fixed order:
//! ship -> formation step (engine-side clock) -> movement ->
//! collision -> cleanup -> snapshot. Collision resolution operates
//! on the positions computed earlier in the same frame; the order is
//! part of the observable behavior.

pub mod cleanup;
pub mod collision;
pub mod movement;
pub mod ship;
pub mod snapshot;
