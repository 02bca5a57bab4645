//! Core types and definitions for the wave simulation.
//!
//! This crate defines the vocabulary shared across the workspace:
//! components, input frames, snapshot views, events, and constants.
//! It has no dependency on any ECS or runtime framework.

pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod input;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
