//! Scene simulation engine for EMBER.
//!
//! Owns the hecs world, runs the gameplay systems once per rendered frame,
//! and produces `FrameSnapshot`s for the presentation layer.

pub mod engine;
pub mod heart_stack;
pub mod systems;
pub mod world_setup;

pub use ember_core as core;
pub use engine::{SceneEngine, SimConfig};

#[cfg(test)]
mod tests;
