//! ECS systems that operate on the scene world each frame.
//!
//! Systems are plain functions over `&mut World`. The player system runs
//! first and publishes its frame state into `FrameContext`; later systems
//! only read that state.

pub mod creatures;
pub mod landmarks;
pub mod player;
pub mod respawn;
pub mod snapshot;

use ember_core::fire::FireEmission;
use ember_core::input::InputSnapshot;
use ember_core::state::PlayerView;

/// Per-frame shared state: written by the player system, read by the rest.
#[derive(Debug, Clone, Default)]
pub struct FrameContext {
    pub delta: f32,
    /// Scene clock at the end of this frame.
    pub elapsed_secs: f64,
    pub input: InputSnapshot,
    pub locked: bool,
    /// This frame's fire emission.
    pub fire: FireEmission,
    /// Player transform, `None` when no player entity exists.
    pub player: Option<PlayerView>,
}

impl FrameContext {
    /// Start a new frame, dropping last frame's published state.
    pub fn begin(&mut self, delta: f32, elapsed_secs: f64, input: InputSnapshot, locked: bool) {
        self.delta = delta;
        self.elapsed_secs = elapsed_secs;
        self.input = input;
        self.locked = locked;
        self.fire.clear();
        self.player = None;
    }
}
