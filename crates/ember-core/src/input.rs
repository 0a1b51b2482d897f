//! Frame input and scene commands.
//!
//! Input is sampled by the host once per frame. Commands are queued and
//! processed at the next frame boundary.

use serde::{Deserialize, Serialize};

/// Merged keyboard/touch input for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputSnapshot {
    /// Forward (+) / backward (-) axis in [-1, 1].
    pub forward_axis: f32,
    /// Turn axis in [-1, 1]; positive turns toward +X from +Z.
    pub turn_axis: f32,
    /// Fire button or key held.
    pub fire: bool,
}

impl InputSnapshot {
    pub fn new(forward_axis: f32, turn_axis: f32, fire: bool) -> Self {
        Self {
            forward_axis,
            turn_axis,
            fire,
        }
        .sanitized()
    }

    /// Clamp axes into [-1, 1]; non-finite axes read as zero.
    pub fn sanitized(self) -> Self {
        fn axis(v: f32) -> f32 {
            if v.is_finite() {
                v.clamp(-1.0, 1.0)
            } else {
                0.0
            }
        }
        Self {
            forward_axis: axis(self.forward_axis),
            turn_axis: axis(self.turn_axis),
            fire: self.fire,
        }
    }
}

/// Scene-level actions from the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SceneCommand {
    /// Freeze the player (scene transition in progress) or release it.
    SetLocked { locked: bool },
    /// Stop running systems; time does not advance.
    Pause,
    /// Resume from pause.
    Resume,
    /// Rebuild the scene from config. Collected hearts are discarded.
    Reset,
}
