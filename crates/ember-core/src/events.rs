//! Gameplay events emitted by the simulation, and the host interface that
//! receives them for flashes, haptics, counters and navigation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Discrete gameplay events produced during a frame, in emission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameplayEvent {
    /// A creature touched the player (cooldown respected).
    PlayerHit { creature_id: u64 },
    /// Fire converted a creature into its captured state.
    CreatureCaught { creature_id: u64 },
    /// The player picked up a captured creature; a heart was stacked.
    CreatureCaptured { creature_id: u64, stack_height: f32 },
    /// A captured creature faded out without being picked up.
    CreatureFaded { creature_id: u64 },
    /// A creature (re)entered play.
    CreatureRespawned { creature_id: u64 },
    /// The player stood inside a landmark's trigger radius this frame.
    LandmarkTriggered { destination: String },
}

/// Failure reported by a best-effort haptic request.
#[derive(Debug, Error)]
pub enum HapticError {
    #[error("haptic feedback is not supported by this host")]
    Unsupported,
    #[error("haptic request rejected: {0}")]
    Rejected(String),
}

/// Callbacks into the presentation / navigation host.
///
/// Every method has a no-op default so hosts implement only what they use.
pub trait FeedbackHost {
    /// A creature hit the player.
    fn on_player_hit(&mut self) {}

    /// A captured creature was collected.
    fn on_creature_captured(&mut self) {}

    /// Navigate to `destination`. May be called on consecutive frames.
    fn on_trigger(&mut self, _destination: &str) {}

    /// Best-effort vibration pulse. Errors are logged and ignored by the caller.
    fn request_haptic(&mut self, _duration_ms: u32) -> Result<(), HapticError> {
        Err(HapticError::Unsupported)
    }
}

/// Host that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHost;

impl FeedbackHost for NullHost {}
