//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Creature behavior mode. Exactly one variant holds at any time; the
/// per-mode timers live inside the variant that owns them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum CreatureMode {
    /// Drifting along a randomized heading.
    #[default]
    Wander,
    /// Running toward the player.
    Chase,
    /// Hit by fire: motionless and fading out.
    Captured {
        /// Seconds since capture.
        elapsed: f32,
    },
    /// Out of play, waiting on the respawn scheduler.
    Respawning {
        /// Seconds counted toward the respawn delay.
        elapsed: f32,
    },
}

impl CreatureMode {
    /// Wander or Chase: the creature moves and collides.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Wander | Self::Chase)
    }

    pub fn is_captured(&self) -> bool {
        matches!(self, Self::Captured { .. })
    }

    pub fn is_respawning(&self) -> bool {
        matches!(self, Self::Respawning { .. })
    }

    /// Short label for logs and snapshots.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Wander => "wander",
            Self::Chase => "chase",
            Self::Captured { .. } => "captured",
            Self::Respawning { .. } => "respawning",
        }
    }
}

/// How captured creatures are returned to play.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RespawnPolicy {
    /// The same creature resets its fields after the delay.
    #[default]
    InPlace,
    /// Captured creatures fade and are removed; fresh creatures are appended.
    ReplaceAndGrow,
}

/// Top-level scene phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenePhase {
    #[default]
    Active,
    Paused,
}
