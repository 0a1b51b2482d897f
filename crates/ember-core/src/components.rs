//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Game logic lives in systems and in the creature-ai crate.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::CreatureMode;

/// Marks the player-controlled creature. Exactly one per scene.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// World position plus facing angle about +Y (radians, 0 looks down +Z).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub facing: f32,
}

/// Smoothed breath intensity carried by the player between frames.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FireBreath {
    pub intensity: f32,
}

/// Marks an NPC creature and holds its fixed per-creature data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Creature {
    /// Hop animation phase offset (radians).
    pub hop_phase: f32,
}

/// Smoothed creature velocity (units/s). Zero while captured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec3);

/// Wander heading and the countdown until it is re-rolled.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WanderState {
    /// Heading on the ground plane (radians, same convention as `Transform::facing`).
    pub heading: f32,
    /// Seconds until a new heading is picked.
    pub timer: f32,
}

/// Behavior mode and the derived alert flag.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Behavior {
    pub mode: CreatureMode,
    /// Player is within the alert radius. Always false unless active.
    pub alert: bool,
}

/// Timestamp of this creature's last hit on the player.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HitCooldown {
    /// Elapsed-time stamp (seconds), `None` if it never hit.
    pub last_hit_secs: Option<f64>,
}

impl HitCooldown {
    /// Whether at least `cooldown` seconds have passed since the last hit.
    pub fn ready(&self, now_secs: f64, cooldown: f64) -> bool {
        match self.last_hit_secs {
            Some(last) => now_secs - last >= cooldown,
            None => true,
        }
    }
}
