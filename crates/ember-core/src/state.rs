//! Frame snapshot: the complete visible state handed to rendering after each frame.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::{CreatureMode, ScenePhase};
use crate::events::GameplayEvent;
use crate::fire::FireEmission;
use crate::types::SimTime;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub phase: ScenePhase,
    pub locked: bool,
    pub player: PlayerView,
    pub fire: FireEmission,
    pub creatures: Vec<CreatureView>,
    pub hearts: Vec<Heart>,
    /// Events emitted during this frame, in order.
    pub events: Vec<GameplayEvent>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec3,
    pub facing: f32,
}

/// One creature as rendering sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatureView {
    /// Stable handle (hecs entity bits).
    pub id: u64,
    pub mode: CreatureMode,
    pub alert: bool,
    /// Position including the hop offset.
    pub position: Vec3,
    pub velocity: Vec3,
    /// 1 while in play, fading to 0 while captured, 0 while respawning.
    pub opacity: f32,
}

/// One stacked heart on the collectible counter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Heart {
    pub creature_id: u64,
    pub stack_height: f32,
    pub collected_at: f64,
}
