//! Fire-emission state: the per-frame hit geometry of the player's breath.
//!
//! Written once per frame by the player controller, read by the creature
//! behavior engine and rendering later in the same frame.

use glam::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FireEmission {
    /// Intensity is above the activation threshold.
    pub active: bool,
    /// Smoothed intensity in 0..=1, for visuals.
    pub intensity: f32,
    /// Hit radius around each target point.
    pub radius: f32,
    /// World-space target points, nearest first; the ground-catching point is last.
    pub targets: Vec<Vec3>,
}

impl FireEmission {
    /// An inactive emission with no targets.
    pub fn inactive(radius: f32) -> Self {
        Self {
            active: false,
            intensity: 0.0,
            radius,
            targets: Vec::new(),
        }
    }

    /// Mark inactive and drop the targets, keeping the allocation.
    pub fn clear(&mut self) {
        self.active = false;
        self.intensity = 0.0;
        self.targets.clear();
    }
}
