//! Respawn scheduling.
//!
//! In-place respawn is a plain timer inside `CreatureMode::Respawning` and is
//! handled by the FSM. Replace-and-grow keeps one pending spawn per capture
//! in a `SpawnQueue`; the simulation appends a fresh creature each time an
//! entry matures.

use glam::Vec3;
use rand::Rng;

use ember_core::components::WanderState;
use ember_core::config::CreatureTuning;
use ember_core::types::Rect;

use crate::steering::{random_heading, random_wander_duration};

/// Uniform point inside `rect` at `base_height`.
pub fn random_spawn_point(rect: &Rect, base_height: f32, rng: &mut impl Rng) -> Vec3 {
    Vec3::new(
        rng.gen_range(rect.min_x..=rect.max_x),
        base_height,
        rng.gen_range(rect.min_z..=rect.max_z),
    )
}

/// Placement and wander state of a creature entering play.
#[derive(Debug, Clone, Copy)]
pub struct FreshCreature {
    pub position: Vec3,
    pub wander: WanderState,
}

pub fn fresh_creature(rect: &Rect, tuning: &CreatureTuning, rng: &mut impl Rng) -> FreshCreature {
    FreshCreature {
        position: random_spawn_point(rect, tuning.base_height, rng),
        wander: WanderState {
            heading: random_heading(rng),
            timer: random_wander_duration(rng, tuning.wander_min_secs, tuning.wander_max_secs),
        },
    }
}

/// Pending replacement spawns for the replace-and-grow policy.
#[derive(Debug, Clone, Default)]
pub struct SpawnQueue {
    /// Seconds each pending spawn has waited, oldest first.
    pending: Vec<f32>,
}

impl SpawnQueue {
    /// Schedule one replacement, starting its clock at zero.
    pub fn schedule(&mut self) {
        self.pending.push(0.0);
    }

    /// Advance every pending spawn by `delta` and remove those that reached
    /// `delay`. Returns how many matured.
    pub fn advance(&mut self, delta: f32, delay: f32) -> usize {
        let before = self.pending.len();
        for waited in &mut self.pending {
            *waited += delta;
        }
        self.pending.retain(|&waited| waited < delay);
        before - self.pending.len()
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
