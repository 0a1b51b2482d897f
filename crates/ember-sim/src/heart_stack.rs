//! Collectible counter: one stacked heart per collected creature.
//!
//! Stored in `SceneEngine`, not as ECS entities. Only grows during a session.

use ember_core::constants::HEART_STACK_SPACING;
use ember_core::state::Heart;

#[derive(Debug, Clone, Default)]
pub struct HeartStack {
    hearts: Vec<Heart>,
}

impl HeartStack {
    /// Stack a heart for `creature_id`; returns its stacking height.
    pub fn push(&mut self, creature_id: u64, collected_at: f64) -> f32 {
        let stack_height = self.len() as f32 * HEART_STACK_SPACING;
        self.hearts.push(Heart {
            creature_id,
            stack_height,
            collected_at,
        });
        stack_height
    }

    pub fn len(&self) -> usize {
        self.hearts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hearts.is_empty()
    }

    pub fn hearts(&self) -> &[Heart] {
        &self.hearts
    }
}
