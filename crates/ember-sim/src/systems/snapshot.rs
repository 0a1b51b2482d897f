//! Snapshot system: queries the ECS world and builds a complete FrameSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use ember_core::components::{Behavior, Creature, Player, Transform, Velocity};
use ember_core::enums::ScenePhase;
use ember_core::events::GameplayEvent;
use ember_core::fire::FireEmission;
use ember_core::state::{CreatureView, FrameSnapshot, PlayerView};
use ember_core::types::SimTime;
use ember_creature_ai::fsm::mode_opacity;

use crate::heart_stack::HeartStack;

/// Build a FrameSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: ScenePhase,
    locked: bool,
    fire: &FireEmission,
    hearts: &HeartStack,
    capture_duration: f32,
    events: Vec<GameplayEvent>,
) -> FrameSnapshot {
    FrameSnapshot {
        time: *time,
        phase,
        locked,
        player: build_player(world),
        fire: fire.clone(),
        creatures: build_creatures(world, capture_duration),
        hearts: hearts.hearts().to_vec(),
        events,
    }
}

fn build_player(world: &World) -> PlayerView {
    world
        .query::<(&Player, &Transform)>()
        .iter()
        .next()
        .map(|(_, (_, transform))| PlayerView {
            position: transform.position,
            facing: transform.facing,
        })
        .unwrap_or_default()
}

/// Creature views ordered by id.
fn build_creatures(world: &World, capture_duration: f32) -> Vec<CreatureView> {
    let mut creatures: Vec<CreatureView> = world
        .query::<(&Creature, &Transform, &Velocity, &Behavior)>()
        .iter()
        .map(|(entity, (_, transform, velocity, behavior))| CreatureView {
            id: entity.to_bits().get(),
            mode: behavior.mode,
            alert: behavior.alert,
            position: transform.position,
            velocity: velocity.0,
            opacity: mode_opacity(behavior.mode, capture_duration),
        })
        .collect();
    creatures.sort_by_key(|c| c.id);
    creatures
}
