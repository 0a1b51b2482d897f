//! Entity spawn factories for setting up the scene world.

use glam::Vec3;
use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use ember_core::components::*;
use ember_core::config::{PlayerTuning, SceneConfig};
use ember_creature_ai::respawn::fresh_creature;
use ember_creature_ai::steering::random_hop_phase;

use crate::systems::player::stair_height;

/// Populate an empty world: the player plus the initial creature roster.
pub fn setup_scene(world: &mut World, config: &SceneConfig, rng: &mut ChaCha8Rng) {
    spawn_player(world, &config.player);
    for _ in 0..config.creatures.count {
        spawn_creature(world, config, rng);
    }
}

/// Spawn the player at its start position, standing on the walkable surface.
pub fn spawn_player(world: &mut World, tuning: &PlayerTuning) -> Entity {
    let mut position = tuning.start;
    position.y = stair_height(position.z, tuning);
    world.spawn((
        Player,
        Transform {
            position,
            facing: tuning.start_facing,
        },
        FireBreath::default(),
    ))
}

/// Spawn a wandering creature at a random point of the activity area.
pub fn spawn_creature(world: &mut World, config: &SceneConfig, rng: &mut ChaCha8Rng) -> Entity {
    let fresh = fresh_creature(&config.activity, &config.creatures, rng);
    let hop_phase = random_hop_phase(rng);
    spawn_creature_at(world, fresh.position, fresh.wander, hop_phase)
}

/// Spawn a wandering creature with explicit placement.
pub fn spawn_creature_at(
    world: &mut World,
    position: Vec3,
    wander: WanderState,
    hop_phase: f32,
) -> Entity {
    world.spawn((
        Creature { hop_phase },
        Transform {
            position,
            facing: wander.heading,
        },
        Velocity::default(),
        wander,
        Behavior::default(),
        HitCooldown::default(),
    ))
}
