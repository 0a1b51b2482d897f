//! Replace-and-grow respawn scheduling.
//!
//! Cleared creatures (faded out or picked up) are despawned, and each
//! capture schedules one replacement that enters play after the respawn
//! delay. The in-place policy needs nothing here: the FSM respawns the same
//! entity.

use hecs::{Entity, World};
use log::debug;
use rand_chacha::ChaCha8Rng;

use ember_core::components::{Behavior, Creature};
use ember_core::config::SceneConfig;
use ember_core::enums::RespawnPolicy;
use ember_core::events::GameplayEvent;
use ember_creature_ai::respawn::SpawnQueue;

use super::FrameContext;
use crate::world_setup;

pub fn run(
    world: &mut World,
    frame: &FrameContext,
    config: &SceneConfig,
    queue: &mut SpawnQueue,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameplayEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    if config.respawn_policy != RespawnPolicy::ReplaceAndGrow {
        return;
    }

    // Entries from earlier frames advance before this frame's captures join.
    let matured = queue.advance(frame.delta, config.creatures.respawn_delay);
    let caught = events
        .iter()
        .filter(|e| matches!(e, GameplayEvent::CreatureCaught { .. }))
        .count();
    for _ in 0..caught {
        queue.schedule();
    }

    despawn_buffer.clear();
    despawn_buffer.extend(
        world
            .query::<(&Creature, &Behavior)>()
            .iter()
            .filter(|(_, (_, behavior))| behavior.mode.is_respawning())
            .map(|(entity, _)| entity),
    );
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    if matured == 0 {
        return;
    }

    let live = world
        .query::<(&Creature, &Behavior)>()
        .iter()
        .filter(|(_, (_, behavior))| behavior.mode.is_active())
        .count();
    let room = config.creatures.count.saturating_sub(live);
    if matured > room {
        debug!("dropping {} replacement(s): population at target", matured - room);
    }

    for _ in 0..matured.min(room) {
        let entity = world_setup::spawn_creature(world, config, rng);
        events.push(GameplayEvent::CreatureRespawned {
            creature_id: entity.to_bits().get(),
        });
    }
}
