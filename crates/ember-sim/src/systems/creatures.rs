//! Creature behavior system: runs the FSM for every creature, then resolves
//! creature → player hits and fire → creature captures.

use glam::Vec3;
use hecs::World;
use log::{debug, warn};
use rand_chacha::ChaCha8Rng;

use ember_core::collision::horizontal_distance;
use ember_core::components::{Behavior, Creature, HitCooldown, Transform, Velocity, WanderState};
use ember_core::config::SceneConfig;
use ember_core::events::GameplayEvent;
use ember_creature_ai::fsm::{self, CreatureContext, Transition};

use super::FrameContext;
use crate::heart_stack::HeartStack;

/// Velocities below this leave the creature's facing unchanged.
const FACING_MIN_SPEED: f32 = 1e-3;

pub fn run(
    world: &mut World,
    frame: &FrameContext,
    config: &SceneConfig,
    rng: &mut ChaCha8Rng,
    hearts: &mut HeartStack,
    events: &mut Vec<GameplayEvent>,
) {
    let Some(player) = frame.player else {
        warn!("no player transform this frame; skipping creature update");
        return;
    };
    let tuning = &config.creatures;

    for (entity, (creature, transform, velocity, wander, behavior, cooldown)) in world
        .query_mut::<(
            &Creature,
            &mut Transform,
            &mut Velocity,
            &mut WanderState,
            &mut Behavior,
            &mut HitCooldown,
        )>()
    {
        let creature_id = entity.to_bits().get();
        let ctx = CreatureContext {
            mode: behavior.mode,
            position: transform.position,
            velocity: velocity.0,
            wander: *wander,
            hop_phase: creature.hop_phase,
            player: player.position,
            activity: config.activity,
            policy: config.respawn_policy,
            delta: frame.delta,
            elapsed_secs: frame.elapsed_secs,
        };
        let update = fsm::evaluate(&ctx, tuning, rng);

        behavior.mode = update.mode;
        behavior.alert = update.alert;
        transform.position = update.position;
        velocity.0 = update.velocity;
        *wander = update.wander;
        if velocity.0.length_squared() > FACING_MIN_SPEED * FACING_MIN_SPEED {
            transform.facing = velocity.0.x.atan2(velocity.0.z);
        }

        for transition in &update.transitions {
            match transition {
                Transition::PickedUp => {
                    let stack_height = hearts.push(creature_id, frame.elapsed_secs);
                    events.push(GameplayEvent::CreatureCaptured {
                        creature_id,
                        stack_height,
                    });
                }
                Transition::FadedOut => {
                    events.push(GameplayEvent::CreatureFaded { creature_id });
                }
                Transition::Respawned => {
                    transform.facing = wander.heading;
                    events.push(GameplayEvent::CreatureRespawned { creature_id });
                }
                Transition::Alerted | Transition::Calmed => {
                    debug!("creature {creature_id} -> {}", behavior.mode.label());
                }
            }
        }

        if !behavior.mode.is_active() {
            continue;
        }

        // Hit radius is horizontal, like the FSM radii. The cooldown outlives respawns.
        if horizontal_distance(transform.position, player.position) < tuning.hit_radius
            && cooldown.ready(frame.elapsed_secs, tuning.hit_cooldown)
        {
            cooldown.last_hit_secs = Some(frame.elapsed_secs);
            events.push(GameplayEvent::PlayerHit { creature_id });
        }

        if fsm::fire_hits(transform.position, &frame.fire, player.position, tuning) {
            behavior.mode = fsm::captured();
            behavior.alert = false;
            velocity.0 = Vec3::ZERO;
            events.push(GameplayEvent::CreatureCaught { creature_id });
        }
    }
}
