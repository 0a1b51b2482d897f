//! Creature behavior finite state machine.
//!
//! Pure functions that compute one frame of a creature's behavior from its
//! current mode, kinematics and the player's position. No ECS dependency;
//! operates on plain data. Creatures never read each other.

use glam::Vec3;
use log::debug;
use rand::Rng;

use ember_core::collision::{horizontal_distance, near_any, point_in_box};
use ember_core::components::WanderState;
use ember_core::config::CreatureTuning;
use ember_core::enums::{CreatureMode, RespawnPolicy};
use ember_core::fire::FireEmission;
use ember_core::types::{flatten, Rect};

use crate::respawn::fresh_creature;
use crate::steering::{
    heading_vector, hop_height, random_heading, random_wander_duration, smooth_velocity,
};

/// Input to the creature FSM for a single creature.
pub struct CreatureContext {
    pub mode: CreatureMode,
    pub position: Vec3,
    pub velocity: Vec3,
    pub wander: WanderState,
    pub hop_phase: f32,
    pub player: Vec3,
    pub activity: Rect,
    pub policy: RespawnPolicy,
    pub delta: f32,
    pub elapsed_secs: f64,
}

/// A mode change worth reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Wander → Chase.
    Alerted,
    /// Chase → Wander.
    Calmed,
    /// Captured creature collected by the player.
    PickedUp,
    /// Captured creature faded out uncollected.
    FadedOut,
    /// Back in play at a fresh position.
    Respawned,
}

/// Output from the creature FSM.
#[derive(Debug, Clone)]
pub struct CreatureUpdate {
    pub mode: CreatureMode,
    pub position: Vec3,
    pub velocity: Vec3,
    pub wander: WanderState,
    pub alert: bool,
    /// Transitions taken this frame, in order.
    pub transitions: Vec<Transition>,
}

/// Opacity of a captured creature `elapsed` seconds after capture.
pub fn fade_opacity(elapsed: f32, capture_duration: f32) -> f32 {
    (1.0 - elapsed / capture_duration).max(0.0)
}

/// Opacity for any mode: 1 in play, fading while captured, 0 while respawning.
pub fn mode_opacity(mode: CreatureMode, capture_duration: f32) -> f32 {
    match mode {
        CreatureMode::Wander | CreatureMode::Chase => 1.0,
        CreatureMode::Captured { elapsed } => fade_opacity(elapsed, capture_duration),
        CreatureMode::Respawning { .. } => 0.0,
    }
}

/// Evaluate the FSM for one creature.
///
/// Alert and pickup radii are measured on the ground plane, so hop and
/// stair height never change the outcome.
pub fn evaluate(ctx: &CreatureContext, tuning: &CreatureTuning, rng: &mut impl Rng) -> CreatureUpdate {
    match ctx.mode {
        CreatureMode::Respawning { elapsed } => {
            evaluate_respawning(ctx, elapsed + ctx.delta, tuning, rng)
        }
        CreatureMode::Captured { elapsed } => {
            evaluate_captured(ctx, elapsed + ctx.delta, tuning, rng)
        }
        CreatureMode::Wander | CreatureMode::Chase => evaluate_active(ctx, tuning, rng),
    }
}

fn evaluate_respawning(
    ctx: &CreatureContext,
    elapsed: f32,
    tuning: &CreatureTuning,
    rng: &mut impl Rng,
) -> CreatureUpdate {
    if elapsed >= tuning.respawn_delay {
        return respawn(ctx, tuning, rng, Vec::new());
    }

    CreatureUpdate {
        mode: CreatureMode::Respawning { elapsed },
        position: ctx.position,
        velocity: Vec3::ZERO,
        wander: ctx.wander,
        alert: false,
        transitions: Vec::new(),
    }
}

fn evaluate_captured(
    ctx: &CreatureContext,
    elapsed: f32,
    tuning: &CreatureTuning,
    rng: &mut impl Rng,
) -> CreatureUpdate {
    let held = CreatureUpdate {
        mode: CreatureMode::Captured { elapsed },
        position: ctx.position,
        velocity: Vec3::ZERO,
        wander: ctx.wander,
        alert: false,
        transitions: Vec::new(),
    };

    if horizontal_distance(ctx.position, ctx.player) < tuning.pickup_radius {
        return CreatureUpdate {
            mode: CreatureMode::Respawning { elapsed: 0.0 },
            transitions: vec![Transition::PickedUp],
            ..held
        };
    }

    if fade_opacity(elapsed, tuning.capture_duration) <= 0.0 {
        // The respawn clock keeps running from the capture moment.
        if ctx.policy == RespawnPolicy::InPlace && elapsed >= tuning.respawn_delay {
            return respawn(ctx, tuning, rng, vec![Transition::FadedOut]);
        }
        return CreatureUpdate {
            mode: CreatureMode::Respawning { elapsed },
            transitions: vec![Transition::FadedOut],
            ..held
        };
    }

    held
}

fn evaluate_active(
    ctx: &CreatureContext,
    tuning: &CreatureTuning,
    rng: &mut impl Rng,
) -> CreatureUpdate {
    let alert = horizontal_distance(ctx.position, ctx.player) < tuning.alert_radius;
    let mode = if alert {
        CreatureMode::Chase
    } else {
        CreatureMode::Wander
    };

    let mut wander = ctx.wander;
    wander.timer -= ctx.delta;
    if wander.timer <= 0.0 {
        wander.heading = random_heading(rng);
        wander.timer = random_wander_duration(rng, tuning.wander_min_secs, tuning.wander_max_secs);
    }

    let desired = if alert {
        flatten(ctx.player - ctx.position).normalize_or_zero() * tuning.chase_speed
    } else {
        heading_vector(wander.heading) * tuning.wander_speed
    };
    let velocity = smooth_velocity(ctx.velocity, desired, tuning.steer_rate, ctx.delta);

    let mut position = ctx.activity.clamp(ctx.position + velocity * ctx.delta);
    position.y = tuning.base_height
        + hop_height(
            ctx.elapsed_secs,
            ctx.hop_phase,
            tuning.hop_amplitude,
            tuning.hop_frequency,
        );

    let transitions = match (ctx.mode, mode) {
        (CreatureMode::Wander, CreatureMode::Chase) => vec![Transition::Alerted],
        (CreatureMode::Chase, CreatureMode::Wander) => vec![Transition::Calmed],
        _ => Vec::new(),
    };

    CreatureUpdate {
        mode,
        position,
        velocity,
        wander,
        alert,
        transitions,
    }
}

fn respawn(
    ctx: &CreatureContext,
    tuning: &CreatureTuning,
    rng: &mut impl Rng,
    mut transitions: Vec<Transition>,
) -> CreatureUpdate {
    let fresh = fresh_creature(&ctx.activity, tuning, rng);
    debug!(
        "creature respawned at ({:.2}, {:.2})",
        fresh.position.x, fresh.position.z
    );
    transitions.push(Transition::Respawned);
    CreatureUpdate {
        mode: CreatureMode::Wander,
        position: fresh.position,
        velocity: Vec3::ZERO,
        wander: fresh.wander,
        alert: false,
        transitions,
    }
}

/// Whether an active fire emission hits a creature at `position`: either
/// inside the box around the player's feet, or near any fire target point.
pub fn fire_hits(position: Vec3, fire: &FireEmission, player: Vec3, tuning: &CreatureTuning) -> bool {
    if !fire.active {
        return false;
    }
    point_in_box(position, player, tuning.fire_feet_half_extents)
        || near_any(
            position,
            &fire.targets,
            fire.radius + tuning.fire_hit_padding,
            tuning.fire_vertical_tolerance,
        )
}

/// Mode entered on a fire hit. Velocity must be zeroed alongside.
pub fn captured() -> CreatureMode {
    CreatureMode::Captured { elapsed: 0.0 }
}
