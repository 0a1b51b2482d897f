//! Player locomotion, stair height and fire-breath targeting.

use glam::{Quat, Vec3};
use hecs::World;
use log::warn;

use ember_core::components::{FireBreath, Player, Transform};
use ember_core::config::PlayerTuning;
use ember_core::state::PlayerView;
use ember_core::types::Rect;

use super::FrameContext;

/// Run the player controller for one frame.
///
/// Locked frames clear the fire emission and leave the transform untouched.
/// If no player exists the frame is skipped and nothing is published.
pub fn run(world: &mut World, frame: &mut FrameContext, tuning: &PlayerTuning, bounds: &Rect) {
    let Some((_entity, (_player, transform, breath))) = world
        .query_mut::<(&Player, &mut Transform, &mut FireBreath)>()
        .into_iter()
        .next()
    else {
        warn!("no player entity; skipping player update");
        return;
    };

    if frame.locked {
        breath.intensity = 0.0;
        frame.fire.clear();
        frame.fire.radius = tuning.fire_radius;
        frame.player = Some(view(transform));
        return;
    }

    transform.facing += frame.input.turn_axis * tuning.turn_rate;
    let forward = forward_vector(transform.facing);
    if frame.input.forward_axis != 0.0 {
        let proposed =
            transform.position + forward * frame.input.forward_axis * tuning.speed * frame.delta;
        transform.position = bounds.clamp(proposed);
    }
    transform.position.y = stair_height(transform.position.z, tuning);

    breath.intensity = smooth_intensity(breath.intensity, frame.input.fire, frame.delta, tuning);

    frame.fire.intensity = breath.intensity;
    frame.fire.active = breath.intensity > tuning.fire_activation_threshold;
    frame.fire.radius = tuning.fire_radius;
    frame.fire.targets = fire_targets(transform.position, transform.facing, tuning);
    frame.player = Some(view(transform));
}

fn view(transform: &Transform) -> PlayerView {
    PlayerView {
        position: transform.position,
        facing: transform.facing,
    }
}

/// Unit vector on the ground plane for a facing angle (0 looks down +Z).
pub fn forward_vector(facing: f32) -> Vec3 {
    Vec3::new(facing.sin(), 0.0, facing.cos())
}

/// Height of the walkable surface at depth `z`.
///
/// Linear between the stair edges, ground level on the near side and
/// platform level beyond the far edge.
pub fn stair_height(z: f32, tuning: &PlayerTuning) -> f32 {
    let t = ((z - tuning.stair_near_z) / (tuning.stair_far_z - tuning.stair_near_z)).clamp(0.0, 1.0);
    tuning.ground_level + (tuning.platform_level - tuning.ground_level) * t
}

/// Move breath intensity toward 1 while firing and 0 otherwise, rising at
/// the attack rate and falling at the slower release rate.
pub fn smooth_intensity(current: f32, intent: bool, delta: f32, tuning: &PlayerTuning) -> f32 {
    let target = if intent { 1.0 } else { 0.0 };
    let rate = if target > current {
        tuning.fire_attack_rate
    } else {
        tuning.fire_release_rate
    };
    let factor = 1.0 - (-rate * delta).exp();
    (current + (target - current) * factor).clamp(0.0, 1.0)
}

/// World-space fire target points: one per configured distance along the
/// breath, nearest first, then a lowered point that catches creatures on
/// the ground.
pub fn fire_targets(position: Vec3, facing: f32, tuning: &PlayerTuning) -> Vec<Vec3> {
    let rotation = Quat::from_rotation_y(facing);
    let mouth = position + rotation * tuning.fire_mouth_offset;
    let forward = forward_vector(facing);

    let mut targets: Vec<Vec3> = tuning
        .fire_target_distances
        .iter()
        .map(|&d| mouth + forward * d)
        .collect();
    targets.push(
        mouth + forward * tuning.fire_ground_target_distance
            - Vec3::Y * tuning.fire_ground_target_drop,
    );
    targets
}
