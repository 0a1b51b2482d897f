#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use glam::Vec3;
    use hecs::Entity;

    use ember_core::components::Creature;
    use ember_core::config::{PlayerTuning, SceneConfig};
    use ember_core::enums::ScenePhase;
    use ember_core::events::{FeedbackHost, GameplayEvent, HapticError, NullHost};
    use ember_core::input::{InputSnapshot, SceneCommand};

    use crate::engine::{SceneEngine, SimConfig};
    use crate::heart_stack::HeartStack;
    use crate::systems::player::{fire_targets, forward_vector, smooth_intensity, stair_height};

    const DT: f32 = 1.0 / 60.0;

    #[derive(Default)]
    struct RecordingHost {
        hits: usize,
        captures: usize,
        triggers: Vec<String>,
        haptic_requests: usize,
    }

    impl FeedbackHost for RecordingHost {
        fn on_player_hit(&mut self) {
            self.hits += 1;
        }

        fn on_creature_captured(&mut self) {
            self.captures += 1;
        }

        fn on_trigger(&mut self, destination: &str) {
            self.triggers.push(destination.to_owned());
        }

        fn request_haptic(&mut self, _duration_ms: u32) -> Result<(), HapticError> {
            self.haptic_requests += 1;
            Err(HapticError::Rejected("no vibration motor".into()))
        }
    }

    fn engine() -> SceneEngine {
        SceneEngine::new(SimConfig::default()).unwrap()
    }

    fn clear_creatures(engine: &mut SceneEngine) {
        let creatures: Vec<Entity> = engine
            .world()
            .query::<&Creature>()
            .iter()
            .map(|(entity, _)| entity)
            .collect();
        for entity in creatures {
            engine.world_mut().despawn(entity).unwrap();
        }
    }

    fn idle() -> InputSnapshot {
        InputSnapshot::default()
    }

    // ---- Player helpers ----

    #[test]
    fn test_stair_height_levels_and_midpoint() {
        let tuning = PlayerTuning::default();
        assert_eq!(stair_height(0.0, &tuning), tuning.ground_level);
        assert_eq!(stair_height(-15.0, &tuning), tuning.platform_level);

        let mid = (tuning.stair_near_z + tuning.stair_far_z) / 2.0;
        let expected = (tuning.ground_level + tuning.platform_level) / 2.0;
        assert!((stair_height(mid, &tuning) - expected).abs() < 1e-5);
    }

    #[test]
    fn test_stair_height_monotonic_across_band() {
        let tuning = PlayerTuning::default();
        let mut last = stair_height(tuning.stair_near_z + 1.0, &tuning);
        let mut z = tuning.stair_near_z + 1.0;
        while z > tuning.stair_far_z - 1.0 {
            z -= 0.1;
            let h = stair_height(z, &tuning);
            assert!(h >= last);
            last = h;
        }
    }

    #[test]
    fn test_fire_intensity_rises_faster_than_it_falls() {
        let tuning = PlayerTuning::default();
        let rise = smooth_intensity(0.0, true, DT, &tuning);
        let fall = 1.0 - smooth_intensity(1.0, false, DT, &tuning);
        assert!(rise > fall, "rise {rise} should exceed fall {fall}");
        assert!(rise > 0.0 && rise < 1.0);
    }

    #[test]
    fn test_fire_intensity_stays_in_unit_range() {
        let tuning = PlayerTuning::default();
        let mut intensity = 0.0;
        for i in 0..600 {
            intensity = smooth_intensity(intensity, i < 300, 0.1, &tuning);
            assert!((0.0..=1.0).contains(&intensity));
        }
        assert!(intensity < 0.01);
    }

    #[test]
    fn test_forward_vector_convention() {
        assert!((forward_vector(0.0) - Vec3::Z).length() < 1e-6);
        assert!((forward_vector(PI / 2.0) - Vec3::X).length() < 1e-6);
        assert!((forward_vector(PI) + Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_fire_targets_along_breath_then_ground_point() {
        let tuning = PlayerTuning::default();
        let targets = fire_targets(Vec3::ZERO, 0.0, &tuning);
        assert_eq!(targets.len(), tuning.fire_target_distances.len() + 1);

        let mouth = tuning.fire_mouth_offset;
        for (target, d) in targets.iter().zip(&tuning.fire_target_distances) {
            assert!((target.y - mouth.y).abs() < 1e-5);
            assert!((target.z - (mouth.z + d)).abs() < 1e-5);
        }
        let ground = targets[targets.len() - 1];
        assert!((ground.y - (mouth.y - tuning.fire_ground_target_drop)).abs() < 1e-5);
        assert!((ground.z - (mouth.z + tuning.fire_ground_target_distance)).abs() < 1e-5);
    }

    #[test]
    fn test_fire_targets_follow_facing() {
        let tuning = PlayerTuning::default();
        let position = Vec3::new(2.0, 0.0, 2.0);
        let targets = fire_targets(position, PI / 2.0, &tuning);
        for target in &targets {
            assert!(target.x > position.x);
            assert!((target.z - position.z).abs() < 1e-4);
        }
    }

    // ---- Heart stack ----

    #[test]
    fn test_heart_stack_heights() {
        let mut hearts = HeartStack::default();
        assert!(hearts.is_empty());
        let a = hearts.push(1, 0.5);
        let b = hearts.push(2, 1.0);
        let c = hearts.push(3, 1.5);
        assert_eq!(a, 0.0);
        assert!(b > a && c > b);
        assert!(((c - b) - (b - a)).abs() < 1e-6);
        assert_eq!(hearts.len(), 3);
        assert_eq!(hearts.hearts()[1].creature_id, 2);
    }

    // ---- Engine lifecycle ----

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut scene = SceneConfig::default();
        scene.creatures.respawn_delay = scene.creatures.capture_duration / 2.0;
        let result = SceneEngine::new(SimConfig { seed: 1, scene });
        assert!(result.is_err());
    }

    #[test]
    fn test_initial_scene_population() {
        let mut engine = engine();
        let snap = engine.frame(DT, idle(), &mut NullHost);
        assert_eq!(snap.creatures.len(), engine.config().creatures.count);
        assert!(snap.hearts.is_empty());
        assert_eq!(snap.time.frame, 1);
    }

    #[test]
    fn test_pause_and_resume() {
        let mut engine = engine();
        engine.frame(DT, idle(), &mut NullHost);
        let before = engine.time();

        engine.queue_command(SceneCommand::Pause);
        for _ in 0..10 {
            let snap = engine.frame(DT, InputSnapshot::new(1.0, 0.0, false), &mut NullHost);
            assert_eq!(snap.phase, ScenePhase::Paused);
        }
        assert_eq!(engine.time(), before);

        engine.queue_command(SceneCommand::Resume);
        engine.frame(DT, idle(), &mut NullHost);
        assert_eq!(engine.phase(), ScenePhase::Active);
        assert_eq!(engine.time().frame, before.frame + 1);
    }

    #[test]
    fn test_non_positive_delta_runs_nothing() {
        let mut engine = engine();
        engine.frame(0.0, idle(), &mut NullHost);
        engine.frame(-1.0, idle(), &mut NullHost);
        engine.frame(f32::NAN, idle(), &mut NullHost);
        assert_eq!(engine.time().frame, 0);
    }

    #[test]
    fn test_long_delta_is_capped() {
        let mut engine = engine();
        engine.frame(5.0, idle(), &mut NullHost);
        let max = f64::from(ember_core::constants::MAX_FRAME_DELTA);
        assert!((engine.time().elapsed_secs - max).abs() < 1e-6);
    }

    #[test]
    fn test_reset_rebuilds_scene() {
        let mut engine = engine();
        clear_creatures(&mut engine);
        engine.queue_command(SceneCommand::SetLocked { locked: true });
        for _ in 0..30 {
            engine.frame(DT, idle(), &mut NullHost);
        }

        engine.queue_command(SceneCommand::Reset);
        let snap = engine.frame(DT, idle(), &mut NullHost);
        assert_eq!(snap.creatures.len(), engine.config().creatures.count);
        assert!(!snap.locked);
        assert_eq!(snap.time.frame, 1);
    }

    #[test]
    fn test_teleport_clamps_to_world_bounds() {
        let mut engine = engine();
        engine.teleport_player(Vec3::new(500.0, 0.0, -500.0), 0.0);
        let snap = engine.frame(DT, idle(), &mut NullHost);
        let bounds = engine.config().world_bounds;
        assert_eq!(snap.player.position.x, bounds.max_x);
        assert_eq!(snap.player.position.z, bounds.min_z);
    }

    #[test]
    fn test_player_moves_along_facing() {
        let mut engine = engine();
        let start = engine.frame(DT, idle(), &mut NullHost).player;
        let snap = engine.frame(DT, InputSnapshot::new(1.0, 0.0, false), &mut NullHost);
        let moved = snap.player.position - start.position;
        let expected = forward_vector(start.facing) * engine.config().player.speed * DT;
        assert!((moved.x - expected.x).abs() < 1e-4);
        assert!((moved.z - expected.z).abs() < 1e-4);
    }

    #[test]
    fn test_turn_integrates_per_frame() {
        let mut engine = engine();
        let start = engine.frame(DT, idle(), &mut NullHost).player.facing;
        let snap = engine.frame(DT, InputSnapshot::new(0.0, 1.0, false), &mut NullHost);
        let turn_rate = engine.config().player.turn_rate;
        assert!((snap.player.facing - (start + turn_rate)).abs() < 1e-6);
    }

    // ---- Locking ----

    #[test]
    fn test_lock_clears_fire() {
        let mut engine = engine();
        clear_creatures(&mut engine);
        let firing = InputSnapshot::new(0.0, 0.0, true);
        let mut snap = engine.frame(DT, firing, &mut NullHost);
        for _ in 0..30 {
            snap = engine.frame(DT, firing, &mut NullHost);
        }
        assert!(snap.fire.active);

        engine.queue_command(SceneCommand::SetLocked { locked: true });
        let locked = engine.frame(DT, InputSnapshot::new(1.0, 1.0, true), &mut NullHost);
        assert!(locked.locked);
        assert!(!locked.fire.active);
        assert!(locked.fire.targets.is_empty());
        assert_eq!(locked.player.position, snap.player.position);
        assert_eq!(locked.player.facing, snap.player.facing);
    }

    #[test]
    fn test_creatures_keep_moving_while_locked_by_default() {
        let mut engine = engine();
        engine.queue_command(SceneCommand::SetLocked { locked: true });
        let before = engine.frame(DT, idle(), &mut NullHost);
        let after = engine.frame(DT, idle(), &mut NullHost);
        let moved = before
            .creatures
            .iter()
            .zip(&after.creatures)
            .any(|(a, b)| a.position != b.position);
        assert!(moved);
    }

    #[test]
    fn test_creatures_freeze_when_configured() {
        let mut scene = SceneConfig::default();
        scene.freeze_creatures_when_locked = true;
        let mut engine = SceneEngine::new(SimConfig { seed: 9, scene }).unwrap();
        engine.queue_command(SceneCommand::SetLocked { locked: true });
        let before = engine.frame(DT, idle(), &mut NullHost);
        for _ in 0..30 {
            let after = engine.frame(DT, idle(), &mut NullHost);
            for (a, b) in before.creatures.iter().zip(&after.creatures) {
                assert_eq!(a.position, b.position);
            }
        }
    }

    // ---- Landmarks ----

    #[test]
    fn test_landmark_triggers_every_frame_inside_radius() {
        let mut engine = engine();
        clear_creatures(&mut engine);
        let landmark = engine.config().landmarks[0].clone();
        engine.teleport_player(landmark.position, 0.0);

        let mut host = RecordingHost::default();
        let first = engine.frame(DT, idle(), &mut host);
        engine.frame(DT, idle(), &mut host);

        assert!(first.events.contains(&GameplayEvent::LandmarkTriggered {
            destination: landmark.destination.clone(),
        }));
        assert_eq!(host.triggers, vec![landmark.destination.clone(); 2]);
    }

    #[test]
    fn test_landmark_silent_while_locked() {
        let mut engine = engine();
        clear_creatures(&mut engine);
        let landmark = engine.config().landmarks[0].clone();
        engine.teleport_player(landmark.position, 0.0);
        engine.queue_command(SceneCommand::SetLocked { locked: true });

        let mut host = RecordingHost::default();
        for _ in 0..5 {
            let snap = engine.frame(DT, idle(), &mut host);
            assert!(snap.events.is_empty());
        }
        assert!(host.triggers.is_empty());
    }

    // ---- Host dispatch ----

    #[test]
    fn test_player_hit_reaches_host_despite_haptic_failure() {
        let mut engine = engine();
        clear_creatures(&mut engine);
        let player = engine.frame(DT, idle(), &mut NullHost).player.position;
        let creature = engine.spawn_creature_at(Vec3::new(player.x, 0.25, player.z));
        let id = creature.to_bits().get();

        let mut host = RecordingHost::default();
        let snap = engine.frame(DT, idle(), &mut host);
        assert!(snap
            .events
            .contains(&GameplayEvent::PlayerHit { creature_id: id }));
        assert_eq!(host.hits, 1);
        assert_eq!(host.haptic_requests, 1);

        // Simulation carries on after the failed haptic request.
        let next = engine.frame(DT, idle(), &mut host);
        assert_eq!(next.time.frame, snap.time.frame + 1);
    }
}
