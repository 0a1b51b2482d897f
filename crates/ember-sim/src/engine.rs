//! Scene engine: the per-frame gameplay core.
//!
//! `SceneEngine` owns the hecs ECS world, processes scene commands, runs all
//! systems once per rendered frame and produces `FrameSnapshot`s. Completely
//! headless, enabling deterministic testing.

use std::collections::VecDeque;

use glam::Vec3;
use hecs::{Entity, World};
use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use ember_core::components::{Player, Transform, WanderState};
use ember_core::config::{ConfigError, SceneConfig};
use ember_core::constants::MAX_FRAME_DELTA;
use ember_core::enums::ScenePhase;
use ember_core::events::{FeedbackHost, GameplayEvent};
use ember_core::fire::FireEmission;
use ember_core::input::{InputSnapshot, SceneCommand};
use ember_core::state::FrameSnapshot;
use ember_core::types::SimTime;
use ember_creature_ai::respawn::SpawnQueue;

use crate::heart_stack::HeartStack;
use crate::systems::{self, FrameContext};
use crate::world_setup;

/// Configuration for starting a new scene.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same inputs = same scene.
    pub seed: u64,
    pub scene: SceneConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            scene: SceneConfig::default(),
        }
    }
}

/// The scene engine. Owns the ECS world and all gameplay state.
pub struct SceneEngine {
    world: World,
    config: SceneConfig,
    seed: u64,
    time: SimTime,
    phase: ScenePhase,
    locked: bool,
    rng: ChaCha8Rng,
    command_queue: VecDeque<SceneCommand>,
    frame: FrameContext,
    hearts: HeartStack,
    spawn_queue: SpawnQueue,
    events: Vec<GameplayEvent>,
    despawn_buffer: Vec<Entity>,
}

impl SceneEngine {
    /// Validate the config and build the initial scene.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.scene.validate()?;
        let frame = idle_frame(&config.scene);
        let mut engine = Self {
            world: World::new(),
            config: config.scene,
            seed: config.seed,
            time: SimTime::default(),
            phase: ScenePhase::default(),
            locked: false,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            frame,
            hearts: HeartStack::default(),
            spawn_queue: SpawnQueue::default(),
            events: Vec::new(),
            despawn_buffer: Vec::new(),
        };
        world_setup::setup_scene(&mut engine.world, &engine.config, &mut engine.rng);
        Ok(engine)
    }

    /// Queue a scene command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: SceneCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SceneCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the scene by one rendered frame and return the resulting snapshot.
    ///
    /// Events raised during the frame are forwarded to `host` and also
    /// returned in the snapshot. Non-positive or non-finite deltas run no
    /// systems; long deltas are capped at `MAX_FRAME_DELTA`.
    pub fn frame(
        &mut self,
        delta: f32,
        input: InputSnapshot,
        host: &mut dyn FeedbackHost,
    ) -> FrameSnapshot {
        self.process_commands();

        if self.phase == ScenePhase::Active {
            match clamp_delta(delta) {
                Some(delta) => {
                    self.time.advance(delta);
                    self.frame.begin(
                        delta,
                        self.time.elapsed_secs,
                        input.sanitized(),
                        self.locked,
                    );
                    self.run_systems();
                    dispatch_events(&self.events, host, self.config.creatures.hit_haptic_ms);
                }
                None => debug!("ignoring frame with delta {delta}"),
            }
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.locked,
            &self.frame.fire,
            &self.hearts,
            self.config.creatures.capture_duration,
            events,
        )
    }

    pub fn phase(&self) -> ScenePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn locked(&self) -> bool {
        self.locked
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for hosts and tests that stage a scene.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn hearts(&self) -> &HeartStack {
        &self.hearts
    }

    /// Pending replace-and-grow spawns.
    pub fn pending_spawns(&self) -> usize {
        self.spawn_queue.pending()
    }

    /// Move the player, e.g. on arrival from another scene. Height follows
    /// the stair ramp on the next frame.
    pub fn teleport_player(&mut self, position: Vec3, facing: f32) {
        let bounded = self.config.world_bounds.clamp(position);
        for (_entity, (_player, transform)) in
            self.world.query_mut::<(&Player, &mut Transform)>()
        {
            transform.position = bounded;
            transform.facing = facing;
        }
    }

    /// Spawn a wandering creature at `position`, heading down +Z.
    pub fn spawn_creature_at(&mut self, position: Vec3) -> Entity {
        let wander = WanderState {
            heading: 0.0,
            timer: self.config.creatures.wander_max_secs,
        };
        world_setup::spawn_creature_at(&mut self.world, position, wander, 0.0)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: SceneCommand) {
        match command {
            SceneCommand::SetLocked { locked } => {
                if self.locked != locked {
                    info!("player {}", if locked { "locked" } else { "unlocked" });
                }
                self.locked = locked;
            }
            SceneCommand::Pause => {
                if self.phase == ScenePhase::Active {
                    self.phase = ScenePhase::Paused;
                }
            }
            SceneCommand::Resume => {
                if self.phase == ScenePhase::Paused {
                    self.phase = ScenePhase::Active;
                }
            }
            SceneCommand::Reset => self.reset(),
        }
    }

    /// Rebuild the scene from config with a freshly seeded RNG.
    fn reset(&mut self) {
        info!("resetting scene (seed {})", self.seed);
        self.world.clear();
        self.time = SimTime::default();
        self.phase = ScenePhase::Active;
        self.locked = false;
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.frame = idle_frame(&self.config);
        self.hearts = HeartStack::default();
        self.spawn_queue.clear();
        self.events.clear();
        world_setup::setup_scene(&mut self.world, &self.config, &mut self.rng);
    }

    /// Run all systems in order. The player system must run first.
    fn run_systems(&mut self) {
        // 1. Player locomotion + fire emission
        systems::player::run(
            &mut self.world,
            &mut self.frame,
            &self.config.player,
            &self.config.world_bounds,
        );
        // 2. Landmark triggers
        systems::landmarks::run(
            &self.frame,
            &self.config.landmarks,
            self.config.landmark_radius,
            &mut self.events,
        );

        if self.locked && self.config.freeze_creatures_when_locked {
            return;
        }

        // 3. Creature FSM, hits and captures
        systems::creatures::run(
            &mut self.world,
            &self.frame,
            &self.config,
            &mut self.rng,
            &mut self.hearts,
            &mut self.events,
        );
        // 4. Replacement spawns
        systems::respawn::run(
            &mut self.world,
            &self.frame,
            &self.config,
            &mut self.spawn_queue,
            &mut self.rng,
            &mut self.events,
            &mut self.despawn_buffer,
        );
    }
}

fn idle_frame(config: &SceneConfig) -> FrameContext {
    FrameContext {
        fire: FireEmission::inactive(config.player.fire_radius),
        ..FrameContext::default()
    }
}

fn clamp_delta(delta: f32) -> Option<f32> {
    (delta.is_finite() && delta > 0.0).then(|| delta.min(MAX_FRAME_DELTA))
}

/// Forward a frame's events to the host. Haptic failures are logged and dropped.
fn dispatch_events(events: &[GameplayEvent], host: &mut dyn FeedbackHost, haptic_ms: u32) {
    for event in events {
        match event {
            GameplayEvent::PlayerHit { .. } => {
                host.on_player_hit();
                if let Err(err) = host.request_haptic(haptic_ms) {
                    debug!("haptic request failed: {err}");
                }
            }
            GameplayEvent::CreatureCaptured { .. } => host.on_creature_captured(),
            GameplayEvent::LandmarkTriggered { destination } => host.on_trigger(destination),
            GameplayEvent::CreatureCaught { .. }
            | GameplayEvent::CreatureFaded { .. }
            | GameplayEvent::CreatureRespawned { .. } => {}
        }
    }
}
