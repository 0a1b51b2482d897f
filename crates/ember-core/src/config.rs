//! Scene tuning configuration.
//!
//! `SceneConfig::default()` mirrors `constants`; a JSON file may override
//! any subset of fields. Configs are validated before an engine accepts them.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::enums::RespawnPolicy;
use crate::types::Rect;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

fn positive(field: &'static str, v: f32) -> Result<(), ConfigError> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be positive, got {v}")))
    }
}

/// Player locomotion, stair ramp and fire-breath tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub start: Vec3,
    pub start_facing: f32,
    pub speed: f32,
    /// Radians per frame at full turn axis.
    pub turn_rate: f32,
    pub ground_level: f32,
    pub platform_level: f32,
    /// Depth where the ramp leaves ground level.
    pub stair_near_z: f32,
    /// Depth where the ramp reaches platform level.
    pub stair_far_z: f32,
    pub fire_attack_rate: f32,
    pub fire_release_rate: f32,
    pub fire_activation_threshold: f32,
    pub fire_radius: f32,
    pub fire_mouth_offset: Vec3,
    pub fire_target_distances: Vec<f32>,
    pub fire_ground_target_distance: f32,
    pub fire_ground_target_drop: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            start: Vec3::from_array(PLAYER_START),
            start_facing: PLAYER_START_FACING,
            speed: PLAYER_SPEED,
            turn_rate: PLAYER_TURN_RATE,
            ground_level: GROUND_LEVEL,
            platform_level: PLATFORM_LEVEL,
            stair_near_z: STAIR_NEAR_Z,
            stair_far_z: STAIR_FAR_Z,
            fire_attack_rate: FIRE_ATTACK_RATE,
            fire_release_rate: FIRE_RELEASE_RATE,
            fire_activation_threshold: FIRE_ACTIVATION_THRESHOLD,
            fire_radius: FIRE_RADIUS,
            fire_mouth_offset: Vec3::from_array(FIRE_MOUTH_OFFSET),
            fire_target_distances: FIRE_TARGET_DISTANCES.to_vec(),
            fire_ground_target_distance: FIRE_GROUND_TARGET_DISTANCE,
            fire_ground_target_drop: FIRE_GROUND_TARGET_DROP,
        }
    }
}

/// Creature behavior, collision and respawn tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatureTuning {
    pub count: usize,
    pub alert_radius: f32,
    pub hit_radius: f32,
    pub hit_cooldown: f64,
    pub pickup_radius: f32,
    pub wander_speed: f32,
    pub chase_speed: f32,
    pub steer_rate: f32,
    pub wander_min_secs: f32,
    pub wander_max_secs: f32,
    pub base_height: f32,
    pub hop_amplitude: f32,
    pub hop_frequency: f32,
    pub capture_duration: f32,
    pub respawn_delay: f32,
    pub fire_hit_padding: f32,
    pub fire_vertical_tolerance: f32,
    pub fire_feet_half_extents: Vec3,
    pub hit_haptic_ms: u32,
}

impl Default for CreatureTuning {
    fn default() -> Self {
        Self {
            count: CREATURE_COUNT,
            alert_radius: CREATURE_ALERT_RADIUS,
            hit_radius: CREATURE_HIT_RADIUS,
            hit_cooldown: CREATURE_HIT_COOLDOWN,
            pickup_radius: CREATURE_PICKUP_RADIUS,
            wander_speed: CREATURE_WANDER_SPEED,
            chase_speed: CREATURE_CHASE_SPEED,
            steer_rate: CREATURE_STEER_RATE,
            wander_min_secs: CREATURE_WANDER_MIN_SECS,
            wander_max_secs: CREATURE_WANDER_MAX_SECS,
            base_height: CREATURE_BASE_HEIGHT,
            hop_amplitude: CREATURE_HOP_AMPLITUDE,
            hop_frequency: CREATURE_HOP_FREQUENCY,
            capture_duration: CAPTURE_DURATION,
            respawn_delay: RESPAWN_DELAY,
            fire_hit_padding: FIRE_HIT_PADDING,
            fire_vertical_tolerance: FIRE_VERTICAL_TOLERANCE,
            fire_feet_half_extents: Vec3::from_array(FIRE_FEET_HALF_EXTENTS),
            hit_haptic_ms: HIT_HAPTIC_MS,
        }
    }
}

/// A named point whose proximity sends the host to `destination`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub name: String,
    pub position: Vec3,
    pub destination: String,
}

impl Landmark {
    pub fn new(name: &str, position: Vec3, destination: &str) -> Self {
        Self {
            name: name.to_owned(),
            position,
            destination: destination.to_owned(),
        }
    }
}

fn default_landmarks() -> Vec<Landmark> {
    vec![
        Landmark::new("archive", Vec3::new(-7.0, PLATFORM_LEVEL, -13.0), "about"),
        Landmark::new("forge", Vec3::new(7.0, PLATFORM_LEVEL, -13.0), "projects"),
        Landmark::new("well", Vec3::new(12.0, GROUND_LEVEL, 11.0), "contact"),
    ]
}

/// Complete scene configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Horizontal bounds the player is clamped to.
    pub world_bounds: Rect,
    /// Horizontal bounds creatures wander and chase within.
    pub activity: Rect,
    pub player: PlayerTuning,
    pub creatures: CreatureTuning,
    pub landmarks: Vec<Landmark>,
    pub landmark_radius: f32,
    pub respawn_policy: RespawnPolicy,
    /// Also pause creatures while the player is locked.
    pub freeze_creatures_when_locked: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            world_bounds: Rect::new(WORLD_MIN_X, WORLD_MAX_X, WORLD_MIN_Z, WORLD_MAX_Z),
            activity: Rect::new(ACTIVITY_MIN_X, ACTIVITY_MAX_X, ACTIVITY_MIN_Z, ACTIVITY_MAX_Z),
            player: PlayerTuning::default(),
            creatures: CreatureTuning::default(),
            landmarks: default_landmarks(),
            landmark_radius: LANDMARK_TRIGGER_RADIUS,
            respawn_policy: RespawnPolicy::default(),
            freeze_creatures_when_locked: false,
        }
    }
}

impl SceneConfig {
    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SceneConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Reject tunings the simulation cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.world_bounds.is_valid() {
            return Err(invalid("world_bounds", "must have positive area"));
        }
        if !self.activity.is_valid() {
            return Err(invalid("activity", "must have positive area"));
        }

        let p = &self.player;
        positive("player.speed", p.speed)?;
        positive("player.fire_attack_rate", p.fire_attack_rate)?;
        positive("player.fire_release_rate", p.fire_release_rate)?;
        positive("player.fire_radius", p.fire_radius)?;
        if p.fire_release_rate > p.fire_attack_rate {
            return Err(invalid(
                "player.fire_release_rate",
                "release must not be faster than attack",
            ));
        }
        if !(0.0..1.0).contains(&p.fire_activation_threshold) {
            return Err(invalid("player.fire_activation_threshold", "must be in [0, 1)"));
        }
        if p.fire_target_distances.is_empty() {
            return Err(invalid("player.fire_target_distances", "must not be empty"));
        }
        if p.stair_near_z == p.stair_far_z {
            return Err(invalid("player.stair_far_z", "stair band must have width"));
        }

        let c = &self.creatures;
        if c.count == 0 {
            return Err(invalid("creatures.count", "must be at least 1"));
        }
        positive("creatures.alert_radius", c.alert_radius)?;
        positive("creatures.hit_radius", c.hit_radius)?;
        positive("creatures.pickup_radius", c.pickup_radius)?;
        positive("creatures.steer_rate", c.steer_rate)?;
        positive("creatures.wander_min_secs", c.wander_min_secs)?;
        positive("creatures.capture_duration", c.capture_duration)?;
        positive("creatures.respawn_delay", c.respawn_delay)?;
        if !(c.hit_cooldown.is_finite() && c.hit_cooldown >= 0.0) {
            return Err(invalid("creatures.hit_cooldown", "must be non-negative"));
        }
        if c.wander_max_secs < c.wander_min_secs {
            return Err(invalid("creatures.wander_max_secs", "must be >= wander_min_secs"));
        }
        if c.respawn_delay < c.capture_duration {
            return Err(invalid(
                "creatures.respawn_delay",
                "must be >= capture_duration",
            ));
        }

        positive("landmark_radius", self.landmark_radius)?;
        Ok(())
    }
}
