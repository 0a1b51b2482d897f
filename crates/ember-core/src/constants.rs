//! Simulation constants and tuning defaults.
//!
//! `SceneConfig::default()` is assembled from these values; a JSON config
//! file can override any of them.

// --- Player locomotion ---

/// Player horizontal speed (units/s) at full forward axis.
pub const PLAYER_SPEED: f32 = 4.5;

/// Facing change per frame at full turn axis (radians).
pub const PLAYER_TURN_RATE: f32 = 0.045;

/// Initial player position at scene start.
pub const PLAYER_START: [f32; 3] = [0.0, 0.0, 6.0];

/// Initial facing (radians about +Y). Facing 0 looks down +Z.
pub const PLAYER_START_FACING: f32 = std::f32::consts::PI;

// --- World bounds (player) ---

pub const WORLD_MIN_X: f32 = -18.0;
pub const WORLD_MAX_X: f32 = 18.0;
pub const WORLD_MIN_Z: f32 = -18.0;
pub const WORLD_MAX_Z: f32 = 14.0;

// --- Stair ramp ---

/// Ground level height.
pub const GROUND_LEVEL: f32 = 0.0;

/// Platform level height at the top of the stairs.
pub const PLATFORM_LEVEL: f32 = 1.6;

/// Depth (z) at which the stairs start rising. Larger z is ground side.
pub const STAIR_NEAR_Z: f32 = -6.0;

/// Depth (z) at which the stairs reach platform level.
pub const STAIR_FAR_Z: f32 = -9.0;

// --- Fire breath ---

/// Smoothing rate (1/s) toward full intensity while fire is held.
pub const FIRE_ATTACK_RATE: f32 = 10.0;

/// Smoothing rate (1/s) toward zero once fire is released.
pub const FIRE_RELEASE_RATE: f32 = 5.0;

/// Intensity above which the fire counts as active for hit tests.
pub const FIRE_ACTIVATION_THRESHOLD: f32 = 0.15;

/// Hit radius around each fire target point.
pub const FIRE_RADIUS: f32 = 0.9;

/// Extra padding added to the fire radius for creature hit tests.
pub const FIRE_HIT_PADDING: f32 = 0.35;

/// Vertical tolerance for target-point hits.
pub const FIRE_VERTICAL_TOLERANCE: f32 = 1.2;

/// Mouth anchor in player-local space (x right, y up, z forward).
pub const FIRE_MOUTH_OFFSET: [f32; 3] = [0.0, 1.1, 0.8];

/// Distances along the forward vector at which fire targets are sampled.
pub const FIRE_TARGET_DISTANCES: [f32; 4] = [0.8, 1.6, 2.4, 3.2];

/// Forward distance of the ground-catching target point.
pub const FIRE_GROUND_TARGET_DISTANCE: f32 = 1.8;

/// Downward drop of the ground-catching target point below the mouth.
pub const FIRE_GROUND_TARGET_DROP: f32 = 1.0;

/// Half-extents of the box around the player's feet that also counts as a fire hit.
pub const FIRE_FEET_HALF_EXTENTS: [f32; 3] = [1.2, 2.0, 1.2];

// --- Landmarks ---

/// Distance from a landmark within which navigation fires.
pub const LANDMARK_TRIGGER_RADIUS: f32 = 1.5;

// --- Creatures ---

/// Number of creatures kept alive in the scene.
pub const CREATURE_COUNT: usize = 6;

/// Distance below which a creature switches from Wander to Chase.
pub const CREATURE_ALERT_RADIUS: f32 = 5.0;

/// Distance below which a creature hits the player.
pub const CREATURE_HIT_RADIUS: f32 = 0.9;

/// Minimum seconds between hits on the player by the same creature.
pub const CREATURE_HIT_COOLDOWN: f64 = 1.2;

/// Distance below which the player collects a captured creature.
pub const CREATURE_PICKUP_RADIUS: f32 = 1.4;

pub const CREATURE_WANDER_SPEED: f32 = 0.8;
pub const CREATURE_CHASE_SPEED: f32 = 2.2;

/// Velocity smoothing rate (1/s).
pub const CREATURE_STEER_RATE: f32 = 4.0;

/// Wander heading hold time range (seconds).
pub const CREATURE_WANDER_MIN_SECS: f32 = 1.5;
pub const CREATURE_WANDER_MAX_SECS: f32 = 4.0;

/// Resting height of a creature's body above the ground.
pub const CREATURE_BASE_HEIGHT: f32 = 0.25;

pub const CREATURE_HOP_AMPLITUDE: f32 = 0.12;

/// Hop angular frequency (radians/s).
pub const CREATURE_HOP_FREQUENCY: f32 = 9.0;

/// Seconds a captured creature takes to fade out.
pub const CAPTURE_DURATION: f32 = 3.0;

/// Seconds from capture (or pickup) until the creature is back in play.
pub const RESPAWN_DELAY: f32 = 4.0;

// --- Activity rectangle (creatures) ---

pub const ACTIVITY_MIN_X: f32 = -10.0;
pub const ACTIVITY_MAX_X: f32 = 10.0;
pub const ACTIVITY_MIN_Z: f32 = -4.0;
pub const ACTIVITY_MAX_Z: f32 = 10.0;

// --- Feedback ---

/// Haptic pulse length requested when the player is hit (milliseconds).
pub const HIT_HAPTIC_MS: u32 = 80;

/// Vertical spacing between stacked hearts.
pub const HEART_STACK_SPACING: f32 = 0.35;

// --- Frame loop ---

/// Nominal frame rate of the headless runtime (Hz).
pub const FRAME_RATE: u32 = 60;

/// Largest delta accepted for a single frame (seconds). Longer stalls are clamped.
pub const MAX_FRAME_DELTA: f32 = 0.1;
