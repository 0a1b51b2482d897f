pub mod game_loop;
pub mod host;
pub mod logging;
pub mod state;

pub use logging::init as init_logging;

use thiserror::Error;

use ember_core::config::ConfigError;

/// Failures while starting or stopping the headless scene host.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to spawn game loop thread: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("game loop thread panicked")]
    LoopPanicked,
    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}
