//! Game loop thread: runs the scene engine at the display frame rate and
//! publishes snapshots.
//!
//! Commands arrive via `mpsc` channel. The engine is built on the caller's
//! thread so config errors surface before the loop starts.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::{debug, info};

use ember_core::constants::FRAME_RATE;
use ember_core::events::FeedbackHost;
use ember_core::input::InputSnapshot;
use ember_core::state::FrameSnapshot;
use ember_sim::{SceneEngine, SimConfig};

use crate::state::GameLoopCommand;
use crate::AppError;

/// Nominal duration of one rendered frame.
const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// Handle to a running game loop.
pub struct GameLoop<H> {
    pub commands: mpsc::Sender<GameLoopCommand>,
    thread: JoinHandle<H>,
}

impl<H> GameLoop<H> {
    /// Ask the loop to stop and wait for it, returning the host.
    pub fn shutdown(self) -> Result<H, AppError> {
        let _ = self.commands.send(GameLoopCommand::Shutdown);
        self.thread.join().map_err(|_| AppError::LoopPanicked)
    }
}

/// Spawns the game loop in a new thread.
pub fn spawn_game_loop<H>(
    config: SimConfig,
    host: H,
    latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
) -> Result<GameLoop<H>, AppError>
where
    H: FeedbackHost + Send + 'static,
{
    let engine = SceneEngine::new(config)?;
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let thread = std::thread::Builder::new()
        .name("ember-game-loop".into())
        .spawn(move || run_game_loop(engine, host, cmd_rx, &latest_snapshot))?;

    Ok(GameLoop {
        commands: cmd_tx,
        thread,
    })
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop<H: FeedbackHost>(
    mut engine: SceneEngine,
    mut host: H,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<FrameSnapshot>>,
) -> H {
    info!("game loop started at {FRAME_RATE} fps");
    let mut input = InputSnapshot::default();
    let mut last_frame = Instant::now();
    let mut next_frame_time = last_frame;

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Input(next)) => input = next.sanitized(),
                Ok(GameLoopCommand::Scene(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    info!("game loop stopped after {} frames", engine.time().frame);
                    return host;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one frame by the measured wall-clock delta
        let now = Instant::now();
        let delta = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;
        let snapshot = engine.frame(delta, input, &mut host);

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next frame
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            debug!("game loop behind schedule; resetting frame clock");
            next_frame_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_core::config::SceneConfig;
    use ember_core::enums::ScenePhase;
    use ember_core::events::NullHost;
    use ember_core::input::SceneCommand;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Input(InputSnapshot::new(1.0, 0.0, true)))
            .unwrap();
        tx.send(GameLoopCommand::Scene(SceneCommand::Pause)).unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let commands: Vec<_> = rx.try_iter().collect();
        assert_eq!(commands.len(), 3);
        assert!(matches!(commands[0], GameLoopCommand::Input(i) if i.fire));
        assert!(matches!(
            commands[1],
            GameLoopCommand::Scene(SceneCommand::Pause)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_invalid_config_fails_before_spawn() {
        let mut scene = SceneConfig::default();
        scene.creatures.count = 0;
        let result = spawn_game_loop(
            SimConfig { seed: 1, scene },
            NullHost,
            Arc::new(Mutex::new(None)),
        );
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_loop_publishes_snapshots_and_stops() {
        let latest = Arc::new(Mutex::new(None));
        let game_loop =
            spawn_game_loop(SimConfig::default(), NullHost, Arc::clone(&latest)).unwrap();

        game_loop
            .commands
            .send(GameLoopCommand::Input(InputSnapshot::new(1.0, 0.0, false)))
            .unwrap();
        std::thread::sleep(Duration::from_millis(100));
        game_loop
            .commands
            .send(GameLoopCommand::Scene(SceneCommand::Pause))
            .unwrap();
        std::thread::sleep(Duration::from_millis(50));

        game_loop.shutdown().unwrap();
        let snapshot = latest.lock().unwrap().clone().unwrap();
        assert!(snapshot.time.frame > 0);
        assert_eq!(snapshot.phase, ScenePhase::Paused);
    }

    #[test]
    fn test_frame_duration_constant() {
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(FRAME_DURATION.as_nanos(), expected_nanos as u128);
    }
}
