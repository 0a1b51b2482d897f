use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use log::{error, info};

use ember_app::game_loop::spawn_game_loop;
use ember_app::host::LoggingHost;
use ember_app::state::{AppState, GameLoopCommand};
use ember_app::{init_logging, AppError};
use ember_core::config::SceneConfig;
use ember_core::input::InputSnapshot;
use ember_sim::SimConfig;

/// Headless run of the EMBER scene with scripted input
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// RNG seed for creature placement and wandering
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Seconds of scripted play
    #[arg(long, default_value_t = 10.0)]
    seconds: f32,

    /// JSON scene config; omitted fields keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the final frame snapshot as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Input period for the scripted walk.
const INPUT_STEP: Duration = Duration::from_millis(100);

/// Walk in a slow circle, breathing fire for one second out of every three.
fn scripted_input(elapsed: Duration) -> InputSnapshot {
    let secs = elapsed.as_secs_f32();
    InputSnapshot::new(1.0, 0.4 * (secs * 0.5).sin(), secs % 3.0 < 1.0)
}

fn run(args: Args) -> Result<(), AppError> {
    let scene = match &args.config {
        Some(path) => SceneConfig::from_json_file(path)?,
        None => SceneConfig::default(),
    };

    let state = AppState::new();
    let game_loop = spawn_game_loop(
        SimConfig {
            seed: args.seed,
            scene,
        },
        LoggingHost::default(),
        state.latest_snapshot.clone(),
    )?;
    if let Ok(mut tx) = state.command_tx.lock() {
        *tx = Some(game_loop.commands.clone());
    }

    let started = Instant::now();
    let run_for = Duration::try_from_secs_f32(args.seconds).unwrap_or_default();
    while started.elapsed() < run_for {
        state.send(GameLoopCommand::Input(scripted_input(started.elapsed())));
        std::thread::sleep(INPUT_STEP);
    }

    let host = game_loop.shutdown()?;
    if let Some(snapshot) = state.snapshot() {
        info!(
            "ran {} frames ({:.1}s): {} hits, {} hearts, {} navigations",
            snapshot.time.frame,
            snapshot.time.elapsed_secs,
            host.hits,
            snapshot.hearts.len(),
            host.navigations.len()
        );
        if args.json {
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
