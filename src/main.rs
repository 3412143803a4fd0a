//! Zeppelin headless runner.
//!
//! Plays one level with a simple autopilot standing in for the player and a
//! log standing in for the screen:
//!
//! 1. Load `GameConfig` defaults, then an INI file if present, then CLI overrides
//! 2. Build a [`Session`] (fails fast on invalid configuration)
//! 3. Step it at a fixed frame rate, feeding autopilot input
//! 4. Log the HUD once per simulated second, sound cues and round notices
//! 5. Stop on a win or when the frame budget runs out
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run --release -- --seed 7 --level 2 --time-scale 2
//! ```

use clap::Parser;
use log::{error, info};
use std::path::PathBuf;

use zeppelin::Vec2;
use zeppelin::game::Session;
use zeppelin::resources::craftprofiles::CraftProfiles;
use zeppelin::resources::gameconfig::GameConfig;
use zeppelin::resources::input::FrameInput;
use zeppelin::resources::session::Outcome;

/// Zeppelin: reach the destination before time runs out, whatever the wind.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// INI configuration file (default: ./zeppelin.ini if it exists).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for wind and clouds.
    #[arg(long)]
    seed: Option<u64>,

    /// Difficulty level (1 and up).
    #[arg(long)]
    level: Option<u32>,

    /// Craft profile to fly (L19, L20).
    #[arg(long)]
    craft: Option<String>,

    /// Maximum number of frames to simulate.
    #[arg(long, default_value_t = 36_000)]
    frames: u64,

    /// Simulated frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Game speed multiplier (0.5 = half speed).
    #[arg(long)]
    time_scale: Option<f32>,

    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    dump_config: bool,
}

/// Cruise speed the autopilot holds. Below max so gusts can be fought.
const AUTOPILOT_CRUISE: f32 = 15.0;
/// Vertical dead band before the autopilot steers.
const AUTOPILOT_DEAD_BAND: f32 = 4.0;

fn autopilot(session: &Session) -> FrameInput {
    let mut input = FrameInput::default();
    if session.is_over() {
        return input;
    }
    // Holding either speed key every frame also re-pins velocity.x to -speed,
    // which keeps accumulated wind from building up along the travel axis.
    if !session.has_started() || session.speed() < AUTOPILOT_CRUISE {
        input.accelerate = true;
    } else {
        input.decelerate = true;
    }

    let dy = session.config().destination().y - session.position().y;
    if dy > AUTOPILOT_DEAD_BAND {
        input.steer_up = true;
    } else if dy < -AUTOPILOT_DEAD_BAND {
        input.steer_down = true;
    }
    input
}

fn load_config(cli: &Cli) -> Result<GameConfig, String> {
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = GameConfig::with_path(path);
            config.load_from_file().map_err(|e| e.to_string())?;
            config
        }
        None => {
            let mut config = GameConfig::new();
            config.load_from_file().ok(); // ignore errors, use defaults
            config
        }
    };
    if let Some(seed) = cli.seed {
        config.session.seed = Some(seed);
    }
    if let Some(level) = cli.level {
        config.session.level = level;
    }
    if let Some(craft) = &cli.craft {
        let crafts = CraftProfiles::builtin();
        if !crafts.contains(craft) {
            return Err(format!(
                "unknown craft `{}` (available: {})",
                craft,
                crafts.names().join(", ")
            ));
        }
        config.session.craft = craft.clone();
    }
    if let Some(time_scale) = cli.time_scale {
        config.session.time_scale = time_scale;
    }
    Ok(config)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if cli.dump_config {
        match config.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    let mut session = match Session::new(config) {
        Ok(session) => session,
        Err(e) => {
            error!("Cannot start session: {e}");
            std::process::exit(1);
        }
    };

    let fps = cli.fps.max(1);
    let dt = 1.0 / fps as f32;
    let mut rounds = 1u32;

    for frame in 0..cli.frames {
        let input = autopilot(&session);
        session.step(dt, input);

        for cue in session.drain_cues() {
            info!("[sound] {:?}", cue);
        }

        if frame % fps as u64 == 0 {
            let [speed, wind, timer] = session.hud().lines();
            let Vec2 { x, y } = session.position();
            info!("{speed} | {wind} | {timer} | at ({x:.1}, {y:.1})");
        }

        if let Some(notice) = session.notice().cloned() {
            info!("[{}] {}", notice.title, notice.message);
            let outcome = session.outcome();
            if outcome == Outcome::Win {
                info!(
                    "Won after {} round(s), {} frames, {:.1}s of game time",
                    rounds,
                    session.frame_count(),
                    session.elapsed()
                );
                return;
            }
            session.acknowledge();
            if !session.is_over() {
                rounds += 1;
            }
        }
    }

    info!(
        "Frame budget exhausted after {} round(s), {:.1}s of game time; last outcome {:?}",
        rounds,
        session.elapsed(),
        session.outcome()
    );
}
