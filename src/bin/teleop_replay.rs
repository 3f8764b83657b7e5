//! Replay a recorded teleop session through the control core.
//!
//! Reads a JSON array of input snapshots, runs one tick per snapshot, and
//! prints what was dispatched.
//!
//! ```text
//! teleop_replay session.json
//! teleop_replay session.json --config robot.json --tick-ms 10 --json
//! RUST_LOG=teleop_core=debug teleop_replay session.json
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use teleop_core::hal::{RecordingDispatcher, ScriptedSensors};
use teleop_core::{Config, InputSnapshot, TeleopController};

#[derive(Parser)]
#[clap(version, about = "Replay recorded operator input through the teleop core")]
struct Opts {
    /// JSON file containing an array of input snapshots, one per tick
    script: PathBuf,
    /// JSON robot configuration (defaults used for missing fields)
    #[clap(long)]
    config: Option<PathBuf>,
    /// Override the tick period used for timestamps
    #[clap(long)]
    tick_ms: Option<u32>,
    /// Print one JSON tick report per line instead of text
    #[clap(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opts = Opts::parse();

    let mut config = match &opts.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str::<Config>(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => Config::default(),
    };
    if let Some(ms) = opts.tick_ms {
        config.teleop = config.teleop.with_tick_ms(ms);
    }

    let text = fs::read_to_string(&opts.script)
        .with_context(|| format!("reading script {}", opts.script.display()))?;
    let frames: Vec<InputSnapshot> = serde_json::from_str(&text)
        .with_context(|| format!("parsing script {}", opts.script.display()))?;
    let ticks = frames.len();

    tracing::info!(ticks, tick_ms = config.teleop.tick_ms, "replaying session");

    let sensors = ScriptedSensors::new(frames);
    let mut controller = TeleopController::new(sensors, RecordingDispatcher::new(), &config);
    controller.on_session_start();

    for _ in 0..ticks {
        let report = match controller.on_tick() {
            Ok(report) => report,
            Err(()) => anyhow::bail!("recording dispatcher rejected a command"),
        };

        if opts.json {
            println!("{}", serde_json::to_string(&report)?);
            continue;
        }

        let t = config.teleop.elapsed_ms(report.tick);
        print!(
            "[{:>6} ms] tick {:>4}  drive fwd={:+.2} rot={:+.2}",
            t, report.tick, report.drive.forward, report.drive.rotate
        );
        for (mechanism, command) in &report.commands {
            print!("  {}={:+.2}", mechanism.as_str(), command.value());
        }
        println!();
    }

    let state = controller.state();
    tracing::info!(intake = ?state.intake, ticks = state.session_ticks, "replay finished");
    Ok(())
}
