//! Headless arena runner.
//!
//! Loads an arena config (or the default arena), leaves the menu, holds the
//! requested keys for a number of fixed steps and logs every wall hit.
//!
//! ```text
//! RUST_LOG=walled_arena::collision=debug arena_sim --hold back,left --steps 900
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use walled_arena_engine::game::{ArenaConfig, ArenaScene, TracingObserver};
use walled_arena_engine::input::{InputFrame, MovementKeys};

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless walled-arena movement and collision run")]
struct Args {
    /// JSON arena config; the built-in arena when omitted
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of fixed 1/60 s steps to simulate
    #[arg(long, default_value_t = 600)]
    steps: u64,
    /// Keys held for the whole run (comma separated)
    #[arg(long, value_enum, value_delimiter = ',')]
    hold: Vec<HoldKey>,
    /// Print the effective config as JSON and exit
    #[arg(long)]
    dump_config: bool,
    /// Log every collision report line
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum HoldKey {
    Forward,
    Back,
    Left,
    Right,
    YawLeft,
    YawRight,
}

fn held_keys(hold: &[HoldKey]) -> MovementKeys {
    let mut keys = MovementKeys::new();
    for key in hold {
        match key {
            HoldKey::Forward => keys.forward = true,
            HoldKey::Back => keys.backward = true,
            HoldKey::Left => keys.left = true,
            HoldKey::Right => keys.right = true,
            HoldKey::YawLeft => keys.yaw_left = true,
            HoldKey::YawRight => keys.yaw_right = true,
        }
    }
    keys
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(default_level.parse()?))
        .init();

    let config = match &args.config {
        Some(path) => ArenaConfig::load(path)
            .with_context(|| format!("load arena config {}", path.display()))?,
        None => ArenaConfig::default(),
    };

    if args.dump_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    let mut scene = ArenaScene::new(config).context("start arena scene")?;
    let mut observer = TracingObserver;

    // Leave the start menu
    scene.step(
        &InputFrame {
            confirm: true,
            ..InputFrame::idle()
        },
        &mut observer,
    );

    let frame = InputFrame::holding(held_keys(&args.hold));
    while scene.state().steps < args.steps {
        scene.step(&frame, &mut observer);
    }

    let snapshot = scene.snapshot();
    info!(
        steps = snapshot.steps,
        collisions = snapshot.collisions,
        position = %snapshot.proxy.center,
        velocity = ?snapshot.velocity,
        "run complete"
    );
    Ok(())
}
