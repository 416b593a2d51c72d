//! Connect-five against the computer, in the terminal or in a window.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use connect_five::console::{LineInput, TextRenderer};
use connect_five::game::SleepPacer;
use connect_five::{AppConfig, Controller, Opponent, Side};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play connect-five on a 5x5 board against the computer", long_about = None)]
struct Args {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the opponent's random moves
    #[arg(long)]
    seed: Option<u64>,

    /// Pause before the opponent moves, in milliseconds
    #[arg(long)]
    pace_ms: Option<u64>,

    /// Open a window instead of playing in the terminal
    #[arg(long)]
    gui: bool,
}

fn load_config(args: &Args) -> Result<AppConfig> {
    let config = match &args.config {
        Some(path) => AppConfig::read(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AppConfig::default(),
    };
    let config = config.with_overrides(args.seed, args.pace_ms);
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = load_config(&args)?;
    log::debug!("config: {config:?}");

    if args.gui {
        return connect_five::ui::run(config.pacing(), config.seed)
            .map_err(|e| anyhow::anyhow!("window failed: {e}"));
    }

    let opponent = match config.seed {
        Some(seed) => Opponent::with_seed(Side::PlayerB, seed),
        None => Opponent::new(Side::PlayerB),
    };
    let input = LineInput::new(io::stdin().lock(), io::stdout());
    let sink = TextRenderer::new(io::stdout(), config.glyphs.clone());
    let pacer = SleepPacer::new(config.pacing());

    Controller::new(opponent, input, sink, pacer).run()?;
    Ok(())
}
