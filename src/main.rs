use std::{fs::File, path::{Path, PathBuf}, sync::Mutex};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use wrapsnake::{game::SnakeGame, GameConfig, GameState, Preset};

#[derive(Parser)]
#[command(name = "wrapsnake")]
#[command(version, about = "Snake on a wrap-around board, in the terminal")]
struct Cli {
    /// TOML config file; overrides the preset
    #[arg(long)]
    config: Option<PathBuf>,

    /// Built-in settings to start from
    #[arg(long, value_enum, default_value = "touch")]
    preset: PresetArg,

    /// Frames per step at the start of a game
    #[arg(long)]
    tick_rate: Option<u32>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Ignore the mouse
    #[arg(long)]
    no_touch: bool,

    /// Write logs here; nothing is logged otherwise
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Default log level when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Clone, ValueEnum)]
enum PresetArg {
    /// Keyboard only, slower start
    Classic,
    /// Keyboard and mouse swipes
    Touch,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Classic => Preset::Classic,
            PresetArg::Touch => Preset::Touch,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path, &cli.log_level)?;
    }

    let config = build_config(&cli)?;
    tracing::info!(?config, "starting");

    let state = GameState::new(config).context("Invalid game configuration")?;
    let mut game = SnakeGame::new(state).context("Failed to read terminal size")?;
    if let Err(e) = game.initialize() {
        if let Err(restore_err) = game.restore() {
            tracing::warn!(error = %restore_err, "failed to restore terminal");
        }
        return Err(e);
    }

    // Always hand the terminal back, even when the game loop failed
    let result = game.show_intro().and_then(|go| if go { game.play() } else { Ok(()) });
    game.restore().context("Failed to restore terminal")?;

    result
}

fn build_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GameConfig::preset(cli.preset.clone().into()),
    };

    if let Some(rate) = cli.tick_rate {
        config.speed.initial_tick_rate = rate;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.no_touch {
        config.input.touch = false;
    }

    config.validate().context("Invalid game configuration")?;
    Ok(config)
}

fn init_logging(path: &Path, level: &str) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("wrapsnake={}", level)));

    // The terminal belongs to the game, so logs only ever go to the file
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
