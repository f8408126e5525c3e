use anyhow::{Context, Result};
use clap::Parser;
use color_snake::game::{GameConfig, GameEngine, RngPicker};
use color_snake::logging;
use color_snake::modes::HumanMode;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "color_snake")]
#[command(version, about = "Colourful snake game for the terminal")]
struct Cli {
    /// JSON file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board width in pixels
    #[arg(long)]
    width: Option<i32>,

    /// Board height in pixels
    #[arg(long)]
    height: Option<i32>,

    /// Side length of one grid cell in pixels
    #[arg(long)]
    cell_size: Option<i32>,

    /// Milliseconds between ticks
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Seed for food placement, for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Append logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Minimum level written to the log file
    #[arg(long, default_value = "info")]
    log_level: Level,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(cell_size) = self.cell_size {
            config.cell_size = cell_size;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_ms = tick_ms;
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        logging::init(path, cli.log_level)?;
    }

    let config = cli.game_config()?;

    match cli.seed {
        Some(seed) => {
            tracing::info!(seed, "using seeded food placement");
            let picker = RngPicker::new(StdRng::seed_from_u64(seed));
            let engine = GameEngine::with_picker(config, picker);
            HumanMode::new(engine).run().await?;
        }
        None => {
            HumanMode::new(GameEngine::new(config)).run().await?;
        }
    }

    Ok(())
}
