use anyhow::Result;
use clap::Parser;
use grid_snake::game::GameConfig;
use grid_snake::logging::{self, DEFAULT_LOG_FILE};
use grid_snake::modes::{HumanConfig, HumanMode};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Classic grid Snake in the terminal")]
struct Cli {
    /// Seed for food placement; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Simulation ticks per second
    #[arg(long)]
    tps: Option<u32>,

    /// Frames drawn per second
    #[arg(long)]
    fps: Option<u32>,

    /// JSON file with loop timing settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where log lines are written
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// Never spawn food on a cell the snake occupies
    #[arg(long)]
    food_avoids_snake: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&cli.log_file)?;
    info!("Game started");

    let mut human_config = match &cli.config {
        Some(path) => HumanConfig::load(path)?,
        None => HumanConfig::default(),
    };
    if let Some(tps) = cli.tps {
        human_config.ticks_per_second = tps;
    }
    if let Some(fps) = cli.fps {
        human_config.fps = fps;
    }

    let game_config = GameConfig {
        food_avoids_snake: cli.food_avoids_snake,
        ..Default::default()
    };
    let seed = cli.seed.unwrap_or_else(rand::random);

    println!("Press Space to start the game and R to restart.");

    let mut human_mode = HumanMode::new(game_config, human_config, seed);
    let result = human_mode.run().await;

    info!("Game finished");
    result
}
