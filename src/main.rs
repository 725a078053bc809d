use anyhow::Result;
use clap::{Parser, ValueEnum};
use grid_snake::game::{FoodPlacement, GameConfig};
use grid_snake::modes::HumanMode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Grid-based snake game for the terminal")]
struct Cli {
    /// Seed for food placement (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Where food may respawn
    #[arg(long, value_enum, default_value = "uniform")]
    food_placement: Placement,
}

#[derive(Clone, Copy, ValueEnum)]
enum Placement {
    /// Any cell, including under the snake
    Uniform,
    /// Only cells the snake does not occupy
    AvoidSnake,
}

impl From<Placement> for FoodPlacement {
    fn from(placement: Placement) -> Self {
        match placement {
            Placement::Uniform => FoodPlacement::Uniform,
            Placement::AvoidSnake => FoodPlacement::AvoidSnake,
        }
    }
}

fn init_tracing() {
    // stdout belongs to the TUI
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = GameConfig {
        food_placement: cli.food_placement.into(),
        ..GameConfig::default()
    };
    config.validate()?;

    let seed = cli.seed.unwrap_or_else(rand::random);
    let mut human_mode = HumanMode::new(config, seed);
    human_mode.run().await?;

    Ok(())
}
