use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;

use snake_engine::game::{GameConfig, GameEngine, walls_from_coordinates};
use snake_engine::logging::{self, LogTarget};
use snake_engine::modes::{HeadlessConfig, HeadlessMode, HumanMode, WatchMode, tick_interval};

#[derive(Parser)]
#[command(name = "snake")]
#[command(version, about = "Tick-based Snake game with autoplay modes")]
struct Cli {
    /// How the game is driven
    #[arg(long, value_enum, default_value_t = Mode::Human)]
    mode: Mode,

    /// Board size as WIDTH HEIGHT (default 25 25)
    #[arg(long, num_args = 2, value_names = ["WIDTH", "HEIGHT"])]
    board_size: Option<Vec<usize>>,

    /// Wall cells as row/column pairs: R1 C1 R2 C2 ...
    #[arg(long, num_args = 1.., allow_negative_numbers = true)]
    walls: Vec<i32>,

    /// Seconds between ticks in the TUI modes
    #[arg(long, default_value_t = 0.2)]
    speed: f64,

    /// Seed for food placement; a random seed is used when absent
    #[arg(long)]
    random_seed: Option<u64>,

    /// Starting snake length
    #[arg(long)]
    initial_length: Option<usize>,

    /// JSON game configuration used as the base for the other options
    #[arg(long)]
    config: Option<PathBuf>,

    /// Episodes to play in headless mode
    #[arg(long, default_value_t = 100)]
    episodes: usize,

    /// Per-episode step cap in headless mode
    #[arg(long, default_value_t = 10_000)]
    max_steps: u32,

    /// Write logs here while a TUI mode owns the terminal
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Play with the keyboard
    Human,
    /// Watch the greedy policy play
    Watch,
    /// Autoplay episodes without a terminal and print statistics
    Headless,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(size) = &self.board_size {
            config.grid_width = size[0];
            config.grid_height = size[1];
        }
        config
            .walls
            .extend(walls_from_coordinates(&self.walls).context("Invalid --walls")?);
        if let Some(length) = self.initial_length {
            config.initial_snake_length = length;
        }

        Ok(config)
    }

    fn log_target(&self) -> LogTarget {
        match (self.mode, &self.log_file) {
            (_, Some(path)) => LogTarget::File(path.clone()),
            (Mode::Headless, None) => LogTarget::Stderr,
            _ => LogTarget::Off,
        }
    }

    fn engine(&self, config: GameConfig) -> Result<GameEngine> {
        let engine = match self.random_seed {
            Some(seed) => GameEngine::with_seed(config, seed),
            None => GameEngine::new(config),
        };
        engine.context("Invalid game configuration")
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_target(), "info")?;

    let tick = tick_interval(cli.speed)?;
    let config = cli.game_config()?;
    let engine = cli.engine(config)?;
    info!(mode = ?cli.mode, seed = ?cli.random_seed, "starting snake");

    match cli.mode {
        Mode::Human => HumanMode::new(engine, tick).run().await?,
        Mode::Watch => WatchMode::new(engine, tick).run().await?,
        Mode::Headless => {
            let headless_config = HeadlessConfig::new(cli.episodes).with_max_steps(cli.max_steps);
            let mut headless = HeadlessMode::new(engine, headless_config);
            let stats = headless.run();
            println!("{}", stats.format_summary());
        }
    }

    Ok(())
}
