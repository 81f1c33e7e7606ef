//! Headless mode: autoplay many episodes without a terminal
//!
//! Runs a policy against the engine as fast as it can, collecting
//! [`EpisodeStats`] and logging progress every `log_frequency` episodes.
//!
//! # Example
//!
//! ```rust
//! use snake_engine::game::{GameConfig, GameEngine};
//! use snake_engine::modes::{HeadlessConfig, HeadlessMode};
//!
//! let engine = GameEngine::with_seed(GameConfig::small(), 7).unwrap();
//! let mut headless = HeadlessMode::new(engine, HeadlessConfig::new(3));
//! let stats = headless.run();
//!
//! assert_eq!(stats.total_episodes(), 3);
//! ```

use tracing::{debug, info};

use crate::game::{GameEngine, GameState};
use crate::metrics::EpisodeStats;
use crate::rl::{GreedyPolicy, Policy};

#[derive(Debug, Clone)]
pub struct HeadlessConfig {
    /// Number of episodes to play
    pub episodes: usize,

    /// Step cap per episode; an episode reaching it counts as survived
    pub max_steps: u32,

    /// Log progress every N episodes
    pub log_frequency: usize,

    /// Rolling window for the mean score and length
    pub stats_window: usize,
}

impl HeadlessConfig {
    pub fn new(episodes: usize) -> Self {
        Self {
            episodes,
            ..Self::default()
        }
    }

    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps;
        self
    }
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            episodes: 100,
            max_steps: 10_000,
            log_frequency: 10,
            stats_window: 100,
        }
    }
}

pub struct HeadlessMode<P: Policy = GreedyPolicy> {
    engine: GameEngine,
    policy: P,
    stats: EpisodeStats,
    config: HeadlessConfig,
}

impl HeadlessMode<GreedyPolicy> {
    pub fn new(engine: GameEngine, config: HeadlessConfig) -> Self {
        Self::with_policy(engine, GreedyPolicy::new(), config)
    }
}

impl<P: Policy> HeadlessMode<P> {
    pub fn with_policy(engine: GameEngine, policy: P, config: HeadlessConfig) -> Self {
        let stats = EpisodeStats::new(config.stats_window);
        Self {
            engine,
            policy,
            stats,
            config,
        }
    }

    /// Play every configured episode and return the collected statistics
    pub fn run(&mut self) -> &EpisodeStats {
        info!(
            episodes = self.config.episodes,
            max_steps = self.config.max_steps,
            width = self.engine.config().grid_width,
            height = self.engine.config().grid_height,
            "headless run started"
        );

        for episode in 1..=self.config.episodes {
            let final_state = self.run_episode();
            debug!(
                episode,
                score = final_state.score,
                steps = final_state.steps,
                collision = ?final_state.collision,
                "episode finished"
            );
            self.stats.record_state(&final_state);

            if self.config.log_frequency > 0 && episode % self.config.log_frequency == 0 {
                info!("{}", self.stats.format_summary());
            }
        }

        info!("headless run finished: {}", self.stats.format_summary());
        &self.stats
    }

    /// Play one episode from a fresh reset, returning its final state
    pub fn run_episode(&mut self) -> GameState {
        self.engine.reset();

        while self.engine.state().steps < self.config.max_steps {
            let state = self.engine.state();
            if !state.is_alive || state.is_won() {
                break;
            }
            let action = self.policy.choose(state);
            self.engine.step(action);
        }

        self.engine.snapshot()
    }

    pub fn stats(&self) -> &EpisodeStats {
        &self.stats
    }
}
