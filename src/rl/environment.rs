use burn::tensor::{Tensor, backend::Backend};
use rand::rngs::StdRng;

use super::config::RewardConfig;
use super::observation::create_observation;
use crate::game::{Action, ConfigResult, Direction, GameConfig, GameEngine, GameState};

/// Size of the discrete action space
pub const ACTION_COUNT: usize = 5;

/// Snake environment for reinforcement learning
///
/// Wraps the game engine and provides a Burn-compatible RL interface with:
/// - Tensor observations (4-channel grid)
/// - Discrete action space (5 actions: Up, Down, Left, Right, Continue)
/// - Standard RL interface (reset, step)
pub struct SnakeEnvironment<B: Backend> {
    engine: GameEngine<StdRng>,
    rewards: RewardConfig,
    device: B::Device,
}

impl<B: Backend> SnakeEnvironment<B> {
    /// Create a new environment; the seed makes food placement reproducible
    pub fn new(
        config: GameConfig,
        rewards: RewardConfig,
        seed: u64,
        device: B::Device,
    ) -> ConfigResult<Self> {
        Ok(Self {
            engine: GameEngine::with_seed(config, seed)?,
            rewards,
            device,
        })
    }

    /// Reset the environment and return initial observation
    ///
    /// Returns: Tensor<B, 3> with shape [4, height, width]
    pub fn reset(&mut self) -> Tensor<B, 3> {
        self.engine.reset();
        self.get_observation()
    }

    /// Step the environment with a discrete action
    ///
    /// Actions:
    /// - 0: Move Up
    /// - 1: Move Down
    /// - 2: Move Left
    /// - 3: Move Right
    /// - 4: Continue (keep current direction)
    ///
    /// Returns: (observation, reward, done)
    pub fn step(&mut self, action_idx: usize) -> (Tensor<B, 3>, f32, bool) {
        let before = self.engine.state();
        let (was_alive, score_before) = (before.is_alive, before.score);

        let after = self.engine.step(action_from_index(action_idx));
        let reward = self.rewards.reward(was_alive, score_before, after);
        let done = !after.is_alive || after.is_won();

        (self.get_observation(), reward, done)
    }

    /// Get current observation without stepping
    pub fn get_observation(&self) -> Tensor<B, 3> {
        create_observation(self.engine.state(), &self.device)
    }

    pub fn device(&self) -> &B::Device {
        &self.device
    }

    pub fn state(&self) -> &GameState {
        self.engine.state()
    }

    pub fn rewards(&self) -> &RewardConfig {
        &self.rewards
    }
}

/// Convert discrete action index to game Action
///
/// Out-of-range indices fall back to Continue.
pub fn action_from_index(idx: usize) -> Action {
    match Direction::ALL.get(idx) {
        Some(&direction) => Action::Move(direction),
        None => Action::Continue,
    }
}

/// Inverse of [`action_from_index`]
pub fn action_to_index(action: Action) -> usize {
    match action {
        Action::Move(direction) => Direction::ALL
            .iter()
            .position(|&d| d == direction)
            .unwrap_or(ACTION_COUNT - 1),
        Action::Continue => ACTION_COUNT - 1,
    }
}
