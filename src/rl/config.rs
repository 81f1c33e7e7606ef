//! Reward shaping for agents driving the engine

use serde::{Deserialize, Serialize};

use crate::game::GameState;

/// Rewards handed to an agent for each transition
///
/// # Example
///
/// ```rust
/// use snake_engine::rl::RewardConfig;
///
/// let rewards = RewardConfig {
///     food_reward: 1.0,
///     ..Default::default()
/// };
/// assert_eq!(rewards.death_penalty, -10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardConfig {
    /// Reward for eating food
    pub food_reward: f32,
    /// Penalty for each step (encourages efficiency)
    pub step_penalty: f32,
    /// Penalty for dying
    pub death_penalty: f32,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            food_reward: 10.0,
            step_penalty: -0.01,
            death_penalty: -10.0,
        }
    }
}

impl RewardConfig {
    /// Reward for the tick that went from `score_before` to `after`.
    ///
    /// A tick on an already finished game earns nothing.
    pub fn reward(&self, was_alive: bool, score_before: u32, after: &GameState) -> f32 {
        if !was_alive {
            return 0.0;
        }
        if !after.is_alive {
            return self.death_penalty;
        }

        let eaten = after.score.saturating_sub(score_before) as f32;
        self.step_penalty + eaten * self.food_reward
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Position, Snake};

    fn state(score: u32, alive: bool) -> GameState {
        let mut state = GameState::new(
            Snake::new(Position::new(2, 2), Direction::Right, 1),
            Some(Position::new(0, 0)),
            Default::default(),
            5,
            5,
        );
        state.score = score;
        state.is_alive = alive;
        state
    }

    #[test]
    fn test_step_reward() {
        let rewards = RewardConfig::default();
        assert_eq!(rewards.reward(true, 0, &state(0, true)), -0.01);
    }

    #[test]
    fn test_food_reward() {
        let rewards = RewardConfig::default();
        let reward = rewards.reward(true, 2, &state(3, true));
        assert!((reward - 9.99).abs() < 1e-5);
    }

    #[test]
    fn test_death_and_post_death_rewards() {
        let rewards = RewardConfig::default();
        assert_eq!(rewards.reward(true, 1, &state(1, false)), -10.0);
        assert_eq!(rewards.reward(false, 1, &state(1, false)), 0.0);
    }
}
