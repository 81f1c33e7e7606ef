//! Programmatic driving of the game engine
//!
//! Provides:
//! - 4-channel grid observations (head, body, food, walls)
//! - Burn-compatible RL environment interface with discrete actions
//! - Reward shaping configuration
//! - Scripted policies for autoplay

pub mod config;
pub mod environment;
pub mod observation;
pub mod policy;

pub use config::RewardConfig;
pub use environment::{ACTION_COUNT, SnakeEnvironment, action_from_index, action_to_index};
pub use observation::{OBSERVATION_CHANNELS, create_observation};
pub use policy::{GreedyPolicy, Policy};
