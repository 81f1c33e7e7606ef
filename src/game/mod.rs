//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! It can be driven by the keyboard loop, by a scripted policy, or by an RL agent.

pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::{GameConfig, walls_from_coordinates};
pub use engine::GameEngine;
pub use error::{ConfigError, ConfigResult};
pub use state::{CollisionType, GameState, Position, Snake};
