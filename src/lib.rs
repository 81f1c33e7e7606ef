//! Snake Engine - a deterministic, tick-based Snake game
//!
//! This library provides:
//! - Core game logic with injectable randomness (game module)
//! - Keyboard mapping and direction buffering (input module)
//! - TUI rendering (render module)
//! - Session and episode metrics (metrics module)
//! - Observations, rewards and scripted policies for autoplay (rl module)
//! - Human, watch and headless execution modes (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod rl;
