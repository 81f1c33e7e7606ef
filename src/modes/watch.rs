//! Watch mode: a scripted policy plays while you look on
//!
//! # Controls
//!
//! - Space/P: Pause/unpause
//! - R: Restart the episode
//! - 1-4: Speed (1=slow, 2=normal, 3=fast, 4=very fast)
//! - Q/Esc: Quit

use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use std::time::Duration;
use tokio::time::{Interval, interval};
use tracing::{debug, info};

use super::tui::{Tui, restore_terminal, setup_terminal};
use super::{RENDER_INTERVAL, preset_interval};
use crate::game::GameEngine;
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;
use crate::rl::{GreedyPolicy, Policy};

fn speed_name(level: u8) -> &'static str {
    match level {
        1 => "Slow",
        2 => "Normal",
        3 => "Fast",
        4 => "Very Fast",
        _ => "Custom",
    }
}

pub struct WatchMode<P: Policy = GreedyPolicy> {
    engine: GameEngine,
    policy: P,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    tick: Duration,
    /// Last speed key pressed, 0 while running at the `--speed` rate
    speed_level: u8,
    paused: bool,
    should_quit: bool,
    episode_count: usize,
}

impl WatchMode<GreedyPolicy> {
    pub fn new(engine: GameEngine, tick: Duration) -> Self {
        Self::with_policy(engine, GreedyPolicy::new(), tick)
    }
}

impl<P: Policy> WatchMode<P> {
    pub fn with_policy(engine: GameEngine, policy: P, tick: Duration) -> Self {
        Self {
            engine,
            policy,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            tick,
            speed_level: 0,
            paused: false,
            should_quit: false,
            episode_count: 1,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = setup_terminal()?;
        info!(tick_ms = self.tick.as_millis() as u64, "watch mode started");

        let result = self.run_watch_loop(&mut terminal).await;

        restore_terminal(&mut terminal)?;
        info!(
            episodes = self.episode_count,
            high_score = self.metrics.high_score,
            "watch mode finished"
        );

        result
    }

    async fn run_watch_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut tick_timer = interval(self.tick);
        let mut render_timer = interval(RENDER_INTERVAL);

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event, &mut tick_timer);
                    }
                }

                _ = tick_timer.tick() => {
                    if !self.paused {
                        self.advance();
                    }
                }

                _ = render_timer.tick() => {
                    self.metrics.update();
                    let status = self.status_line();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, self.engine.state(), &self.metrics, Some(&status));
                    }).context("Failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// One tick: step the policy, or restart once the episode is over
    fn advance(&mut self) {
        let state = self.engine.state();
        if !state.is_alive || state.is_won() {
            self.restart();
            return;
        }

        let action = self.policy.choose(state);
        let state = self.engine.step(action);

        if !state.is_alive || state.is_won() {
            debug!(
                episode = self.episode_count,
                score = state.score,
                steps = state.steps,
                collision = ?state.collision,
                "episode finished"
            );
            self.metrics.on_game_over(state);
        }
    }

    fn restart(&mut self) {
        self.engine.reset();
        self.metrics.on_game_start();
        self.episode_count += 1;
    }

    fn handle_event(&mut self, event: Event, tick_timer: &mut Interval) {
        let Event::Key(key) = event else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.input_handler.handle_key_event(key) {
            KeyAction::TogglePause => self.paused = !self.paused,
            KeyAction::Restart => self.restart(),
            KeyAction::Speed(level) => {
                if let Some(tick) = preset_interval(level) {
                    self.tick = tick;
                    self.speed_level = level;
                    *tick_timer = interval(tick);
                }
            }
            KeyAction::Quit => self.should_quit = true,
            // The policy steers
            KeyAction::Steer(_) | KeyAction::None => {}
        }
    }

    fn status_line(&self) -> String {
        let mut status = format!(
            "WATCH | Episode {} | Speed: {}",
            self.episode_count,
            speed_name(self.speed_level)
        );
        if self.paused {
            status.push_str(" | PAUSED");
        }
        status
    }
}
