use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use std::time::Duration;
use tokio::time::{Interval, interval};
use tracing::info;

use super::tui::{Tui, restore_terminal, setup_terminal};
use super::{RENDER_INTERVAL, preset_interval};
use crate::game::GameEngine;
use crate::input::{DirectionQueue, InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Keyboard-driven game in the terminal
pub struct HumanMode {
    engine: GameEngine,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    pending: DirectionQueue,
    tick: Duration,
    paused: bool,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(engine: GameEngine, tick: Duration) -> Self {
        Self {
            engine,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            pending: DirectionQueue::new(),
            tick,
            paused: false,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = setup_terminal()?;
        info!(tick_ms = self.tick.as_millis() as u64, "human game started");

        let result = self.run_game_loop(&mut terminal).await;

        restore_terminal(&mut terminal)?;
        info!(
            games = self.metrics.games_played,
            high_score = self.metrics.high_score,
            "human game finished"
        );

        result
    }

    async fn run_game_loop(&mut self, terminal: &mut Tui) -> Result<()> {
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
                        self.update_game();
                    }
                }

                _ = render_timer.tick() => {
                    self.metrics.update();
                    let status = self.status_line();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, self.engine.state(), &self.metrics, status.as_deref());
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

    fn handle_event(&mut self, event: Event, tick_timer: &mut Interval) {
        let Event::Key(key) = event else {
            return;
        };
        // Only process key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.input_handler.handle_key_event(key) {
            KeyAction::Steer(direction) => {
                // A full queue drops the press
                self.pending.push(direction);
            }
            KeyAction::Restart => self.reset_game(),
            KeyAction::TogglePause => self.paused = !self.paused,
            KeyAction::Speed(level) => {
                if let Some(tick) = preset_interval(level) {
                    self.tick = tick;
                    *tick_timer = interval(tick);
                }
            }
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
    }

    /// One tick; a dead snake or a cleared board stays as it is until restart
    fn update_game(&mut self) {
        let state = self.engine.state();
        if !state.is_alive || state.is_won() {
            return;
        }

        let action = self.pending.next_action();
        let state = self.engine.step(action);

        if !state.is_alive {
            info!(score = state.score, collision = ?state.collision, "game over");
            self.metrics.on_game_over(state);
        } else if state.is_won() {
            info!(score = state.score, steps = state.steps, "board cleared");
            self.metrics.on_game_over(state);
        }
    }

    /// Header extra: pause marker and the turns still waiting in the queue
    fn status_line(&self) -> Option<String> {
        let queued: Vec<String> = (0..self.pending.len())
            .filter_map(|step| self.pending.peek(step))
            .map(|direction| format!("{direction:?}"))
            .collect();

        let mut parts = Vec::new();
        if self.paused {
            parts.push("PAUSED".to_string());
        }
        if !queued.is_empty() {
            parts.push(format!("Next: {}", queued.join(" ")));
        }
        (!parts.is_empty()).then(|| parts.join(" | "))
    }

    fn reset_game(&mut self) {
        self.engine.reset();
        self.metrics.on_game_start();
        self.pending.clear();
        self.paused = false;
    }
}
