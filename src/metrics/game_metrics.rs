use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::game::{CollisionType, GameState};

/// Per-session numbers shown in the TUI header
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub longest_snake: usize,
    pub games_played: u32,
    pub last_collision: Option<CollisionType>,
    deaths: HashMap<CollisionType, u32>,
    /// Freezes the clock once the current game is over
    running: bool,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            high_score: 0,
            longest_snake: 0,
            games_played: 0,
            last_collision: None,
            deaths: HashMap::new(),
            running: true,
        }
    }

    pub fn update(&mut self) {
        if self.running {
            self.elapsed_time = self.start_time.elapsed();
        }
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.last_collision = None;
        self.running = true;
    }

    /// Fold a finished game into the session totals
    pub fn on_game_over(&mut self, state: &GameState) {
        self.update();
        self.running = false;
        self.games_played += 1;
        self.high_score = self.high_score.max(state.score);
        self.longest_snake = self.longest_snake.max(state.snake.len());
        self.last_collision = state.collision;
        if let Some(collision) = state.collision {
            *self.deaths.entry(collision).or_default() += 1;
        }
    }

    /// Games this session that ended with `collision`
    pub fn deaths_by(&self, collision: CollisionType) -> u32 {
        self.deaths.get(&collision).copied().unwrap_or(0)
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Position, Snake};

    fn finished(score: u32, length: usize, collision: CollisionType) -> GameState {
        let mut state = GameState::new(
            Snake::new(Position::new(0, length as i32 - 1), Direction::Right, length),
            None,
            Default::default(),
            length.max(1),
            1,
        );
        state.score = score;
        state.is_alive = false;
        state.collision = Some(collision);
        state
    }

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_high_score_tracking() {
        let mut metrics = GameMetrics::new();

        metrics.on_game_over(&finished(10, 3, CollisionType::Wall));
        assert_eq!(metrics.high_score, 10);
        assert_eq!(metrics.games_played, 1);
        assert_eq!(metrics.last_collision, Some(CollisionType::Wall));

        metrics.on_game_over(&finished(5, 6, CollisionType::SelfCollision));
        assert_eq!(metrics.high_score, 10);
        assert_eq!(metrics.longest_snake, 6);
        assert_eq!(metrics.games_played, 2);
        assert_eq!(metrics.last_collision, Some(CollisionType::SelfCollision));

        metrics.on_game_over(&finished(2, 2, CollisionType::Wall));
        assert_eq!(metrics.deaths_by(CollisionType::Wall), 2);
        assert_eq!(metrics.deaths_by(CollisionType::SelfCollision), 1);
        assert_eq!(metrics.deaths_by(CollisionType::Boundary), 0);
    }

    #[test]
    fn test_clock_stops_after_game_over() {
        let mut metrics = GameMetrics::new();
        metrics.on_game_over(&finished(1, 1, CollisionType::Boundary));
        let frozen = metrics.elapsed_time;

        std::thread::sleep(Duration::from_millis(20));
        metrics.update();
        assert_eq!(metrics.elapsed_time, frozen);

        metrics.on_game_start();
        assert_eq!(metrics.last_collision, None);
        std::thread::sleep(Duration::from_millis(20));
        metrics.update();
        assert!(metrics.elapsed_time >= Duration::from_millis(20));
    }
}
