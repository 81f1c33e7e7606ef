//! Rolling statistics over autoplayed episodes
//!
//! Used by headless mode to summarise how an agent performs across many games.

use std::collections::VecDeque;

use crate::game::{CollisionType, GameState};

/// Episode statistics with rolling averages
///
/// Scores and lengths are kept in a window of the most recent episodes;
/// totals, the best score and death causes cover every recorded episode.
///
/// # Example
///
/// ```rust
/// use snake_engine::metrics::EpisodeStats;
///
/// let mut stats = EpisodeStats::new(100);
/// stats.record_episode(5, 150, None);
///
/// assert_eq!(stats.total_episodes(), 1);
/// assert_eq!(stats.best_score(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct EpisodeStats {
    /// Food eaten per episode (rolling window)
    episode_scores: VecDeque<u32>,

    /// Ticks per episode (rolling window)
    episode_lengths: VecDeque<u32>,

    total_episodes: usize,
    total_steps: u64,
    best_score: u32,

    boundary_deaths: usize,
    wall_deaths: usize,
    self_collisions: usize,

    /// Episodes that hit the step cap or cleared the board
    survived: usize,

    window_size: usize,
}

impl EpisodeStats {
    /// Create a tracker keeping `window_size` recent episodes for the means
    pub fn new(window_size: usize) -> Self {
        let window_size = window_size.max(1);
        Self {
            episode_scores: VecDeque::with_capacity(window_size),
            episode_lengths: VecDeque::with_capacity(window_size),
            total_episodes: 0,
            total_steps: 0,
            best_score: 0,
            boundary_deaths: 0,
            wall_deaths: 0,
            self_collisions: 0,
            survived: 0,
            window_size,
        }
    }

    /// Record a finished episode; `collision` is `None` when the snake survived
    pub fn record_episode(&mut self, score: u32, length: u32, collision: Option<CollisionType>) {
        Self::push_window(&mut self.episode_scores, score, self.window_size);
        Self::push_window(&mut self.episode_lengths, length, self.window_size);
        self.total_episodes += 1;
        self.total_steps += u64::from(length);
        self.best_score = self.best_score.max(score);

        match collision {
            Some(CollisionType::Boundary) => self.boundary_deaths += 1,
            Some(CollisionType::Wall) => self.wall_deaths += 1,
            Some(CollisionType::SelfCollision) => self.self_collisions += 1,
            None => self.survived += 1,
        }
    }

    /// Record the final state of an episode
    pub fn record_state(&mut self, state: &GameState) {
        self.record_episode(state.score, state.steps, state.collision);
    }

    pub fn mean_score(&self) -> f32 {
        Self::mean(&self.episode_scores)
    }

    pub fn mean_length(&self) -> f32 {
        Self::mean(&self.episode_lengths)
    }

    pub fn total_episodes(&self) -> usize {
        self.total_episodes
    }

    pub fn total_steps(&self) -> u64 {
        self.total_steps
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    /// Number of recorded episodes that ended with `collision`
    pub fn deaths_by(&self, collision: CollisionType) -> usize {
        match collision {
            CollisionType::Boundary => self.boundary_deaths,
            CollisionType::Wall => self.wall_deaths,
            CollisionType::SelfCollision => self.self_collisions,
        }
    }

    pub fn survived(&self) -> usize {
        self.survived
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn format_summary(&self) -> String {
        format!(
            "Episodes: {} | Steps: {} | Score: {:.2} | Best: {} | Len: {:.1} | Deaths: boundary {} / wall {} / self {} | Survived: {}",
            self.total_episodes,
            self.total_steps,
            self.mean_score(),
            self.best_score,
            self.mean_length(),
            self.boundary_deaths,
            self.wall_deaths,
            self.self_collisions,
            self.survived,
        )
    }

    fn mean(window: &VecDeque<u32>) -> f32 {
        if window.is_empty() {
            0.0
        } else {
            window.iter().map(|&value| value as f32).sum::<f32>() / window.len() as f32
        }
    }

    fn push_window(window: &mut VecDeque<u32>, value: u32, window_size: usize) {
        if window.len() >= window_size {
            window.pop_front();
        }
        window.push_back(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Position, Snake};

    #[test]
    fn test_new() {
        let stats = EpisodeStats::new(100);
        assert_eq!(stats.window_size(), 100);
        assert_eq!(stats.total_episodes(), 0);
        assert_eq!(stats.total_steps(), 0);
        assert_eq!(stats.mean_score(), 0.0);
        assert_eq!(stats.mean_length(), 0.0);
    }

    #[test]
    fn test_record_episode() {
        let mut stats = EpisodeStats::new(100);
        stats.record_episode(3, 50, Some(CollisionType::Wall));

        assert_eq!(stats.total_episodes(), 1);
        assert_eq!(stats.total_steps(), 50);
        assert!((stats.mean_length() - 50.0).abs() < 1e-5);
        assert!((stats.mean_score() - 3.0).abs() < 1e-5);
        assert_eq!(stats.deaths_by(CollisionType::Wall), 1);
        assert_eq!(stats.deaths_by(CollisionType::Boundary), 0);
    }

    #[test]
    fn test_rolling_average() {
        let mut stats = EpisodeStats::new(3);

        stats.record_episode(1, 10, None);
        stats.record_episode(2, 20, None);
        stats.record_episode(3, 30, None);
        assert!((stats.mean_score() - 2.0).abs() < 1e-5);

        // A 4th episode evicts the first
        stats.record_episode(4, 40, None);

        assert_eq!(stats.total_episodes(), 4);
        assert!((stats.mean_score() - 3.0).abs() < 1e-5);
        assert_eq!(stats.total_steps(), 100);
        assert_eq!(stats.survived(), 4);
    }

    #[test]
    fn test_best_score_never_decreases() {
        let mut stats = EpisodeStats::new(2);
        stats.record_episode(9, 10, Some(CollisionType::SelfCollision));
        stats.record_episode(1, 10, Some(CollisionType::SelfCollision));
        stats.record_episode(2, 10, Some(CollisionType::Boundary));

        assert_eq!(stats.best_score(), 9);
        assert_eq!(stats.deaths_by(CollisionType::SelfCollision), 2);
    }

    #[test]
    fn test_record_state() {
        let mut state = GameState::new(
            Snake::new(Position::new(1, 1), Direction::Right, 2),
            None,
            Default::default(),
            5,
            5,
        );
        state.score = 4;
        state.steps = 17;
        state.is_alive = false;
        state.collision = Some(CollisionType::Boundary);

        let mut stats = EpisodeStats::new(10);
        stats.record_state(&state);

        assert_eq!(stats.best_score(), 4);
        assert_eq!(stats.total_steps(), 17);
        assert_eq!(stats.deaths_by(CollisionType::Boundary), 1);
    }

    #[test]
    fn test_format_summary() {
        let mut stats = EpisodeStats::new(100);
        stats.record_episode(5, 150, Some(CollisionType::Wall));

        let summary = stats.format_summary();
        assert!(summary.contains("Episodes: 1"));
        assert!(summary.contains("Steps: 150"));
        assert!(summary.contains("Score: 5.00"));
        assert!(summary.contains("Best: 5"));
        assert!(summary.contains("Len: 150.0"));
        assert!(summary.contains("wall 1"));
    }
}
