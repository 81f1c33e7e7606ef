use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, trace};

use super::{
    action::{Action, Direction},
    config::GameConfig,
    error::ConfigResult,
    state::{GameState, Position},
};

/// The game engine that owns the state and advances it one tick at a time.
///
/// All randomness (food placement) is drawn from the injected `R`, so a seeded
/// engine replays identically.
#[derive(Debug, Clone)]
pub struct GameEngine<R: Rng = StdRng> {
    config: GameConfig,
    state: GameState,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Create an engine seeded from OS entropy
    pub fn new(config: GameConfig) -> ConfigResult<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a reproducible engine
    pub fn with_seed(config: GameConfig, seed: u64) -> ConfigResult<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine drawing food positions from `rng`.
    ///
    /// Fails without building anything when the configuration is invalid.
    pub fn with_rng(config: GameConfig, mut rng: R) -> ConfigResult<Self> {
        config.validate()?;
        let state = initial_state(&config, &mut rng);
        debug!(
            width = config.grid_width,
            height = config.grid_height,
            walls = state.walls.len(),
            food = ?state.food,
            "game created"
        );
        Ok(Self { config, state, rng })
    }

    /// Start a fresh game with the same configuration
    pub fn reset(&mut self) -> &GameState {
        self.state = initial_state(&self.config, &mut self.rng);
        &self.state
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the current state
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Advance the game by one tick.
    ///
    /// A dead game is left untouched. On a collision the snake is not moved:
    /// only `is_alive`, `collision` and the step counter change.
    pub fn step(&mut self, action: Action) -> &GameState {
        if !self.state.is_alive {
            trace!("step ignored, game is over");
            return &self.state;
        }

        let direction = self.effective_direction(action);
        let next_head = self.state.snake.head().moved_in_direction(direction);
        let eats = self.state.food == Some(next_head);
        self.state.steps += 1;

        if let Some(collision) = self.state.collision_at(next_head, eats) {
            self.state.is_alive = false;
            self.state.collision = Some(collision);
            debug!(
                ?collision,
                head = %self.state.snake.head(),
                score = self.state.score,
                steps = self.state.steps,
                "snake died"
            );
            return &self.state;
        }

        self.state.snake.advance(next_head, eats);
        self.state.snake.direction = direction;

        if eats {
            self.state.score += 1;
            self.state.food = spawn_food(&self.state, &mut self.rng);
            match self.state.food {
                Some(food) => trace!(%food, score = self.state.score, "food respawned"),
                None => debug!(score = self.state.score, "no free cell left for food"),
            }
        }

        &self.state
    }

    /// The direction this tick will actually use
    fn effective_direction(&self, action: Action) -> Direction {
        let snake = &self.state.snake;
        match action {
            Action::Move(requested) if snake.len() > 1 && snake.direction.is_opposite(requested) => {
                trace!(?requested, current = ?snake.direction, "reversal ignored");
                snake.direction
            }
            Action::Move(requested) => requested,
            Action::Continue => snake.direction,
        }
    }
}

fn initial_state<R: Rng>(config: &GameConfig, rng: &mut R) -> GameState {
    let mut state = GameState::new(
        config.initial_snake(),
        None,
        config.walls.iter().copied().collect(),
        config.grid_width,
        config.grid_height,
    );
    state.food = config.initial_food.or_else(|| spawn_food(&state, rng));
    state
}

/// Pick a cell uniformly among those free of snake and walls
fn spawn_food<R: Rng>(state: &GameState, rng: &mut R) -> Option<Position> {
    let free: Vec<Position> = state.free_cells().collect();
    free.choose(rng).copied()
}
