use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::{
    action::Direction,
    error::{ConfigError, ConfigResult},
    state::{Position, Snake},
};

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid (number of columns)
    pub grid_width: usize,
    /// Height of the game grid (number of rows)
    pub grid_height: usize,
    /// Impassable cells, fixed for the whole game
    pub walls: Vec<Position>,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Head cell of the starting snake; the grid centre when unset
    pub start_position: Option<Position>,
    pub start_direction: Direction,
    /// Pin the first food cell instead of drawing it at random
    pub initial_food: Option<Position>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 25,
            grid_height: 25,
            walls: Vec::new(),
            initial_snake_length: 1,
            start_position: None,
            start_direction: Direction::Right,
            initial_food: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    pub fn with_walls(mut self, walls: impl IntoIterator<Item = Position>) -> Self {
        self.walls.extend(walls);
        self
    }

    pub fn with_start(mut self, head: Position, direction: Direction, length: usize) -> Self {
        self.start_position = Some(head);
        self.start_direction = direction;
        self.initial_snake_length = length;
        self
    }

    pub fn with_food(mut self, food: Position) -> Self {
        self.initial_food = Some(food);
        self
    }

    /// Load a configuration from a JSON file; missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {:?}", path))
    }

    /// Head cell of the starting snake
    pub fn start_position(&self) -> Position {
        self.start_position.unwrap_or_else(|| {
            Position::new((self.grid_height / 2) as i32, (self.grid_width / 2) as i32)
        })
    }

    /// The snake a fresh game starts with
    pub fn initial_snake(&self) -> Snake {
        Snake::new(
            self.start_position(),
            self.start_direction,
            self.initial_snake_length,
        )
    }

    /// Reject configurations the engine cannot start from
    pub fn validate(&self) -> ConfigResult<()> {
        let (width, height) = (self.grid_width, self.grid_height);
        if width == 0 || height == 0 || width > i32::MAX as usize || height > i32::MAX as usize {
            return Err(ConfigError::InvalidDimensions { width, height });
        }
        if self.initial_snake_length == 0 {
            return Err(ConfigError::EmptySnake);
        }

        let in_bounds = |pos: &Position| {
            pos.row >= 0 && (pos.row as usize) < height && pos.col >= 0 && (pos.col as usize) < width
        };

        let snake = self.initial_snake();
        if let Some(&segment) = snake.body.iter().find(|&&pos| !in_bounds(&pos)) {
            return Err(ConfigError::SnakeOutOfBounds(segment));
        }

        for &wall in &self.walls {
            if !in_bounds(&wall) {
                return Err(ConfigError::WallOutOfBounds {
                    wall,
                    width,
                    height,
                });
            }
            if snake.contains(wall) {
                return Err(ConfigError::WallOverlapsSnake(wall));
            }
        }

        if let Some(food) = self.initial_food {
            if !in_bounds(&food) {
                return Err(ConfigError::FoodOutOfBounds(food));
            }
            if self.walls.contains(&food) {
                return Err(ConfigError::FoodOnWall(food));
            }
            if snake.contains(food) {
                return Err(ConfigError::FoodOnSnake(food));
            }
        }

        Ok(())
    }
}

/// Turn a flat `r1 c1 r2 c2 ...` list into wall cells
pub fn walls_from_coordinates(values: &[i32]) -> ConfigResult<Vec<Position>> {
    if values.len() % 2 != 0 {
        return Err(ConfigError::UnpairedWallCoordinate(values.len()));
    }
    Ok(values
        .chunks_exact(2)
        .map(|pair| Position::new(pair[0], pair[1]))
        .collect())
}
