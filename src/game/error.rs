use super::state::Position;

/// Reasons a game cannot be constructed from its configuration
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("initial snake length must be at least 1")]
    EmptySnake,
    #[error("snake segment at {0} lies outside the grid")]
    SnakeOutOfBounds(Position),
    #[error("wall at {wall} lies outside the {width}x{height} grid")]
    WallOutOfBounds {
        wall: Position,
        width: usize,
        height: usize,
    },
    #[error("wall at {0} overlaps the starting snake")]
    WallOverlapsSnake(Position),
    #[error("food at {0} lies outside the grid")]
    FoodOutOfBounds(Position),
    #[error("food at {0} overlaps a wall")]
    FoodOnWall(Position),
    #[error("food at {0} overlaps the starting snake")]
    FoodOnSnake(Position),
    #[error("wall coordinates must come in row/column pairs, got {0} values")]
    UnpairedWallCoordinate(usize),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
