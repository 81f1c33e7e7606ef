use std::collections::{BTreeSet, VecDeque};
use std::fmt;

use serde::{Deserialize, Serialize};

use super::action::Direction;

/// A cell on the game grid, addressed as (row, column)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Move position by delta
    pub fn moved_by(&self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// Move position one cell in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.delta();
        self.moved_by(d_row, d_col)
    }

    pub fn manhattan_distance(&self, other: Position) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: VecDeque<Position>,
    /// Direction of the last move
    pub direction: Direction,
}

impl Snake {
    /// Lay out a snake of `length` cells, trailing behind `head` opposite to `direction`
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let back = direction.opposite();
        let body = std::iter::successors(Some(head), |segment| {
            Some(segment.moved_in_direction(back))
        })
        .take(length.max(1))
        .collect();

        Self { body, direction }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Body segments behind the head
    pub fn body_segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter().skip(1)
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Check whether moving the head onto `pos` would hit the body.
    ///
    /// When `tail_vacates` is set the tail cell is free this tick and does not count.
    pub fn collides_with_body(&self, pos: Position, tail_vacates: bool) -> bool {
        let considered = if tail_vacates {
            self.body.len() - 1
        } else {
            self.body.len()
        };
        self.body.iter().take(considered).any(|&segment| segment == pos)
    }

    /// Push a new head; drop the tail unless the snake grows this tick
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            self.body.pop_back();
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Never true for a snake built through `Snake::new`
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// What ended the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollisionType {
    /// Head left the grid
    Boundary,
    /// Head ran into a configured wall cell
    Wall,
    /// Head ran into the snake's own body
    SelfCollision,
}

impl fmt::Display for CollisionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            CollisionType::Boundary => "left the board",
            CollisionType::Wall => "hit a wall",
            CollisionType::SelfCollision => "bit itself",
        };
        f.write_str(text)
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub snake: Snake,
    /// `None` once no free cell is left to place food on
    pub food: Option<Position>,
    pub walls: BTreeSet<Position>,
    pub grid_width: usize,
    pub grid_height: usize,
    pub score: u32,
    pub steps: u32,
    pub is_alive: bool,
    pub collision: Option<CollisionType>,
}

impl GameState {
    pub fn new(
        snake: Snake,
        food: Option<Position>,
        walls: BTreeSet<Position>,
        grid_width: usize,
        grid_height: usize,
    ) -> Self {
        Self {
            snake,
            food,
            walls,
            grid_width,
            grid_height,
            score: 0,
            steps: 0,
            is_alive: true,
            collision: None,
        }
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.row >= 0
            && (pos.row as usize) < self.grid_height
            && pos.col >= 0
            && (pos.col as usize) < self.grid_width
    }

    pub fn is_wall(&self, pos: Position) -> bool {
        self.walls.contains(&pos)
    }

    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.contains(pos)
    }

    /// In bounds and neither wall nor snake
    pub fn is_free(&self, pos: Position) -> bool {
        self.is_in_bounds(pos) && !self.is_wall(pos) && !self.is_occupied_by_snake(pos)
    }

    /// Free cells in row-major order
    pub fn free_cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.grid_height as i32)
            .flat_map(move |row| (0..self.grid_width as i32).map(move |col| Position::new(row, col)))
            .filter(move |&pos| self.is_free(pos))
    }

    /// Classify what moving the head onto `next_head` would hit.
    ///
    /// Checked in order: grid boundary, walls, then the body. The tail only
    /// counts as body when the snake `grows` this tick.
    pub fn collision_at(&self, next_head: Position, grows: bool) -> Option<CollisionType> {
        if !self.is_in_bounds(next_head) {
            return Some(CollisionType::Boundary);
        }
        if self.is_wall(next_head) {
            return Some(CollisionType::Wall);
        }
        if self.snake.collides_with_body(next_head, !grows) {
            return Some(CollisionType::SelfCollision);
        }
        None
    }

    /// Alive with the whole board covered: nothing left to eat
    pub fn is_won(&self) -> bool {
        self.is_alive && self.food.is_none()
    }
}
