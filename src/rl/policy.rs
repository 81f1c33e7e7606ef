//! Scripted policies that drive the engine without a keyboard

use crate::game::{Action, Direction, GameState};

/// Anything that can pick the next action from the current state
pub trait Policy {
    fn choose(&mut self, state: &GameState) -> Action;
}

impl<F> Policy for F
where
    F: FnMut(&GameState) -> Action,
{
    fn choose(&mut self, state: &GameState) -> Action {
        self(state)
    }
}

/// Heads for the food along the shortest safe move.
///
/// Only looks one tick ahead: a move is safe when its next cell is free of
/// boundary, walls and body. Among safe moves the one closest to the food
/// wins, keeping the current direction on ties. With no safe move it keeps
/// going and dies.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyPolicy;

impl GreedyPolicy {
    pub fn new() -> Self {
        Self
    }

    /// Directions the engine would not reject as a reversal
    fn candidates(state: &GameState) -> impl Iterator<Item = Direction> + '_ {
        let current = state.snake.direction;
        let can_reverse = state.snake.len() <= 1;
        // Current direction first so it wins ties
        std::iter::once(current).chain(
            Direction::ALL
                .into_iter()
                .filter(move |&d| d != current && (can_reverse || !current.is_opposite(d))),
        )
    }

    fn is_safe(state: &GameState, direction: Direction) -> bool {
        let next = state.snake.head().moved_in_direction(direction);
        state.collision_at(next, state.food == Some(next)).is_none()
    }
}

impl Policy for GreedyPolicy {
    fn choose(&mut self, state: &GameState) -> Action {
        let head = state.snake.head();
        let distance = |direction: Direction| {
            state
                .food
                .map_or(0, |food| head.moved_in_direction(direction).manhattan_distance(food))
        };

        Self::candidates(state)
            .filter(|&direction| Self::is_safe(state, direction))
            .min_by_key(|&direction| distance(direction))
            .map_or(Action::Continue, Action::Move)
    }
}
