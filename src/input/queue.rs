use std::collections::VecDeque;

use crate::game::{Action, Direction};

/// Most key presses buffered between two ticks
pub const MAX_QUEUED_DIRECTIONS: usize = 5;

/// Direction requests collected between ticks, released one per tick.
///
/// Each request is validated by the engine against the snake's direction at
/// the tick it is applied, so pressing Down then Left while heading Up turns
/// over two ticks instead of reversing in one.
#[derive(Debug, Clone, Default)]
pub struct DirectionQueue {
    pending: VecDeque<Direction>,
}

impl DirectionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a request; returns false (dropping it) when the queue is full
    pub fn push(&mut self, direction: Direction) -> bool {
        if self.pending.len() >= MAX_QUEUED_DIRECTIONS {
            return false;
        }
        self.pending.push_back(direction);
        true
    }

    /// The action for the coming tick
    pub fn next_action(&mut self) -> Action {
        self.pending.pop_front().into()
    }

    /// A request `steps` ticks ahead, 0 being the next one
    pub fn peek(&self, steps: usize) -> Option<Direction> {
        self.pending.get(steps).copied()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
