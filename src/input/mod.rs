pub mod handler;
pub mod queue;

pub use handler::{InputHandler, KeyAction};
pub use queue::{DirectionQueue, MAX_QUEUED_DIRECTIONS};
