use burn::tensor::{Tensor, TensorData, backend::Backend};

use crate::game::{GameState, Position};

/// Number of observation channels
pub const OBSERVATION_CHANNELS: usize = 4;

/// Create a 4-channel observation tensor from game state
///
/// Channels:
/// - 0: Snake head (1.0 at head position)
/// - 1: Snake body (1.0 at body positions, excluding head)
/// - 2: Food location (1.0 at food position, all zero once the board is full)
/// - 3: Walls (1.0 at configured wall cells)
///
/// The grid edge is implicit in the tensor shape.
///
/// Returns: Tensor<B, 3> with shape [4, height, width]
pub fn create_observation<B: Backend>(state: &GameState, device: &B::Device) -> Tensor<B, 3> {
    let channels = vec![
        channel(state, std::iter::once(state.snake.head()), device),
        channel(state, state.snake.body_segments().copied(), device),
        channel(state, state.food, device),
        channel(state, state.walls.iter().copied(), device),
    ];

    Tensor::stack(channels, 0)
}

/// A [height, width] plane with 1.0 at every in-bounds cell of `cells`
fn channel<B: Backend>(
    state: &GameState,
    cells: impl IntoIterator<Item = Position>,
    device: &B::Device,
) -> Tensor<B, 2> {
    let (height, width) = (state.grid_height, state.grid_width);
    let mut data = vec![0.0f32; height * width];

    for pos in cells {
        if state.is_in_bounds(pos) {
            data[pos.row as usize * width + pos.col as usize] = 1.0;
        }
    }

    Tensor::<B, 2>::from_data(TensorData::new(data, [height, width]), device)
}
