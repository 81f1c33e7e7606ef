use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

use snake_engine::game::{
    Action, CollisionType, Direction, GameConfig, GameEngine, GameState, Position,
};

fn positions(state: &GameState) -> Vec<Position> {
    state.snake.body.iter().copied().collect()
}

fn random_action(rng: &mut StdRng) -> Action {
    match rng.gen_range(0..5) {
        4 => Action::Continue,
        i => Action::Move(Direction::ALL[i]),
    }
}

#[test]
fn eating_grows_the_snake_and_respawns_food() {
    let config = GameConfig::new(5, 5)
        .with_start(Position::new(2, 2), Direction::Right, 1)
        .with_food(Position::new(2, 4));
    let mut engine = GameEngine::with_seed(config, 42).unwrap();

    engine.step(Action::Move(Direction::Right));
    let state = engine.step(Action::Move(Direction::Right));

    assert!(state.is_alive);
    assert_eq!(state.score, 1);
    assert_eq!(positions(state), vec![Position::new(2, 4), Position::new(2, 3)]);
    assert_eq!(state.free_cells().count(), 23);

    let food = state.food.unwrap();
    assert!(state.is_in_bounds(food));
    assert!(!state.is_occupied_by_snake(food));
}

#[test]
fn reversal_is_ignored_for_long_snakes() {
    let config = GameConfig::new(5, 5)
        .with_start(Position::new(2, 2), Direction::Right, 3)
        .with_food(Position::new(0, 0));
    let mut engine = GameEngine::with_seed(config, 42).unwrap();
    assert_eq!(
        positions(engine.state()),
        vec![Position::new(2, 2), Position::new(2, 1), Position::new(2, 0)]
    );

    let state = engine.step(Action::Move(Direction::Left));

    assert!(state.is_alive);
    assert_eq!(state.snake.direction, Direction::Right);
    assert_eq!(
        positions(state),
        vec![Position::new(2, 3), Position::new(2, 2), Position::new(2, 1)]
    );
}

#[test]
fn wall_collision_freezes_the_game() {
    let config = GameConfig::new(5, 5)
        .with_start(Position::new(2, 2), Direction::Right, 2)
        .with_walls([Position::new(2, 3)])
        .with_food(Position::new(0, 0));
    let mut engine = GameEngine::with_seed(config, 42).unwrap();
    let before = positions(engine.state());

    let state = engine.step(Action::Continue).clone();

    assert!(!state.is_alive);
    assert_eq!(state.collision, Some(CollisionType::Wall));
    assert_eq!(positions(&state), before);
    assert_eq!(state.score, 0);

    // Every later action is a no-op
    for direction in Direction::ALL {
        assert_eq!(engine.step(Action::Move(direction)), &state);
    }
    assert_eq!(engine.step(Action::Continue), &state);
}

#[test]
fn boundary_and_self_collisions_are_reported() {
    let config = GameConfig::new(5, 5)
        .with_start(Position::new(0, 2), Direction::Up, 1)
        .with_food(Position::new(4, 4));
    let mut engine = GameEngine::with_seed(config, 42).unwrap();
    assert_eq!(
        engine.step(Action::Continue).collision,
        Some(CollisionType::Boundary)
    );

    // A length-5 snake turning back on itself in a tight square
    let config = GameConfig::new(5, 5)
        .with_start(Position::new(2, 4), Direction::Right, 5)
        .with_food(Position::new(4, 4));
    let mut engine = GameEngine::with_seed(config, 42).unwrap();
    engine.step(Action::Move(Direction::Down));
    engine.step(Action::Move(Direction::Left));
    let state = engine.step(Action::Move(Direction::Up));

    assert!(!state.is_alive);
    assert_eq!(state.collision, Some(CollisionType::SelfCollision));
}

#[test]
fn filling_the_board_leaves_no_food() {
    // 1x3 board: eating twice fills every cell
    let config = GameConfig::new(3, 1)
        .with_start(Position::new(0, 0), Direction::Right, 1)
        .with_food(Position::new(0, 1));
    let mut engine = GameEngine::with_seed(config, 42).unwrap();

    let state = engine.step(Action::Continue);
    assert_eq!(state.score, 1);
    assert_eq!(state.food, Some(Position::new(0, 2)));

    let state = engine.step(Action::Continue);
    assert_eq!(state.score, 2);
    assert_eq!(state.food, None);
    assert!(state.is_alive);
    assert!(state.is_won());
}

#[test]
fn random_walks_keep_the_board_consistent() {
    let walls = [Position::new(1, 1), Position::new(5, 6), Position::new(7, 3)];

    for seed in 0..40 {
        let config = GameConfig::new(9, 8)
            .with_walls(walls)
            .with_start(Position::new(4, 4), Direction::Left, 3);
        let initial_length = config.initial_snake_length;
        let mut engine = GameEngine::with_seed(config, seed).unwrap();
        let mut actions = StdRng::seed_from_u64(seed + 1000);

        for _ in 0..300 {
            let before = engine.snapshot();
            let state = engine.step(random_action(&mut actions));

            if !before.is_alive {
                assert_eq!(state, &before);
                continue;
            }

            assert_eq!(state.steps, before.steps + 1);
            assert!(state.score == before.score || state.score == before.score + 1);

            if state.is_alive {
                assert!(state.collision.is_none());
                let body = positions(state);
                let unique: HashSet<_> = body.iter().collect();
                assert_eq!(unique.len(), body.len());
                assert!(body.iter().all(|&pos| state.is_in_bounds(pos)));
                assert!(body.iter().all(|&pos| !state.is_wall(pos)));
                assert_eq!(body.len(), initial_length + state.score as usize);
                if let Some(food) = state.food {
                    assert!(state.is_free(food));
                }
            } else {
                assert!(state.collision.is_some());
                assert_eq!(positions(state), positions(&before));
            }
        }
    }
}

#[test]
fn same_seed_same_game() {
    let play = |seed: u64| {
        let config = GameConfig::new(7, 7).with_walls([Position::new(0, 6)]);
        let mut engine = GameEngine::with_seed(config, seed).unwrap();
        let mut actions = StdRng::seed_from_u64(99);
        let mut history = Vec::new();
        for _ in 0..150 {
            history.push(engine.step(random_action(&mut actions)).clone());
        }
        history
    };

    assert_eq!(play(5), play(5));
}

#[test]
fn reset_restores_the_start() {
    let config = GameConfig::new(6, 6).with_start(Position::new(3, 3), Direction::Down, 2);
    let mut engine = GameEngine::with_seed(config, 8).unwrap();

    for _ in 0..10 {
        engine.step(Action::Continue);
    }
    let state = engine.reset();

    assert!(state.is_alive);
    assert_eq!(state.score, 0);
    assert_eq!(state.steps, 0);
    assert_eq!(state.collision, None);
    assert_eq!(positions(state), vec![Position::new(3, 3), Position::new(2, 3)]);
}
