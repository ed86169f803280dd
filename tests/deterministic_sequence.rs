use classic_snake::config::{Edges, GameConfig, GridSize};
use classic_snake::game::{DeathReason, GameEvent, GameState, GameStatus};
use classic_snake::input::Direction;
use classic_snake::snake::{Position, Snake};

#[test]
fn eating_in_front_of_a_full_board_respawns_and_signals() {
    let mut state = GameState::new_with_seed(GameConfig::default(), 42).expect("valid config");
    let pixels: Vec<(i32, i32)> = state.snake_cells().map(|cell| cell.to_pixels(10)).collect();
    assert_eq!(pixels, vec![(50, 50), (40, 50), (30, 50)]);

    state.remove_all_apples();
    state.apples.place(Position { x: 5, y: 5 });
    state.apples.place(Position { x: 20, y: 20 });
    state.apples.place(Position { x: 21, y: 20 });

    state.tick();

    assert_eq!(state.score(), 1);
    assert_eq!(state.snake.len(), 4);
    assert_eq!(state.apple_cells().len(), 3);
    assert_eq!(state.drain_events(), vec![GameEvent::AppleEaten]);
    assert_eq!(state.snake.head().to_pixels(10), (60, 50));
}

#[test]
fn stepwise_apple_collection_and_wall_collision() {
    let config = GameConfig {
        bounds: GridSize {
            width: 8,
            height: 6,
        },
        edges: Edges::solid(),
        ..GameConfig::default()
    };
    let mut state = GameState::new_with_seed(config, 42).expect("valid config");
    state.remove_all_apples();
    state.snake = Snake::straight(Position { x: 3, y: 1 }, 3, Direction::Right);
    state.apples.place(Position { x: 3, y: 1 });

    state.tick();
    assert_eq!(state.status(), GameStatus::Playing);
    assert_eq!(state.score(), 1);
    assert_eq!(state.snake.len(), 4);
    assert_eq!(state.snake.head(), Position { x: 4, y: 1 });

    state.remove_all_apples();
    state.set_direction(Direction::Up);
    state.tick();
    assert_eq!(state.status(), GameStatus::Playing);
    assert_eq!(state.snake.head(), Position { x: 4, y: 0 });

    state.remove_all_apples();
    state.tick();
    assert_eq!(state.status(), GameStatus::Playing);
    assert_eq!(state.snake.head(), Position { x: 4, y: -1 });

    state.remove_all_apples();
    state.tick();
    assert_eq!(state.status(), GameStatus::GameOver);
    assert_eq!(state.death_reason(), Some(DeathReason::WallCollision));
}

#[test]
fn tight_loop_into_own_body_ends_game_and_freezes_state() {
    let mut state = GameState::new_with_seed(GameConfig::default(), 7).expect("valid config");
    state.snake = Snake::from_segments(
        vec![
            Position { x: 1, y: 1 },
            Position { x: 1, y: 2 },
            Position { x: 2, y: 2 },
            Position { x: 3, y: 2 },
            Position { x: 3, y: 1 },
            Position { x: 2, y: 1 },
            Position { x: 2, y: 0 },
        ],
        Direction::Up,
    );
    state.set_direction(Direction::Right);

    // Head steps onto the old sixth segment, which now sits at index 6.
    state.remove_all_apples();
    state.tick();
    assert!(!state.is_game_over());
    assert_eq!(state.snake.head(), Position { x: 2, y: 1 });

    state.remove_all_apples();
    state.tick();
    assert!(state.is_game_over());
    assert_eq!(state.death_reason(), Some(DeathReason::SelfCollision));
    assert_eq!(
        state.drain_events(),
        vec![GameEvent::GameOver(DeathReason::SelfCollision)]
    );

    let cells: Vec<Position> = state.snake_cells().collect();
    let apples = state.apple_cells().to_vec();
    let ticks = state.tick_count();

    for _ in 0..5 {
        state.tick();
        state.refresh_apples();
    }

    assert_eq!(state.snake_cells().collect::<Vec<_>>(), cells);
    assert_eq!(state.apple_cells(), apples.as_slice());
    assert_eq!(state.tick_count(), ticks);
    assert!(state.drain_events().is_empty());
}

#[test]
fn u_turn_into_nearby_segment_is_tolerated() {
    let mut state = GameState::new_with_seed(GameConfig::default(), 8).expect("valid config");
    state.snake = Snake::from_segments(
        vec![
            Position { x: 1, y: 1 },
            Position { x: 2, y: 1 },
            Position { x: 2, y: 2 },
            Position { x: 1, y: 2 },
            Position { x: 0, y: 2 },
        ],
        Direction::Left,
    );
    state.set_direction(Direction::Down);

    // Head lands on what becomes segment 4, inside the tolerance.
    for _ in 0..2 {
        state.remove_all_apples();
        state.tick();
    }

    assert!(!state.is_game_over());
}

#[test]
fn six_segment_snake_circling_onto_its_tail_dies_and_freezes() {
    let mut state = GameState::new_with_seed(GameConfig::default(), 11).expect("valid config");
    state.snake = Snake::straight(Position { x: 12, y: 10 }, 6, Direction::Right);

    // Curl the straight snake into a two-by-three ring.
    for turn in [Direction::Down, Direction::Left, Direction::Left] {
        state.set_direction(turn);
        state.remove_all_apples();
        state.tick();
        assert!(!state.is_game_over());
    }
    assert_eq!(state.snake.len(), 6);
    assert_eq!(state.snake.head(), Position { x: 10, y: 11 });

    // Turning up steps the head into the cell the tail just gave up.
    state.set_direction(Direction::Up);
    state.remove_all_apples();
    state.tick();
    assert!(!state.is_game_over());
    assert_eq!(state.snake.head(), Position { x: 10, y: 10 });
    assert_eq!(state.snake.len(), 6);

    state.remove_all_apples();
    state.tick();
    assert!(state.is_game_over());
    assert_eq!(state.death_reason(), Some(DeathReason::SelfCollision));
    assert_eq!(
        state.drain_events(),
        vec![GameEvent::GameOver(DeathReason::SelfCollision)]
    );

    let cells: Vec<Position> = state.snake_cells().collect();
    let apples = state.apple_cells().to_vec();
    let ticks = state.tick_count();

    for direction in Direction::ALL {
        state.set_direction(direction);
        state.tick();
    }

    assert_eq!(state.snake_cells().collect::<Vec<_>>(), cells);
    assert_eq!(state.apple_cells(), apples.as_slice());
    assert_eq!(state.tick_count(), ticks);
    assert_eq!(state.score(), 0);
    assert!(state.drain_events().is_empty());
}
