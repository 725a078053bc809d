use grid_snake::game::{
    Action, CollisionType, Direction, GameConfig, GameEngine, GameState, PendingDirection,
    Position, SessionStatus, Snake,
};

fn replay(seed: u64, inputs: &[Option<Direction>]) -> Vec<GameState> {
    let mut engine = GameEngine::with_seed(GameConfig::default(), seed);
    let mut state = engine.reset();
    let mut history = vec![state.clone()];

    for input in inputs {
        if !state.is_running() {
            break;
        }
        engine.step(&mut state, Action::from(*input));
        history.push(state.clone());
    }
    history
}

#[test]
fn stepwise_food_collection_and_wall_collision() {
    let mut engine = GameEngine::with_seed(GameConfig::default(), 42);
    let snake = Snake::from_segments(vec![Position::new(10, 10)], Direction::Right).unwrap();
    let mut state = GameState::new(snake, Position::new(11, 10), 32, 24);

    let result = engine.step(&mut state, Action::Continue);
    assert_eq!(result.status, SessionStatus::Running);
    assert_eq!(result.score_delta, 10);
    assert_eq!(
        state.snake.segments(),
        &[Position::new(11, 10), Position::new(10, 10)]
    );

    // Keep food out of the way, then run up into the top wall
    state.food = Position::new(0, 23);
    let mut pending = PendingDirection::new();
    pending.offer(Direction::Up, state.snake.direction);
    engine.step(&mut state, pending.take());
    assert_eq!(state.snake.head(), Position::new(11, 9));

    for _ in 0..9 {
        engine.step(&mut state, Action::Continue);
    }
    assert_eq!(state.snake.head(), Position::new(11, 0));
    assert!(state.is_running());

    let result = engine.step(&mut state, Action::Continue);
    assert_eq!(result.status, SessionStatus::Ended);
    assert_eq!(result.info.collision, Some(CollisionType::Wall));
    assert_eq!(state.score, 10);
}

#[test]
fn corner_start_heading_left_ends_immediately() {
    let mut engine = GameEngine::with_seed(GameConfig::default(), 1);
    let mut state = engine.reset();
    state.food = Position::new(5, 5);
    state.snake.direction = Direction::Down;

    let mut pending = PendingDirection::new();
    pending.offer(Direction::Left, state.snake.direction);
    let result = engine.step(&mut state, pending.take());

    assert!(result.terminated);
    assert_eq!(state.snake.segments(), &[Position::new(0, 0)]);
}

#[test]
fn identical_inputs_replay_identically() {
    let inputs = [
        None,
        Some(Direction::Down),
        None,
        Some(Direction::Right),
        Some(Direction::Left),
        None,
        Some(Direction::Down),
        Some(Direction::Right),
        None,
        None,
    ];

    assert_eq!(replay(9001, &inputs), replay(9001, &inputs));
}
