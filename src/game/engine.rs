use super::{
    action::{Action, Direction},
    config::{FoodPlacement, GameConfig},
    state::{CollisionType, GameState, Position, SessionStatus, Snake},
};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Information about a step
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision: Option<CollisionType>,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Session status after the step
    pub status: SessionStatus,
    /// Score gained during this step
    pub score_delta: u32,
    /// Whether the session has ended
    pub terminated: bool,
    pub info: StepInfo,
}

impl StepResult {
    fn ended(collision: Option<CollisionType>) -> Self {
        Self {
            status: SessionStatus::Ended,
            score_delta: 0,
            terminated: true,
            info: StepInfo {
                ate_food: false,
                collision,
            },
        }
    }
}

/// The game engine that handles all game logic.
///
/// The random source only drives food placement; seed it to replay a session.
pub struct GameEngine<R = StdRng> {
    config: GameConfig,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Create a new game engine seeded from the OS
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a reproducible game engine
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a new session: snake along the top row heading right
    pub fn reset(&mut self) -> GameState {
        let length = self.config.initial_snake_length.max(1);
        let head = Position::new(length as i32 - 1, 0);
        let snake = Snake::new(head, Direction::Right, length);

        let grid_width = self.config.grid_width();
        let grid_height = self.config.grid_height();
        let food = self.spawn_food(&snake, grid_width, grid_height);

        GameState::new(snake, food, grid_width, grid_height)
    }

    /// Advance the session by exactly one tick
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepResult {
        if !state.is_running() {
            return StepResult::ended(None);
        }

        // A reversal is never applied, whoever buffered the input
        if let Action::Move(pending) = action {
            state.snake.direction = state.snake.direction.resolve(pending);
        }

        let new_head = state.snake.head().moved_in_direction(state.snake.direction);
        state.steps += 1;

        if let Some(collision) = self.check_collision(state, new_head) {
            state.status = SessionStatus::Ended;
            return StepResult::ended(Some(collision));
        }

        let ate_food = new_head == state.food;
        state.snake.advance_to(new_head, ate_food);

        let mut score_delta = 0;
        if ate_food {
            score_delta = self.config.food_reward;
            state.score += score_delta;
            state.food = self.spawn_food(&state.snake, state.grid_width, state.grid_height);
        }

        StepResult {
            status: SessionStatus::Running,
            score_delta,
            terminated: false,
            info: StepInfo {
                ate_food,
                collision: None,
            },
        }
    }

    /// Check the new head against walls, then against the whole current
    /// body (tail included, since it has not moved yet)
    fn check_collision(&self, state: &GameState, pos: Position) -> Option<CollisionType> {
        if !state.is_in_bounds(pos) {
            return Some(CollisionType::Wall);
        }

        if state.snake.occupies(pos) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    fn spawn_food(&mut self, snake: &Snake, grid_width: usize, grid_height: usize) -> Position {
        if self.config.food_placement == FoodPlacement::AvoidSnake {
            let free: Vec<Position> = (0..grid_height as i32)
                .flat_map(|y| (0..grid_width as i32).map(move |x| Position::new(x, y)))
                .filter(|pos| !snake.occupies(*pos))
                .collect();

            if !free.is_empty() {
                return free[self.rng.gen_range(0..free.len())];
            }
        }

        let x = self.rng.gen_range(0..grid_width) as i32;
        let y = self.rng.gen_range(0..grid_height) as i32;
        Position::new(x, y)
    }
}
