use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::apples::Apples;
use crate::config::{EdgeBehavior, GameConfig, GridSize};
use crate::error::ConfigError;
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Why the last game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    SelfCollision,
    WallCollision,
}

/// Notifications for the front end, queued by [`GameState::tick`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameEvent {
    /// An apple was eaten; the apple-refresh schedule should start over.
    AppleEaten,
    GameOver(DeathReason),
}

/// Complete mutable game state for one session.
///
/// The state never owns timers. A front end calls [`tick`](Self::tick) on
/// its game schedule, [`refresh_apples`](Self::refresh_apples) on its apple
/// schedule, and restarts the latter when [`GameEvent::AppleEaten`] shows up
/// in [`drain_events`](Self::drain_events).
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub apples: Apples,
    score: u32,
    tick_count: u64,
    status: GameStatus,
    death_reason: Option<DeathReason>,
    events: Vec<GameEvent>,
    config: GameConfig,
    rng: StdRng,
}

impl GameState {
    /// Starts a game with an entropy-seeded apple generator.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut state = Self {
            snake: starting_snake(&config),
            apples: Apples::with_capacity(config.apple_capacity),
            score: 0,
            tick_count: 0,
            status: GameStatus::Playing,
            death_reason: None,
            events: Vec::new(),
            config,
            rng,
        };
        state.fill_apples();
        Ok(state)
    }

    /// Throws away the current game and starts a fresh one with the same
    /// configuration. The random generator carries on.
    pub fn restart(&mut self) {
        self.snake = starting_snake(&self.config);
        self.apples.clear();
        self.score = 0;
        self.tick_count = 0;
        self.status = GameStatus::Playing;
        self.death_reason = None;
        self.events.clear();
        self.fill_apples();

        info!("game restarted");
    }

    /// Advances simulation by one gameplay tick.
    ///
    /// Eating is checked against the head where it stands when the tick
    /// begins, then collisions, then the snake moves. All three steps run
    /// on the tick that ends the game; later ticks do nothing.
    pub fn tick(&mut self) {
        if self.status == GameStatus::GameOver {
            return;
        }

        self.tick_count += 1;

        let head = self.snake.head();
        if self.apples.take_at(head) {
            self.score += 1;
            self.snake.grow_next();
            self.events.push(GameEvent::AppleEaten);
            debug!("apple eaten at ({}, {}), score {}", head.x, head.y, self.score);
        }
        self.locate_apple();

        if let Some(reason) = self.collision() {
            self.status = GameStatus::GameOver;
            self.death_reason = Some(reason);
            self.events.push(GameEvent::GameOver(reason));
            info!(
                "game over after {} ticks: {:?}, score {}",
                self.tick_count, reason, self.score
            );
        }

        self.snake.move_forward(self.config.bounds, self.config.edges);
    }

    /// Steers the snake. Reversals and input after game over are ignored.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.status == GameStatus::GameOver {
            return;
        }
        self.snake.set_direction(direction);
    }

    /// Spawns one apple at a random cell if the board is below capacity.
    pub fn locate_apple(&mut self) -> Option<Position> {
        let placed = self.apples.locate(&mut self.rng, self.config.bounds);
        if let Some(position) = placed {
            debug!("apple placed at ({}, {})", position.x, position.y);
        }
        placed
    }

    /// Removes every apple from the board.
    pub fn remove_all_apples(&mut self) {
        self.apples.clear();
    }

    /// Apple-refresh trigger: clears the board and drops a single new apple.
    /// Further apples come back one per tick.
    pub fn refresh_apples(&mut self) {
        if self.status == GameStatus::GameOver {
            return;
        }
        debug!("refreshing {} uneaten apples", self.apples.len());
        self.remove_all_apples();
        self.locate_apple();
    }

    /// Takes the events queued since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Snake cells from head to tail.
    pub fn snake_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.snake.segments().copied()
    }

    #[must_use]
    pub fn apple_cells(&self) -> &[Position] {
        self.apples.cells()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn death_reason(&self) -> Option<DeathReason> {
        self.death_reason
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.snake.direction()
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.config.bounds
    }

    fn fill_apples(&mut self) {
        while self.locate_apple().is_some() {}
    }

    fn collision(&self) -> Option<DeathReason> {
        let head = self.snake.head();
        let bounds = self.config.bounds;
        let edges = self.config.edges;

        let off_x = edges.horizontal == EdgeBehavior::Solid && !head.x_within(bounds);
        let off_y = edges.vertical == EdgeBehavior::Solid && !head.y_within(bounds);
        if off_x || off_y {
            return Some(DeathReason::WallCollision);
        }

        if self.snake.head_hits_body(self.config.self_collision_tolerance) {
            return Some(DeathReason::SelfCollision);
        }

        None
    }
}

fn starting_snake(config: &GameConfig) -> Snake {
    let head = Position {
        x: i32::try_from(config.start_head_column()).unwrap_or(i32::MAX),
        y: i32::from(config.start_row()),
    };
    Snake::straight(head, config.initial_snake_length, Direction::Right)
}
