use std::time::Duration;

use ratatui::style::Color;

use crate::error::ConfigError;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

/// What happens when the head crosses the board edge on one axis.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum EdgeBehavior {
    /// The head re-enters on the opposite side.
    #[default]
    Wrap,
    /// Leaving the board ends the game.
    Solid,
}

/// Per-axis edge policy. `horizontal` covers the left and right edges.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub struct Edges {
    pub horizontal: EdgeBehavior,
    pub vertical: EdgeBehavior,
}

impl Edges {
    /// Wraparound on every edge.
    #[must_use]
    pub fn wrapping() -> Self {
        Self {
            horizontal: EdgeBehavior::Wrap,
            vertical: EdgeBehavior::Wrap,
        }
    }

    /// Solid walls on every edge.
    #[must_use]
    pub fn solid() -> Self {
        Self {
            horizontal: EdgeBehavior::Solid,
            vertical: EdgeBehavior::Solid,
        }
    }
}

/// Board width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 30;

/// Board height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 30;

/// Pixel size of one cell for front ends that draw in pixels.
pub const DEFAULT_CELL_SIZE: u16 = 10;

/// Game tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 140;

/// Apples are cleared and respawned after this long without one being eaten.
pub const DEFAULT_APPLE_REFRESH_MS: u64 = 10_000;

/// Maximum number of apples on the board at once.
pub const DEFAULT_APPLE_CAPACITY: usize = 3;

/// Segments nearest the head skipped by the self-collision check.
pub const DEFAULT_SELF_COLLISION_TOLERANCE: usize = 4;

/// Segment count of a freshly started snake.
pub const DEFAULT_INITIAL_SNAKE_LENGTH: usize = 3;

/// Shortest snake the game will start with.
pub const MIN_INITIAL_SNAKE_LENGTH: usize = 3;

/// Row the snake starts on, clamped to the board height.
pub const START_ROW: u16 = 5;

/// Complete set of tunables for one game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameConfig {
    pub bounds: GridSize,
    pub cell_size: u16,
    pub tick_period: Duration,
    pub apple_refresh_period: Duration,
    pub apple_capacity: usize,
    pub self_collision_tolerance: usize,
    pub initial_snake_length: usize,
    pub edges: Edges,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bounds: GridSize {
                width: DEFAULT_GRID_WIDTH,
                height: DEFAULT_GRID_HEIGHT,
            },
            cell_size: DEFAULT_CELL_SIZE,
            tick_period: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            apple_refresh_period: Duration::from_millis(DEFAULT_APPLE_REFRESH_MS),
            apple_capacity: DEFAULT_APPLE_CAPACITY,
            self_collision_tolerance: DEFAULT_SELF_COLLISION_TOLERANCE,
            initial_snake_length: DEFAULT_INITIAL_SNAKE_LENGTH,
            edges: Edges::default(),
        }
    }
}

impl GameConfig {
    /// Checks every field that the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let GridSize { width, height } = self.bounds;
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyBoard { width, height });
        }
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.apple_capacity == 0 {
            return Err(ConfigError::ZeroAppleCapacity);
        }
        if self.tick_period.is_zero() {
            return Err(ConfigError::ZeroTickPeriod);
        }
        if self.apple_refresh_period.is_zero() {
            return Err(ConfigError::ZeroAppleRefreshPeriod);
        }
        if self.initial_snake_length < MIN_INITIAL_SNAKE_LENGTH {
            return Err(ConfigError::SnakeTooShort(self.initial_snake_length));
        }
        if self.start_head_column() >= usize::from(width) {
            return Err(ConfigError::SnakeDoesNotFit {
                length: self.initial_snake_length,
                width,
            });
        }
        Ok(())
    }

    /// Column of the head at game start; the body trails to the left of it
    /// with two free cells behind the tail.
    #[must_use]
    pub fn start_head_column(&self) -> usize {
        self.initial_snake_length + 2
    }

    /// Row the snake starts on.
    #[must_use]
    pub fn start_row(&self) -> u16 {
        START_ROW.min(self.bounds.height.saturating_sub(1))
    }
}

/// Colors applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub apple: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_score: Color,
    pub hud_muted: Color,
    pub menu_title: Color,
}

/// Green snake, red apples, black field.
pub const THEME_CLASSIC: Theme = Theme {
    snake_head: Color::LightGreen,
    snake_body: Color::Green,
    apple: Color::Red,
    play_bg: Color::Black,
    border_fg: Color::White,
    hud_score: Color::White,
    hud_muted: Color::DarkGray,
    menu_title: Color::Red,
};

/// Terminal columns used to draw one board cell; two keeps cells square.
pub const TERMINAL_COLUMNS_PER_CELL: u16 = 2;

pub const GLYPH_SNAKE_HEAD: &str = "██";
pub const GLYPH_SNAKE_BODY: &str = "▓▓";
pub const GLYPH_APPLE: &str = "()";
