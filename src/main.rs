use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use classic_snake::config::{
    EdgeBehavior, Edges, GameConfig, GridSize, DEFAULT_APPLE_CAPACITY, DEFAULT_APPLE_REFRESH_MS,
    DEFAULT_CELL_SIZE, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_INITIAL_SNAKE_LENGTH,
    DEFAULT_SELF_COLLISION_TOLERANCE, DEFAULT_TICK_INTERVAL_MS, THEME_CLASSIC,
};
use classic_snake::game::{GameEvent, GameState};
use classic_snake::input::GameInput;
use classic_snake::schedule::Periodic;
use classic_snake::terminal_runtime::{install_panic_hook, TerminalSession};
use log::{info, LevelFilter};
use simplelog::WriteLogger;

/// Upper bound on how long one loop iteration waits for input.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Board width in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
    width: u16,

    /// Board height in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT)]
    height: u16,

    /// Pixel size of one cell (reported to pixel-based front ends).
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    cell_size: u16,

    /// Milliseconds between game ticks.
    #[arg(long, default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_ms: u64,

    /// Milliseconds without eating before the apples are replaced.
    #[arg(long, default_value_t = DEFAULT_APPLE_REFRESH_MS)]
    apple_refresh_ms: u64,

    /// Maximum number of apples on the board.
    #[arg(long, default_value_t = DEFAULT_APPLE_CAPACITY)]
    apples: usize,

    /// Segments nearest the head ignored by the self-collision check.
    #[arg(long, default_value_t = DEFAULT_SELF_COLLISION_TOLERANCE)]
    collision_tolerance: usize,

    /// Segment count of a new snake.
    #[arg(long, default_value_t = DEFAULT_INITIAL_SNAKE_LENGTH)]
    initial_length: usize,

    /// Leaving the board on any edge ends the game.
    #[arg(long)]
    solid_walls: bool,

    /// Left and right edges end the game.
    #[arg(long)]
    solid_horizontal: bool,

    /// Top and bottom edges end the game.
    #[arg(long)]
    solid_vertical: bool,

    /// Seed for apple placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Write a log to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log apple events as well as game starts and ends.
    #[arg(long)]
    verbose: bool,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        let mut edges = if self.solid_walls {
            Edges::solid()
        } else {
            Edges::wrapping()
        };
        if self.solid_horizontal {
            edges.horizontal = EdgeBehavior::Solid;
        }
        if self.solid_vertical {
            edges.vertical = EdgeBehavior::Solid;
        }

        GameConfig {
            bounds: GridSize {
                width: self.width,
                height: self.height,
            },
            cell_size: self.cell_size,
            tick_period: Duration::from_millis(self.tick_ms),
            apple_refresh_period: Duration::from_millis(self.apple_refresh_ms),
            apple_capacity: self.apples,
            self_collision_tolerance: self.collision_tolerance,
            initial_snake_length: self.initial_length,
            edges,
        }
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = cli.game_config();
    let state = match cli.seed {
        Some(seed) => GameState::new_with_seed(config, seed),
        None => GameState::new(config),
    }
    .map_err(|error| io::Error::new(io::ErrorKind::InvalidInput, error))?;

    info!(
        "starting {}x{} board, {} apples, edges {:?}",
        config.bounds.width, config.bounds.height, config.apple_capacity, config.edges
    );

    install_panic_hook();
    run(state)
}

fn init_logging(cli: &Cli) -> io::Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    WriteLogger::init(level, simplelog::Config::default(), File::create(path)?)
        .map_err(io::Error::other)
}

fn run(mut state: GameState) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;

    let now = Instant::now();
    let mut game_tick = Periodic::new(state.config().tick_period, now);
    let mut apple_refresh = Periodic::new(state.config().apple_refresh_period, now);

    loop {
        session.draw_game(&state, &THEME_CLASSIC)?;

        let timeout = game_tick.remaining(Instant::now()).min(FRAME_INTERVAL);
        match session.poll_input(timeout)? {
            Some(GameInput::Quit) => break,
            Some(GameInput::Restart) if state.is_game_over() => {
                state.restart();
                let now = Instant::now();
                game_tick.restart(now);
                apple_refresh.restart(now);
            }
            Some(GameInput::Direction(direction)) => state.set_direction(direction),
            Some(GameInput::Restart) | None => {}
        }

        let now = Instant::now();
        if game_tick.fire_if_due(now) {
            state.tick();
            for event in state.drain_events() {
                match event {
                    GameEvent::AppleEaten => apple_refresh.restart(now),
                    GameEvent::GameOver(_) => {}
                }
            }
        }

        if apple_refresh.fire_if_due(now) {
            state.refresh_apples();
        }
    }

    info!("quit with score {}", state.score());
    Ok(())
}
