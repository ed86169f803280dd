use thiserror::Error;

/// Rejected game configuration.
///
/// Every variant describes a setting that would make the simulation's
/// invariants unsatisfiable, so construction fails instead of playing on.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum ConfigError {
    #[error("board must be at least one cell wide and tall (got {width}x{height})")]
    EmptyBoard { width: u16, height: u16 },
    #[error("cell size must be non-zero")]
    ZeroCellSize,
    #[error("apple capacity must be non-zero")]
    ZeroAppleCapacity,
    #[error("tick period must be non-zero")]
    ZeroTickPeriod,
    #[error("apple refresh period must be non-zero")]
    ZeroAppleRefreshPeriod,
    #[error("initial snake length {0} is below the minimum of 3")]
    SnakeTooShort(usize),
    #[error("initial snake of length {length} does not fit on a board {width} cells wide")]
    SnakeDoesNotFit { length: usize, width: u16 },
}
