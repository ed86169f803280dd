pub mod apples;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod renderer;
pub mod schedule;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
