//! Term Pong - Pong in a terminal
//!
//! Core modules:
//! - `sim`: Game loop state, per-tick physics and the menu/playing/game-over FSM
//! - `timer`: The repeating tick timer, armed only while playing
//! - `settings`: JSON settings validated into simulation rules
//! - `term`: Thin crossterm shell (drawing and key mapping)

pub mod error;
pub mod settings;
pub mod sim;
pub mod term;
pub mod timer;

pub use error::{ConfigError, Error};
pub use settings::{GameMode, Settings};

/// Game configuration constants
pub mod consts {
    /// Board dimensions in character cells
    pub const BOARD_WIDTH: u16 = 60;
    pub const BOARD_HEIGHT: u16 = 20;

    /// Paddle height in cells
    pub const PADDLE_HEIGHT: u16 = 4;
    /// Paddle columns are inset from the board edges by this many cells
    pub const PADDLE_INSET: u16 = 2;

    /// Tick period in milliseconds
    pub const TICK_MS: u64 = 100;

    /// Ball speed in cells per tick
    pub const INITIAL_BALL_SPEED: f32 = 1.0;
    pub const MAX_BALL_SPEED: f32 = 3.0;
    /// Added on every tick the ball is in range of a paddle
    pub const BALL_SPEED_INCREMENT: f32 = 0.1;

    /// First side to reach this many points wins
    pub const WINNING_SCORE: u32 = 5;

    /// Smallest board the paddle geometry fits on
    pub const MIN_BOARD_WIDTH: u16 = 10;
    pub const MIN_BOARD_HEIGHT: u16 = 3;
}
