//! Game settings
//!
//! Read from an optional JSON file. Missing fields fall back to the defaults in
//! [`crate::consts`]; the result is validated into [`Rules`] before a game starts.

use std::{fs, path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::Rules;

/// Who controls the paddles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Human on the left, AI on the right
    #[default]
    SinglePlayer,
    /// Two humans. Declared but not implemented.
    TwoPlayer,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::SinglePlayer => "single-player",
            GameMode::TwoPlayer => "two-player",
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub mode: GameMode,

    // === Board ===
    pub board_width: u16,
    pub board_height: u16,
    pub paddle_height: u16,

    // === Ball ===
    /// Cells per tick at the start of every rally
    pub initial_ball_speed: f32,
    pub max_ball_speed: f32,
    pub ball_speed_increment: f32,

    // === Match ===
    pub winning_score: u32,
    /// Tick period in milliseconds
    pub tick_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: GameMode::SinglePlayer,

            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            paddle_height: PADDLE_HEIGHT,

            initial_ball_speed: INITIAL_BALL_SPEED,
            max_ball_speed: MAX_BALL_SPEED,
            ball_speed_increment: BALL_SPEED_INCREMENT,

            winning_score: WINNING_SCORE,
            tick_ms: TICK_MS,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Validate into simulation rules
    ///
    /// Two-player mode is rejected here rather than quietly running the AI.
    pub fn rules(&self) -> Result<Rules, ConfigError> {
        if self.mode != GameMode::SinglePlayer {
            return Err(ConfigError::UnsupportedMode(self.mode));
        }
        check(
            self.board_width >= MIN_BOARD_WIDTH,
            "board_width",
            "must be at least 10 cells",
        )?;
        check(
            self.board_height >= MIN_BOARD_HEIGHT,
            "board_height",
            "must be at least 3 cells",
        )?;
        check(
            self.paddle_height >= 1 && self.paddle_height <= self.board_height,
            "paddle_height",
            "must be between 1 and board_height",
        )?;
        check(
            self.initial_ball_speed.is_finite() && self.initial_ball_speed > 0.0,
            "initial_ball_speed",
            "must be a positive number",
        )?;
        check(
            self.max_ball_speed.is_finite() && self.max_ball_speed >= self.initial_ball_speed,
            "max_ball_speed",
            "must not be below initial_ball_speed",
        )?;
        check(
            self.ball_speed_increment.is_finite() && self.ball_speed_increment >= 0.0,
            "ball_speed_increment",
            "must be zero or positive",
        )?;
        check(self.winning_score >= 1, "winning_score", "must be at least 1")?;
        check(self.tick_ms >= 1, "tick_ms", "must be at least 1")?;

        Ok(Rules {
            width: self.board_width,
            height: self.board_height,
            paddle_height: self.paddle_height,
            left_paddle_x: PADDLE_INSET,
            right_paddle_x: self.board_width - 1 - PADDLE_INSET,
            initial_speed: self.initial_ball_speed,
            max_speed: self.max_ball_speed,
            speed_increment: self.ball_speed_increment,
            winning_score: self.winning_score,
        })
    }
}

fn check(ok: bool, field: &'static str, reason: &'static str) -> Result<(), ConfigError> {
    if ok {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, reason })
    }
}
