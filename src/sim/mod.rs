//! Game simulation
//!
//! All gameplay logic lives here. Nothing in this module touches the terminal
//! or the clock:
//! - `tick` advances physics, AI and scoring by one fixed step
//! - `handle_input` drives the menu/playing/game-over state machine
//! - `GameLoop::snapshot` is the only thing a renderer reads

pub mod input;
pub mod state;
pub mod tick;

pub use input::{Control, Input, handle_input};
pub use state::{Ball, GameLoop, GameState, Paddle, Rules, Score, Side, Sign, Snapshot};
pub use tick::{GameEvent, tick};
