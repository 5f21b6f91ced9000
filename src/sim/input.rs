//! Menu / playing / game-over transitions driven by input signals

use super::state::{GameLoop, GameState};

/// Logical input signals, independent of the key that produced them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Up,
    Down,
    Confirm,
    Cancel,
}

/// What the driver should do after an input was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    /// Terminate the process
    Exit,
}

/// Apply one input signal to the game
///
/// Every state/signal pair is listed; signals a state does not react to are
/// ignored explicitly.
pub fn handle_input(game: &mut GameLoop, input: Input) -> Control {
    match (game.state, input) {
        (GameState::Menu, Input::Confirm) => game.enter(GameState::Playing),
        (GameState::Menu, Input::Up | Input::Down | Input::Cancel) => {}

        (GameState::Playing, Input::Up) => game.left.move_up(),
        (GameState::Playing, Input::Down) => game.left.move_down(&game.rules),
        (GameState::Playing, Input::Cancel) => {
            game.reset();
            game.enter(GameState::Menu);
        }
        (GameState::Playing, Input::Confirm) => {}

        (GameState::GameOver, Input::Confirm) => {
            game.reset();
            game.enter(GameState::Menu);
        }
        (GameState::GameOver, Input::Cancel) => return Control::Exit,
        (GameState::GameOver, Input::Up | Input::Down) => {}
    }
    Control::Continue
}
