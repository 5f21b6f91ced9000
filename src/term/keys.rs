//! Key mapping
//!
//! Turns crossterm key events into the four logical input signals.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::sim::Input;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Signal(Input),
    /// Ctrl-C: leave immediately from any screen
    Quit,
}

pub fn map_key(key: KeyEvent) -> Option<KeyAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(KeyAction::Quit),
            _ => None,
        };
    }
    let input = match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('k') => Input::Up,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('j') => Input::Down,
        KeyCode::Enter | KeyCode::Char(' ') => Input::Confirm,
        KeyCode::Esc | KeyCode::Char('q') => Input::Cancel,
        _ => return None,
    };
    Some(KeyAction::Signal(input))
}
