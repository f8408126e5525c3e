use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Direction;

/// What a key press asks the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Steer(Direction),
    /// Start a new game; only honoured once the current one is over
    Restart,
    Quit,
    None,
}

/// Maps terminal key events to game actions
///
/// Arrow keys and WASD steer, `R` restarts, `Q`, Esc and Ctrl+C quit.
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match key.code {
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char(c) => Self::letter(c.to_ascii_lowercase()),
            code => Self::arrow(code)
                .map(KeyAction::Steer)
                .unwrap_or(KeyAction::None),
        }
    }

    fn arrow(code: KeyCode) -> Option<Direction> {
        match code {
            KeyCode::Up => Some(Direction::Up),
            KeyCode::Down => Some(Direction::Down),
            KeyCode::Left => Some(Direction::Left),
            KeyCode::Right => Some(Direction::Right),
            _ => None,
        }
    }

    fn letter(c: char) -> KeyAction {
        match c {
            'w' => KeyAction::Steer(Direction::Up),
            's' => KeyAction::Steer(Direction::Down),
            'a' => KeyAction::Steer(Direction::Left),
            'd' => KeyAction::Steer(Direction::Right),
            'r' => KeyAction::Restart,
            'q' => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
