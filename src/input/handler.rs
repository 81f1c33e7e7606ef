use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Direction;

/// What a key press means to the TUI modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Steer(Direction),
    Restart,
    TogglePause,
    /// Speed preset, 1 (slowest) to 4 (fastest)
    Speed(u8),
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Up => KeyAction::Steer(Direction::Up),
            KeyCode::Down => KeyAction::Steer(Direction::Down),
            KeyCode::Left => KeyAction::Steer(Direction::Left),
            KeyCode::Right => KeyAction::Steer(Direction::Right),
            KeyCode::Char(c) => Self::handle_char(c.to_ascii_lowercase()),
            KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    fn handle_char(c: char) -> KeyAction {
        match c {
            // WASD and vi keys
            'w' | 'k' => KeyAction::Steer(Direction::Up),
            's' | 'j' => KeyAction::Steer(Direction::Down),
            'a' | 'h' => KeyAction::Steer(Direction::Left),
            'd' | 'l' => KeyAction::Steer(Direction::Right),

            'q' => KeyAction::Quit,
            'r' => KeyAction::Restart,
            'p' | ' ' => KeyAction::TogglePause,
            '1'..='4' => KeyAction::Speed(c as u8 - b'0'),
            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
