use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Command, Direction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Move(Direction),
    Restart,
    Quit,
    None,
}

impl KeyAction {
    /// The engine command for this key, if it has one
    pub fn command(&self) -> Option<Command> {
        match self {
            KeyAction::Move(direction) => Some(Command::Turn(*direction)),
            KeyAction::Restart => Some(Command::Restart),
            KeyAction::Quit | KeyAction::None => None,
        }
    }
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::Move(Direction::Up),
            KeyCode::Down => KeyAction::Move(Direction::Down),
            KeyCode::Left => KeyAction::Move(Direction::Left),
            KeyCode::Right => KeyAction::Move(Direction::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Move(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::Move(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Move(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::Move(Direction::Right),

            // Controls
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action_for(code: KeyCode, modifiers: KeyModifiers) -> KeyAction {
        InputHandler::new().handle_key_event(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_movement_bindings() {
        let bindings = [
            (KeyCode::Up, Direction::Up),
            (KeyCode::Down, Direction::Down),
            (KeyCode::Left, Direction::Left),
            (KeyCode::Right, Direction::Right),
            (KeyCode::Char('w'), Direction::Up),
            (KeyCode::Char('S'), Direction::Down),
            (KeyCode::Char('a'), Direction::Left),
            (KeyCode::Char('D'), Direction::Right),
        ];

        for (code, direction) in bindings {
            let action = action_for(code, KeyModifiers::NONE);
            assert_eq!(action, KeyAction::Move(direction), "{code:?}");
            assert_eq!(action.command(), Some(Command::Turn(direction)));
        }
    }

    #[test]
    fn test_restart_is_enter_or_r() {
        for code in [KeyCode::Enter, KeyCode::Char('r'), KeyCode::Char('R')] {
            let action = action_for(code, KeyModifiers::NONE);
            assert_eq!(action.command(), Some(Command::Restart), "{code:?}");
        }
    }

    #[test]
    fn test_quit_has_no_command() {
        for (code, modifiers) in [
            (KeyCode::Char('q'), KeyModifiers::NONE),
            (KeyCode::Esc, KeyModifiers::NONE),
            (KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            let action = action_for(code, modifiers);
            assert_eq!(action, KeyAction::Quit);
            assert_eq!(action.command(), None);
        }
    }

    #[test]
    fn test_plain_c_is_not_quit() {
        assert_eq!(action_for(KeyCode::Char('c'), KeyModifiers::NONE), KeyAction::None);
        assert_eq!(action_for(KeyCode::Tab, KeyModifiers::NONE).command(), None);
    }
}
