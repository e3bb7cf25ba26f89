//! Keyboard input mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use menu_core::NavCommand;

/// High-level action derived from a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Navigation input forwarded to the focused menu node.
    Nav(NavCommand),
    /// Leave the menu.
    Quit,
    /// Unbound key.
    None,
}

/// Translates crossterm key events into [`KeyAction`]s.
///
/// Arrow keys and vi-style hjkl both work; Enter selects, Esc backs out.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => KeyAction::Nav(NavCommand::Up),
            KeyCode::Down | KeyCode::Char('j') => KeyAction::Nav(NavCommand::Down),
            KeyCode::Left | KeyCode::Char('h') => KeyAction::Nav(NavCommand::Left),
            KeyCode::Right | KeyCode::Char('l') => KeyAction::Nav(NavCommand::Right),
            KeyCode::Enter | KeyCode::Char('z') => KeyAction::Nav(NavCommand::Select),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('x') => {
                KeyAction::Nav(NavCommand::Back)
            }
            KeyCode::Char('q') => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_map_to_nav_commands() {
        let input = InputHandler::new();
        assert_eq!(input.handle_key(press(KeyCode::Up)), KeyAction::Nav(NavCommand::Up));
        assert_eq!(
            input.handle_key(press(KeyCode::Down)),
            KeyAction::Nav(NavCommand::Down)
        );
        assert_eq!(
            input.handle_key(press(KeyCode::Left)),
            KeyAction::Nav(NavCommand::Left)
        );
        assert_eq!(
            input.handle_key(press(KeyCode::Right)),
            KeyAction::Nav(NavCommand::Right)
        );
    }

    #[test]
    fn vi_keys_mirror_arrows() {
        let input = InputHandler::new();
        assert_eq!(
            input.handle_key(press(KeyCode::Char('k'))),
            KeyAction::Nav(NavCommand::Up)
        );
        assert_eq!(
            input.handle_key(press(KeyCode::Char('j'))),
            KeyAction::Nav(NavCommand::Down)
        );
    }

    #[test]
    fn confirm_and_cancel_keys() {
        let input = InputHandler::new();
        assert_eq!(
            input.handle_key(press(KeyCode::Enter)),
            KeyAction::Nav(NavCommand::Select)
        );
        assert_eq!(
            input.handle_key(press(KeyCode::Esc)),
            KeyAction::Nav(NavCommand::Back)
        );
    }

    #[test]
    fn quit_keys() {
        let input = InputHandler::new();
        assert_eq!(input.handle_key(press(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(
            input.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Quit
        );
    }

    #[test]
    fn unbound_keys_do_nothing() {
        let input = InputHandler::new();
        assert_eq!(input.handle_key(press(KeyCode::Char('p'))), KeyAction::None);
        assert_eq!(input.handle_key(press(KeyCode::Tab)), KeyAction::None);
    }
}
