//! Key handling: maps terminal key events to UI actions.
//!
//! The chat UI is modeless: printable keys always edit the input box,
//! Enter sends, Esc stops the active generation, Ctrl+R retries a failed
//! load, Up/Down scroll the conversation, Ctrl+C quits.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// User action derived from key events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Insert character into the input box
    InsertChar(char),
    /// Delete character before the cursor (Backspace)
    DeleteChar,
    /// Move cursor left
    CursorLeft,
    /// Move cursor right
    CursorRight,
    /// Move to start of input
    CursorStart,
    /// Move to end of input
    CursorEnd,
    /// Submit current input (Enter)
    Submit,
    /// Stop the active generation (Esc)
    StopGeneration,
    /// Retry loading the model (Ctrl+R)
    RetryLoad,
    /// Scroll conversation up
    ScrollUp,
    /// Scroll conversation down
    ScrollDown,
    /// Quit application (Ctrl+C)
    Quit,
    /// No action
    None,
}

/// Key event handler
pub struct KeyHandler;

impl KeyHandler {
    pub fn handle(key: KeyEvent) -> Action {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
            (KeyCode::Char('r'), KeyModifiers::CONTROL) => Action::RetryLoad,
            (KeyCode::Esc, _) => Action::StopGeneration,
            (KeyCode::Enter, _) => Action::Submit,
            (KeyCode::Backspace, _) => Action::DeleteChar,
            (KeyCode::Left, _) => Action::CursorLeft,
            (KeyCode::Right, _) => Action::CursorRight,
            (KeyCode::Home, _) => Action::CursorStart,
            (KeyCode::End, _) => Action::CursorEnd,
            (KeyCode::Up, _) => Action::ScrollUp,
            (KeyCode::Down, _) => Action::ScrollDown,
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Action::InsertChar(c),
            _ => Action::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn printable_chars_insert() {
        assert_eq!(
            KeyHandler::handle(key(KeyCode::Char('x'), KeyModifiers::NONE)),
            Action::InsertChar('x')
        );
        assert_eq!(
            KeyHandler::handle(key(KeyCode::Char('X'), KeyModifiers::SHIFT)),
            Action::InsertChar('X')
        );
    }

    #[test]
    fn control_chords_are_commands() {
        assert_eq!(
            KeyHandler::handle(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
        assert_eq!(
            KeyHandler::handle(key(KeyCode::Char('r'), KeyModifiers::CONTROL)),
            Action::RetryLoad
        );
    }

    #[test]
    fn esc_stops_and_enter_submits() {
        assert_eq!(
            KeyHandler::handle(key(KeyCode::Esc, KeyModifiers::NONE)),
            Action::StopGeneration
        );
        assert_eq!(
            KeyHandler::handle(key(KeyCode::Enter, KeyModifiers::NONE)),
            Action::Submit
        );
    }

    #[test]
    fn unmapped_chords_do_nothing() {
        assert_eq!(
            KeyHandler::handle(key(KeyCode::Char('z'), KeyModifiers::ALT)),
            Action::None
        );
    }
}
