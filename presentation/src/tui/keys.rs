//! Key bindings
//!
//! The screen has a single input mode: printable keys edit the question,
//! Enter submits, Shift+Enter (or Alt+Enter where the terminal cannot report
//! Shift) inserts a newline.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// User action derived from key events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Submit the current question (Enter)
    Submit,
    /// Insert a line break (Shift+Enter / Alt+Enter)
    InsertNewline,
    /// Insert character
    InsertChar(char),
    /// Delete character before the cursor (Backspace)
    DeleteChar,
    /// Delete character under the cursor (Delete)
    DeleteForward,
    /// Clear the whole input (Ctrl+U)
    ClearInput,
    /// Move cursor left
    CursorLeft,
    /// Move cursor right
    CursorRight,
    /// Move to start of input
    CursorStart,
    /// Move to end of input
    CursorEnd,
    /// Scroll the response up
    ScrollUp,
    /// Scroll the response down
    ScrollDown,
    /// Scroll the response one page up
    PageUp,
    /// Scroll the response one page down
    PageDown,
    /// Quit application
    Quit,
    /// No action
    None,
}

impl Action {
    /// Whether this action modifies the input buffer
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            Action::InsertNewline
                | Action::InsertChar(_)
                | Action::DeleteChar
                | Action::DeleteForward
                | Action::ClearInput
                | Action::CursorLeft
                | Action::CursorRight
                | Action::CursorStart
                | Action::CursorEnd
        )
    }
}

/// Key event handler - maps key events to actions
pub struct KeyHandler;

impl KeyHandler {
    pub fn handle(key: KeyEvent) -> Action {
        // Terminals with enhanced reporting also send release/repeat events
        if key.kind == KeyEventKind::Release {
            return Action::None;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
            (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::Quit,
            (KeyCode::Esc, _) => Action::Quit,

            (KeyCode::Enter, m) if m.intersects(KeyModifiers::SHIFT | KeyModifiers::ALT) => {
                Action::InsertNewline
            }
            (KeyCode::Enter, _) => Action::Submit,

            (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ClearInput,
            (KeyCode::Char('a'), KeyModifiers::CONTROL) => Action::CursorStart,
            (KeyCode::Char('e'), KeyModifiers::CONTROL) => Action::CursorEnd,
            (KeyCode::Char(_), m) if m.contains(KeyModifiers::CONTROL) => Action::None,
            (KeyCode::Char(c), _) => Action::InsertChar(c),

            (KeyCode::Backspace, _) => Action::DeleteChar,
            (KeyCode::Delete, _) => Action::DeleteForward,
            (KeyCode::Left, _) => Action::CursorLeft,
            (KeyCode::Right, _) => Action::CursorRight,
            (KeyCode::Home, _) => Action::CursorStart,
            (KeyCode::End, _) => Action::CursorEnd,

            (KeyCode::Up, _) => Action::ScrollUp,
            (KeyCode::Down, _) => Action::ScrollDown,
            (KeyCode::PageUp, _) => Action::PageUp,
            (KeyCode::PageDown, _) => Action::PageDown,

            _ => Action::None,
        }
    }
}
