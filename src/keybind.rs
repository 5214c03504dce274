//! Key bindings for interactive mode.
//!
//! Maps crossterm KeyEvents to editor actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::buffer::Direction;

/// An action resulting from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Insert a character at the cursor.
    InsertChar(char),
    /// Move the cursor.
    Move(Direction),
    /// Break the line at the cursor.
    SplitLine,
    /// Delete the character before the cursor.
    DeleteBackward,
    /// Save the file.
    Save,
    /// Save, then run the file as a script.
    Run,
    /// Quit the editor.
    Quit,
    /// Terminal was resized.
    Resize,
    /// No action (ignore the key).
    Ignore,
}

/// Resolve a KeyEvent to a KeyAction.
pub fn resolve_key(key: KeyEvent) -> KeyAction {
    // F63 is our resize sentinel from CrosstermTerminal
    if key.code == KeyCode::F(63) && key.modifiers == KeyModifiers::NONE {
        return KeyAction::Resize;
    }

    // Ctrl combinations
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('s') => KeyAction::Save,
            KeyCode::Char('r') => KeyAction::Run,
            KeyCode::Char('q') => KeyAction::Quit,
            _ => KeyAction::Ignore,
        };
    }

    match key.code {
        KeyCode::Up => KeyAction::Move(Direction::Up),
        KeyCode::Down => KeyAction::Move(Direction::Down),
        KeyCode::Left => KeyAction::Move(Direction::Left),
        KeyCode::Right => KeyAction::Move(Direction::Right),
        KeyCode::Home => KeyAction::Move(Direction::Home),
        KeyCode::End => KeyAction::Move(Direction::End),

        KeyCode::Enter => KeyAction::SplitLine,
        KeyCode::Backspace => KeyAction::DeleteBackward,

        // Printable ASCII only
        KeyCode::Char(ch) if (' '..='~').contains(&ch) => KeyAction::InsertChar(ch),

        _ => KeyAction::Ignore,
    }
}
