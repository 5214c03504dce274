//! Cursor positions and character-column helpers.
//!
//! Columns count characters, not bytes, so every line access goes through
//! [`byte_index`] before slicing.

/// A position in the buffer, represented as line and column.
///
/// Both `line` and `column` are 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Create a position at the start of the buffer.
    pub fn zero() -> Self {
        Self { line: 0, column: 0 }
    }
}

/// Length of a line in characters.
pub fn char_len(line: &str) -> usize {
    line.chars().count()
}

/// Byte offset of character column `column`, or `line.len()` past the end.
pub fn byte_index(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map_or(line.len(), |(index, _)| index)
}

/// Number of leading space characters.
pub fn indentation(line: &str) -> usize {
    line.chars().take_while(|&ch| ch == ' ').count()
}
