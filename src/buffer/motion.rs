//! Cursor motion commands.

use crate::position::{Position, char_len};

use super::Buffer;

/// A cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
    /// Start of the current line.
    Home,
    /// End of the current line.
    End,
}

/// Commands for moving the cursor within the buffer.
pub trait MotionCommands {
    /// Move one step in `direction`, clamped to the text. Moving past an edge
    /// is a no-op.
    fn move_cursor(&mut self, direction: Direction);
}

impl MotionCommands for Buffer {
    fn move_cursor(&mut self, direction: Direction) {
        let Position { line, column } = self.cursor;
        let target = match direction {
            Direction::Left => Position::new(line, column.saturating_sub(1)),
            Direction::Right => Position::new(line, (column + 1).min(self.current_line_len())),
            Direction::Up if line > 0 => self.vertical_target(line - 1),
            Direction::Down if line + 1 < self.lines.len() => self.vertical_target(line + 1),
            Direction::Up | Direction::Down => return,
            Direction::Home => Position::new(line, 0),
            Direction::End => Position::new(line, self.current_line_len()),
        };
        self.set_cursor(target);
    }
}

impl Buffer {
    fn vertical_target(&self, line: usize) -> Position {
        let column = self.cursor.column.min(char_len(&self.lines[line]));
        Position::new(line, column)
    }
}
