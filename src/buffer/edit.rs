//! Text editing commands (insert, delete backward, split line).

use crate::position::{Position, byte_index, char_len, indentation};

use super::Buffer;

/// Commands for editing text in the buffer.
pub trait EditCommands {
    /// Insert `ch` at the cursor and advance past it.
    fn insert_char(&mut self, ch: char);

    /// Delete the character before the cursor, joining lines at column 0.
    fn delete_backward(&mut self);

    /// Break the line at the cursor, carrying its indentation to the new line.
    fn split_line(&mut self);
}

impl EditCommands for Buffer {
    fn insert_char(&mut self, ch: char) {
        let Position { line, column } = self.cursor;
        let at = byte_index(&self.lines[line], column);
        self.lines[line].insert(at, ch);
        self.modified = true;
        self.set_cursor(Position::new(line, column + 1));
    }

    fn delete_backward(&mut self) {
        let Position { line, column } = self.cursor;
        if column > 0 {
            let text = &mut self.lines[line];
            let from = byte_index(text, column - 1);
            let to = byte_index(text, column);
            text.replace_range(from..to, "");
            self.modified = true;
            self.set_cursor(Position::new(line, column - 1));
        } else if line > 0 {
            let tail = self.lines.remove(line);
            let previous = &mut self.lines[line - 1];
            let join_column = char_len(previous);
            previous.push_str(&tail);
            self.modified = true;
            self.set_cursor(Position::new(line - 1, join_column));
        }
    }

    fn split_line(&mut self) {
        let Position { line, column } = self.cursor;
        let text = &mut self.lines[line];
        let indent = indentation(text);
        let at = byte_index(text, column);
        let rest = text.split_off(at);
        let mut new_line = " ".repeat(indent);
        new_line.push_str(&rest);
        self.lines.insert(line + 1, new_line);
        self.modified = true;
        self.set_cursor(Position::new(line + 1, indent));
    }
}
