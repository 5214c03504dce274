//! Screen rendering for interactive mode.
//!
//! The Screen reads Buffer state through public accessors and repaints the
//! whole terminal between key presses: a three-row header, the highlighted
//! scroll window with a line-number gutter, and a message row at the bottom.
//! Leading indentation is drawn as-is; spacing between tokens collapses to
//! one space.

use crate::buffer::Buffer;
use crate::position::indentation;
use crate::syntax::KeywordTable;
use crate::terminal::{TermSize, Terminal};

/// Rows above the text window.
pub const HEADER_ROWS: usize = 3;
/// Rows below the text window.
pub const STATUS_ROWS: usize = 1;
/// Width of the `"   1 │ "` gutter.
pub const GUTTER_WIDTH: usize = 7;

const KEY_HELP: &str = "Ctrl+S: Save | Ctrl+R: Run | Ctrl+Q: Quit";

/// Manages screen rendering.
pub struct Screen {
    size: TermSize,
    /// Message shown on the bottom row until the next key press.
    message: Option<String>,
}

impl Screen {
    pub fn new(size: TermSize) -> Self {
        Self {
            size,
            message: None,
        }
    }

    /// Resize the screen (e.g. on terminal resize).
    pub fn resize(&mut self, size: TermSize) {
        self.size = size;
    }

    /// Number of usable text rows.
    pub fn text_height(&self) -> usize {
        (self.size.height as usize)
            .saturating_sub(HEADER_ROWS + STATUS_ROWS)
            .max(1)
    }

    fn width(&self) -> usize {
        self.size.width as usize
    }

    fn message_row(&self) -> u16 {
        self.size.height.saturating_sub(1)
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn show_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Repaint everything and park the cursor at the buffer cursor.
    pub fn draw(
        &self,
        buffer: &Buffer,
        title: &str,
        keywords: &KeywordTable,
        terminal: &mut dyn Terminal,
    ) {
        terminal.reset_color();
        terminal.clear_screen();
        self.draw_header(title, terminal);

        for (row, (index, tokens)) in buffer.highlighted_window(keywords).enumerate() {
            terminal.move_cursor(0, (HEADER_ROWS + row) as u16);
            let mut budget = self.width();
            budget -= self.put(terminal, &format!("{:>4} │ ", index + 1), budget);
            let indent = buffer.line(index).map_or(0, indentation);
            if indent > 0 {
                budget -= self.put(terminal, &" ".repeat(indent), budget);
            }
            for (i, token) in tokens.iter().enumerate() {
                if budget == 0 {
                    break;
                }
                if i > 0 {
                    budget -= self.put(terminal, " ", budget);
                }
                if let Some(color) = token.style.color() {
                    terminal.set_foreground(color);
                }
                budget -= self.put(terminal, token.text, budget);
                if token.style.color().is_some() {
                    terminal.reset_color();
                }
            }
        }

        if let Some(msg) = &self.message {
            self.draw_message_row(terminal, msg);
        }

        let cursor = buffer.cursor();
        let row = buffer.window().screen_row(cursor.line).unwrap_or(0) + HEADER_ROWS;
        let col = (GUTTER_WIDTH + cursor.column).min(self.width().saturating_sub(1));
        terminal.move_cursor(col as u16, row as u16);
        terminal.flush();
    }

    fn draw_header(&self, title: &str, terminal: &mut dyn Terminal) {
        let width = self.width();
        terminal.move_cursor(0, 0);
        self.put(terminal, &format!("NanCo IDE - {title}"), width);
        terminal.move_cursor(0, 1);
        self.put(terminal, KEY_HELP, width);
        terminal.move_cursor(0, 2);
        self.put(terminal, &"─".repeat(width), width);
    }

    /// Show a prompt on the message row, leaving the cursor after `input`.
    pub fn draw_prompt(&self, terminal: &mut dyn Terminal, prompt: &str, input: &str) {
        self.draw_message_row(terminal, &format!("{prompt}{input}"));
        terminal.flush();
    }

    fn draw_message_row(&self, terminal: &mut dyn Terminal, text: &str) {
        terminal.move_cursor(0, self.message_row());
        terminal.clear_eol();
        self.put(terminal, text, self.width());
    }

    /// Write at most `budget` characters of `text`; returns how many were written.
    fn put(&self, terminal: &mut dyn Terminal, text: &str, budget: usize) -> usize {
        let count = text.chars().count();
        if count <= budget {
            terminal.write_str(text);
            count
        } else {
            let clipped: String = text.chars().take(budget).collect();
            terminal.write_str(&clipped);
            budget
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{Direction, MotionCommands};
    use crate::host::Color;
    use crate::terminal::{MockOp, MockTerminal};

    fn screen(width: u16, height: u16) -> (Screen, MockTerminal) {
        (
            Screen::new(TermSize { width, height }),
            MockTerminal::new(width, height),
        )
    }

    #[test]
    fn test_text_height_excludes_chrome() {
        let (full, _) = screen(80, 24);
        assert_eq!(full.text_height(), 20);
        let (tiny, _) = screen(80, 2);
        assert_eq!(tiny.text_height(), 1);
    }

    #[test]
    fn test_draw_writes_header_and_numbered_lines() {
        let (screen, mut term) = screen(60, 10);
        let buffer = Buffer::from_str("print \"a\"\naudio.beep");
        screen.draw(&buffer, "main.ns", &KeywordTable::builtin(), &mut term);

        let text = term.written();
        assert!(text.contains("NanCo IDE - main.ns"));
        assert!(text.contains(KEY_HELP));
        assert!(text.contains("   1 │ print \"a\""));
        assert!(text.contains("   2 │ audio.beep"));
    }

    #[test]
    fn test_keywords_are_colored() {
        let (screen, mut term) = screen(60, 10);
        let buffer = Buffer::from_str("var x = 1");
        screen.draw(&buffer, "t", &KeywordTable::builtin(), &mut term);

        let pos = term
            .ops
            .iter()
            .position(|op| *op == MockOp::SetForeground(Color::Blue))
            .expect("keyword color set");
        assert_eq!(term.ops[pos + 1], MockOp::WriteStr("var".into()));
        assert_eq!(term.ops[pos + 2], MockOp::ResetColor);
    }

    #[test]
    fn test_plain_table_sets_no_colors() {
        let (screen, mut term) = screen(60, 10);
        let buffer = Buffer::from_str("var x = 1");
        screen.draw(&buffer, "t", &KeywordTable::empty(), &mut term);
        assert!(!term.ops.iter().any(|op| matches!(op, MockOp::SetForeground(_))));
    }

    #[test]
    fn test_lines_are_clipped_to_width() {
        let (screen, mut term) = screen(12, 10);
        let buffer = Buffer::from_str("abcdefghijklmnop");
        screen.draw(&buffer, "t", &KeywordTable::empty(), &mut term);
        assert!(term.written().contains("   1 │ abcde"));
        assert!(!term.written().contains("abcdef"));
    }

    #[test]
    fn test_cursor_parked_after_gutter() {
        let (screen, mut term) = screen(60, 10);
        let mut buffer = Buffer::from_str("ab\ncd");
        buffer.move_cursor(Direction::Down);
        buffer.move_cursor(Direction::Right);
        screen.draw(&buffer, "t", &KeywordTable::empty(), &mut term);

        let last_move = term
            .ops
            .iter()
            .rev()
            .find(|op| matches!(op, MockOp::MoveCursor(..)))
            .cloned();
        assert_eq!(last_move, Some(MockOp::MoveCursor(8, 4)));
    }

    #[test]
    fn test_indented_line_keeps_cursor_on_text() {
        let (screen, mut term) = screen(60, 10);
        let mut buffer = Buffer::from_str("    print \"a\"\n    x");
        buffer.move_cursor(Direction::Down);
        buffer.move_cursor(Direction::End);
        assert_eq!(buffer.cursor().column, 5);
        screen.draw(&buffer, "t", &KeywordTable::empty(), &mut term);

        let row = (HEADER_ROWS + 1) as u16;
        let start = term
            .ops
            .iter()
            .position(|op| *op == MockOp::MoveCursor(0, row))
            .expect("second line drawn");
        let drawn: String = term.ops[start + 1..]
            .iter()
            .take_while(|op| matches!(op, MockOp::WriteStr(_)))
            .map(|op| match op {
                MockOp::WriteStr(s) => s.as_str(),
                _ => "",
            })
            .collect();
        assert_eq!(drawn, "   2 │     x");

        let last_move = term
            .ops
            .iter()
            .rev()
            .find(|op| matches!(op, MockOp::MoveCursor(..)))
            .cloned();
        let text_end = drawn.chars().count() as u16;
        assert_eq!(last_move, Some(MockOp::MoveCursor(text_end, row)));
    }

    #[test]
    fn test_message_drawn_on_bottom_row() {
        let (mut screen, mut term) = screen(60, 10);
        screen.show_message("File saved successfully!");
        screen.draw(&Buffer::new(), "t", &KeywordTable::empty(), &mut term);
        assert!(term.ops.contains(&MockOp::MoveCursor(0, 9)));
        assert!(term.written().contains("File saved successfully!"));

        screen.clear_message();
        assert_eq!(screen.message(), None);
    }

    #[test]
    fn test_prompt_shows_input() {
        let (screen, mut term) = screen(60, 10);
        screen.draw_prompt(&mut term, "Enter filename: ", "main.ns");
        assert!(term.written().contains("Enter filename: main.ns"));
    }
}
