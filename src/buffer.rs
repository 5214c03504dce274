//! The editable line buffer.
//!
//! A [`Buffer`] owns the line sequence, the cursor, the scroll window and the
//! modified flag. Editing lives in [`EditCommands`], cursor motion in
//! [`MotionCommands`]. The buffer is never empty: it always holds at least one,
//! possibly blank, line.

use std::fmt;
use std::path::Path;

use itertools::Itertools;

use crate::error::BufferError;
use crate::host::Host;
use crate::position::{Position, char_len};
use crate::syntax::{KeywordTable, Token, highlight};
use crate::viewport::Viewport;

mod edit;
mod motion;

pub use edit::EditCommands;
pub use motion::{Direction, MotionCommands};

/// Window height used until the screen reports its real size.
pub const DEFAULT_WINDOW_HEIGHT: usize = 20;

/// An editable sequence of lines with a cursor.
#[derive(Debug, Clone)]
pub struct Buffer {
    lines: Vec<String>,
    cursor: Position,
    window: Viewport,
    modified: bool,
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.iter().join("\n"))
    }
}

// Constructors
impl Buffer {
    /// Create a buffer holding one blank line.
    pub fn new() -> Self {
        Self::from_lines(Vec::<String>::new())
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self {
            lines,
            cursor: Position::zero(),
            window: Viewport::new(DEFAULT_WINDOW_HEIGHT),
            modified: false,
        }
    }

    pub fn from_str(s: &str) -> Self {
        Self::from_lines(s.lines())
    }
}

// Accessors
impl Buffer {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn window(&self) -> Viewport {
        self.window
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Resize the scroll window, keeping the cursor line visible.
    pub fn set_window_height(&mut self, height: usize) {
        self.window.resize(height, self.cursor.line);
    }

    /// Highlighted tokens for every visible line, with its buffer line index.
    pub fn highlighted_window<'a>(
        &'a self,
        table: &'a KeywordTable,
    ) -> impl Iterator<Item = (usize, Vec<Token<'a>>)> + 'a {
        self.lines
            .iter()
            .enumerate()
            .skip(self.window.offset)
            .take(self.window.height)
            .map(move |(index, line)| (index, highlight(line, table)))
    }

    pub(crate) fn current_line(&self) -> &str {
        &self.lines[self.cursor.line]
    }

    pub(crate) fn current_line_len(&self) -> usize {
        char_len(self.current_line())
    }

    /// Move the cursor and let the window follow it.
    pub(crate) fn set_cursor(&mut self, position: Position) {
        self.cursor = position;
        self.window.follow(position.line);
    }
}

// File I/O
impl Buffer {
    /// Replace the contents with the lines of `path`.
    ///
    /// On failure the buffer is reset to a single blank line and the error is
    /// returned. Returns the number of lines read.
    pub fn load(&mut self, host: &mut dyn Host, path: &Path) -> Result<usize, BufferError> {
        let (lines, result) = match host.read_file(path) {
            Ok(lines) => {
                let count = lines.len();
                (lines, Ok(count))
            }
            Err(source) => (
                Vec::new(),
                Err(BufferError::Load {
                    path: path.to_path_buf(),
                    source,
                }),
            ),
        };
        let height = self.window.height;
        *self = Self::from_lines(lines);
        self.window = Viewport::new(height);
        match &result {
            Ok(count) => tracing::debug!(target: "io", file = %path.display(), line_count = count, "buffer_loaded"),
            Err(err) => tracing::warn!(target: "io", %err, "buffer_load_failed"),
        }
        result
    }

    /// Write every line to `path`. The modified flag is cleared only on success.
    pub fn save(&mut self, host: &mut dyn Host, path: &Path) -> Result<usize, BufferError> {
        match host.write_file(path, &self.lines) {
            Ok(()) => {
                self.modified = false;
                tracing::debug!(target: "io", file = %path.display(), line_count = self.lines.len(), "buffer_saved");
                Ok(self.lines.len())
            }
            Err(source) => {
                let err = BufferError::Save {
                    path: path.to_path_buf(),
                    source,
                };
                tracing::warn!(target: "io", %err, "buffer_save_failed");
                Err(err)
            }
        }
    }
}
