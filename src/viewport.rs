//! Scroll window tracking.
//!
//! The Viewport records which run of buffer lines is visible. Cursor motion
//! moves it one line at a time; it never re-centres.

/// The visible window: `height` lines starting at `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// First visible buffer line (0-based).
    pub offset: usize,
    /// Number of visible lines, at least one.
    pub height: usize,
}

impl Viewport {
    pub fn new(height: usize) -> Self {
        Self {
            offset: 0,
            height: height.max(1),
        }
    }

    /// The last visible line index (inclusive).
    pub fn bottom_line(&self) -> usize {
        self.offset + self.height - 1
    }

    pub fn contains(&self, line: usize) -> bool {
        line >= self.offset && line <= self.bottom_line()
    }

    /// Convert a buffer line to a window row, if visible.
    pub fn screen_row(&self, line: usize) -> Option<usize> {
        self.contains(line).then(|| line - self.offset)
    }

    /// Scroll one line toward `line` when it has left the window.
    pub fn follow(&mut self, line: usize) {
        if line < self.offset {
            self.offset -= 1;
        } else if line > self.bottom_line() {
            self.offset += 1;
        }
    }

    /// Change the height and clamp the offset so `line` stays visible.
    pub fn resize(&mut self, height: usize, line: usize) {
        self.height = height.max(1);
        if line < self.offset {
            self.offset = line;
        } else if line > self.bottom_line() {
            self.offset = line + 1 - self.height;
        }
    }
}
