//! Host capability interface.
//!
//! The buffer and the interpreter never touch the terminal, the audio device
//! or the filesystem directly. Every effect goes through a [`Host`] supplied by
//! the surrounding application: [`ConsoleHost`](crate::ConsoleHost) in
//! production, `RecordingHost` in tests.

use std::io;
use std::path::Path;

use serde::Deserialize;

/// Foreground colors available to scripts and the highlighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Green,
    Red,
    Blue,
    White,
    Gray,
    Magenta,
    Cyan,
}

impl Color {
    /// Map a color word used by `terminal.color`. Matching is case-insensitive
    /// and anything outside the script palette falls back to gray.
    pub fn from_script_name(name: &str) -> Color {
        match name.to_ascii_lowercase().as_str() {
            "green" => Color::Green,
            "red" => Color::Red,
            "blue" => Color::Blue,
            "white" => Color::White,
            _ => Color::Gray,
        }
    }
}

impl From<Color> for crossterm::style::Color {
    fn from(color: Color) -> Self {
        match color {
            Color::Green => crossterm::style::Color::Green,
            Color::Red => crossterm::style::Color::Red,
            Color::Blue => crossterm::style::Color::Blue,
            Color::White => crossterm::style::Color::White,
            Color::Gray => crossterm::style::Color::Grey,
            Color::Magenta => crossterm::style::Color::Magenta,
            Color::Cyan => crossterm::style::Color::Cyan,
        }
    }
}

/// Display, audio and file operations the core depends on.
pub trait Host {
    /// Write text at the current output position.
    fn write(&mut self, text: &str);

    /// Write text followed by a line break.
    fn write_line(&mut self, text: &str);

    /// Clear the display.
    fn clear_screen(&mut self);

    /// Change the color of subsequent output.
    fn set_foreground_color(&mut self, color: Color);

    /// Sound a short beep.
    fn beep(&mut self);

    /// Play a named sound resource.
    fn play_sound(&mut self, resource: &str);

    /// Read a file as a list of lines, without line terminators.
    fn read_file(&mut self, path: &Path) -> io::Result<Vec<String>>;

    /// Write `lines` to a file, one per line.
    fn write_file(&mut self, path: &Path, lines: &[String]) -> io::Result<()>;
}

/// Recording host for testing. Keeps every call and an in-memory filesystem.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub ops: Vec<HostOp>,
    pub files: std::collections::HashMap<std::path::PathBuf, Vec<String>>,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum HostOp {
    Write(String),
    WriteLine(String),
    ClearScreen,
    SetForegroundColor(Color),
    Beep,
    PlaySound(String),
    ReadFile(std::path::PathBuf),
    WriteFile(std::path::PathBuf),
}

#[cfg(test)]
impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, lines: &[&str]) -> Self {
        self.files.insert(
            path.into(),
            lines.iter().map(|line| line.to_string()).collect(),
        );
        self
    }

    /// Lines passed to `write_line`, in order.
    pub fn written_lines(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                HostOp::WriteLine(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
impl Host for RecordingHost {
    fn write(&mut self, text: &str) {
        self.ops.push(HostOp::Write(text.to_string()));
    }

    fn write_line(&mut self, text: &str) {
        self.ops.push(HostOp::WriteLine(text.to_string()));
    }

    fn clear_screen(&mut self) {
        self.ops.push(HostOp::ClearScreen);
    }

    fn set_foreground_color(&mut self, color: Color) {
        self.ops.push(HostOp::SetForegroundColor(color));
    }

    fn beep(&mut self) {
        self.ops.push(HostOp::Beep);
    }

    fn play_sound(&mut self, resource: &str) {
        self.ops.push(HostOp::PlaySound(resource.to_string()));
    }

    fn read_file(&mut self, path: &Path) -> io::Result<Vec<String>> {
        self.ops.push(HostOp::ReadFile(path.to_path_buf()));
        if self.fail_reads {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read refused"));
        }
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    fn write_file(&mut self, path: &Path, lines: &[String]) -> io::Result<()> {
        self.ops.push(HostOp::WriteFile(path.to_path_buf()));
        if self.fail_writes {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "write refused"));
        }
        self.files.insert(path.to_path_buf(), lines.to_vec());
        Ok(())
    }
}
