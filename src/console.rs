//! Production [`Host`] backed by a crossterm output stream and `std::fs`.

use std::fs;
use std::io::{self, Stdout, Write};
use std::path::Path;

use crate::host::{Color, Host};

/// Writes script output to a terminal stream and files to disk.
///
/// There is no audio backend: `beep` rings the terminal bell and
/// `play_sound` is only logged.
pub struct ConsoleHost<W: Write = Stdout> {
    out: W,
}

impl ConsoleHost<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleHost<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Host for ConsoleHost<W> {
    fn write(&mut self, text: &str) {
        crossterm::execute!(self.out, crossterm::style::Print(text)).ok();
    }

    fn write_line(&mut self, text: &str) {
        // Explicit CR so output lines up in raw mode too.
        crossterm::execute!(self.out, crossterm::style::Print(text), crossterm::style::Print("\r\n")).ok();
    }

    fn clear_screen(&mut self) {
        crossterm::execute!(
            self.out,
            crossterm::terminal::Clear(crossterm::terminal::ClearType::All),
            crossterm::cursor::MoveTo(0, 0)
        )
        .ok();
    }

    fn set_foreground_color(&mut self, color: Color) {
        crossterm::execute!(self.out, crossterm::style::SetForegroundColor(color.into())).ok();
    }

    fn beep(&mut self) {
        crossterm::execute!(self.out, crossterm::style::Print('\x07')).ok();
    }

    fn play_sound(&mut self, resource: &str) {
        tracing::info!(target: "audio", resource, "play_sound_unsupported");
    }

    fn read_file(&mut self, path: &Path) -> io::Result<Vec<String>> {
        let contents = fs::read_to_string(path)?;
        Ok(contents.lines().map(str::to_string).collect())
    }

    fn write_file(&mut self, path: &Path, lines: &[String]) -> io::Result<()> {
        let mut contents = String::with_capacity(lines.iter().map(|line| line.len() + 1).sum());
        for line in lines {
            contents.push_str(line);
            contents.push('\n');
        }
        fs::write(path, contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(host: ConsoleHost<Vec<u8>>) -> String {
        String::from_utf8(host.into_inner()).unwrap()
    }

    #[test]
    fn test_write_line_ends_with_crlf() {
        let mut host = ConsoleHost::new(Vec::new());
        host.write("a");
        host.write_line("b");
        assert_eq!(output(host), "ab\r\n");
    }

    #[test]
    fn test_beep_rings_bell() {
        let mut host = ConsoleHost::new(Vec::new());
        host.beep();
        assert_eq!(output(host), "\x07");
    }

    #[test]
    fn test_play_sound_writes_nothing() {
        let mut host = ConsoleHost::new(Vec::new());
        host.play_sound("boot.wav");
        assert_eq!(output(host), "");
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.ns");
        let mut host = ConsoleHost::new(Vec::new());
        let lines = vec!["print \"a\"".to_string(), String::new(), "  audio.beep".to_string()];

        host.write_file(&path, &lines).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "print \"a\"\n\n  audio.beep\n");
        assert_eq!(host.read_file(&path).unwrap(), lines);
    }

    #[test]
    fn test_read_handles_crlf_and_missing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dos.ns");
        fs::write(&path, "one\r\ntwo").unwrap();
        let mut host = ConsoleHost::new(Vec::new());
        assert_eq!(host.read_file(&path).unwrap(), ["one", "two"]);
    }

    #[test]
    fn test_empty_file_has_no_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.ns");
        fs::write(&path, "").unwrap();
        let mut host = ConsoleHost::new(Vec::new());
        assert!(host.read_file(&path).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut host = ConsoleHost::new(Vec::new());
        let err = host.read_file(&dir.path().join("nope.ns")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
