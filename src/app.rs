//! Application event loop for interactive mode.
//!
//! The `App` struct ties together the Buffer, Screen, Terminal, Host and key
//! bindings into a main event loop.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};

use crate::buffer::{Buffer, EditCommands, MotionCommands};
use crate::config::Config;
use crate::host::Host;
use crate::interpreter::Interpreter;
use crate::keybind::{self, KeyAction};
use crate::screen::Screen;
use crate::syntax::KeywordTable;
use crate::terminal::Terminal;

const SAVE_PROMPT: &str = "Enter filename: ";
const QUIT_PROMPT: &str = "Save changes before exit? (Y/N): ";

/// The interactive application state.
pub struct App {
    pub buffer: Buffer,
    pub screen: Screen,
    pub config: Config,
    pub file_path: Option<PathBuf>,
    pub running: bool,
    keywords: KeywordTable,
}

impl App {
    pub fn new(buffer: Buffer, screen: Screen, config: Config, file_path: Option<PathBuf>) -> Self {
        let keywords = config.keywords_for(file_path.as_deref());
        let mut app = Self {
            buffer,
            screen,
            config,
            file_path,
            running: true,
            keywords,
        };
        app.fit_window();
        app
    }

    /// Start a session on `file_path`, loading it through the host.
    ///
    /// A missing file starts an empty buffer bound to that path; other load
    /// failures are shown on the message row.
    pub fn open(
        host: &mut dyn Host,
        screen: Screen,
        config: Config,
        file_path: Option<PathBuf>,
    ) -> Self {
        let mut buffer = Buffer::new();
        let mut message = None;
        if let Some(path) = &file_path {
            match buffer.load(host, path) {
                Ok(_) => {}
                Err(err) if err.kind() == io::ErrorKind::NotFound => {
                    message = Some(format!("New file: {}", path.display()));
                }
                Err(err) => message = Some(err.to_string()),
            }
        }
        let mut app = Self::new(buffer, screen, config, file_path);
        if let Some(msg) = message {
            app.screen.show_message(msg);
        }
        app
    }

    pub fn title(&self) -> String {
        self.file_path
            .as_ref()
            .map_or_else(|| "New File".to_string(), |path| path.display().to_string())
    }

    /// Run the main event loop.
    pub fn run(&mut self, terminal: &mut dyn Terminal, host: &mut dyn Host) -> Result<()> {
        terminal.init()?;
        self.screen.resize(terminal.size());
        self.fit_window();
        tracing::info!(target: "app", file = %self.title(), "session_start");

        let result = self.event_loop(terminal, host);

        terminal.cleanup()?;
        tracing::info!(target: "app", ok = result.is_ok(), "session_end");
        result
    }

    fn event_loop(&mut self, terminal: &mut dyn Terminal, host: &mut dyn Host) -> Result<()> {
        while self.running {
            self.redraw(terminal);
            let key = terminal.read_key()?;
            let action = keybind::resolve_key(key);
            self.screen.clear_message();
            self.handle_action(action, terminal, host)?;
        }
        Ok(())
    }

    fn redraw(&self, terminal: &mut dyn Terminal) {
        self.screen
            .draw(&self.buffer, &self.title(), &self.keywords, terminal);
    }

    fn fit_window(&mut self) {
        self.buffer.set_window_height(self.screen.text_height());
    }

    /// Handle a resolved key action.
    pub fn handle_action(
        &mut self,
        action: KeyAction,
        terminal: &mut dyn Terminal,
        host: &mut dyn Host,
    ) -> Result<()> {
        match action {
            KeyAction::InsertChar(ch) => self.buffer.insert_char(ch),
            KeyAction::Move(direction) => self.buffer.move_cursor(direction),
            KeyAction::SplitLine => self.buffer.split_line(),
            KeyAction::DeleteBackward => self.buffer.delete_backward(),
            KeyAction::Save => {
                self.handle_save(terminal, host)?;
            }
            KeyAction::Run => self.handle_run(terminal, host)?,
            KeyAction::Quit => self.handle_quit(terminal, host)?,
            KeyAction::Resize => {
                self.screen.resize(terminal.size());
                self.fit_window();
            }
            KeyAction::Ignore => {}
        }
        Ok(())
    }

    /// Save to the session path, asking for one first if there is none.
    /// Returns whether the buffer was written.
    fn handle_save(&mut self, terminal: &mut dyn Terminal, host: &mut dyn Host) -> Result<bool> {
        let path = match &self.file_path {
            Some(path) => path.clone(),
            None => match self.prompt(terminal, SAVE_PROMPT)? {
                Some(name) if !name.trim().is_empty() => {
                    let path = PathBuf::from(name.trim());
                    self.keywords = self.config.keywords_for(Some(&path));
                    self.file_path = Some(path.clone());
                    path
                }
                _ => {
                    self.screen.show_message("Save cancelled.");
                    return Ok(false);
                }
            },
        };

        match self.buffer.save(host, &path) {
            Ok(_) => {
                self.screen.show_message("File saved successfully!");
                Ok(true)
            }
            Err(err) => {
                self.screen.show_message(err.to_string());
                terminal.beep();
                Ok(false)
            }
        }
    }

    /// Save, then execute the saved file and wait for a key.
    fn handle_run(&mut self, terminal: &mut dyn Terminal, host: &mut dyn Host) -> Result<()> {
        if !self.handle_save(terminal, host)? {
            return Ok(());
        }
        let Some(path) = self.file_path.clone() else {
            return Ok(());
        };
        tracing::info!(target: "app", file = %path.display(), "run_script");

        host.clear_screen();
        host.write_line("=== Running Program ===");
        host.write_line("");

        let outcome =
            Interpreter::load(host, &path).and_then(|interpreter| interpreter.execute(host));
        if let Err(err) = outcome {
            tracing::warn!(target: "app", %err, "run_failed");
            host.write_line("");
            host.write_line(&format!("Error: {err}"));
        }

        host.write_line("");
        host.write_line("Press any key to return to IDE...");
        terminal.flush();
        terminal.read_key()?;
        terminal.reset_color();
        self.screen.clear_message();
        Ok(())
    }

    /// Quit, offering to save first when there are unsaved changes.
    fn handle_quit(&mut self, terminal: &mut dyn Terminal, host: &mut dyn Host) -> Result<()> {
        if self.buffer.is_modified() {
            self.screen.draw_prompt(terminal, QUIT_PROMPT, "");
            let key = terminal.read_key()?;
            if matches!(key.code, KeyCode::Char('y' | 'Y')) {
                self.handle_save(terminal, host)?;
            }
        }
        self.running = false;
        Ok(())
    }

    /// Read a line of input on the message row. `None` if cancelled with Esc.
    fn prompt(&mut self, terminal: &mut dyn Terminal, prompt: &str) -> Result<Option<String>> {
        let mut input = String::new();
        loop {
            self.screen.draw_prompt(terminal, prompt, &input);
            let key = terminal.read_key()?;
            match key.code {
                KeyCode::Enter => return Ok(Some(input)),
                KeyCode::Esc => return Ok(None),
                KeyCode::Backspace => {
                    input.pop();
                }
                KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    input.push(ch);
                }
                _ => {}
            }
        }
    }
}
