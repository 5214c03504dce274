//! A line-based text buffer with keyword highlighting, and an interpreter for
//! the NanCo toy scripting language.
//!
//! Scripts talk to the outside world only through the [`Host`] trait, so the
//! same [`Interpreter`] runs against a terminal ([`ConsoleHost`]) or a test
//! double.
//!
//! # Example
//!
//! ```rust
//! use nanco::{Buffer, Direction, EditCommands, KeywordTable, MotionCommands, highlight, render};
//!
//! let mut buffer = Buffer::from_str("print   \"hi\"");
//!
//! // Open a new line below the first and type into it
//! buffer.move_cursor(Direction::End);
//! buffer.split_line();
//! for ch in "audio.beep".chars() {
//!     buffer.insert_char(ch);
//! }
//!
//! assert_eq!(buffer.to_string(), "print   \"hi\"\naudio.beep");
//! assert!(buffer.is_modified());
//!
//! // Highlighting splits on whitespace and renders with single spaces
//! let tokens = highlight(buffer.line(0).unwrap(), &KeywordTable::builtin());
//! assert_eq!(render(&tokens), "print \"hi\"");
//! ```

pub mod app;
mod buffer;
pub mod config;
mod console;
mod error;
mod host;
mod interpreter;
pub mod keybind;
pub mod logging;
mod position;
pub mod screen;
mod statement;
mod syntax;
pub mod terminal;
mod value;
mod viewport;

pub use buffer::{Buffer, Direction, EditCommands, MotionCommands};
pub use config::Config;
pub use console::ConsoleHost;
pub use error::{BufferError, Namespace, RuntimeError, ScriptError};
pub use host::{Color, Host};
pub use interpreter::Interpreter;
pub use position::Position;
pub use statement::{Statement, classify};
pub use syntax::{KeywordTable, Style, Token, highlight, render};
pub use value::{Environment, Value};
pub use viewport::Viewport;
