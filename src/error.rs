//! Error types for buffer I/O and script execution.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A buffer load or save failed. The in-memory lines are never lost.
#[derive(Debug, Error)]
pub enum BufferError {
    #[error("Error loading file {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error saving file {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl BufferError {
    /// The kind of the underlying I/O failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            BufferError::Load { source, .. } | BufferError::Save { source, .. } => source.kind(),
        }
    }
}

/// The host subsystem a script command was addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    Terminal,
    Audio,
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Namespace::Terminal => write!(f, "terminal"),
            Namespace::Audio => write!(f, "audio"),
        }
    }
}

/// A single script line could not be dispatched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("Unknown {namespace} command: {command}")]
    UnknownCommand {
        namespace: Namespace,
        command: String,
    },
}

/// A script run was aborted.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Runtime Error: {0}")]
    Command(#[from] ScriptError),

    #[error("Runtime Error: cannot read {}: {source}", .path.display())]
    Source {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_command_message_names_the_command() {
        let err = ScriptError::UnknownCommand {
            namespace: Namespace::Terminal,
            command: "bogus".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown terminal command: bogus");
    }

    #[test]
    fn runtime_error_wraps_command_message() {
        let err = RuntimeError::from(ScriptError::UnknownCommand {
            namespace: Namespace::Audio,
            command: "honk".to_string(),
        });
        assert_eq!(err.to_string(), "Runtime Error: Unknown audio command: honk");
    }

    #[test]
    fn buffer_error_exposes_io_kind() {
        let err = BufferError::Load {
            path: PathBuf::from("missing.ns"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("missing.ns"));
    }
}
