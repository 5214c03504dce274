//! Line-by-line execution of NanCo scripts.
//!
//! The interpreter walks its source top to bottom, classifying each line with
//! [`classify`] and applying the result to a [`Host`]. There is no lookahead
//! and no branching; the first failing line aborts the run.

use std::path::Path;

use itertools::Itertools;

use crate::error::RuntimeError;
use crate::host::Host;
use crate::statement::{Statement, classify};
use crate::value::Environment;

/// A loaded script, ready to run.
#[derive(Debug, Clone)]
pub struct Interpreter {
    source: Vec<String>,
}

impl Interpreter {
    pub fn new(source: Vec<String>) -> Self {
        Self { source }
    }

    pub fn from_str(s: &str) -> Self {
        Self::new(s.lines().map(str::to_string).collect())
    }

    /// Read the script at `path` through the host.
    pub fn load(host: &mut dyn Host, path: &Path) -> Result<Self, RuntimeError> {
        let source = host.read_file(path).map_err(|source| RuntimeError::Source {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(target: "script", file = %path.display(), line_count = source.len(), "script_loaded");
        Ok(Self::new(source))
    }

    pub fn source(&self) -> &[String] {
        &self.source
    }

    /// Run every line. Succeeds with no value or fails with the first error.
    pub fn execute(&self, host: &mut dyn Host) -> Result<(), RuntimeError> {
        self.run(host).map(drop)
    }

    /// Run every line and hand back the bindings the run created.
    pub fn run(&self, host: &mut dyn Host) -> Result<Environment, RuntimeError> {
        let mut env = Environment::new();
        for line in &self.source {
            let statement = classify(line).inspect_err(|err| {
                tracing::info!(target: "script", %err, "script_aborted");
            })?;
            tracing::debug!(target: "script", ?statement, "execute");
            apply(statement, &mut env, host);
        }
        tracing::info!(target: "script", lines = self.source.len(), bindings = env.len(), "script_finished");
        tracing::debug!(
            target: "script",
            bindings = %env
                .iter()
                .map(|(name, value)| format!("{name}: {} = {value}", value.type_name()))
                .sorted()
                .join(", "),
            "script_bindings"
        );
        Ok(env)
    }
}

/// Carry out a single statement.
fn apply(statement: Statement, env: &mut Environment, host: &mut dyn Host) {
    match statement {
        Statement::NoOp => {}
        Statement::Print(text) => host.write_line(&text),
        Statement::Declare { name, value } => {
            env.bind(name, value);
        }
        Statement::ClearScreen => host.clear_screen(),
        Statement::SetColor(color) => host.set_foreground_color(color),
        Statement::Beep => host.beep(),
        Statement::PlaySound(resource) => host.play_sound(&resource),
    }
}
