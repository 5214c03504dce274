//! Optional TOML configuration.
//!
//! Looked up as `nanco.toml` in the working directory unless a path is given
//! on the command line. Every key has a default, so an absent default file is
//! not an error.
//!
//! ```toml
//! script_extension = "ns"
//! highlight_extensions = ["ns", "nsp"]
//! log_file = "nanco.log"
//!
//! [keywords]
//! print = "green"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::host::Color;
use crate::syntax::KeywordTable;

/// File name searched for when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "nanco.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Extension of files that may be run as scripts.
    pub script_extension: String,
    /// Extensions opened with keyword highlighting.
    pub highlight_extensions: Vec<String>,
    /// Where tracing output goes.
    pub log_file: PathBuf,
    /// Extra or replacement keyword colors.
    pub keywords: BTreeMap<String, Color>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            script_extension: "ns".to_string(),
            highlight_extensions: vec!["ns".to_string(), "nsp".to_string()],
            log_file: PathBuf::from("nanco.log"),
            keywords: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Load `explicit`, or `nanco.toml` if it exists, or the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !path.exists() {
                    return Ok(Self::default());
                }
                path
            }
        };
        let text = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| ConfigError::Parse { path, source })
    }

    /// The built-in keywords with configured entries layered on top.
    pub fn keyword_table(&self) -> KeywordTable {
        self.keywords
            .iter()
            .fold(KeywordTable::builtin(), |table, (word, color)| {
                table.with(word.clone(), *color)
            })
    }

    /// Keywords to use for `path`: the full table for script-like files and
    /// unnamed buffers, an empty one otherwise.
    pub fn keywords_for(&self, path: Option<&Path>) -> KeywordTable {
        match path {
            Some(path) if !has_extension(path, &self.highlight_extensions) => KeywordTable::empty(),
            _ => self.keyword_table(),
        }
    }

    pub fn is_script(&self, path: &Path) -> bool {
        has_extension(path, std::slice::from_ref(&self.script_extension))
    }
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|want| want.eq_ignore_ascii_case(ext)))
}
