//! Keyword highlighting for NanCo source lines.
//!
//! Highlighting is a pure function of the line and a [`KeywordTable`]: the
//! line is split on whitespace and every word is looked up verbatim. There is
//! no awareness of strings, operators or comments.

use std::collections::HashMap;

use itertools::Itertools;
use phf::{Map, phf_map};

use crate::host::Color;

/// How a token is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Plain,
    Keyword(Color),
}

impl Style {
    pub fn color(self) -> Option<Color> {
        match self {
            Style::Plain => None,
            Style::Keyword(color) => Some(color),
        }
    }
}

/// One whitespace-delimited word of a line with its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub style: Style,
}

const BUILTIN_KEYWORDS: Map<&'static str, Color> = phf_map! {
    // declarations
    "func" => Color::Blue,
    "var" => Color::Blue,
    "const" => Color::Blue,
    // flow words; highlighted only, the interpreter has no control flow
    "if" => Color::Magenta,
    "else" => Color::Magenta,
    "loop" => Color::Magenta,
    "break" => Color::Magenta,
    "return" => Color::Magenta,
    // host namespaces
    "terminal" => Color::Cyan,
    "screen" => Color::Cyan,
    "audio" => Color::Cyan,
    "input" => Color::Cyan,
    // types
    "int" => Color::Green,
    "float" => Color::Green,
    "string" => Color::Green,
    "bool" => Color::Green,
    "array" => Color::Green,
};

/// Immutable word -> style mapping handed to the highlighter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordTable {
    styles: HashMap<String, Style>,
}

impl KeywordTable {
    /// A table with no keywords; every token renders plain.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in NanCo keyword set.
    pub fn builtin() -> Self {
        BUILTIN_KEYWORDS
            .entries()
            .map(|(word, color)| (word.to_string(), *color))
            .collect()
    }

    /// Add or replace a keyword.
    pub fn with(mut self, word: impl Into<String>, color: Color) -> Self {
        self.styles.insert(word.into(), Style::Keyword(color));
        self
    }

    pub fn style_of(&self, word: &str) -> Style {
        self.styles.get(word).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl FromIterator<(String, Color)> for KeywordTable {
    fn from_iter<I: IntoIterator<Item = (String, Color)>>(iter: I) -> Self {
        Self {
            styles: iter
                .into_iter()
                .map(|(word, color)| (word, Style::Keyword(color)))
                .collect(),
        }
    }
}

/// Split `line` into styled tokens.
pub fn highlight<'a>(line: &'a str, table: &KeywordTable) -> Vec<Token<'a>> {
    line.split_whitespace()
        .map(|text| Token {
            text,
            style: table.style_of(text),
        })
        .collect()
}

/// Rebuild display text from tokens, one space between each.
///
/// Runs of whitespace and indentation collapse, so this is not byte-faithful
/// to the source line.
pub fn render(tokens: &[Token<'_>]) -> String {
    tokens.iter().map(|token| token.text).join(" ")
}
