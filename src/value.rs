//! Script values and the per-run variable environment.

use std::collections::HashMap;
use std::fmt;

/// A value bound by a `var` statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    String(String),
    Bool(bool),
}

impl Value {
    /// Evaluate a literal: integer, then float, then quoted string, then
    /// `true`/`false`, else the raw text as a string.
    pub fn parse_literal(text: &str) -> Value {
        if let Ok(n) = text.parse::<i64>() {
            return Value::Integer(n);
        }
        // `f64::from_str` also accepts words like "inf" and "NaN"; only
        // numeric-looking text counts as a float here.
        if text.contains(|ch: char| ch.is_ascii_digit())
            && let Ok(x) = text.parse::<f64>()
        {
            return Value::Float(x);
        }
        if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
            return Value::String(text[1..text.len() - 1].to_string());
        }
        match text {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            _ => Value::String(text.to_string()),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Bool(_) => "bool",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::String(s) => write!(f, "{s}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Variable bindings for a single interpreter run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    bindings: HashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name`, replacing any previous value whatever its type.
    pub fn bind(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.bindings.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.bindings.iter().map(|(name, value)| (name.as_str(), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_literal() {
        assert_eq!(Value::parse_literal("5"), Value::Integer(5));
        assert_eq!(Value::parse_literal("-12"), Value::Integer(-12));
    }

    #[test]
    fn test_float_literal() {
        assert_eq!(Value::parse_literal("2.5"), Value::Float(2.5));
        assert_eq!(Value::parse_literal("1e3"), Value::Float(1000.0));
    }

    #[test]
    fn test_non_numeric_words_are_not_floats() {
        assert_eq!(Value::parse_literal("inf"), Value::String("inf".to_string()));
        assert_eq!(Value::parse_literal("NaN"), Value::String("NaN".to_string()));
    }

    #[test]
    fn test_quoted_string_literal() {
        assert_eq!(Value::parse_literal("\"five\""), Value::String("five".to_string()));
        assert_eq!(Value::parse_literal("\"\""), Value::String(String::new()));
        assert_eq!(Value::parse_literal("\"12\""), Value::String("12".to_string()));
    }

    #[test]
    fn test_bool_literal_is_case_sensitive() {
        assert_eq!(Value::parse_literal("true"), Value::Bool(true));
        assert_eq!(Value::parse_literal("false"), Value::Bool(false));
        assert_eq!(Value::parse_literal("True"), Value::String("True".to_string()));
    }

    #[test]
    fn test_raw_text_falls_back_to_string() {
        assert_eq!(
            Value::parse_literal("input.readLine()"),
            Value::String("input.readLine()".to_string())
        );
        assert_eq!(Value::parse_literal("\""), Value::String("\"".to_string()));
    }

    #[test]
    fn test_rebinding_replaces_tag() {
        let mut env = Environment::new();
        assert_eq!(env.bind("x", Value::Integer(5)), None);
        assert_eq!(
            env.bind("x", Value::String("five".to_string())),
            Some(Value::Integer(5))
        );
        assert_eq!(env.get("x"), Some(&Value::String("five".to_string())));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn test_iter_lists_every_binding() {
        let mut env = Environment::new();
        env.bind("b", Value::Integer(2));
        env.bind("a", Value::Bool(false));
        let mut names: Vec<_> = env.iter().map(|(name, value)| (name, value.to_string())).collect();
        names.sort();
        assert_eq!(names, [("a", "false".to_string()), ("b", "2".to_string())]);
    }

    #[test]
    fn test_display_and_type_name() {
        assert_eq!(Value::Float(1.5).to_string(), "1.5");
        assert_eq!(Value::Bool(true).type_name(), "bool");
        assert_eq!(Value::String("s".into()).type_name(), "string");
    }
}
