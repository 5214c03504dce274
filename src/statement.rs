//! Statement dispatch for NanCo script lines.
//!
//! A trimmed source line is classified by a fixed, ordered list of prefix
//! rules. Each rule is a pure function: it either declines the line (`None`)
//! or decides it, yielding a [`Statement`] or a [`ScriptError`]. Lines no rule
//! claims are silently ignored.

use crate::error::{Namespace, ScriptError};
use crate::host::Color;
use crate::value::Value;

/// What a single script line does.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Blank lines, comments, `var` without `=`, unrecognised lines.
    NoOp,
    /// `print <text>`
    Print(String),
    /// `var <name> = <literal>`
    Declare { name: String, value: Value },
    /// `terminal.clear`
    ClearScreen,
    /// `terminal.color <word>`
    SetColor(Color),
    /// `audio.beep`
    Beep,
    /// `audio.play <resource>`
    PlaySound(String),
}

/// A dispatch rule over an already-trimmed line.
pub type Rule = fn(&str) -> Option<Result<Statement, ScriptError>>;

/// Dispatch rules in priority order.
pub const RULES: [Rule; 5] = [skip_rule, print_rule, var_rule, terminal_rule, audio_rule];

/// Classify one source line.
pub fn classify(line: &str) -> Result<Statement, ScriptError> {
    let line = line.trim();
    RULES
        .iter()
        .find_map(|rule| rule(line))
        .unwrap_or(Ok(Statement::NoOp))
}

/// Blank lines and `//` comments.
pub fn skip_rule(line: &str) -> Option<Result<Statement, ScriptError>> {
    (line.is_empty() || line.starts_with("//")).then_some(Ok(Statement::NoOp))
}

pub fn print_rule(line: &str) -> Option<Result<Statement, ScriptError>> {
    let text = line.strip_prefix("print")?.trim();
    Some(Ok(Statement::Print(strip_quotes(text).to_string())))
}

pub fn var_rule(line: &str) -> Option<Result<Statement, ScriptError>> {
    let rest = line.strip_prefix("var")?;
    let statement = match rest.split_once('=') {
        Some((name, literal)) => Statement::Declare {
            name: name.trim().to_string(),
            value: Value::parse_literal(literal.trim()),
        },
        None => Statement::NoOp,
    };
    Some(Ok(statement))
}

pub fn terminal_rule(line: &str) -> Option<Result<Statement, ScriptError>> {
    let command = line.strip_prefix("terminal.")?.trim();
    let result = if command == "clear" {
        Ok(Statement::ClearScreen)
    } else if let Some(rest) = command.strip_prefix("color") {
        Ok(Statement::SetColor(Color::from_script_name(rest.trim())))
    } else {
        Err(unknown(Namespace::Terminal, command))
    };
    Some(result)
}

pub fn audio_rule(line: &str) -> Option<Result<Statement, ScriptError>> {
    let command = line.strip_prefix("audio.")?.trim();
    let result = if command == "beep" {
        Ok(Statement::Beep)
    } else if let Some(rest) = command.strip_prefix("play") {
        Ok(Statement::PlaySound(strip_quotes(rest.trim()).to_string()))
    } else {
        Err(unknown(Namespace::Audio, command))
    };
    Some(result)
}

fn unknown(namespace: Namespace, command: &str) -> ScriptError {
    ScriptError::UnknownCommand {
        namespace,
        command: command.to_string(),
    }
}

/// Remove one pair of surrounding double quotes, if present.
fn strip_quotes(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unknown_command(line: &str) -> String {
        match classify(line) {
            Err(ScriptError::UnknownCommand { command, .. }) => command,
            other => panic!("expected UnknownCommand, got {other:?}"),
        }
    }

    // --- Skip ---

    #[test]
    fn test_blank_and_comment_lines_are_noops() {
        assert_eq!(classify(""), Ok(Statement::NoOp));
        assert_eq!(classify("   \t "), Ok(Statement::NoOp));
        assert_eq!(classify("// print \"x\""), Ok(Statement::NoOp));
        assert_eq!(classify("   // indented comment"), Ok(Statement::NoOp));
    }

    #[test]
    fn test_skip_rule_declines_code() {
        assert_eq!(skip_rule("print"), None);
    }

    // --- Print ---

    #[test]
    fn test_print_strips_quotes() {
        assert_eq!(classify("print \"hello\""), Ok(Statement::Print("hello".into())));
    }

    #[test]
    fn test_print_without_quotes() {
        assert_eq!(classify("print   hi there "), Ok(Statement::Print("hi there".into())));
    }

    #[test]
    fn test_print_strips_only_one_pair() {
        assert_eq!(
            classify("print \"\"quoted\"\""),
            Ok(Statement::Print("\"quoted\"".into()))
        );
        assert_eq!(classify("print \"open"), Ok(Statement::Print("\"open".into())));
    }

    #[test]
    fn test_bare_print_writes_empty_line() {
        assert_eq!(classify("print"), Ok(Statement::Print(String::new())));
    }

    #[test]
    fn test_print_is_a_literal_prefix() {
        assert_eq!(classify("printer"), Ok(Statement::Print("er".into())));
    }

    // --- Var ---

    #[test]
    fn test_var_declares_binding() {
        assert_eq!(
            classify("var x = 5"),
            Ok(Statement::Declare {
                name: "x".into(),
                value: Value::Integer(5)
            })
        );
    }

    #[test]
    fn test_var_splits_on_first_equals() {
        assert_eq!(
            classify("var eq = a=b"),
            Ok(Statement::Declare {
                name: "eq".into(),
                value: Value::String("a=b".into())
            })
        );
    }

    #[test]
    fn test_var_without_equals_is_silent() {
        assert_eq!(classify("var lonely"), Ok(Statement::NoOp));
        assert_eq!(var_rule("var lonely"), Some(Ok(Statement::NoOp)));
    }

    #[test]
    fn test_print_outranks_var() {
        assert_eq!(var_rule("print x"), None);
        assert_eq!(classify("print var = 1"), Ok(Statement::Print("var = 1".into())));
    }

    // --- Terminal ---

    #[test]
    fn test_terminal_clear() {
        assert_eq!(classify("terminal.clear"), Ok(Statement::ClearScreen));
    }

    #[test]
    fn test_terminal_color_maps_known_words() {
        assert_eq!(classify("terminal.color green"), Ok(Statement::SetColor(Color::Green)));
        assert_eq!(classify("terminal.color RED"), Ok(Statement::SetColor(Color::Red)));
        assert_eq!(classify("terminal.color  Blue "), Ok(Statement::SetColor(Color::Blue)));
    }

    #[test]
    fn test_terminal_color_defaults_to_gray() {
        assert_eq!(classify("terminal.color purple"), Ok(Statement::SetColor(Color::Gray)));
        assert_eq!(classify("terminal.color"), Ok(Statement::SetColor(Color::Gray)));
        assert_eq!(classify("terminal.color red blue"), Ok(Statement::SetColor(Color::Gray)));
    }

    #[test]
    fn test_terminal_unknown_subcommand() {
        assert_eq!(unknown_command("terminal.bogus"), "bogus");
        assert_eq!(unknown_command("terminal.clear()"), "clear()");
    }

    // --- Audio ---

    #[test]
    fn test_audio_beep() {
        assert_eq!(classify("audio.beep"), Ok(Statement::Beep));
    }

    #[test]
    fn test_audio_play_strips_quotes() {
        assert_eq!(
            classify("audio.play \"audios/boot.wav\""),
            Ok(Statement::PlaySound("audios/boot.wav".into()))
        );
        assert_eq!(classify("audio.play ding"), Ok(Statement::PlaySound("ding".into())));
    }

    #[test]
    fn test_audio_unknown_subcommand() {
        assert_eq!(unknown_command("audio.beep(500)"), "beep(500)");
        let err = classify("audio.honk").unwrap_err();
        assert_eq!(err.to_string(), "Unknown audio command: honk");
    }

    // --- Fallthrough ---

    #[test]
    fn test_unrecognised_lines_are_silent() {
        assert_eq!(classify("foo.bar"), Ok(Statement::NoOp));
        assert_eq!(classify("func main() {"), Ok(Statement::NoOp));
        assert_eq!(classify("terminal clear"), Ok(Statement::NoOp));
    }
}
