//! YAML configuration parsing for keymaps
//!
//! Parses keymap.yaml files into Keybinding structs.

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use super::binding::Keybinding;
use super::command::Command;
use super::context::Condition;
use super::types::{KeyEvent, NamedKey};

/// Root structure of a keymap YAML file
#[derive(Debug, Deserialize)]
pub struct KeymapConfig {
    #[serde(default)]
    pub bindings: Vec<BindingConfig>,
}

/// A single binding entry from YAML
#[derive(Debug, Deserialize)]
pub struct BindingConfig {
    pub key: String,
    pub command: String,
    #[serde(default)]
    pub when: Option<Vec<String>>,
}

/// Load keybindings from a YAML file
pub fn load_keymap_file(path: &Path) -> Result<Vec<Keybinding>, KeymapError> {
    let content = std::fs::read_to_string(path).map_err(|e| KeymapError::IoError(e.to_string()))?;

    parse_keymap_yaml(&content)
}

/// Parse keybindings from YAML string
pub fn parse_keymap_yaml(yaml: &str) -> Result<Vec<Keybinding>, KeymapError> {
    let config: KeymapConfig =
        serde_yaml::from_str(yaml).map_err(|e| KeymapError::ParseError(e.to_string()))?;

    let mut bindings = Vec::with_capacity(config.bindings.len());

    for entry in config.bindings {
        let key = parse_key_string(&entry.key)?;
        let command = parse_command(&entry.command)?;
        let conditions = parse_conditions(&entry.when)?;

        let mut binding = Keybinding::new(key, command);
        if let Some(conds) = conditions {
            binding = binding.when(conds);
        }
        bindings.push(binding);
    }

    Ok(bindings)
}

/// Parse a key string like `j`, `J`, `ctrl+s` or `pagedown` into a KeyEvent
///
/// Single characters keep their case so `j` and `J` stay distinct.
pub fn parse_key_string(key_str: &str) -> Result<KeyEvent, KeymapError> {
    let mut chars = key_str.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyEvent::Char(c));
    }

    if let Some((modifier, rest)) = key_str.split_once('+') {
        match modifier.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => {
                let mut rest_chars = rest.chars();
                return match (rest_chars.next(), rest_chars.next()) {
                    (Some(c), None) => Ok(KeyEvent::ctrl(c)),
                    _ => Err(KeymapError::InvalidKey(format!(
                        "Control binding needs a single character: {}",
                        key_str
                    ))),
                };
            }
            _ => {
                return Err(KeymapError::InvalidKey(format!(
                    "Unsupported modifier in binding: {}",
                    key_str
                )))
            }
        }
    }

    if key_str.eq_ignore_ascii_case("space") {
        return Ok(KeyEvent::Char(' '));
    }

    NamedKey::from_name(key_str)
        .map(KeyEvent::Named)
        .ok_or_else(|| KeymapError::InvalidKey(format!("Unknown key: {}", key_str)))
}

/// Parse a command name string into a Command enum
fn parse_command(cmd: &str) -> Result<Command, KeymapError> {
    Command::from_str(cmd).map_err(|_| KeymapError::InvalidCommand(cmd.to_string()))
}

/// Parse condition strings into Condition enums
fn parse_conditions(when: &Option<Vec<String>>) -> Result<Option<Vec<Condition>>, KeymapError> {
    let Some(conditions) = when else {
        return Ok(None);
    };

    let mut result = Vec::with_capacity(conditions.len());
    for cond_str in conditions {
        let condition = parse_condition(cond_str)?;
        result.push(condition);
    }
    Ok(Some(result))
}

/// Parse a single condition string
fn parse_condition(cond: &str) -> Result<Condition, KeymapError> {
    match cond.to_lowercase().as_str() {
        "normal_mode" | "normalmode" | "normal" => Ok(Condition::NormalMode),
        "insert_mode" | "insertmode" | "insert" => Ok(Condition::InsertMode),
        _ => Err(KeymapError::InvalidCondition(cond.to_string())),
    }
}

/// Errors that can occur when parsing keymaps
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeymapError {
    IoError(String),
    ParseError(String),
    InvalidKey(String),
    InvalidCommand(String),
    InvalidCondition(String),
}

impl std::fmt::Display for KeymapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeymapError::IoError(e) => write!(f, "IO error: {}", e),
            KeymapError::ParseError(e) => write!(f, "Parse error: {}", e),
            KeymapError::InvalidKey(k) => write!(f, "Invalid key: {}", k),
            KeymapError::InvalidCommand(c) => write!(f, "Invalid command: {}", c),
            KeymapError::InvalidCondition(c) => write!(f, "Invalid condition: {}", c),
        }
    }
}

impl std::error::Error for KeymapError {}

// Implement FromStr for Command to parse from YAML
impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|command| command.name() == s)
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_key_keeps_case() {
        assert_eq!(parse_key_string("j").unwrap(), KeyEvent::Char('j'));
        assert_eq!(parse_key_string("J").unwrap(), KeyEvent::Char('J'));
        assert_eq!(parse_key_string("+").unwrap(), KeyEvent::Char('+'));
    }

    #[test]
    fn test_parse_ctrl_key() {
        assert_eq!(parse_key_string("ctrl+s").unwrap(), KeyEvent::Ctrl('s'));
        assert_eq!(parse_key_string("Ctrl+L").unwrap(), KeyEvent::Ctrl('l'));
        assert!(parse_key_string("ctrl+home").is_err());
        assert!(parse_key_string("alt+x").is_err());
    }

    #[test]
    fn test_parse_named_key() {
        assert_eq!(
            parse_key_string("enter").unwrap(),
            KeyEvent::Named(NamedKey::Enter)
        );
        assert_eq!(
            parse_key_string("escape").unwrap(),
            KeyEvent::Named(NamedKey::Escape)
        );
        assert_eq!(
            parse_key_string("pagedown").unwrap(),
            KeyEvent::Named(NamedKey::PageDown)
        );
        assert_eq!(parse_key_string("space").unwrap(), KeyEvent::Char(' '));
        assert!(matches!(
            parse_key_string("hyper"),
            Err(KeymapError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(Command::from_str("SaveFile"), Ok(Command::SaveFile));
        assert_eq!(
            Command::from_str("MoveCursorBigWordLeft"),
            Ok(Command::MoveCursorBigWordLeft)
        );
        assert_eq!(Command::from_str("Undo"), Err(()));
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
bindings:
  - key: "ctrl+s"
    command: SaveFile
  - key: "j"
    command: MoveCursorLeft
    when: ["normal_mode"]
"#;

        let bindings = parse_keymap_yaml(yaml).unwrap();
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings[0].command, Command::SaveFile);
        assert_eq!(bindings[1].command, Command::MoveCursorLeft);
        assert_eq!(bindings[1].when, Some(vec![Condition::NormalMode]));
    }

    #[test]
    fn test_parse_yaml_errors() {
        let bad_command = "bindings:\n  - key: j\n    command: Teleport\n";
        assert_eq!(
            parse_keymap_yaml(bad_command),
            Err(KeymapError::InvalidCommand("Teleport".to_string()))
        );

        let bad_condition = "bindings:\n  - key: j\n    command: Quit\n    when: [visual]\n";
        assert_eq!(
            parse_keymap_yaml(bad_condition),
            Err(KeymapError::InvalidCondition("visual".to_string()))
        );

        assert!(matches!(
            parse_keymap_yaml("bindings: [oops"),
            Err(KeymapError::ParseError(_))
        ));
    }
}
