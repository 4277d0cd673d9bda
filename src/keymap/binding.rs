//! Keybinding struct representing a mapping from a key to a command

use super::command::Command;
use super::context::Condition;
use super::types::KeyEvent;

/// A single keybinding mapping a key to a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinding {
    /// The key that triggers this binding
    pub key: KeyEvent,
    /// The command to execute
    pub command: Command,
    /// Conditions that must be true for this binding to activate
    pub when: Option<Vec<Condition>>,
}

impl Keybinding {
    /// Create an unconditional binding
    pub fn new(key: impl Into<KeyEvent>, command: Command) -> Self {
        Self {
            key: key.into(),
            command,
            when: None,
        }
    }

    /// Add conditions to this binding (builder pattern)
    pub fn when(mut self, conditions: Vec<Condition>) -> Self {
        self.when = Some(conditions);
        self
    }

    /// Add a single condition to this binding
    pub fn when_single(mut self, condition: Condition) -> Self {
        self.when = Some(vec![condition]);
        self
    }
}
