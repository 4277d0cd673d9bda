//! Keymap struct for storing and looking up keybindings

use std::collections::HashMap;

use super::binding::Keybinding;
use super::command::Command;
use super::context::{Condition, KeyContext};
use super::types::KeyEvent;

/// Result of handling a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Execute this command
    Execute(Command),
    /// No binding matched, but the context accepts text: insert this character
    InsertChar(char),
    /// No binding matches this key; ignore it
    NoMatch,
}

/// The keymap stores all keybindings and handles lookup
#[derive(Debug, Clone)]
pub struct Keymap {
    /// All registered bindings
    bindings: Vec<Keybinding>,
    /// Fast lookup by key (indices into bindings)
    /// Multiple bindings can share the same key with different conditions
    lookup: HashMap<KeyEvent, Vec<usize>>,
}

impl Keymap {
    /// Create an empty keymap
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
            lookup: HashMap::new(),
        }
    }

    /// Create a keymap with the given bindings
    pub fn with_bindings(bindings: Vec<Keybinding>) -> Self {
        let mut keymap = Self::new();
        for binding in bindings {
            keymap.add_binding(binding);
        }
        keymap
    }

    /// Add a binding to the keymap
    ///
    /// `Unbound` bindings are not stored; they only matter while merging layers.
    pub fn add_binding(&mut self, binding: Keybinding) {
        if binding.command == Command::Unbound {
            return;
        }
        let idx = self.bindings.len();
        self.lookup.entry(binding.key).or_default().push(idx);
        self.bindings.push(binding);
    }

    /// Handle a key in context and return the action to take
    ///
    /// Ordered match: conditional binding whose conditions hold, then an
    /// unconditional binding, then (if the context accepts text) the key's
    /// printable character, then nothing.
    pub fn handle_key(&self, key: KeyEvent, context: &KeyContext) -> KeyAction {
        if let Some(command) = self.lookup_with_context(&key, Some(context)) {
            return KeyAction::Execute(command);
        }

        if context.accepts_text() {
            if let Some(ch) = key.printable() {
                return KeyAction::InsertChar(ch);
            }
        }

        KeyAction::NoMatch
    }

    /// Find first binding that matches the context
    fn find_matching_binding(
        &self,
        indices: &[usize],
        context: Option<&KeyContext>,
    ) -> Option<Command> {
        // First pass: find bindings with conditions that match
        if let Some(ctx) = context {
            for &idx in indices {
                let binding = &self.bindings[idx];
                if let Some(ref conditions) = binding.when {
                    if Condition::evaluate_all(conditions, ctx) {
                        return Some(binding.command);
                    }
                }
            }
        }

        // Second pass: find unconditional bindings
        indices
            .iter()
            .map(|&idx| &self.bindings[idx])
            .find(|binding| binding.when.is_none())
            .map(|binding| binding.command)
    }

    /// Look up a key ignoring conditional bindings
    pub fn lookup(&self, key: &KeyEvent) -> Option<Command> {
        self.lookup_with_context(key, None)
    }

    /// Look up a key with context
    pub fn lookup_with_context(
        &self,
        key: &KeyEvent,
        context: Option<&KeyContext>,
    ) -> Option<Command> {
        let indices = self.lookup.get(key)?;
        self.find_matching_binding(indices, context)
    }

    /// Get all bindings
    pub fn bindings(&self) -> &[Keybinding] {
        &self.bindings
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new()
    }
}
