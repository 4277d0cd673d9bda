//! Context system for conditional keybindings
//!
//! Enables bindings that only activate in a given mode,
//! such as "j moves left in normal mode".

use crate::model::Mode;

/// Context extracted from the application model for keybinding evaluation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyContext {
    /// Current editing mode
    pub mode: Mode,
}

impl KeyContext {
    /// Create context for the given mode
    pub fn for_mode(mode: Mode) -> Self {
        Self { mode }
    }

    /// Whether unbound printable keys should be inserted as text
    pub fn accepts_text(&self) -> bool {
        self.mode.accepts_text()
    }
}

/// Conditions that can be attached to keybindings
///
/// Multiple conditions on a binding are ANDed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    /// Binding only active in normal mode
    NormalMode,
    /// Binding only active in insert mode
    InsertMode,
}

impl Condition {
    /// Evaluate this condition against the current context
    pub fn evaluate(self, ctx: &KeyContext) -> bool {
        match self {
            Condition::NormalMode => ctx.mode == Mode::Normal,
            Condition::InsertMode => ctx.mode == Mode::Insert,
        }
    }

    /// Evaluate all conditions (AND logic)
    pub fn evaluate_all(conditions: &[Condition], ctx: &KeyContext) -> bool {
        conditions.iter().all(|c| c.evaluate(ctx))
    }
}
