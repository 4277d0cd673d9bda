//! Editor modes

use serde::{Deserialize, Serialize};

/// Editor mode
///
/// The editing engine ignores the mode; only key dispatch consults it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Navigation keys move the cursor
    #[default]
    Normal,
    /// Printable keys insert text
    Insert,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Normal => "NORMAL",
            Mode::Insert => "INSERT",
        }
    }

    /// Whether unbound printable keys insert themselves
    pub fn accepts_text(&self) -> bool {
        matches!(self, Mode::Insert)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
