//! Classified key events
//!
//! Raw terminal decoding happens outside this crate; by the time a key
//! reaches the keymap it is one of three shapes: a printable character,
//! a named key, or a control character.

use std::fmt;

/// Keys that have a name rather than a printable glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedKey {
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Enter,
    Backspace,
    Delete,
    Escape,
    Tab,
}

impl NamedKey {
    /// All named keys, in display order
    pub const ALL: [NamedKey; 13] = [
        NamedKey::Up,
        NamedKey::Down,
        NamedKey::Left,
        NamedKey::Right,
        NamedKey::Home,
        NamedKey::End,
        NamedKey::PageUp,
        NamedKey::PageDown,
        NamedKey::Enter,
        NamedKey::Backspace,
        NamedKey::Delete,
        NamedKey::Escape,
        NamedKey::Tab,
    ];

    /// Canonical lowercase name used in keymap files and key scripts
    pub fn name(self) -> &'static str {
        match self {
            NamedKey::Up => "up",
            NamedKey::Down => "down",
            NamedKey::Left => "left",
            NamedKey::Right => "right",
            NamedKey::Home => "home",
            NamedKey::End => "end",
            NamedKey::PageUp => "pageup",
            NamedKey::PageDown => "pagedown",
            NamedKey::Enter => "enter",
            NamedKey::Backspace => "backspace",
            NamedKey::Delete => "delete",
            NamedKey::Escape => "escape",
            NamedKey::Tab => "tab",
        }
    }

    /// Parse a key name, accepting common aliases (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "up" | "arrowup" => Some(NamedKey::Up),
            "down" | "arrowdown" => Some(NamedKey::Down),
            "left" | "arrowleft" => Some(NamedKey::Left),
            "right" | "arrowright" => Some(NamedKey::Right),
            "home" => Some(NamedKey::Home),
            "end" => Some(NamedKey::End),
            "pageup" | "pgup" => Some(NamedKey::PageUp),
            "pagedown" | "pgdown" | "pgdn" => Some(NamedKey::PageDown),
            "enter" | "return" | "cr" => Some(NamedKey::Enter),
            "backspace" | "bs" => Some(NamedKey::Backspace),
            "delete" | "del" => Some(NamedKey::Delete),
            "escape" | "esc" => Some(NamedKey::Escape),
            "tab" => Some(NamedKey::Tab),
            _ => None,
        }
    }
}

impl fmt::Display for NamedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NamedKey::Up => "Up",
            NamedKey::Down => "Down",
            NamedKey::Left => "Left",
            NamedKey::Right => "Right",
            NamedKey::Home => "Home",
            NamedKey::End => "End",
            NamedKey::PageUp => "PageUp",
            NamedKey::PageDown => "PageDown",
            NamedKey::Enter => "Enter",
            NamedKey::Backspace => "Backspace",
            NamedKey::Delete => "Delete",
            NamedKey::Escape => "Esc",
            NamedKey::Tab => "Tab",
        };
        f.write_str(s)
    }
}

/// One classified key event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEvent {
    /// A printable character, case preserved
    Char(char),
    /// A named key
    Named(NamedKey),
    /// A control character, stored as its lowercase letter (`Ctrl('s')`)
    Ctrl(char),
}

impl KeyEvent {
    /// Create a control-key event, normalizing the letter to lowercase
    pub fn ctrl(c: char) -> Self {
        KeyEvent::Ctrl(c.to_ascii_lowercase())
    }

    /// Character this key inserts when typed as text, if any
    pub fn printable(&self) -> Option<char> {
        match *self {
            KeyEvent::Char(c) if !c.is_control() => Some(c),
            KeyEvent::Named(NamedKey::Tab) => Some('\t'),
            _ => None,
        }
    }
}

impl From<NamedKey> for KeyEvent {
    fn from(key: NamedKey) -> Self {
        KeyEvent::Named(key)
    }
}

/// Key-script notation, as accepted by `--keys`
impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyEvent::Char(' ') => f.write_str("<Space>"),
            KeyEvent::Char('<') => f.write_str("<lt>"),
            KeyEvent::Char(c) => write!(f, "{}", c),
            KeyEvent::Named(key) => write!(f, "<{}>", key),
            KeyEvent::Ctrl(c) => write!(f, "<C-{}>", c),
        }
    }
}
