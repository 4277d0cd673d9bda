//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

use crate::model::Mode;

pub use crate::model::Direction;

/// Editor-specific messages (cursor movement)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMsg {
    /// Move cursor one character or line
    MoveCursor(Direction),
    /// Move cursor to start of line (Home key)
    MoveCursorLineStart,
    /// Move cursor to end of line (End key)
    MoveCursorLineEnd,
    /// Move cursor to the previous/next word or symbol run
    MoveCursorWord(Direction),
    /// Move cursor to the previous/next run of non-whitespace
    MoveCursorBigWord(Direction),
    /// Half page up
    HalfPageUp,
    /// Half page down
    HalfPageDown,
    /// Page up
    PageUp,
    /// Page down
    PageDown,
}

/// Document-specific messages (text editing)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentMsg {
    /// Insert a character at cursor position
    InsertChar(char),
    /// Split the line at the cursor (Enter)
    InsertNewline,
    /// Delete character before cursor (Backspace)
    DeleteBackward,
    /// Delete character at cursor (Delete)
    DeleteForward,
}

/// Application-level messages (modes, file operations, viewport)
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    /// Switch editing mode
    SetMode(Mode),
    /// Viewport resized (columns, rows)
    Resize(usize, usize),
    /// Save current file
    SaveFile,
    /// Load a file
    LoadFile(PathBuf),
    /// File save completed
    SaveCompleted(Result<(), String>),
    /// File load completed
    FileLoaded {
        path: PathBuf,
        result: Result<String, String>,
    },
    /// Quit the application
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Editor messages (cursor, viewport)
    Editor(EditorMsg),
    /// Document messages (text editing)
    Document(DocumentMsg),
    /// App messages (modes, file I/O)
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create a cursor movement message
    pub fn move_cursor(direction: Direction) -> Self {
        Msg::Editor(EditorMsg::MoveCursor(direction))
    }

    /// Create an insert character message
    pub fn insert_char(ch: char) -> Self {
        Msg::Document(DocumentMsg::InsertChar(ch))
    }

    /// Create a mode switch message
    pub fn set_mode(mode: Mode) -> Self {
        Msg::App(AppMsg::SetMode(mode))
    }

    /// Create a resize message
    pub fn resize(width: usize, height: usize) -> Self {
        Msg::App(AppMsg::Resize(width, height))
    }
}
