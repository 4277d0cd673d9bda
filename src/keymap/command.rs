//! Command enum representing all executable editor actions
//!
//! Commands are the bridge between keybindings and the message system.
//! Each command maps to one or more `Msg` values for the Elm-style update loop.

use crate::messages::{AppMsg, Direction, DocumentMsg, EditorMsg, Msg};
use crate::model::Mode;

/// All executable editor commands that can be bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // ========================================================================
    // Cursor Movement
    // ========================================================================
    /// Move cursor up one line
    MoveCursorUp,
    /// Move cursor down one line
    MoveCursorDown,
    /// Move cursor left one character
    MoveCursorLeft,
    /// Move cursor right one character
    MoveCursorRight,
    /// Move cursor to start of line
    MoveCursorLineStart,
    /// Move cursor to end of line
    MoveCursorLineEnd,
    /// Move cursor left by word
    MoveCursorWordLeft,
    /// Move cursor right by word
    MoveCursorWordRight,
    /// Move cursor left by big word (whitespace-delimited)
    MoveCursorBigWordLeft,
    /// Move cursor right by big word (whitespace-delimited)
    MoveCursorBigWordRight,
    /// Move cursor up by half a page
    HalfPageUp,
    /// Move cursor down by half a page
    HalfPageDown,
    /// Move cursor up by page
    PageUp,
    /// Move cursor down by page
    PageDown,

    // ========================================================================
    // Text Editing
    // ========================================================================
    /// Insert a newline at cursor
    InsertNewline,
    /// Delete character before cursor (backspace)
    DeleteBackward,
    /// Delete character at cursor (delete)
    DeleteForward,

    // ========================================================================
    // Modes
    // ========================================================================
    /// Switch to insert mode
    EnterInsertMode,
    /// Switch to normal mode
    EnterNormalMode,

    // ========================================================================
    // File Operations
    // ========================================================================
    /// Save current file
    SaveFile,
    /// Quit application
    Quit,

    // ========================================================================
    // Special
    // ========================================================================
    /// Explicitly unbound - disables a default binding
    Unbound,
}

impl Command {
    /// Every command, in declaration order
    pub const ALL: [Command; 22] = [
        Command::MoveCursorUp,
        Command::MoveCursorDown,
        Command::MoveCursorLeft,
        Command::MoveCursorRight,
        Command::MoveCursorLineStart,
        Command::MoveCursorLineEnd,
        Command::MoveCursorWordLeft,
        Command::MoveCursorWordRight,
        Command::MoveCursorBigWordLeft,
        Command::MoveCursorBigWordRight,
        Command::HalfPageUp,
        Command::HalfPageDown,
        Command::PageUp,
        Command::PageDown,
        Command::InsertNewline,
        Command::DeleteBackward,
        Command::DeleteForward,
        Command::EnterInsertMode,
        Command::EnterNormalMode,
        Command::SaveFile,
        Command::Quit,
        Command::Unbound,
    ];

    /// Convert this command to message(s) for the Elm update loop
    ///
    /// Returns a Vec so that compound commands stay expressible.
    pub fn to_msgs(self) -> Vec<Msg> {
        use Command::*;

        match self {
            // Cursor movement
            MoveCursorUp => vec![Msg::Editor(EditorMsg::MoveCursor(Direction::Up))],
            MoveCursorDown => vec![Msg::Editor(EditorMsg::MoveCursor(Direction::Down))],
            MoveCursorLeft => vec![Msg::Editor(EditorMsg::MoveCursor(Direction::Left))],
            MoveCursorRight => vec![Msg::Editor(EditorMsg::MoveCursor(Direction::Right))],
            MoveCursorLineStart => vec![Msg::Editor(EditorMsg::MoveCursorLineStart)],
            MoveCursorLineEnd => vec![Msg::Editor(EditorMsg::MoveCursorLineEnd)],
            MoveCursorWordLeft => {
                vec![Msg::Editor(EditorMsg::MoveCursorWord(Direction::Left))]
            }
            MoveCursorWordRight => {
                vec![Msg::Editor(EditorMsg::MoveCursorWord(Direction::Right))]
            }
            MoveCursorBigWordLeft => {
                vec![Msg::Editor(EditorMsg::MoveCursorBigWord(Direction::Left))]
            }
            MoveCursorBigWordRight => {
                vec![Msg::Editor(EditorMsg::MoveCursorBigWord(Direction::Right))]
            }
            HalfPageUp => vec![Msg::Editor(EditorMsg::HalfPageUp)],
            HalfPageDown => vec![Msg::Editor(EditorMsg::HalfPageDown)],
            PageUp => vec![Msg::Editor(EditorMsg::PageUp)],
            PageDown => vec![Msg::Editor(EditorMsg::PageDown)],

            // Text editing
            InsertNewline => vec![Msg::Document(DocumentMsg::InsertNewline)],
            DeleteBackward => vec![Msg::Document(DocumentMsg::DeleteBackward)],
            DeleteForward => vec![Msg::Document(DocumentMsg::DeleteForward)],

            // Modes
            EnterInsertMode => vec![Msg::App(AppMsg::SetMode(Mode::Insert))],
            EnterNormalMode => vec![Msg::App(AppMsg::SetMode(Mode::Normal))],

            // File operations
            SaveFile => vec![Msg::App(AppMsg::SaveFile)],
            Quit => vec![Msg::App(AppMsg::Quit)],

            Unbound => vec![], // Explicitly does nothing
        }
    }

    /// Name used in keymap files
    pub fn name(self) -> &'static str {
        use Command::*;

        match self {
            MoveCursorUp => "MoveCursorUp",
            MoveCursorDown => "MoveCursorDown",
            MoveCursorLeft => "MoveCursorLeft",
            MoveCursorRight => "MoveCursorRight",
            MoveCursorLineStart => "MoveCursorLineStart",
            MoveCursorLineEnd => "MoveCursorLineEnd",
            MoveCursorWordLeft => "MoveCursorWordLeft",
            MoveCursorWordRight => "MoveCursorWordRight",
            MoveCursorBigWordLeft => "MoveCursorBigWordLeft",
            MoveCursorBigWordRight => "MoveCursorBigWordRight",
            HalfPageUp => "HalfPageUp",
            HalfPageDown => "HalfPageDown",
            PageUp => "PageUp",
            PageDown => "PageDown",
            InsertNewline => "InsertNewline",
            DeleteBackward => "DeleteBackward",
            DeleteForward => "DeleteForward",
            EnterInsertMode => "EnterInsertMode",
            EnterNormalMode => "EnterNormalMode",
            SaveFile => "SaveFile",
            Quit => "Quit",
            Unbound => "Unbound",
        }
    }

    /// Get a display name for this command
    pub fn display_name(self) -> &'static str {
        use Command::*;

        match self {
            MoveCursorUp => "Move Cursor Up",
            MoveCursorDown => "Move Cursor Down",
            MoveCursorLeft => "Move Cursor Left",
            MoveCursorRight => "Move Cursor Right",
            MoveCursorLineStart => "Move to Line Start",
            MoveCursorLineEnd => "Move to Line End",
            MoveCursorWordLeft => "Move Word Left",
            MoveCursorWordRight => "Move Word Right",
            MoveCursorBigWordLeft => "Move WORD Left",
            MoveCursorBigWordRight => "Move WORD Right",
            HalfPageUp => "Half Page Up",
            HalfPageDown => "Half Page Down",
            PageUp => "Page Up",
            PageDown => "Page Down",

            InsertNewline => "Insert Newline",
            DeleteBackward => "Delete Backward",
            DeleteForward => "Delete Forward",

            EnterInsertMode => "Insert Mode",
            EnterNormalMode => "Normal Mode",

            SaveFile => "Save File",
            Quit => "Quit",

            Unbound => "Unbound",
        }
    }
}
