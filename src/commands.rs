//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use std::path::PathBuf;

/// Side effects requested by `update`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Request a redraw of the frame
    Redraw,
    /// Write `content` to `path`, then send `AppMsg::SaveCompleted`
    SaveFile { path: PathBuf, content: String },
    /// Read `path`, then send `AppMsg::FileLoaded`
    LoadFile { path: PathBuf },
    /// Request application exit
    Quit,
}
