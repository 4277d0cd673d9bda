//! Application model - the complete state of the editor
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod buffer;
pub mod cursor;
pub mod document;
pub mod mode;
pub mod motion;
pub mod ui;
pub mod viewport;

pub use buffer::{LineEnding, TextBuffer};
pub use cursor::{Cursor, Viewport};
pub use document::Document;
pub use mode::Mode;
pub use motion::{full_page_rows, half_page_rows, Direction, Motion};
pub use ui::UiState;
pub use viewport::{gutter_width, MIN_GUTTER_WIDTH};

use crate::config::EditorConfig;

/// The complete application model
#[derive(Debug, Clone)]
pub struct AppModel {
    /// The single open document
    pub document: Document,
    /// Current editing mode
    pub mode: Mode,
    /// UI state (status line, quit flag)
    pub ui: UiState,
    /// Persisted editor configuration
    pub config: EditorConfig,
}

impl AppModel {
    /// Wrap a document, sizing its viewport from the config
    pub fn new(mut document: Document, config: EditorConfig) -> Self {
        document.resize(config.viewport_width, config.viewport_height);
        let status = if document.file_path.is_some() {
            format!("Loaded: {}", document.display_name())
        } else {
            "New file".to_string()
        };
        Self {
            document,
            mode: Mode::default(),
            ui: UiState::with_status(status),
            config,
        }
    }

    /// Get the document (read-only)
    #[inline]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Get the document (mutable)
    #[inline]
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Update viewport dimensions
    pub fn resize(&mut self, width: usize, height: usize) {
        self.document.resize(width, height);
    }
}
