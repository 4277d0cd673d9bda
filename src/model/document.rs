//! Document model - the text buffer, cursor, viewport and file state
//!
//! Every motion and edit ends by scrolling the viewport to the cursor.

use std::io;
use std::path::{Path, PathBuf};

use super::buffer::TextBuffer;
use super::cursor::{Cursor, Viewport};
use super::motion::{Direction, Motion};
use super::viewport::gutter_width;
use crate::util::{read_text_file, write_text_file, FileOpenError};

/// Document state - the text buffer and associated file metadata
#[derive(Debug, Clone)]
pub struct Document {
    /// The text buffer
    pub buffer: TextBuffer,
    /// Caret position
    pub cursor: Cursor,
    /// Visible window onto the buffer
    pub viewport: Viewport,
    /// Path to the file on disk (None for new/unsaved files)
    pub file_path: Option<PathBuf>,
    /// Whether the buffer has unsaved changes
    pub is_modified: bool,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self {
            buffer: TextBuffer::new(),
            cursor: Cursor::new(),
            viewport: Viewport::default(),
            file_path: None,
            is_modified: false,
        }
    }

    /// Create a document with initial text
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: TextBuffer::from_text(text),
            ..Self::new()
        }
    }

    /// Load a document from a file path
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, FileOpenError> {
        let mut doc = Self::new();
        doc.open(path)?;
        Ok(doc)
    }

    /// Create a new empty document with a target file path
    ///
    /// Used when the user names a file that does not exist yet.
    /// The file will be created on the first save.
    pub fn new_with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: Some(path.into()),
            ..Self::new()
        }
    }

    /// Get the display name for this document
    pub fn display_name(&self) -> String {
        self.file_path
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "Untitled".to_string())
    }

    pub fn line_count(&self) -> usize {
        self.buffer.line_count()
    }

    /// Current line-number gutter width
    pub fn gutter_width(&self) -> usize {
        gutter_width(self.buffer.line_count())
    }

    /// Full text as it would be written to disk
    pub fn text(&self) -> String {
        self.buffer.serialize()
    }

    /// Panic if the cursor has left the buffer (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants_with_context(&self, context: &str) {
        assert!(self.buffer.line_count() > 0, "[{}] buffer has no lines", context);
        assert!(
            self.cursor.line < self.buffer.line_count(),
            "[{}] cursor line {} out of range (line_count: {})",
            context,
            self.cursor.line,
            self.buffer.line_count()
        );
        let line_len = self.buffer.line_len(self.cursor.line);
        assert!(
            self.cursor.column <= line_len,
            "[{}] cursor column {} past end of line {} (len: {})",
            context,
            self.cursor.column,
            self.cursor.line,
            line_len
        );
    }

    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants_with_context(&self, _context: &str) {}

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Replace the document with the contents of `path`
    ///
    /// On failure nothing about the document changes.
    pub fn open(&mut self, path: impl Into<PathBuf>) -> Result<(), FileOpenError> {
        let path = path.into();
        let content = read_text_file(&path)?;
        self.load_contents(path, &content);
        Ok(())
    }

    /// Install already-read file content as the document
    pub fn load_contents(&mut self, path: PathBuf, content: &str) {
        self.buffer.load(content);
        self.cursor.reset();
        self.viewport.reset_scroll();
        self.is_modified = false;
        tracing::info!(
            path = %path.display(),
            lines = self.buffer.line_count(),
            line_ending = %self.buffer.line_ending(),
            "opened document"
        );
        self.file_path = Some(path);
    }

    /// Write the buffer to its file path
    pub fn save(&mut self) -> io::Result<()> {
        let path = self.file_path.clone().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "document has no file path")
        })?;
        self.save_as(path)
    }

    /// Write the buffer to `path` and adopt it as the file path
    pub fn save_as(&mut self, path: impl Into<PathBuf>) -> io::Result<()> {
        let path = path.into();
        write_text_file(&path, &self.buffer.serialize())?;
        tracing::info!(path = %path.display(), "saved document");
        self.file_path = Some(path);
        self.is_modified = false;
        Ok(())
    }

    /// Forget the file and return to a single empty line
    pub fn close(&mut self) {
        self.buffer.reset();
        self.cursor.reset();
        self.viewport.reset_scroll();
        self.file_path = None;
        self.is_modified = false;
    }

    // =========================================================================
    // Viewport
    // =========================================================================

    /// Change the viewport dimensions and keep the cursor visible
    pub fn resize(&mut self, visible_columns: usize, visible_lines: usize) {
        self.viewport.visible_columns = visible_columns;
        self.viewport.visible_lines = visible_lines;
        self.scroll_to_cursor();
    }

    /// Re-establish the viewport invariant for the current cursor
    pub fn scroll_to_cursor(&mut self) {
        let gutter = self.gutter_width();
        self.viewport.reveal(&self.cursor, gutter);
    }

    // =========================================================================
    // Motions
    // =========================================================================

    fn motion(&mut self, f: impl FnOnce(&mut Motion<'_>)) {
        f(&mut Motion::new(&self.buffer, &mut self.cursor));
        self.scroll_to_cursor();
    }

    /// Place the cursor at (line, column), clamped into the buffer
    pub fn move_to(&mut self, line: usize, column: usize) {
        let line = line.min(self.buffer.last_line());
        let column = column.min(self.buffer.line_len(line));
        self.cursor = Cursor::at(line, column);
        self.scroll_to_cursor();
    }

    pub fn move_left(&mut self) {
        self.motion(|m| m.left());
    }

    pub fn move_right(&mut self) {
        self.motion(|m| m.right());
    }

    pub fn move_up(&mut self) {
        self.motion(|m| m.up());
    }

    pub fn move_down(&mut self) {
        self.motion(|m| m.down());
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.move_up(),
            Direction::Down => self.move_down(),
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
        }
    }

    pub fn move_line_start(&mut self) {
        self.motion(|m| m.line_start());
    }

    pub fn move_line_end(&mut self) {
        self.motion(|m| m.line_end());
    }

    pub fn move_word(&mut self, direction: Direction) {
        self.motion(|m| m.word(direction));
    }

    pub fn move_big_word(&mut self, direction: Direction) {
        self.motion(|m| m.big_word(direction));
    }

    pub fn half_page(&mut self, direction: Direction) {
        let visible_lines = self.viewport.visible_lines;
        self.motion(|m| m.half_page(direction, visible_lines));
    }

    pub fn full_page(&mut self, direction: Direction) {
        let visible_lines = self.viewport.visible_lines;
        self.motion(|m| m.full_page(direction, visible_lines));
    }

    // =========================================================================
    // Edits
    // =========================================================================

    /// Insert `ch` at the cursor and step past it; line breaks split the line
    pub fn insert_char(&mut self, ch: char) {
        if matches!(ch, '\n' | '\r') {
            self.split_line();
            return;
        }
        let mut encoded = [0u8; 4];
        self.buffer
            .insert_text(self.cursor.line, self.cursor.column, ch.encode_utf8(&mut encoded));
        self.is_modified = true;
        self.motion(|m| m.right());
    }

    /// Break the line at the cursor, moving to the start of the new line
    pub fn split_line(&mut self) {
        self.buffer.split_line(self.cursor.line, self.cursor.column);
        self.is_modified = true;
        self.motion(|m| m.right());
    }

    /// Backspace: delete the previous character or join with the previous line
    pub fn delete_left(&mut self) {
        let Cursor { line, column } = self.cursor;
        if line == 0 && column == 0 {
            return;
        }
        // Step back while the buffer still holds the old text
        Motion::new(&self.buffer, &mut self.cursor).left();
        if column > 0 {
            self.buffer.delete_before(line, column);
        } else {
            self.buffer.join_with_previous(line);
        }
        self.is_modified = true;
        self.scroll_to_cursor();
    }

    /// Delete: remove the character at the cursor or join with the next line
    pub fn delete_right(&mut self) {
        let Cursor { line, column } = self.cursor;
        if column < self.buffer.line_len(line) {
            self.buffer.delete_at(line, column);
        } else if line < self.buffer.last_line() {
            self.buffer.join_with_next(line);
        } else {
            return;
        }
        self.is_modified = true;
        self.scroll_to_cursor();
    }
}
