//! Cursor position and viewport state

/// Caret position in the document
///
/// `column` may equal the line length, which places the caret after the
/// last character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cursor {
    /// Line number (0-indexed)
    pub line: usize,
    /// Column number in chars (0-indexed)
    pub column: usize,
}

impl Cursor {
    /// Create a new cursor at position (0, 0)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cursor at a specific position
    pub const fn at(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Move back to (0, 0)
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Viewport state - what portion of the document is visible
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    /// First visible line (0-indexed)
    pub top_line: usize,
    /// First visible column (for horizontal scrolling)
    pub left_column: usize,
    /// Rows available for text, including the status row
    pub visible_lines: usize,
    /// Columns available for text, including the gutter
    pub visible_columns: usize,
}

impl Viewport {
    /// Create a new viewport with the given dimensions
    pub fn new(visible_lines: usize, visible_columns: usize) -> Self {
        Self {
            top_line: 0,
            left_column: 0,
            visible_lines,
            visible_columns,
        }
    }

    /// Scroll back to the origin, keeping dimensions
    pub fn reset_scroll(&mut self) {
        self.top_line = 0;
        self.left_column = 0;
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(24, 80)
    }
}
