//! Viewport scrolling - keeps the cursor inside the visible window
//!
//! One row is reserved for the status line and two columns for the gutter
//! border, so the cursor may sit on rows `top..=top + lines - 2` and columns
//! `left..=left + columns - gutter - 2`.

use super::cursor::{Cursor, Viewport};
use crate::util::digit_count;

/// Minimum width of the line-number gutter
pub const MIN_GUTTER_WIDTH: usize = 3;

/// Width reserved for line numbers: `max(3, digits(line_count))`
#[inline]
pub fn gutter_width(line_count: usize) -> usize {
    digit_count(line_count).max(MIN_GUTTER_WIDTH)
}

impl Viewport {
    /// Rows past `top_line` the cursor may occupy
    #[inline]
    pub fn vertical_span(&self) -> usize {
        self.visible_lines.saturating_sub(2)
    }

    /// Columns past `left_column` the cursor may occupy
    #[inline]
    pub fn horizontal_span(&self, gutter: usize) -> usize {
        self.visible_columns.saturating_sub(gutter.saturating_add(2))
    }

    /// Scroll vertically so the cursor line is visible
    pub fn adjust_vertical(&mut self, cursor: &Cursor) {
        let span = self.vertical_span();
        if cursor.line < self.top_line {
            self.top_line = cursor.line;
        } else if cursor.line - self.top_line > span {
            self.top_line = cursor.line - span;
        }
    }

    /// Scroll horizontally so the cursor column is visible
    pub fn adjust_horizontal(&mut self, cursor: &Cursor, gutter: usize) {
        let span = self.horizontal_span(gutter);
        if cursor.column < self.left_column {
            self.left_column = cursor.column;
        } else if cursor.column - self.left_column > span {
            self.left_column = cursor.column - span;
        }
    }

    /// Run both adjustments
    pub fn reveal(&mut self, cursor: &Cursor, gutter: usize) {
        self.adjust_vertical(cursor);
        self.adjust_horizontal(cursor, gutter);
    }
}
