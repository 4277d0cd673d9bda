//! Render frame - the output handed to a renderer
//!
//! A `Frame` is a plain snapshot of what is visible: the line slice inside the
//! viewport, the gutter labels, the cursor's screen position and the status
//! row. It carries no references into the model, so it can be serialized or
//! printed after the model has moved on.

use serde::Serialize;

use crate::model::{AppModel, Mode};

/// One visible text row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameLine {
    /// Buffer line index (0-indexed)
    pub line: usize,
    /// Gutter label, right-aligned to the gutter width
    pub label: String,
    /// Line text clipped to the horizontal window
    pub text: String,
}

/// Snapshot of the visible editor state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub lines: Vec<FrameLine>,
    /// Cursor position on screen as (row, column)
    pub cursor: (usize, usize),
    pub gutter_width: usize,
    pub top_line: usize,
    pub left_column: usize,
    pub modified: bool,
    pub mode: Mode,
    pub file_name: String,
    pub status: String,
}

impl Frame {
    /// Build a frame from the current model
    pub fn from_model(model: &AppModel) -> Self {
        let doc = model.document();
        let viewport = &doc.viewport;
        let gutter = doc.gutter_width();
        let text_width = viewport.visible_columns.saturating_sub(gutter);
        let relative = model.config.relative_line_numbers;

        let end = viewport
            .top_line
            .saturating_add(viewport.visible_lines)
            .min(doc.line_count());
        let lines = (viewport.top_line..end)
            .map(|line| {
                let number = if relative {
                    line.abs_diff(doc.cursor.line)
                } else {
                    line + 1
                };
                let text = doc
                    .buffer
                    .line(line)
                    .chars()
                    .skip(viewport.left_column)
                    .take(text_width)
                    .collect();
                FrameLine {
                    line,
                    label: format!("{:>width$}", number, width = gutter),
                    text,
                }
            })
            .collect();

        let cursor = (
            doc.cursor.line.saturating_sub(viewport.top_line),
            doc.cursor.column.saturating_sub(viewport.left_column) + gutter,
        );

        Self {
            lines,
            cursor,
            gutter_width: gutter,
            top_line: viewport.top_line,
            left_column: viewport.left_column,
            modified: doc.is_modified,
            mode: model.mode,
            file_name: doc.display_name(),
            status: model.ui.status_message.clone(),
        }
    }

    /// Status row text: mode, file name, dirty marker and message
    pub fn status_line(&self) -> String {
        let mut status = format!("-- {} -- {}", self.mode.as_str(), self.file_name);
        if self.modified {
            status.push_str(" [+]");
        }
        if !self.status.is_empty() {
            status.push_str("  ");
            status.push_str(&self.status);
        }
        status
    }

    /// Render as plain text: one row per visible line, then the status row
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for row in &self.lines {
            out.push_str(&row.label);
            out.push_str(&row.text);
            out.push('\n');
        }
        out.push_str(&self.status_line());
        out.push('\n');
        out
    }
}
