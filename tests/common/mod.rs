//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use tern::config::EditorConfig;
use tern::keymap::{default_bindings, Keymap};
use tern::model::{AppModel, Cursor, Document};
use tern::runtime::{parse_key_script, App};

/// Create a test model with given text and cursor position (80x25 viewport)
pub fn test_model(text: &str, line: usize, column: usize) -> AppModel {
    test_model_with_viewport(text, line, column, 80, 25)
}

/// Create a test model with an explicit viewport size
pub fn test_model_with_viewport(
    text: &str,
    line: usize,
    column: usize,
    width: usize,
    height: usize,
) -> AppModel {
    let config = EditorConfig {
        viewport_width: width,
        viewport_height: height,
        ..EditorConfig::default()
    };
    let mut model = AppModel::new(Document::with_text(text), config);
    model.document_mut().cursor = Cursor::at(line, column);
    model.document_mut().scroll_to_cursor();
    model
}

/// Helper to get buffer content as string
pub fn buffer_to_string(model: &AppModel) -> String {
    model.document().buffer.to_string()
}

/// Buffer lines as owned strings
pub fn lines(model: &AppModel) -> Vec<String> {
    model
        .document()
        .buffer
        .lines()
        .map(str::to_string)
        .collect()
}

/// Cursor as a (line, column) pair
pub fn cursor(model: &AppModel) -> (usize, usize) {
    let c = model.document().cursor;
    (c.line, c.column)
}

/// Scroll offsets as (top_line, left_column)
pub fn scroll(model: &AppModel) -> (usize, usize) {
    let v = &model.document().viewport;
    (v.top_line, v.left_column)
}

/// Headless app over `model` with the built-in keymap
pub fn test_app(model: AppModel) -> App {
    App::new(model, Keymap::with_bindings(default_bindings()))
}

/// Replay a key script
pub fn type_keys(app: &mut App, script: &str) {
    let keys = parse_key_script(script).expect("valid key script");
    app.run_keys(keys);
}

/// Assert the cursor and viewport invariants hold
pub fn assert_invariants(model: &AppModel) {
    let doc = model.document();
    let (line, column) = (doc.cursor.line, doc.cursor.column);
    assert!(line < doc.line_count(), "line {} out of range", line);
    assert!(
        column <= doc.buffer.line_len(line),
        "column {} past end of line {}",
        column,
        line
    );

    let v = &doc.viewport;
    assert!(v.top_line <= line, "cursor above viewport");
    assert!(line - v.top_line <= v.vertical_span(), "cursor below viewport");
    assert!(v.left_column <= column, "cursor left of viewport");
    assert!(
        column - v.left_column <= v.horizontal_span(doc.gutter_width()),
        "cursor right of viewport"
    );
}
