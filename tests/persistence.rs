//! Persistence tests - open, save, close and the line terminator policy

mod common;

use common::{test_app, type_keys};
use tempfile::tempdir;
use tern::config::EditorConfig;
use tern::model::{AppModel, Cursor, Document, LineEnding, TextBuffer};
use tern::util::FileOpenError;

// ========================================================================
// Round trips
// ========================================================================

#[test]
fn test_load_serialize_round_trip_for_terminated_text() {
    let samples = ["", "abc\n", "a\nb\nc\n", "\n\n\n", "  indented\n\ttab\n"];
    for text in samples {
        let buffer = TextBuffer::from_text(text);
        assert_eq!(buffer.serialize(), text, "round trip of {:?}", text);
    }
}

#[test]
fn test_lone_terminator_saves_as_empty_file() {
    let buffer = TextBuffer::from_text("\n");
    assert_eq!(buffer.line_count(), 1);
    assert_eq!(buffer.serialize(), "");
}

#[test]
fn test_unterminated_last_line_gains_terminator() {
    let buffer = TextBuffer::from_text("abc\ndef");
    assert_eq!(buffer.serialize(), "abc\ndef\n");

    // Stable from the first save on
    let again = TextBuffer::from_text(&buffer.serialize());
    assert_eq!(again.serialize(), buffer.serialize());
}

#[test]
fn test_serialize_then_load_preserves_lines() {
    let samples: [&[&str]; 4] = [&[""], &["", ""], &["a", "", "b"], &["x", ""]];
    for lines in samples {
        let buffer = TextBuffer::from_text(&format!("{}\n", lines.join("\n")));
        let reloaded = TextBuffer::from_text(&buffer.serialize());
        let got: Vec<&str> = reloaded.lines().collect();
        assert_eq!(got, lines.to_vec());
    }
}

#[test]
fn test_crlf_is_preserved() {
    let buffer = TextBuffer::from_text("one\r\ntwo\r\n");
    assert_eq!(buffer.line_ending(), LineEnding::CrLf);
    assert_eq!(buffer.lines().collect::<Vec<_>>(), vec!["one", "two"]);
    assert_eq!(buffer.serialize(), "one\r\ntwo\r\n");
}

#[test]
fn test_lone_carriage_return_splits_lines() {
    let buffer = TextBuffer::from_text("a\rb");
    assert_eq!(buffer.lines().collect::<Vec<_>>(), vec!["a", "b"]);
}

// ========================================================================
// Document open / save / close
// ========================================================================

#[test]
fn test_open_resets_cursor_scroll_and_dirty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a.txt");
    std::fs::write(&path, "first\nsecond\n").unwrap();

    let mut doc = Document::with_text("scratch");
    doc.cursor = Cursor::at(0, 4);
    doc.viewport.left_column = 2;
    doc.is_modified = true;

    doc.open(&path).unwrap();
    assert_eq!(doc.line_count(), 2);
    assert_eq!(doc.cursor, Cursor::at(0, 0));
    assert_eq!(doc.viewport.left_column, 0);
    assert!(!doc.is_modified);
    assert_eq!(doc.display_name(), "a.txt");
}

#[test]
fn test_failed_open_leaves_document_untouched() {
    let dir = tempdir().unwrap();
    let mut doc = Document::with_text("keep me");
    doc.cursor = Cursor::at(0, 4);
    doc.is_modified = true;

    let err = doc.open(dir.path().join("missing.txt")).unwrap_err();
    assert_eq!(err, FileOpenError::NotFound);

    let err = doc.open(dir.path()).unwrap_err();
    assert_eq!(err, FileOpenError::IsDirectory);

    assert_eq!(doc.text(), "keep me\n");
    assert_eq!(doc.cursor, Cursor::at(0, 4));
    assert!(doc.is_modified);
    assert!(doc.file_path.is_none());
}

#[test]
fn test_binary_file_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("blob.bin");
    std::fs::write(&path, [0u8, 1, 2, 0, 3]).unwrap();

    assert_eq!(
        Document::from_file(&path).unwrap_err(),
        FileOpenError::BinaryFile
    );
}

#[test]
fn test_save_and_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.txt");

    let mut doc = Document::new_with_path(&path);
    doc.insert_char('h');
    doc.insert_char('i');
    doc.split_line();
    assert!(doc.is_modified);

    doc.save().unwrap();
    assert!(!doc.is_modified);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "hi\n\n");

    let reopened = Document::from_file(&path).unwrap();
    assert_eq!(reopened.buffer.lines().collect::<Vec<_>>(), vec!["hi", ""]);
}

#[test]
fn test_repeated_open_save_is_byte_stable() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("stable.txt");
    std::fs::write(&path, "a\r\nb\r\n\r\n").unwrap();

    for _ in 0..3 {
        let mut doc = Document::from_file(&path).unwrap();
        doc.save().unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"a\r\nb\r\n\r\n");
    }
}

#[test]
fn test_save_without_path_is_error() {
    let mut doc = Document::with_text("x");
    doc.insert_char('y');
    assert!(doc.save().is_err());
    assert!(doc.is_modified);
}

#[test]
fn test_failed_save_keeps_buffer_and_dirty_flag() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("no_such_dir").join("file.txt");

    let mut doc = Document::with_text("data");
    doc.insert_char('!');
    assert!(doc.save_as(&target).is_err());

    assert_eq!(doc.text(), "!data\n");
    assert!(doc.is_modified);
    assert!(doc.file_path.is_none());
}

#[test]
fn test_save_as_adopts_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("named.txt");

    let mut doc = Document::with_text("data");
    doc.save_as(&path).unwrap();
    assert_eq!(doc.file_path.as_deref(), Some(path.as_path()));
    assert_eq!(doc.display_name(), "named.txt");
}

#[test]
fn test_close_returns_to_empty_state() {
    let mut doc = Document::with_text("a\nb\nc");
    doc.cursor = Cursor::at(2, 1);
    doc.viewport.top_line = 1;
    doc.is_modified = true;

    doc.close();
    assert!(doc.buffer.is_empty());
    assert_eq!(doc.cursor, Cursor::at(0, 0));
    assert_eq!(doc.viewport.top_line, 0);
    assert!(!doc.is_modified);
    assert_eq!(doc.display_name(), "Untitled");
}

// ========================================================================
// Save through the update loop
// ========================================================================

#[test]
fn test_ctrl_s_writes_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("keys.txt");
    std::fs::write(&path, "world\n").unwrap();

    let model = AppModel::new(Document::from_file(&path).unwrap(), EditorConfig::default());
    let mut app = test_app(model);
    type_keys(&mut app, " hello <Esc><C-s>");

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello world\n");
    assert!(!app.model().document().is_modified);
}
