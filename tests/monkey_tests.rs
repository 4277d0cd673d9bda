//! Monkey tests - edge cases, fuzzing, and stress testing
//!
//! These tests intentionally push the editor to its limits with
//! weird inputs, extreme values, and unusual sequences of operations.

mod common;

use common::{assert_invariants, buffer_to_string, test_model, test_model_with_viewport};
use tern::messages::{AppMsg, Direction, DocumentMsg, EditorMsg, Msg};
use tern::update::update;
use tern::view::Frame;

/// Small deterministic generator so failures reproduce
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn pick(&mut self, n: usize) -> usize {
        (self.next() % n as u64) as usize
    }
}

fn random_msg(rng: &mut Lcg) -> Msg {
    const CHARS: [char; 8] = ['a', 'Z', '_', '.', ' ', '\t', 'é', '('];
    let direction = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ][rng.pick(4)];

    match rng.pick(14) {
        0 => Msg::move_cursor(direction),
        1 => Msg::Editor(EditorMsg::MoveCursorWord(direction)),
        2 => Msg::Editor(EditorMsg::MoveCursorBigWord(direction)),
        3 => Msg::Editor(EditorMsg::MoveCursorLineStart),
        4 => Msg::Editor(EditorMsg::MoveCursorLineEnd),
        5 => Msg::Editor(EditorMsg::HalfPageDown),
        6 => Msg::Editor(EditorMsg::PageUp),
        7 => Msg::Document(DocumentMsg::InsertNewline),
        8 => Msg::Document(DocumentMsg::DeleteBackward),
        9 => Msg::Document(DocumentMsg::DeleteForward),
        10 => Msg::resize(rng.pick(30), rng.pick(12)),
        _ => Msg::insert_char(CHARS[rng.pick(CHARS.len())]),
    }
}

// ========================================================================
// Viewport Edge Cases
// ========================================================================

#[test]
fn test_resize_to_zero_does_not_crash() {
    let mut model = test_model("hello world\nsecond", 0, 0);
    update(&mut model, Msg::App(AppMsg::Resize(0, 0)));

    update(&mut model, Msg::move_cursor(Direction::Down));
    update(&mut model, Msg::Editor(EditorMsg::MoveCursorLineEnd));
    update(&mut model, Msg::Editor(EditorMsg::PageUp));

    assert_eq!(buffer_to_string(&model), "hello world\nsecond\n");
    assert_invariants(&model);
}

#[test]
fn test_resize_to_maximum_usize() {
    let text = "0123456789\n".repeat(40);
    let mut model = test_model_with_viewport(&text, 0, 0, 8, 5);
    for _ in 0..30 {
        update(&mut model, Msg::move_cursor(Direction::Down));
    }
    update(&mut model, Msg::Editor(EditorMsg::MoveCursorLineEnd));
    let scrolled = (model.document().viewport.top_line, model.document().viewport.left_column);
    assert_eq!(scrolled, (27, 7));

    update(&mut model, Msg::resize(usize::MAX, usize::MAX));
    assert_invariants(&model);
    assert_eq!(model.document().viewport.top_line, 27);

    let frame = Frame::from_model(&model);
    assert_eq!(frame.lines.first().map(|l| l.line), Some(27));
    assert_eq!(frame.lines.last().map(|l| l.line), Some(39));

    update(&mut model, Msg::Editor(EditorMsg::PageDown));
    update(&mut model, Msg::Editor(EditorMsg::HalfPageUp));
    assert_invariants(&model);
}

#[test]
fn test_one_row_viewport_tracks_cursor() {
    let mut model = test_model_with_viewport("a\nb\nc\nd", 0, 0, 10, 1);
    update(&mut model, Msg::Editor(EditorMsg::PageDown));
    assert_eq!(model.document().cursor.line, 1);
    assert_eq!(model.document().viewport.top_line, 1);

    update(&mut model, Msg::Editor(EditorMsg::HalfPageDown));
    assert_eq!(model.document().cursor.line, 2);
    assert_invariants(&model);
}

// ========================================================================
// Boundary Sequences
// ========================================================================

#[test]
fn test_delete_everything_backwards() {
    let text = "ab\ncd\n\nef";
    let mut model = test_model(text, 3, 2);
    for _ in 0..text.len() + 5 {
        update(&mut model, Msg::Document(DocumentMsg::DeleteBackward));
        assert_invariants(&model);
    }
    assert!(model.document().buffer.is_empty());
    assert_eq!(buffer_to_string(&model), "");
}

#[test]
fn test_delete_everything_forwards() {
    let text = "ab\ncd\n\nef";
    let mut model = test_model(text, 0, 0);
    for _ in 0..text.len() + 5 {
        update(&mut model, Msg::Document(DocumentMsg::DeleteForward));
        assert_invariants(&model);
    }
    assert!(model.document().buffer.is_empty());
}

#[test]
fn test_word_motions_on_whitespace_only_buffer() {
    let mut model = test_model("   \n\t\n  ", 1, 1);
    update(&mut model, Msg::Editor(EditorMsg::MoveCursorWord(Direction::Right)));
    assert_eq!(model.document().cursor.line, 2);
    assert_eq!(model.document().cursor.column, 2);

    update(&mut model, Msg::Editor(EditorMsg::MoveCursorWord(Direction::Left)));
    assert_eq!(model.document().cursor.line, 0);
    assert_eq!(model.document().cursor.column, 0);
}

#[test]
fn test_many_lines_widen_gutter() {
    let text = "x\n".repeat(12_000);
    let model = test_model(&text, 11_999, 0);
    assert_eq!(model.document().gutter_width(), 5);
    assert_invariants(&model);
}

// ========================================================================
// Random Sequences
// ========================================================================

#[test]
fn test_random_operations_keep_invariants() {
    for seed in 0..20u64 {
        let mut rng = Lcg(seed);
        let mut model = test_model_with_viewport("fn main() {\n    x.y = 1;\n}\n", 1, 4, 20, 6);
        for _ in 0..500 {
            update(&mut model, random_msg(&mut rng));
            assert_invariants(&model);
        }
    }
}
