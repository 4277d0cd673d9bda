//! Cursor movement tests - character, line, word and big-word motions

mod common;

use common::{assert_invariants, cursor, test_model};
use tern::messages::{Direction, EditorMsg, Msg};
use tern::update::update;

fn word(direction: Direction) -> Msg {
    Msg::Editor(EditorMsg::MoveCursorWord(direction))
}

fn big_word(direction: Direction) -> Msg {
    Msg::Editor(EditorMsg::MoveCursorBigWord(direction))
}

// ========================================================================
// Character motions
// ========================================================================

#[test]
fn test_move_right_wraps_to_next_line() {
    let mut model = test_model("ab\ncd", 0, 2);
    update(&mut model, Msg::move_cursor(Direction::Right));
    assert_eq!(cursor(&model), (1, 0));
}

#[test]
fn test_move_left_wraps_to_previous_line_end() {
    let mut model = test_model("abc\nd", 1, 0);
    update(&mut model, Msg::move_cursor(Direction::Left));
    assert_eq!(cursor(&model), (0, 3));
}

#[test]
fn test_move_left_at_buffer_begin_is_noop() {
    let mut model = test_model("abc", 0, 0);
    update(&mut model, Msg::move_cursor(Direction::Left));
    assert_eq!(cursor(&model), (0, 0));
}

#[test]
fn test_move_right_at_buffer_end_is_noop() {
    let mut model = test_model("abc\nde", 1, 2);
    update(&mut model, Msg::move_cursor(Direction::Right));
    assert_eq!(cursor(&model), (1, 2));
}

#[test]
fn test_move_down_clamps_column() {
    let mut model = test_model("hello world\nhi\nlonger line", 0, 8);
    update(&mut model, Msg::move_cursor(Direction::Down));
    assert_eq!(cursor(&model), (1, 2));

    // No remembered column: the clamped column carries on
    update(&mut model, Msg::move_cursor(Direction::Down));
    assert_eq!(cursor(&model), (2, 2));
}

#[test]
fn test_move_up_on_first_line_snaps_to_column_zero() {
    let mut model = test_model("hello\nworld", 0, 3);
    update(&mut model, Msg::move_cursor(Direction::Up));
    assert_eq!(cursor(&model), (0, 0));
}

#[test]
fn test_move_down_on_last_line_snaps_to_line_end() {
    let mut model = test_model("hello\nworld", 1, 1);
    update(&mut model, Msg::move_cursor(Direction::Down));
    assert_eq!(cursor(&model), (1, 5));
}

#[test]
fn test_line_start_and_end() {
    let mut model = test_model("  indented", 0, 4);
    update(&mut model, Msg::Editor(EditorMsg::MoveCursorLineEnd));
    assert_eq!(cursor(&model), (0, 10));
    update(&mut model, Msg::Editor(EditorMsg::MoveCursorLineStart));
    assert_eq!(cursor(&model), (0, 0));
}

#[test]
fn test_columns_count_characters_not_bytes() {
    let mut model = test_model("héllo\nwörld", 0, 0);
    update(&mut model, Msg::Editor(EditorMsg::MoveCursorLineEnd));
    assert_eq!(cursor(&model), (0, 5));
    update(&mut model, Msg::move_cursor(Direction::Down));
    assert_eq!(cursor(&model), (1, 5));
}

// ========================================================================
// Word motions
// ========================================================================

#[test]
fn test_word_right_scenario() {
    let mut model = test_model("foo bar\nbaz", 0, 0);
    update(&mut model, word(Direction::Right));
    assert_eq!(cursor(&model), (0, 4));
    update(&mut model, word(Direction::Right));
    assert_eq!(cursor(&model), (1, 0));
}

#[test]
fn test_word_right_stops_between_word_and_symbol_runs() {
    let mut model = test_model("call(arg_1, x);", 0, 0);
    let mut stops = Vec::new();
    for _ in 0..7 {
        update(&mut model, word(Direction::Right));
        stops.push(cursor(&model).1);
    }
    // "call" "(" "arg_1" ", " "x" ");" then end of buffer
    assert_eq!(stops, vec![4, 5, 10, 12, 13, 15, 15]);
}

#[test]
fn test_word_left_visits_run_starts() {
    let mut model = test_model("call(arg_1, x);", 0, 15);
    let mut stops = Vec::new();
    for _ in 0..6 {
        update(&mut model, word(Direction::Left));
        stops.push(cursor(&model).1);
    }
    assert_eq!(stops, vec![13, 12, 10, 5, 4, 0]);
}

#[test]
fn test_word_left_crosses_blank_lines() {
    let mut model = test_model("one\n\n   two", 2, 3);
    update(&mut model, word(Direction::Left));
    assert_eq!(cursor(&model), (0, 0));
}

#[test]
fn test_word_left_at_buffer_begin_is_noop() {
    let mut model = test_model("foo bar", 0, 0);
    update(&mut model, word(Direction::Left));
    assert_eq!(cursor(&model), (0, 0));
}

#[test]
fn test_word_right_then_left_never_passes_word_start() {
    let text = "let x = foo.bar(1);\n  baz_qux -> y";
    let starts = [(0, 0), (0, 4), (0, 8), (0, 12), (1, 2), (1, 10)];
    for (line, column) in starts {
        let mut model = test_model(text, line, column);
        update(&mut model, word(Direction::Right));
        update(&mut model, word(Direction::Left));
        assert!(
            cursor(&model) <= (line, column),
            "from {:?} ended at {:?}",
            (line, column),
            cursor(&model)
        );
    }
}

#[test]
fn test_big_word_ignores_symbols() {
    let mut model = test_model("a.b(c) next", 0, 0);
    update(&mut model, big_word(Direction::Right));
    assert_eq!(cursor(&model), (0, 7));
    update(&mut model, big_word(Direction::Left));
    assert_eq!(cursor(&model), (0, 0));
}

#[test]
fn test_big_word_right_at_buffer_end_is_noop() {
    let mut model = test_model("tail", 0, 4);
    update(&mut model, big_word(Direction::Right));
    assert_eq!(cursor(&model), (0, 4));
}

#[test]
fn test_motions_keep_invariants() {
    let mut model = test_model("a b\n\n  c.d\nlast line here", 1, 0);
    let msgs = [
        word(Direction::Right),
        big_word(Direction::Right),
        Msg::move_cursor(Direction::Up),
        word(Direction::Left),
        Msg::move_cursor(Direction::Down),
        Msg::move_cursor(Direction::Down),
        Msg::move_cursor(Direction::Down),
        big_word(Direction::Left),
        Msg::Editor(EditorMsg::PageDown),
        Msg::Editor(EditorMsg::HalfPageUp),
    ];
    for msg in msgs {
        update(&mut model, msg);
        assert_invariants(&model);
    }
}
