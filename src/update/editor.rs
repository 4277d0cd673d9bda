//! Editor update functions for cursor movement

use crate::commands::Cmd;
use crate::messages::{Direction, EditorMsg};
use crate::model::AppModel;

/// Handle editor messages (cursor movement)
pub fn update_editor(model: &mut AppModel, msg: EditorMsg) -> Option<Cmd> {
    let doc = model.document_mut();
    match msg {
        EditorMsg::MoveCursor(direction) => doc.move_cursor(direction),
        EditorMsg::MoveCursorLineStart => doc.move_line_start(),
        EditorMsg::MoveCursorLineEnd => doc.move_line_end(),
        EditorMsg::MoveCursorWord(direction) => doc.move_word(direction),
        EditorMsg::MoveCursorBigWord(direction) => doc.move_big_word(direction),
        EditorMsg::HalfPageUp => doc.half_page(Direction::Up),
        EditorMsg::HalfPageDown => doc.half_page(Direction::Down),
        EditorMsg::PageUp => doc.full_page(Direction::Up),
        EditorMsg::PageDown => doc.full_page(Direction::Down),
    }
    Some(Cmd::Redraw)
}
