//! Document update functions for text editing

use crate::commands::Cmd;
use crate::messages::DocumentMsg;
use crate::model::AppModel;

/// Handle document messages (text editing)
pub fn update_document(model: &mut AppModel, msg: DocumentMsg) -> Option<Cmd> {
    let doc = model.document_mut();
    match msg {
        DocumentMsg::InsertChar(ch) => doc.insert_char(ch),
        DocumentMsg::InsertNewline => doc.split_line(),
        DocumentMsg::DeleteBackward => doc.delete_left(),
        DocumentMsg::DeleteForward => doc.delete_right(),
    }
    Some(Cmd::Redraw)
}
