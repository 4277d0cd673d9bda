//! App message handlers (modes, file operations, viewport)

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::AppModel;

/// Handle app messages (modes, file operations, viewport)
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::SetMode(mode) => {
            if model.mode == mode {
                return None;
            }
            tracing::debug!(from = %model.mode, to = %mode, "mode change");
            model.mode = mode;
            Some(Cmd::Redraw)
        }

        AppMsg::Resize(width, height) => {
            model.resize(width, height);
            Some(Cmd::Redraw)
        }

        AppMsg::SaveFile => {
            let file_path = model.document().file_path.clone();
            match file_path {
                Some(path) => {
                    let content = model.document().text();
                    model.ui.set_status("Saving...");
                    Some(Cmd::SaveFile { path, content })
                }
                None => {
                    model.ui.set_status("No file path - cannot save");
                    Some(Cmd::Redraw)
                }
            }
        }

        AppMsg::LoadFile(path) => {
            model.ui.set_status("Loading...");
            Some(Cmd::LoadFile { path })
        }

        AppMsg::SaveCompleted(result) => {
            match result {
                Ok(()) => {
                    model.document_mut().is_modified = false;
                    let name = model.document().display_name();
                    model.ui.set_status(format!("Saved: {}", name));
                }
                Err(e) => {
                    tracing::warn!("Save failed: {}", e);
                    model.ui.set_status(format!("Error: {}", e));
                }
            }
            Some(Cmd::Redraw)
        }

        AppMsg::FileLoaded { path, result } => {
            match result {
                Ok(content) => {
                    model.document_mut().load_contents(path, &content);
                    let name = model.document().display_name();
                    model.ui.set_status(format!("Loaded: {}", name));
                }
                Err(e) => {
                    tracing::warn!("Load of {} failed: {}", path.display(), e);
                    model.ui.set_status(format!("Error: {}", e));
                }
            }
            Some(Cmd::Redraw)
        }

        AppMsg::Quit => {
            model.ui.should_quit = true;
            Some(Cmd::Quit)
        }
    }
}
