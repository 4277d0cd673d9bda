use std::sync::mpsc::{self, Receiver, Sender};

use crate::commands::Cmd;
use crate::keymap::{Command, KeyAction, KeyContext, KeyEvent, Keymap};
use crate::messages::{AppMsg, Msg};
use crate::model::AppModel;
use crate::update::update;
use crate::util::{filename_for_display, read_text_file, write_text_file};
use crate::view::Frame;

/// Headless application: model + keymap + side-effect executor
///
/// Commands produced by `update` are executed synchronously; their results
/// are fed back through the message channel before `handle_key` returns.
pub struct App {
    model: AppModel,
    keymap: Keymap,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
}

impl App {
    pub fn new(model: AppModel, keymap: Keymap) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model,
            keymap,
            msg_tx,
            msg_rx,
        }
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut AppModel {
        &mut self.model
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn should_quit(&self) -> bool {
        self.model.ui.should_quit
    }

    /// Snapshot the visible state
    pub fn frame(&self) -> Frame {
        Frame::from_model(&self.model)
    }

    /// Extract current context from the model for keybinding evaluation
    fn key_context(&self) -> KeyContext {
        KeyContext::for_mode(self.model.mode)
    }

    /// Run one key through keymap → update → side effects
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Cmd> {
        let cmd = match self.keymap.handle_key(key, &self.key_context()) {
            KeyAction::Execute(command) => {
                tracing::debug!(key = %key, command = command.display_name(), "key bound");
                self.dispatch_command(command)
            }
            KeyAction::InsertChar(ch) => update(&mut self.model, Msg::insert_char(ch)),
            KeyAction::NoMatch => {
                tracing::debug!(key = %key, mode = %self.model.mode, "key ignored");
                None
            }
        };

        if let Some(ref cmd) = cmd {
            self.process_cmd(cmd.clone());
        }
        self.process_pending_messages();
        cmd
    }

    /// Feed keys until the script ends or a key requests exit
    pub fn run_keys(&mut self, keys: impl IntoIterator<Item = KeyEvent>) {
        for key in keys {
            self.handle_key(key);
            if self.should_quit() {
                break;
            }
        }
    }

    /// Dispatch a command through the update loop
    pub fn dispatch_command(&mut self, command: Command) -> Option<Cmd> {
        let mut result = None;
        for msg in command.to_msgs() {
            result = update(&mut self.model, msg).or(result);
        }
        result
    }

    /// Send a message as if it came from a side effect
    pub fn send(&mut self, msg: Msg) -> Option<Cmd> {
        let cmd = update(&mut self.model, msg);
        if let Some(ref cmd) = cmd {
            self.process_cmd(cmd.clone());
        }
        self.process_pending_messages();
        cmd
    }

    fn process_cmd(&self, cmd: Cmd) {
        match cmd {
            Cmd::Redraw | Cmd::Quit => {}
            Cmd::SaveFile { path, content } => {
                let result = write_text_file(&path, &content).map_err(|e| e.to_string());
                match &result {
                    Ok(()) => tracing::info!(path = %path.display(), "saved"),
                    Err(e) => tracing::warn!(path = %path.display(), error = %e, "save failed"),
                }
                let _ = self.msg_tx.send(Msg::App(AppMsg::SaveCompleted(result)));
            }
            Cmd::LoadFile { path } => {
                let result = read_text_file(&path)
                    .map_err(|e| e.user_message(&filename_for_display(&path)));
                let _ = self.msg_tx.send(Msg::App(AppMsg::FileLoaded { path, result }));
            }
        }
    }

    fn process_pending_messages(&mut self) {
        while let Ok(msg) = self.msg_rx.try_recv() {
            if let Some(cmd) = update(&mut self.model, msg) {
                self.process_cmd(cmd);
            }
        }
    }
}
