//! tern - a small modal, line-numbered text editor engine
//!
//! This crate provides the core types and logic for the editor following the
//! Elm Architecture pattern: key events become commands, commands become
//! messages, `update` applies them to the model and returns side effects.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod tracing;
pub mod update;
pub mod util;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use messages::Msg;
pub use model::{AppModel, Document};
pub use view::Frame;
