//! Configurable keyboard mapping system
//!
//! This module provides a data-driven keybinding system that:
//! - Maps classified key events to editor commands
//! - Restricts bindings to a mode with `when` conditions
//! - Falls back to inserting printable characters in insert mode
//! - Enables user customization via YAML config files
//!
//! # Architecture
//!
//! ```text
//! KeyEvent → Keymap::handle_key(ctx) → KeyAction → Command → Vec<Msg>
//! ```
//!
//! # Loading Keymaps
//!
//! ```ignore
//! // Embedded defaults merged with project and user overrides
//! let keymap = Keymap::with_bindings(load_default_keymap());
//!
//! // Or a single YAML file
//! let keymap = Keymap::with_bindings(load_keymap_file(Path::new("keymap.yaml"))?);
//! ```

mod binding;
mod command;
mod config;
mod context;
mod defaults;
#[allow(clippy::module_inception)]
mod keymap;
mod types;

pub use binding::Keybinding;
pub use command::Command;
pub use config::{load_keymap_file, parse_key_string, parse_keymap_yaml, KeymapError};
pub use context::{Condition, KeyContext};
pub use defaults::{
    default_bindings, get_default_keymap_yaml, load_default_keymap, merge_bindings,
};
pub use keymap::{KeyAction, Keymap};
pub use types::{KeyEvent, NamedKey};
