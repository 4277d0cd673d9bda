//! Default keybindings for the editor
//!
//! These are the standard keybindings that ship with the editor.
//! Loaded from the embedded keymap.yaml, or falls back to hardcoded defaults.

use std::path::Path;

use super::binding::Keybinding;
use super::command::Command;
use super::config::{load_keymap_file, parse_keymap_yaml};
use super::context::Condition;
use super::types::{KeyEvent, NamedKey};

/// Default keymap YAML embedded at compile time
const DEFAULT_KEYMAP_YAML: &str = include_str!("../../keymap.yaml");

/// Get the embedded default keymap YAML
pub fn get_default_keymap_yaml() -> &'static str {
    DEFAULT_KEYMAP_YAML
}

/// Load and merge keymaps: defaults + user overrides
///
/// Loading order (each layer overrides the previous):
/// 1. Embedded default keymap (compiled into binary)
/// 2. keymap.yaml in current directory (project-local overrides)
/// 3. User config at ~/.config/tern/keymap.yaml
///
/// Bindings with `command: Unbound` remove matching bindings from earlier layers.
pub fn load_default_keymap() -> Vec<Keybinding> {
    let mut bindings = match parse_keymap_yaml(DEFAULT_KEYMAP_YAML) {
        Ok(b) => {
            tracing::info!("Loaded embedded default keymap ({} bindings)", b.len());
            b
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse embedded keymap: {}, using hardcoded defaults",
                e
            );
            default_bindings()
        }
    };

    let local_path = Path::new("keymap.yaml");
    if local_path.exists() {
        bindings = merge_layer(bindings, local_path, "project");
    }

    if let Some(user_path) = crate::config_paths::keymap_file() {
        if user_path.exists() {
            bindings = merge_layer(bindings, &user_path, "user");
        }
    }

    bindings
}

/// Merge one keymap file over `bindings`, skipping the layer if it fails to load
fn merge_layer(bindings: Vec<Keybinding>, path: &Path, layer: &str) -> Vec<Keybinding> {
    match load_keymap_file(path) {
        Ok(layer_bindings) => {
            tracing::info!(
                "Merging {} keymap from {} ({} bindings)",
                layer,
                path.display(),
                layer_bindings.len()
            );
            merge_bindings(bindings, layer_bindings)
        }
        Err(e) => {
            tracing::warn!(
                "Failed to load {} keymap from {}: {}",
                layer,
                path.display(),
                e
            );
            bindings
        }
    }
}

/// Merge user bindings into base bindings
///
/// User bindings override or extend base bindings:
/// - If user binding has same key + conditions → replaces base
/// - If user binding command is `Unbound` → removes matching base bindings
/// - Otherwise → user binding is added
pub fn merge_bindings(base: Vec<Keybinding>, user: Vec<Keybinding>) -> Vec<Keybinding> {
    let mut result = base;

    for user_binding in user {
        // Handle Unbound: remove any matching base bindings
        if user_binding.command == Command::Unbound {
            result.retain(|b| b.key != user_binding.key);
            continue;
        }

        let existing_idx = result
            .iter()
            .position(|b| b.key == user_binding.key && b.when == user_binding.when);

        if let Some(idx) = existing_idx {
            result[idx] = user_binding;
        } else {
            result.push(user_binding);
        }
    }

    result
}

/// Hardcoded default keybindings, mirroring keymap.yaml
pub fn default_bindings() -> Vec<Keybinding> {
    let normal = Condition::NormalMode;
    let insert = Condition::InsertMode;

    vec![
        // ====================================================================
        // Normal mode navigation (IJKL layout)
        // ====================================================================
        bind(KeyEvent::Char('j'), Command::MoveCursorLeft).when_single(normal),
        bind(KeyEvent::Char('l'), Command::MoveCursorRight).when_single(normal),
        bind(KeyEvent::Char('i'), Command::MoveCursorUp).when_single(normal),
        bind(KeyEvent::Char('k'), Command::MoveCursorDown).when_single(normal),
        bind(KeyEvent::Char('J'), Command::MoveCursorWordLeft).when_single(normal),
        bind(KeyEvent::Char('L'), Command::MoveCursorWordRight).when_single(normal),
        bind(KeyEvent::Char('I'), Command::HalfPageUp).when_single(normal),
        bind(KeyEvent::Char('K'), Command::HalfPageDown).when_single(normal),
        bind(KeyEvent::ctrl('j'), Command::MoveCursorBigWordLeft).when_single(normal),
        bind(KeyEvent::ctrl('l'), Command::MoveCursorBigWordRight).when_single(normal),
        bind(KeyEvent::ctrl('i'), Command::PageUp).when_single(normal),
        bind(KeyEvent::ctrl('k'), Command::PageDown).when_single(normal),

        // ====================================================================
        // Modes
        // ====================================================================
        bind(KeyEvent::Char(' '), Command::EnterInsertMode).when_single(normal),
        bind(NamedKey::Escape.into(), Command::EnterNormalMode).when_single(insert),

        // ====================================================================
        // Navigation keys (all modes)
        // ====================================================================
        bind(NamedKey::Up.into(), Command::MoveCursorUp),
        bind(NamedKey::Down.into(), Command::MoveCursorDown),
        bind(NamedKey::Left.into(), Command::MoveCursorLeft),
        bind(NamedKey::Right.into(), Command::MoveCursorRight),
        bind(NamedKey::Home.into(), Command::MoveCursorLineStart),
        bind(NamedKey::End.into(), Command::MoveCursorLineEnd),
        bind(NamedKey::PageUp.into(), Command::PageUp),
        bind(NamedKey::PageDown.into(), Command::PageDown),

        // ====================================================================
        // Editing
        // ====================================================================
        bind(NamedKey::Enter.into(), Command::InsertNewline).when_single(insert),
        bind(NamedKey::Backspace.into(), Command::DeleteBackward),
        bind(NamedKey::Delete.into(), Command::DeleteForward),

        // ====================================================================
        // File and application
        // ====================================================================
        bind(KeyEvent::ctrl('s'), Command::SaveFile),
        bind(KeyEvent::ctrl('c'), Command::Quit),
    ]
}

/// Helper to create a keybinding
fn bind(key: KeyEvent, command: Command) -> Keybinding {
    Keybinding::new(key, command)
}
