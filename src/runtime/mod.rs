//! Runtime module - drives the update loop without a window
//!
//! - `app` - owns the model and keymap, executes side effects
//! - `input` - key script parsing

pub mod app;
pub mod input;

pub use app::App;
pub use input::parse_key_script;
