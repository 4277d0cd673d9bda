//! Editor configuration
//!
//! User preferences are read from `~/.config/tern/config.yaml`

use std::path::Path;

use serde::Deserialize;

/// Editor configuration loaded at startup
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EditorConfig {
    /// Number lines relative to the cursor line instead of absolutely
    #[serde(default)]
    pub relative_line_numbers: bool,
    /// Columns available to the text area, gutter included
    #[serde(default = "default_viewport_width")]
    pub viewport_width: usize,
    /// Rows available to the text area, status row included
    #[serde(default = "default_viewport_height")]
    pub viewport_height: usize,
}

fn default_viewport_width() -> usize {
    80
}

fn default_viewport_height() -> usize {
    24
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            relative_line_numbers: false,
            viewport_width: default_viewport_width(),
            viewport_height: default_viewport_height(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::parse(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse config YAML; an empty document yields defaults
    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}
