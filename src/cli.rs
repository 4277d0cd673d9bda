//! Command-line argument parsing for the editor
//!
//! Supports:
//! - Opening a file, or naming one that does not exist yet
//! - Jump to line/column
//! - Replaying a key script headlessly
//! - Text or JSON output of the final frame

use clap::Parser;
use std::path::PathBuf;

/// A small modal, line-numbered text editor
#[derive(Parser, Debug)]
#[command(name = "tern", version, about = "A small modal, line-numbered text editor")]
pub struct CliArgs {
    /// File to open (created on first save if missing)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Keys to replay, e.g. " hello<Esc><C-s>"
    #[arg(short = 'k', long, value_name = "SCRIPT")]
    pub keys: Option<String>,

    /// Go to line N
    #[arg(long, value_name = "N")]
    pub line: Option<usize>,

    /// Go to column N (used with --line)
    #[arg(long, value_name = "N")]
    pub column: Option<usize>,

    /// Viewport width in columns (overrides config)
    #[arg(long, value_name = "W")]
    pub width: Option<usize>,

    /// Viewport height in rows (overrides config)
    #[arg(long, value_name = "H")]
    pub height: Option<usize>,

    /// Print the final frame as JSON
    #[arg(long)]
    pub json: bool,
}

/// Output format for the final frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// File to open, if any
    pub path: Option<PathBuf>,
    /// Initial cursor position (line, column) - 1-indexed from user, converted to 0-indexed
    pub initial_position: Option<(usize, usize)>,
    /// Viewport override as (width, height); missing halves come from config
    pub viewport: (Option<usize>, Option<usize>),
    /// Key script to replay
    pub keys: String,
    pub output: OutputFormat,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        if self.column.is_some() && self.line.is_none() {
            return Err("--column requires --line".to_string());
        }
        if self.width == Some(0) || self.height == Some(0) {
            return Err("Viewport dimensions must be positive".to_string());
        }

        // Convert from 1-indexed (user input) to 0-indexed (internal)
        let initial_position = self.line.map(|line| {
            let line_0 = line.saturating_sub(1);
            let col_0 = self.column.unwrap_or(1).saturating_sub(1);
            (line_0, col_0)
        });

        Ok(StartupConfig {
            path: self.path,
            initial_position,
            viewport: (self.width, self.height),
            keys: self.keys.unwrap_or_default(),
            output: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
        })
    }
}
