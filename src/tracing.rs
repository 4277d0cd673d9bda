//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! cursor, scroll and dispatch state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=cursor=debug,keymap=debug` - scoped filtering
//! - `RUST_LOG=tern::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/tern/logs/tern.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths::LOG_FILE_PREFIX;
use crate::model::Document;

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr so frames printed on stdout stay clean.
/// File logging writes to `~/.config/tern/logs/tern.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Lightweight snapshot of cursor/scroll state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorSnapshot {
    pub line: usize,
    pub column: usize,
    pub top_line: usize,
    pub left_column: usize,
    pub line_count: usize,
    pub modified: bool,
}

impl CursorSnapshot {
    pub fn from_document(doc: &Document) -> Self {
        Self {
            line: doc.cursor.line,
            column: doc.cursor.column,
            top_line: doc.viewport.top_line,
            left_column: doc.viewport.left_column,
            line_count: doc.line_count(),
            modified: doc.is_modified,
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &CursorSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if (self.line, self.column) != (other.line, other.column) {
            changes.push(format!(
                "cursor: ({},{}) → ({},{})",
                self.line, self.column, other.line, other.column
            ));
        }
        if (self.top_line, self.left_column) != (other.top_line, other.left_column) {
            changes.push(format!(
                "scroll: ({},{}) → ({},{})",
                self.top_line, self.left_column, other.top_line, other.left_column
            ));
        }
        if self.line_count != other.line_count {
            changes.push(format!(
                "lines: {} → {}",
                self.line_count, other.line_count
            ));
        }
        if self.modified != other.modified {
            let status = if other.modified { "dirty" } else { "clean" };
            changes.push(format!("buffer {}", status));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
