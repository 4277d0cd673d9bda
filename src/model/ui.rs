//! UI state - status line and quit flag

/// UI state that lives outside the document
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Status message displayed in the status line
    pub status_message: String,
    /// Set once a quit has been requested
    pub should_quit: bool,
}

impl UiState {
    pub fn with_status(message: impl Into<String>) -> Self {
        Self {
            status_message: message.into(),
            ..Self::default()
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }
}
