// Console view state.
// In-session activity log for fetch outcomes, with an unread-error badge.

use chrono::{DateTime, Utc};
use ratatui::widgets::ListState;

/// Console message level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    Info,
    Warn,
    Error,
}

/// A console message for the activity log.
#[derive(Debug, Clone)]
pub struct ConsoleMessage {
    pub level: ConsoleLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ConsoleMessage {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: ConsoleLevel::Info,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self {
            level: ConsoleLevel::Warn,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ConsoleLevel::Error,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Complete state for the console view.
#[derive(Debug, Default)]
pub struct ConsoleState {
    /// Activity log, oldest first.
    pub messages: Vec<ConsoleMessage>,
    /// List state for message scrolling.
    pub list_state: ListState,
    /// Errors logged since the console was last viewed (for the tab badge).
    pub unread_errors: usize,
}

impl ConsoleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an info message.
    pub fn log_info(&mut self, message: impl Into<String>) {
        self.messages.push(ConsoleMessage::info(message));
        self.scroll_to_bottom();
    }

    /// Add a warning message.
    pub fn log_warn(&mut self, message: impl Into<String>) {
        self.messages.push(ConsoleMessage::warn(message));
        self.scroll_to_bottom();
    }

    /// Add an error message and bump the unread badge.
    pub fn log_error(&mut self, message: impl Into<String>) {
        self.messages.push(ConsoleMessage::error(message));
        self.unread_errors += 1;
        self.scroll_to_bottom();
    }

    /// Clear the unread badge. Called when the console view is shown.
    pub fn mark_viewed(&mut self) {
        self.unread_errors = 0;
    }

    /// Scroll the message list to the newest entry.
    fn scroll_to_bottom(&mut self) {
        if !self.messages.is_empty() {
            self.list_state.select(Some(self.messages.len() - 1));
        }
    }

    /// Select the previous message in the list.
    pub fn select_prev(&mut self) {
        if self.messages.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => self.messages.len() - 1,
        };
        self.list_state.select(Some(i));
    }

    /// Select the next message in the list.
    pub fn select_next(&mut self) {
        if self.messages.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < self.messages.len() => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.list_state.select(Some(i));
    }
}
