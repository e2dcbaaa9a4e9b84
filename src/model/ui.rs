//! UI state - status line message and user-facing notices

use std::time::{Duration, Instant};

use crate::error::EditorError;

/// Status message with auto-expiry
#[derive(Debug, Clone)]
pub struct TransientMessage {
    /// The message text
    pub text: String,
    /// When this message expires
    pub expires_at: Instant,
}

impl TransientMessage {
    /// Create a new transient message with the given duration
    pub fn new(text: impl Into<String>, duration: Duration) -> Self {
        Self {
            text: text.into(),
            expires_at: Instant::now() + duration,
        }
    }

    /// Check if this message has expired
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// How loudly a notice should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Blocking error dialog; the operation was aborted
    Error,
    /// Non-fatal "incompatible file" overlay
    Incompatible,
}

/// A message the shell must show before anything else
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// UI state - status messages and pending notices
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Message displayed in the status line
    pub status_message: String,
    /// Transient message with auto-expiry, shown instead of `status_message`
    pub transient_message: Option<TransientMessage>,
    /// Pending notice for the shell to present
    pub notice: Option<Notice>,
}

impl UiState {
    /// Create a new UI state with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a UI state with an initial status message
    pub fn with_status(message: impl Into<String>) -> Self {
        Self {
            status_message: message.into(),
            ..Self::default()
        }
    }

    /// Set the status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    pub fn flash(&mut self, message: impl Into<String>, duration: Duration) {
        self.transient_message = Some(TransientMessage::new(message, duration));
    }

    /// Message currently visible in the status line
    pub fn visible_status(&self) -> &str {
        match &self.transient_message {
            Some(msg) if !msg.is_expired() => &msg.text,
            _ => &self.status_message,
        }
    }

    /// Report an editor error. Silent refusals only reach the status line.
    pub fn report(&mut self, err: &EditorError) {
        if err.is_silent() {
            self.set_status(err.user_message());
            return;
        }
        let kind = match err {
            EditorError::Decode { .. } => NoticeKind::Incompatible,
            _ => NoticeKind::Error,
        };
        self.notice = Some(Notice {
            kind,
            text: err.user_message(),
        });
    }

    pub fn show_incompatible(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            kind: NoticeKind::Incompatible,
            text: text.into(),
        });
    }

    /// Hand the pending notice to the shell
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }
}
