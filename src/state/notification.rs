//! Transient notification shown in the status bar

use std::time::{Duration, Instant};

/// How long a notification stays visible without further input
const NOTIFICATION_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient, non-blocking success/failure message
#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    raised_at: Instant,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            message: message.into(),
            raised_at: Instant::now(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            message: message.into(),
            raised_at: Instant::now(),
        }
    }

    /// Whether the display window has elapsed
    pub fn is_expired(&self) -> bool {
        self.raised_at.elapsed() >= NOTIFICATION_TTL
    }
}
