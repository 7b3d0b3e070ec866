//! Notification model
//!
//! Used for transient feedback messages (load warnings, filter resets, etc.)

use std::time::{Duration, Instant};

/// How long a notification stays on screen
const TTL: Duration = Duration::from_secs(5);

/// Kind of notification (determines color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Info - informational message (cyan)
    Info,
    /// Warning - something was dropped or looks off (yellow)
    Warning,
}

/// A notification to display to the user
#[derive(Debug, Clone)]
pub struct Notification {
    /// The message to display
    pub message: String,
    /// Kind of notification
    pub kind: NotificationKind,
    /// When the notification was created
    pub created_at: Instant,
}

impl Notification {
    /// Create a new notification
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    /// Create an info notification
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    /// Create a warning notification
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Warning)
    }

    /// Check if the notification has outlived its display window
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= TTL
    }
}
