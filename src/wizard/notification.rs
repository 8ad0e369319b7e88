//! Transient user notifications
//!
//! The wizard hands notifications to a [`NotificationSink`] and forgets about
//! them. Nothing in the wizard's state depends on whether they are shown.

use std::time::Duration;

/// Icon shown with the skip notification
pub const SKIP_ICON: &str = "👁";
/// Icon shown with success notifications that have no specific icon
pub const SUCCESS_ICON: &str = "✓";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub duration: Duration,
    pub icon: &'static str,
}

impl Notification {
    pub fn success(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
            duration,
            icon: SUCCESS_ICON,
        }
    }

    pub fn with_icon(mut self, icon: &'static str) -> Self {
        self.icon = icon;
        self
    }
}

/// Fire-and-forget presenter for notifications
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

impl NotificationSink for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}
