//! Transient success / error messages raised after each operation.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tracing::{info, warn};
use uuid::Uuid;

const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_millis(6000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            NotificationKind::Success => "Success",
            NotificationKind::Error => "Error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub text: String,
    pub ttl: Duration,
}

impl Notification {
    pub fn success(text: impl Into<String>) -> Self {
        Self::with_ttl(NotificationKind::Success, text, DEFAULT_NOTIFICATION_TTL)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::with_ttl(NotificationKind::Error, text, DEFAULT_NOTIFICATION_TTL)
    }

    pub fn with_ttl(kind: NotificationKind, text: impl Into<String>, ttl: Duration) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            text: text.into(),
            ttl,
        }
    }

    pub fn title(&self) -> &'static str {
        self.kind.title()
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Collects notifications for a caller that renders them later.
#[derive(Debug, Default)]
pub struct NotificationLog {
    entries: Mutex<Vec<Notification>>,
}

impl NotificationLog {
    pub fn snapshot(&self) -> Vec<Notification> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.entries.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn last(&self) -> Option<Notification> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl Notifier for NotificationLog {
    fn notify(&self, notification: Notification) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}

/// Emits notifications as log events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => info!(text = %notification.text, "notification"),
            NotificationKind::Error => warn!(text = %notification.text, "notification"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_keeps_order_and_drains() {
        let log = NotificationLog::default();
        log.notify(Notification::success("saved"));
        log.notify(Notification::error("failed"));

        let last = log.last().expect("last");
        assert!(last.is_error());
        assert_eq!(last.ttl, DEFAULT_NOTIFICATION_TTL);

        let drained = log.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].kind.as_str(), "success");
        assert_eq!(drained[1].title(), "Error");
        assert!(log.snapshot().is_empty());
    }
}
