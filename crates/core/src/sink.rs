//! Narrow interfaces to the collaborators the console only talks to:
//! transient notifications (toasts) and the clipboard.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient message surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    #[must_use]
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into(), created_at: Utc::now() }
    }
}

/// Fire-and-forget notification delivery. Implementations must not fail.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: &Notification);
}

/// Writes notifications to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl NotificationSink for TracingNotifier {
    fn notify(&self, notification: &Notification) {
        match notification.kind {
            NotificationKind::Success => tracing::info!(message = %notification.message, "notify"),
            NotificationKind::Error => tracing::warn!(message = %notification.message, "notify"),
        }
    }
}

/// Best-effort text clipboard.
#[async_trait]
pub trait ClipboardSink: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<()>;
}

/// Clipboard kept in process memory; the console page copies from it.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last text written, if any.
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|guard| guard.clone())
    }
}

#[async_trait]
impl ClipboardSink for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        let mut guard = self
            .contents
            .lock()
            .map_err(|e| CoreError::Clipboard(format!("clipboard lock poisoned: {e}")))?;
        *guard = Some(text.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_clipboard_keeps_last_write() {
        let clipboard = MemoryClipboard::new();
        assert_eq!(clipboard.contents(), None);
        clipboard.write_text("first").await.unwrap();
        clipboard.write_text("/api/hello?name=").await.unwrap();
        assert_eq!(clipboard.contents().as_deref(), Some("/api/hello?name="));
    }

    #[test]
    fn notification_kind_serializes_lowercase() {
        let n = Notification::new(NotificationKind::Error, "API request failed!");
        let value = serde_json::to_value(&n).unwrap();
        assert_eq!(value["kind"], "error");
        assert_eq!(value["message"], "API request failed!");
    }
}
