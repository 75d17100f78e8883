//! Notification fan-out: log every toast and publish it to live subscribers.

use frn_console_core::{Notification, NotificationSink, TracingNotifier};
use tokio::sync::broadcast;
use uuid::Uuid;

/// Notification tagged with the session that raised it, if any.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ConsoleEvent {
    pub session_id: Option<Uuid>,
    #[serde(flatten)]
    pub notification: Notification,
}

/// Publishes notifications on a broadcast channel (the SSE stream subscribes)
/// and mirrors them to the log.
#[derive(Debug, Clone)]
pub struct BroadcastNotifier {
    tx: broadcast::Sender<ConsoleEvent>,
    log: TracingNotifier,
}

impl BroadcastNotifier {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        // Initial receiver dropped - subscribers use subscribe()
        let (tx, _initial_rx) = broadcast::channel(capacity.max(1));
        Self { tx, log: TracingNotifier }
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ConsoleEvent> {
        self.tx.subscribe()
    }

    pub fn publish(&self, session_id: Option<Uuid>, notification: &Notification) {
        self.log.notify(notification);
        // No subscribers is the common case, not an error.
        let _ = self
            .tx
            .send(ConsoleEvent { session_id, notification: notification.clone() });
    }
}

impl NotificationSink for BroadcastNotifier {
    fn notify(&self, notification: &Notification) {
        self.publish(None, notification);
    }
}
