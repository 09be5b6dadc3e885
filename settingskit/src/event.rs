//! Change and validation notifications.
//!
//! Every successful write publishes one [`SettingsEvent::Changed`]; error-set
//! inserts and removals publish [`SettingsEvent::ErrorAdded`] and
//! [`SettingsEvent::ErrorRemoved`]. Each subscriber owns an unbounded queue and
//! drains it on its own thread with `try_recv`, no async runtime involved.
//! Nothing is dropped for a slow subscriber.

use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::trace;

use crate::ErrorEntry;

/// A notification about one settings key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SettingsEvent {
    /// A value was stored.
    Changed { key: String },
    /// A validation message was recorded.
    ErrorAdded { key: String, message: String },
    /// A validation message was cleared.
    ErrorRemoved { key: String, message: String },
}

impl SettingsEvent {
    pub fn changed(key: impl Into<String>) -> Self {
        SettingsEvent::Changed { key: key.into() }
    }

    pub fn key(&self) -> &str {
        match self {
            SettingsEvent::Changed { key }
            | SettingsEvent::ErrorAdded { key, .. }
            | SettingsEvent::ErrorRemoved { key, .. } => key,
        }
    }

    pub fn is_change(&self) -> bool {
        matches!(self, SettingsEvent::Changed { .. })
    }

    pub(crate) fn error_added(entry: &ErrorEntry) -> Self {
        SettingsEvent::ErrorAdded {
            key: entry.key.clone(),
            message: entry.message.clone(),
        }
    }

    pub(crate) fn error_removed(entry: ErrorEntry) -> Self {
        SettingsEvent::ErrorRemoved {
            key: entry.key,
            message: entry.message,
        }
    }
}

/// Publishing half of the notification channel: one sender per subscriber.
#[derive(Debug, Default)]
pub(crate) struct EventBus {
    subscribers: Mutex<Vec<mpsc::UnboundedSender<SettingsEvent>>>,
}

impl EventBus {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn subscribe(&self) -> mpsc::UnboundedReceiver<SettingsEvent> {
        let (sender, receiver) = mpsc::unbounded_channel();
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(sender);
        receiver
    }

    pub(crate) fn publish(&self, event: SettingsEvent) {
        let mut subscribers = self.subscribers.lock().unwrap_or_else(PoisonError::into_inner);
        if subscribers.is_empty() {
            trace!(key = %event.key(), "no subscribers for settings event");
            return;
        }
        // a failed send means the receiver was dropped
        subscribers.retain(|sender| sender.send(event.clone()).is_ok());
        trace!(receivers = subscribers.len(), "published settings event");
    }

    #[cfg(test)]
    fn subscriber_count(&self) -> usize {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
