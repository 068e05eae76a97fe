//! Notification inbox store.
//!
//! DESIGN
//! ======
//! The inbox is a newest-first sequence. The unread badge shown on the tab
//! bar and dashboard is always derived from the sequence at read time, never
//! stored next to it, so the two cannot drift apart. Mutations aimed at ids
//! that no longer exist are silent no-ops: dismissing a notification twice
//! from two screens should never surface an error.

use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::seed;
use crate::slot::Slot;
use crate::storage::StorageBackend;

pub(crate) const NOTIFICATIONS_KEY: &str = "murge.notifications";

/// Display timestamp stamped on freshly created entries.
pub const JUST_NOW: &str = "Just now";

/// Source surface a notification points back at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Connection,
    Housing,
    Message,
    System,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    /// Display timestamp as the app renders it ("Just now", "2m ago", ...).
    pub time: String,
    pub read: bool,
    /// Route the notification opens when tapped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_url: Option<String>,
}

/// Payload for [`NotificationStore::add`]; id, time, and read state are
/// generated by the store.
#[derive(Clone, Debug)]
pub struct NewNotification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    pub action_url: Option<String>,
}

#[derive(Clone)]
pub struct NotificationStore {
    slot: Slot<Vec<Notification>>,
}

impl NotificationStore {
    pub(crate) fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { slot: Slot::new(backend, NOTIFICATIONS_KEY, seed::default_notifications) }
    }

    /// Prepend a freshly stamped notification and return it.
    pub fn add(&self, new: NewNotification) -> Notification {
        let notification = Notification {
            id: fresh_id(),
            kind: new.kind,
            title: new.title,
            description: new.description,
            time: JUST_NOW.to_string(),
            read: false,
            action_url: new.action_url,
        };
        let result = notification.clone();
        self.slot.update(|items| items.insert(0, notification));
        result
    }

    /// Mark one notification read. Returns `false` when the id is unknown or
    /// the entry was already read.
    pub fn mark_read(&self, id: &str) -> bool {
        self.slot.update(|items| match items.iter_mut().find(|n| n.id == id) {
            Some(n) if !n.read => {
                n.read = true;
                true
            }
            _ => false,
        })
    }

    /// Mark every notification read. Returns how many flipped; calling again
    /// immediately returns 0.
    pub fn mark_all_read(&self) -> usize {
        self.slot.update(|items| {
            let mut flipped = 0;
            for n in items.iter_mut().filter(|n| !n.read) {
                n.read = true;
                flipped += 1;
            }
            flipped
        })
    }

    /// Remove one notification entirely. Unknown ids are a no-op.
    pub fn dismiss(&self, id: &str) -> bool {
        self.slot.update(|items| {
            let before = items.len();
            items.retain(|n| n.id != id);
            items.len() != before
        })
    }

    /// Newest-first view of the inbox.
    #[must_use]
    pub fn list(&self) -> Vec<Notification> {
        self.slot.read()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slot.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slot.read().is_empty()
    }

    /// Count of unread entries, recomputed from the collection on every call.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.slot.read().iter().filter(|n| !n.read).count()
    }

    pub(crate) fn reset(&self) {
        self.slot.clear();
    }
}

/// Fresh notification id: creation time plus a random suffix so two
/// notifications landing in the same millisecond stay distinct.
fn fresh_id() -> String {
    let suffix: u16 = rand::rng().random();
    format!("{}-{suffix:04x}", crate::now_ms())
}

#[cfg(test)]
#[path = "notifications_test.rs"]
mod tests;
