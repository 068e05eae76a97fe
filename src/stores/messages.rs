//! Workspace channel messages.
//!
//! DESIGN
//! ======
//! One flat sequence holds every channel's messages in arrival order; the
//! workspace screen slices it per channel. Sent messages are appended, never
//! inserted, so a channel view is always a stable prefix plus new tail.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::seed;
use crate::slot::Slot;
use crate::storage::StorageBackend;

use super::notifications::JUST_NOW;

pub(crate) const MESSAGES_KEY: &str = "murge.messages";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelMessage {
    pub id: String,
    pub channel_id: String,
    pub sender: String,
    pub text: String,
    /// Display timestamp as the app renders it.
    pub time: String,
    pub is_self: bool,
}

#[derive(Clone)]
pub struct MessageStore {
    slot: Slot<Vec<ChannelMessage>>,
}

impl MessageStore {
    pub(crate) fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { slot: Slot::new(backend, MESSAGES_KEY, seed::seed_messages) }
    }

    /// Messages for one channel, oldest first.
    #[must_use]
    pub fn for_channel(&self, channel_id: &str) -> Vec<ChannelMessage> {
        self.slot
            .read()
            .into_iter()
            .filter(|m| m.channel_id == channel_id)
            .collect()
    }

    /// Append a freshly stamped message and return it.
    pub fn send(
        &self,
        channel_id: &str,
        sender: &str,
        text: &str,
        is_self: bool,
    ) -> ChannelMessage {
        let message = ChannelMessage {
            id: Uuid::new_v4().to_string(),
            channel_id: channel_id.to_string(),
            sender: sender.to_string(),
            text: text.to_string(),
            time: JUST_NOW.to_string(),
            is_self,
        };
        let result = message.clone();
        self.slot.update(|items| items.push(message));
        result
    }

    /// Distinct channel ids in first-appearance order.
    #[must_use]
    pub fn channels(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for message in self.slot.read() {
            if !seen.contains(&message.channel_id) {
                seen.push(message.channel_id);
            }
        }
        seen
    }

    /// Every message across channels, oldest first.
    #[must_use]
    pub fn list(&self) -> Vec<ChannelMessage> {
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

    pub(crate) fn reset(&self) {
        self.slot.clear();
    }
}

#[cfg(test)]
#[path = "messages_test.rs"]
mod tests;
