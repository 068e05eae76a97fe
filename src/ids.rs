//! Identifier-set stores: saved listings, connections, joined groups.
//!
//! DESIGN
//! ======
//! Membership domains persist as an ordered sequence of string ids (the
//! on-disk shape the app has always used) while the operations behave as a
//! mathematical set: add rebuilds the deduplicated union, remove filters,
//! and both report whether anything actually changed so callers can decide
//! whether to toast.

use std::collections::HashSet;
use std::sync::Arc;

use crate::slot::Slot;
use crate::storage::StorageBackend;

/// A persisted, deduplicated set of opaque string identifiers.
#[derive(Clone)]
pub struct IdSet {
    slot: Slot<Vec<String>>,
}

impl IdSet {
    pub(crate) fn new(backend: Arc<dyn StorageBackend>, key: &'static str) -> Self {
        Self { slot: Slot::new(backend, key, Vec::new) }
    }

    /// Key this set persists under.
    #[must_use]
    pub fn key(&self) -> &'static str {
        self.slot.key()
    }

    /// Add `id`, deduplicating the stored sequence. Returns `false` when the
    /// id was already a member (idempotent no-op).
    pub fn add(&self, id: &str) -> bool {
        self.slot.update(|ids| {
            let mut seen = HashSet::new();
            ids.retain(|existing| seen.insert(existing.clone()));
            if seen.contains(id) {
                false
            } else {
                ids.push(id.to_string());
                true
            }
        })
    }

    /// Remove `id`. Returns `false` when it was not a member.
    pub fn remove(&self, id: &str) -> bool {
        self.slot.update(|ids| {
            let before = ids.len();
            ids.retain(|existing| existing != id);
            ids.len() != before
        })
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.slot.read().iter().any(|existing| existing == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slot.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slot.read().is_empty()
    }

    /// Stored sequence in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<String> {
        self.slot.read()
    }

    /// Set view for O(1) membership tests over many lookups.
    #[must_use]
    pub fn as_set(&self) -> HashSet<String> {
        self.slot.read().into_iter().collect()
    }

    /// Drop every member and the persisted document.
    pub fn clear(&self) {
        self.slot.clear();
    }
}

#[cfg(test)]
#[path = "ids_test.rs"]
mod tests;
