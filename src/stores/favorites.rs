//! Favorites store: saved housing listings, people, and places.
//!
//! DESIGN
//! ======
//! One collection holds favorites of every kind; screens slice it with
//! [`FavoriteStore::of_kind`]. Membership is a compound check on title and
//! kind because a person and a place can legitimately share a title, so
//! title alone is not a key. Removal is by id, which only the favorites
//! screen holds.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::slot::Slot;
use crate::storage::StorageBackend;

pub(crate) const FAVORITES_KEY: &str = "murge.favorites";

/// Which surface a favorite came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteKind {
    Housing,
    Person,
    Place,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: FavoriteKind,
    pub title: String,
    pub subtitle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Epoch milliseconds at save time.
    pub added_at: i64,
}

/// Payload for [`FavoriteStore::add`]; id and timestamp are generated by the
/// store.
#[derive(Clone, Debug)]
pub struct NewFavorite {
    pub kind: FavoriteKind,
    pub title: String,
    pub subtitle: String,
    pub image: Option<String>,
}

#[derive(Clone)]
pub struct FavoriteStore {
    slot: Slot<Vec<Favorite>>,
}

impl FavoriteStore {
    pub(crate) fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { slot: Slot::new(backend, FAVORITES_KEY, Vec::new) }
    }

    /// Append a freshly stamped favorite and return it.
    pub fn add(&self, new: NewFavorite) -> Favorite {
        let favorite = Favorite {
            id: Uuid::new_v4().to_string(),
            kind: new.kind,
            title: new.title,
            subtitle: new.subtitle,
            image: new.image,
            added_at: crate::now_ms(),
        };
        let result = favorite.clone();
        self.slot.update(|items| items.push(favorite));
        result
    }

    /// Remove by id. Unknown ids are a no-op.
    pub fn remove(&self, id: &str) -> bool {
        self.slot.update(|items| {
            let before = items.len();
            items.retain(|f| f.id != id);
            items.len() != before
        })
    }

    /// Exact compound membership test on title and kind together.
    #[must_use]
    pub fn is_favorite(&self, title: &str, kind: FavoriteKind) -> bool {
        self.slot
            .read()
            .iter()
            .any(|f| f.kind == kind && f.title == title)
    }

    /// Favorites of one kind, in insertion order.
    #[must_use]
    pub fn of_kind(&self, kind: FavoriteKind) -> Vec<Favorite> {
        self.slot
            .read()
            .into_iter()
            .filter(|f| f.kind == kind)
            .collect()
    }

    /// Every favorite, in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<Favorite> {
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
#[path = "favorites_test.rs"]
mod tests;
