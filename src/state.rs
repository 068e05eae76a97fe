//! Shared state hub: every persisted store behind one cloneable handle.
//!
//! DESIGN
//! ======
//! Screens never construct stores themselves. The application builds one
//! `StateHub` at startup and hands clones to whichever screen needs state;
//! a clone shares every underlying slot, so a mutation made on the housing
//! screen is immediately visible to the dashboard, the tab-bar badge, and
//! anything else holding a clone. That shared-handle property is the whole
//! cross-screen consistency story.
//!
//! The hub is a plain struct of domain stores plus the three membership
//! sets, all built over one storage backend. Each store persists under its
//! own key, so resetting or corrupting one document never touches the
//! others.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::ids::IdSet;
use crate::storage::{FileBackend, MemoryBackend, StorageBackend, StorageError};
use crate::stores::app::AppStore;
use crate::stores::budget::BudgetStore;
use crate::stores::checklist::ChecklistStore;
use crate::stores::favorites::FavoriteStore;
use crate::stores::filters::FilterStore;
use crate::stores::messages::MessageStore;
use crate::stores::notifications::NotificationStore;
use crate::stores::profile::ProfileStore;

pub(crate) const SAVED_LISTINGS_KEY: &str = "murge.saved-listings";
pub(crate) const CONNECTIONS_KEY: &str = "murge.connections";
pub(crate) const JOINED_GROUPS_KEY: &str = "murge.joined-groups";

#[derive(Clone)]
pub struct StateHub {
    pub app: AppStore,
    pub profile: ProfileStore,
    pub notifications: NotificationStore,
    pub favorites: FavoriteStore,
    pub filters: FilterStore,
    pub budget: BudgetStore,
    pub checklist: ChecklistStore,
    pub messages: MessageStore,
    pub saved_listings: IdSet,
    pub connections: IdSet,
    pub joined_groups: IdSet,
}

impl StateHub {
    /// Build every store over one backend.
    #[must_use]
    pub fn with_backend(backend: Arc<dyn StorageBackend>) -> Self {
        Self {
            app: AppStore::new(Arc::clone(&backend)),
            profile: ProfileStore::new(Arc::clone(&backend)),
            notifications: NotificationStore::new(Arc::clone(&backend)),
            favorites: FavoriteStore::new(Arc::clone(&backend)),
            filters: FilterStore::new(Arc::clone(&backend)),
            budget: BudgetStore::new(Arc::clone(&backend)),
            checklist: ChecklistStore::new(Arc::clone(&backend)),
            messages: MessageStore::new(Arc::clone(&backend)),
            saved_listings: IdSet::new(Arc::clone(&backend), SAVED_LISTINGS_KEY),
            connections: IdSet::new(Arc::clone(&backend), CONNECTIONS_KEY),
            joined_groups: IdSet::new(backend, JOINED_GROUPS_KEY),
        }
    }

    /// Ephemeral hub for tests and stateless demo runs.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_backend(Arc::new(MemoryBackend::new()))
    }

    /// Hub persisted under `dir`, one JSON document per key.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Directory` if the directory cannot be created.
    pub fn open_dir(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let backend = FileBackend::open(dir)?;
        Ok(Self::with_backend(Arc::new(backend)))
    }

    /// Wipe every store back to first-run defaults, the tour flag included.
    /// This is the fresh-install path; plain logout is
    /// [`AppStore::logout`], which keeps everything but the session flags.
    pub fn reset_all(&self) {
        self.app.reset();
        self.profile.reset();
        self.notifications.reset();
        self.favorites.reset();
        self.filters.reset();
        self.budget.reset();
        self.checklist.reset();
        self.messages.reset();
        self.saved_listings.clear();
        self.connections.clear();
        self.joined_groups.clear();
        info!("persisted state reset to defaults");
    }
}


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
