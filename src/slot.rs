//! A single named slot of persisted JSON state with a default fallback.
//!
//! DESIGN
//! ======
//! `Slot<T>` pairs an in-memory mirror with a write-through persisted copy.
//! The mirror materializes lazily from the backend on first access (falling
//! back to the caller-supplied default), every mutation updates the mirror
//! and persists synchronously before returning, and functional updates run
//! against the latest mirror value under the lock so two same-task mutations
//! never clobber each other. Cloned slots share one mirror, which is what
//! gives every screen the same view of a store without an explicit refresh.
//!
//! ERROR HANDLING
//! ==============
//! Reads never fail: absent or corrupt documents fall back to the default
//! with a logged warning. Persist failures keep the in-memory value and log;
//! the accepted cost is losing that value on reload, never a crash.

use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::storage::StorageBackend;

/// A named, persisted, JSON-serializable value with a default fallback.
pub struct Slot<T> {
    key: &'static str,
    backend: Arc<dyn StorageBackend>,
    mirror: Arc<Mutex<Option<T>>>,
    default_fn: Arc<dyn Fn() -> T + Send + Sync>,
}

// Manual impl: cloning shares the mirror regardless of whether T is Clone.
impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            backend: Arc::clone(&self.backend),
            mirror: Arc::clone(&self.mirror),
            default_fn: Arc::clone(&self.default_fn),
        }
    }
}

impl<T> Slot<T>
where
    T: Clone + Serialize + DeserializeOwned,
{
    pub(crate) fn new(
        backend: Arc<dyn StorageBackend>,
        key: &'static str,
        default_fn: impl Fn() -> T + Send + Sync + 'static,
    ) -> Self {
        Self {
            key,
            backend,
            mirror: Arc::new(Mutex::new(None)),
            default_fn: Arc::new(default_fn),
        }
    }

    /// Key this slot persists under.
    #[must_use]
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Current value. A never-written key yields exactly the default.
    #[must_use]
    pub fn read(&self) -> T {
        let mut guard = self.lock();
        self.materialize(&mut guard).clone()
    }

    /// Replace the value and persist it.
    pub fn write(&self, value: T) {
        let mut guard = self.lock();
        *guard = Some(value);
        if let Some(current) = guard.as_ref() {
            self.persist(current);
        }
    }

    /// Mutate the latest value under the lock, persist, and hand back the
    /// closure's result (callers use it to report old/new state to the UI).
    pub fn update<R>(&self, mutate: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.lock();
        let current = self.materialize(&mut guard);
        let result = mutate(current);
        self.persist(current);
        result
    }

    /// Reset the mirror to the default and drop the persisted document.
    pub fn clear(&self) {
        let mut guard = self.lock();
        *guard = Some((self.default_fn)());
        if let Err(e) = self.backend.remove(self.key) {
            warn!(key = self.key, error = %e, "failed to remove persisted value");
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<T>> {
        self.mirror
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn materialize<'a>(&self, guard: &'a mut MutexGuard<'_, Option<T>>) -> &'a mut T {
        guard.get_or_insert_with(|| self.load_or_default())
    }

    fn load_or_default(&self) -> T {
        match self.backend.load(self.key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(e) => {
                    warn!(key = self.key, error = %e, "corrupt persisted value; using default");
                    (self.default_fn)()
                }
            },
            Ok(None) => (self.default_fn)(),
            Err(e) => {
                warn!(key = self.key, error = %e, "failed to load persisted value; using default");
                (self.default_fn)()
            }
        }
    }

    // Best-effort write-through: in-memory state is already updated when this
    // runs, so failures only cost durability, not correctness.
    fn persist(&self, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => {
                if let Err(e) = self.backend.persist(self.key, &raw) {
                    warn!(key = self.key, error = %e, "persist failed; keeping in-memory state");
                }
            }
            Err(e) => {
                warn!(key = self.key, error = %e, "serialize failed; keeping in-memory state");
            }
        }
    }
}

#[cfg(test)]
#[path = "slot_test.rs"]
mod tests;
