//! Storage backends for persisted state slots.
//!
//! DESIGN
//! ======
//! A backend is a flat, string-keyed map of JSON documents, the same contract
//! a browser localStorage surface gives a web client. `MemoryBackend` keeps
//! documents in a process-local map and is the default for tests and
//! ephemeral sessions; `FileBackend` writes one `<key>.json` document per
//! slot under a state directory so values survive restarts.
//!
//! ERROR HANDLING
//! ==============
//! Backends report failures to the slot layer, which recovers locally:
//! defaults on failed loads, retained in-memory state on failed persists.
//! The only fatal path is `FileBackend::open` failing at startup, before any
//! state exists to lose.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Failure inside a storage backend. Slot reads and writes recover from
/// these; only backend construction surfaces them to callers.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("state directory {path} unavailable: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("storage io for key `{key}`: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

/// A named-document persistence surface.
///
/// Keys are opaque strings chosen by the slot layer; values are the
/// JSON-encoded document for that key.
pub trait StorageBackend: Send + Sync {
    /// Load the raw document for `key`. Returns `Ok(None)` when the key has
    /// never been written.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the document exists but cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Persist the raw document for `key`, replacing any previous document.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the document cannot be written.
    fn persist(&self, key: &str, raw: &str) -> Result<(), StorageError>;

    /// Remove the document for `key`. Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the document exists but cannot be removed.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

// =============================================================================
// MEMORY BACKEND
// =============================================================================

/// In-process backend. Nothing survives the process; reads and writes cannot
/// fail.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock().get(key).cloned())
    }

    fn persist(&self, key: &str, raw: &str) -> Result<(), StorageError> {
        self.lock().insert(key.to_string(), raw.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.lock().remove(key);
        Ok(())
    }
}

// =============================================================================
// FILE BACKEND
// =============================================================================

/// Directory-of-documents backend: one `<key>.json` file per slot.
///
/// Writes go through a sibling temp file and a rename so a crash mid-write
/// leaves the previous document intact rather than a truncated one.
#[derive(Debug)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Open (creating if needed) the state directory.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Directory` if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .map_err(|source| StorageError::Directory { path: dir.clone(), source })?;
        Ok(Self { dir })
    }

    /// Directory this backend stores documents under.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn document_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", sanitize_key(key)))
    }
}

impl StorageBackend for FileBackend {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.document_path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { key: key.to_string(), source }),
        }
    }

    fn persist(&self, key: &str, raw: &str) -> Result<(), StorageError> {
        let path = self.document_path(key);
        let tmp = path.with_extension("json.tmp");
        let io_err = |source| StorageError::Io { key: key.to_string(), source };

        fs::write(&tmp, raw).map_err(io_err)?;
        fs::rename(&tmp, &path).map_err(io_err)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.document_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io { key: key.to_string(), source }),
        }
    }
}

/// Map a slot key to a safe file stem. Keys are dotted lowercase names; this
/// only guards against separators showing up in a future key.
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| match c {
            c if c.is_ascii_alphanumeric() => c,
            '.' | '-' | '_' => c,
            _ => '-',
        })
        .collect()
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
