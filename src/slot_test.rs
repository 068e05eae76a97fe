use std::sync::Arc;

use super::*;
use crate::storage::{MemoryBackend, StorageError};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
struct Prefs {
    theme: String,
    panel: Panel,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
struct Panel {
    width: f64,
    open: bool,
}

fn default_prefs() -> Prefs {
    Prefs { theme: "dusk".into(), panel: Panel { width: 320.0, open: true } }
}

fn prefs_slot(backend: &Arc<MemoryBackend>) -> Slot<Prefs> {
    Slot::new(
        Arc::clone(backend) as Arc<dyn StorageBackend>,
        "murge.test-prefs",
        default_prefs,
    )
}

#[test]
fn never_written_key_returns_exact_default() {
    let backend = Arc::new(MemoryBackend::new());
    let slot = prefs_slot(&backend);
    assert_eq!(slot.read(), default_prefs());
}

#[test]
fn read_does_not_write_the_default_back() {
    let backend = Arc::new(MemoryBackend::new());
    let slot = prefs_slot(&backend);
    let _ = slot.read();
    assert!(backend.load("murge.test-prefs").unwrap().is_none());
}

#[test]
fn write_then_read_round_trips_deeply() {
    let backend = Arc::new(MemoryBackend::new());
    let slot = prefs_slot(&backend);
    let value = Prefs { theme: "dawn".into(), panel: Panel { width: 480.5, open: false } };
    slot.write(value.clone());
    assert_eq!(slot.read(), value);
}

#[test]
fn update_runs_against_latest_value() {
    let backend = Arc::new(MemoryBackend::new());
    let slot = prefs_slot(&backend);
    slot.update(|prefs| prefs.panel.width += 10.0);
    slot.update(|prefs| prefs.panel.width += 10.0);
    assert!((slot.read().panel.width - 340.0).abs() < f64::EPSILON);
}

#[test]
fn update_returns_closure_result() {
    let backend = Arc::new(MemoryBackend::new());
    let slot = prefs_slot(&backend);
    let old_theme = slot.update(|prefs| {
        let old = prefs.theme.clone();
        prefs.theme = "noon".into();
        old
    });
    assert_eq!(old_theme, "dusk");
    assert_eq!(slot.read().theme, "noon");
}

#[test]
fn clear_resets_mirror_and_removes_document() {
    let backend = Arc::new(MemoryBackend::new());
    let slot = prefs_slot(&backend);
    slot.update(|prefs| prefs.theme = "noon".into());
    slot.clear();
    assert_eq!(slot.read(), default_prefs());
    assert!(backend.load("murge.test-prefs").unwrap().is_none());
}

#[test]
fn corrupt_document_falls_back_to_default() {
    let backend = Arc::new(MemoryBackend::new());
    backend.persist("murge.test-prefs", "{not json").unwrap();
    let slot = prefs_slot(&backend);
    assert_eq!(slot.read(), default_prefs());
}

#[test]
fn values_survive_a_fresh_slot_on_the_same_backend() {
    let backend = Arc::new(MemoryBackend::new());
    let slot = prefs_slot(&backend);
    slot.update(|prefs| prefs.theme = "noon".into());

    let reloaded = prefs_slot(&backend);
    assert_eq!(reloaded.read().theme, "noon");
}

#[test]
fn clones_share_one_mirror() {
    let backend = Arc::new(MemoryBackend::new());
    let slot = prefs_slot(&backend);
    let other_screen = slot.clone();

    other_screen.update(|prefs| prefs.panel.open = false);
    assert!(!slot.read().panel.open);
}

// Backend that accepts nothing: exercises best-effort write-through.
struct RejectingBackend;

impl StorageBackend for RejectingBackend {
    fn load(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn persist(&self, key: &str, _raw: &str) -> Result<(), StorageError> {
        Err(StorageError::Io {
            key: key.to_string(),
            source: std::io::Error::other("storage disabled"),
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Err(StorageError::Io {
            key: key.to_string(),
            source: std::io::Error::other("storage disabled"),
        })
    }
}

#[test]
fn persist_failure_still_updates_in_memory_state() {
    let slot: Slot<Prefs> =
        Slot::new(Arc::new(RejectingBackend), "murge.test-prefs", default_prefs);
    slot.update(|prefs| prefs.theme = "noon".into());
    assert_eq!(slot.read().theme, "noon");
}

#[test]
fn clear_failure_still_resets_in_memory_state() {
    let slot: Slot<Prefs> =
        Slot::new(Arc::new(RejectingBackend), "murge.test-prefs", default_prefs);
    slot.update(|prefs| prefs.theme = "noon".into());
    slot.clear();
    assert_eq!(slot.read(), default_prefs());
}
