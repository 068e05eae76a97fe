//! Local persisted state layer for the Murge relocation assistant.
//!
//! This crate owns everything the app remembers between sessions: typed
//! domain stores (notifications, favorites, profile, filters, budget,
//! checklist, messages, membership sets) layered over a generic keyed slot
//! with write-through JSON persistence. Derived values such as the unread
//! badge, the points level, and the budget totals are recomputed from their
//! source collections on every read, never stored beside them.
//!
//! Screens hold clones of one [`StateHub`]; clones share every underlying
//! slot, which is what keeps the dashboard, the tab bar, and the detail
//! screens in agreement without an explicit refresh step.

use std::time::{SystemTime, UNIX_EPOCH};

pub mod assistant;
pub mod ids;
pub mod pacing;
mod seed;
pub mod slot;
pub mod state;
pub mod storage;
pub mod stores;

pub use state::StateHub;
pub use storage::{FileBackend, MemoryBackend, StorageBackend, StorageError};

pub(crate) fn now_ms() -> i64 {
    let Ok(dur) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return 0;
    };
    i64::try_from(dur.as_millis()).unwrap_or(0)
}
