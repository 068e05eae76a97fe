//! Domain stores over the persisted slot layer.
//!
//! ARCHITECTURE
//! ============
//! Store modules own domain operations and the invariants tying collections
//! to their derived aggregates (unread badge, point totals, budget sums), so
//! screens stay focused on rendering. Every store is a cheap cloneable
//! handle over shared state; mutations through one handle are visible to
//! every other handle immediately.

pub mod app;
pub mod budget;
pub mod checklist;
pub mod favorites;
pub mod filters;
pub mod messages;
pub mod notifications;
pub mod profile;
