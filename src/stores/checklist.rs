//! Relocation checklist and gamification engine.
//!
//! DESIGN
//! ======
//! The item catalog is fixed data; the mutable state is a completed-id set
//! and a running points total, each persisted under its own key. A toggle
//! writes both from the same synchronous call with no yield point in
//! between, which is what keeps the invariant `total points == sum of points
//! over completed ids` observable at every step. Levels and per-phase
//! progress are recomputed from that state on demand.
//!
//! Milestones are edge-triggered on the completed COUNT reaching a
//! threshold during a toggle-on. Un-toggling below a threshold and crossing
//! it again fires the milestone again; the celebration is tied to the
//! crossing, not to lifetime firsts.

use std::collections::HashSet;
use std::sync::Arc;

use crate::ids::IdSet;
use crate::seed;
use crate::slot::Slot;
use crate::storage::StorageBackend;

pub(crate) const COMPLETED_KEY: &str = "murge.checklist-done";
pub(crate) const POINTS_KEY: &str = "murge.checklist-points";

pub const MILESTONE_FIVE_TASKS: usize = 5;
pub const MILESTONE_TEN_TASKS: usize = 10;

/// Relocation phase a task belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Before,
    During,
    After,
}

impl Phase {
    pub const ALL: [Self; 3] = [Self::Before, Self::During, Self::After];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Before => "Before the Move",
            Self::During => "During the Move",
            Self::After => "After the Move",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// One catalog entry. The catalog itself lives in [`crate::seed`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChecklistItem {
    pub id: &'static str,
    pub title: &'static str,
    pub phase: Phase,
    pub priority: Priority,
    pub points: i64,
}

/// Count threshold crossed by a toggle-on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Milestone {
    FirstFive,
    FirstTen,
    AllDone,
}

/// Everything a screen needs to react to one toggle: toast, confetti,
/// progress ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub item: ChecklistItem,
    pub now_completed: bool,
    pub completed_count: usize,
    pub total_points: i64,
    pub milestone: Option<Milestone>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Level {
    pub level: u8,
    pub title: &'static str,
    /// Points still missing to the next level; `None` at the top.
    pub points_to_next: Option<i64>,
}

const LEVELS: [(i64, u8, &str); 5] = [
    (0, 1, "Newcomer"),
    (50, 2, "Explorer"),
    (100, 3, "Connector"),
    (200, 4, "Insider"),
    (350, 5, "Local Legend"),
];

/// Level for a points total. Total over every input; negatives are treated
/// as zero, and there is no next level beyond the top one.
#[must_use]
pub fn level_for(points: i64) -> Level {
    let points = points.max(0);
    let mut index = 0;
    for (i, (threshold, _, _)) in LEVELS.iter().enumerate() {
        if points >= *threshold {
            index = i;
        }
    }
    let (_, level, title) = LEVELS[index];
    let points_to_next = LEVELS.get(index + 1).map(|(next, _, _)| next - points);
    Level { level, title, points_to_next }
}

/// Completion counts for one phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseProgress {
    pub phase: Phase,
    pub done: usize,
    pub total: usize,
    /// Whole percent, 0 when the phase has no items.
    pub percent: usize,
}

#[derive(Clone)]
pub struct ChecklistStore {
    completed: IdSet,
    points: Slot<i64>,
}

impl ChecklistStore {
    pub(crate) fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self {
            completed: IdSet::new(Arc::clone(&backend), COMPLETED_KEY),
            points: Slot::new(backend, POINTS_KEY, || 0),
        }
    }

    /// The fixed task catalog.
    #[must_use]
    pub fn catalog() -> &'static [ChecklistItem] {
        &seed::CHECKLIST_CATALOG
    }

    /// Catalog lookup by id.
    #[must_use]
    pub fn item(id: &str) -> Option<ChecklistItem> {
        Self::catalog().iter().find(|item| item.id == id).copied()
    }

    /// Flip one task's completion. Unknown ids return `None` and change
    /// nothing. The completed set and the points total are both written
    /// before this returns; there is no observable state in between.
    pub fn toggle(&self, id: &str) -> Option<ToggleOutcome> {
        let item = Self::item(id)?;

        let now_completed = if self.completed.remove(id) {
            false
        } else {
            self.completed.add(id);
            true
        };
        let delta = if now_completed { item.points } else { -item.points };
        let total_points = self.points.update(|points| {
            *points += delta;
            *points
        });

        let completed_count = self.completed.len();
        let milestone = if now_completed { milestone_at(completed_count) } else { None };

        Some(ToggleOutcome { item, now_completed, completed_count, total_points, milestone })
    }

    #[must_use]
    pub fn is_completed(&self, id: &str) -> bool {
        self.completed.contains(id)
    }

    /// Ids currently completed.
    #[must_use]
    pub fn completed(&self) -> HashSet<String> {
        self.completed.as_set()
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    #[must_use]
    pub fn total_points(&self) -> i64 {
        self.points.read()
    }

    /// Level derived from the current points total.
    #[must_use]
    pub fn level(&self) -> Level {
        level_for(self.total_points())
    }

    /// Done/total/percent per phase, in catalog phase order.
    #[must_use]
    pub fn phase_progress(&self) -> Vec<PhaseProgress> {
        let completed = self.completed.as_set();
        Phase::ALL
            .iter()
            .map(|&phase| {
                let mut done = 0;
                let mut total = 0;
                for item in Self::catalog().iter().filter(|item| item.phase == phase) {
                    total += 1;
                    if completed.contains(item.id) {
                        done += 1;
                    }
                }
                let percent = if total == 0 { 0 } else { done * 100 / total };
                PhaseProgress { phase, done, total, percent }
            })
            .collect()
    }

    pub(crate) fn reset(&self) {
        self.completed.clear();
        self.points.clear();
    }
}

fn milestone_at(count: usize) -> Option<Milestone> {
    if count == seed::CHECKLIST_CATALOG.len() {
        Some(Milestone::AllDone)
    } else if count == MILESTONE_TEN_TASKS {
        Some(Milestone::FirstTen)
    } else if count == MILESTONE_FIVE_TASKS {
        Some(Milestone::FirstFive)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "checklist_test.rs"]
mod tests;
