use std::sync::Arc;

use crate::storage::MemoryBackend;

use super::*;

fn store() -> ChecklistStore {
    ChecklistStore::new(Arc::new(MemoryBackend::new()))
}

/// The invariant every mutation must preserve: the running total equals the
/// sum of points over the completed set.
fn points_invariant_holds(store: &ChecklistStore) -> bool {
    let completed = store.completed();
    let expected: i64 = ChecklistStore::catalog()
        .iter()
        .filter(|item| completed.contains(item.id))
        .map(|item| item.points)
        .sum();
    store.total_points() == expected
}

#[test]
fn toggle_on_awards_the_item_points() {
    let store = store();
    let outcome = store.toggle("research-neighborhoods").unwrap();

    assert!(outcome.now_completed);
    assert_eq!(outcome.completed_count, 1);
    assert_eq!(outcome.total_points, outcome.item.points);
    assert!(store.is_completed("research-neighborhoods"));
    assert!(points_invariant_holds(&store));
}

#[test]
fn toggle_off_takes_the_points_back() {
    let store = store();
    store.toggle("research-neighborhoods");
    let outcome = store.toggle("research-neighborhoods").unwrap();

    assert!(!outcome.now_completed);
    assert_eq!(outcome.completed_count, 0);
    assert_eq!(outcome.total_points, 0);
    assert!(!store.is_completed("research-neighborhoods"));
    assert!(points_invariant_holds(&store));
}

#[test]
fn unknown_id_changes_nothing() {
    let store = store();
    assert!(store.toggle("win-the-lottery").is_none());
    assert_eq!(store.completed_count(), 0);
    assert_eq!(store.total_points(), 0);
}

#[test]
fn invariant_survives_arbitrary_toggle_sequences() {
    let store = store();
    let ids: Vec<&str> = ChecklistStore::catalog().iter().map(|i| i.id).collect();

    let script = [
        ids[0], ids[1], ids[0], ids[2], ids[2], ids[2], ids[5], ids[1], ids[0],
    ];
    for id in script {
        store.toggle(id);
        assert!(points_invariant_holds(&store));
    }
}

#[test]
fn fifth_completion_fires_the_five_task_milestone_once() {
    let store = store();
    let ids: Vec<&str> = ChecklistStore::catalog().iter().map(|i| i.id).collect();

    for id in &ids[..4] {
        assert_eq!(store.toggle(id).unwrap().milestone, None);
    }
    let fifth = store.toggle(ids[4]).unwrap();
    assert_eq!(fifth.completed_count, 5);
    assert_eq!(fifth.milestone, Some(Milestone::FirstFive));

    let sixth = store.toggle(ids[5]).unwrap();
    assert_eq!(sixth.milestone, None);
}

#[test]
fn recrossing_a_threshold_fires_the_milestone_again() {
    let store = store();
    let ids: Vec<&str> = ChecklistStore::catalog().iter().map(|i| i.id).collect();

    for id in &ids[..5] {
        store.toggle(id);
    }
    // Drop below five and cross again.
    let off = store.toggle(ids[0]).unwrap();
    assert_eq!(off.milestone, None);
    let back_on = store.toggle(ids[0]).unwrap();
    assert_eq!(back_on.milestone, Some(Milestone::FirstFive));
}

#[test]
fn tenth_and_final_completions_fire_their_milestones() {
    let store = store();
    let ids: Vec<&str> = ChecklistStore::catalog().iter().map(|i| i.id).collect();

    for id in &ids[..9] {
        store.toggle(id);
    }
    assert_eq!(store.toggle(ids[9]).unwrap().milestone, Some(Milestone::FirstTen));

    for id in &ids[10..ids.len() - 1] {
        assert_eq!(store.toggle(id).unwrap().milestone, None);
    }
    let last = store.toggle(ids[ids.len() - 1]).unwrap();
    assert_eq!(last.milestone, Some(Milestone::AllDone));
    assert_eq!(last.completed_count, ChecklistStore::catalog().len());
    assert!(points_invariant_holds(&store));
}

#[test]
fn level_table_covers_every_points_total() {
    assert_eq!(level_for(0).level, 1);
    assert_eq!(level_for(0).title, "Newcomer");
    assert_eq!(level_for(0).points_to_next, Some(50));
    assert_eq!(level_for(49).level, 1);
    assert_eq!(level_for(50).level, 2);
    assert_eq!(level_for(50).points_to_next, Some(50));
    assert_eq!(level_for(199).level, 3);
    assert_eq!(level_for(200).level, 4);
    assert_eq!(level_for(200).points_to_next, Some(150));
    assert_eq!(level_for(350).level, 5);
    assert_eq!(level_for(350).title, "Local Legend");
    assert_eq!(level_for(350).points_to_next, None);
    assert_eq!(level_for(100_000).level, 5);
    assert_eq!(level_for(-20).level, 1);
    assert_eq!(level_for(-20).points_to_next, Some(50));
}

#[test]
fn store_level_tracks_the_points_total() {
    let store = store();
    let ids: Vec<&str> = ChecklistStore::catalog().iter().map(|i| i.id).collect();
    for id in &ids[..3] {
        store.toggle(id);
    }
    assert_eq!(store.level(), level_for(store.total_points()));
}

#[test]
fn phase_progress_counts_only_that_phase() {
    let store = store();
    let progress = store.phase_progress();
    assert_eq!(progress.len(), 3);
    assert!(progress.iter().all(|p| p.done == 0 && p.percent == 0));

    let before_ids: Vec<&str> = ChecklistStore::catalog()
        .iter()
        .filter(|i| i.phase == Phase::Before)
        .map(|i| i.id)
        .collect();
    store.toggle(before_ids[0]);
    store.toggle(before_ids[1]);

    let progress = store.phase_progress();
    let before = progress.iter().find(|p| p.phase == Phase::Before).unwrap();
    assert_eq!(before.done, 2);
    assert_eq!(before.total, before_ids.len());
    assert_eq!(before.percent, 2 * 100 / before_ids.len());

    let during = progress.iter().find(|p| p.phase == Phase::During).unwrap();
    assert_eq!(during.done, 0);
}

#[test]
fn progress_survives_a_reload() {
    let backend = Arc::new(MemoryBackend::new());
    let store = ChecklistStore::new(Arc::clone(&backend) as Arc<dyn StorageBackend>);
    store.toggle("research-neighborhoods");
    store.toggle("book-movers");
    let points = store.total_points();

    let reopened = ChecklistStore::new(backend);
    assert_eq!(reopened.completed_count(), 2);
    assert_eq!(reopened.total_points(), points);
    assert!(points_invariant_holds(&reopened));
}

#[test]
fn clones_share_progress() {
    let a = store();
    let b = a.clone();
    a.toggle("research-neighborhoods");
    assert_eq!(b.completed_count(), 1);
}

#[test]
fn reset_returns_to_zero() {
    let store = store();
    store.toggle("research-neighborhoods");
    store.toggle("book-movers");

    store.reset();
    assert_eq!(store.completed_count(), 0);
    assert_eq!(store.total_points(), 0);
    assert!(points_invariant_holds(&store));
}
