use std::sync::Arc;

use crate::storage::{MemoryBackend, StorageBackend};
use crate::stores::app::{APP_KEY, TOUR_KEY};
use crate::stores::budget::BUDGET_KEY;
use crate::stores::checklist::{COMPLETED_KEY, POINTS_KEY};
use crate::stores::favorites::{FAVORITES_KEY, FavoriteKind, NewFavorite};
use crate::stores::filters::{FILTERS_KEY, HousingFiltersPatch};
use crate::stores::messages::MESSAGES_KEY;
use crate::stores::notifications::NOTIFICATIONS_KEY;
use crate::stores::profile::{PROFILE_KEY, ProfilePatch};

use super::test_helpers::hub;
use super::*;

#[test]
fn fresh_hub_serves_seeded_defaults() {
    let hub = hub();

    assert!(!hub.app.has_completed_onboarding());
    assert_eq!(hub.notifications.len(), 5);
    assert_eq!(hub.notifications.unread_count(), 3);
    assert_eq!(hub.budget.list().len(), 9);
    assert!(!hub.messages.is_empty());
    assert_eq!(hub.profile.get().name, "Jordan Avery");
    assert_eq!(hub.checklist.completed_count(), 0);
    assert!(hub.favorites.is_empty());
    assert!(hub.connections.is_empty());
}

#[test]
fn mutations_through_one_clone_reach_every_screen() {
    let dashboard = hub();
    let tab_bar = dashboard.clone();
    let inbox_screen = dashboard.clone();

    inbox_screen.notifications.mark_all_read();
    assert_eq!(tab_bar.notifications.unread_count(), 0);

    dashboard.favorites.add(NewFavorite {
        kind: FavoriteKind::Housing,
        title: "Sunny 1BR".to_string(),
        subtitle: "Hayes Valley".to_string(),
        image: None,
    });
    assert!(inbox_screen.favorites.is_favorite("Sunny 1BR", FavoriteKind::Housing));

    dashboard.checklist.toggle("book-movers");
    assert_eq!(tab_bar.checklist.completed_count(), 1);
}

#[test]
fn connect_request_is_idempotent() {
    let hub = hub();
    assert!(hub.connections.is_empty());

    assert!(hub.connections.add("Alex Kumar"));
    assert!(hub.connections.contains("Alex Kumar"));
    assert_eq!(hub.connections.len(), 1);

    assert!(!hub.connections.add("Alex Kumar"));
    assert_eq!(hub.connections.len(), 1);
}

#[test]
fn every_store_persists_under_its_own_key() {
    let backend = Arc::new(MemoryBackend::new());
    let hub = StateHub::with_backend(Arc::clone(&backend) as Arc<dyn StorageBackend>);

    hub.app.complete_onboarding("ACME-2025", "Acme Corp", "San Francisco", "golden-gate");
    hub.app.set_tour_completed(true);
    hub.profile.update_profile(ProfilePatch {
        phone: Some("+1 415 555 0117".to_string()),
        ..Default::default()
    });
    hub.notifications.mark_all_read();
    hub.favorites.add(NewFavorite {
        kind: FavoriteKind::Place,
        title: "Golden Gate Park".to_string(),
        subtitle: "Outdoors".to_string(),
        image: None,
    });
    hub.filters.update_housing(HousingFiltersPatch {
        price_max: Some(2500),
        ..Default::default()
    });
    hub.budget.set_amount("rent", 2000.0);
    hub.checklist.toggle("book-movers");
    hub.messages.send("general", "Jordan Avery", "Hej!", true);
    hub.saved_listings.add("listing-12");
    hub.connections.add("Alex Kumar");
    hub.joined_groups.add("hiking");

    let keys = [
        APP_KEY,
        TOUR_KEY,
        PROFILE_KEY,
        NOTIFICATIONS_KEY,
        FAVORITES_KEY,
        FILTERS_KEY,
        BUDGET_KEY,
        COMPLETED_KEY,
        POINTS_KEY,
        MESSAGES_KEY,
        SAVED_LISTINGS_KEY,
        CONNECTIONS_KEY,
        JOINED_GROUPS_KEY,
    ];
    for key in keys {
        assert!(
            backend.load(key).unwrap().is_some(),
            "expected a persisted document under {key}"
        );
    }
}

#[test]
fn reset_all_returns_every_store_to_first_run() {
    let hub = hub();
    hub.app.complete_onboarding("ACME-2025", "Acme Corp", "San Francisco", "golden-gate");
    hub.app.set_tour_completed(true);
    hub.notifications.mark_all_read();
    hub.favorites.add(NewFavorite {
        kind: FavoriteKind::Person,
        title: "Sarah Chen".to_string(),
        subtitle: "Design".to_string(),
        image: None,
    });
    hub.checklist.toggle("book-movers");
    hub.budget.set_amount("rent", 10000.0);
    hub.connections.add("Alex Kumar");

    hub.reset_all();

    assert!(!hub.app.has_completed_onboarding());
    assert!(!hub.app.tour_completed());
    assert_eq!(hub.notifications.unread_count(), 3);
    assert!(hub.favorites.is_empty());
    assert_eq!(hub.checklist.completed_count(), 0);
    assert_eq!(hub.checklist.total_points(), 0);
    assert!((hub.budget.summary().remaining - 1940.0).abs() < 1e-9);
    assert!(hub.connections.is_empty());
}

#[test]
fn state_survives_reopening_the_directory() {
    let dir = tempfile::tempdir().unwrap();

    let hub = StateHub::open_dir(dir.path()).unwrap();
    hub.app.complete_onboarding("ACME-2025", "Acme Corp", "San Francisco", "golden-gate");
    hub.notifications.mark_all_read();
    hub.checklist.toggle("book-movers");
    hub.checklist.toggle("travel-documents");
    hub.connections.add("Alex Kumar");
    let points = hub.checklist.total_points();
    drop(hub);

    let reopened = StateHub::open_dir(dir.path()).unwrap();
    assert!(reopened.app.has_completed_onboarding());
    assert_eq!(reopened.notifications.unread_count(), 0);
    assert_eq!(reopened.checklist.completed_count(), 2);
    assert_eq!(reopened.checklist.total_points(), points);
    assert!(reopened.connections.contains("Alex Kumar"));
}

#[test]
fn open_dir_reports_an_unusable_directory() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();

    let result = StateHub::open_dir(blocker.join("state"));
    assert!(matches!(result, Err(StorageError::Directory { .. })));
}
