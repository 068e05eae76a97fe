//! Demo session: open the persisted hub and walk one relocation flow.

use murge_state::StateHub;
use murge_state::assistant::Assistant;
use murge_state::pacing;
use murge_state::stores::notifications::{NewNotification, NotificationKind};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let state_dir = std::env::var("MURGE_STATE_DIR").unwrap_or_else(|_| ".murge-state".into());
    let hub = StateHub::open_dir(&state_dir).expect("state directory init failed");
    tracing::info!(state_dir = %state_dir, "state loaded");

    if !hub.app.has_completed_onboarding() {
        hub.app
            .complete_onboarding("ACME-2025", "Acme Corp", "San Francisco", "golden-gate");
        tracing::info!("onboarding completed");
    }

    // Connect request resolves after simulated latency, like the real UI.
    let connections = hub.connections.clone();
    let notifications = hub.notifications.clone();
    let delay = pacing::latency();
    tracing::info!(?delay, "sending connect request to Alex Kumar");
    pacing::defer(delay, move || {
        if connections.add("alex-kumar") {
            notifications.add(NewNotification {
                kind: NotificationKind::Connection,
                title: "Alex Kumar accepted your connection".to_string(),
                description: "You're now connected. Ask about the commute from Hayes Valley."
                    .to_string(),
                action_url: Some("/people".to_string()),
            });
        }
    })
    .await
    .expect("connect task failed");

    for id in ["research-neighborhoods", "relocation-budget", "book-movers"] {
        if let Some(outcome) = hub.checklist.toggle(id) {
            tracing::info!(
                task = outcome.item.title,
                total_points = outcome.total_points,
                "task toggled"
            );
            if let Some(milestone) = outcome.milestone {
                tracing::info!(?milestone, "milestone reached");
            }
        }
    }

    hub.budget.set_amount("rent", 2100.0);
    let summary = hub.budget.summary();
    tracing::info!(
        income = summary.income,
        expenses = summary.expenses,
        remaining = summary.remaining,
        "monthly budget"
    );

    let assistant = Assistant::new();
    let reply = assistant.reply("Where should I start?");
    tracing::info!(assistant = reply.text, "assistant replied");

    let level = hub.checklist.level();
    tracing::info!(
        level = level.level,
        title = level.title,
        unread = hub.notifications.unread_count(),
        connections = hub.connections.len(),
        "session summary"
    );
}
