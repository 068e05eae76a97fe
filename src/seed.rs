//! First-run content: the catalogs and defaults a fresh profile starts with.
//!
//! Seeded entries use fixed ids so reloads and resets land on the same
//! state; only user-created entries get generated ids.

use crate::assistant::AssistantReply;
use crate::stores::budget::{BudgetCategory, BudgetItem};
use crate::stores::checklist::{ChecklistItem, Phase, Priority};
use crate::stores::messages::ChannelMessage;
use crate::stores::notifications::{Notification, NotificationKind};
use crate::stores::profile::{HousingPreferences, ProfileStats, UserProfile};

pub(crate) fn default_profile() -> UserProfile {
    UserProfile {
        name: "Jordan Avery".to_string(),
        email: "jordan.avery@acme.com".to_string(),
        role: "Product Designer".to_string(),
        company: "Acme Corp".to_string(),
        avatar: "JA".to_string(),
        phone: "+1 415 555 0192".to_string(),
        housing_preferences: HousingPreferences {
            budget_min: 1200,
            budget_max: 2400,
            bedrooms: 1,
            furnished: true,
            pet_friendly: false,
        },
        stats: ProfileStats { days_until_move: 45, connections: 0, groups_joined: 0 },
    }
}

pub(crate) fn default_notifications() -> Vec<Notification> {
    let entry = |id: &str,
                 kind: NotificationKind,
                 title: &str,
                 description: &str,
                 time: &str,
                 read: bool,
                 action_url: &str| Notification {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        description: description.to_string(),
        time: time.to_string(),
        read,
        action_url: Some(action_url.to_string()),
    };

    vec![
        entry(
            "n-connection-1",
            NotificationKind::Connection,
            "Sarah Chen accepted your connection",
            "You're now connected. Say hello and ask about Hayes Valley.",
            "2m ago",
            false,
            "/people",
        ),
        entry(
            "n-housing-1",
            NotificationKind::Housing,
            "New listing matches your filters",
            "Sunny 1BR in Hayes Valley, $2,150/mo, furnished.",
            "1h ago",
            false,
            "/housing",
        ),
        entry(
            "n-message-1",
            NotificationKind::Message,
            "New message in #general",
            "Priya: \"Anyone up for coffee near the office on Friday?\"",
            "3h ago",
            false,
            "/workspace",
        ),
        entry(
            "n-system-1",
            NotificationKind::System,
            "Checklist reminder",
            "3 high-priority tasks in Before the Move are still open.",
            "Yesterday",
            true,
            "/checklist",
        ),
        entry(
            "n-housing-2",
            NotificationKind::Housing,
            "Price drop on a saved listing",
            "The Oak Street studio dropped to $1,900/mo.",
            "2d ago",
            true,
            "/housing",
        ),
    ]
}

pub(crate) fn default_budget() -> Vec<BudgetItem> {
    let item = |id: &str, label: &str, category: BudgetCategory, amount: f64, is_fixed: bool| {
        BudgetItem { id: id.to_string(), label: label.to_string(), category, amount, is_fixed }
    };

    vec![
        item("salary", "Monthly salary", BudgetCategory::Income, 5200.0, true),
        item("rent", "Rent", BudgetCategory::Housing, 1800.0, true),
        item("utilities", "Utilities", BudgetCategory::Utilities, 150.0, true),
        item("internet-phone", "Internet & phone", BudgetCategory::Utilities, 80.0, true),
        item("transit-pass", "Transit pass", BudgetCategory::Transportation, 120.0, true),
        item("groceries", "Groceries", BudgetCategory::Food, 450.0, false),
        item("dining-out", "Dining out", BudgetCategory::Food, 200.0, false),
        item("fitness", "Fitness", BudgetCategory::Lifestyle, 60.0, false),
        item("emergency-fund", "Emergency fund", BudgetCategory::Savings, 400.0, false),
    ]
}

pub(crate) fn seed_messages() -> Vec<ChannelMessage> {
    let message =
        |id: &str, channel_id: &str, sender: &str, text: &str, time: &str| ChannelMessage {
            id: id.to_string(),
            channel_id: channel_id.to_string(),
            sender: sender.to_string(),
            text: text.to_string(),
            time: time.to_string(),
            is_self: false,
        };

    vec![
        message(
            "m-general-1",
            "general",
            "Sarah Chen",
            "Welcome to the Murge workspace! Drop your questions here.",
            "2d ago",
        ),
        message(
            "m-general-2",
            "general",
            "Priya Patel",
            "Anyone up for coffee near the office on Friday?",
            "3h ago",
        ),
        message(
            "m-general-3",
            "general",
            "Marcus Webb",
            "The relocation desk answers fastest before noon.",
            "1h ago",
        ),
        message(
            "m-housing-1",
            "housing",
            "Sarah Chen",
            "Hayes Valley is walkable and close to the office shuttle.",
            "1d ago",
        ),
        message(
            "m-housing-2",
            "housing",
            "Marcus Webb",
            "Ask for a furnished lease if you land before your container does.",
            "4h ago",
        ),
        message(
            "m-social-1",
            "social",
            "Priya Patel",
            "Board game night at the Mission office every Thursday.",
            "2d ago",
        ),
        message(
            "m-social-2",
            "social",
            "Sarah Chen",
            "The hiking group does Lands End on Saturdays.",
            "5h ago",
        ),
    ]
}

// =============================================================================
// CHECKLIST CATALOG
// =============================================================================

const fn task(
    id: &'static str,
    title: &'static str,
    phase: Phase,
    priority: Priority,
    points: i64,
) -> ChecklistItem {
    ChecklistItem { id, title, phase, priority, points }
}

/// The fixed relocation task catalog: 8 before, 7 during, 5 after.
pub(crate) const CHECKLIST_CATALOG: [ChecklistItem; 20] = [
    task("research-neighborhoods", "Research neighborhoods", Phase::Before, Priority::High, 20),
    task("relocation-budget", "Draft a relocation budget", Phase::Before, Priority::High, 15),
    task("book-movers", "Book the movers", Phase::Before, Priority::High, 25),
    task("travel-documents", "Sort visas and travel documents", Phase::Before, Priority::High, 30),
    task("book-flights", "Book flights", Phase::Before, Priority::Medium, 20),
    task("arrange-temp-housing", "Arrange temporary housing", Phase::Before, Priority::High, 25),
    task(
        "notify-current-landlord",
        "Give notice to your current landlord",
        Phase::Before,
        Priority::Medium,
        15,
    ),
    task("forward-mail", "Set up mail forwarding", Phase::Before, Priority::Low, 10),
    task("collect-keys", "Collect the apartment keys", Phase::During, Priority::High, 20),
    task("utilities-setup", "Get utilities running", Phase::During, Priority::High, 20),
    task("internet-setup", "Set up internet", Phase::During, Priority::Medium, 15),
    task("register-address", "Register your new address", Phase::During, Priority::High, 25),
    task("local-sim", "Get a local SIM", Phase::During, Priority::Medium, 10),
    task("unpack-essentials", "Unpack the essentials box", Phase::During, Priority::Medium, 15),
    task("meet-building-manager", "Meet the building manager", Phase::During, Priority::Low, 10),
    task("open-bank-account", "Open a local bank account", Phase::After, Priority::High, 25),
    task("healthcare-registration", "Register for healthcare", Phase::After, Priority::High, 25),
    task("join-communities", "Join two local communities", Phase::After, Priority::Medium, 20),
    task("explore-neighborhood", "Walk your new neighborhood", Phase::After, Priority::Low, 15),
    task("first-week-groceries", "Do a first full grocery run", Phase::After, Priority::Medium, 10),
];

// =============================================================================
// ASSISTANT SCRIPT
// =============================================================================

/// Canned assistant turns, advanced one per user input.
pub(crate) const ASSISTANT_SCRIPT: [AssistantReply; 6] = [
    AssistantReply {
        text: "Hi Jordan! I'm your Murge assistant. I can point you at housing, \
               people from your company, or your moving checklist. Where do you \
               want to start?",
        suggestions: &["Find housing", "Meet people", "Plan my budget"],
        navigate_to: None,
    },
    AssistantReply {
        text: "There are 4 listings inside your $2,400 ceiling right now, and two \
               are furnished. The Hayes Valley one-bedroom is the closest match to \
               your preferences.",
        suggestions: &["Show me the listings", "What about roommates?"],
        navigate_to: Some("/housing"),
    },
    AssistantReply {
        text: "Your Before the Move phase still has 3 high-priority tasks open. \
               Booking the movers is the one people regret leaving late.",
        suggestions: &["Open the checklist", "Remind me later"],
        navigate_to: Some("/checklist"),
    },
    AssistantReply {
        text: "Three Acme teammates relocated to San Francisco in the last year. \
               Sarah Chen moved with the same role as you and is open to questions.",
        suggestions: &["See people", "Connect with Sarah"],
        navigate_to: Some("/people"),
    },
    AssistantReply {
        text: "Rent is your biggest line at about 63% of expenses. Your plan leaves \
               a comfortable buffer after savings, even with a deposit month.",
        suggestions: &["Open the budget", "Tweak the numbers"],
        navigate_to: Some("/budget"),
    },
    AssistantReply {
        text: "That covers the big three. You're ahead of most movers at the \
               45-days-out mark. Come back any time and I'll pick up from here.",
        suggestions: &["Thanks!"],
        navigate_to: None,
    },
];

/// Reply once the script is exhausted.
pub(crate) const ASSISTANT_FALLBACK: AssistantReply = AssistantReply {
    text: "That's everything I have scripted for this tour. The checklist is the \
           best place to keep momentum going.",
    suggestions: &["Open the checklist"],
    navigate_to: Some("/checklist"),
};

#[cfg(test)]
#[path = "seed_test.rs"]
mod tests;
