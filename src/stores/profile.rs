//! User profile store with scoped merge updates.
//!
//! DESIGN
//! ======
//! The profile is one persisted record with two embedded slices, housing
//! preferences and stats. Each updater merges a patch into exactly one
//! slice: fields the patch leaves `None` keep their current value, and
//! sibling slices are never touched. There is deliberately no full-overwrite
//! setter, so a screen editing the housing sheet cannot clobber identity
//! fields it never saw.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::seed;
use crate::slot::Slot;
use crate::storage::StorageBackend;

pub(crate) const PROFILE_KEY: &str = "murge.profile";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub role: String,
    pub company: String,
    /// Avatar initials or emoji as the app renders it.
    pub avatar: String,
    pub phone: String,
    pub housing_preferences: HousingPreferences,
    pub stats: ProfileStats,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HousingPreferences {
    pub budget_min: u32,
    pub budget_max: u32,
    pub bedrooms: u8,
    pub furnished: bool,
    pub pet_friendly: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    pub days_until_move: u32,
    pub connections: u32,
    pub groups_joined: u32,
}

/// Partial update for the top-level identity fields. `None` fields keep
/// their current value.
#[derive(Clone, Debug, Default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub company: Option<String>,
    pub avatar: Option<String>,
    pub phone: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct HousingPrefsPatch {
    pub budget_min: Option<u32>,
    pub budget_max: Option<u32>,
    pub bedrooms: Option<u8>,
    pub furnished: Option<bool>,
    pub pet_friendly: Option<bool>,
}

#[derive(Clone, Debug, Default)]
pub struct StatsPatch {
    pub days_until_move: Option<u32>,
    pub connections: Option<u32>,
    pub groups_joined: Option<u32>,
}

#[derive(Clone)]
pub struct ProfileStore {
    slot: Slot<UserProfile>,
}

impl ProfileStore {
    pub(crate) fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { slot: Slot::new(backend, PROFILE_KEY, seed::default_profile) }
    }

    #[must_use]
    pub fn get(&self) -> UserProfile {
        self.slot.read()
    }

    /// Merge identity fields; housing preferences and stats are untouched.
    pub fn update_profile(&self, patch: ProfilePatch) -> UserProfile {
        self.slot.update(|profile| {
            if let Some(name) = patch.name {
                profile.name = name;
            }
            if let Some(email) = patch.email {
                profile.email = email;
            }
            if let Some(role) = patch.role {
                profile.role = role;
            }
            if let Some(company) = patch.company {
                profile.company = company;
            }
            if let Some(avatar) = patch.avatar {
                profile.avatar = avatar;
            }
            if let Some(phone) = patch.phone {
                profile.phone = phone;
            }
            profile.clone()
        })
    }

    /// Merge into the housing-preferences slice only.
    pub fn update_housing_preferences(&self, patch: HousingPrefsPatch) -> UserProfile {
        self.slot.update(|profile| {
            let prefs = &mut profile.housing_preferences;
            if let Some(budget_min) = patch.budget_min {
                prefs.budget_min = budget_min;
            }
            if let Some(budget_max) = patch.budget_max {
                prefs.budget_max = budget_max;
            }
            if let Some(bedrooms) = patch.bedrooms {
                prefs.bedrooms = bedrooms;
            }
            if let Some(furnished) = patch.furnished {
                prefs.furnished = furnished;
            }
            if let Some(pet_friendly) = patch.pet_friendly {
                prefs.pet_friendly = pet_friendly;
            }
            profile.clone()
        })
    }

    /// Merge into the stats slice only.
    pub fn update_stats(&self, patch: StatsPatch) -> UserProfile {
        self.slot.update(|profile| {
            let stats = &mut profile.stats;
            if let Some(days_until_move) = patch.days_until_move {
                stats.days_until_move = days_until_move;
            }
            if let Some(connections) = patch.connections {
                stats.connections = connections;
            }
            if let Some(groups_joined) = patch.groups_joined {
                stats.groups_joined = groups_joined;
            }
            profile.clone()
        })
    }

    pub(crate) fn reset(&self) {
        self.slot.clear();
    }
}

#[cfg(test)]
#[path = "profile_test.rs"]
mod tests;
