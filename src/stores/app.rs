//! Onboarding and session flags.
//!
//! DESIGN
//! ======
//! App flags start empty and are populated exactly once when the user
//! finishes the location-selection step; the only way back is logout, which
//! resets them to defaults. The feature-tour flag lives under its own key so
//! a returning user who logs out and back in does not sit through the tour
//! again.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::slot::Slot;
use crate::storage::StorageBackend;

pub(crate) const APP_KEY: &str = "murge.app";
pub(crate) const TOUR_KEY: &str = "murge.tour-complete";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppFlags {
    pub company_code: String,
    pub company_name: String,
    pub selected_city: String,
    pub background_image: String,
    pub has_completed_onboarding: bool,
}

#[derive(Clone)]
pub struct AppStore {
    flags: Slot<AppFlags>,
    tour: Slot<bool>,
}

impl AppStore {
    pub(crate) fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self {
            flags: Slot::new(Arc::clone(&backend), APP_KEY, AppFlags::default),
            tour: Slot::new(backend, TOUR_KEY, || false),
        }
    }

    #[must_use]
    pub fn flags(&self) -> AppFlags {
        self.flags.read()
    }

    #[must_use]
    pub fn has_completed_onboarding(&self) -> bool {
        self.flags.read().has_completed_onboarding
    }

    /// Populate the session flags at the end of onboarding. Returns `false`
    /// without touching anything when onboarding already completed; logout is
    /// the only reset path.
    pub fn complete_onboarding(
        &self,
        code: &str,
        name: &str,
        city: &str,
        background: &str,
    ) -> bool {
        self.flags.update(|flags| {
            if flags.has_completed_onboarding {
                return false;
            }
            flags.company_code = code.to_string();
            flags.company_name = name.to_string();
            flags.selected_city = city.to_string();
            flags.background_image = background.to_string();
            flags.has_completed_onboarding = true;
            true
        })
    }

    /// Reset session flags to defaults. The tour flag survives.
    pub fn logout(&self) {
        self.flags.clear();
    }

    #[must_use]
    pub fn tour_completed(&self) -> bool {
        self.tour.read()
    }

    pub fn set_tour_completed(&self, completed: bool) {
        self.tour.write(completed);
    }

    pub(crate) fn reset(&self) {
        self.flags.clear();
        self.tour.clear();
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
