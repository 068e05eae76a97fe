//! Per-screen filter state.
//!
//! DESIGN
//! ======
//! One persisted record carries three independent slices, one per browsing
//! screen (housing, people, explore). Each slice merges its own patch and
//! never reaches across, so tightening the housing price band cannot disturb
//! the explore radius. Persisting the whole record under one key keeps the
//! on-disk layout at a single entry while screens stay isolated through the
//! API.
//!
//! Patches use a second `Option` layer for fields that are themselves
//! optional: `None` leaves the field alone, `Some(None)` clears it,
//! `Some(Some(v))` sets it.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::slot::Slot;
use crate::storage::StorageBackend;

pub(crate) const FILTERS_KEY: &str = "murge.filters";

const DEFAULT_PRICE_CEILING: u32 = 4000;
const DEFAULT_MAX_DISTANCE_KM: f32 = 5.0;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub housing: HousingFilters,
    pub people: PeopleFilters,
    pub explore: ExploreFilters,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HousingFilters {
    pub price_min: u32,
    pub price_max: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    pub furnished_only: bool,
    pub pets_allowed_only: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
}

impl Default for HousingFilters {
    fn default() -> Self {
        Self {
            price_min: 0,
            price_max: DEFAULT_PRICE_CEILING,
            bedrooms: None,
            property_type: None,
            furnished_only: false,
            pets_allowed_only: false,
            neighborhood: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeopleFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    pub interests: Vec<String>,
    pub newcomers_only: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExploreFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub max_distance_km: f32,
    pub open_now: bool,
}

impl Default for ExploreFilters {
    fn default() -> Self {
        Self {
            category: None,
            max_distance_km: DEFAULT_MAX_DISTANCE_KM,
            open_now: false,
        }
    }
}

/// Patch for the housing slice. Double-`Option` fields: outer `None` keeps,
/// `Some(None)` clears, `Some(Some(v))` sets.
#[derive(Clone, Debug, Default)]
pub struct HousingFiltersPatch {
    pub price_min: Option<u32>,
    pub price_max: Option<u32>,
    pub bedrooms: Option<Option<u8>>,
    pub property_type: Option<Option<String>>,
    pub furnished_only: Option<bool>,
    pub pets_allowed_only: Option<bool>,
    pub neighborhood: Option<Option<String>>,
}

#[derive(Clone, Debug, Default)]
pub struct PeopleFiltersPatch {
    pub department: Option<Option<String>>,
    pub interests: Option<Vec<String>>,
    pub newcomers_only: Option<bool>,
}

#[derive(Clone, Debug, Default)]
pub struct ExploreFiltersPatch {
    pub category: Option<Option<String>>,
    pub max_distance_km: Option<f32>,
    pub open_now: Option<bool>,
}

#[derive(Clone)]
pub struct FilterStore {
    slot: Slot<FilterState>,
}

impl FilterStore {
    pub(crate) fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { slot: Slot::new(backend, FILTERS_KEY, FilterState::default) }
    }

    #[must_use]
    pub fn get(&self) -> FilterState {
        self.slot.read()
    }

    #[must_use]
    pub fn housing(&self) -> HousingFilters {
        self.slot.read().housing
    }

    #[must_use]
    pub fn people(&self) -> PeopleFilters {
        self.slot.read().people
    }

    #[must_use]
    pub fn explore(&self) -> ExploreFilters {
        self.slot.read().explore
    }

    /// Merge into the housing slice; people and explore are untouched.
    pub fn update_housing(&self, patch: HousingFiltersPatch) -> HousingFilters {
        self.slot.update(|state| {
            let housing = &mut state.housing;
            if let Some(price_min) = patch.price_min {
                housing.price_min = price_min;
            }
            if let Some(price_max) = patch.price_max {
                housing.price_max = price_max;
            }
            if let Some(bedrooms) = patch.bedrooms {
                housing.bedrooms = bedrooms;
            }
            if let Some(property_type) = patch.property_type {
                housing.property_type = property_type;
            }
            if let Some(furnished_only) = patch.furnished_only {
                housing.furnished_only = furnished_only;
            }
            if let Some(pets_allowed_only) = patch.pets_allowed_only {
                housing.pets_allowed_only = pets_allowed_only;
            }
            if let Some(neighborhood) = patch.neighborhood {
                housing.neighborhood = neighborhood;
            }
            housing.clone()
        })
    }

    /// Merge into the people slice only.
    pub fn update_people(&self, patch: PeopleFiltersPatch) -> PeopleFilters {
        self.slot.update(|state| {
            let people = &mut state.people;
            if let Some(department) = patch.department {
                people.department = department;
            }
            if let Some(interests) = patch.interests {
                people.interests = interests;
            }
            if let Some(newcomers_only) = patch.newcomers_only {
                people.newcomers_only = newcomers_only;
            }
            people.clone()
        })
    }

    /// Merge into the explore slice only.
    pub fn update_explore(&self, patch: ExploreFiltersPatch) -> ExploreFilters {
        self.slot.update(|state| {
            let explore = &mut state.explore;
            if let Some(category) = patch.category {
                explore.category = category;
            }
            if let Some(max_distance_km) = patch.max_distance_km {
                explore.max_distance_km = max_distance_km;
            }
            if let Some(open_now) = patch.open_now {
                explore.open_now = open_now;
            }
            explore.clone()
        })
    }

    /// Back to the default bands on every screen.
    pub fn reset(&self) {
        self.slot.clear();
    }
}

#[cfg(test)]
#[path = "filters_test.rs"]
mod tests;
