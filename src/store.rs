//! Page State Stores
//!
//! One store per mounted page, built with reactive_stores for field-level
//! reactivity. A store is disposed with its page, so fetch results that
//! arrive later are dropped.

use park_core::{
    Attraction, CatalogSlot, CatalogState, Category, FetchError, FilterCriteria, MapHover, RevealTicket,
};
use reactive_stores::Store;

use leptos::prelude::*;

/// Attractions page: catalog plus filter inputs
#[derive(Clone, Debug, Default, Store)]
pub struct ActivitiesState {
    pub catalog: CatalogState,
    pub criteria: FilterCriteria,
}

/// Park map page: attractions plus hover state
#[derive(Clone, Debug, Default, Store)]
pub struct ParkMapState {
    pub attractions: CatalogSlot<Attraction>,
    pub hover: MapHover,
}

pub type ActivitiesStore = Store<ActivitiesState>;
pub type ParkMapStore = Store<ParkMapState>;

// ========================
// Store Helper Functions
// ========================

fn discarded(kind: &str) {
    log::debug!("{} arrived after the page was closed, discarded", kind);
}

/// Apply an attractions fetch to the attractions page. False if the page is gone.
pub fn store_apply_attractions(store: &ActivitiesStore, result: Result<Vec<Attraction>, FetchError>) -> bool {
    let applied = store
        .catalog()
        .try_update(|catalog| catalog.attractions.apply(result))
        .is_some();
    if !applied {
        discarded("attractions");
    }
    applied
}

/// Apply a categories fetch to the attractions page. False if the page is gone.
pub fn store_apply_categories(store: &ActivitiesStore, result: Result<Vec<Category>, FetchError>) -> bool {
    let applied = store
        .catalog()
        .try_update(|catalog| catalog.categories.apply(result))
        .is_some();
    if !applied {
        discarded("categories");
    }
    applied
}

/// Apply an attractions fetch to the park map. False if the page is gone.
pub fn store_apply_map_attractions(store: &ParkMapStore, result: Result<Vec<Attraction>, FetchError>) -> bool {
    let applied = store.attractions().try_update(|slot| slot.apply(result)).is_some();
    if !applied {
        discarded("map attractions");
    }
    applied
}

/// Finish a marker reveal. Stale tickets leave the store untouched and notify nobody.
pub fn store_reveal(store: &ParkMapStore, ticket: RevealTicket) -> bool {
    store
        .hover()
        .try_maybe_update(|hover| {
            let changed = hover.reveal(ticket);
            (changed, changed)
        })
        .unwrap_or(false)
}
