//! Park Map Page
//!
//! Map image with one hoverable marker per attraction.

use leptos::prelude::*;
use leptos::task::spawn_local;
use park_core::routes::PARK_MAP_IMAGE;

use crate::api;
use crate::components::MapMarker;
use crate::context::use_app_context;
use crate::store::{store_apply_map_attractions, ParkMapState, ParkMapStateStoreFields, ParkMapStore};

#[component]
pub fn ParkMapPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = ParkMapStore::new(ParkMapState::default());

    // Markers appear once the catalog resolves; hovering works before that
    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            let result = api::fetch_attractions(&api).await;
            api::report("map attractions", &result);
            store_apply_map_attractions(&store, result);
        });
    });

    view! {
        <div class="park-map-page">
            <h2 class="park-map-title">"Plan" <span class="accent">" du parc"</span></h2>
            <div class="park-map">
                <img
                    class="park-map-image"
                    src=PARK_MAP_IMAGE
                    alt="Plan des attractions de ZombieLand"
                />
                <For
                    each=move || store.attractions().with(|slot| slot.items().to_vec())
                    key=|attraction| attraction.activity_id
                    children=move |attraction| view! { <MapMarker attraction=attraction store=store /> }
                />
            </div>
        </div>
    }
}
