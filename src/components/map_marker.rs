//! Map Marker Component
//!
//! A named marker placed on the park map. Hovering expands it above the
//! others and reveals a short description with a link.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use park_core::hover::REVEAL_DELAY_MS;
use park_core::{Attraction, MarkerLayout};

use crate::store::{store_reveal, ParkMapStateStoreFields, ParkMapStore};

#[component]
pub fn MapMarker(attraction: Attraction, store: ParkMapStore) -> impl IntoView {
    let id = attraction.activity_id;
    let name = attraction.name.clone();

    let layout = Memo::new(move |_| {
        store
            .hover()
            .with(|hover| MarkerLayout::compute(&attraction, hover))
    });

    let on_enter = move |_: web_sys::MouseEvent| {
        let Some(ticket) = store.hover().try_update(|hover| hover.enter(id)) else {
            return;
        };
        // Content fades in once the panel has grown
        spawn_local(async move {
            TimeoutFuture::new(REVEAL_DELAY_MS).await;
            store_reveal(&store, ticket);
        });
    };

    let on_leave = move |_: web_sys::MouseEvent| {
        store.hover().try_update(|hover| hover.leave());
    };

    view! {
        <div
            class=move || if layout.with(MarkerLayout::is_active) { "map-marker active" } else { "map-marker" }
            style=move || layout.with(MarkerLayout::style)
            on:mouseenter=on_enter
            on:mouseleave=on_leave
        >
            <div class="map-marker-name">{name}</div>
            <div class="map-marker-detail" style=move || layout.with(MarkerLayout::detail_style)>
                {move || {
                    layout.with(|layout| layout.detail.clone()).map(|detail| {
                        view! {
                            <p class="map-marker-description">{detail.description_short}</p>
                            <a class="map-marker-link" href=detail.href>"En savoir plus"</a>
                        }
                    })
                }}
            </div>
        </div>
    }
}
