//! ZombieLand Frontend App
//!
//! Navigation bar and the currently mounted page.

use leptos::prelude::*;
use park_core::ApiConfig;

use crate::components::{ActivitiesPage, ParkMapPage};
use crate::context::{use_app_context, AppContext, Page};

#[component]
fn NavButton(page: Page) -> impl IntoView {
    let ctx = use_app_context();
    let is_current = move || ctx.current_page.get() == page;

    view! {
        <button
            class=move || if is_current() { "nav-link current" } else { "nav-link" }
            on:click=move |_| ctx.navigate(page)
        >
            {page.title()}
        </button>
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (current_page, set_current_page) = signal(Page::Attractions);

    let api = ApiConfig::from_env();
    log::info!("catalog service at {}", api.base_url());

    // Provide context to all children
    provide_context(AppContext::new(api, (current_page, set_current_page)));

    view! {
        <div class="app-layout">
            <nav class="nav-bar">
                <NavButton page=Page::Attractions />
                <NavButton page=Page::ParkMap />
            </nav>

            // Switching page unmounts the previous one with its state
            {move || match current_page.get() {
                Page::Attractions => view! { <ActivitiesPage /> }.into_any(),
                Page::ParkMap => view! { <ParkMapPage /> }.into_any(),
            }}
        </div>
    }
}
