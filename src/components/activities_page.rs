//! Attractions Page
//!
//! Attraction cards filtered by name search and category.

use leptos::prelude::*;
use leptos::task::spawn_local;
use park_core::list_notice;

use crate::api;
use crate::components::AttractionCard;
use crate::context::use_app_context;
use crate::store::{
    store_apply_attractions, store_apply_categories, ActivitiesState, ActivitiesStateStoreFields,
    ActivitiesStore,
};

/// Name search input with a clear button
#[component]
fn SearchBox(store: ActivitiesStore) -> impl IntoView {
    let search_term = move || store.criteria().with(|criteria| criteria.search_term.clone());

    view! {
        <label for="activity" class="search-box">
            <input
                type="text"
                name="activity"
                id="activity"
                placeholder="Votre recherche..."
                prop:value=search_term
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    store.criteria().update(|criteria| criteria.search_term = value);
                }
            />
            <Show when=move || !search_term().is_empty()>
                <button
                    type="button"
                    class="search-clear"
                    on:click=move |_| store.criteria().update(|criteria| criteria.clear_search())
                >
                    "×"
                </button>
            </Show>
        </label>
    }
}

/// Category dropdown; the placeholder option means no filter
#[component]
fn CategorySelect(store: ActivitiesStore) -> impl IntoView {
    view! {
        <select
            class="category-select"
            prop:value=move || store.criteria().with(|criteria| criteria.category_choice())
            on:change=move |ev| {
                let value = event_target_value(&ev);
                store.criteria().update(|criteria| criteria.set_category_choice(&value));
            }
        >
            <option value="">"Catégories"</option>
            <For
                each=move || store.catalog().with(|catalog| catalog.categories.items().to_vec())
                key=|category| category.category_id
                children=move |category| {
                    view! {
                        <option value=category.category_id.to_string()>{category.name}</option>
                    }
                }
            />
        </select>
    }
}

#[component]
pub fn ActivitiesPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = ActivitiesStore::new(ActivitiesState::default());

    // Load both collections on mount; each one succeeds or fails on its own
    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            let result = api::fetch_attractions(&api).await;
            api::report("attractions", &result);
            store_apply_attractions(&store, result);
        });
        let api = ctx.api();
        spawn_local(async move {
            let result = api::fetch_categories(&api).await;
            api::report("categories", &result);
            store_apply_categories(&store, result);
        });
    });

    let visible = Memo::new(move |_| {
        store.criteria().with(|criteria| {
            store
                .catalog()
                .with(|catalog| criteria.apply(catalog.attractions.items()))
        })
    });

    let notice = move || {
        let visible_count = visible.with(Vec::len);
        store.criteria().with(|criteria| {
            store
                .catalog()
                .with(|catalog| list_notice(&catalog.attractions, criteria, visible_count))
        })
    };

    view! {
        <main class="activities-page">
            <h1>"LES " <span class="accent">"ATTRACTIONS"</span></h1>
            <form class="activities-filters" on:submit=|ev: web_sys::SubmitEvent| ev.prevent_default()>
                <SearchBox store=store />
                <CategorySelect store=store />
            </form>
            <section class="activities-grid">
                <For
                    each=move || visible.get()
                    key=|attraction| attraction.activity_id
                    children=move |attraction| view! { <AttractionCard attraction=attraction /> }
                />
            </section>
            {move || notice().map(|notice| view! { <p class="activities-empty">{notice.message()}</p> })}
        </main>
    }
}
