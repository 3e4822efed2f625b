use leptos::prelude::*;
use park_core::routes::{attraction_href, attraction_image_url};
use park_core::Attraction;

/// Card linking to the attraction's detail page
#[component]
pub fn AttractionCard(attraction: Attraction) -> impl IntoView {
    let background = format!(
        "background-image: url({});",
        attraction_image_url(&attraction.name)
    );

    view! {
        <div class="attraction-card" style=background>
            <h2 class="attraction-card-title">{attraction.name}</h2>
            <a class="attraction-card-link" href=attraction_href(attraction.activity_id)>
                "En savoir plus"
            </a>
        </div>
    }
}
