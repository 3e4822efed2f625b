//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use park_core::ApiConfig;

/// Top-level pages of the app shell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Attractions,
    ParkMap,
}

impl Page {
    pub fn title(self) -> &'static str {
        match self {
            Page::Attractions => "Attractions",
            Page::ParkMap => "Plan du parc",
        }
    }
}

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Catalog service address
    api: StoredValue<ApiConfig>,
    /// Page currently mounted - read
    pub current_page: ReadSignal<Page>,
    /// Page currently mounted - write
    set_current_page: WriteSignal<Page>,
}

impl AppContext {
    pub fn new(api: ApiConfig, current_page: (ReadSignal<Page>, WriteSignal<Page>)) -> Self {
        Self {
            api: StoredValue::new(api),
            current_page: current_page.0,
            set_current_page: current_page.1,
        }
    }

    pub fn api(&self) -> ApiConfig {
        self.api.get_value()
    }

    /// Switch page; the previous page and its state are dropped
    pub fn navigate(&self, page: Page) {
        self.set_current_page.set(page);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
