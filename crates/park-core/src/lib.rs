//! ZombieLand Park Core
//!
//! Target-independent logic behind the attractions list and the park map:
//! catalog records and their loading state, the attraction filter, and the
//! hover state machine that drives map markers.

pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod hover;
pub mod layout;
pub mod models;
pub mod routes;

pub use catalog::{CatalogSlot, CatalogState, LoadStatus};
pub use config::{ApiConfig, Endpoint};
pub use error::FetchError;
pub use filter::{filter, list_notice, parse_category_choice, FilterCriteria, ListNotice};
pub use hover::{HoverState, MapHover, RevealPhase, RevealTicket};
pub use layout::{layout_markers, Footprint, MarkerDetail, MarkerLayout};
pub use models::{Attraction, AttractionId, Category, CategoryId};
