//! UI Components
//!
//! Pages and their building blocks.

mod activities_page;
mod attraction_card;
mod map_marker;
mod park_map;

pub use activities_page::ActivitiesPage;
pub use attraction_card::AttractionCard;
pub use map_marker::MapMarker;
pub use park_map::ParkMapPage;
