//! Map Marker Layout
//!
//! Placement and emphasis of each attraction marker on the park map image.
//! Positions are percentages of the image box; a marker is centred
//! horizontally on its point and hangs below it.

use crate::hover::{MapHover, RevealPhase, REVEAL_DELAY_MS, TRANSITION_MS};
use crate::models::{Attraction, AttractionId};
use crate::routes::attraction_href;

pub const ACTIVE_Z_INDEX: i32 = 10;
pub const INACTIVE_Z_INDEX: i32 = 1;
pub const MIN_WIDTH_PX: u32 = 50;
pub const MIN_HEIGHT_PX: u32 = 27;

/// Marker size tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Footprint {
    Compact,
    Expanded,
}

impl Footprint {
    pub fn width_px(self) -> u32 {
        match self {
            Footprint::Compact => 110,
            Footprint::Expanded => 200,
        }
    }

    /// Expanded markers grow with their content
    pub fn height_px(self) -> Option<u32> {
        match self {
            Footprint::Compact => Some(25),
            Footprint::Expanded => None,
        }
    }

    pub fn z_index(self) -> i32 {
        match self {
            Footprint::Compact => INACTIVE_Z_INDEX,
            Footprint::Expanded => ACTIVE_Z_INDEX,
        }
    }
}

/// Detail panel content of the active marker
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerDetail {
    pub description_short: String,
    pub href: String,
    pub phase: RevealPhase,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerLayout {
    pub id: AttractionId,
    pub name: String,
    pub left_pct: f64,
    pub top_pct: f64,
    pub footprint: Footprint,
    /// Only set for the active marker
    pub detail: Option<MarkerDetail>,
}

fn clamp_pct(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

impl MarkerLayout {
    pub fn compute(attraction: &Attraction, hover: &MapHover) -> Self {
        let id = attraction.activity_id;
        let phase = hover.phase_for(id);
        let (footprint, detail) = if hover.state().is_active(id) {
            let detail = MarkerDetail {
                description_short: attraction.description_short.clone(),
                href: attraction_href(id),
                phase,
            };
            (Footprint::Expanded, Some(detail))
        } else {
            (Footprint::Compact, None)
        };

        Self {
            id,
            name: attraction.name.clone(),
            left_pct: clamp_pct(attraction.x),
            top_pct: clamp_pct(attraction.y),
            footprint,
            detail,
        }
    }

    pub fn is_active(&self) -> bool {
        self.footprint == Footprint::Expanded
    }

    pub fn z_index(&self) -> i32 {
        self.footprint.z_index()
    }

    /// Inline style of the marker box
    pub fn style(&self) -> String {
        let height = match self.footprint.height_px() {
            Some(px) => format!("{}px", px),
            None => "auto".to_string(),
        };
        format!(
            "left: {}%; top: {}%; transform: translate(-50%, 0); width: {}px; height: {}; \
             min-width: {}px; min-height: {}px; z-index: {};",
            self.left_pct,
            self.top_pct,
            self.footprint.width_px(),
            height,
            MIN_WIDTH_PX,
            MIN_HEIGHT_PX,
            self.z_index(),
        )
    }

    /// Inline style of the detail panel wrapper
    pub fn detail_style(&self) -> String {
        let phase = self
            .detail
            .as_ref()
            .map(|detail| detail.phase)
            .unwrap_or_default();
        match phase {
            // Collapse is immediate
            RevealPhase::Collapsed => "max-height: 0; opacity: 0; transition: none;".to_string(),
            RevealPhase::Expanding => format!(
                "max-height: 15rem; opacity: 0; transition: max-height {}ms ease;",
                TRANSITION_MS
            ),
            RevealPhase::Revealed => format!(
                "max-height: 15rem; opacity: 1; transition: max-height {}ms ease, opacity {}ms ease {}ms;",
                TRANSITION_MS, TRANSITION_MS, REVEAL_DELAY_MS
            ),
        }
    }
}

/// Layout of every marker, in catalog order
pub fn layout_markers(attractions: &[Attraction], hover: &MapHover) -> Vec<MarkerLayout> {
    attractions
        .iter()
        .map(|attraction| MarkerLayout::compute(attraction, hover))
        .collect()
}
