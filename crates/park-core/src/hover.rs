//! Map Hover State Machine
//!
//! At most one marker is active. Entering a marker replaces the previous
//! one in a single transition, leaving returns to idle.
//!
//! The detail panel of the active marker opens in two steps: it grows
//! first (`Expanding`), then fades in (`Revealed`) once the view redeems
//! the [`RevealTicket`] handed out by [`MapHover::enter`] after
//! [`REVEAL_DELAY_MS`]. Every `enter`/`leave` starts a new epoch, so a
//! ticket from an earlier hover can never reveal anything.

use crate::models::AttractionId;

/// Delay between the panel starting to grow and its content fading in
pub const REVEAL_DELAY_MS: u32 = 100;

/// Duration of the grow and of the fade transitions
pub const TRANSITION_MS: u32 = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HoverState {
    #[default]
    Idle,
    Active(AttractionId),
}

impl HoverState {
    pub fn active(self) -> Option<AttractionId> {
        match self {
            HoverState::Idle => None,
            HoverState::Active(id) => Some(id),
        }
    }

    pub fn is_active(self, id: AttractionId) -> bool {
        self == HoverState::Active(id)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealPhase {
    #[default]
    Collapsed,
    Expanding,
    Revealed,
}

/// Handle for finishing the reveal started by one `enter`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTicket {
    id: AttractionId,
    epoch: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapHover {
    state: HoverState,
    phase: RevealPhase,
    epoch: u64,
}

impl MapHover {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> HoverState {
        self.state
    }

    /// Make `id` the only active marker.
    ///
    /// Re-entering the marker that is already active keeps its reveal
    /// progress and returns the ticket of the current epoch.
    pub fn enter(&mut self, id: AttractionId) -> RevealTicket {
        if self.state.is_active(id) {
            return RevealTicket {
                id,
                epoch: self.epoch,
            };
        }
        self.epoch = self.epoch.wrapping_add(1);
        self.state = HoverState::Active(id);
        self.phase = RevealPhase::Expanding;
        log::trace!("hover enter {} (epoch {})", id, self.epoch);
        RevealTicket {
            id,
            epoch: self.epoch,
        }
    }

    /// Back to idle; no-op when nothing is active
    pub fn leave(&mut self) {
        if self.state == HoverState::Idle {
            return;
        }
        self.epoch = self.epoch.wrapping_add(1);
        self.state = HoverState::Idle;
        self.phase = RevealPhase::Collapsed;
    }

    /// Finish the reveal for `ticket`. Returns false for stale tickets.
    pub fn reveal(&mut self, ticket: RevealTicket) -> bool {
        if ticket.epoch != self.epoch
            || !self.state.is_active(ticket.id)
            || self.phase != RevealPhase::Expanding
        {
            return false;
        }
        self.phase = RevealPhase::Revealed;
        true
    }

    /// Reveal phase of the detail panel for `id`
    pub fn phase_for(&self, id: AttractionId) -> RevealPhase {
        if self.state.is_active(id) {
            self.phase
        } else {
            RevealPhase::Collapsed
        }
    }
}
