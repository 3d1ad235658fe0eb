//! Per-vehicle reveal state.

use serde::Serialize;

/// Where a vehicle's route stands in its progressive reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", content = "revealed", rename_all = "snake_case")]
pub enum RevealPhase {
    /// Nothing is drawn for this vehicle.
    Hidden,
    /// Visible with this many leading stops drawn, fewer than the total.
    PartiallyRevealed(usize),
    /// Visible with every stop drawn and the return leg closed.
    FullyRevealed,
}

/// Visibility and reveal progress of one vehicle's route.
///
/// `revealed_stop_count` always stays within `0..=total_stops`; every
/// mutation clamps instead of failing.
///
/// # Examples
///
/// ```
/// use fleet_routes::visibility::{RevealPhase, VisibilityState};
///
/// let mut state = VisibilityState::initial(3, 2);
/// assert_eq!(state.phase(), RevealPhase::PartiallyRevealed(2));
/// state.reveal_next();
/// assert_eq!(state.phase(), RevealPhase::FullyRevealed);
/// state.toggle();
/// assert_eq!(state.phase(), RevealPhase::Hidden);
/// assert_eq!(state.revealed_stop_count(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisibilityState {
    visible: bool,
    revealed_stop_count: usize,
    total_stops: usize,
}

impl VisibilityState {
    /// State of a freshly installed route: visible, with the first
    /// `min(initial_reveal, total_stops)` stops revealed.
    pub fn initial(total_stops: usize, initial_reveal: usize) -> Self {
        Self {
            visible: true,
            revealed_stop_count: initial_reveal.min(total_stops),
            total_stops,
        }
    }

    /// Whether the route is drawn at all.
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Number of leading stops currently revealed.
    pub fn revealed_stop_count(&self) -> usize {
        self.revealed_stop_count
    }

    /// Number of stops on the route.
    pub fn total_stops(&self) -> usize {
        self.total_stops
    }

    /// Returns `true` once every stop is revealed.
    pub fn is_fully_revealed(&self) -> bool {
        self.revealed_stop_count == self.total_stops
    }

    /// Current phase of the reveal state machine.
    pub fn phase(&self) -> RevealPhase {
        if !self.visible {
            RevealPhase::Hidden
        } else if self.is_fully_revealed() {
            RevealPhase::FullyRevealed
        } else {
            RevealPhase::PartiallyRevealed(self.revealed_stop_count)
        }
    }

    /// Flips visibility. Reveal progress is kept.
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Shows or hides the route. Reveal progress is kept.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Reveals one more stop, stopping at the last one.
    pub fn reveal_next(&mut self) {
        self.revealed_stop_count = (self.revealed_stop_count + 1).min(self.total_stops);
    }

    /// Sets the revealed count, clamped to `0..=total_stops`.
    pub fn set_revealed(&mut self, count: usize) {
        self.revealed_stop_count = count.min(self.total_stops);
    }
}
