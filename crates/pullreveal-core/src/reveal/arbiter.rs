//! L3 Molecular Layer: Per-delta ownership of nested scroll motion
//!
//! Every scroll increment the inner list is about to apply is first offered
//! here. Depending on the classified intent the container either takes the
//! whole delta (moving its own offset) or leaves it to the list.

use super::position::ScrollPositionModel;
use super::types::{Direction, Intent, ScrollSource, ScrollTarget};

/// Per-direction switches for whether a region may be revealed at all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityGates {
    pub top_enabled: bool,
    pub bottom_enabled: bool,
}

impl Default for VisibilityGates {
    fn default() -> Self {
        Self {
            top_enabled: true,
            bottom_enabled: true,
        }
    }
}

impl VisibilityGates {
    pub fn is_enabled(&self, direction: Direction) -> bool {
        match direction {
            Direction::Top => self.top_enabled,
            Direction::Bottom => self.bottom_enabled,
        }
    }

    pub fn set(&mut self, direction: Direction, enabled: bool) {
        match direction {
            Direction::Top => self.top_enabled = enabled,
            Direction::Bottom => self.bottom_enabled = enabled,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NestedScrollArbiter {
    /// Source of the nested scroll sequence currently accepted
    accepted: Option<ScrollSource>,
}

impl NestedScrollArbiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide whether to take part in a nested scroll sequence
    ///
    /// Touch sequences are always accepted. A fling is declined while the
    /// container already rests against the bound on the side it has been
    /// pulled toward; otherwise its deltas would be swallowed for the whole
    /// fling.
    pub fn on_start_nested_scroll(&mut self, source: ScrollSource, model: &ScrollPositionModel) -> bool {
        if source == ScrollSource::Fling && Self::pinned_at_bound(model) {
            tracing::trace!(position = model.position(), "Declined fling at bound");
            return false;
        }
        self.accepted = Some(source);
        true
    }

    pub fn on_stop_nested_scroll(&mut self) {
        self.accepted = None;
    }

    /// Source of the accepted sequence, if any
    pub fn accepted(&self) -> Option<ScrollSource> {
        self.accepted
    }

    /// Offer `dy` to the container before the list applies it
    ///
    /// On consumption the full `dy` is written into `consumed` and the
    /// direction that moved is returned.
    pub fn on_nested_pre_scroll(
        &self,
        dy: i32,
        consumed: &mut i32,
        intent: Intent,
        gates: VisibilityGates,
        model: &mut ScrollPositionModel,
        list: &dyn ScrollTarget,
    ) -> Option<Direction> {
        if dy == 0 || self.accepted.is_none() {
            return None;
        }
        let direction = intent.direction()?;
        if !gates.is_enabled(direction) || list.can_scroll_beyond(direction) {
            return None;
        }

        let rest = model.rest_position();
        let on_side = match direction {
            Direction::Top => model.position() <= rest,
            Direction::Bottom => model.position() >= rest,
        };
        if !on_side {
            return None;
        }

        let moved = model.clamp(model.position().saturating_add(dy));
        let target = model.clamp_toward(direction, moved);
        model.set_position(target);
        *consumed = dy;
        tracing::trace!(dy, position = target, %direction, "Consumed nested pre-scroll");
        Some(direction)
    }

    fn pinned_at_bound(model: &ScrollPositionModel) -> bool {
        let position = model.position();
        let rest = model.rest_position();
        (position < rest && position == model.top_bound())
            || (position > rest && position == model.bottom_bound())
    }
}
