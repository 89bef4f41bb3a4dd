//! L4 Atomic Layer: Combined scroll offset and its three landmarks
//!
//! The container scrolls along a single axis covering
//! `[top region][list viewport][bottom region]`. Offset `0` shows the top
//! region completely, `top_extent` shows only the list, and
//! `top_extent + bottom_extent` shows the bottom region completely.

use super::types::Direction;

/// Single source of truth for the container offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollPositionModel {
    position: i32,
    top_bound: i32,
    rest_position: i32,
    bottom_bound: i32,
    top_extent: i32,
    bottom_extent: i32,
}

impl ScrollPositionModel {
    pub fn new(top_extent: i32, bottom_extent: i32) -> Self {
        let mut model = Self::default();
        model.set_landmarks(top_extent, bottom_extent);
        model
    }

    /// Recompute landmarks from region extents and snap to rest
    ///
    /// Returns `false` without touching the position when the extents are
    /// unchanged, so repeated layout passes do not disturb a gesture.
    pub fn set_landmarks(&mut self, top_extent: i32, bottom_extent: i32) -> bool {
        let top_extent = top_extent.max(0);
        // Keep bottom_bound representable
        let bottom_extent = bottom_extent.max(0).min(i32::MAX - top_extent);
        if self.has_layout()
            && top_extent == self.top_extent
            && bottom_extent == self.bottom_extent
        {
            return false;
        }

        self.top_extent = top_extent;
        self.bottom_extent = bottom_extent;
        self.top_bound = 0;
        self.rest_position = top_extent;
        self.bottom_bound = top_extent + bottom_extent;
        self.position = self.rest_position;
        true
    }

    /// Whether landmarks have been computed from a layout pass
    #[inline]
    pub fn has_layout(&self) -> bool {
        self.bottom_bound > 0
    }

    #[inline]
    pub fn position(&self) -> i32 {
        self.position
    }

    #[inline]
    pub fn top_bound(&self) -> i32 {
        self.top_bound
    }

    #[inline]
    pub fn rest_position(&self) -> i32 {
        self.rest_position
    }

    #[inline]
    pub fn bottom_bound(&self) -> i32 {
        self.bottom_bound
    }

    /// Bound `p` to `[top_bound, bottom_bound]`
    #[inline]
    pub fn clamp(&self, p: i32) -> i32 {
        p.clamp(self.top_bound, self.bottom_bound)
    }

    /// Bound `p` to the half of the range that reveals `direction`
    pub fn clamp_toward(&self, direction: Direction, p: i32) -> i32 {
        match direction {
            Direction::Top => p.clamp(self.top_bound, self.rest_position),
            Direction::Bottom => p.clamp(self.rest_position, self.bottom_bound),
        }
    }

    /// Move to `p` (clamped) and return the applied position
    pub fn set_position(&mut self, p: i32) -> i32 {
        self.position = self.clamp(p);
        self.position
    }

    pub fn snap_to_rest(&mut self) {
        self.position = self.rest_position;
    }

    /// Distance between the current position and rest
    #[inline]
    pub fn offset_from_rest(&self) -> i32 {
        (self.position - self.rest_position).abs()
    }

    #[inline]
    pub fn is_at_rest(&self) -> bool {
        self.position == self.rest_position
    }

    /// Offset at which the region in `direction` is fully revealed
    pub fn landmark(&self, direction: Direction) -> i32 {
        match direction {
            Direction::Top => self.top_bound,
            Direction::Bottom => self.bottom_bound,
        }
    }

    pub fn extent(&self, direction: Direction) -> i32 {
        match direction {
            Direction::Top => self.top_extent,
            Direction::Bottom => self.bottom_extent,
        }
    }

    /// Which region is currently (partially) revealed, if any
    pub fn revealed_direction(&self) -> Option<Direction> {
        match self.position.cmp(&self.rest_position) {
            std::cmp::Ordering::Less => Some(Direction::Top),
            std::cmp::Ordering::Greater => Some(Direction::Bottom),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// How much of the region in `direction` is currently visible
    pub fn revealed_extent(&self, direction: Direction) -> i32 {
        match direction {
            Direction::Top => (self.rest_position - self.position).max(0),
            Direction::Bottom => (self.position - self.rest_position).max(0),
        }
    }
}
