//! Inner scrollable list collaborator
//!
//! Offsets are kept in sub-row units so the coordinator's slop and
//! duration arithmetic has some resolution on a terminal grid.

use pullreveal_core::{Direction, ListScrollState, ScrollTarget};

/// Sub-row units per terminal row
pub const UNITS_PER_ROW: i32 = 8;

/// Velocity decay rate per second for flings
const FLING_FRICTION: f32 = 4.0;

/// Flings slower than this (units per second) stop
const MIN_FLING_VELOCITY: f32 = 20.0;

#[derive(Debug, Clone, Default)]
pub struct InnerList {
    items: Vec<String>,
    /// Content offset in units (0 = first item at the top)
    offset: i32,
    viewport_rows: i32,
    state: ListScrollState,
    /// Fling velocity in units per second
    velocity: f32,
    /// Sub-unit carry so slow flings still move
    fling_carry: f32,
}

impl InnerList {
    pub fn new(items: Vec<String>) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn set_viewport_rows(&mut self, rows: u16) {
        self.viewport_rows = rows as i32;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn max_offset(&self) -> i32 {
        (self.items.len() as i32 * UNITS_PER_ROW - self.viewport_rows * UNITS_PER_ROW).max(0)
    }

    pub fn first_visible_index(&self) -> usize {
        (self.offset / UNITS_PER_ROW) as usize
    }

    /// Whether the first item is completely on screen
    pub fn first_item_fully_visible(&self) -> bool {
        !self.items.is_empty() && self.offset == 0
    }

    /// Move content by `dy` units; returns the amount actually applied
    pub fn scroll_by(&mut self, dy: i32) -> i32 {
        let before = self.offset;
        self.offset = self.offset.saturating_add(dy).clamp(0, self.max_offset());
        self.offset - before
    }

    /// Place item `index` `offset` units below the top of the viewport
    pub fn scroll_to_position_with_offset(&mut self, index: usize, offset: i32) {
        let target = (index as i32)
            .saturating_mul(UNITS_PER_ROW)
            .saturating_sub(offset);
        self.offset = target.clamp(0, self.max_offset());
    }

    pub fn state(&self) -> ListScrollState {
        self.state
    }

    /// Record a new scroll state; returns whether it changed
    pub fn set_state(&mut self, state: ListScrollState) -> bool {
        let changed = self.state != state;
        self.state = state;
        changed
    }

    pub fn start_fling(&mut self, velocity: f32) {
        self.velocity = velocity;
        self.fling_carry = 0.0;
    }

    pub fn stop_fling(&mut self) {
        self.velocity = 0.0;
        self.fling_carry = 0.0;
    }

    pub fn is_flinging(&self) -> bool {
        self.velocity.abs() >= MIN_FLING_VELOCITY
    }

    /// Scroll delta produced by the fling over `dt_secs`
    pub fn fling_step(&mut self, dt_secs: f32) -> i32 {
        if !self.is_flinging() {
            self.stop_fling();
            return 0;
        }
        let travel = self.velocity * dt_secs + self.fling_carry;
        let delta = travel.trunc();
        self.fling_carry = travel - delta;
        self.velocity *= (-FLING_FRICTION * dt_secs).exp();
        delta as i32
    }
}

impl ScrollTarget for InnerList {
    fn can_scroll_beyond(&self, direction: Direction) -> bool {
        match direction {
            Direction::Top => self.offset > 0,
            Direction::Bottom => self.offset < self.max_offset(),
        }
    }
}
