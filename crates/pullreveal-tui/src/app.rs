use std::time::Duration;

use tokio::sync::mpsc;

use pullreveal_core::{
    AppConfig, Direction, ListScrollState, LoadGestureController, Phase, PointerEvent,
    RevealEvent, ScrollSource,
};

use crate::indicator::RegionIndicator;
use crate::list::{InnerList, UNITS_PER_ROW};
use crate::pager::{PageList, PageResult};
use crate::theme::Theme;

/// Initial fling velocity per wheel notch, in units per second
const WHEEL_FLING_VELOCITY: f32 = 160.0;

/// Release speed (units per drag event) that turns a drag into a fling
const RELEASE_FLING_THRESHOLD: i32 = 2 * UNITS_PER_ROW;

/// Drag delta to fling velocity factor on release
const RELEASE_FLING_FACTOR: f32 = 30.0;

/// Application state
pub struct App {
    pub controller: LoadGestureController,
    pub list: InnerList,
    pub pager: PageList,
    pub theme: Theme,
    pub top_indicator: RegionIndicator,
    pub bottom_indicator: RegionIndicator,
    pub status_message: Option<String>,
    pub last_event: Option<RevealEvent>,
    pub should_quit: bool,
    pub spinner_frame: usize,
    /// Row of the last drag event; `None` while no drag reaches the list
    drag_row: Option<u16>,
    last_drag_delta: i32,
}

impl App {
    /// Build the demo state; reveal events are forwarded on `load_tx`
    pub fn new(config: &AppConfig, load_tx: mpsc::UnboundedSender<RevealEvent>) -> Self {
        let pager = PageList::new(&config.paging);
        let list = InnerList::new(pager.items());

        let mut controller = LoadGestureController::new(&config.reveal);
        controller.add_on_load_listener(move |event| {
            let _ = load_tx.send(event);
        });

        let top_indicator = RegionIndicator::new();
        let bottom_indicator = RegionIndicator::new();
        controller.set_indicator(Direction::Top, Box::new(top_indicator.clone()));
        controller.set_indicator(Direction::Bottom, Box::new(bottom_indicator.clone()));
        controller.on_layout(
            config.ui.top_extent.saturating_mul(UNITS_PER_ROW),
            config.ui.bottom_extent.saturating_mul(UNITS_PER_ROW),
        );

        let mut app = Self {
            controller,
            list,
            pager,
            theme: Theme::default(),
            top_indicator,
            bottom_indicator,
            status_message: None,
            last_event: None,
            should_quit: false,
            spinner_frame: 0,
            drag_row: None,
            last_drag_delta: 0,
        };
        app.sync_gates();
        app
    }

    /// Rows available to the inner list
    pub fn set_viewport_rows(&mut self, rows: u16) {
        self.list.set_viewport_rows(rows);
    }

    /// Whether the loop should poll at the animation frame rate
    pub fn needs_fast_update(&self) -> bool {
        self.controller.is_animating() || self.list.state() == ListScrollState::Settling
    }

    pub fn tick_spinner(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }

    pub fn is_busy(&self, direction: Direction) -> bool {
        match direction {
            Direction::Top => self.top_indicator.is_busy(),
            Direction::Bottom => self.bottom_indicator.is_busy(),
        }
    }

    // ----- pointer ------------------------------------------------------

    pub fn pointer_down(&mut self, row: u16) {
        self.list.stop_fling();
        self.end_nested();

        let swallowed = self
            .controller
            .on_pointer_event(PointerEvent::Down { y: row_to_y(row) }, &self.list);
        if swallowed {
            self.drag_row = None;
            self.set_list_state(ListScrollState::Idle);
            return;
        }
        self.begin_drag(row);
    }

    pub fn pointer_drag(&mut self, row: u16) {
        let swallowed = self
            .controller
            .on_pointer_event(PointerEvent::Move { y: row_to_y(row) }, &self.list);
        if swallowed {
            return;
        }

        let Some(last_row) = self.drag_row.replace(row) else {
            // Episode ended mid-stroke; the rest of the stroke drives the list
            self.begin_drag(row);
            return;
        };
        // Finger moving down pulls content toward the top
        let dy = (last_row as i32 - row as i32) * UNITS_PER_ROW;
        if dy == 0 {
            return;
        }
        self.last_drag_delta = dy;
        self.dispatch_scroll(dy);
    }

    pub fn pointer_up(&mut self) {
        let swallowed = self.controller.on_pointer_event(PointerEvent::Up, &self.list);
        let dragging = self.drag_row.take().is_some();
        self.end_nested();
        if swallowed || !dragging {
            return;
        }

        let container_moved = matches!(self.controller.phase(), Phase::Dragging(_));
        if !container_moved && self.last_drag_delta.abs() >= RELEASE_FLING_THRESHOLD {
            self.list
                .start_fling(self.last_drag_delta as f32 * RELEASE_FLING_FACTOR);
            self.begin_fling();
        } else {
            self.set_list_state(ListScrollState::Idle);
        }
        self.last_drag_delta = 0;
    }

    /// Wheel notches act as small flings; positive moves toward the bottom
    pub fn wheel(&mut self, notches: i32) {
        if self.drag_row.is_some() || notches == 0 {
            return;
        }
        self.list.start_fling(notches as f32 * WHEEL_FLING_VELOCITY);
        self.begin_fling();
    }

    /// Move the list without any gesture
    pub fn scroll_rows(&mut self, rows: i32) {
        let applied = self.list.scroll_by(rows * UNITS_PER_ROW);
        self.controller.on_scrolled(applied);
    }

    pub fn toggle_gate(&mut self, direction: Direction) {
        let enabled = !self.controller.gates().is_enabled(direction);
        self.controller.set_gate(direction, enabled);
        self.status_message = Some(format!(
            " {} region {}",
            direction,
            if enabled { "enabled" } else { "disabled" }
        ));
    }

    // ----- frames -------------------------------------------------------

    /// Advance flings and the reveal transition by `dt`
    ///
    /// Returns the event dispatched on this frame, if a reveal completed.
    pub fn on_frame(&mut self, dt: Duration) -> Option<RevealEvent> {
        if self.list.state() == ListScrollState::Settling {
            let dy = self.list.fling_step(dt.as_secs_f32());
            if dy != 0 {
                let (consumed, applied) = self.dispatch_scroll(dy);
                if applied != dy - consumed {
                    // Hit the list edge
                    self.list.stop_fling();
                }
            }
            if !self.list.is_flinging() {
                self.list.stop_fling();
                self.end_nested();
                self.set_list_state(ListScrollState::Idle);
            }
        }
        self.controller.tick(dt)
    }

    // ----- paging -------------------------------------------------------

    /// Answer a reveal event by loading a page
    pub fn on_reveal(&mut self, event: RevealEvent, page_tx: &mpsc::UnboundedSender<PageResult>) {
        self.last_event = Some(event);
        let direction = event.direction();
        if self.pager.request(direction, page_tx.clone()) {
            self.status_message = Some(format!(" Loading {} page...", page_label(direction)));
        } else {
            tracing::warn!(%direction, "Page load already running, closing episode");
            self.controller.stop_loading(true);
        }
    }

    /// Adopt a finished page and end the load episode
    pub fn apply_page(&mut self, result: PageResult) {
        let keep_anchor = self.list.first_item_fully_visible();
        let anchor_offset = self.controller.target_view_offset();

        let previous = self.pager.finish(&result);
        let window = *self.pager.window();
        self.list.set_items(self.pager.items());

        if result.direction == Direction::Top && keep_anchor {
            // Keep the previously first item where it was on screen
            if let Some(index) = window.index_of(previous.from_id()) {
                self.list.scroll_to_position_with_offset(index, anchor_offset);
            }
        }

        let added = window.len().saturating_sub(previous.len());
        tracing::info!(direction = %result.direction, added, "Page applied");
        self.controller.stop_loading(added == 0);
        self.sync_gates();
        self.status_message = Some(format!(
            " Loaded {} {} messages ({}..{})",
            added,
            page_label(result.direction),
            window.from_id(),
            window.to_id()
        ));
    }

    // ----- internals ----------------------------------------------------

    fn begin_drag(&mut self, row: u16) {
        self.drag_row = Some(row);
        self.last_drag_delta = 0;
        self.set_list_state(ListScrollState::Dragging);
        self.controller.on_start_nested_scroll(ScrollSource::Touch);
    }

    fn begin_fling(&mut self) {
        self.set_list_state(ListScrollState::Settling);
        if self.controller.nested_scroll_source().is_none() {
            self.controller.on_start_nested_scroll(ScrollSource::Fling);
        }
    }

    fn end_nested(&mut self) {
        if self.controller.nested_scroll_source().is_some() {
            self.controller.on_stop_nested_scroll();
        }
    }

    /// Offer `dy` to the container, hand the rest to the list
    ///
    /// Returns `(consumed, applied)`.
    fn dispatch_scroll(&mut self, dy: i32) -> (i32, i32) {
        let mut consumed = 0;
        if self.controller.nested_scroll_source().is_some() {
            self.controller
                .on_nested_pre_scroll(dy, &mut consumed, &self.list);
        }
        let remainder = dy - consumed;
        let applied = self.list.scroll_by(remainder);
        // A wheel fling at the list edge still counts as landing there
        self.controller.on_scrolled(remainder);
        (consumed, applied)
    }

    fn set_list_state(&mut self, state: ListScrollState) {
        if self.list.set_state(state) {
            self.controller.on_scroll_state_changed(state, &self.list);
        }
    }

    fn sync_gates(&mut self) {
        let window = *self.pager.window();
        self.controller
            .set_show_top_loading_view(window.has_more(Direction::Top));
        self.controller
            .set_show_bottom_loading_view(window.has_more(Direction::Bottom));
    }
}

fn row_to_y(row: u16) -> f32 {
    (row as i32 * UNITS_PER_ROW) as f32
}

fn page_label(direction: Direction) -> &'static str {
    match direction {
        Direction::Top => "older",
        Direction::Bottom => "newer",
    }
}
