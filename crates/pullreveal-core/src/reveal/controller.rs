//! L2 Organism Layer: The load gesture state machine
//!
//! [`LoadGestureController`] owns every piece of reveal state: the position
//! model, the gesture classifier, the nested scroll arbiter and the
//! transition animator. Hosts feed it pointer events, nested scroll
//! callbacks, list scroll-state changes and frame ticks; consumers register
//! listeners and end each load episode with [`LoadGestureController::stop_loading`].
//!
//! All methods run on the UI thread. Listeners must not call back into the
//! controller synchronously; they should queue work (e.g. send on a channel)
//! and report completion later.

use std::time::Duration;

use crate::config::{RevealConfig, RevealKind};

use super::animator::{Tick, TransitionAnimator};
use super::arbiter::{NestedScrollArbiter, VisibilityGates};
use super::gesture::GestureClassifier;
use super::position::ScrollPositionModel;
use super::types::{
    Direction, Intent, ListScrollState, LoadIndicator, PointerEvent, RevealEvent, ScrollSource,
    ScrollTarget,
};

/// Coordinator state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// At rest, no episode
    #[default]
    Idle,
    /// Position tracks the finger, revealing `Direction`
    Dragging(Direction),
    /// Transition toward the bound of `Direction`
    AnimatingToActive(Direction),
    /// Episode open, pinned at the bound, touch swallowed
    Active(Direction),
    /// Transition back to rest, episode cleared
    AnimatingToRest,
}

/// Which trigger paths settle a gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerPolicy {
    /// Settle when the pointer is released
    pub on_release: bool,
    /// Settle when the inner list reports idle after a drag
    pub on_idle: bool,
    /// Reveal when a fling comes to rest at the list edge
    pub on_fling_settle: bool,
}

/// Handle returned by [`LoadGestureController::add_on_load_listener`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// One reveal-notify-collapse cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LoadEpisode {
    direction: Direction,
}

/// Where a running transition is headed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Goal {
    Reveal(Direction),
    Rest,
}

type Listener = Box<dyn FnMut(RevealEvent)>;

#[derive(Default)]
struct Indicators {
    top: Option<Box<dyn LoadIndicator>>,
    bottom: Option<Box<dyn LoadIndicator>>,
}

impl Indicators {
    fn get_mut(&mut self, direction: Direction) -> Option<&mut (dyn LoadIndicator + 'static)> {
        match direction {
            Direction::Top => self.top.as_deref_mut(),
            Direction::Bottom => self.bottom.as_deref_mut(),
        }
    }
}

pub struct LoadGestureController {
    model: ScrollPositionModel,
    classifier: GestureClassifier,
    arbiter: NestedScrollArbiter,
    animator: TransitionAnimator<Goal>,
    gates: VisibilityGates,
    episode: Option<LoadEpisode>,
    phase: Phase,
    enabled: bool,
    kind: RevealKind,
    policy: TriggerPolicy,
    touch_slop: i32,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
    indicators: Indicators,
    last_scroll_state: ListScrollState,
    last_scroll_delta: i32,
}

impl LoadGestureController {
    pub fn new(config: &RevealConfig) -> Self {
        Self {
            model: ScrollPositionModel::default(),
            classifier: GestureClassifier::new(),
            arbiter: NestedScrollArbiter::new(),
            animator: TransitionAnimator::new(
                config.base_duration(),
                config.easing,
            ),
            gates: VisibilityGates::default(),
            episode: None,
            phase: Phase::Idle,
            enabled: true,
            kind: config.kind,
            policy: config.trigger_policy(),
            touch_slop: config.touch_slop.max(0),
            listeners: Vec::new(),
            next_listener_id: 0,
            indicators: Indicators::default(),
            last_scroll_state: ListScrollState::Idle,
            last_scroll_delta: 0,
        }
    }

    // ----- layout -------------------------------------------------------

    /// Report region extents after a layout pass
    ///
    /// Landmarks are recomputed only when an extent changed. An open episode
    /// stays pinned to its (new) bound, and a reveal in flight is restarted.
    pub fn on_layout(&mut self, top_extent: i32, bottom_extent: i32) {
        if !self.model.set_landmarks(top_extent, bottom_extent) {
            return;
        }
        tracing::debug!(
            top_extent,
            bottom_extent,
            rest = self.model.rest_position(),
            "Landmarks computed"
        );

        self.animator.cancel();
        match (self.episode, self.phase) {
            (Some(episode), _) => {
                self.model.set_position(self.model.landmark(episode.direction));
                self.set_phase(Phase::Active(episode.direction));
            }
            (None, Phase::AnimatingToActive(direction)) => self.begin_reveal(direction),
            (None, _) => self.set_phase(Phase::Idle),
        }
    }

    // ----- touch --------------------------------------------------------

    /// Feed a raw pointer event; returns `true` when the event is swallowed
    /// and must not reach the inner list
    pub fn on_pointer_event(&mut self, event: PointerEvent, list: &dyn ScrollTarget) -> bool {
        if !self.enabled {
            return false;
        }

        if self.swallows_touch() {
            match event {
                PointerEvent::Down { y } => self.classifier.pointer_down(y, true),
                PointerEvent::Up | PointerEvent::Cancel => self.classifier.pointer_up(),
                PointerEvent::Move { .. } => {}
            }
            return true;
        }

        match event {
            PointerEvent::Down { y } => self.classifier.pointer_down(y, self.episode.is_some()),
            PointerEvent::Move { y } => {
                self.classifier.pointer_move(y, list);
            }
            PointerEvent::Up | PointerEvent::Cancel => {
                self.classifier.pointer_up();
                if self.policy.on_release {
                    self.settle();
                }
            }
        }
        false
    }

    // ----- nested scroll ------------------------------------------------

    /// Whether the container takes part in a nested scroll sequence
    pub fn on_start_nested_scroll(&mut self, source: ScrollSource) -> bool {
        if !self.enabled {
            return false;
        }
        self.arbiter.on_start_nested_scroll(source, &self.model)
    }

    pub fn on_stop_nested_scroll(&mut self) {
        self.arbiter.on_stop_nested_scroll();
    }

    /// Source of the nested scroll sequence the container takes part in
    pub fn nested_scroll_source(&self) -> Option<ScrollSource> {
        self.arbiter.accepted()
    }

    /// Offer a scroll delta before the inner list applies it
    ///
    /// Whatever the container takes is written into `consumed`; the list
    /// applies only `dy - consumed`.
    pub fn on_nested_pre_scroll(&mut self, dy: i32, consumed: &mut i32, list: &dyn ScrollTarget) {
        if !matches!(self.phase, Phase::Idle | Phase::Dragging(_)) {
            return;
        }
        let acted = self.arbiter.on_nested_pre_scroll(
            dy,
            consumed,
            self.classifier.intent(),
            self.gates,
            &mut self.model,
            list,
        );
        if let Some(direction) = acted {
            self.set_phase(Phase::Dragging(direction));
        }
    }

    // ----- list scroll notifications ------------------------------------

    pub fn on_scroll_state_changed(&mut self, state: ListScrollState, list: &dyn ScrollTarget) {
        let previous = std::mem::replace(&mut self.last_scroll_state, state);
        if state != ListScrollState::Idle {
            return;
        }

        if self.policy.on_idle {
            self.settle();
        }

        if self.policy.on_fling_settle
            && previous == ListScrollState::Settling
            && self.phase == Phase::Idle
            && self.model.is_at_rest()
        {
            let landed = match self.last_scroll_delta.signum() {
                -1 => Some(Direction::Top),
                1 => Some(Direction::Bottom),
                _ => None,
            };
            if let Some(direction) = landed {
                if self.gates.is_enabled(direction) && !list.can_scroll_beyond(direction) {
                    tracing::debug!(%direction, "Fling settled at list edge");
                    self.begin_reveal(direction);
                }
            }
        }

        self.last_scroll_delta = 0;
    }

    /// The inner list moved its content by `dy`
    pub fn on_scrolled(&mut self, dy: i32) {
        if dy != 0 {
            self.last_scroll_delta = dy;
        }
    }

    // ----- animation ----------------------------------------------------

    /// Advance the running transition by `dt`
    ///
    /// Returns the event dispatched to listeners on this tick, if a reveal
    /// completed.
    pub fn tick(&mut self, dt: Duration) -> Option<RevealEvent> {
        match self.animator.tick(dt) {
            Tick::Idle => None,
            Tick::Frame(position) => {
                self.model.set_position(position);
                None
            }
            Tick::Finished { position, goal } => {
                self.model.set_position(position);
                self.on_transition_finished(goal)
            }
        }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /// Duration of the running transition
    pub fn transition_duration(&self) -> Option<Duration> {
        self.animator.duration()
    }

    // ----- consumer API -------------------------------------------------

    /// Reveal `direction` programmatically, bypassing the gesture
    pub fn start_loading(&mut self, direction: Direction) {
        if !self.gates.is_enabled(direction) {
            tracing::debug!(%direction, "start_loading ignored, region disabled");
            return;
        }
        match self.phase {
            Phase::AnimatingToActive(current) | Phase::Active(current) if current == direction => {
                return;
            }
            _ => {}
        }
        self.end_episode();
        self.begin_reveal(direction);
    }

    /// End the current episode and return to rest
    pub fn stop_loading(&mut self, animate: bool) {
        if !matches!(self.phase, Phase::AnimatingToActive(_) | Phase::Active(_)) {
            return;
        }
        self.animator.cancel();
        self.end_episode();
        if animate {
            self.animate_to_rest();
        } else {
            self.model.snap_to_rest();
            self.set_phase(Phase::Idle);
        }
    }

    pub fn add_on_load_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(RevealEvent) + 'static,
    {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns whether a listener was removed
    pub fn remove_on_load_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn set_show_top_loading_view(&mut self, show: bool) {
        self.set_gate(Direction::Top, show);
    }

    pub fn set_show_bottom_loading_view(&mut self, show: bool) {
        self.set_gate(Direction::Bottom, show);
    }

    pub fn set_gate(&mut self, direction: Direction, enabled: bool) {
        if self.gates.is_enabled(direction) != enabled {
            tracing::debug!(%direction, enabled, "Visibility gate changed");
        }
        self.gates.set(direction, enabled);
    }

    /// Attach the busy indicator of a region
    pub fn set_indicator(&mut self, direction: Direction, indicator: Box<dyn LoadIndicator>) {
        match direction {
            Direction::Top => self.indicators.top = Some(indicator),
            Direction::Bottom => self.indicators.bottom = Some(indicator),
        }
    }

    /// Offset of the list from its resting place, used to keep the
    /// previously visible item stationary after prepending content
    #[inline]
    pub fn target_view_offset(&self) -> i32 {
        self.model.offset_from_rest()
    }

    #[inline]
    pub fn is_loading(&self) -> bool {
        self.episode.is_some()
    }

    pub fn loading_direction(&self) -> Option<Direction> {
        self.episode.map(|e| e.direction)
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn position(&self) -> i32 {
        self.model.position()
    }

    pub fn model(&self) -> &ScrollPositionModel {
        &self.model
    }

    pub fn gates(&self) -> VisibilityGates {
        self.gates
    }

    pub fn intent(&self) -> Intent {
        self.classifier.intent()
    }

    pub fn kind(&self) -> RevealKind {
        self.kind
    }

    pub fn trigger_policy(&self) -> TriggerPolicy {
        self.policy
    }

    // ----- internals ----------------------------------------------------

    fn swallows_touch(&self) -> bool {
        matches!(self.phase, Phase::AnimatingToActive(_) | Phase::Active(_))
    }

    /// Finish a drag: commit the reveal or fall back to rest
    fn settle(&mut self) {
        let Phase::Dragging(_) = self.phase else {
            return;
        };

        let offset = self.model.offset_from_rest();
        match self.model.revealed_direction() {
            None => self.set_phase(Phase::Idle),
            Some(_) if offset < self.touch_slop => {
                tracing::debug!(offset, slop = self.touch_slop, "Drag below slop, snapping back");
                self.animate_to_rest();
            }
            Some(direction) => self.begin_reveal(direction),
        }
    }

    fn begin_reveal(&mut self, direction: Direction) {
        if !self.gates.is_enabled(direction) {
            self.animate_to_rest();
            return;
        }
        let duration = self.animator.animate_to(
            self.model.position(),
            self.model.landmark(direction),
            self.model.extent(direction),
            Goal::Reveal(direction),
        );
        tracing::debug!(%direction, duration_ms = duration.as_millis() as u64, "Revealing region");
        self.set_phase(Phase::AnimatingToActive(direction));
    }

    fn animate_to_rest(&mut self) {
        let Some(direction) = self.model.revealed_direction() else {
            self.animator.cancel();
            self.set_phase(Phase::Idle);
            return;
        };
        self.animator.animate_to(
            self.model.position(),
            self.model.rest_position(),
            self.model.extent(direction),
            Goal::Rest,
        );
        self.set_phase(Phase::AnimatingToRest);
    }

    fn on_transition_finished(&mut self, goal: Goal) -> Option<RevealEvent> {
        match goal {
            Goal::Rest => {
                self.set_phase(Phase::Idle);
                None
            }
            Goal::Reveal(direction) => {
                self.episode = Some(LoadEpisode { direction });
                self.set_phase(Phase::Active(direction));
                if let Some(indicator) = self.indicators.get_mut(direction) {
                    indicator.loading();
                }

                let event = RevealEvent::new(self.kind, direction);
                tracing::info!(?event, "Region revealed, notifying listeners");
                for (_, listener) in self.listeners.iter_mut() {
                    listener(event);
                }
                Some(event)
            }
        }
    }

    fn end_episode(&mut self) {
        if let Some(episode) = self.episode.take() {
            tracing::debug!(direction = %episode.direction, "Load episode ended");
            if let Some(indicator) = self.indicators.get_mut(episode.direction) {
                indicator.reset();
            }
        }
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            tracing::debug!(from = ?self.phase, to = ?phase, position = self.model.position(), "Phase change");
            self.phase = phase;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Inner list whose edges are controlled by the test
    #[derive(Default)]
    struct FakeList {
        can_top: bool,
        can_bottom: bool,
    }

    impl ScrollTarget for FakeList {
        fn can_scroll_beyond(&self, direction: Direction) -> bool {
            match direction {
                Direction::Top => self.can_top,
                Direction::Bottom => self.can_bottom,
            }
        }
    }

    struct RecordingIndicator {
        calls: Rc<RefCell<Vec<&'static str>>>,
    }

    impl LoadIndicator for RecordingIndicator {
        fn loading(&mut self) {
            self.calls.borrow_mut().push("loading");
        }

        fn reset(&mut self) {
            self.calls.borrow_mut().push("reset");
        }
    }

    fn config(slop: i32) -> RevealConfig {
        RevealConfig {
            touch_slop: slop,
            easing: crate::config::EasingType::Linear,
            ..Default::default()
        }
    }

    /// Controller with rest at 40 and both regions 40 tall
    fn controller(config: &RevealConfig) -> (LoadGestureController, Rc<RefCell<Vec<RevealEvent>>>) {
        let mut controller = LoadGestureController::new(config);
        controller.on_layout(40, 40);
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        controller.add_on_load_listener(move |event| sink.borrow_mut().push(event));
        (controller, events)
    }

    fn run_to_end(controller: &mut LoadGestureController) {
        for _ in 0..100 {
            if !controller.is_animating() {
                return;
            }
            controller.tick(Duration::from_millis(16));
        }
        panic!("transition did not finish");
    }

    /// Drag by scroll delta `dy` with the given finger motion
    fn drag(controller: &mut LoadGestureController, list: &FakeList, finger_dy: f32, dy: i32) {
        controller.on_pointer_event(PointerEvent::Down { y: 100.0 }, list);
        controller.on_scroll_state_changed(ListScrollState::Dragging, list);
        assert!(controller.on_start_nested_scroll(ScrollSource::Touch));
        controller.on_pointer_event(PointerEvent::Move { y: 100.0 + finger_dy }, list);
        let mut consumed = 0;
        controller.on_nested_pre_scroll(dy, &mut consumed, list);
    }

    fn release(controller: &mut LoadGestureController, list: &FakeList) {
        controller.on_pointer_event(PointerEvent::Up, list);
        controller.on_stop_nested_scroll();
        controller.on_scroll_state_changed(ListScrollState::Idle, list);
    }

    #[test]
    fn test_end_to_end_top_reveal() {
        let list = FakeList::default();
        let (mut controller, events) = controller(&config(10));
        assert_eq!(controller.model().rest_position(), 40);

        controller.on_pointer_event(PointerEvent::Down { y: 0.0 }, &list);
        controller.on_scroll_state_changed(ListScrollState::Dragging, &list);
        assert!(controller.on_start_nested_scroll(ScrollSource::Touch));
        controller.on_pointer_event(PointerEvent::Move { y: 20.0 }, &list);
        assert_eq!(controller.intent(), Intent::TowardTop);

        let mut consumed = 0;
        controller.on_nested_pre_scroll(-20, &mut consumed, &list);
        assert_eq!(consumed, -20);
        assert_eq!(controller.position(), 20);
        assert_eq!(controller.phase(), Phase::Dragging(Direction::Top));

        release(&mut controller, &list);
        assert_eq!(controller.phase(), Phase::AnimatingToActive(Direction::Top));
        run_to_end(&mut controller);

        assert_eq!(controller.position(), 0);
        assert_eq!(*events.borrow(), vec![RevealEvent::Load(Direction::Top)]);
        assert!(controller.is_loading());
        assert_eq!(controller.phase(), Phase::Active(Direction::Top));

        controller.stop_loading(true);
        assert_eq!(controller.phase(), Phase::AnimatingToRest);
        assert!(!controller.is_loading());
        run_to_end(&mut controller);

        assert_eq!(controller.position(), 40);
        assert_eq!(controller.phase(), Phase::Idle);
        assert!(!controller.is_loading());
        assert_eq!(events.borrow().len(), 1);
    }

    #[test]
    fn test_drag_below_slop_snaps_back_without_event() {
        let list = FakeList::default();
        let (mut controller, events) = controller(&config(10));

        drag(&mut controller, &list, -5.0, 5);
        assert_eq!(controller.position(), 45);
        release(&mut controller, &list);

        assert_eq!(controller.phase(), Phase::AnimatingToRest);
        run_to_end(&mut controller);
        assert_eq!(controller.position(), 40);
        assert!(events.borrow().is_empty());
        assert!(!controller.is_loading());
    }

    #[test]
    fn test_drag_past_slop_reveals_top_once() {
        let list = FakeList::default();
        let (mut controller, events) = controller(&config(10));

        drag(&mut controller, &list, 15.0, -15);
        assert_eq!(controller.position(), 25);
        release(&mut controller, &list);
        run_to_end(&mut controller);

        assert_eq!(controller.position(), 0);
        assert_eq!(*events.borrow(), vec![RevealEvent::Load(Direction::Top)]);
        // Further ticks never re-fire
        controller.tick(Duration::from_millis(500));
        assert_eq!(events.borrow().len(), 1);
    }

    #[test]
    fn test_drag_bottom_reveal_with_refresh_kind() {
        let list = FakeList::default();
        let config = RevealConfig {
            kind: RevealKind::Refresh,
            ..config(10)
        };
        let (mut controller, events) = controller(&config);

        drag(&mut controller, &list, -30.0, 30);
        assert_eq!(controller.phase(), Phase::Dragging(Direction::Bottom));
        release(&mut controller, &list);
        run_to_end(&mut controller);

        assert_eq!(controller.position(), 80);
        assert_eq!(*events.borrow(), vec![RevealEvent::Refresh(Direction::Bottom)]);
    }

    #[test]
    fn test_release_trigger_settles_on_pointer_up() {
        let list = FakeList::default();
        let config = RevealConfig {
            release_trigger: true,
            idle_trigger: false,
            ..config(10)
        };
        let (mut controller, _) = controller(&config);

        drag(&mut controller, &list, 20.0, -20);
        controller.on_pointer_event(PointerEvent::Up, &list);
        assert_eq!(controller.phase(), Phase::AnimatingToActive(Direction::Top));
    }

    #[test]
    fn test_idle_only_policy_waits_for_list_idle() {
        let list = FakeList::default();
        let (mut controller, _) = controller(&config(10));

        drag(&mut controller, &list, 20.0, -20);
        controller.on_pointer_event(PointerEvent::Up, &list);
        assert_eq!(controller.phase(), Phase::Dragging(Direction::Top));

        controller.on_scroll_state_changed(ListScrollState::Idle, &list);
        assert_eq!(controller.phase(), Phase::AnimatingToActive(Direction::Top));
    }

    #[test]
    fn test_drag_settles_with_both_drag_triggers_off() {
        let list = FakeList::default();
        let config = RevealConfig {
            release_trigger: false,
            idle_trigger: false,
            ..config(10)
        };
        let (mut controller, events) = controller(&config);
        assert!(controller.trigger_policy().on_idle);

        drag(&mut controller, &list, 20.0, -20);
        release(&mut controller, &list);
        assert_eq!(controller.phase(), Phase::AnimatingToActive(Direction::Top));
        run_to_end(&mut controller);
        assert_eq!(*events.borrow(), vec![RevealEvent::Load(Direction::Top)]);
    }

    #[test]
    fn test_extreme_drag_deltas_stay_in_bounds() {
        let list = FakeList::default();
        let (mut controller, _) = controller(&config(10));

        drag(&mut controller, &list, -5.0, i32::MAX);
        assert_eq!(controller.position(), 80);
        let mut consumed = 0;
        controller.on_nested_pre_scroll(i32::MIN, &mut consumed, &list);
        assert_eq!(controller.position(), 40);
        assert_eq!(consumed, i32::MIN);
        release(&mut controller, &list);
        assert_eq!(controller.phase(), Phase::Idle);
    }

    #[test]
    fn test_nested_scroll_source_tracks_sequence() {
        let (mut controller, _) = controller(&config(10));
        assert_eq!(controller.nested_scroll_source(), None);
        assert!(controller.on_start_nested_scroll(ScrollSource::Fling));
        assert_eq!(controller.nested_scroll_source(), Some(ScrollSource::Fling));
        controller.on_stop_nested_scroll();
        assert_eq!(controller.nested_scroll_source(), None);
    }

    #[test]
    fn test_position_stays_within_bounds() {
        let list = FakeList::default();
        let (mut controller, _) = controller(&config(10));
        let mut seed: u32 = 0x2545_f491;

        for stroke in 0..50 {
            let finger = if stroke % 2 == 0 { 10.0 } else { -10.0 };
            controller.on_pointer_event(PointerEvent::Down { y: 0.0 }, &list);
            controller.on_start_nested_scroll(ScrollSource::Touch);
            controller.on_pointer_event(PointerEvent::Move { y: finger }, &list);
            for _ in 0..20 {
                seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                let dy = (seed >> 16) as i32 % 61 - 30;
                let mut consumed = 0;
                controller.on_nested_pre_scroll(dy, &mut consumed, &list);
                let p = controller.position();
                assert!((0..=80).contains(&p), "position {} escaped", p);
            }
            controller.on_pointer_event(PointerEvent::Up, &list);
            controller.on_stop_nested_scroll();
            controller.on_scroll_state_changed(ListScrollState::Idle, &list);
            run_to_end(&mut controller);
            controller.stop_loading(false);
            assert_eq!(controller.position(), 40);
        }
    }

    #[test]
    fn test_disabled_top_gate() {
        let list = FakeList::default();
        let (mut controller, events) = controller(&config(10));
        controller.set_show_top_loading_view(false);

        drag(&mut controller, &list, 30.0, -30);
        assert_eq!(controller.position(), 40);
        release(&mut controller, &list);

        controller.start_loading(Direction::Top);
        assert!(!controller.is_animating());
        assert_eq!(controller.phase(), Phase::Idle);

        // A fling landing on the top edge cannot open it either
        controller.on_scroll_state_changed(ListScrollState::Settling, &list);
        controller.on_scrolled(-12);
        controller.on_scroll_state_changed(ListScrollState::Idle, &list);
        assert_eq!(controller.phase(), Phase::Idle);
        assert!(controller.position() >= 40);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_start_loading_is_idempotent() {
        let (mut controller, events) = controller(&config(10));

        controller.start_loading(Direction::Bottom);
        let duration = controller.transition_duration();
        controller.tick(Duration::from_millis(100));
        controller.start_loading(Direction::Bottom);
        // Same transition keeps running, not restarted
        assert_eq!(controller.transition_duration(), duration);
        run_to_end(&mut controller);
        controller.start_loading(Direction::Bottom);
        assert!(!controller.is_animating());

        assert_eq!(*events.borrow(), vec![RevealEvent::Load(Direction::Bottom)]);
    }

    #[test]
    fn test_start_opposite_direction_replaces_episode() {
        let (mut controller, events) = controller(&config(10));
        let calls = Rc::new(RefCell::new(Vec::new()));
        controller.set_indicator(
            Direction::Top,
            Box::new(RecordingIndicator { calls: calls.clone() }),
        );

        controller.start_loading(Direction::Top);
        run_to_end(&mut controller);
        assert_eq!(controller.loading_direction(), Some(Direction::Top));

        controller.start_loading(Direction::Bottom);
        assert_eq!(controller.loading_direction(), None);
        assert_eq!(*calls.borrow(), vec!["loading", "reset"]);
        run_to_end(&mut controller);

        assert_eq!(controller.loading_direction(), Some(Direction::Bottom));
        assert_eq!(controller.position(), 80);
        assert_eq!(
            *events.borrow(),
            vec![RevealEvent::Load(Direction::Top), RevealEvent::Load(Direction::Bottom)]
        );
    }

    #[test]
    fn test_transition_duration_matches_distance() {
        let (mut controller, _) = controller(&config(10));
        controller.start_loading(Direction::Top);
        assert_eq!(controller.transition_duration(), Some(Duration::from_millis(300)));
        controller.stop_loading(false);

        let list = FakeList::default();
        drag(&mut controller, &list, 20.0, -20);
        release(&mut controller, &list);
        assert_eq!(controller.transition_duration(), Some(Duration::from_millis(150)));
    }

    #[test]
    fn test_stop_during_reveal_cancels_silently() {
        let (mut controller, events) = controller(&config(10));

        controller.start_loading(Direction::Top);
        controller.tick(Duration::from_millis(50));
        controller.stop_loading(false);

        assert!(!controller.is_animating());
        assert!(!controller.is_loading());
        assert_eq!(controller.position(), 40);
        controller.tick(Duration::from_millis(1000));
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_stop_without_episode_is_noop() {
        let (mut controller, _) = controller(&config(10));
        controller.stop_loading(true);
        assert_eq!(controller.phase(), Phase::Idle);
        assert!(!controller.is_animating());
    }

    #[test]
    fn test_active_swallows_touch() {
        let list = FakeList::default();
        let (mut controller, events) = controller(&config(10));

        controller.start_loading(Direction::Top);
        run_to_end(&mut controller);

        assert!(controller.on_pointer_event(PointerEvent::Down { y: 0.0 }, &list));
        assert!(controller.on_pointer_event(PointerEvent::Move { y: 50.0 }, &list));
        let mut consumed = 0;
        controller.on_nested_pre_scroll(30, &mut consumed, &list);
        assert_eq!(consumed, 0);
        assert!(controller.on_pointer_event(PointerEvent::Up, &list));
        controller.on_scroll_state_changed(ListScrollState::Idle, &list);

        assert_eq!(controller.position(), 0);
        assert_eq!(events.borrow().len(), 1);

        controller.stop_loading(false);
        assert!(!controller.on_pointer_event(PointerEvent::Down { y: 0.0 }, &list));
        assert_eq!(controller.intent(), Intent::None);
    }

    #[test]
    fn test_fling_settling_at_edge_reveals() {
        let list = FakeList::default();
        let (mut controller, events) = controller(&config(10));

        controller.on_scroll_state_changed(ListScrollState::Settling, &list);
        controller.on_scrolled(-25);
        controller.on_scroll_state_changed(ListScrollState::Idle, &list);
        assert_eq!(controller.phase(), Phase::AnimatingToActive(Direction::Top));
        run_to_end(&mut controller);
        assert_eq!(*events.borrow(), vec![RevealEvent::Load(Direction::Top)]);
    }

    #[test]
    fn test_fling_away_from_edge_does_not_reveal() {
        let list = FakeList {
            can_top: true,
            can_bottom: false,
        };
        let (mut controller, _) = controller(&config(10));

        controller.on_scroll_state_changed(ListScrollState::Settling, &list);
        controller.on_scrolled(-25);
        controller.on_scroll_state_changed(ListScrollState::Idle, &list);
        assert_eq!(controller.phase(), Phase::Idle);
    }

    #[test]
    fn test_fling_trigger_can_be_disabled() {
        let list = FakeList::default();
        let config = RevealConfig {
            fling_trigger: false,
            ..config(10)
        };
        let (mut controller, _) = controller(&config);

        controller.on_scroll_state_changed(ListScrollState::Settling, &list);
        controller.on_scrolled(25);
        controller.on_scroll_state_changed(ListScrollState::Idle, &list);
        assert_eq!(controller.phase(), Phase::Idle);
    }

    #[test]
    fn test_indicator_follows_episode() {
        let (mut controller, _) = controller(&config(10));
        let calls = Rc::new(RefCell::new(Vec::new()));
        controller.set_indicator(
            Direction::Bottom,
            Box::new(RecordingIndicator { calls: calls.clone() }),
        );

        controller.start_loading(Direction::Bottom);
        assert!(calls.borrow().is_empty());
        run_to_end(&mut controller);
        assert_eq!(*calls.borrow(), vec!["loading"]);
        controller.stop_loading(true);
        assert_eq!(*calls.borrow(), vec!["loading", "reset"]);
    }

    #[test]
    fn test_remove_listener() {
        let (mut controller, events) = controller(&config(10));
        let extra = Rc::new(RefCell::new(0));
        let counter = extra.clone();
        let id = controller.add_on_load_listener(move |_| *counter.borrow_mut() += 1);

        assert!(controller.remove_on_load_listener(id));
        assert!(!controller.remove_on_load_listener(id));

        controller.start_loading(Direction::Top);
        run_to_end(&mut controller);
        assert_eq!(*extra.borrow(), 0);
        assert_eq!(events.borrow().len(), 1);
    }

    #[test]
    fn test_target_view_offset() {
        let list = FakeList::default();
        let (mut controller, _) = controller(&config(10));
        drag(&mut controller, &list, 12.0, -12);
        assert_eq!(controller.target_view_offset(), 12);
        release(&mut controller, &list);
        run_to_end(&mut controller);
        assert_eq!(controller.target_view_offset(), 40);
    }

    #[test]
    fn test_disabled_controller_ignores_input() {
        let list = FakeList::default();
        let (mut controller, _) = controller(&config(10));
        controller.set_enabled(false);

        assert!(!controller.on_start_nested_scroll(ScrollSource::Touch));
        assert!(!controller.on_pointer_event(PointerEvent::Down { y: 0.0 }, &list));
        controller.on_pointer_event(PointerEvent::Move { y: 20.0 }, &list);
        assert_eq!(controller.intent(), Intent::None);
    }

    #[test]
    fn test_layout_change_keeps_episode_pinned() {
        let (mut controller, _) = controller(&config(10));
        controller.start_loading(Direction::Bottom);
        run_to_end(&mut controller);
        assert_eq!(controller.position(), 80);

        controller.on_layout(40, 20);
        assert_eq!(controller.position(), 60);
        assert_eq!(controller.phase(), Phase::Active(Direction::Bottom));
    }

    #[test]
    fn test_zero_extent_reveal_completes_on_first_tick() {
        let mut controller = LoadGestureController::new(&config(10));
        controller.on_layout(0, 5);
        controller.start_loading(Direction::Top);
        assert_eq!(controller.tick(Duration::ZERO), Some(RevealEvent::Load(Direction::Top)));
        assert!(controller.is_loading());
    }
}
