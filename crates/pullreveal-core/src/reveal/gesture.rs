//! L3 Molecular Layer: Touch-driven direction intent with hysteresis
//!
//! Intent is classified once per touch sequence and then held until the
//! pointer is released, so the arbiter never flips between consuming and
//! passing through deltas within one stroke.

use super::types::{Direction, Intent, ScrollTarget};

/// Per touch sequence record, alive between pointer down and up
#[derive(Debug, Clone, Copy, PartialEq)]
struct GestureState {
    last_y: f32,
    intent: Intent,
}

#[derive(Debug, Clone, Default)]
pub struct GestureClassifier {
    gesture: Option<GestureState>,
}

impl GestureClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a touch sequence at `y`
    ///
    /// Intent is cleared unless a load episode is active, in which case the
    /// coordinator is swallowing input and the previous intent is left as is.
    pub fn pointer_down(&mut self, y: f32, episode_active: bool) {
        let intent = if episode_active {
            self.intent()
        } else {
            Intent::None
        };
        self.gesture = Some(GestureState { last_y: y, intent });
    }

    /// Track a move to `y` and classify intent if still unset
    pub fn pointer_move(&mut self, y: f32, list: &dyn ScrollTarget) -> Intent {
        let Some(gesture) = self.gesture.as_mut() else {
            // Move without a preceding down (e.g. pointer captured mid-stroke)
            self.gesture = Some(GestureState {
                last_y: y,
                intent: Intent::None,
            });
            return Intent::None;
        };

        let dy = y - gesture.last_y;
        if gesture.intent == Intent::None {
            if dy > 0.0 && !list.can_scroll_beyond(Direction::Top) {
                gesture.intent = Intent::TowardTop;
                tracing::trace!(dy, "Intent classified toward top");
            } else if dy < 0.0 && !list.can_scroll_beyond(Direction::Bottom) {
                gesture.intent = Intent::TowardBottom;
                tracing::trace!(dy, "Intent classified toward bottom");
            }
        }
        gesture.last_y = y;
        gesture.intent
    }

    /// End the touch sequence (release or cancel)
    pub fn pointer_up(&mut self) {
        self.gesture = None;
    }

    #[inline]
    pub fn intent(&self) -> Intent {
        self.gesture.map(|g| g.intent).unwrap_or_default()
    }

    #[inline]
    pub fn is_tracking(&self) -> bool {
        self.gesture.is_some()
    }
}
