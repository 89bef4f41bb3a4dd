//! L3 Molecular Layer: Cancellable transition toward a target position
//!
//! Combines easing functions and timing utilities. The animator is advanced
//! cooperatively: the host calls [`TransitionAnimator::tick`] once per frame
//! with the time elapsed since the previous frame and applies the returned
//! position. Natural completion hands back the goal attached at start,
//! exactly once; cancellation drops it.

use std::time::Duration;

use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp_i32, progress, scaled_duration};

/// Running transition state
#[derive(Debug, Clone)]
struct ActiveTransition<G> {
    /// Time advanced so far
    elapsed: Duration,
    /// Starting position
    from: i32,
    /// Target position
    to: i32,
    /// Total duration
    duration: Duration,
    /// Easing function
    easing: EasingType,
    /// Delivered on natural completion
    goal: G,
}

/// Result of advancing the animator by one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick<G> {
    /// Nothing is running
    Idle,
    /// Intermediate interpolated position
    Frame(i32),
    /// Final position plus the goal the transition was started with
    Finished { position: i32, goal: G },
}

/// At most one transition runs at a time
#[derive(Debug, Clone)]
pub struct TransitionAnimator<G> {
    transition: Option<ActiveTransition<G>>,
    base_duration: Duration,
    easing: EasingType,
}

impl<G> TransitionAnimator<G> {
    /// Create an animator; `base_duration` covers one full region extent
    pub fn new(base_duration: Duration, easing: EasingType) -> Self {
        Self {
            transition: None,
            base_duration,
            easing,
        }
    }

    pub fn base_duration(&self) -> Duration {
        self.base_duration
    }

    /// Duration a transition from `from` to `target` would take
    pub fn duration_for(&self, from: i32, target: i32, reference_extent: i32) -> Duration {
        scaled_duration(self.base_duration, from - target, reference_extent)
    }

    /// Start a transition, cancelling any transition already running
    ///
    /// Returns the computed duration. A zero duration still completes
    /// through [`tick`](Self::tick), on the first call.
    pub fn animate_to(&mut self, from: i32, target: i32, reference_extent: i32, goal: G) -> Duration {
        self.cancel();
        let duration = self.duration_for(from, target, reference_extent);
        self.transition = Some(ActiveTransition {
            elapsed: Duration::ZERO,
            from,
            to: target,
            duration,
            easing: self.easing,
            goal,
        });
        duration
    }

    /// Advance by `dt` and report the position to apply
    pub fn tick(&mut self, dt: Duration) -> Tick<G> {
        let Some(anim) = self.transition.as_mut() else {
            return Tick::Idle;
        };

        anim.elapsed += dt;
        if is_complete(anim.elapsed, anim.duration) {
            // take() guarantees the goal is handed out once
            match self.transition.take() {
                Some(done) => Tick::Finished {
                    position: done.to,
                    goal: done.goal,
                },
                None => Tick::Idle,
            }
        } else {
            let t = progress(anim.elapsed, anim.duration);
            Tick::Frame(lerp_i32(anim.from, anim.to, anim.easing.apply(t)))
        }
    }

    /// Stop immediately without completing; returns whether anything ran
    pub fn cancel(&mut self) -> bool {
        self.transition.take().is_some()
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.transition.is_some()
    }

    /// Target of the running transition
    pub fn target(&self) -> Option<i32> {
        self.transition.as_ref().map(|t| t.to)
    }

    /// Goal of the running transition
    pub fn goal(&self) -> Option<&G> {
        self.transition.as_ref().map(|t| &t.goal)
    }

    /// Total duration of the running transition
    pub fn duration(&self) -> Option<Duration> {
        self.transition.as_ref().map(|t| t.duration)
    }
}
