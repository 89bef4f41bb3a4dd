//! L4 Atomic Layer: Time calculation utilities for reveal transitions
//!
//! Pure functions only. Elapsed time is supplied by the caller, which keeps
//! transitions deterministic under a test clock.

use std::time::Duration;

/// Calculate animation progress (0.0 to 1.0) from elapsed time and duration
#[inline]
pub fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Check if animation is complete
#[inline]
pub fn is_complete(elapsed: Duration, duration: Duration) -> bool {
    elapsed >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Linear interpolation for i32 values (scroll positions)
#[inline]
pub fn lerp_i32(from: i32, to: i32, t: f64) -> i32 {
    lerp(from as f64, to as f64, t).round() as i32
}

/// Duration for traversing `distance` of a region spanning `extent`
///
/// `base` is the time for one full extent, so half the distance takes half
/// the time. An empty region yields a zero duration.
pub fn scaled_duration(base: Duration, distance: i32, extent: i32) -> Duration {
    if extent <= 0 {
        return Duration::ZERO;
    }
    let base_ms = base.as_millis() as u64;
    Duration::from_millis(base_ms * distance.unsigned_abs() as u64 / extent as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 1.0) - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_lerp_i32_descending() {
        assert_eq!(lerp_i32(40, 0, 0.0), 40);
        assert_eq!(lerp_i32(40, 0, 0.5), 20);
        assert_eq!(lerp_i32(40, 0, 1.0), 0);
    }

    #[test]
    fn test_progress_zero_duration() {
        assert!((progress(Duration::ZERO, Duration::ZERO) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_clamped() {
        let d = Duration::from_millis(100);
        assert!((progress(Duration::from_millis(50), d) - 0.5).abs() < 0.001);
        assert!((progress(Duration::from_millis(500), d) - 1.0).abs() < 0.001);
        assert!(is_complete(Duration::from_millis(100), d));
        assert!(!is_complete(Duration::from_millis(99), d));
    }

    #[test]
    fn test_scaled_duration() {
        let base = Duration::from_millis(300);
        assert_eq!(scaled_duration(base, 20, 40), Duration::from_millis(150));
        assert_eq!(scaled_duration(base, -40, 40), Duration::from_millis(300));
        assert_eq!(scaled_duration(base, 0, 40), Duration::ZERO);
        assert_eq!(scaled_duration(base, 10, 0), Duration::ZERO);
    }
}
