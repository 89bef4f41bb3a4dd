//! L4 Atomic Layer: Curves shaping a reveal or collapse
//!
//! The animator computes linear progress from elapsed time; the configured
//! curve only bends that progress, it never changes the duration.

pub use crate::config::EasingType;

/// Evaluation of a configured [`EasingType`]
pub trait EasingTypeExt {
    /// Eased fraction of the travel covered at progress `t`
    ///
    /// `t` is clamped to [0, 1]; every curve maps 1 to 1.
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::None => t.floor(), // jumps at t = 1
            EasingType::Linear => t,
            EasingType::Cubic => cubic_out(t),
            EasingType::Quintic => quintic_out(t),
            EasingType::EaseOut => expo_out(t),
            EasingType::AccelerateDecelerate => accelerate_decelerate(t),
        }
    }
}

/// Fast start, gentle stop: 1 - (1-t)^3
#[inline]
fn cubic_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Sharper variant of the cubic curve: 1 - (1-t)^5
#[inline]
fn quintic_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv * inv
}

/// Covers most of the travel early: 1 - 2^(-10t), pinned to 1 at the end
#[inline]
fn expo_out(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}

/// Half cosine wave, slow at both ends: cos((t+1)pi)/2 + 1/2
#[inline]
fn accelerate_decelerate(t: f64) -> f64 {
    ((t + 1.0) * std::f64::consts::PI).cos() / 2.0 + 0.5
}
