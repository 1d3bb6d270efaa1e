//! Easing curves and the exponential smoothing step used by the cursor.

use glam::Vec2;

/// Cubic ease-out: fast start, gentle landing. `t` is clamped to \[0, 1\].
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// One exponential smoothing step: close `factor` of the remaining distance.
#[inline]
pub fn approach(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

#[inline]
pub fn approach_vec(current: Vec2, target: Vec2, factor: f32) -> Vec2 {
    current + (target - current) * factor
}

/// Number of smoothing steps needed to bring `distance` within `epsilon`.
///
/// The remaining distance after `n` steps is `distance * (1 - factor)^n`, so
/// this is `ceil(ln(epsilon / distance) / ln(1 - factor))`. A factor of 1
/// lands in a single step; a factor of 0 or below never converges and yields
/// `u32::MAX`.
pub fn steps_to_converge(distance: f32, factor: f32, epsilon: f32) -> u32 {
    let distance = distance.abs();
    if distance <= epsilon {
        return 0;
    }
    if factor.is_nan() || factor <= 0.0 {
        return u32::MAX;
    }
    if factor >= 1.0 {
        return 1;
    }
    let keep = 1.0 - factor;
    ((epsilon / distance).ln() / keep.ln()).ceil().max(1.0) as u32
}
