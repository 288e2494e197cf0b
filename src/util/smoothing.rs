//! Exponential-smoothing math for animation interpolation.
//!
//! Smoothing coefficients are expressed per reference frame (60 Hz) and
//! renormalized to the actual frame delta, so visual speed is independent
//! of frame rate.

/// The frame rate at which smoothing coefficients are specified.
pub const REFERENCE_FPS: f32 = 60.0;

/// Linear interpolation between `a` and `b`.
#[inline]
#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Convert a per-reference-frame smoothing coefficient into the blend
/// factor for an arbitrary frame delta.
///
/// `k` is the fraction of the remaining distance covered in one 60 Hz
/// frame. The returned alpha covers the same fraction per unit time at any
/// `dt`: applying `n` steps of `dt/n` lands on the same value as one step
/// of `dt`.
///
/// `k` is clamped into `[0, 1]`; a zero or negative `dt` yields 0 (no
/// movement), so a stalled clock can never push a value backwards.
#[inline]
#[must_use]
pub fn smoothing_alpha(k: f32, dt: f32) -> f32 {
    if dt <= 0.0 {
        return 0.0;
    }
    let k = k.clamp(0.0, 1.0);
    if k >= 1.0 {
        return 1.0;
    }
    1.0 - (1.0 - k).powf(dt * REFERENCE_FPS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(2.0, 10.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(2.0, 10.0, 0.5), 6.0);
    }

    #[test]
    fn test_alpha_at_reference_rate() {
        // One 60 Hz frame covers exactly k of the remaining distance.
        let alpha = smoothing_alpha(0.15, 1.0 / REFERENCE_FPS);
        assert!((alpha - 0.15).abs() < 1e-5);
    }

    #[test]
    fn test_alpha_step_size_independence() {
        // Sixty fine steps and one coarse step cover the same distance.
        let k = 0.2;
        let mut value = 0.0_f32;
        for _ in 0..60 {
            value = lerp(value, 1.0, smoothing_alpha(k, 1.0 / 60.0));
        }
        let coarse = lerp(0.0, 1.0, smoothing_alpha(k, 1.0));
        assert!(
            (value - coarse).abs() < 1e-3,
            "fine={value} coarse={coarse}"
        );
    }

    #[test]
    fn test_alpha_clamps_degenerate_inputs() {
        assert_eq!(smoothing_alpha(0.5, 0.0), 0.0);
        assert_eq!(smoothing_alpha(0.5, -1.0), 0.0);
        assert_eq!(smoothing_alpha(1.5, 0.016), 1.0);
        assert_eq!(smoothing_alpha(-0.5, 0.016), 0.0);
    }

    #[test]
    fn test_alpha_monotonic_in_dt() {
        let a = smoothing_alpha(0.1, 0.008);
        let b = smoothing_alpha(0.1, 0.016);
        let c = smoothing_alpha(0.1, 0.033);
        assert!(a < b && b < c);
        assert!(c < 1.0);
    }
}
