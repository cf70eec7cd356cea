//! Mathematical utility functions for DSP.
//!
//! All functions are allocation-free and suitable for `no_std`.
//!
//! # Level Conversions
//!
//! - [`db_to_linear`] / [`linear_to_db`] - Convert between dB and linear gain
//!
//! # Waveshaping
//!
//! - [`soft_clip`] - Cubic soft clipper with a ±2/3 ceiling

use libm::{log10f, powf};

/// Output ceiling of [`soft_clip`]: `1 - 1³/3`.
pub const SOFT_CLIP_CEILING: f32 = 2.0 / 3.0;

/// Convert decibels to linear gain: `10^(dB/20)`.
///
/// # Example
/// ```rust
/// use odpedal_core::db_to_linear;
///
/// assert!((db_to_linear(0.0) - 1.0).abs() < 0.001);
/// assert!((db_to_linear(-6.02) - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn db_to_linear(db: f32) -> f32 {
    powf(10.0, db / 20.0)
}

/// Convert linear gain to decibels.
///
/// Inputs at or below `1e-10` are floored there, so silence reads as −200 dB
/// instead of −∞.
///
/// # Example
/// ```rust
/// use odpedal_core::linear_to_db;
///
/// assert!((linear_to_db(1.0) - 0.0).abs() < 0.001);
/// assert!((linear_to_db(0.5) - (-6.02)).abs() < 0.01);
/// ```
#[inline]
pub fn linear_to_db(linear: f32) -> f32 {
    20.0 * log10f(linear.max(1e-10))
}

/// Cubic soft clip.
///
/// ```text
/// x - x³/3   for |x| <= 1
///  2/3       for x > 1
/// -2/3       for x < -1
/// ```
///
/// Unity slope at the origin. Value and slope are both continuous at
/// `x = ±1` (slope `1 - x²` reaches zero exactly where the ceiling starts),
/// and the curve is odd-symmetric, so it generates odd harmonics only.
///
/// NaN passes through unchanged.
///
/// # Example
/// ```rust
/// use odpedal_core::{soft_clip, SOFT_CLIP_CEILING};
///
/// assert_eq!(soft_clip(0.0), 0.0);
/// assert_eq!(soft_clip(5.0), SOFT_CLIP_CEILING);
/// assert_eq!(soft_clip(-0.5), -soft_clip(0.5));
/// ```
#[inline]
pub fn soft_clip(x: f32) -> f32 {
    if x > 1.0 {
        SOFT_CLIP_CEILING
    } else if x < -1.0 {
        -SOFT_CLIP_CEILING
    } else {
        x - (x * x * x) / 3.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_linear_roundtrip() {
        let original = 0.5;
        let db = linear_to_db(original);
        let back = db_to_linear(db);
        assert!(
            (original - back).abs() < 1e-5,
            "Roundtrip failed: {} -> {} -> {}",
            original,
            db,
            back
        );
    }

    #[test]
    fn test_db_known_values() {
        assert!((db_to_linear(0.0) - 1.0).abs() < 1e-6);
        assert!((db_to_linear(-6.0206) - 0.5).abs() < 0.001);
        assert!((db_to_linear(6.0206) - 2.0).abs() < 0.001);
        assert!((db_to_linear(20.0) - 10.0).abs() < 1e-4);
        assert!((db_to_linear(24.0) - 15.848932).abs() < 1e-3);
    }

    #[test]
    fn test_linear_to_db_floor() {
        assert!((linear_to_db(0.0) - (-200.0)).abs() < 1e-3);
        assert!((linear_to_db(-1.0) - (-200.0)).abs() < 1e-3);
    }

    #[test]
    fn test_soft_clip_zero() {
        assert_eq!(soft_clip(0.0), 0.0);
    }

    #[test]
    fn test_soft_clip_ceiling() {
        assert_eq!(soft_clip(1.0001), SOFT_CLIP_CEILING);
        assert_eq!(soft_clip(100.0), SOFT_CLIP_CEILING);
        assert_eq!(soft_clip(f32::INFINITY), SOFT_CLIP_CEILING);
        assert_eq!(soft_clip(-100.0), -SOFT_CLIP_CEILING);
        assert_eq!(soft_clip(f32::NEG_INFINITY), -SOFT_CLIP_CEILING);
    }

    #[test]
    fn test_soft_clip_continuous_at_knee() {
        let inside = soft_clip(1.0);
        let outside = soft_clip(1.0 + f32::EPSILON * 4.0);
        assert!((inside - outside).abs() < 1e-6, "{inside} vs {outside}");

        let inside = soft_clip(-1.0);
        let outside = soft_clip(-1.0 - f32::EPSILON * 4.0);
        assert!((inside - outside).abs() < 1e-6, "{inside} vs {outside}");
    }

    #[test]
    fn test_soft_clip_slope_vanishes_at_knee() {
        let h = 1e-3;
        let slope = (soft_clip(1.0) - soft_clip(1.0 - h)) / h;
        assert!(slope.abs() < 2e-3, "slope just inside knee = {slope}");
    }

    #[test]
    fn test_soft_clip_unity_slope_at_origin() {
        let h = 1e-3;
        let slope = (soft_clip(h) - soft_clip(-h)) / (2.0 * h);
        assert!((slope - 1.0).abs() < 1e-4, "slope at origin = {slope}");
    }

    #[test]
    fn test_soft_clip_odd_symmetry() {
        for i in 0..=300 {
            let x = i as f32 * 0.01;
            assert_eq!(soft_clip(-x), -soft_clip(x), "x = {x}");
        }
    }

    #[test]
    fn test_soft_clip_monotonic() {
        let mut prev = soft_clip(-2.0);
        for i in 1..=400 {
            let y = soft_clip(-2.0 + i as f32 * 0.01);
            assert!(y >= prev, "not monotonic at step {i}: {prev} -> {y}");
            prev = y;
        }
    }

    #[test]
    fn test_soft_clip_nan_passthrough() {
        assert!(soft_clip(f32::NAN).is_nan());
    }
}
