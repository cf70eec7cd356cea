//! Gain staging.
//!
//! The pedal has two gain stages: drive at the chain input and level at the
//! chain output. Both take a decibel control and multiply by its linear
//! equivalent. Conversion happens once per block; the per-sample work is a
//! single multiply.
//!
//! # Usage
//!
//! ```rust
//! use odpedal_core::gain::GainStage;
//!
//! let drive = GainStage::from_db(6.0206);
//! assert!((drive.apply(0.25) - 0.5).abs() < 1e-3);
//! ```

use crate::{db_to_linear, linear_to_db};

/// Decibels to linear multiplier, `10^(dB/20)`.
#[inline]
pub fn to_linear(db: f32) -> f32 {
    db_to_linear(db)
}

/// A stateless linear multiplier set from decibels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GainStage {
    linear: f32,
}

impl GainStage {
    /// 0 dB.
    pub const fn unity() -> Self {
        Self { linear: 1.0 }
    }

    /// Gain stage for `db` decibels.
    pub fn from_db(db: f32) -> Self {
        Self {
            linear: to_linear(db),
        }
    }

    /// Re-target to `db` decibels.
    pub fn set_db(&mut self, db: f32) {
        self.linear = to_linear(db);
    }

    /// The linear multiplier.
    pub const fn linear(&self) -> f32 {
        self.linear
    }

    /// The gain read back in dB.
    pub fn db(&self) -> f32 {
        linear_to_db(self.linear)
    }

    /// `input * linear`.
    #[inline]
    pub fn apply(&self, input: f32) -> f32 {
        input * self.linear
    }
}

impl Default for GainStage {
    fn default() -> Self {
        Self::unity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unity_is_identity() {
        let g = GainStage::unity();
        assert_eq!(g.apply(0.3), 0.3);
        assert_eq!(g.apply(-1.5), -1.5);
        assert_eq!(GainStage::from_db(0.0).linear(), 1.0);
    }

    #[test]
    fn db_roundtrip() {
        let mut g = GainStage::unity();
        g.set_db(-6.0);
        assert!((g.db() - (-6.0)).abs() < 0.01, "Expected -6.0, got {}", g.db());
    }

    #[test]
    fn pedal_ranges() {
        // Drive 0..24 dB, level -12..12 dB
        assert!((GainStage::from_db(24.0).linear() - 15.848932).abs() < 1e-3);
        assert!((GainStage::from_db(12.0).linear() - 3.981072).abs() < 1e-4);
        assert!((GainStage::from_db(-12.0).linear() - 0.251189).abs() < 1e-5);
    }

    #[test]
    fn gain_is_monotonic() {
        let mut prev = to_linear(-12.0);
        for i in 1..=360 {
            let curr = to_linear(-12.0 + i as f32 * 0.1);
            assert!(curr > prev, "Must increase: {prev} >= {curr}");
            prev = curr;
        }
    }

    #[test]
    fn zero_input_stays_zero() {
        assert_eq!(GainStage::from_db(24.0).apply(0.0), 0.0);
    }
}
