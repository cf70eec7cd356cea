//! Property-based tests for odpedal-core DSP primitives.
//!
//! Tests filter stability, clear semantics, and waveshaper invariants using
//! proptest for randomized input generation.

use proptest::prelude::*;
use odpedal_core::{
    Biquad, BiquadCoefficients, FilterType, GainStage, SOFT_CLIP_CEILING, soft_clip,
};

fn filter_type(variant: usize) -> FilterType {
    if variant % 2 == 0 {
        FilterType::LowPass
    } else {
        FilterType::HighPass
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// For any cutoff strictly inside (20 Hz, 0.45·fs) and Q in [0.3, 4],
    /// both response types stay finite over random finite input.
    #[test]
    fn biquad_stability(
        sample_rate in prop::sample::select(vec![22050.0f32, 44100.0, 48000.0, 96000.0]),
        cutoff_ratio in 0.001f32..0.45f32,
        q in 0.3f32..4.0f32,
        variant in 0usize..2,
        input in prop::array::uniform32(-1.0f32..=1.0f32),
    ) {
        let cutoff = (cutoff_ratio * sample_rate).max(20.0);
        let coeffs = BiquadCoefficients::design(filter_type(variant), cutoff, q, sample_rate);
        prop_assert!(coeffs.is_finite());

        let mut biquad = Biquad::with_coefficients(coeffs);
        for _ in 0..32 {
            for &sample in &input {
                let out = biquad.process(sample);
                prop_assert!(
                    out.is_finite(),
                    "{:?} (fc={}, q={}, fs={}) produced {} for input {}",
                    filter_type(variant), cutoff, q, sample_rate, out, sample
                );
            }
        }
    }

    /// After `clear()`, a filter fed zeros outputs exact zeros regardless of
    /// what it processed before.
    #[test]
    fn biquad_clear_then_silence(
        cutoff in 100.0f32..15000.0f32,
        variant in 0usize..2,
        input in prop::array::uniform32(-10.0f32..=10.0f32),
    ) {
        let coeffs = BiquadCoefficients::design(filter_type(variant), cutoff, 0.707, 48000.0);
        let mut biquad = Biquad::with_coefficients(coeffs);
        for &sample in &input {
            biquad.process(sample);
        }

        biquad.clear();
        prop_assert!(biquad.is_cleared());
        prop_assert_eq!(biquad.coefficients(), coeffs);
        for _ in 0..64 {
            prop_assert_eq!(biquad.process(0.0), 0.0);
        }
    }

    /// Processing is deterministic: two filters with the same coefficients
    /// fed the same stream agree bit for bit.
    #[test]
    fn biquad_deterministic(
        cutoff in 100.0f32..15000.0f32,
        input in prop::array::uniform32(-1.0f32..=1.0f32),
    ) {
        let coeffs = BiquadCoefficients::design(FilterType::LowPass, cutoff, 0.707, 44100.0);
        let mut a = Biquad::with_coefficients(coeffs);
        let mut b = a.clone();
        for &sample in &input {
            prop_assert_eq!(a.process(sample).to_bits(), b.process(sample).to_bits());
        }
    }

    /// The soft clipper is odd, bounded by its ceiling, and never amplifies.
    #[test]
    fn soft_clip_invariants(x in -1000.0f32..1000.0f32) {
        let y = soft_clip(x);
        prop_assert_eq!(soft_clip(-x), -y);
        prop_assert!(y.abs() <= SOFT_CLIP_CEILING);
        prop_assert!(y.abs() <= x.abs());
    }

    /// Gain stages compose additively in dB.
    #[test]
    fn gain_composes(a in -12.0f32..24.0f32, b in -12.0f32..24.0f32) {
        let combined = GainStage::from_db(a + b).linear();
        let product = GainStage::from_db(a).linear() * GainStage::from_db(b).linear();
        prop_assert!(((combined - product) / combined).abs() < 1e-4);
    }
}
