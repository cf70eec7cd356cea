//! Core Effect trait.
//!
//! The [`Effect`] trait is the seam between DSP code and whatever drives it
//! (an offline renderer, a host wrapper, tests). It carries the lifecycle
//! every processor has: sample-rate (re)configuration, state reset, and
//! sample or block processing.
//!
//! ## Design Decisions
//!
//! - **Mono processing**: single `f32` input/output, guitar pedal style.
//!
//! - **Object-safe**: `dyn Effect` works for runtime chains; generic dispatch
//!   is preferred on hot paths.
//!
//! - **No allocations**: every method is callable from a real-time audio
//!   callback. `set_sample_rate` and `reset` are expected on the control
//!   side, never concurrently with processing.

/// Core trait for all audio effects.
///
/// # Example
///
/// ```rust
/// use odpedal_core::Effect;
///
/// struct Gain {
///     gain: f32,
/// }
///
/// impl Effect for Gain {
///     fn process(&mut self, input: f32) -> f32 {
///         input * self.gain
///     }
///
///     fn set_sample_rate(&mut self, _sample_rate: f32) {
///         // Gain doesn't depend on sample rate
///     }
///
///     fn reset(&mut self) {
///         // Gain has no internal state to reset
///     }
/// }
/// ```
pub trait Effect {
    /// Process a single sample, advancing internal state by one sample.
    fn process(&mut self, input: f32) -> f32;

    /// Process a block of samples.
    ///
    /// Default implementation calls `process()` for each sample.
    ///
    /// # Panics
    /// Debug builds panic if `input.len() != output.len()`.
    fn process_block(&mut self, input: &[f32], output: &mut [f32]) {
        debug_assert_eq!(
            input.len(),
            output.len(),
            "Input and output buffers must have same length"
        );
        for (inp, out) in input.iter().zip(output.iter_mut()) {
            *out = self.process(*inp);
        }
    }

    /// Process a block of samples in-place.
    fn process_block_inplace(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Update the sample rate.
    ///
    /// Effects recalculate every sample-rate-dependent coefficient here.
    fn set_sample_rate(&mut self, sample_rate: f32);

    /// Reset internal state.
    ///
    /// Clears filter history without changing parameters or coefficients.
    fn reset(&mut self);

    /// Processing latency in samples. Default returns 0.
    fn latency_samples(&self) -> usize {
        0
    }
}
