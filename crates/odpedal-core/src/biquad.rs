//! Biquad (bi-quadratic) filter structure.
//!
//! Provides the second-order IIR stage used throughout the pedal: the fixed
//! pre-emphasis high-pass, the fixed post low-pass, and the variable tone
//! low-pass are all one [`Biquad`] each.
//!
//! Coefficient calculation uses the RBJ Audio EQ Cookbook (bilinear
//! transform) formulas.

use core::f32::consts::PI;
use libm::{cosf, sinf};

/// Response shape produced by [`BiquadCoefficients::design`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterType {
    /// Second-order high-pass.
    HighPass,
    /// Second-order low-pass.
    LowPass,
}

/// Normalized biquad coefficients (`a0 == 1`).
///
/// Only valid for the sample rate, cutoff and Q they were designed with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiquadCoefficients {
    /// Feedforward coefficient for `x[n]`.
    pub b0: f32,
    /// Feedforward coefficient for `x[n-1]`.
    pub b1: f32,
    /// Feedforward coefficient for `x[n-2]`.
    pub b2: f32,
    /// Feedback coefficient for `y[n-1]`.
    pub a1: f32,
    /// Feedback coefficient for `y[n-2]`.
    pub a2: f32,
}

impl BiquadCoefficients {
    /// `y[n] = x[n]`.
    pub const PASSTHROUGH: Self = Self {
        b0: 1.0,
        b1: 0.0,
        b2: 0.0,
        a1: 0.0,
        a2: 0.0,
    };

    /// Designs a cookbook high-pass or low-pass section.
    ///
    /// ```text
    /// w0 = 2π·cutoff/sample_rate
    /// α  = sin(w0) / (2Q)
    /// ```
    ///
    /// The caller guarantees `sample_rate > 0` and `0 < cutoff_hz < sample_rate/2`.
    /// Inputs outside that range are not rejected: they produce degenerate
    /// (possibly unstable) but deterministic coefficients.
    ///
    /// # Example
    ///
    /// ```rust
    /// use odpedal_core::{BiquadCoefficients, FilterType};
    ///
    /// let c = BiquadCoefficients::design(FilterType::LowPass, 1000.0, 0.707, 48000.0);
    /// // Low-pass DC gain is (b0 + b1 + b2) / (1 + a1 + a2) == 1
    /// let dc = (c.b0 + c.b1 + c.b2) / (1.0 + c.a1 + c.a2);
    /// assert!((dc - 1.0).abs() < 1e-3);
    /// ```
    pub fn design(filter_type: FilterType, cutoff_hz: f32, q: f32, sample_rate: f32) -> Self {
        let omega = 2.0 * PI * cutoff_hz / sample_rate;
        let cos_omega = cosf(omega);
        let sin_omega = sinf(omega);
        let alpha = sin_omega / (2.0 * q);

        let (b0, b1, b2) = match filter_type {
            FilterType::HighPass => (
                (1.0 + cos_omega) / 2.0,
                -(1.0 + cos_omega),
                (1.0 + cos_omega) / 2.0,
            ),
            FilterType::LowPass => (
                (1.0 - cos_omega) / 2.0,
                1.0 - cos_omega,
                (1.0 - cos_omega) / 2.0,
            ),
        };
        let a0 = 1.0 + alpha;
        let a1 = -2.0 * cos_omega;
        let a2 = 1.0 - alpha;

        Self {
            b0: b0 / a0,
            b1: b1 / a0,
            b2: b2 / a0,
            a1: a1 / a0,
            a2: a2 / a0,
        }
    }

    /// True when every coefficient is a finite number.
    pub fn is_finite(&self) -> bool {
        self.b0.is_finite()
            && self.b1.is_finite()
            && self.b2.is_finite()
            && self.a1.is_finite()
            && self.a2.is_finite()
    }
}

impl Default for BiquadCoefficients {
    fn default() -> Self {
        Self::PASSTHROUGH
    }
}

/// Calculates low-pass filter coefficients using the RBJ cookbook formula.
///
/// # Arguments
///
/// * `frequency` - Cutoff frequency in Hz
/// * `q` - Q factor (0.707 for a Butterworth response)
/// * `sample_rate` - Sample rate in Hz
pub fn lowpass_coefficients(frequency: f32, q: f32, sample_rate: f32) -> BiquadCoefficients {
    BiquadCoefficients::design(FilterType::LowPass, frequency, q, sample_rate)
}

/// Calculates high-pass filter coefficients using the RBJ cookbook formula.
///
/// # Arguments
///
/// * `frequency` - Cutoff frequency in Hz
/// * `q` - Q factor (0.707 for a Butterworth response)
/// * `sample_rate` - Sample rate in Hz
pub fn highpass_coefficients(frequency: f32, q: f32, sample_rate: f32) -> BiquadCoefficients {
    BiquadCoefficients::design(FilterType::HighPass, frequency, q, sample_rate)
}

/// Second-order IIR filter: coefficients plus two samples of input and
/// output history.
///
/// Implements the Direct Form I structure:
/// ```text
/// y[n] = b0*x[n] + b1*x[n-1] + b2*x[n-2]
///                - a1*y[n-1] - a2*y[n-2]
/// ```
///
/// History is only meaningful for one contiguous stream: call
/// [`process`](Self::process) exactly once per sample, in order.
#[derive(Debug, Clone)]
pub struct Biquad {
    coeffs: BiquadCoefficients,

    /// Input delay line: x[n-1], x[n-2]
    x1: f32,
    x2: f32,

    /// Output delay line: y[n-1], y[n-2]
    y1: f32,
    y2: f32,
}

impl Biquad {
    /// Creates a new biquad with passthrough coefficients and zeroed history.
    pub fn new() -> Self {
        Self::with_coefficients(BiquadCoefficients::PASSTHROUGH)
    }

    /// Creates a biquad with the given coefficients and zeroed history.
    pub fn with_coefficients(coeffs: BiquadCoefficients) -> Self {
        Self {
            coeffs,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
        }
    }

    /// Replaces the coefficients. History is left untouched, so a running
    /// stream continues from its current state with the new response.
    #[inline]
    pub fn set_coefficients(&mut self, coeffs: BiquadCoefficients) {
        self.coeffs = coeffs;
    }

    /// Current coefficients.
    pub fn coefficients(&self) -> BiquadCoefficients {
        self.coeffs
    }

    /// Processes a single sample through the biquad filter.
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        let c = &self.coeffs;
        let output = c.b0 * input + c.b1 * self.x1 + c.b2 * self.x2
            - c.a1 * self.y1
            - c.a2 * self.y2;

        // Update delay lines
        self.x2 = self.x1;
        self.x1 = input;
        self.y2 = self.y1;
        self.y1 = output;

        output
    }

    /// Clears the filter state (delay lines) without changing coefficients.
    pub fn clear(&mut self) {
        self.x1 = 0.0;
        self.x2 = 0.0;
        self.y1 = 0.0;
        self.y2 = 0.0;
    }

    /// True when all four history values are exactly zero.
    pub fn is_cleared(&self) -> bool {
        self.x1 == 0.0 && self.x2 == 0.0 && self.y1 == 0.0 && self.y2 == 0.0
    }
}

impl Default for Biquad {
    fn default() -> Self {
        Self::new()
    }
}
