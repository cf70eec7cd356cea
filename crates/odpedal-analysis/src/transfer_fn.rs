//! Frequency response of linear stages, measured from impulse responses

use crate::fft::{Fft, magnitude_db};

/// Magnitude response sampled at FFT bin centers.
#[derive(Debug, Clone)]
pub struct FrequencyResponse {
    /// Bin center frequencies (Hz), DC to Nyquist
    pub frequencies: Vec<f32>,
    /// Magnitude per bin (dB)
    pub magnitude_db: Vec<f32>,
}

impl FrequencyResponse {
    /// Transform an impulse response into a magnitude response.
    ///
    /// No window is applied; `ir` should be long enough to have decayed
    /// below the level of interest, and `fft_size` at least as long as the
    /// part of `ir` that matters (the rest is truncated).
    pub fn from_impulse_response(ir: &[f32], sample_rate: f32, fft_size: usize) -> Self {
        let mut padded: Vec<f32> = ir.iter().take(fft_size).copied().collect();
        padded.resize(fft_size, 0.0);

        let spectrum = Fft::new(fft_size).forward(&padded);
        let bin_width = sample_rate / fft_size as f32;

        Self {
            frequencies: (0..spectrum.len()).map(|i| i as f32 * bin_width).collect(),
            magnitude_db: magnitude_db(&spectrum),
        }
    }

    /// Magnitude in dB at `freq_hz`, linearly interpolated between bins and
    /// held flat beyond either end.
    pub fn magnitude_at(&self, freq_hz: f32) -> f32 {
        interpolate(&self.frequencies, &self.magnitude_db, freq_hz)
    }

    /// First frequency where the response falls 3 dB below `reference_db`.
    ///
    /// Searches upward from DC and interpolates linearly between the two bins
    /// straddling the crossing. `None` if the response never drops that far.
    pub fn cutoff_frequency(&self, reference_db: f32) -> Option<f32> {
        let target = reference_db - 3.0;

        for i in 1..self.magnitude_db.len() {
            let (prev, curr) = (self.magnitude_db[i - 1], self.magnitude_db[i]);
            if prev >= target && curr < target {
                let t = (target - prev) / (curr - prev);
                let (f0, f1) = (self.frequencies[i - 1], self.frequencies[i]);
                return Some(f0 + t * (f1 - f0));
            }
        }
        None
    }
}

/// Capture `length` samples of the response of `process` to a unit impulse.
///
/// `process` is called exactly `length` times, in order, with `1.0` followed
/// by zeros.
pub fn impulse_response(mut process: impl FnMut(f32) -> f32, length: usize) -> Vec<f32> {
    (0..length)
        .map(|i| process(if i == 0 { 1.0 } else { 0.0 }))
        .collect()
}

fn interpolate(x: &[f32], y: &[f32], target_x: f32) -> f32 {
    let (Some(&first_x), Some(&first_y), Some(&last_y)) = (x.first(), y.first(), y.last()) else {
        return 0.0;
    };
    if target_x <= first_x {
        return first_y;
    }

    for i in 1..x.len() {
        if target_x <= x[i] {
            let t = (target_x - x[i - 1]) / (x[i] - x[i - 1]);
            return y[i - 1] + t * (y[i] - y[i - 1]);
        }
    }

    last_y
}
