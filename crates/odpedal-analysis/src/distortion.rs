//! Harmonic distortion measurement
//!
//! THD of a signal whose fundamental is known, plus the balance between odd
//! and even harmonics. A symmetric clipper such as the pedal's cubic stage
//! produces almost no even harmonics, so the odd/even ratio is a quick check
//! that nothing upstream adds asymmetry.

use crate::fft::{Fft, Window};

/// Result of [`ThdAnalyzer::analyze`].
#[derive(Debug, Clone)]
pub struct ThdResult {
    /// Fundamental the analysis was run for (Hz)
    pub fundamental_freq: f32,
    /// Peak amplitudes of the fundamental (index 0), 2nd, 3rd, ... harmonics
    pub harmonics: Vec<f32>,
    /// RMS of harmonics 2..N over the fundamental
    pub thd_ratio: f32,
    /// `thd_ratio` in dB
    pub thd_db: f32,
    /// Odd-harmonic energy (3rd, 5th, ...) over even-harmonic energy
    /// (2nd, 4th, ...), in dB
    pub odd_even_ratio_db: f32,
}

impl ThdResult {
    fn empty(fundamental_freq: f32) -> Self {
        Self {
            fundamental_freq,
            harmonics: Vec::new(),
            thd_ratio: 0.0,
            thd_db: f32::NEG_INFINITY,
            odd_even_ratio_db: 0.0,
        }
    }

    /// Amplitude of the fundamental, or zero when nothing was measured.
    pub fn fundamental_amplitude(&self) -> f32 {
        self.harmonics.first().copied().unwrap_or(0.0)
    }
}

/// THD analyzer for a fixed sample rate and FFT size.
pub struct ThdAnalyzer {
    sample_rate: f32,
    fft: Fft,
    window: Window,
    max_harmonics: usize,
}

impl ThdAnalyzer {
    /// Create an analyzer. `fft_size` should be a power of two, and the
    /// signals given to [`analyze`](Self::analyze) at least that long.
    pub fn new(sample_rate: f32, fft_size: usize) -> Self {
        Self {
            sample_rate,
            fft: Fft::new(fft_size),
            window: Window::BlackmanHarris,
            max_harmonics: 10,
        }
    }

    /// Replace the analysis window.
    pub fn with_window(mut self, window: Window) -> Self {
        self.window = window;
        self
    }

    /// Number of harmonics to measure, fundamental included.
    pub fn with_max_harmonics(mut self, max: usize) -> Self {
        self.max_harmonics = max.max(1);
        self
    }

    /// Measure `signal` against `fundamental_freq`.
    ///
    /// Harmonics at or above Nyquist are not measured. A fundamental at or
    /// below 0 Hz or at or above Nyquist yields an empty result.
    pub fn analyze(&self, signal: &[f32], fundamental_freq: f32) -> ThdResult {
        let nyquist = self.sample_rate / 2.0;
        if !(fundamental_freq > 0.0 && fundamental_freq < nyquist) {
            return ThdResult::empty(fundamental_freq);
        }

        let fft_size = self.fft.size();
        let mut windowed: Vec<f32> = signal.iter().take(fft_size).copied().collect();
        windowed.resize(fft_size, 0.0);
        self.window.apply(&mut windowed);

        let magnitudes: Vec<f32> = self.fft.forward(&windowed).iter().map(|c| c.norm()).collect();
        let bin_width = self.sample_rate / fft_size as f32;
        let amplitude_scale = 2.0 / self.window.coherent_gain(fft_size);

        let harmonics: Vec<f32> = (1..=self.max_harmonics)
            .map(|h| fundamental_freq * h as f32)
            .take_while(|&f| f < nyquist)
            .map(|f| measure_harmonic(&magnitudes, f / bin_width) * amplitude_scale)
            .collect();

        let fundamental = harmonics[0].max(1e-10);
        let harmonic_power: f32 = harmonics[1..].iter().map(|h| h * h).sum();
        let thd_ratio = harmonic_power.sqrt() / fundamental;

        // harmonics[1] is the 2nd, so odd indices are even harmonics
        let (even_power, odd_power) = harmonics[1..].iter().enumerate().fold(
            (0.0f32, 0.0f32),
            |(even, odd), (i, h)| {
                if i % 2 == 0 {
                    (even + h * h, odd)
                } else {
                    (even, odd + h * h)
                }
            },
        );

        ThdResult {
            fundamental_freq,
            thd_db: 20.0 * thd_ratio.max(1e-10).log10(),
            thd_ratio,
            odd_even_ratio_db: 10.0
                * (odd_power.max(1e-20).log10() - even_power.max(1e-20).log10()),
            harmonics,
        }
    }
}

/// Largest magnitude within two bins of `bin`, which covers the main lobe
/// peak of every supported window.
fn measure_harmonic(magnitudes: &[f32], bin: f32) -> f32 {
    let center = bin.round() as usize;
    let lo = center.saturating_sub(2);
    let hi = (center + 2).min(magnitudes.len().saturating_sub(1));
    magnitudes
        .get(lo..=hi)
        .map_or(0.0, |lobe| lobe.iter().copied().fold(0.0, f32::max))
}
