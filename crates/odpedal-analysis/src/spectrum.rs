//! Magnitude spectra and peak picking

use crate::fft::{Fft, Window};

/// Windowed magnitude spectrum of `signal`, `fft_size / 2 + 1` bins.
///
/// The signal is zero-padded or truncated to `fft_size` before the window is
/// applied. Magnitudes are raw FFT magnitudes; divide by
/// [`Window::coherent_gain`]` / 2` for sinusoid peak amplitude.
pub fn magnitude_spectrum(signal: &[f32], fft_size: usize, window: Window) -> Vec<f32> {
    let mut windowed: Vec<f32> = signal.iter().take(fft_size).copied().collect();
    windowed.resize(fft_size, 0.0);
    window.apply(&mut windowed);

    Fft::new(fft_size)
        .forward(&windowed)
        .iter()
        .map(|c| c.norm())
        .collect()
}

/// Frequency in Hz of bin `index` for a spectrum of `bins` bins.
pub fn bin_frequency(index: usize, bins: usize, sample_rate: f32) -> f32 {
    let fft_size = bins.saturating_sub(1) * 2;
    if fft_size == 0 {
        return 0.0;
    }
    index as f32 * sample_rate / fft_size as f32
}

/// Frequency of the strongest non-DC bin, refined by parabolic
/// interpolation across its neighbours.
///
/// Returns `None` for spectra with fewer than three bins or no energy.
pub fn peak_frequency(spectrum: &[f32], sample_rate: f32) -> Option<f32> {
    if spectrum.len() < 3 {
        return None;
    }

    let (idx, &mag) = spectrum
        .iter()
        .enumerate()
        .skip(1)
        .max_by(|a, b| a.1.total_cmp(b.1))?;
    if mag <= 1e-10 {
        return None;
    }

    let mut offset = 0.0;
    if idx + 1 < spectrum.len() {
        let alpha = spectrum[idx - 1];
        let gamma = spectrum[idx + 1];
        let denom = alpha - 2.0 * mag + gamma;
        if denom.abs() > 1e-10 {
            offset = (0.5 * (alpha - gamma) / denom).clamp(-0.5, 0.5);
        }
    }

    let fft_size = (spectrum.len() - 1) * 2;
    Some((idx as f32 + offset) * sample_rate / fft_size as f32)
}
