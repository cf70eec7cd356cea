//! Test signal generators

use std::f32::consts::TAU;

/// `duration_secs` of a sine at `frequency` Hz with peak `amplitude`,
/// starting at phase zero.
pub fn generate_sine(
    sample_rate: f32,
    frequency: f32,
    duration_secs: f32,
    amplitude: f32,
) -> Vec<f32> {
    let num_samples = (duration_secs * sample_rate) as usize;
    // Phase in f64: single precision drifts audibly over several seconds
    let step = f64::from(frequency) / f64::from(sample_rate);
    (0..num_samples)
        .map(|i| {
            let cycles = (i as f64 * step).fract();
            amplitude * (TAU * cycles as f32).sin()
        })
        .collect()
}

/// Exponential sine sweep from `start_freq` to `end_freq` Hz.
///
/// Instantaneous frequency grows exponentially with time so every octave
/// gets equal duration.
pub fn generate_sweep(
    sample_rate: f32,
    start_freq: f32,
    end_freq: f32,
    duration_secs: f32,
    amplitude: f32,
) -> Vec<f32> {
    let num_samples = (duration_secs * sample_rate) as usize;
    let k = (f64::from(end_freq) / f64::from(start_freq)).ln();
    let duration = f64::from(duration_secs);
    let start = f64::from(start_freq);

    (0..num_samples)
        .map(|i| {
            let t = i as f64 / f64::from(sample_rate);
            let phase = std::f64::consts::TAU * start * duration / k * ((k * t / duration).exp() - 1.0);
            amplitude * phase.sin() as f32
        })
        .collect()
}

/// Unit impulse: `1.0` followed by `length - 1` zeros.
pub fn impulse(length: usize) -> Vec<f32> {
    let mut signal = vec![0.0; length];
    if let Some(first) = signal.first_mut() {
        *first = 1.0;
    }
    signal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sine_length_and_amplitude() {
        let s = generate_sine(48000.0, 1000.0, 0.5, 0.25);
        assert_eq!(s.len(), 24000);
        assert_eq!(s[0], 0.0);
        let peak = s.iter().fold(0.0f32, |m, x| m.max(x.abs()));
        assert!((peak - 0.25).abs() < 1e-3);
    }

    #[test]
    fn sine_half_period_is_antisymmetric() {
        // 1 kHz at 48 kHz: 48 samples per period
        let s = generate_sine(48000.0, 1000.0, 0.01, 1.0);
        for i in 0..(s.len() - 24) {
            assert!((s[i] + s[i + 24]).abs() < 1e-5);
        }
    }

    #[test]
    fn sweep_is_bounded() {
        let s = generate_sweep(48000.0, 20.0, 20000.0, 1.0, 0.5);
        assert_eq!(s.len(), 48000);
        assert!(s.iter().all(|x| x.abs() <= 0.5 + 1e-6));
    }

    #[test]
    fn impulse_shape() {
        assert_eq!(impulse(4), vec![1.0, 0.0, 0.0, 0.0]);
        assert!(impulse(0).is_empty());
    }
}
