//! Level measurement
//!
//! Linear and dB versions of RMS and peak level. The dB variants report
//! [`SILENCE_DB`] for signals at or below 1e-10, so silence never becomes
//! `-inf` in printed statistics.

/// Level reported for silence.
pub const SILENCE_DB: f32 = -200.0;

fn to_db(linear: f32) -> f32 {
    if linear > 1e-10 {
        20.0 * linear.log10()
    } else {
        SILENCE_DB
    }
}

/// RMS level, linear. Zero for an empty signal.
pub fn rms(signal: &[f32]) -> f32 {
    if signal.is_empty() {
        return 0.0;
    }
    // f64 accumulator: ten seconds of audio is ~500k squares
    let sum_sq: f64 = signal.iter().map(|&x| f64::from(x) * f64::from(x)).sum();
    (sum_sq / signal.len() as f64).sqrt() as f32
}

/// RMS level in dBFS.
pub fn rms_db(signal: &[f32]) -> f32 {
    to_db(rms(signal))
}

/// Largest absolute sample value. NaN samples are ignored.
pub fn peak(signal: &[f32]) -> f32 {
    signal.iter().map(|x| x.abs()).fold(0.0, f32::max)
}

/// Peak level in dBFS.
pub fn peak_db(signal: &[f32]) -> f32 {
    to_db(peak(signal))
}

/// Peak-to-RMS ratio, linear. About 1.414 for a sine; zero for silence.
pub fn crest_factor(signal: &[f32]) -> f32 {
    let rms_val = rms(signal);
    if rms_val > 1e-10 {
        peak(signal) / rms_val
    } else {
        0.0
    }
}
