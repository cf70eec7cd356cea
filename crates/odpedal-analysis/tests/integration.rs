//! Integration tests for odpedal-analysis.
//!
//! Exercises the measurement API against the core filters, whose responses
//! are known in closed form, and against synthetic signals.

use odpedal_analysis::{
    FrequencyResponse, ThdAnalyzer, Window, generate_sine, generate_sweep, impulse,
    impulse_response, magnitude_spectrum, peak_db, peak_frequency, rms_db,
};
use odpedal_core::{Biquad, highpass_coefficients, lowpass_coefficients, soft_clip};

const SAMPLE_RATE: f32 = 48000.0;
const FFT_SIZE: usize = 16384;

fn response_of(mut biquad: Biquad) -> FrequencyResponse {
    let ir = impulse_response(|x| biquad.process(x), FFT_SIZE);
    FrequencyResponse::from_impulse_response(&ir, SAMPLE_RATE, FFT_SIZE)
}

// ===========================================================================
// 1. Frequency response of cookbook filters
// ===========================================================================

#[test]
fn lowpass_cutoff_is_found_at_design_frequency() {
    for &fc in &[800.0, 2000.0, 3000.0, 7000.0] {
        let fr = response_of(Biquad::with_coefficients(lowpass_coefficients(
            fc,
            0.707,
            SAMPLE_RATE,
        )));
        let reference = fr.magnitude_at(0.0);
        assert!(reference.abs() < 0.01, "DC gain {reference} dB");

        let measured = fr.cutoff_frequency(reference).unwrap();
        assert!(
            (measured - fc).abs() < fc * 0.01,
            "designed {fc} Hz, measured {measured} Hz"
        );
    }
}

#[test]
fn highpass_has_no_lowpass_cutoff() {
    // Starts far below the reference, so there is no falling crossing
    let fr = response_of(Biquad::with_coefficients(highpass_coefficients(
        720.0,
        0.707,
        SAMPLE_RATE,
    )));
    assert!(fr.magnitude_at(50.0) < -40.0);
    assert!(fr.magnitude_at(10000.0).abs() < 0.1);
    assert!((fr.magnitude_at(720.0) - (-3.0)).abs() < 0.2);
}

#[test]
fn lowpass_stopband_falls_12_db_per_octave() {
    let fr = response_of(Biquad::with_coefficients(lowpass_coefficients(
        500.0,
        0.707,
        SAMPLE_RATE,
    )));
    let slope = fr.magnitude_at(2000.0) - fr.magnitude_at(4000.0);
    assert!((slope - 12.0).abs() < 1.0, "slope {slope} dB/octave");
}

// ===========================================================================
// 2. Spectra, levels and distortion
// ===========================================================================

#[test]
fn spectrum_peak_tracks_tone() {
    for &freq in &[440.0, 1000.0, 5000.0] {
        let signal = generate_sine(SAMPLE_RATE, freq, 0.5, 0.5);
        let spectrum = magnitude_spectrum(&signal, 8192, Window::Hann);
        let peak = peak_frequency(&spectrum, SAMPLE_RATE).unwrap();
        assert!((peak - freq).abs() < 5.0, "{freq} Hz measured as {peak} Hz");
    }
}

#[test]
fn level_of_full_scale_sine() {
    let signal = generate_sine(SAMPLE_RATE, 1000.0, 1.0, 1.0);
    assert!(peak_db(&signal).abs() < 0.01);
    assert!((rms_db(&signal) - (-3.01)).abs() < 0.02);
}

#[test]
fn soft_clip_thd_grows_with_level() {
    let analyzer = ThdAnalyzer::new(SAMPLE_RATE, 8192);
    let mut last_thd = 0.0;

    for &amplitude in &[0.1, 0.3, 0.6, 0.9] {
        let clipped: Vec<f32> = generate_sine(SAMPLE_RATE, 1000.0, 0.5, amplitude)
            .into_iter()
            .map(soft_clip)
            .collect();
        let result = analyzer.analyze(&clipped, 1000.0);

        assert!(
            result.thd_ratio > last_thd,
            "THD at amplitude {amplitude}: {} not above {last_thd}",
            result.thd_ratio
        );
        assert!(result.odd_even_ratio_db > 20.0);
        last_thd = result.thd_ratio;
    }
}

#[test]
fn generators_cover_requested_length() {
    assert_eq!(generate_sine(44100.0, 1000.0, 2.0, 0.5).len(), 88200);
    assert_eq!(generate_sweep(44100.0, 20.0, 20000.0, 2.0, 0.5).len(), 88200);
    assert_eq!(impulse(512).iter().filter(|&&s| s != 0.0).count(), 1);
}
