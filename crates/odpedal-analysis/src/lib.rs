//! odpedal Analysis - measurement tools for the overdrive chain
//!
//! Offline, `std`-only helpers used by the test suites and the `odpedal`
//! command line:
//!
//! - [`fft`] - Forward FFT wrapper and analysis windows
//! - [`spectrum`] - Magnitude spectra and peak picking
//! - [`dynamics`] - RMS and peak level
//! - [`transfer_fn`] - Frequency response from an impulse response, -3 dB search
//! - [`distortion`] - THD and odd/even harmonic balance
//! - [`signal`] - Sine, sweep and impulse generators
//!
//! ## Measuring a filter's cutoff
//!
//! ```rust
//! use odpedal_analysis::{FrequencyResponse, impulse_response};
//! use odpedal_core::{Biquad, lowpass_coefficients};
//!
//! let mut lpf = Biquad::with_coefficients(lowpass_coefficients(2000.0, 0.707, 48000.0));
//! let ir = impulse_response(|x| lpf.process(x), 8192);
//!
//! let response = FrequencyResponse::from_impulse_response(&ir, 48000.0, 8192);
//! let cutoff = response.cutoff_frequency(response.magnitude_at(0.0)).unwrap();
//! assert!((cutoff - 2000.0).abs() < 20.0);
//! ```
//!
//! ## Distortion Analysis
//!
//! ```rust
//! use odpedal_analysis::{ThdAnalyzer, generate_sine};
//!
//! let signal = generate_sine(48000.0, 1000.0, 0.5, 0.5);
//! let result = ThdAnalyzer::new(48000.0, 8192).analyze(&signal, 1000.0);
//! println!("THD: {:.2}% ({:.1} dB)", result.thd_ratio * 100.0, result.thd_db);
//! ```

pub mod distortion;
pub mod dynamics;
pub mod fft;
pub mod signal;
pub mod spectrum;
pub mod transfer_fn;

// Re-export main types
pub use distortion::{ThdAnalyzer, ThdResult};
pub use dynamics::{SILENCE_DB, crest_factor, peak, peak_db, rms, rms_db};
pub use fft::{Fft, Window};
pub use signal::{generate_sine, generate_sweep, impulse};
pub use spectrum::{bin_frequency, magnitude_spectrum, peak_frequency};
pub use transfer_fn::{FrequencyResponse, impulse_response};
