//! odpedal Core - DSP primitives for the overdrive pedal
//!
//! This crate provides the building blocks of the overdrive signal chain,
//! designed for real-time audio processing with zero allocation in the audio
//! path.
//!
//! # Core Abstractions
//!
//! - [`Effect`] - Object-safe trait for audio processors
//!
//! ## Filters
//!
//! - [`Biquad`] - Second-order IIR filter, Direct Form I
//! - [`BiquadCoefficients`] / [`FilterType`] - RBJ cookbook high-pass and
//!   low-pass design
//!
//! ## Nonlinearity and Gain
//!
//! - [`soft_clip`] - Cubic soft clipper
//! - [`GainStage`] - dB-controlled multiplier
//! - [`db_to_linear`] / [`linear_to_db`]
//!
//! # no_std Support
//!
//! Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! odpedal-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use odpedal_core::{Biquad, GainStage, lowpass_coefficients, soft_clip};
//!
//! let mut lpf = Biquad::with_coefficients(lowpass_coefficients(7000.0, 0.707, 48000.0));
//! let drive = GainStage::from_db(12.0);
//!
//! let out = lpf.process(soft_clip(drive.apply(0.1)));
//! assert!(out.is_finite());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod biquad;
pub mod effect;
pub mod gain;
pub mod math;

// Re-export main types at crate root
pub use biquad::{
    Biquad, BiquadCoefficients, FilterType, highpass_coefficients, lowpass_coefficients,
};
pub use effect::Effect;
pub use gain::GainStage;
pub use math::{SOFT_CLIP_CEILING, db_to_linear, linear_to_db, soft_clip};
