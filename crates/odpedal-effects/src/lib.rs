//! odpedal Effects - the overdrive engine
//!
//! Built on odpedal-core, this crate wires the gain stages, fixed filters and
//! soft clipper into the pedal's signal chain:
//!
//! - [`OverdriveDsp`] - The real-time engine (`prepare` / `process` / `reset`)
//! - [`Overdrive`] - Engine plus parameter snapshot behind the [`Effect`](odpedal_core::Effect) trait
//! - [`OverdriveParams`] - Drive, tone and level, with nominal ranges
//!
//! ## Features
//!
//! - `std` (default): forwards to `odpedal-core/std`
//! - `tracing`: emits a debug event from `prepare`; `process` never logs
//!
//! ## Example
//!
//! ```rust
//! use odpedal_effects::{OverdriveDsp, OverdriveParams};
//!
//! let params = OverdriveParams { drive_db: 30.0, ..Default::default() }.clamped();
//! assert_eq!(params.drive_db, 24.0);
//!
//! let mut dsp = OverdriveDsp::new();
//! dsp.prepare(48000.0);
//!
//! let mut block = [0.0f32; 128];
//! dsp.process(&mut block, params.drive_db, params.tone_hz, params.level_db);
//! assert!(block.iter().all(|&s| s == 0.0));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod overdrive;
pub mod params;

// Re-export main types at crate root
pub use overdrive::{
    DEFAULT_SAMPLE_RATE, DEFAULT_TONE_HZ, FILTER_Q, Overdrive, OverdriveDsp,
    POST_FILTER_CUTOFF_HZ, PRE_EMPHASIS_CUTOFF_HZ,
};
pub use params::{DRIVE_RANGE_DB, LEVEL_RANGE_DB, OverdriveParams, ParamRange, TONE_RANGE_HZ};
