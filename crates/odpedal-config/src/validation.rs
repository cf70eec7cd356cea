//! Range checks for knobs and render options.
//!
//! Every check returns the accepted value so callers can validate and bind
//! in one step.
//!
//! # Example
//!
//! ```rust
//! use odpedal_config::{validate_param, validate_sample_rate};
//! use odpedal_effects::TONE_RANGE_HZ;
//!
//! assert_eq!(validate_param(&TONE_RANGE_HZ, 2500.0).unwrap(), 2500.0);
//! assert!(validate_param(&TONE_RANGE_HZ, 12000.0).is_err());
//! assert!(validate_sample_rate(44100.0).is_ok());
//! ```

use crate::ConfigError;
use odpedal_effects::{ParamRange, TONE_RANGE_HZ};

/// Largest block size a render may use.
pub const MAX_BLOCK_SIZE: usize = 8192;

/// Output bit depths the WAV writer produces.
pub const SUPPORTED_BIT_DEPTHS: [u16; 3] = [16, 24, 32];

/// Sample rates must be strictly above this: twice the highest cutoff the
/// chain designs (the tone maximum, above the fixed 7 kHz low-pass).
pub const MIN_SAMPLE_RATE_HZ: f32 = 2.0 * TONE_RANGE_HZ.max;

/// Accept `value` if it lies inside `range`.
pub fn validate_param(range: &ParamRange, value: f32) -> Result<f32, ConfigError> {
    if range.contains(value) {
        Ok(value)
    } else {
        Err(ConfigError::OutOfRange {
            param: range.name,
            value,
            min: range.min,
            max: range.max,
        })
    }
}

/// Accept block sizes in `1..=MAX_BLOCK_SIZE`.
pub fn validate_block_size(block_size: usize) -> Result<usize, ConfigError> {
    if (1..=MAX_BLOCK_SIZE).contains(&block_size) {
        Ok(block_size)
    } else {
        Err(ConfigError::InvalidBlockSize(block_size))
    }
}

/// Accept 16, 24 or 32.
pub fn validate_bit_depth(bits: u16) -> Result<u16, ConfigError> {
    if SUPPORTED_BIT_DEPTHS.contains(&bits) {
        Ok(bits)
    } else {
        Err(ConfigError::InvalidBitDepth(bits))
    }
}

/// Accept finite sample rates above [`MIN_SAMPLE_RATE_HZ`].
pub fn validate_sample_rate(sample_rate: f32) -> Result<f32, ConfigError> {
    if sample_rate.is_finite() && sample_rate > MIN_SAMPLE_RATE_HZ {
        Ok(sample_rate)
    } else {
        Err(ConfigError::UnsupportedSampleRate(sample_rate))
    }
}
