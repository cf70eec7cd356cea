//! Render settings and parameter validation for the odpedal overdrive.
//!
//! The DSP engine accepts any value it is given. This crate is the layer that
//! enforces the pedal's nominal ranges before values reach it:
//!
//! - **Render settings**: [`RenderSettings`] loaded from TOML, covering the
//!   three knobs plus block size and output bit depth
//! - **Validation**: [`validate_param`], [`validate_block_size`],
//!   [`validate_bit_depth`] and [`validate_sample_rate`]
//! - **Clamping**: [`RenderSettings::clamp_to_range`] as the lenient
//!   alternative to rejection
//!
//! # Example
//!
//! ```rust
//! use odpedal_config::RenderSettings;
//!
//! let settings = RenderSettings::from_toml_str(
//!     r#"
//!     block_size = 128
//!
//!     [pedal]
//!     drive_db = 30.0
//!     "#,
//! )
//! .unwrap();
//!
//! assert!(settings.validate().is_err());
//! let lenient = settings.clamp_to_range();
//! assert_eq!(lenient.pedal.drive_db, 24.0);
//! ```

mod error;
mod settings;

/// Range checks for knobs and render options.
pub mod validation;

pub use error::ConfigError;
pub use settings::{PedalSettings, RenderSettings};
pub use validation::{
    MAX_BLOCK_SIZE, MIN_SAMPLE_RATE_HZ, SUPPORTED_BIT_DEPTHS, validate_bit_depth,
    validate_block_size, validate_param, validate_sample_rate,
};
