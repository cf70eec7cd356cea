//! Render settings file format.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::validation::{
    MAX_BLOCK_SIZE, validate_bit_depth, validate_block_size, validate_param,
};
use odpedal_effects::{DRIVE_RANGE_DB, LEVEL_RANGE_DB, OverdriveParams, TONE_RANGE_HZ};

/// Knob positions as written in a settings file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PedalSettings {
    /// Drive in dB (0 to 24).
    pub drive_db: f32,
    /// Tone cutoff in Hz (800 to 8000).
    pub tone_hz: f32,
    /// Level in dB (-12 to 12).
    pub level_db: f32,
}

impl Default for PedalSettings {
    fn default() -> Self {
        OverdriveParams::default().into()
    }
}

impl From<OverdriveParams> for PedalSettings {
    fn from(p: OverdriveParams) -> Self {
        Self {
            drive_db: p.drive_db,
            tone_hz: p.tone_hz,
            level_db: p.level_db,
        }
    }
}

impl From<PedalSettings> for OverdriveParams {
    fn from(s: PedalSettings) -> Self {
        Self {
            drive_db: s.drive_db,
            tone_hz: s.tone_hz,
            level_db: s.level_db,
        }
    }
}

/// Everything an offline render needs besides the input file.
///
/// Every field has a default, so an empty file is valid.
///
/// # TOML Format
///
/// ```toml
/// block_size = 256
/// bit_depth = 24
///
/// [pedal]
/// drive_db = 18.0
/// tone_hz = 2400.0
/// level_db = -6.0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RenderSettings {
    /// Frames handed to the engine per call.
    pub block_size: usize,
    /// Output WAV bit depth.
    pub bit_depth: u16,
    /// Knob positions.
    pub pedal: PedalSettings,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            block_size: 512,
            bit_depth: 32,
            pedal: PedalSettings::default(),
        }
    }
}

impl RenderSettings {
    /// Load settings from a TOML file. Values are not validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml_str(&content)
    }

    /// Parse settings from a TOML string. Values are not validated.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Check every knob and render option, reporting the first failure.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_param(&DRIVE_RANGE_DB, self.pedal.drive_db)?;
        validate_param(&TONE_RANGE_HZ, self.pedal.tone_hz)?;
        validate_param(&LEVEL_RANGE_DB, self.pedal.level_db)?;
        validate_block_size(self.block_size)?;
        validate_bit_depth(self.bit_depth)?;
        Ok(())
    }

    /// Copy with knobs and block size forced into range.
    ///
    /// Bit depth has no nearest valid value, so it is left for
    /// [`validate`](Self::validate) to reject.
    #[must_use]
    pub fn clamp_to_range(&self) -> Self {
        Self {
            block_size: self.block_size.clamp(1, MAX_BLOCK_SIZE),
            bit_depth: self.bit_depth,
            pedal: self.params().clamped().into(),
        }
    }

    /// Knob positions as engine parameters.
    pub fn params(&self) -> OverdriveParams {
        self.pedal.into()
    }
}
