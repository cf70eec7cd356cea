//! Error types for configuration operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or validating render settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Knob value outside its nominal range
    #[error("{param} {value} out of range [{min}, {max}]")]
    OutOfRange {
        /// Name of the knob.
        param: &'static str,
        /// The rejected value.
        value: f32,
        /// Minimum allowed value.
        min: f32,
        /// Maximum allowed value.
        max: f32,
    },

    /// Block size of zero or above the supported maximum
    #[error("block size {0} must be between 1 and {max}", max = crate::MAX_BLOCK_SIZE)]
    InvalidBlockSize(usize),

    /// Output bit depth the writer does not produce
    #[error("bit depth {0} not supported (use 16, 24 or 32)")]
    InvalidBitDepth(u16),

    /// Sample rate too low for the filters the chain designs
    #[error("sample rate {0} Hz not supported (must exceed {min} Hz)", min = crate::MIN_SAMPLE_RATE_HZ)]
    UnsupportedSampleRate(f32),
}

impl ConfigError {
    /// Create a read file error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ReadFile {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    fn mock_io_err() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::NotFound, "mock")
    }

    #[test]
    fn read_file_display_and_source() {
        let err = ConfigError::read_file("/a/b.toml", mock_io_err());
        let msg = err.to_string();
        assert!(msg.contains("failed to read file"), "got: {msg}");
        assert!(msg.contains("/a/b.toml"), "got: {msg}");
        assert!(err.source().is_some(), "ReadFile must expose I/O source");
    }

    #[test]
    fn out_of_range_display() {
        let err = ConfigError::OutOfRange {
            param: "drive",
            value: 30.0,
            min: 0.0,
            max: 24.0,
        };
        assert_eq!(err.to_string(), "drive 30 out of range [0, 24]");
        assert!(err.source().is_none());
    }

    #[test]
    fn render_option_display() {
        assert_eq!(
            ConfigError::InvalidBlockSize(0).to_string(),
            "block size 0 must be between 1 and 8192"
        );
        assert_eq!(
            ConfigError::InvalidBitDepth(8).to_string(),
            "bit depth 8 not supported (use 16, 24 or 32)"
        );
        assert_eq!(
            ConfigError::UnsupportedSampleRate(8000.0).to_string(),
            "sample rate 8000 Hz not supported (must exceed 16000 Hz)"
        );
    }
}
