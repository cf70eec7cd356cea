//! File I/O for the odpedal overdrive.
//!
//! This crate provides:
//!
//! - **WAV file I/O**: [`read_wav`], [`write_wav`] and [`read_wav_info`].
//!   The signal chain is mono, so reading mixes every channel down to one and
//!   writing always produces a single-channel file.
//! - **Offline rendering**: [`ProcessingEngine`] runs a list of effects over
//!   a whole file in fixed-size blocks, the way an audio host would.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use odpedal_effects::Overdrive;
//! use odpedal_io::{ProcessingEngine, read_wav, write_wav};
//!
//! # fn main() -> odpedal_io::Result<()> {
//! let (samples, spec) = read_wav("input.wav")?;
//!
//! let mut engine = ProcessingEngine::new(spec.sample_rate as f32);
//! engine.add_effect(Box::new(Overdrive::new(spec.sample_rate as f32)));
//! let processed = engine.process_file(&samples, 512);
//!
//! write_wav("output.wav", &processed, spec)?;
//! # Ok(())
//! # }
//! ```

mod engine;
mod wav;

pub use engine::ProcessingEngine;
pub use wav::{WavFormat, WavInfo, WavSpec, read_wav, read_wav_info, write_wav};

/// Error types for audio I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// The requested sample format is not supported.
    #[error("Unsupported sample format: {0}")]
    UnsupportedFormat(String),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for audio I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
