//! Shared CLI helpers used across multiple commands.

use clap::Args;
use odpedal_config::PedalSettings;
use odpedal_io::WavSpec;

/// Knob flags. Unset flags leave the underlying setting alone.
#[derive(Args, Debug, Default)]
pub struct PedalArgs {
    /// Drive in dB (0 to 24)
    #[arg(long, allow_hyphen_values = true)]
    pub drive: Option<f32>,

    /// Tone cutoff in Hz (800 to 8000)
    #[arg(long)]
    pub tone: Option<f32>,

    /// Output level in dB (-12 to 12)
    #[arg(long, allow_hyphen_values = true)]
    pub level: Option<f32>,
}

impl PedalArgs {
    /// Overwrite the knobs given on the command line.
    pub fn apply(&self, pedal: &mut PedalSettings) {
        if let Some(drive) = self.drive {
            pedal.drive_db = drive;
        }
        if let Some(tone) = self.tone {
            pedal.tone_hz = tone;
        }
        if let Some(level) = self.level {
            pedal.level_db = level;
        }
    }
}

/// Mono float WAV spec used for generated signals.
pub fn float_spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
    }
}
