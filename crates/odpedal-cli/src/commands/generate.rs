//! Test signal generation command.

use super::common::float_spec;
use clap::{Args, Subcommand};
use odpedal_analysis::{generate_sine, generate_sweep, impulse};
use odpedal_io::write_wav;
use std::path::PathBuf;

#[derive(Args)]
pub struct GenerateArgs {
    #[command(subcommand)]
    command: GenerateCommand,
}

#[derive(Subcommand)]
enum GenerateCommand {
    /// Generate a sine tone
    Tone {
        /// Output WAV file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Frequency in Hz
        #[arg(long, default_value = "440.0")]
        freq: f32,

        /// Duration in seconds
        #[arg(long, default_value = "1.0")]
        duration: f32,

        /// Sample rate
        #[arg(long, default_value = "48000")]
        sample_rate: u32,

        /// Amplitude (0-1)
        #[arg(long, default_value = "0.8")]
        amplitude: f32,
    },

    /// Generate an exponential sine sweep
    Sweep {
        /// Output WAV file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Start frequency in Hz
        #[arg(long, default_value = "20.0")]
        start: f32,

        /// End frequency in Hz
        #[arg(long, default_value = "20000.0")]
        end: f32,

        /// Duration in seconds
        #[arg(long, default_value = "2.0")]
        duration: f32,

        /// Sample rate
        #[arg(long, default_value = "48000")]
        sample_rate: u32,

        /// Amplitude (0-1)
        #[arg(long, default_value = "0.8")]
        amplitude: f32,
    },

    /// Generate an impulse
    Impulse {
        /// Output WAV file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Length in samples
        #[arg(long, default_value = "48000")]
        length: usize,

        /// Sample rate
        #[arg(long, default_value = "48000")]
        sample_rate: u32,

        /// Impulse amplitude
        #[arg(long, default_value = "1.0")]
        amplitude: f32,
    },
}

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    let (output, samples, sample_rate) = match args.command {
        GenerateCommand::Tone {
            output,
            freq,
            duration,
            sample_rate,
            amplitude,
        } => {
            println!("Generating sine tone...");
            println!("  {freq} Hz for {duration:.2}s");
            let samples = generate_sine(sample_rate as f32, freq, duration, amplitude);
            (output, samples, sample_rate)
        }

        GenerateCommand::Sweep {
            output,
            start,
            end,
            duration,
            sample_rate,
            amplitude,
        } => {
            if !(start > 0.0 && end > 0.0) {
                anyhow::bail!("sweep frequencies must be positive (got {start} to {end} Hz)");
            }
            println!("Generating sine sweep...");
            println!("  {start} Hz to {end} Hz over {duration:.2}s");
            let samples = generate_sweep(sample_rate as f32, start, end, duration, amplitude);
            (output, samples, sample_rate)
        }

        GenerateCommand::Impulse {
            output,
            length,
            sample_rate,
            amplitude,
        } => {
            println!("Generating impulse...");
            let samples: Vec<f32> = impulse(length).iter().map(|s| s * amplitude).collect();
            (output, samples, sample_rate)
        }
    };

    write_wav(&output, &samples, float_spec(sample_rate))?;
    println!("Wrote {} samples to {}", samples.len(), output.display());
    Ok(())
}
