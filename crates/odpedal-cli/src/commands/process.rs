//! File-based overdrive rendering command.

use super::common::PedalArgs;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use odpedal_analysis::{peak_db, rms_db};
use odpedal_config::{RenderSettings, validate_sample_rate};
use odpedal_effects::Overdrive;
use odpedal_io::{ProcessingEngine, WavSpec, read_wav, write_wav};
use std::path::PathBuf;

#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    #[command(flatten)]
    pedal: PedalArgs,

    /// Render settings file (TOML); flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Processing block size [default: 512]
    #[arg(long)]
    block_size: Option<usize>,

    /// Output bit depth (16, 24, or 32) [default: 32]
    #[arg(long)]
    bit_depth: Option<u16>,

    /// Pull out-of-range knobs to the nearest valid value instead of failing
    #[arg(long)]
    clamp: bool,
}

impl ProcessArgs {
    fn settings(&self) -> anyhow::Result<RenderSettings> {
        let mut settings = match &self.config {
            Some(path) => RenderSettings::load(path)?,
            None => RenderSettings::default(),
        };

        self.pedal.apply(&mut settings.pedal);
        if let Some(block_size) = self.block_size {
            settings.block_size = block_size;
        }
        if let Some(bit_depth) = self.bit_depth {
            settings.bit_depth = bit_depth;
        }

        if self.clamp {
            let clamped = settings.clamp_to_range();
            if clamped != settings {
                tracing::warn!(?clamped, "settings clamped to range");
            }
            settings = clamped;
        }
        settings.validate()?;
        Ok(settings)
    }
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    let settings = args.settings()?;
    tracing::debug!(?settings, "render settings");

    println!("Reading {}...", args.input.display());
    let (samples, spec) = read_wav(&args.input)?;
    let sample_rate = validate_sample_rate(spec.sample_rate as f32)?;

    println!(
        "  {} samples, {} Hz, {:.2}s",
        samples.len(),
        spec.sample_rate,
        samples.len() as f32 / sample_rate
    );
    if spec.channels > 1 {
        println!("  mixed {} channels to mono", spec.channels);
    }

    let params = settings.params();
    let mut engine = ProcessingEngine::new(sample_rate);
    engine.add_effect(Box::new(Overdrive::with_params(sample_rate, params)));

    println!(
        "Processing: drive {:.1} dB, tone {:.0} Hz, level {:.1} dB...",
        params.drive_db, params.tone_hz, params.level_db
    );

    let pb = ProgressBar::new(samples.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("##-"),
    );

    let output = engine.process_file_with_progress(&samples, settings.block_size, |done| {
        pb.set_position(done as u64);
    });

    pb.finish_with_message("done");

    println!("\nStats:");
    println!(
        "  Input:  RMS {:.1} dB, Peak {:.1} dB",
        rms_db(&samples),
        peak_db(&samples)
    );
    println!(
        "  Output: RMS {:.1} dB, Peak {:.1} dB",
        rms_db(&output),
        peak_db(&output)
    );

    let out_spec = WavSpec {
        channels: 1,
        sample_rate: spec.sample_rate,
        bits_per_sample: settings.bit_depth,
    };

    println!("\nWriting {}...", args.output.display());
    write_wav(&args.output, &output, out_spec)?;
    println!("Done!");

    Ok(())
}
