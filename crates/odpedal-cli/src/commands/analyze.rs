//! Measurement commands.

use super::common::PedalArgs;
use clap::{Args, Subcommand};
use odpedal_analysis::{FrequencyResponse, ThdAnalyzer, generate_sine, impulse_response, rms_db};
use odpedal_config::{RenderSettings, validate_sample_rate};
use odpedal_core::Effect;
use odpedal_effects::{Overdrive, OverdriveDsp};
use odpedal_io::read_wav;
use std::path::{Path, PathBuf};

/// Probe frequency and level for the small-signal gain measurement.
const PROBE_HZ: f32 = 1000.0;
const PROBE_AMPLITUDE: f32 = 0.001;

#[derive(Args)]
pub struct AnalyzeArgs {
    #[command(subcommand)]
    command: AnalyzeCommand,
}

#[derive(Subcommand)]
enum AnalyzeCommand {
    /// Measure the tone stage cutoff and the chain's small-signal gain
    Response {
        #[command(flatten)]
        pedal: PedalArgs,

        /// Sample rate to design the filters for
        #[arg(long, default_value = "48000")]
        sample_rate: f32,

        /// FFT size for the tone stage response
        #[arg(long, default_value = "16384")]
        fft_size: usize,
    },

    /// Measure harmonic distortion of a WAV file
    Thd {
        /// Input WAV file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Fundamental frequency in Hz
        #[arg(long)]
        freq: f32,

        /// FFT size
        #[arg(long, default_value = "8192")]
        fft_size: usize,

        /// Number of harmonics to measure, fundamental included
        #[arg(long, default_value = "10")]
        harmonics: usize,
    },
}

pub fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    match args.command {
        AnalyzeCommand::Response {
            pedal,
            sample_rate,
            fft_size,
        } => response(&pedal, sample_rate, fft_size),
        AnalyzeCommand::Thd {
            input,
            freq,
            fft_size,
            harmonics,
        } => thd(&input, freq, fft_size, harmonics),
    }
}

fn response(pedal: &PedalArgs, sample_rate: f32, fft_size: usize) -> anyhow::Result<()> {
    let mut settings = RenderSettings::default();
    pedal.apply(&mut settings.pedal);
    settings.validate()?;
    let sample_rate = validate_sample_rate(sample_rate)?;
    if !fft_size.is_power_of_two() {
        anyhow::bail!("FFT size {fft_size} must be a power of two");
    }
    let params = settings.params();

    println!(
        "Pedal: drive {:.1} dB, tone {:.0} Hz, level {:.1} dB at {} Hz",
        params.drive_db, params.tone_hz, params.level_db, sample_rate
    );

    // One silent sample is enough for the engine to design the tone filter
    let mut dsp = OverdriveDsp::new();
    dsp.prepare(sample_rate);
    dsp.process(&mut [0.0], params.drive_db, params.tone_hz, params.level_db);
    let mut tone_filter = dsp.tone_filter().clone();
    tone_filter.clear();

    let ir = impulse_response(|x| tone_filter.process(x), fft_size);
    let tone_response = FrequencyResponse::from_impulse_response(&ir, sample_rate, fft_size);
    let dc_db = tone_response.magnitude_at(0.0);

    println!("\nTone stage:");
    match tone_response.cutoff_frequency(dc_db) {
        Some(cutoff) => println!("  -3 dB at {cutoff:.1} Hz"),
        None => println!("  no -3 dB point below Nyquist"),
    }
    for octave in [0.5, 2.0] {
        let freq = params.tone_hz * octave;
        if freq < sample_rate / 2.0 {
            println!(
                "  {:>7.1} Hz: {:+.2} dB",
                freq,
                tone_response.magnitude_at(freq) - dc_db
            );
        }
    }

    // Skip the first half so the filters have settled
    let probe = generate_sine(sample_rate, PROBE_HZ, 0.5, PROBE_AMPLITUDE);
    let mut overdrive = Overdrive::with_params(sample_rate, params);
    let mut out = vec![0.0; probe.len()];
    overdrive.process_block(&probe, &mut out);
    let settled = probe.len() / 2;
    let gain_db = rms_db(&out[settled..]) - rms_db(&probe[settled..]);

    println!("\nChain:");
    println!("  small-signal gain at {PROBE_HZ} Hz: {gain_db:+.2} dB");

    Ok(())
}

fn thd(input: &Path, freq: f32, fft_size: usize, harmonics: usize) -> anyhow::Result<()> {
    if !fft_size.is_power_of_two() {
        anyhow::bail!("FFT size {fft_size} must be a power of two");
    }

    println!("Analyzing distortion of {}...", input.display());
    let (samples, spec) = read_wav(input)?;
    let sample_rate = spec.sample_rate as f32;

    if samples.len() < fft_size {
        tracing::warn!(
            frames = samples.len(),
            fft_size,
            "input shorter than FFT, zero padding"
        );
    }

    // Take a chunk from the middle of the file
    let start = samples.len().saturating_sub(fft_size) / 2;
    let result = ThdAnalyzer::new(sample_rate, fft_size)
        .with_max_harmonics(harmonics)
        .analyze(&samples[start..], freq);

    if result.harmonics.is_empty() {
        anyhow::bail!(
            "fundamental {freq} Hz must be between 0 and {} Hz",
            sample_rate / 2.0
        );
    }

    println!("\nFundamental: {freq} Hz, amplitude {:.4}", result.fundamental_amplitude());
    println!("THD:         {:.3}% ({:.1} dB)", result.thd_ratio * 100.0, result.thd_db);
    println!("Odd/even:    {:+.1} dB", result.odd_even_ratio_db);

    println!("\nHarmonics:");
    let fundamental = result.fundamental_amplitude().max(1e-10);
    for (i, amplitude) in result.harmonics.iter().enumerate().skip(1) {
        let relative_db = 20.0 * (amplitude.max(1e-10) / fundamental).log10();
        println!("  H{:<2} {:>9.1} Hz  {:>7.1} dB", i + 1, freq * (i + 1) as f32, relative_db);
    }

    Ok(())
}
