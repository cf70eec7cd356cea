//! Cascaded-filter overdrive.
//!
//! Signal flow, per sample:
//!
//! ```text
//! drive ─► 720 Hz HPF ─► cubic soft clip ─► 7 kHz LPF ─► tone LPF ─► level
//! ```
//!
//! Three [`Biquad`]s carry all of the state. The tone filter is
//! re-coefficiented only when the tone value differs from the last one it was
//! designed for; the comparison is exact and happens on every sample, before
//! that sample is filtered.

use crate::params::OverdriveParams;
use odpedal_core::{
    Biquad, Effect, GainStage, highpass_coefficients, lowpass_coefficients, soft_clip,
};

/// Sample rate assumed before the first [`OverdriveDsp::prepare`].
pub const DEFAULT_SAMPLE_RATE: f32 = 44100.0;

/// Corner of the fixed pre-emphasis high-pass.
pub const PRE_EMPHASIS_CUTOFF_HZ: f32 = 720.0;

/// Corner of the fixed post-clip low-pass.
pub const POST_FILTER_CUTOFF_HZ: f32 = 7000.0;

/// Q shared by all three filters (Butterworth).
pub const FILTER_Q: f32 = 0.707;

/// Tone cutoff installed by [`OverdriveDsp::prepare`].
pub const DEFAULT_TONE_HZ: f32 = 3000.0;

/// The overdrive engine: filter state, sample rate and the cached tone value.
///
/// This is the real-time half of the pedal. [`process`](Self::process) never
/// allocates, locks or logs. [`prepare`](Self::prepare) and
/// [`reset`](Self::reset) belong to the control side and must not overlap a
/// `process` call; the engine does no synchronization of its own.
///
/// Inputs are not validated. A sample rate `<= 0` or a cutoff at or above
/// Nyquist gives a deterministic but meaningless response, and a NaN or
/// infinite sample poisons the filter history until the next `reset`.
/// Range enforcement belongs to whoever owns the parameters, see
/// [`OverdriveParams::clamped`].
///
/// # Example
///
/// ```rust
/// use odpedal_effects::OverdriveDsp;
///
/// let mut dsp = OverdriveDsp::new();
/// dsp.prepare(48000.0);
///
/// let mut block = [0.1f32; 64];
/// dsp.process(&mut block, 12.0, 3000.0, -6.0);
/// assert!(block.iter().all(|s| s.is_finite()));
/// ```
#[derive(Debug, Clone)]
pub struct OverdriveDsp {
    pre_emphasis: Biquad,
    post_filter: Biquad,
    tone_filter: Biquad,
    sample_rate: f32,
    last_tone_hz: f32,
}

impl OverdriveDsp {
    /// Create an engine configured for [`DEFAULT_SAMPLE_RATE`] and
    /// [`DEFAULT_TONE_HZ`], with zeroed history.
    pub fn new() -> Self {
        let mut dsp = Self {
            pre_emphasis: Biquad::new(),
            post_filter: Biquad::new(),
            tone_filter: Biquad::new(),
            sample_rate: DEFAULT_SAMPLE_RATE,
            last_tone_hz: DEFAULT_TONE_HZ,
        };
        dsp.prepare(DEFAULT_SAMPLE_RATE);
        dsp
    }

    /// (Re)configure for `sample_rate`.
    ///
    /// Redesigns the fixed high-pass and low-pass, puts the tone filter back
    /// at [`DEFAULT_TONE_HZ`], and zeroes all history. Must run at least once
    /// per stream configuration and never concurrently with `process`.
    pub fn prepare(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.pre_emphasis.set_coefficients(highpass_coefficients(
            PRE_EMPHASIS_CUTOFF_HZ,
            FILTER_Q,
            sample_rate,
        ));
        self.post_filter.set_coefficients(lowpass_coefficients(
            POST_FILTER_CUTOFF_HZ,
            FILTER_Q,
            sample_rate,
        ));
        self.update_tone(DEFAULT_TONE_HZ);
        self.reset();

        #[cfg(feature = "tracing")]
        tracing::debug!(sample_rate, tone_hz = DEFAULT_TONE_HZ, "overdrive prepared");
    }

    /// Zero the history of all three filters.
    ///
    /// Coefficients, sample rate and the cached tone are kept, so the next
    /// block starts from silence with the same response.
    pub fn reset(&mut self) {
        self.pre_emphasis.clear();
        self.post_filter.clear();
        self.tone_filter.clear();
    }

    /// Process `buffer` in place.
    ///
    /// `drive_db` and `level_db` are converted to linear gain once for the
    /// block. `tone_hz` is compared against the cached tone on every sample;
    /// a change redesigns the tone filter before the first sample it applies
    /// to. Nominal ranges are drive 0..24 dB, tone 800..8000 Hz and level
    /// -12..12 dB; values outside them are used as given.
    pub fn process(&mut self, buffer: &mut [f32], drive_db: f32, tone_hz: f32, level_db: f32) {
        self.run(buffer, drive_db, level_db, |_| tone_hz);
    }

    /// Like [`process`](Self::process), with one tone value per sample.
    ///
    /// A tone change at index `i` takes effect on sample `i`, which makes
    /// one long call equivalent to several shorter calls split at the change
    /// points. Only `min(buffer.len(), tone_hz.len())` samples are processed.
    ///
    /// # Panics
    /// Debug builds panic if the two slices differ in length.
    pub fn process_automated(
        &mut self,
        buffer: &mut [f32],
        drive_db: f32,
        tone_hz: &[f32],
        level_db: f32,
    ) {
        debug_assert_eq!(
            buffer.len(),
            tone_hz.len(),
            "One tone value per sample is required"
        );
        let len = buffer.len().min(tone_hz.len());
        self.run(&mut buffer[..len], drive_db, level_db, |i| tone_hz[i]);
    }

    #[inline]
    fn run(
        &mut self,
        buffer: &mut [f32],
        drive_db: f32,
        level_db: f32,
        tone_at: impl Fn(usize) -> f32,
    ) {
        let drive = GainStage::from_db(drive_db);
        let level = GainStage::from_db(level_db);

        for (i, sample) in buffer.iter_mut().enumerate() {
            let tone = tone_at(i);
            if tone != self.last_tone_hz {
                self.update_tone(tone);
            }

            let driven = drive.apply(*sample);
            let emphasized = self.pre_emphasis.process(driven);
            let clipped = soft_clip(emphasized);
            let smoothed = self.post_filter.process(clipped);
            let toned = self.tone_filter.process(smoothed);
            *sample = level.apply(toned);
        }
    }

    #[inline]
    fn update_tone(&mut self, tone_hz: f32) {
        self.tone_filter
            .set_coefficients(lowpass_coefficients(tone_hz, FILTER_Q, self.sample_rate));
        self.last_tone_hz = tone_hz;
    }

    /// Sample rate of the current configuration.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Tone value the tone filter is currently designed for.
    pub fn last_tone_hz(&self) -> f32 {
        self.last_tone_hz
    }

    /// The variable tone stage on its own, for measurement.
    pub fn tone_filter(&self) -> &Biquad {
        &self.tone_filter
    }

    /// True when every filter's history is zero.
    pub fn is_cleared(&self) -> bool {
        self.pre_emphasis.is_cleared()
            && self.post_filter.is_cleared()
            && self.tone_filter.is_cleared()
    }
}

impl Default for OverdriveDsp {
    fn default() -> Self {
        Self::new()
    }
}

/// [`OverdriveDsp`] bundled with a parameter snapshot so it can run behind
/// the [`Effect`] trait.
///
/// Block methods hand the whole block to the engine with the current
/// snapshot; prefer them over [`Effect::process`], which converts both gains
/// for every sample.
///
/// # Example
///
/// ```rust
/// use odpedal_core::Effect;
/// use odpedal_effects::Overdrive;
///
/// let mut od = Overdrive::new(48000.0);
/// od.set_drive_db(18.0);
/// od.set_tone_hz(2500.0);
/// od.set_level_db(-3.0);
///
/// let mut block = vec![0.2f32; 256];
/// od.process_block_inplace(&mut block);
/// ```
#[derive(Debug, Clone)]
pub struct Overdrive {
    dsp: OverdriveDsp,
    params: OverdriveParams,
}

impl Overdrive {
    /// Create an overdrive prepared for `sample_rate` with default parameters.
    pub fn new(sample_rate: f32) -> Self {
        Self::with_params(sample_rate, OverdriveParams::default())
    }

    /// Create an overdrive prepared for `sample_rate` with `params`.
    pub fn with_params(sample_rate: f32, params: OverdriveParams) -> Self {
        let mut dsp = OverdriveDsp::new();
        dsp.prepare(sample_rate);
        Self { dsp, params }
    }

    /// Replace the parameter snapshot. Values are stored as given.
    pub fn set_params(&mut self, params: OverdriveParams) {
        self.params = params;
    }

    /// Current parameter snapshot.
    pub fn params(&self) -> OverdriveParams {
        self.params
    }

    /// Set drive in dB.
    pub fn set_drive_db(&mut self, db: f32) {
        self.params.drive_db = db;
    }

    /// Set tone cutoff in Hz.
    pub fn set_tone_hz(&mut self, hz: f32) {
        self.params.tone_hz = hz;
    }

    /// Set output level in dB.
    pub fn set_level_db(&mut self, db: f32) {
        self.params.level_db = db;
    }

    /// The underlying engine.
    pub fn dsp(&self) -> &OverdriveDsp {
        &self.dsp
    }
}

impl Effect for Overdrive {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        let mut frame = [input];
        self.process_block_inplace(&mut frame);
        frame[0]
    }

    fn process_block(&mut self, input: &[f32], output: &mut [f32]) {
        debug_assert_eq!(
            input.len(),
            output.len(),
            "Input and output buffers must have same length"
        );
        let len = input.len().min(output.len());
        output[..len].copy_from_slice(&input[..len]);
        self.process_block_inplace(&mut output[..len]);
    }

    fn process_block_inplace(&mut self, buffer: &mut [f32]) {
        let p = self.params;
        self.dsp.process(buffer, p.drive_db, p.tone_hz, p.level_db);
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.dsp.prepare(sample_rate);
    }

    fn reset(&mut self) {
        self.dsp.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_prepared_for_default_rate() {
        let dsp = OverdriveDsp::new();
        assert_eq!(dsp.sample_rate(), DEFAULT_SAMPLE_RATE);
        assert_eq!(dsp.last_tone_hz(), DEFAULT_TONE_HZ);
        assert!(dsp.is_cleared());
        assert_eq!(
            dsp.tone_filter().coefficients(),
            lowpass_coefficients(DEFAULT_TONE_HZ, FILTER_Q, DEFAULT_SAMPLE_RATE)
        );
    }

    #[test]
    fn prepare_redesigns_for_new_rate() {
        let mut dsp = OverdriveDsp::new();
        let mut block = [0.5f32; 32];
        dsp.process(&mut block, 6.0, 5000.0, 0.0);
        assert_eq!(dsp.last_tone_hz(), 5000.0);
        assert!(!dsp.is_cleared());

        dsp.prepare(96000.0);
        assert_eq!(dsp.sample_rate(), 96000.0);
        assert_eq!(dsp.last_tone_hz(), DEFAULT_TONE_HZ);
        assert!(dsp.is_cleared());
        assert_eq!(
            dsp.pre_emphasis.coefficients(),
            highpass_coefficients(PRE_EMPHASIS_CUTOFF_HZ, FILTER_Q, 96000.0)
        );
        assert_eq!(
            dsp.post_filter.coefficients(),
            lowpass_coefficients(POST_FILTER_CUTOFF_HZ, FILTER_Q, 96000.0)
        );
        assert_eq!(
            dsp.tone_filter().coefficients(),
            lowpass_coefficients(DEFAULT_TONE_HZ, FILTER_Q, 96000.0)
        );
    }

    #[test]
    fn reset_keeps_coefficients_and_tone() {
        let mut dsp = OverdriveDsp::new();
        dsp.prepare(48000.0);
        let mut block = [0.3f32; 64];
        dsp.process(&mut block, 12.0, 1200.0, 3.0);
        let tone_coeffs = dsp.tone_filter().coefficients();

        dsp.reset();
        assert!(dsp.is_cleared());
        assert_eq!(dsp.sample_rate(), 48000.0);
        assert_eq!(dsp.last_tone_hz(), 1200.0);
        assert_eq!(dsp.tone_filter().coefficients(), tone_coeffs);
    }

    #[test]
    fn tone_change_redesigns_tone_filter_only() {
        let mut dsp = OverdriveDsp::new();
        let pre = dsp.pre_emphasis.coefficients();
        let post = dsp.post_filter.coefficients();

        let mut block = [0.0f32; 8];
        dsp.process(&mut block, 0.0, 6500.0, 0.0);

        assert_eq!(dsp.pre_emphasis.coefficients(), pre);
        assert_eq!(dsp.post_filter.coefficients(), post);
        assert_eq!(
            dsp.tone_filter().coefficients(),
            lowpass_coefficients(6500.0, FILTER_Q, DEFAULT_SAMPLE_RATE)
        );
    }

    #[test]
    fn empty_buffer_is_a_no_op() {
        let mut dsp = OverdriveDsp::new();
        dsp.process(&mut [], 24.0, 800.0, 12.0);
        assert!(dsp.is_cleared());
        // The tone check is per sample, so no samples means no redesign.
        assert_eq!(dsp.last_tone_hz(), DEFAULT_TONE_HZ);
    }

    #[test]
    fn automated_tone_takes_effect_on_its_sample() {
        let mut dsp = OverdriveDsp::new();
        let mut block = [0.1f32; 4];
        let tones = [3000.0, 3000.0, 4000.0, 4000.0];
        dsp.process_automated(&mut block, 0.0, &tones, 0.0);
        assert_eq!(dsp.last_tone_hz(), 4000.0);
    }

    #[test]
    fn effect_wrapper_matches_engine() {
        let params = OverdriveParams {
            drive_db: 15.0,
            tone_hz: 2200.0,
            level_db: -4.0,
        };
        let mut od = Overdrive::with_params(48000.0, params);
        let mut dsp = OverdriveDsp::new();
        dsp.prepare(48000.0);

        let input: Vec<f32> = (0..256).map(|i| ((i as f32) * 0.05).sin() * 0.4).collect();

        let mut via_effect = vec![0.0; input.len()];
        od.process_block(&input, &mut via_effect);

        let mut via_engine = input.clone();
        dsp.process(&mut via_engine, 15.0, 2200.0, -4.0);

        assert_eq!(via_effect, via_engine);
    }

    #[test]
    fn effect_per_sample_matches_block() {
        let mut a = Overdrive::new(44100.0);
        let mut b = Overdrive::new(44100.0);
        a.set_drive_db(9.0);
        b.set_drive_db(9.0);

        let input: Vec<f32> = (0..128).map(|i| ((i as f32) * 0.1).sin() * 0.5).collect();
        let per_sample: Vec<f32> = input.iter().map(|&s| a.process(s)).collect();
        let mut block = input.clone();
        b.process_block_inplace(&mut block);

        assert_eq!(per_sample, block);
    }

    #[test]
    fn effect_lifecycle_forwards_to_engine() {
        let mut od = Overdrive::new(44100.0);
        od.process_block_inplace(&mut [0.5f32; 16]);
        assert!(!od.dsp().is_cleared());

        od.reset();
        assert!(od.dsp().is_cleared());

        od.set_sample_rate(88200.0);
        assert_eq!(od.dsp().sample_rate(), 88200.0);
        assert_eq!(od.latency_samples(), 0);
    }
}
