//! Offline block renderer.

use odpedal_core::Effect;

/// Runs a list of effects in series over buffers or whole files.
///
/// Effects are boxed with a `Send` bound so a configured engine can be moved
/// onto a worker thread.
pub struct ProcessingEngine {
    effects: Vec<Box<dyn Effect + Send>>,
    sample_rate: f32,
}

impl ProcessingEngine {
    /// Create an empty engine for `sample_rate`.
    pub fn new(sample_rate: f32) -> Self {
        Self {
            effects: Vec::new(),
            sample_rate,
        }
    }

    /// Get the sample rate.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Set the sample rate for all effects.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        for effect in &mut self.effects {
            effect.set_sample_rate(sample_rate);
        }
    }

    /// Append an effect, preparing it for the engine's sample rate first.
    pub fn add_effect(&mut self, mut effect: Box<dyn Effect + Send>) {
        effect.set_sample_rate(self.sample_rate);
        self.effects.push(effect);
    }

    /// Get the number of effects in the chain.
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Check if the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Get the total latency in samples.
    pub fn latency_samples(&self) -> usize {
        self.effects.iter().map(|e| e.latency_samples()).sum()
    }

    /// Reset all effects.
    pub fn reset(&mut self) {
        for effect in &mut self.effects {
            effect.reset();
        }
    }

    /// Process a block of samples through the chain.
    ///
    /// Only the first `input.len()` samples of `output` are written.
    pub fn process_block(&mut self, input: &[f32], output: &mut [f32]) {
        debug_assert!(output.len() >= input.len());
        let len = input.len().min(output.len());
        let output = &mut output[..len];

        let Some((first, rest)) = self.effects.split_first_mut() else {
            output.copy_from_slice(&input[..len]);
            return;
        };

        first.process_block(&input[..len], output);
        for effect in rest {
            effect.process_block_inplace(output);
        }
    }

    /// Process a block of samples in-place.
    pub fn process_block_inplace(&mut self, buffer: &mut [f32]) {
        for effect in &mut self.effects {
            effect.process_block_inplace(buffer);
        }
    }

    /// Render a whole signal in `block_size` chunks and return the result.
    ///
    /// The final chunk is processed at whatever length remains. A
    /// `block_size` of zero is treated as one.
    pub fn process_file(&mut self, input: &[f32], block_size: usize) -> Vec<f32> {
        self.process_file_with_progress(input, block_size, |_| {})
    }

    /// Like [`process_file`](Self::process_file), calling `on_block` with the
    /// number of frames finished after every block.
    pub fn process_file_with_progress(
        &mut self,
        input: &[f32],
        block_size: usize,
        mut on_block: impl FnMut(usize),
    ) -> Vec<f32> {
        let block_size = block_size.max(1);
        tracing::debug!(
            frames = input.len(),
            block_size,
            effects = self.effects.len(),
            "rendering"
        );

        let mut output = vec![0.0; input.len()];
        let mut done = 0;
        for (in_chunk, out_chunk) in input.chunks(block_size).zip(output.chunks_mut(block_size)) {
            self.process_block(in_chunk, out_chunk);
            done += in_chunk.len();
            on_block(done);
        }
        output
    }
}

impl Default for ProcessingEngine {
    fn default() -> Self {
        Self::new(48000.0)
    }
}
