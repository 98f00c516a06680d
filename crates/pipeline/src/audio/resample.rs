//! Sample rate conversion using Rubato

use lingo_bot_core::AudioError;
use rubato::{FftFixedIn, Resampler as RubatoResampler};

const CHUNK_SIZE: usize = 1024;

/// Inputs shorter than this use linear interpolation
const MIN_FFT_INPUT: usize = 64;

/// Mono resampler
#[derive(Debug, Clone, Copy)]
pub struct Resampler {
    from_rate: u32,
    to_rate: u32,
}

impl Resampler {
    pub fn new(from_rate: u32, to_rate: u32) -> Self {
        Self { from_rate, to_rate }
    }

    /// Number of output samples for `input_len` input samples
    pub fn output_len(&self, input_len: usize) -> usize {
        (input_len as u64 * self.to_rate as u64 / self.from_rate.max(1) as u64) as usize
    }

    /// Resample a whole clip
    ///
    /// The clip is fed through an FFT resampler in fixed chunks, the tail is
    /// flushed and the filter delay trimmed so the output lines up with the
    /// input in time.
    pub fn resample(&self, input: &[f32]) -> Result<Vec<f32>, AudioError> {
        if self.from_rate == 0 || self.to_rate == 0 {
            return Err(AudioError::Resampling(format!(
                "Invalid rates: {} -> {}",
                self.from_rate, self.to_rate
            )));
        }

        if self.from_rate == self.to_rate || input.is_empty() {
            return Ok(input.to_vec());
        }

        if input.len() < MIN_FFT_INPUT {
            return Ok(self.resample_linear(input));
        }

        let mut resampler = FftFixedIn::<f32>::new(
            self.from_rate as usize,
            self.to_rate as usize,
            CHUNK_SIZE,
            2, // sub_chunks
            1, // channels
        )
        .map_err(|e| AudioError::Resampling(e.to_string()))?;

        let expected = self.output_len(input.len());
        let delay = resampler.output_delay();
        let mut output = Vec::with_capacity(expected + delay + CHUNK_SIZE);

        let mut pos = 0;
        while input.len() - pos >= resampler.input_frames_next() {
            let frames = resampler.input_frames_next();
            let chunk = resampler
                .process(&[&input[pos..pos + frames]], None)
                .map_err(|e| AudioError::Resampling(e.to_string()))?;
            output.extend_from_slice(&chunk[0]);
            pos += frames;
        }

        if pos < input.len() {
            let chunk = resampler
                .process_partial(Some(&[&input[pos..]]), None)
                .map_err(|e| AudioError::Resampling(e.to_string()))?;
            output.extend_from_slice(&chunk[0]);
        }

        // Flush whatever the filter still holds
        while output.len() < expected + delay {
            let chunk = resampler
                .process_partial(None::<&[&[f32]]>, None)
                .map_err(|e| AudioError::Resampling(e.to_string()))?;
            if chunk[0].is_empty() {
                break;
            }
            output.extend_from_slice(&chunk[0]);
        }

        let end = (delay + expected).min(output.len());
        Ok(output.get(delay..end).map(<[f32]>::to_vec).unwrap_or_default())
    }

    /// Linear interpolation fallback
    fn resample_linear(&self, input: &[f32]) -> Vec<f32> {
        let ratio = self.to_rate as f64 / self.from_rate as f64;
        let output_len = self.output_len(input.len()).max(1);
        let mut output = Vec::with_capacity(output_len);

        for i in 0..output_len {
            let src_idx = i as f64 / ratio;
            let idx_floor = (src_idx.floor() as usize).min(input.len() - 1);
            let idx_ceil = (idx_floor + 1).min(input.len() - 1);
            let frac = (src_idx - idx_floor as f64) as f32;

            output.push(input[idx_floor] * (1.0 - frac) + input[idx_ceil] * frac);
        }

        output
    }
}

/// Average interleaved frames down to one channel
pub(crate) fn downmix(interleaved: &[f32], channels: usize) -> Vec<f32> {
    if channels <= 1 {
        return interleaved.to_vec();
    }
    interleaved
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f32>() / channels as f32)
        .collect()
}
