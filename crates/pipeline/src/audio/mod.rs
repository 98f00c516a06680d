//! Voice note decoding
//!
//! Telegram voice notes are Ogg/Opus; uploads forwarded as audio files may
//! be anything symphonia can probe (WAV, FLAC, Vorbis, ...). Every input
//! ends up as mono f32 at the ASR sample rate.

mod opus;
mod resample;
mod wav;

pub use resample::Resampler;
pub use wav::encode_wav;

use lingo_bot_core::{AudioDecoder, AudioError, PcmAudio};
use std::io::{Cursor, ErrorKind};
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL, CODEC_TYPE_OPUS};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::{FormatOptions, FormatReader, Track};
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use opus::{OpusStream, OPUS_SAMPLE_RATE};
use resample::downmix;

/// Decodes uploaded audio into mono PCM at a fixed sample rate
#[derive(Debug, Clone)]
pub struct SymphoniaDecoder {
    target_sample_rate: u32,
    max_bytes: usize,
}

impl SymphoniaDecoder {
    pub fn new(target_sample_rate: u32, max_bytes: usize) -> Self {
        Self {
            target_sample_rate,
            max_bytes,
        }
    }

    fn hint(mime_type: Option<&str>) -> Hint {
        let mut hint = Hint::new();
        if let Some(mime) = mime_type {
            hint.mime_type(mime);
            if mime.contains("ogg") || mime.contains("opus") {
                hint.with_extension("ogg");
            } else if mime.contains("wav") {
                hint.with_extension("wav");
            }
        }
        hint
    }

    /// Interleaved samples, channel count and source rate
    fn decode_interleaved(
        &self,
        bytes: &[u8],
        mime_type: Option<&str>,
    ) -> Result<(Vec<f32>, usize, u32), AudioError> {
        let source = Cursor::new(bytes.to_vec());
        let mss = MediaSourceStream::new(Box::new(source), Default::default());

        let probed = symphonia::default::get_probe()
            .format(
                &Self::hint(mime_type),
                mss,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(|e| AudioError::UnsupportedFormat(e.to_string()))?;
        let mut format = probed.format;

        let track = format
            .tracks()
            .iter()
            .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
            .cloned()
            .ok_or_else(|| AudioError::UnsupportedFormat("No audio track found".to_string()))?;

        if track.codec_params.codec == CODEC_TYPE_OPUS {
            decode_opus(format.as_mut(), &track)
        } else {
            decode_generic(format.as_mut(), &track)
        }
    }
}

impl AudioDecoder for SymphoniaDecoder {
    fn decode(&self, bytes: &[u8], mime_type: Option<&str>) -> Result<PcmAudio, AudioError> {
        if bytes.is_empty() {
            return Err(AudioError::Empty);
        }
        if bytes.len() > self.max_bytes {
            return Err(AudioError::TooLarge {
                size: bytes.len(),
                limit: self.max_bytes,
            });
        }

        let (interleaved, channels, source_rate) = self.decode_interleaved(bytes, mime_type)?;
        let mono = downmix(&interleaved, channels);
        if mono.is_empty() {
            return Err(AudioError::Decode("No audio samples decoded".to_string()));
        }

        let samples = Resampler::new(source_rate, self.target_sample_rate).resample(&mono)?;

        tracing::debug!(
            bytes = bytes.len(),
            channels,
            source_rate,
            samples = samples.len(),
            "Decoded voice note"
        );

        Ok(PcmAudio::new(samples, self.target_sample_rate))
    }
}

/// Next packet of `track_id`, `None` at end of stream
fn next_packet(
    format: &mut dyn FormatReader,
    track_id: u32,
) -> Result<Option<symphonia::core::formats::Packet>, AudioError> {
    loop {
        match format.next_packet() {
            Ok(packet) if packet.track_id() == track_id => return Ok(Some(packet)),
            Ok(_) => continue,
            Err(SymphoniaError::IoError(e)) if e.kind() == ErrorKind::UnexpectedEof => {
                return Ok(None)
            }
            Err(SymphoniaError::ResetRequired) => return Ok(None),
            Err(e) => return Err(AudioError::Decode(e.to_string())),
        }
    }
}

fn decode_generic(
    format: &mut dyn FormatReader,
    track: &Track,
) -> Result<(Vec<f32>, usize, u32), AudioError> {
    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| AudioError::UnsupportedFormat(format!("Unsupported codec: {}", e)))?;

    let mut sample_rate = track.codec_params.sample_rate.unwrap_or(0);
    let mut channels = track.codec_params.channels.map(|c| c.count()).unwrap_or(1);
    let mut samples = Vec::new();

    while let Some(packet) = next_packet(format, track.id)? {
        let decoded = match decoder.decode(&packet) {
            Ok(decoded) => decoded,
            // A corrupt packet is dropped, the rest of the stream still counts
            Err(SymphoniaError::DecodeError(e)) => {
                tracing::debug!(error = %e, "Skipping undecodable packet");
                continue;
            }
            Err(e) => return Err(AudioError::Decode(e.to_string())),
        };

        let spec = *decoded.spec();
        sample_rate = spec.rate;
        channels = spec.channels.count();

        let mut buffer = SampleBuffer::<f32>::new(decoded.capacity() as u64, spec);
        buffer.copy_interleaved_ref(decoded);
        samples.extend_from_slice(buffer.samples());
    }

    if sample_rate == 0 {
        return Err(AudioError::Decode("Unknown sample rate".to_string()));
    }

    Ok((samples, channels.max(1), sample_rate))
}

fn decode_opus(
    format: &mut dyn FormatReader,
    track: &Track,
) -> Result<(Vec<f32>, usize, u32), AudioError> {
    let channels = track.codec_params.channels.map(|c| c.count()).unwrap_or(1);
    let mut stream = OpusStream::new(channels)?;
    let mut samples = Vec::new();

    while let Some(packet) = next_packet(format, track.id)? {
        stream.decode_packet(&packet.data, &mut samples)?;
    }

    // Pre-skip: encoder priming samples at the start of the stream
    let pre_skip = track.codec_params.delay.unwrap_or(0) as usize * stream.channels();
    let samples = samples.get(pre_skip..).map(<[f32]>::to_vec).unwrap_or_default();

    Ok((samples, stream.channels(), OPUS_SAMPLE_RATE))
}
