//! Opus packet decoding for Ogg voice notes
//!
//! symphonia demuxes Ogg/Opus but has no Opus codec, so the packets are
//! handed to libopus here.

use audiopus::{coder::Decoder, packet::Packet, Channels, MutSignals, SampleRate};
use lingo_bot_core::AudioError;

/// Opus always decodes at 48 kHz here
pub(crate) const OPUS_SAMPLE_RATE: u32 = 48_000;

/// Largest Opus frame: 120 ms at 48 kHz
const MAX_FRAME_SAMPLES: usize = 5760;

pub(crate) struct OpusStream {
    decoder: Decoder,
    channels: usize,
    buffer: Vec<i16>,
}

impl OpusStream {
    pub(crate) fn new(channels: usize) -> Result<Self, AudioError> {
        let opus_channels = match channels {
            1 => Channels::Mono,
            2 => Channels::Stereo,
            _ => {
                return Err(AudioError::UnsupportedFormat(format!(
                    "Opus with {} channels",
                    channels
                )))
            }
        };

        let decoder = Decoder::new(SampleRate::Hz48000, opus_channels)
            .map_err(|e| AudioError::Decode(format!("Failed to create Opus decoder: {}", e)))?;

        Ok(Self {
            decoder,
            channels,
            buffer: vec![0i16; MAX_FRAME_SAMPLES * channels],
        })
    }

    pub(crate) fn channels(&self) -> usize {
        self.channels
    }

    /// Decode one packet, appending interleaved f32 samples to `out`
    pub(crate) fn decode_packet(&mut self, data: &[u8], out: &mut Vec<f32>) -> Result<(), AudioError> {
        let packet = Packet::try_from(data)
            .map_err(|e| AudioError::Decode(format!("Invalid Opus packet: {}", e)))?;
        let signals = MutSignals::try_from(&mut self.buffer[..])
            .map_err(|e| AudioError::Decode(format!("Signal buffer error: {}", e)))?;

        let per_channel = self
            .decoder
            .decode(Some(packet), signals, false)
            .map_err(|e| AudioError::Decode(format!("Opus decode error: {}", e)))?;

        let decoded = per_channel * self.channels;
        out.extend(self.buffer[..decoded].iter().map(|&s| s as f32 / 32768.0));
        Ok(())
    }
}
