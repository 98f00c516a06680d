//! WAV encoding for the ASR request body

use lingo_bot_core::{AudioError, PcmAudio};
use std::io::Cursor;

/// Encode mono PCM as 16-bit WAV
pub fn encode_wav(audio: &PcmAudio) -> Result<Vec<u8>, AudioError> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: audio.sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::with_capacity(44 + audio.samples.len() * 2));
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec)
            .map_err(|e| AudioError::Decode(format!("WAV header: {}", e)))?;
        for &sample in &audio.samples {
            let value = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
            writer
                .write_sample(value)
                .map_err(|e| AudioError::Decode(format!("WAV write: {}", e)))?;
        }
        writer
            .finalize()
            .map_err(|e| AudioError::Decode(format!("WAV finalize: {}", e)))?;
    }

    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wav_header_and_length() {
        let audio = PcmAudio::new(vec![0.0, 0.5, -0.5, 1.5], 16000);
        let bytes = encode_wav(&audio).unwrap();
        assert_eq!(&bytes[..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");

        let reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
        assert_eq!(reader.spec().sample_rate, 16000);
        assert_eq!(reader.spec().channels, 1);
        let samples: Vec<i16> = reader.into_samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(samples, vec![0, 16383, -16383, i16::MAX]);
    }
}
