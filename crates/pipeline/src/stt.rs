//! Speech-to-text over the faster-whisper sidecar

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use lingo_bot_config::AsrConfig;
use lingo_bot_core::{ModelError, PcmAudio, SpeechToText, Stage, Transcription};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::audio::encode_wav;
use crate::http;

#[derive(Debug, Serialize)]
struct AsrRequest<'a> {
    /// 16-bit mono WAV, base64
    audio_b64: String,
    /// `None` asks the model to detect the language
    language: Option<&'a str>,
    task: &'a str,
    model: &'a str,
    beam_size: u32,
    vad_filter: bool,
}

#[derive(Debug, Deserialize)]
struct AsrResponse {
    #[serde(default)]
    text: String,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    language_probability: Option<f32>,
}

/// Whisper served over HTTP with automatic language detection
pub struct WhisperHttpStt {
    client: Client,
    endpoint: String,
    config: AsrConfig,
}

impl WhisperHttpStt {
    pub fn new(config: AsrConfig) -> Result<Self, ModelError> {
        Ok(Self {
            client: http::build_client(config.timeout_ms)?,
            endpoint: http::normalize_endpoint(&config.endpoint),
            config,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Check if the ASR service is healthy
    pub async fn health_check(&self) -> Result<(), ModelError> {
        http::check_health(&self.client, &self.endpoint).await
    }
}

#[async_trait]
impl SpeechToText for WhisperHttpStt {
    async fn transcribe(&self, audio: &PcmAudio) -> Result<Transcription, ModelError> {
        let wav = encode_wav(audio).map_err(|e| ModelError::Inference(e.to_string()))?;

        let request = AsrRequest {
            audio_b64: BASE64.encode(&wav),
            language: None,
            task: "transcribe",
            model: &self.config.model,
            beam_size: self.config.beam_size,
            vad_filter: self.config.vad_filter,
        };

        let url = format!("{}/asr", self.endpoint);
        tracing::debug!(
            url = %url,
            duration_ms = audio.duration_ms(),
            wav_bytes = wav.len(),
            "Sending audio to ASR"
        );

        let response: AsrResponse = http::post_json(
            &self.client,
            &url,
            &request,
            Stage::Transcribe,
            self.config.timeout_ms,
        )
        .await?;

        let language = response
            .language
            .map(|l| l.trim().to_ascii_lowercase())
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| "unknown".to_string());

        let transcription = Transcription::new(
            response.text.trim(),
            language,
            response.language_probability.unwrap_or(0.0),
        );

        tracing::debug!(
            language = %transcription.language,
            probability = transcription.probability,
            chars = transcription.text.len(),
            "ASR finished"
        );

        Ok(transcription)
    }

    fn name(&self) -> &str {
        "faster-whisper"
    }
}
