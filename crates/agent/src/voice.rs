//! Voice flow: decode, transcribe, translate, classify
//!
//! Each step that fails keeps whatever earlier steps produced. Decode and
//! transcription failures end the flow since nothing downstream has input.

use lingo_bot_core::{flag_for_code, AudioError, Language, PcmAudio, Stage};
use lingo_bot_text_processing::MessageKey;
use lingo_bot_transport::{Outbound, VoiceNote};

use crate::adapters::bounded;
use crate::reply::Reply;
use crate::BotDispatcher;

impl BotDispatcher {
    pub(crate) async fn on_voice(&self, note: VoiceNote, ui: Language) -> Outbound {
        let audio = match self.decode(note).await {
            Ok(audio) => audio,
            Err(e) => {
                tracing::warn!(error = %e, "Voice note decode failed");
                return Outbound::text(self.text(ui, MessageKey::AudioError));
            }
        };

        let stt = &self.adapters.stt;
        let transcription = match bounded(
            Stage::Transcribe,
            self.config.transcribe_timeout,
            stt.transcribe(&audio),
        )
        .await
        {
            Ok(t) if !t.is_empty() => t,
            Ok(_) => {
                tracing::info!(duration_ms = audio.duration_ms(), "Empty transcription");
                return Outbound::text(self.text(ui, MessageKey::NoTranscription));
            }
            Err(e) => {
                tracing::warn!(stt = stt.name(), error = %e, "Transcription failed");
                return Outbound::text(self.text(ui, MessageKey::NoTranscription));
            }
        };

        tracing::debug!(
            language = %transcription.language,
            probability = transcription.probability,
            chars = transcription.text.len(),
            "Transcribed voice note"
        );

        let mut reply = Reply::new();
        let conf = transcription.probability_percent().to_string();
        reply.section(
            self.render(
                ui,
                MessageKey::TranscriptionHeader,
                &[
                    ("flag", flag_for_code(&transcription.language)),
                    ("lang", transcription.language.as_str()),
                    ("conf", conf.as_str()),
                ],
            ),
            &transcription.text,
        );

        let Some(source) = transcription.supported_language() else {
            reply.notice(self.text(ui, MessageKey::TranslationSkipped));
            let emotion = self.emotion_section(ui, None, None).await;
            if let Some(section) = emotion {
                reply.notice(section);
            }
            return reply.into_outbound();
        };

        let translation = self
            .translate_into(&mut reply, &transcription.text, source, ui)
            .await;

        if let Some(section) = self
            .emotion_section(
                ui,
                Some((transcription.text.as_str(), source)),
                translation.as_deref().map(|t| (t, source.other())),
            )
            .await
        {
            reply.notice(section);
        }

        reply.into_outbound()
    }

    /// Decode off the async runtime, bounded by the decode timeout
    async fn decode(&self, note: VoiceNote) -> Result<PcmAudio, AudioError> {
        if note.audio.is_empty() {
            return Err(AudioError::Empty);
        }

        let decoder = self.adapters.decoder.clone();
        let limit = self.config.decode_timeout;
        let VoiceNote { audio, mime_type } = note;

        let task =
            tokio::task::spawn_blocking(move || decoder.decode(&audio, mime_type.as_deref()));

        match tokio::time::timeout(limit, task).await {
            Ok(Ok(result)) => result,
            Ok(Err(join)) => Err(AudioError::Decode(join.to_string())),
            Err(_) => Err(AudioError::Timeout(limit.as_millis() as u64)),
        }
    }
}
