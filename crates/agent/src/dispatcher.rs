//! Composition root for per-event logic

use async_trait::async_trait;
use lingo_bot_core::{EmotionScore, Language, Stage};
use lingo_bot_persistence::SessionStore;
use lingo_bot_text_processing::{format_emotions, Catalog, MessageKey};
use lingo_bot_transport::{EventHandler, InboundEvent, InboundMessage, Outbound, Sender};
use std::sync::Arc;
use std::time::Instant;

use crate::adapters::bounded;
use crate::{Adapters, DispatchConfig};

/// Routes inbound events to the command, text and voice flows
pub struct BotDispatcher {
    pub(crate) adapters: Adapters,
    pub(crate) sessions: Arc<dyn SessionStore>,
    pub(crate) catalog: Catalog,
    pub(crate) config: DispatchConfig,
}

impl BotDispatcher {
    pub fn new(adapters: Adapters, sessions: Arc<dyn SessionStore>, config: DispatchConfig) -> Self {
        Self {
            adapters,
            sessions,
            catalog: Catalog::new(config.default_language),
            config,
        }
    }

    /// Language implied by the client settings, before any explicit choice
    pub(crate) fn inferred_language(&self, sender: &Sender) -> Language {
        sender
            .language_code
            .as_deref()
            .and_then(Language::from_code)
            .unwrap_or(self.config.default_language)
    }

    /// UI language for this event, creating the session on first contact
    async fn ui_language(&self, sender: &Sender) -> Language {
        let inferred = self.inferred_language(sender);
        match self.sessions.get_or_create(sender.user_id, inferred).await {
            Ok(session) => session.language,
            Err(e) => {
                tracing::warn!(
                    user_id = %sender.user_id,
                    error = %e,
                    "Session lookup failed, using inferred language"
                );
                inferred
            }
        }
    }

    pub(crate) fn render(&self, language: Language, key: MessageKey, args: &[(&str, &str)]) -> String {
        self.catalog.render(language, key, args)
    }

    pub(crate) fn text(&self, language: Language, key: MessageKey) -> String {
        self.catalog.text(language, key)
    }

    /// Emotion section for text written in `source`, with `translation` as
    /// the alternative input when the classifier does not read `source`.
    ///
    /// `None` means the section is omitted.
    pub(crate) async fn emotion_section(
        &self,
        ui: Language,
        source: Option<(&str, Language)>,
        translation: Option<(&str, Language)>,
    ) -> Option<String> {
        let classifier = &self.adapters.emotion;
        let input = [source, translation]
            .into_iter()
            .flatten()
            .find(|(text, language)| !text.trim().is_empty() && classifier.supports(*language))
            .map(|(text, _)| text);

        let Some(input) = input else {
            let skipped = self.text(ui, MessageKey::AnalysisSkipped);
            return Some(self.render(
                ui,
                MessageKey::EmotionHeader,
                &[("emo", skipped.as_str())],
            ));
        };

        let scores: Vec<EmotionScore> = match bounded(
            Stage::Classify,
            self.config.classify_timeout,
            classifier.classify(input),
        )
        .await
        {
            Ok(scores) => scores,
            Err(e) => {
                tracing::warn!(
                    classifier = classifier.name(),
                    error = %e,
                    "Emotion classification failed"
                );
                return None;
            }
        };

        let selected = self.config.emotion_policy.select(&scores);
        let display = format_emotions(&selected, ui);
        Some(self.render(ui, MessageKey::EmotionHeader, &[("emo", display.as_str())]))
    }
}

#[async_trait]
impl EventHandler for BotDispatcher {
    async fn handle(&self, event: InboundEvent) -> Vec<Outbound> {
        let started = Instant::now();
        let kind = event.message.kind();
        let user_id = event.sender.user_id;
        let ui = self.ui_language(&event.sender).await;

        let replies = match event.message {
            InboundMessage::Command(command) => vec![self.on_command(command, ui)],
            InboundMessage::Text(text) => vec![self.on_text(&text, ui).await],
            InboundMessage::Voice(note) => vec![self.on_voice(note, ui).await],
            InboundMessage::Callback(data) => vec![self.on_selection(user_id, &data, ui).await],
        };

        tracing::info!(
            user_id = %user_id,
            chat_id = event.chat_id,
            kind,
            ui = %ui,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Handled event"
        );

        replies
    }
}
