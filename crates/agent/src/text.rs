//! Text flow: detect, translate, classify

use lingo_bot_core::{Language, Stage};
use lingo_bot_text_processing::MessageKey;
use lingo_bot_transport::Outbound;

use crate::adapters::bounded;
use crate::reply::Reply;
use crate::BotDispatcher;

impl BotDispatcher {
    pub(crate) async fn on_text(&self, text: &str, ui: Language) -> Outbound {
        let source = match self.adapters.detector.detect(text) {
            Some(language) => language,
            None => {
                tracing::debug!(
                    fallback = %self.config.detection_fallback,
                    "Language detection inconclusive"
                );
                self.config.detection_fallback
            }
        };

        let mut reply = Reply::new();
        reply.section(
            self.render(
                ui,
                MessageKey::YouWrote,
                &[("flag", source.flag()), ("lang", source.code())],
            ),
            text,
        );

        let translation = self.translate_into(&mut reply, text, source, ui).await;

        let target = source.other();
        if let Some(section) = self
            .emotion_section(
                ui,
                Some((text, source)),
                translation.as_deref().map(|t| (t, target)),
            )
            .await
        {
            reply.notice(section);
        }

        reply.into_outbound()
    }

    /// Translate `text` into the other language and add the section, or the
    /// failure notice; returns the translation when there is one.
    pub(crate) async fn translate_into(
        &self,
        reply: &mut Reply,
        text: &str,
        source: Language,
        ui: Language,
    ) -> Option<String> {
        let target = source.other();
        let translator = &self.adapters.translator;

        if !translator.supports_pair(source, target) {
            tracing::warn!(
                translator = translator.name(),
                from = %source,
                to = %target,
                "Translator does not serve this pair"
            );
            reply.notice(self.text(ui, MessageKey::TranslationFailed));
            return None;
        }

        let result = bounded(
            Stage::Translate,
            self.config.translate_timeout,
            translator.translate(text, source, target),
        )
        .await;

        match result {
            Ok(translated) if !translated.trim().is_empty() => {
                reply.section(
                    self.render(
                        ui,
                        MessageKey::TranslationHeader,
                        &[
                            ("flag", target.flag()),
                            ("src", source.code()),
                            ("tgt", target.code()),
                        ],
                    ),
                    &translated,
                );
                Some(translated)
            }
            Ok(_) => {
                tracing::warn!(translator = translator.name(), "Translator returned empty text");
                reply.notice(self.text(ui, MessageKey::TranslationFailed));
                None
            }
            Err(e) => {
                tracing::warn!(
                    translator = translator.name(),
                    from = %source,
                    to = %target,
                    error = %e,
                    "Translation failed"
                );
                reply.notice(self.text(ui, MessageKey::TranslationFailed));
                None
            }
        }
    }
}
