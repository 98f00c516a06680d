//! Machine translation over the MarianMT sidecar

use async_trait::async_trait;
use lingo_bot_config::TranslationConfig;
use lingo_bot_core::{Language, ModelError, Stage, Translator};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::http;

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    model: &'a str,
    src_lang: &'a str,
    tgt_lang: &'a str,
    text: &'a str,
    max_new_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    ok: bool,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// One MarianMT model per direction, selected by language pair
pub struct MarianHttpTranslator {
    client: Client,
    endpoint: String,
    config: TranslationConfig,
}

impl MarianHttpTranslator {
    pub fn new(config: TranslationConfig) -> Result<Self, ModelError> {
        Ok(Self {
            client: http::build_client(config.timeout_ms)?,
            endpoint: http::normalize_endpoint(&config.endpoint),
            config,
        })
    }

    /// Model serving `from -> to`
    pub fn model_for(&self, from: Language, to: Language) -> Option<&str> {
        match (from, to) {
            (Language::English, Language::Spanish) => Some(self.config.en_es_model.as_str()),
            (Language::Spanish, Language::English) => Some(self.config.es_en_model.as_str()),
            _ => None,
        }
    }

    pub async fn health_check(&self) -> Result<(), ModelError> {
        http::check_health(&self.client, &self.endpoint).await
    }
}

#[async_trait]
impl Translator for MarianHttpTranslator {
    async fn translate(&self, text: &str, from: Language, to: Language) -> Result<String, ModelError> {
        let model = self.model_for(from, to).ok_or_else(|| ModelError::UnsupportedPair {
            from: from.to_string(),
            to: to.to_string(),
        })?;

        if text.trim().is_empty() {
            return Ok(String::new());
        }

        let request = TranslateRequest {
            model,
            src_lang: from.code(),
            tgt_lang: to.code(),
            text,
            max_new_tokens: self.config.max_new_tokens,
        };

        let url = format!("{}/translate", self.endpoint);
        let response: TranslateResponse = http::post_json(
            &self.client,
            &url,
            &request,
            Stage::Translate,
            self.config.timeout_ms,
        )
        .await?;

        if !response.ok {
            return Err(ModelError::Inference(
                response
                    .error
                    .unwrap_or_else(|| "translation service reported failure".to_string()),
            ));
        }

        let translated = response.text.unwrap_or_default().trim().to_string();
        if translated.is_empty() {
            return Err(ModelError::InvalidResponse("empty translation".to_string()));
        }

        tracing::debug!(
            from = %from,
            to = %to,
            chars_in = text.len(),
            chars_out = translated.len(),
            "Translated"
        );

        Ok(translated)
    }

    fn supports_pair(&self, from: Language, to: Language) -> bool {
        self.model_for(from, to).is_some()
    }

    fn name(&self) -> &str {
        "marian-mt"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translator() -> MarianHttpTranslator {
        MarianHttpTranslator::new(TranslationConfig::default()).unwrap()
    }

    #[test]
    fn test_model_selection() {
        let t = translator();
        assert_eq!(
            t.model_for(Language::English, Language::Spanish),
            Some("Helsinki-NLP/opus-mt-en-es")
        );
        assert_eq!(
            t.model_for(Language::Spanish, Language::English),
            Some("Helsinki-NLP/opus-mt-es-en")
        );
        assert_eq!(t.model_for(Language::Spanish, Language::Spanish), None);
        assert!(!t.supports_pair(Language::English, Language::English));
    }

    #[tokio::test]
    async fn test_same_language_rejected_without_request() {
        let err = translator()
            .translate("hello", Language::English, Language::English)
            .await
            .unwrap_err();
        assert!(matches!(err, ModelError::UnsupportedPair { .. }));
    }

    #[tokio::test]
    async fn test_blank_text_short_circuits() {
        let out = translator()
            .translate("   ", Language::English, Language::Spanish)
            .await
            .unwrap();
        assert!(out.is_empty());
    }
}
