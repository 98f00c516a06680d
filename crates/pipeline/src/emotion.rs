//! Emotion classification over the GoEmotions sidecar

use async_trait::async_trait;
use lingo_bot_config::EmotionConfig;
use lingo_bot_core::{EmotionClassifier, EmotionScore, Language, ModelError, Stage};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::http;

#[derive(Debug, Serialize)]
struct ClassifyRequest<'a> {
    model: &'a str,
    text: &'a str,
    /// Multi-label head: independent sigmoid per label
    function_to_apply: &'a str,
}

#[derive(Debug, Deserialize)]
struct ClassifyResponse {
    #[serde(default)]
    scores: Vec<EmotionScore>,
}

/// GoEmotions classifier; the model only understands English
pub struct GoEmotionsHttpClassifier {
    client: Client,
    endpoint: String,
    config: EmotionConfig,
}

impl GoEmotionsHttpClassifier {
    pub fn new(config: EmotionConfig) -> Result<Self, ModelError> {
        Ok(Self {
            client: http::build_client(config.timeout_ms)?,
            endpoint: http::normalize_endpoint(&config.endpoint),
            config,
        })
    }

    pub async fn health_check(&self) -> Result<(), ModelError> {
        http::check_health(&self.client, &self.endpoint).await
    }
}

#[async_trait]
impl EmotionClassifier for GoEmotionsHttpClassifier {
    async fn classify(&self, text: &str) -> Result<Vec<EmotionScore>, ModelError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let request = ClassifyRequest {
            model: &self.config.model,
            text,
            function_to_apply: "sigmoid",
        };

        let url = format!("{}/classify", self.endpoint);
        let response: ClassifyResponse = http::post_json(
            &self.client,
            &url,
            &request,
            Stage::Classify,
            self.config.timeout_ms,
        )
        .await?;

        let scores: Vec<EmotionScore> = response
            .scores
            .into_iter()
            .map(|s| EmotionScore::new(s.label.trim().to_ascii_lowercase(), s.score))
            .collect();

        tracing::debug!(labels = scores.len(), "Emotion scores received");
        Ok(scores)
    }

    fn supports(&self, language: Language) -> bool {
        language == Language::English
    }

    fn name(&self) -> &str {
        "go-emotions"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_only() {
        let classifier = GoEmotionsHttpClassifier::new(EmotionConfig::default()).unwrap();
        assert!(classifier.supports(Language::English));
        assert!(!classifier.supports(Language::Spanish));
    }

    #[test]
    fn test_response_parsing() {
        let response: ClassifyResponse =
            serde_json::from_str(r#"{"scores":[{"label":"joy","score":0.91}]}"#).unwrap();
        assert_eq!(response.scores, vec![EmotionScore::new("joy", 0.91)]);

        let response: ClassifyResponse = serde_json::from_str("{}").unwrap();
        assert!(response.scores.is_empty());
    }
}
