//! HTTP adapters against in-process fake model services

use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use lingo_bot_config::{AsrConfig, EmotionConfig, TranslationConfig};
use lingo_bot_core::{
    EmotionClassifier, EmotionScore, Language, ModelError, PcmAudio, SpeechToText, Stage,
    Translator,
};
use lingo_bot_pipeline::{GoEmotionsHttpClassifier, MarianHttpTranslator, WhisperHttpStt};
use serde_json::{json, Value};
use std::time::Duration;

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn one_second_tone() -> PcmAudio {
    let samples = (0..16000)
        .map(|i| (i as f32 * 0.05).sin() * 0.3)
        .collect();
    PcmAudio::new(samples, 16000)
}

#[tokio::test]
async fn test_asr_success() {
    let router = Router::new().route(
        "/asr",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["task"], "transcribe");
            assert_eq!(body["language"], Value::Null);
            assert_eq!(body["model"], "small");
            assert!(body["audio_b64"].as_str().unwrap().len() > 100);
            Json(json!({
                "text": "  hola, ¿cómo estás?  ",
                "language": "ES",
                "language_probability": 0.97
            }))
        }),
    );
    let endpoint = spawn(router).await;

    let stt = WhisperHttpStt::new(AsrConfig {
        endpoint,
        ..Default::default()
    })
    .unwrap();

    let transcription = stt.transcribe(&one_second_tone()).await.unwrap();
    assert_eq!(transcription.text, "hola, ¿cómo estás?");
    assert_eq!(transcription.language, "es");
    assert_eq!(transcription.supported_language(), Some(Language::Spanish));
    assert_eq!(transcription.probability_percent(), 97);
}

#[tokio::test]
async fn test_asr_server_error() {
    let router = Router::new().route(
        "/asr",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "model crashed") }),
    );
    let endpoint = spawn(router).await;

    let stt = WhisperHttpStt::new(AsrConfig {
        endpoint,
        ..Default::default()
    })
    .unwrap();

    let err = stt.transcribe(&one_second_tone()).await.unwrap_err();
    match err {
        ModelError::Inference(msg) => assert!(msg.contains("model crashed")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_asr_timeout() {
    let router = Router::new().route(
        "/asr",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(3)).await;
            Json(json!({"text": "late"}))
        }),
    );
    let endpoint = spawn(router).await;

    let stt = WhisperHttpStt::new(AsrConfig {
        endpoint,
        timeout_ms: 200,
        ..Default::default()
    })
    .unwrap();

    let err = stt.transcribe(&one_second_tone()).await.unwrap_err();
    assert_eq!(
        err,
        ModelError::Timeout {
            stage: Stage::Transcribe,
            ms: 200
        }
    );
}

#[tokio::test]
async fn test_translation_success() {
    let router = Router::new().route(
        "/translate",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["model"], "Helsinki-NLP/opus-mt-es-en");
            assert_eq!(body["src_lang"], "es");
            assert_eq!(body["tgt_lang"], "en");
            assert_eq!(body["max_new_tokens"], 512);
            Json(json!({"ok": true, "text": "I am very happy ", "error": null}))
        }),
    );
    let endpoint = spawn(router).await;

    let translator = MarianHttpTranslator::new(TranslationConfig {
        endpoint,
        ..Default::default()
    })
    .unwrap();

    let out = translator
        .translate("Estoy muy feliz", Language::Spanish, Language::English)
        .await
        .unwrap();
    assert_eq!(out, "I am very happy");
}

#[tokio::test]
async fn test_translation_error_body() {
    let router = Router::new().route(
        "/translate",
        post(|| async { Json(json!({"ok": false, "text": null, "error": "CUDA out of memory"})) }),
    );
    let endpoint = spawn(router).await;

    let translator = MarianHttpTranslator::new(TranslationConfig {
        endpoint,
        ..Default::default()
    })
    .unwrap();

    let err = translator
        .translate("hello", Language::English, Language::Spanish)
        .await
        .unwrap_err();
    assert_eq!(err, ModelError::Inference("CUDA out of memory".to_string()));
}

#[tokio::test]
async fn test_translation_unreachable() {
    let translator = MarianHttpTranslator::new(TranslationConfig {
        endpoint: "http://127.0.0.1:1".to_string(),
        timeout_ms: 2000,
        ..Default::default()
    })
    .unwrap();

    let err = translator
        .translate("hello", Language::English, Language::Spanish)
        .await
        .unwrap_err();
    assert!(matches!(err, ModelError::Unavailable(_)), "{err:?}");
    assert!(translator.health_check().await.is_err());
}

#[tokio::test]
async fn test_emotion_success() {
    let router = Router::new().route(
        "/classify",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["function_to_apply"], "sigmoid");
            assert_eq!(body["model"], "SamLowe/roberta-base-go_emotions");
            Json(json!({"scores": [
                {"label": "Joy", "score": 0.91},
                {"label": "neutral", "score": 0.02}
            ]}))
        }),
    );
    let endpoint = spawn(router).await;

    let classifier = GoEmotionsHttpClassifier::new(EmotionConfig {
        endpoint,
        ..Default::default()
    })
    .unwrap();

    let scores = classifier.classify("I am so happy").await.unwrap();
    assert_eq!(
        scores,
        vec![
            EmotionScore::new("joy", 0.91),
            EmotionScore::new("neutral", 0.02)
        ]
    );
}

#[tokio::test]
async fn test_emotion_malformed_response() {
    let router = Router::new().route("/classify", post(|| async { "not json" }));
    let endpoint = spawn(router).await;

    let classifier = GoEmotionsHttpClassifier::new(EmotionConfig {
        endpoint,
        ..Default::default()
    })
    .unwrap();

    let err = classifier.classify("hello").await.unwrap_err();
    assert!(matches!(err, ModelError::InvalidResponse(_)), "{err:?}");
}

#[tokio::test]
async fn test_health_checks() {
    let router = Router::new().route("/health", get(|| async { Json(json!({"status": "ok"})) }));
    let endpoint = spawn(router).await;

    let stt = WhisperHttpStt::new(AsrConfig {
        endpoint: endpoint.clone(),
        ..Default::default()
    })
    .unwrap();
    assert!(stt.health_check().await.is_ok());

    let classifier = GoEmotionsHttpClassifier::new(EmotionConfig {
        endpoint,
        ..Default::default()
    })
    .unwrap();
    assert!(classifier.health_check().await.is_ok());
}
