//! Voice note decoding and model adapters
//!
//! This crate provides the implementations behind the core adapter traits:
//! - **Audio**: container probing (symphonia), Opus voice notes (audiopus),
//!   resampling to the ASR rate (rubato) and WAV encoding (hound)
//! - **STT**: faster-whisper sidecar over HTTP
//! - **Translation**: MarianMT sidecar over HTTP, one model per direction
//! - **Emotion**: GoEmotions sidecar over HTTP
//!
//! The model services run out of process; every client is a thin JSON
//! wrapper with a request timeout and a `/health` probe.

pub mod audio;
pub mod emotion;
pub mod stt;
pub mod translation;

mod http;

pub use audio::{encode_wav, Resampler, SymphoniaDecoder};
pub use emotion::GoEmotionsHttpClassifier;
pub use stt::WhisperHttpStt;
pub use translation::MarianHttpTranslator;
