//! Chat transport layer for lingo-bot
//!
//! Provides:
//! - Platform-neutral inbound events and outbound replies
//! - The [`EventHandler`] seam the dispatcher implements
//! - Message splitting for platform length limits
//! - A Telegram long-polling runner built on teloxide

pub mod event;
pub mod split;
pub mod telegram;
pub mod traits;

pub use event::{Choice, Command, Delivery, InboundEvent, InboundMessage, Outbound, Sender, VoiceNote};
pub use split::split_message;
pub use telegram::{TelegramConfig, TelegramTransport};
pub use traits::EventHandler;

use thiserror::Error;

/// Transport errors
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Telegram request failed: {0}")]
    Request(String),

    #[error("File download failed: {0}")]
    Download(String),
}

impl From<teloxide::RequestError> for TransportError {
    fn from(err: teloxide::RequestError) -> Self {
        TransportError::Request(err.to_string())
    }
}

impl From<teloxide::DownloadError> for TransportError {
    fn from(err: teloxide::DownloadError) -> Self {
        TransportError::Download(err.to_string())
    }
}
