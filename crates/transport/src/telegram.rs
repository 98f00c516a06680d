//! Telegram long-polling runner
//!
//! Normalizes teloxide updates into [`InboundEvent`]s, hands them to the
//! [`EventHandler`] and sends back whatever it returns. teloxide's dispatcher
//! processes updates from one chat sequentially, which keeps replies to a
//! user in order while different chats run concurrently.

use lingo_bot_config::BotConfig;
use std::sync::Arc;
use teloxide::net::Download;
use teloxide::prelude::*;
use teloxide::types::{
    BotCommand, CallbackQuery, ChatId, InlineKeyboardButton, InlineKeyboardMarkup, Message,
    MessageId, User, UserId, Voice,
};

use crate::{
    split_message, Delivery, EventHandler, InboundEvent, InboundMessage, Outbound, Sender,
    TransportError, VoiceNote,
};

/// Commands advertised in the client menu: (command, English, Spanish)
const BOT_COMMANDS: [(&str, &str, &str); 4] = [
    ("start", "Welcome", "Bienvenida"),
    ("help", "Show help", "Mostrar ayuda"),
    ("about", "About this bot", "Sobre este bot"),
    ("lang", "Choose bot language", "Elegir idioma del bot"),
];

/// Telegram connection settings
#[derive(Clone)]
pub struct TelegramConfig {
    pub token: String,
    /// Longest text sent in one message
    pub max_message_chars: usize,
    /// Voice notes above this size are not downloaded
    pub max_voice_bytes: usize,
}

impl TelegramConfig {
    pub fn from_bot_config(config: &BotConfig) -> Self {
        Self {
            token: config.token.clone(),
            max_message_chars: config.max_message_chars,
            max_voice_bytes: config.max_voice_bytes,
        }
    }
}

impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("token", &"<redacted>")
            .field("max_message_chars", &self.max_message_chars)
            .field("max_voice_bytes", &self.max_voice_bytes)
            .finish()
    }
}

/// State shared by the update endpoints
struct Shared {
    handler: Arc<dyn EventHandler>,
    config: TelegramConfig,
}

/// Telegram transport
pub struct TelegramTransport {
    bot: Bot,
    config: TelegramConfig,
}

impl TelegramTransport {
    pub fn new(config: TelegramConfig) -> Self {
        Self {
            bot: Bot::new(&config.token),
            config,
        }
    }

    /// Register the command menu in both UI languages
    pub async fn register_commands(&self) -> Result<(), TransportError> {
        let english: Vec<BotCommand> = BOT_COMMANDS
            .iter()
            .map(|(command, en, _)| BotCommand::new(*command, *en))
            .collect();
        let spanish: Vec<BotCommand> = BOT_COMMANDS
            .iter()
            .map(|(command, _, es)| BotCommand::new(*command, *es))
            .collect();

        self.bot.set_my_commands(english).await?;
        self.bot.set_my_commands(spanish).language_code("es").await?;
        Ok(())
    }

    /// Poll for updates until Ctrl-C
    pub async fn run(self, handler: Arc<dyn EventHandler>) {
        if let Err(e) = self.register_commands().await {
            tracing::warn!(error = %e, "Failed to register bot commands");
        }

        let shared = Arc::new(Shared {
            handler,
            config: self.config.clone(),
        });

        let schema = dptree::entry()
            .branch(Update::filter_message().endpoint(on_message))
            .branch(Update::filter_callback_query().endpoint(on_callback));

        tracing::info!("Telegram polling started");

        Dispatcher::builder(self.bot, schema)
            .dependencies(dptree::deps![shared])
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        tracing::info!("Telegram polling stopped");
    }
}

fn sender_of(user: &User) -> Sender {
    Sender::new(user.id.0, user.language_code.as_deref())
}

async fn on_message(bot: Bot, msg: Message, shared: Arc<Shared>) -> ResponseResult<()> {
    let Some(user) = msg.from.as_ref() else {
        return Ok(());
    };

    let message = if let Some(text) = msg.text() {
        InboundMessage::from_text(text)
    } else if let Some(voice) = msg.voice() {
        let audio = download_voice(&bot, voice, shared.config.max_voice_bytes).await;
        InboundMessage::Voice(VoiceNote {
            audio,
            mime_type: voice.mime_type.as_ref().map(|m| m.to_string()),
        })
    } else {
        tracing::debug!(chat_id = msg.chat.id.0, "Ignoring unsupported message kind");
        return Ok(());
    };

    let event = InboundEvent::new(msg.chat.id.0, sender_of(user), message);
    let replies = shared.handler.handle(event).await;

    for reply in replies {
        if let Err(e) = deliver(&bot, msg.chat.id, None, &reply, &shared.config).await {
            tracing::warn!(chat_id = msg.chat.id.0, error = %e, "Failed to send reply");
        }
    }
    Ok(())
}

async fn on_callback(bot: Bot, q: CallbackQuery, shared: Arc<Shared>) -> ResponseResult<()> {
    // Always answer so the client stops its loading indicator
    if let Err(e) = bot.answer_callback_query(q.id.clone()).await {
        tracing::warn!(error = %e, "Failed to answer callback query");
    }

    let origin = q.message.as_ref().map(|m| (m.chat().id, m.id()));
    if origin.is_none() {
        tracing::warn!(
            user_id = q.from.id.0,
            "Callback without a reachable message, replying in private chat"
        );
    }
    let (chat_id, message_id) = reply_target(origin, q.from.id);

    let data = q.data.clone().unwrap_or_default();
    let event = InboundEvent::new(chat_id.0, sender_of(&q.from), InboundMessage::Callback(data));
    let replies = shared.handler.handle(event).await;

    for reply in replies {
        if let Err(e) = deliver(&bot, chat_id, message_id, &reply, &shared.config).await {
            tracing::warn!(chat_id = chat_id.0, error = %e, "Failed to send reply");
        }
    }
    Ok(())
}

/// Chat and message a callback reply goes to
///
/// Without the originating message (too old, or sent in inline mode) the
/// reply goes to the user's private chat as a new message.
fn reply_target(
    origin: Option<(ChatId, MessageId)>,
    user_id: UserId,
) -> (ChatId, Option<MessageId>) {
    match origin {
        Some((chat_id, message_id)) => (chat_id, Some(message_id)),
        None => (ChatId(user_id.0 as i64), None),
    }
}

/// Fetch the voice note into memory; empty on any failure
async fn download_voice(bot: &Bot, voice: &Voice, max_bytes: usize) -> Vec<u8> {
    let size = voice.file.size as usize;
    if size > max_bytes {
        tracing::warn!(size, limit = max_bytes, "Voice note too large, not downloading");
        return Vec::new();
    }

    match fetch_file(bot, voice).await {
        Ok(bytes) => {
            tracing::debug!(bytes = bytes.len(), "Voice note downloaded");
            bytes
        }
        Err(e) => {
            tracing::warn!(error = %e, "Voice note download failed");
            Vec::new()
        }
    }
}

async fn fetch_file(bot: &Bot, voice: &Voice) -> Result<Vec<u8>, TransportError> {
    let file = bot.get_file(voice.file.id.clone()).await?;
    let mut buffer = Vec::with_capacity(file.size as usize);
    bot.download_file(&file.path, &mut buffer).await?;
    Ok(buffer)
}

fn keyboard(reply: &Outbound) -> Option<InlineKeyboardMarkup> {
    if reply.choices.is_empty() {
        return None;
    }
    let row: Vec<InlineKeyboardButton> = reply
        .choices
        .iter()
        .map(|c| InlineKeyboardButton::callback(c.label.clone(), c.data.clone()))
        .collect();
    Some(InlineKeyboardMarkup::new(vec![row]))
}

/// Send one reply, split to the length limit; the keyboard rides on the last part
async fn deliver(
    bot: &Bot,
    chat_id: ChatId,
    origin: Option<MessageId>,
    reply: &Outbound,
    config: &TelegramConfig,
) -> Result<(), TransportError> {
    let parts = split_message(&reply.text, config.max_message_chars);
    let last = parts.len().saturating_sub(1);

    for (i, part) in parts.into_iter().enumerate() {
        let markup = if i == last { keyboard(reply) } else { None };

        match (i, reply.delivery, origin) {
            (0, Delivery::ReplaceOrigin, Some(message_id)) => {
                let request = bot.edit_message_text(chat_id, message_id, part);
                match markup {
                    Some(markup) => request.reply_markup(markup).await?,
                    None => request.await?,
                };
            }
            _ => {
                let request = bot.send_message(chat_id, part);
                match markup {
                    Some(markup) => request.reply_markup(markup).await?,
                    None => request.await?,
                };
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Choice;

    #[test]
    fn test_keyboard_single_row() {
        let reply = Outbound::text("pick").with_choices(vec![
            Choice::new("🇪🇸 Español", "setlang:es"),
            Choice::new("🇬🇧 English", "setlang:en"),
        ]);
        let markup = keyboard(&reply).unwrap();
        assert_eq!(markup.inline_keyboard.len(), 1);
        assert_eq!(markup.inline_keyboard[0].len(), 2);
        assert!(keyboard(&Outbound::text("plain")).is_none());
    }

    #[test]
    fn test_callback_reply_target() {
        let origin = Some((ChatId(-100), MessageId(7)));
        assert_eq!(
            reply_target(origin, UserId(42)),
            (ChatId(-100), Some(MessageId(7)))
        );

        // No origin message: new message in the private chat
        assert_eq!(reply_target(None, UserId(42)), (ChatId(42), None));
    }

    #[test]
    fn test_config_debug_redacts_token() {
        let config = TelegramConfig {
            token: "123:secret".to_string(),
            max_message_chars: 4096,
            max_voice_bytes: 1024,
        };
        assert!(!format!("{:?}", config).contains("secret"));
    }

    #[test]
    fn test_command_menu_matches_parser() {
        for (command, _, _) in BOT_COMMANDS {
            let parsed = crate::Command::parse(&format!("/{}", command)).unwrap();
            assert!(!matches!(parsed, crate::Command::Unknown(_)));
        }
    }
}
