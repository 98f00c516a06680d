//! Platform-neutral inbound events and outbound replies

use lingo_bot_core::UserId;

/// Who sent an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sender {
    pub user_id: UserId,
    /// Client UI language as reported by the platform (`es-MX`, `en`, ...)
    pub language_code: Option<String>,
}

impl Sender {
    pub fn new(user_id: impl Into<UserId>, language_code: Option<&str>) -> Self {
        Self {
            user_id: user_id.into(),
            language_code: language_code.map(str::to_string),
        }
    }
}

/// Bot commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    About,
    Lang,
    /// Any other `/word`, lowercased, without the leading slash
    Unknown(String),
}

impl Command {
    /// Parse the first word of a message as a command
    ///
    /// Accepts `/start`, `/START` and `/start@my_bot extra words`; returns
    /// `None` when the text does not start with a slash.
    pub fn parse(text: &str) -> Option<Command> {
        let first = text.split_whitespace().next()?;
        let name = first.strip_prefix('/')?;
        let name = name.split('@').next().unwrap_or_default().to_ascii_lowercase();

        Some(match name.as_str() {
            "start" => Command::Start,
            "help" => Command::Help,
            "about" => Command::About,
            "lang" => Command::Lang,
            _ => Command::Unknown(name),
        })
    }
}

/// Downloaded voice note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceNote {
    /// Container bytes as uploaded; empty when the download was skipped or failed
    pub audio: Vec<u8>,
    pub mime_type: Option<String>,
}

/// Everything the bot reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundMessage {
    Command(Command),
    Text(String),
    Voice(VoiceNote),
    /// Opaque data attached to an inline button
    Callback(String),
}

impl InboundMessage {
    /// Classify a text message as a command or free text
    pub fn from_text(text: &str) -> Self {
        match Command::parse(text) {
            Some(command) => InboundMessage::Command(command),
            None => InboundMessage::Text(text.to_string()),
        }
    }

    /// Short name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            InboundMessage::Command(_) => "command",
            InboundMessage::Text(_) => "text",
            InboundMessage::Voice(_) => "voice",
            InboundMessage::Callback(_) => "callback",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundEvent {
    pub chat_id: i64,
    pub sender: Sender,
    pub message: InboundMessage,
}

impl InboundEvent {
    pub fn new(chat_id: i64, sender: Sender, message: InboundMessage) -> Self {
        Self {
            chat_id,
            sender,
            message,
        }
    }
}

/// Inline button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    /// Delivered back as [`InboundMessage::Callback`]
    pub data: String,
}

impl Choice {
    pub fn new(label: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            data: data.into(),
        }
    }
}

/// Where a reply goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delivery {
    /// A new message in the chat
    #[default]
    NewMessage,
    /// Edit the message whose button produced the callback
    ReplaceOrigin,
}

/// One reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outbound {
    pub text: String,
    pub choices: Vec<Choice>,
    pub delivery: Delivery,
}

impl Outbound {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            choices: Vec::new(),
            delivery: Delivery::NewMessage,
        }
    }

    pub fn with_choices(mut self, choices: Vec<Choice>) -> Self {
        self.choices = choices;
        self
    }

    pub fn replacing_origin(mut self) -> Self {
        self.delivery = Delivery::ReplaceOrigin;
        self
    }
}
