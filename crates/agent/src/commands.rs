//! Commands and the language selection callback

use lingo_bot_core::{Language, UserId, UserInputError};
use lingo_bot_text_processing::MessageKey;
use lingo_bot_transport::{Choice, Command, Outbound};

use crate::BotDispatcher;

/// Prefix of the callback data carried by the language buttons
pub const SELECTION_PREFIX: &str = "setlang:";

/// One button per supported language, labelled with its flag and native name
pub fn language_choices() -> Vec<Choice> {
    Language::ALL
        .iter()
        .map(|lang| {
            Choice::new(
                format!("{} {}", lang.flag(), lang.native_name()),
                format!("{}{}", SELECTION_PREFIX, lang.code()),
            )
        })
        .collect()
}

/// Parse callback data such as `setlang:es`
pub fn parse_selection(data: &str) -> Result<Language, UserInputError> {
    let code = data
        .strip_prefix(SELECTION_PREFIX)
        .ok_or_else(|| UserInputError::MalformedSelection(data.to_string()))?;
    code.parse()
}

impl BotDispatcher {
    pub(crate) fn on_command(&self, command: Command, ui: Language) -> Outbound {
        match command {
            Command::Start => Outbound::text(self.text(ui, MessageKey::Welcome)),
            Command::Help => Outbound::text(self.text(ui, MessageKey::Help)),
            Command::About => Outbound::text(self.text(ui, MessageKey::About)),
            Command::Lang => Outbound::text(self.text(ui, MessageKey::ChooseLang))
                .with_choices(language_choices()),
            Command::Unknown(name) => {
                tracing::debug!(command = %name, "Unknown command");
                Outbound::text(self.text(ui, MessageKey::UnknownCommand))
            }
        }
    }

    /// Apply a language button press; replies replace the message with the buttons
    pub(crate) async fn on_selection(&self, user_id: UserId, data: &str, ui: Language) -> Outbound {
        let language = match parse_selection(data) {
            Ok(language) => language,
            Err(e) => {
                tracing::warn!(user_id = %user_id, error = %e, "Rejected language selection");
                return Outbound::text(self.text(ui, MessageKey::InvalidLanguage))
                    .with_choices(language_choices())
                    .replacing_origin();
            }
        };

        match self.sessions.set_language(user_id, language).await {
            Ok(session) => {
                Outbound::text(self.text(session.language, MessageKey::LangSet)).replacing_origin()
            }
            Err(e) => {
                tracing::error!(user_id = %user_id, error = %e, "Failed to store language selection");
                Outbound::text(self.text(ui, MessageKey::GenericError))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choices_order_and_data() {
        let choices = language_choices();
        assert_eq!(choices.len(), 2);
        assert_eq!(choices[0].label, "🇪🇸 Español");
        assert_eq!(choices[0].data, "setlang:es");
        assert_eq!(choices[1].label, "🇬🇧 English");
        assert_eq!(choices[1].data, "setlang:en");
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("setlang:es"), Ok(Language::Spanish));
        assert_eq!(parse_selection("setlang:en"), Ok(Language::English));
        assert_eq!(
            parse_selection("setlang:fr"),
            Err(UserInputError::UnsupportedLanguage("fr".to_string()))
        );
        assert_eq!(
            parse_selection("lang=es"),
            Err(UserInputError::MalformedSelection("lang=es".to_string()))
        );
        assert!(parse_selection("setlang:es-MX").is_err());
    }

    #[test]
    fn test_every_choice_parses_back() {
        for choice in language_choices() {
            assert!(parse_selection(&choice.data).is_ok());
        }
    }
}
