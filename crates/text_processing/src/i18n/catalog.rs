//! Built-in English/Spanish templates

use super::MessageKey;

/// (key, English, Spanish)
pub(super) const ENTRIES: &[(MessageKey, &str, &str)] = &[
    (
        MessageKey::Welcome,
        "👋 Hi! Send me a voice or text message in English or Spanish and I will return:\n\
         1) Transcription / your text 📝\n\
         2) Translation 🔁\n\
         3) Emotion 🎭\n\n\
         Use /help to see options. You can change language with /lang.",
        "👋 ¡Hola! Envíame una nota de voz o un mensaje de texto en inglés o español y te devolveré:\n\
         1) Transcripción / tu texto 📝\n\
         2) Traducción 🔁\n\
         3) Emoción 🎭\n\n\
         Usa /help para ver opciones. Puedes cambiar el idioma con /lang.",
    ),
    (
        MessageKey::Help,
        "📌 Commands:\n\
         /start - Welcome\n\
         /help - This help\n\
         /about - About this bot\n\
         /lang - Choose bot language (English/Spanish)\n\n\
         🎤 Features:\n\
         - Voice (English/Spanish): transcription + translation + emotion.\n\
         - Text (English/Spanish): translation + emotion.",
        "📌 Comandos:\n\
         /start - Bienvenida\n\
         /help - Esta ayuda\n\
         /about - Sobre este bot\n\
         /lang - Elegir idioma del bot (Español/Inglés)\n\n\
         🎤 Funciones:\n\
         - Voz (inglés/español): transcripción + traducción + emoción.\n\
         - Texto (inglés/español): traducción + emoción.",
    ),
    (
        MessageKey::About,
        "🤖 lingo-bot: Whisper (speech recognition) + MarianMT (translation) + \
         GoEmotions (emotion). Detects the language (en/es), transcribes or reads your text, \
         translates it and classifies emotions.",
        "🤖 lingo-bot: Whisper (reconocimiento de voz) + MarianMT (traducción) + \
         GoEmotions (emoción). Detecta el idioma (es/en), transcribe o lee tu texto, \
         lo traduce y clasifica emociones.",
    ),
    (
        MessageKey::ChooseLang,
        "Please choose the bot language:",
        "Elige el idioma del bot:",
    ),
    (
        MessageKey::LangSet,
        "✅ Language set to English.",
        "✅ Idioma configurado a Español.",
    ),
    (
        MessageKey::InvalidLanguage,
        "⚠️ That language is not available. Please pick one of the options:",
        "⚠️ Ese idioma no está disponible. Elige una de las opciones:",
    ),
    (
        MessageKey::UnknownCommand,
        "Unknown command. Try /help 😉",
        "Comando no reconocido. Prueba /help 😉",
    ),
    (
        MessageKey::NoTranscription,
        "❌ Could not transcribe anything. Please try again.",
        "❌ No pude transcribir nada. Por favor, inténtalo de nuevo.",
    ),
    (
        MessageKey::AudioError,
        "❌ I could not read that voice note. Please record it again.",
        "❌ No pude leer esa nota de voz. Por favor, grábala de nuevo.",
    ),
    (
        MessageKey::AnalysisSkipped,
        "not processed (analysis skipped).",
        "no procesadas (se omite análisis).",
    ),
    (
        MessageKey::TranslationSkipped,
        "ℹ️ Not English/Spanish, translation skipped.",
        "ℹ️ No es inglés/español; se omitió la traducción.",
    ),
    (
        MessageKey::TranslationFailed,
        "⚠️ Translation is unavailable right now.",
        "⚠️ La traducción no está disponible en este momento.",
    ),
    (
        MessageKey::TranscriptionHeader,
        "📝 Transcription {flag} (lang: {lang}, confidence: {conf}%):\n",
        "📝 Transcripción {flag} (idioma: {lang}, confianza: {conf}%):\n",
    ),
    (
        MessageKey::TranslationHeader,
        "🔁 Translation {flag} ({src}→{tgt}):\n",
        "🔁 Traducción {flag} ({src}→{tgt}):\n",
    ),
    (
        MessageKey::EmotionHeader,
        "🎭 Detected emotion(s): {emo}",
        "🎭 Emoción(es) detectada(s): {emo}",
    ),
    (
        MessageKey::YouWrote,
        "📝 You wrote {flag} ({lang}):\n",
        "📝 Has escrito {flag} (idioma: {lang}):\n",
    ),
    (
        MessageKey::GenericError,
        "⚠️ Something went wrong while processing your message. Please try again.",
        "⚠️ Algo salió mal al procesar tu mensaje. Por favor, inténtalo de nuevo.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_cover_every_key_once() {
        assert_eq!(ENTRIES.len(), MessageKey::ALL.len());
        for key in MessageKey::ALL {
            let count = ENTRIES.iter().filter(|(k, _, _)| *k == key).count();
            assert_eq!(count, 1, "{} appears {} times", key, count);
        }
    }
}
