//! Event dispatcher for lingo-bot
//!
//! Features:
//! - Per-user session lookup on every event
//! - `/start`, `/help`, `/about`, `/lang` and the language selection callback
//! - Text flow: detect -> translate -> emotion
//! - Voice flow: decode -> transcribe -> translate -> emotion, each step
//!   failing on its own without discarding earlier results
//! - Timeout-bounded adapter calls

pub mod adapters;
pub mod dispatcher;

mod commands;
mod reply;
mod text;
mod voice;

pub use adapters::{Adapters, DispatchConfig};
pub use commands::{language_choices, parse_selection, SELECTION_PREFIX};
pub use dispatcher::BotDispatcher;
