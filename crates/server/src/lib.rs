//! lingo-bot server
//!
//! Builds the model adapters and the dispatcher from [`Settings`] and runs
//! the Telegram transport.

pub mod state;

pub use state::AppState;

use lingo_bot_config::Settings;
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

/// Crates whose logs follow `observability.log_level`
const LOG_TARGETS: [&str; 8] = [
    "lingo_bot",
    "lingo_bot_server",
    "lingo_bot_agent",
    "lingo_bot_pipeline",
    "lingo_bot_transport",
    "lingo_bot_persistence",
    "lingo_bot_text_processing",
    "lingo_bot_config",
];

/// Server errors
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Adapter setup failed: {0}")]
    Adapter(String),
}

/// Initialize logging: `RUST_LOG` wins, otherwise the configured level
pub fn init_tracing(settings: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &settings.observability.log_level;
        let mut directives: Vec<String> = LOG_TARGETS
            .iter()
            .map(|target| format!("{}={}", target, level))
            .collect();
        directives.push("teloxide=warn".to_string());
        directives.join(",").into()
    });

    let fmt_layer = if settings.observability.log_json {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
