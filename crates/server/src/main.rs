//! lingo-bot entry point

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use lingo_bot_config::load_settings;
use lingo_bot_persistence::SessionStore;
use lingo_bot_server::{init_tracing, AppState};
use lingo_bot_transport::{EventHandler, TelegramTransport};

/// Selects `config/{env}.toml` on top of `config/default.toml`
const ENV_VAR: &str = "LINGO_BOT_ENV";

#[tokio::main]
async fn main() -> ExitCode {
    // Settings come first: a missing token must stop us before any network call
    let env = std::env::var(ENV_VAR).ok();
    let settings = match load_settings(env.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("lingo-bot: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&settings);

    match run(settings).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %format!("{:#}", e), "lingo-bot stopped with an error");
            ExitCode::FAILURE
        }
    }
}

async fn run(settings: lingo_bot_config::Settings) -> anyhow::Result<()> {
    tracing::info!("Starting lingo-bot v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::from_settings(settings).context("building adapters")?;

    let healthy = state.probe_sidecars().await;
    tracing::info!(healthy, total = 3, "Sidecar probe finished");

    let transport = TelegramTransport::new(state.telegram_config());
    let handler: Arc<dyn EventHandler> = state.dispatcher.clone();
    transport.run(handler).await;

    let sessions = state.sessions.count().await.unwrap_or_default();
    tracing::info!(sessions, "Shutdown complete");
    Ok(())
}
