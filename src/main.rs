mod domain;
mod clients;
mod commands;
mod transport;
mod http;
mod error;

mod app_system;

#[cfg(test)]
mod mock_framework;
#[cfg(test)]
mod integration_tests;

mod actor_framework;
mod session_actor;
mod order_actor;

use std::sync::Arc;

use tracing::{error, info};

use crate::app_system::{setup_tracing, BotSystem, Config, Conversation};
use crate::domain::MenuCatalog;
use crate::error::BotError;
use crate::http::{create_router, AppState};
use crate::transport::{LogMessenger, ReplyDispatcher, UnconfiguredSynthesizer, UnconfiguredTranscriber};

#[tokio::main]
async fn main() -> Result<(), BotError> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = Config::from_env().inspect_err(|e| error!(error = %e, "Invalid configuration"))?;
    info!(?config, "Starting restaurant order bot");

    let system = BotSystem::new(MenuCatalog::restaurant(), config.actor_buffer_size);

    // No provider credentials are wired in: replies go to the log and voice
    // notes get the apology path.
    let dispatcher = ReplyDispatcher::new(
        Arc::new(LogMessenger),
        Arc::new(UnconfiguredSynthesizer),
        config.collaborator_timeout,
        config.voice_reply_max_chars,
    );
    let conversation = Conversation::new(
        system.interpreter(),
        Arc::new(UnconfiguredTranscriber),
        dispatcher,
        config.collaborator_timeout,
    );
    let app = create_router(AppState::new(conversation));

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    info!(address = %config.bind_address, "Listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // The router and its clients are gone once serve returns.
    system.shutdown().await.map_err(BotError::Shutdown)?;

    info!("Order bot stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received");
}
