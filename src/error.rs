use thiserror::Error;

use crate::app_system::ConfigError;
use crate::commands::InterpretError;
use crate::session_actor::SessionError;
use crate::transport::TransportError;

/// Top-level failures of the bot process and its request path.
#[derive(Debug, Error)]
pub enum BotError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Interpret(#[from] InterpretError),
    #[error("Reply could not be delivered: {0}")]
    Delivery(#[from] TransportError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Shutdown failed: {0}")]
    Shutdown(String),
}

impl BotError {
    /// Whether the failure means the stores could not be reached.
    pub fn is_store_failure(&self) -> bool {
        matches!(self, BotError::Session(_) | BotError::Interpret(_))
    }
}
