use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

/// A custom error type for configuration loading failures.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_address: SocketAddr,
    /// Upper bound on each call to a transcriber, synthesizer or messenger.
    pub collaborator_timeout: Duration,
    /// Replies at or above this many characters are never spoken.
    pub voice_reply_max_chars: usize,
    pub actor_buffer_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([0, 0, 0, 0], 3000)),
            collaborator_timeout: Duration::from_millis(10_000),
            voice_reply_max_chars: 500,
            actor_buffer_size: 32,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, reading `.env` first
    /// when present:
    ///
    /// *   `BIND_ADDRESS` (default `0.0.0.0:3000`)
    /// *   `COLLABORATOR_TIMEOUT_MS` (default `10000`)
    /// *   `VOICE_REPLY_MAX_CHARS` (default `500`)
    /// *   `ACTOR_BUFFER_SIZE` (default `32`)
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let bind_address = parse_or(&lookup, "BIND_ADDRESS", defaults.bind_address)?;
        let timeout_ms = parse_or(&lookup, "COLLABORATOR_TIMEOUT_MS", defaults.collaborator_timeout.as_millis() as u64)?;
        let voice_reply_max_chars = parse_or(&lookup, "VOICE_REPLY_MAX_CHARS", defaults.voice_reply_max_chars)?;
        let actor_buffer_size = parse_or(&lookup, "ACTOR_BUFFER_SIZE", defaults.actor_buffer_size)?;

        if timeout_ms == 0 {
            return Err(ConfigError::InvalidValue("COLLABORATOR_TIMEOUT_MS".into(), "must be positive".into()));
        }
        if actor_buffer_size == 0 {
            return Err(ConfigError::InvalidValue("ACTOR_BUFFER_SIZE".into(), "must be positive".into()));
        }

        Ok(Self {
            bind_address,
            collaborator_timeout: Duration::from_millis(timeout_ms),
            voice_reply_max_chars,
            actor_buffer_size,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidValue(key.to_string(), format!("'{}': {}", raw, e))),
        None => Ok(default),
    }
}
