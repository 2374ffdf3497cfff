//! Seams to the collaborators outside the ordering core: the chat provider,
//! speech-to-text and text-to-speech.
//!
//! Every call crosses an async boundary with a timeout. Failures are logged
//! and degrade to a text reply; they never reach the interpreter.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub mod console;
pub mod inbound;
pub mod outbound;

pub use console::{LogMessenger, UnconfiguredSynthesizer, UnconfiguredTranscriber};
pub use inbound::{to_utterance, InboundMessage, Utterance};
pub use outbound::{Delivery, ReplyDispatcher};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransportError {
    #[error("{0} is not configured")]
    NotConfigured(&'static str),
    #[error("{0} timed out after {1:?}")]
    Timeout(&'static str, Duration),
    #[error("Transcription produced no text")]
    EmptyTranscript,
    #[error("Provider error: {0}")]
    Provider(String),
}

/// A voice note attached to an inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioRef {
    pub url: String,
    pub mime_type: String,
}

/// A reply ready for the chat provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub to: String,
    pub text: String,
    /// Synthesized audio to attach; `text` is then a short caption.
    pub media_url: Option<String>,
}

#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio: &AudioRef) -> Result<String, TransportError>;
}

#[async_trait]
pub trait Synthesizer: Send + Sync {
    /// Returns a URL the chat provider can fetch the audio from.
    async fn synthesize(&self, text: &str) -> Result<String, TransportError>;
}

#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send(&self, message: OutboundMessage) -> Result<(), TransportError>;
}

pub(crate) async fn with_timeout<T>(
    service: &'static str,
    limit: Duration,
    call: impl Future<Output = Result<T, TransportError>>,
) -> Result<T, TransportError> {
    tokio::time::timeout(limit, call)
        .await
        .map_err(|_| TransportError::Timeout(service, limit))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_slow_call_times_out() {
        let slow = async {
            tokio::time::sleep(Duration::from_millis(200)).await;
            Ok::<_, TransportError>(())
        };
        let result = with_timeout("speech", Duration::from_millis(10), slow).await;
        assert_eq!(result, Err(TransportError::Timeout("speech", Duration::from_millis(10))));
    }

    #[tokio::test]
    async fn test_fast_call_passes_through() {
        let fast = async { Err::<(), _>(TransportError::Provider("boom".into())) };
        let result = with_timeout("speech", Duration::from_secs(1), fast).await;
        assert_eq!(result, Err(TransportError::Provider("boom".into())));
    }
}
