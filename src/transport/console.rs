//! Stand-in collaborators for running without provider credentials.

use async_trait::async_trait;
use tracing::info;

use super::{AudioRef, Messenger, OutboundMessage, Synthesizer, Transcriber, TransportError};

/// Writes outbound replies to the structured log instead of a chat provider.
#[derive(Debug, Default, Clone)]
pub struct LogMessenger;

#[async_trait]
impl Messenger for LogMessenger {
    async fn send(&self, message: OutboundMessage) -> Result<(), TransportError> {
        info!(
            to = %message.to,
            media = message.media_url.as_deref().unwrap_or("-"),
            chars = message.text.chars().count(),
            "Outbound reply:\n{}",
            message.text
        );
        Ok(())
    }
}

/// Rejects every voice note, so callers take the apology path.
#[derive(Debug, Default, Clone)]
pub struct UnconfiguredTranscriber;

#[async_trait]
impl Transcriber for UnconfiguredTranscriber {
    async fn transcribe(&self, _audio: &AudioRef) -> Result<String, TransportError> {
        Err(TransportError::NotConfigured("speech-to-text"))
    }
}

/// Never produces audio, so replies fall back to text.
#[derive(Debug, Default, Clone)]
pub struct UnconfiguredSynthesizer;

#[async_trait]
impl Synthesizer for UnconfiguredSynthesizer {
    async fn synthesize(&self, _text: &str) -> Result<String, TransportError> {
        Err(TransportError::NotConfigured("text-to-speech"))
    }
}
