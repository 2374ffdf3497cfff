use std::time::Duration;

use tracing::{info, instrument, warn};

use super::{with_timeout, AudioRef, Transcriber, TransportError};

/// A message as received from the chat provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub sender_id: String,
    pub body: Option<String>,
    pub audio: Option<AudioRef>,
}

impl InboundMessage {
    /// Builds a message from provider fields. Media only counts as a voice
    /// note when its content type is `audio/*`.
    pub fn new(
        sender_id: impl Into<String>,
        body: Option<String>,
        media_url: Option<String>,
        media_type: Option<String>,
    ) -> Self {
        let audio = match (media_url, media_type) {
            (Some(url), Some(mime_type)) if !url.is_empty() && mime_type.starts_with("audio/") => {
                Some(AudioRef { url, mime_type })
            }
            _ => None,
        };
        Self {
            sender_id: sender_id.into(),
            body,
            audio,
        }
    }

    pub fn is_voice(&self) -> bool {
        self.audio.is_some()
    }
}

/// Text ready for normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    pub sender_id: String,
    pub text: String,
    pub was_voice: bool,
}

/// Turns an inbound message into text, transcribing voice notes.
///
/// # Errors
/// Transcription failures, timeouts and empty transcripts. Typed messages
/// never fail; an absent body becomes empty text.
#[instrument(skip(message, transcriber), fields(sender = %message.sender_id, voice = message.is_voice()))]
pub async fn to_utterance(
    message: InboundMessage,
    transcriber: &dyn Transcriber,
    limit: Duration,
) -> Result<Utterance, TransportError> {
    let InboundMessage { sender_id, body, audio } = message;

    let Some(audio) = audio else {
        let text = body.unwrap_or_default().trim().to_lowercase();
        return Ok(Utterance { sender_id, text, was_voice: false });
    };

    let transcript = with_timeout("speech-to-text", limit, transcriber.transcribe(&audio))
        .await
        .inspect_err(|e| warn!(error = %e, "Transcription failed"))?;

    let text = transcript.trim().to_lowercase();
    if text.is_empty() {
        warn!("Transcription was empty");
        return Err(TransportError::EmptyTranscript);
    }

    info!(transcript = %text, "Voice note transcribed");
    Ok(Utterance { sender_id, text, was_voice: true })
}
