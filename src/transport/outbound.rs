use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, instrument, warn};

use crate::commands::format::VOICE_CAPTION;

use super::{with_timeout, Messenger, OutboundMessage, Synthesizer, TransportError};

/// How a reply finally reached the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Voice,
    Text,
}

/// Sends replies, speaking them when the user prefers voice and the text is
/// short enough. Any voice failure falls back to plain text.
#[derive(Clone)]
pub struct ReplyDispatcher {
    messenger: Arc<dyn Messenger>,
    synthesizer: Arc<dyn Synthesizer>,
    timeout: Duration,
    voice_max_chars: usize,
}

impl ReplyDispatcher {
    pub fn new(
        messenger: Arc<dyn Messenger>,
        synthesizer: Arc<dyn Synthesizer>,
        timeout: Duration,
        voice_max_chars: usize,
    ) -> Self {
        Self {
            messenger,
            synthesizer,
            timeout,
            voice_max_chars,
        }
    }

    /// # Errors
    /// Only when the plain-text send itself fails.
    #[instrument(skip(self, text), fields(chars = text.chars().count()))]
    pub async fn deliver(&self, to: &str, text: &str, voice_preferred: bool) -> Result<Delivery, TransportError> {
        if voice_preferred && text.chars().count() < self.voice_max_chars {
            match self.try_voice(to, text).await {
                Ok(()) => return Ok(Delivery::Voice),
                Err(e) => warn!(error = %e, "Voice reply failed, falling back to text"),
            }
        }

        let message = OutboundMessage {
            to: to.to_string(),
            text: text.to_string(),
            media_url: None,
        };
        with_timeout("messenger", self.timeout, self.messenger.send(message)).await?;
        debug!("Text reply sent");
        Ok(Delivery::Text)
    }

    async fn try_voice(&self, to: &str, text: &str) -> Result<(), TransportError> {
        let media_url = with_timeout("text-to-speech", self.timeout, self.synthesizer.synthesize(text)).await?;
        let message = OutboundMessage {
            to: to.to_string(),
            text: VOICE_CAPTION.to_string(),
            media_url: Some(media_url),
        };
        with_timeout("messenger", self.timeout, self.messenger.send(message)).await
    }
}
