use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{error, info, instrument, warn};

use crate::commands::{format, normalize, Command, Interpreter};
use crate::error::BotError;
use crate::transport::{to_utterance, Delivery, InboundMessage, ReplyDispatcher, Transcriber};

/// What happened to one inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handled {
    pub reply: String,
    pub delivery: Delivery,
    /// The command the interpreter ran, if it was reached at all.
    pub command: Option<Command>,
}

/// The full request path for one chat message: transcribe, normalize,
/// interpret, reply.
#[derive(Clone)]
pub struct Conversation {
    interpreter: Interpreter,
    transcriber: Arc<dyn Transcriber>,
    dispatcher: ReplyDispatcher,
    timeout: Duration,
}

impl Conversation {
    pub fn new(
        interpreter: Interpreter,
        transcriber: Arc<dyn Transcriber>,
        dispatcher: ReplyDispatcher,
        timeout: Duration,
    ) -> Self {
        Self {
            interpreter,
            transcriber,
            dispatcher,
            timeout,
        }
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// # Errors
    /// Only when the stores are unreachable or the reply cannot be sent at
    /// all. Bad input, unknown orders and speech failures become replies.
    #[instrument(skip(self, message, now), fields(sender = %message.sender_id))]
    pub async fn handle(&self, message: InboundMessage, now: DateTime<Utc>) -> Result<Handled, BotError> {
        let sender = message.sender_id.clone();
        let sessions = self.interpreter.sessions();

        let mut session = sessions.open_session(sender.clone()).await?;
        if message.is_voice() && !session.voice_preferred {
            sessions.prefer_voice(sender.clone()).await?;
            session.voice_preferred = true;
        }

        let utterance = match to_utterance(message, self.transcriber.as_ref(), self.timeout).await {
            Ok(utterance) => utterance,
            Err(_) => return self.reply(&sender, format::VOICE_NOT_UNDERSTOOD, false, None).await,
        };

        if utterance.text.is_empty() {
            return self.reply(&sender, format::EMPTY_MESSAGE, session.voice_preferred, None).await;
        }

        let canonical = normalize(&utterance.text, utterance.was_voice, self.interpreter.menu());
        let command = Command::parse(&canonical);
        info!(canonical = %canonical, command = ?command, "Processing command");

        match self.interpreter.execute(&sender, command.clone(), now).await {
            Ok(reply) => self.reply(&sender, &reply, session.voice_preferred, Some(command)).await,
            Err(e) => {
                error!(error = %e, "Command failed");
                let _ = self
                    .dispatcher
                    .deliver(&sender, format::SERVICE_UNAVAILABLE, false)
                    .await
                    .inspect_err(|e| warn!(error = %e, "Apology could not be delivered"));
                Err(e.into())
            }
        }
    }

    async fn reply(
        &self,
        to: &str,
        text: &str,
        voice_preferred: bool,
        command: Option<Command>,
    ) -> Result<Handled, BotError> {
        let delivery = self.dispatcher.deliver(to, text, voice_preferred).await?;
        Ok(Handled {
            reply: text.to_string(),
            delivery,
            command,
        })
    }
}
