use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors that can occur during session operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(String),
    #[error("Session change rejected: {0}")]
    Rejected(String),
    #[error("Unexpected session action result")]
    UnexpectedResult,
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for SessionError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::NotFound(id) => SessionError::NotFound(id),
            FrameworkError::Rejected(msg) => SessionError::Rejected(msg),
            other => SessionError::ActorCommunicationError(other.to_string()),
        }
    }
}
