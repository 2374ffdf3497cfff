use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{CartLine, MenuItem, Session, SessionCreate};
use crate::impl_client_new;
use crate::session_actor::{SessionAction, SessionActionResult, SessionError};

/// Client for interacting with the Session actor.
#[derive(Clone)]
pub struct SessionClient {
    inner: ResourceClient<Session>,
}

impl_client_new!(SessionClient, Session);

impl SessionClient {
    /// Returns the user's session, creating an empty one on first contact.
    #[instrument(skip(self))]
    pub async fn open_session(&self, user_id: String) -> Result<Session, SessionError> {
        debug!("Sending request");
        self.inner
            .get_or_create(user_id, SessionCreate::default())
            .await
            .map_err(SessionError::from)
    }

    #[instrument(skip(self, item), fields(item_id = %item.id))]
    pub async fn add_item(&self, user_id: String, item: MenuItem, quantity: u32) -> Result<u32, SessionError> {
        debug!("Sending request");
        match self.act(user_id, SessionAction::AddItem { item, quantity }).await? {
            SessionActionResult::AddItem(total) => Ok(total),
            _ => Err(SessionError::UnexpectedResult),
        }
    }

    #[instrument(skip(self))]
    pub async fn clear_cart(&self, user_id: String) -> Result<(), SessionError> {
        debug!("Sending request");
        match self.act(user_id, SessionAction::ClearCart).await? {
            SessionActionResult::ClearCart(()) => Ok(()),
            _ => Err(SessionError::UnexpectedResult),
        }
    }

    #[instrument(skip(self))]
    pub async fn take_cart(&self, user_id: String) -> Result<Vec<CartLine>, SessionError> {
        debug!("Sending request");
        match self.act(user_id, SessionAction::TakeCart).await? {
            SessionActionResult::TakeCart(lines) => Ok(lines),
            _ => Err(SessionError::UnexpectedResult),
        }
    }

    #[instrument(skip(self))]
    pub async fn prefer_voice(&self, user_id: String) -> Result<(), SessionError> {
        debug!("Sending request");
        match self.act(user_id, SessionAction::PreferVoice).await? {
            SessionActionResult::PreferVoice(()) => Ok(()),
            _ => Err(SessionError::UnexpectedResult),
        }
    }

    async fn act(&self, user_id: String, action: SessionAction) -> Result<SessionActionResult, SessionError> {
        self.inner.perform_action(user_id, action).await.map_err(SessionError::from)
    }
}
