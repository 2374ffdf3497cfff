use crate::actor_framework::Entity;
use crate::domain::{Session, SessionCreate};
use super::actions::{SessionAction, SessionActionResult};

impl Entity for Session {
    type Id = String;
    type CreateParams = SessionCreate;
    type Action = SessionAction;
    type ActionResult = SessionActionResult;

    const KIND: &'static str = "session";

    /// Creates an empty session keyed by the sender's address.
    fn from_create_params(id: String, params: SessionCreate) -> Result<Self, String> {
        if id.trim().is_empty() {
            return Err("Session key must not be empty".to_string());
        }
        let mut session = Session::new(id);
        session.voice_preferred = params.voice_preferred;
        Ok(session)
    }

    fn handle_action(&mut self, action: SessionAction) -> Result<SessionActionResult, String> {
        match action {
            SessionAction::AddItem { item, quantity } => {
                self.add_item(&item, quantity).map(SessionActionResult::AddItem)
            }
            SessionAction::ClearCart => {
                self.clear_cart();
                Ok(SessionActionResult::ClearCart(()))
            }
            SessionAction::TakeCart => Ok(SessionActionResult::TakeCart(self.take_cart())),
            SessionAction::PreferVoice => {
                self.voice_preferred = true;
                Ok(SessionActionResult::PreferVoice(()))
            }
        }
    }
}
