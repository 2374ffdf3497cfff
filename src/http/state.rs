use std::time::Instant;

use crate::app_system::Conversation;
use crate::clients::OrderClient;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub conversation: Conversation,
    pub orders: OrderClient,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(conversation: Conversation) -> Self {
        let orders = conversation.interpreter().orders().clone();
        Self {
            conversation,
            orders,
            start_time: Instant::now(),
        }
    }
}
