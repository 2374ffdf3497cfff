use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, error, info, instrument, warn};

use crate::clients::{OrderClient, SessionClient};
use crate::domain::{CartLine, MenuCatalog};
use crate::order_actor::OrderError;
use crate::session_actor::SessionError;

use super::command::Command;
use super::format;

/// Store failures. Malformed input is never an error; it gets a reply.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InterpretError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Order(#[from] OrderError),
}

/// Executes canonical commands against a user's session and the order store.
///
/// The stores are reached only through their clients, so the backing
/// implementation can change without touching this type.
#[derive(Clone)]
pub struct Interpreter {
    menu: Arc<MenuCatalog>,
    sessions: SessionClient,
    orders: OrderClient,
}

impl Interpreter {
    pub fn new(menu: Arc<MenuCatalog>, sessions: SessionClient, orders: OrderClient) -> Self {
        Self { menu, sessions, orders }
    }

    pub fn menu(&self) -> &MenuCatalog {
        &self.menu
    }

    pub fn sessions(&self) -> &SessionClient {
        &self.sessions
    }

    pub fn orders(&self) -> &OrderClient {
        &self.orders
    }

    /// Runs one command for `user_id` and returns the reply text.
    /// The session is created on first contact.
    #[instrument(skip(self, now), fields(mutating = command.is_mutating()))]
    pub async fn execute(
        &self,
        user_id: &str,
        command: Command,
        now: DateTime<Utc>,
    ) -> Result<String, InterpretError> {
        let session = self.sessions.open_session(user_id.to_string()).await?;

        let reply = match command {
            Command::Greeting => format::WELCOME.to_string(),
            Command::Menu => format::MENU_PROMPT.to_string(),
            Command::Category(category) => format::category_listing(&self.menu, category),
            Command::FullMenu => format::full_menu(&self.menu),
            Command::Add { item_id, quantity } => self.handle_add(user_id, &item_id, quantity).await?,
            Command::AddIncomplete => format::ADD_INCOMPLETE.to_string(),
            Command::Cart => format::cart(&session.cart),
            Command::Clear => {
                self.sessions.clear_cart(user_id.to_string()).await?;
                info!("Cart cleared");
                format::CART_CLEARED.to_string()
            }
            Command::Checkout => self.handle_checkout(user_id, now).await?,
            Command::Track(order_id) => self.handle_track(order_id, now).await?,
            Command::Help => format::HELP.to_string(),
            Command::Farewell => format::FAREWELL.to_string(),
            Command::Unrecognized => format::UNRECOGNIZED.to_string(),
        };
        Ok(reply)
    }

    #[instrument(skip(self))]
    async fn handle_add(
        &self,
        user_id: &str,
        item_id: &str,
        quantity: Option<u32>,
    ) -> Result<String, InterpretError> {
        let (item, quantity) = match (self.menu.find(item_id), quantity) {
            (Some(item), Some(quantity)) => (item.clone(), quantity),
            _ => {
                debug!("Rejected add: unknown item or bad quantity");
                return Ok(format::ADD_INVALID.to_string());
            }
        };

        // The session rejects adds it cannot apply, such as a line that would
        // overflow. The cart is untouched in that case.
        match self.sessions.add_item(user_id.to_string(), item.clone(), quantity).await {
            Ok(line_quantity) => {
                info!(line_quantity, "Item added to cart");
                Ok(format::item_added(&item, quantity))
            }
            Err(SessionError::Rejected(reason)) => {
                debug!(reason = %reason, "Session rejected add");
                Ok(format::ADD_INVALID.to_string())
            }
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self, now))]
    async fn handle_checkout(&self, user_id: &str, now: DateTime<Utc>) -> Result<String, InterpretError> {
        let lines = self.sessions.take_cart(user_id.to_string()).await?;
        if lines.is_empty() {
            debug!("Checkout on empty cart");
            return Ok(format::CHECKOUT_EMPTY.to_string());
        }

        let order = match self.orders.place_order(user_id.to_string(), lines.clone(), now).await {
            Ok(order) => order,
            Err(e) => {
                warn!(error = %e, "Order not stored, returning lines to the cart");
                self.restore_cart(user_id, lines).await;
                return Err(e.into());
            }
        };
        info!(order_id = %order.id, total = %order.total, "Checkout complete");
        Ok(format::order_confirmed(&order))
    }

    async fn restore_cart(&self, user_id: &str, lines: Vec<CartLine>) {
        for line in lines {
            let Some(item) = self.menu.find(&line.item_id) else {
                warn!(item_id = %line.item_id, "Cannot restore line for unknown item");
                continue;
            };
            if let Err(e) = self.sessions.add_item(user_id.to_string(), item.clone(), line.quantity).await {
                error!(error = %e, item_id = %line.item_id, "Failed to restore cart line");
            }
        }
    }

    #[instrument(skip(self, now))]
    async fn handle_track(&self, order_id: Option<String>, now: DateTime<Utc>) -> Result<String, InterpretError> {
        let Some(order_id) = order_id else {
            return Ok(format::ORDER_NOT_FOUND.to_string());
        };

        match self.orders.get_order(order_id).await? {
            Some(order) => {
                debug!(stage = order.stage_at(now).label(), "Order tracked");
                Ok(format::tracking(&order, now))
            }
            None => {
                warn!("Tracking requested for unknown order");
                Ok(format::ORDER_NOT_FOUND.to_string())
            }
        }
    }
}
