use std::sync::Arc;

use tracing::{error, info, instrument};

use crate::actor_framework::ResourceActor;
use crate::clients::{OrderClient, SessionClient};
use crate::commands::Interpreter;
use crate::domain::{MenuCatalog, Order, Session};
use crate::order_actor::order_id_generator;

/// Starts the session and order stores, wires them into the interpreter,
/// and owns their tasks until shutdown.
pub struct BotSystem {
    pub session_client: SessionClient,
    pub order_client: OrderClient,
    pub menu: Arc<MenuCatalog>,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl BotSystem {
    #[instrument(name = "bot_system", skip(menu))]
    pub fn new(menu: MenuCatalog, buffer_size: usize) -> Self {
        info!(menu_items = menu.items().len(), "Starting bot system");

        // Sessions are keyed by sender; the generator is never consulted.
        let (session_actor, session_resource_client) =
            ResourceActor::<Session>::new(buffer_size, String::new);
        let session_client = SessionClient::new(session_resource_client);
        let session_handle = tokio::spawn(session_actor.run());

        let (order_actor, order_resource_client) =
            ResourceActor::<Order>::new(buffer_size, order_id_generator());
        let order_client = OrderClient::new(order_resource_client);
        let order_handle = tokio::spawn(order_actor.run());

        Self {
            session_client,
            order_client,
            menu: Arc::new(menu),
            handles: vec![session_handle, order_handle],
        }
    }

    pub fn interpreter(&self) -> Interpreter {
        Interpreter::new(self.menu.clone(), self.session_client.clone(), self.order_client.clone())
    }

    /// Drops this system's clients and waits for the actors to drain.
    ///
    /// Actors stop once every client clone is gone, so callers must drop any
    /// interpreters or router state they hold first.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down bot system");
        drop(self.session_client);
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Actor task failed");
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Bot system shutdown complete");
        Ok(())
    }
}
