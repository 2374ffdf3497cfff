use chrono::{DateTime, Utc};
use tracing::{error, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{CartLine, Order, OrderCreate};
use crate::impl_basic_client;
use crate::order_actor::OrderError;

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl_basic_client!(OrderClient, Order, OrderError, order);

impl OrderClient {
    /// Stores a confirmed order built from the checked-out lines and returns it.
    #[instrument(skip(self, items), fields(lines = items.len()))]
    pub async fn place_order(
        &self,
        user_id: String,
        items: Vec<CartLine>,
        order_time: DateTime<Utc>,
    ) -> Result<Order, OrderError> {
        info!("Processing place_order request");
        let params = OrderCreate { user_id, items, order_time };
        let id = self.inner.create(params).await.map_err(|e| {
            error!(error = %e, "Order creation failed");
            OrderError::from(e)
        })?;

        match self.inner.get(id.clone()).await.map_err(OrderError::from)? {
            Some(order) => {
                info!(order_id = %order.id, total = %order.total, "Order placed");
                Ok(order)
            }
            None => Err(OrderError::ActorCommunicationError(format!("Order {} vanished after creation", id))),
        }
    }
}
