use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use crate::actor_framework::Entity;
use crate::domain::{cart_total, estimated_delivery, Order, OrderCreate, OrderStatus};

impl Entity for Order {
    type Id = String;
    type CreateParams = OrderCreate;
    type Action = (); // Orders are immutable once placed
    type ActionResult = ();

    const KIND: &'static str = "order";

    /// Snapshots the checked-out lines into a new confirmed order.
    ///
    /// # Notes
    /// The total is computed here from the snapshot, so it always matches the
    /// lines stored with the order.
    fn from_create_params(id: String, params: OrderCreate) -> Result<Self, String> {
        if params.items.is_empty() {
            return Err("Cannot place an order with no items".to_string());
        }
        Ok(Self {
            id,
            user_id: params.user_id,
            total: cart_total(&params.items),
            items: params.items,
            status: OrderStatus::Confirmed,
            order_time: params.order_time,
            estimated_delivery_time: estimated_delivery(params.order_time),
        })
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}

/// Builds the order id generator: `ORD` followed by a monotonic number
/// seeded from the wall clock. Ids are unique for the life of the process.
pub fn order_id_generator() -> impl Fn() -> String + Send + Sync + 'static {
    let seed = (Utc::now().timestamp_millis().unsigned_abs()) % 1_000_000;
    let counter = Arc::new(AtomicU64::new(seed));
    move || format!("ORD{:06}", counter.fetch_add(1, Ordering::SeqCst))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CartLine, Price};
    use std::collections::HashSet;

    #[test]
    fn test_order_ids_never_repeat() {
        let next_id = order_id_generator();
        let ids: HashSet<String> = (0..1000).map(|_| next_id()).collect();
        assert_eq!(ids.len(), 1000);
        assert!(ids.iter().all(|id| id.starts_with("ORD") && id.len() >= 9));
    }

    #[test]
    fn test_create_computes_total_and_eta() {
        let now = Utc::now();
        let items = vec![CartLine {
            item_id: "M1".into(),
            name: "Margherita Pizza".into(),
            price: Price::from_cents(1699),
            quantity: 5,
        }];
        let order = Order::from_create_params(
            "ORD000042".into(),
            OrderCreate { user_id: "u".into(), items, order_time: now },
        )
        .unwrap();

        assert_eq!(order.total.to_string(), "$84.95");
        assert_eq!(order.status, OrderStatus::Confirmed);
        assert_eq!(order.estimated_delivery_time, estimated_delivery(now));
    }

    #[test]
    fn test_empty_order_is_rejected() {
        let params = OrderCreate { user_id: "u".into(), items: Vec::new(), order_time: Utc::now() };
        assert!(Order::from_create_params("ORD1".into(), params).is_err());
    }
}
