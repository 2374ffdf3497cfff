use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use super::{CartLine, Price};

/// Minutes between checkout and the promised delivery time.
pub const DELIVERY_ESTIMATE_MINUTES: i64 = 30;

/// Stored order status. Progress through the kitchen is derived, not stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Confirmed,
}

/// Delivery progress as shown to the customer, computed from elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStage {
    Preparing,
    Cooking,
    OutForDelivery,
    Delivered,
}

impl DeliveryStage {
    pub fn from_elapsed_minutes(minutes: i64) -> Self {
        match minutes {
            m if m < 5 => DeliveryStage::Preparing,
            m if m < 20 => DeliveryStage::Cooking,
            m if m < DELIVERY_ESTIMATE_MINUTES => DeliveryStage::OutForDelivery,
            _ => DeliveryStage::Delivered,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DeliveryStage::Preparing => "preparing",
            DeliveryStage::Cooking => "cooking",
            DeliveryStage::OutForDelivery => "out for delivery",
            DeliveryStage::Delivered => "delivered",
        }
    }
}

/// Immutable snapshot of a cart taken at checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub items: Vec<CartLine>,
    pub total: Price,
    pub status: OrderStatus,
    pub order_time: DateTime<Utc>,
    pub estimated_delivery_time: DateTime<Utc>,
}

/// Payload for creating a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub user_id: String,
    pub items: Vec<CartLine>,
    pub order_time: DateTime<Utc>,
}

impl Order {
    /// Whole minutes since checkout. Never negative, even if clocks disagree.
    pub fn minutes_elapsed(&self, now: DateTime<Utc>) -> i64 {
        (now - self.order_time).num_minutes().max(0)
    }

    pub fn stage_at(&self, now: DateTime<Utc>) -> DeliveryStage {
        DeliveryStage::from_elapsed_minutes(self.minutes_elapsed(now))
    }
}

pub fn estimated_delivery(order_time: DateTime<Utc>) -> DateTime<Utc> {
    order_time + Duration::minutes(DELIVERY_ESTIMATE_MINUTES)
}
