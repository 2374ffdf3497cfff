use axum::extract::State;
use axum::{Form, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};

use crate::domain::{CartLine, Order, OrderStatus, Price};
use crate::transport::InboundMessage;

use super::error::ApiError;
use super::state::AppState;

/// Fields the chat provider posts for each inbound message. Anything else
/// it sends is ignored.
#[derive(Debug, Deserialize)]
pub struct WebhookForm {
    #[serde(rename = "From")]
    pub from: Option<String>,
    #[serde(rename = "Body")]
    pub body: Option<String>,
    #[serde(rename = "MediaUrl0")]
    pub media_url: Option<String>,
    #[serde(rename = "MediaContentType0")]
    pub media_content_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OrderView {
    pub id: String,
    pub user_id: String,
    pub items: Vec<CartLine>,
    pub total: Price,
    pub status: OrderStatus,
    pub stage: &'static str,
    pub order_time: DateTime<Utc>,
    pub estimated_delivery_time: DateTime<Utc>,
}

impl OrderView {
    fn at(order: Order, now: DateTime<Utc>) -> Self {
        let stage = order.stage_at(now).label();
        Self {
            id: order.id,
            user_id: order.user_id,
            items: order.items,
            total: order.total,
            status: order.status,
            stage,
            order_time: order.order_time,
            estimated_delivery_time: order.estimated_delivery_time,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OrdersResponse {
    pub total_orders: usize,
    pub orders: Vec<OrderView>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub uptime_secs: u64,
}

/// POST /webhook - handle one inbound chat message.
///
/// The reply goes out through the messenger; the HTTP response is only an
/// acknowledgement. Delivery failures are logged and still acknowledged so
/// the provider does not retry a message that was already applied.
#[instrument(skip_all)]
pub async fn webhook(
    State(state): State<AppState>,
    Form(form): Form<WebhookForm>,
) -> Result<&'static str, ApiError> {
    let Some(sender) = form.from.filter(|from| !from.trim().is_empty()) else {
        warn!("Webhook call without a sender");
        return Err(ApiError::BadRequest("Missing From field".to_string()));
    };

    let message = InboundMessage::new(sender, form.body, form.media_url, form.media_content_type);
    match state.conversation.handle(message, Utc::now()).await {
        Ok(handled) => {
            info!(delivery = ?handled.delivery, command = ?handled.command, "Message handled");
            Ok("OK")
        }
        Err(e) if e.is_store_failure() => {
            error!(error = %e, "Stores unavailable");
            Err(e.into())
        }
        Err(e) => {
            error!(error = %e, "Reply could not be delivered");
            Ok("OK")
        }
    }
}

/// GET /orders - every stored order with its current delivery stage.
#[instrument(skip_all)]
pub async fn list_orders(State(state): State<AppState>) -> Result<Json<OrdersResponse>, ApiError> {
    let now = Utc::now();
    let mut orders = state.orders.list_orders().await?;
    orders.sort_by(|a, b| a.order_time.cmp(&b.order_time).then_with(|| a.id.cmp(&b.id)));

    let orders: Vec<OrderView> = orders.into_iter().map(|order| OrderView::at(order, now)).collect();
    Ok(Json(OrdersResponse {
        total_orders: orders.len(),
        orders,
    }))
}

/// GET / - plain liveness text.
pub async fn root() -> &'static str {
    "Restaurant order bot is running"
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}
