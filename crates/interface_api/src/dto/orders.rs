//! Order DTOs

use serde::Deserialize;
use uuid::Uuid;

use domain_orders::{OrderItem, OrderStatus};

/// Order placement. `items` accepts both payload formats: priced
/// `{name, price, qty}` objects and legacy bare name strings.
#[derive(Debug, Deserialize)]
pub struct PlaceOrderBody {
    pub guest_id: Uuid,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateOrderStatusBody {
    pub status: OrderStatus,
}

#[derive(Debug, Deserialize)]
pub struct OrderListQuery {
    /// PENDING, COMPLETED, or PAID
    pub status: Option<String>,
}
