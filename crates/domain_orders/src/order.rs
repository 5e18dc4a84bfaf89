//! Food order aggregate

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::OrderError;
use crate::line_items::{placement_total, OrderItem};

/// Order workflow status
///
/// Transitions move strictly forward: PENDING -> COMPLETED -> PAID, with
/// skipping ahead allowed (an uncollected order can be settled directly at
/// checkout). Backward and same-status moves are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Completed,
    Paid,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Paid => "PAID",
        }
    }

    pub fn can_transition_to(&self, target: OrderStatus) -> bool {
        target > *self
    }

    pub fn ensure_can_transition_to(&self, target: OrderStatus) -> Result<(), OrderError> {
        if self.can_transition_to(target) {
            Ok(())
        } else {
            Err(OrderError::InvalidTransition {
                from: *self,
                to: target,
            })
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(OrderStatus::Pending),
            "COMPLETED" => Ok(OrderStatus::Completed),
            "PAID" => Ok(OrderStatus::Paid),
            other => Err(OrderError::UnknownStatus(other.to_string())),
        }
    }
}

/// A placed food order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodOrder {
    pub id: Uuid,
    pub guest_id: Uuid,
    pub items: Vec<OrderItem>,
    /// Amount charged at placement time. Kept for list displays; billing
    /// re-derives totals from `items` instead of trusting this.
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// A new order before it is persisted
#[derive(Debug, Clone, PartialEq)]
pub struct NewFoodOrder {
    pub guest_id: Uuid,
    pub items: Vec<OrderItem>,
    pub total_amount: Decimal,
}

impl NewFoodOrder {
    /// Prices and assembles an order. Orders always start PENDING.
    pub fn place(guest_id: Uuid, items: Vec<OrderItem>) -> Self {
        let total_amount = placement_total(&items);
        Self {
            guest_id,
            items,
            total_amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line_items::LineItem;
    use rust_decimal_macros::dec;

    #[test]
    fn placing_an_order_prices_it() {
        let order = NewFoodOrder::place(
            Uuid::new_v4(),
            vec![OrderItem::Line(LineItem {
                name: "Tea".to_string(),
                price: dec!(10),
                qty: 2,
            })],
        );
        assert_eq!(order.total_amount, dec!(20));
    }

    #[test]
    fn forward_transitions_only() {
        use OrderStatus::*;
        assert!(Pending.can_transition_to(Completed));
        assert!(Pending.can_transition_to(Paid));
        assert!(Completed.can_transition_to(Paid));

        assert!(!Completed.can_transition_to(Pending));
        assert!(!Paid.can_transition_to(Completed));
        assert!(!Paid.can_transition_to(Paid));
    }
}
