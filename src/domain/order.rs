use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of an order.
///
/// A closed set; membership is the only rule. Transitions are driven by
/// callers (checkout, payment webhooks), not validated here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Paid,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Paid,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Wire label, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Paid => "PAID",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a status label outside the known set.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Invalid order status '{0}'. Valid status options are: PENDING, PAID, DELIVERED, CANCELLED")]
pub struct InvalidOrderStatus(pub String);

impl FromStr for OrderStatus {
    type Err = InvalidOrderStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .iter()
            .find(|status| status.as_str() == s)
            .copied()
            .ok_or_else(|| InvalidOrderStatus(s.to_string()))
    }
}

/// A persisted order header with derived totals.
///
/// Immutable after creation except for `status`/`updated_at`. The
/// `paid`/`paid_at` fields are written by the payment-settlement flow,
/// which lives outside this service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub total_amount: Decimal,
    pub total_items: u32,
    pub status: OrderStatus,
    pub paid: bool,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A line of an order: product reference, quantity, and the catalog
/// price captured at creation time. Never mutated post-creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: u32,
    pub quantity: u32,
    pub price: Decimal,
}

/// One requested line of a new order, as received from the bus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub product_id: u32,
    pub quantity: u32,
}

/// Payload for the store's atomic create: header totals plus the fully
/// priced item rows, persisted as one unit.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub total_amount: Decimal,
    pub total_items: u32,
    pub items: Vec<OrderItem>,
}

/// An order header together with its owned item rows, as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderWithItems {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
}

/// An order item enriched with the catalog-resolved product name.
///
/// The name is never stored; it is joined in at response time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedOrderItem {
    pub product_id: u32,
    pub quantity: u32,
    pub price: Decimal,
    pub name: String,
}

/// The enriched order shape returned by create and find_one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderWithProducts {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<NamedOrderItem>,
}

/// Listing filter: optional status plus one-based page and page size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderPagination {
    pub status: Option<OrderStatus>,
    pub page: u32,
    pub limit: u32,
}

impl Default for OrderPagination {
    fn default() -> Self {
        Self {
            status: None,
            page: 1,
            limit: 10,
        }
    }
}

impl OrderPagination {
    pub fn with_status(status: OrderStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

/// One page of order headers plus the filtered total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPage {
    pub data: Vec<Order>,
    pub total: u64,
    pub page: u32,
    pub last_page: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_labels() {
        for status in OrderStatus::ALL {
            assert_eq!(status.as_str().parse::<OrderStatus>(), Ok(status));
        }
    }

    #[test]
    fn unknown_status_names_the_valid_options() {
        let err = "SHIPPED".parse::<OrderStatus>().unwrap_err();
        assert_eq!(err, InvalidOrderStatus("SHIPPED".to_string()));
        let message = err.to_string();
        assert!(message.contains("SHIPPED"));
        assert!(message.contains("PENDING, PAID, DELIVERED, CANCELLED"));
    }

    #[test]
    fn status_serializes_as_wire_label() {
        let json = serde_json::to_string(&OrderStatus::Pending).unwrap();
        assert_eq!(json, "\"PENDING\"");
        let parsed: OrderStatus = serde_json::from_str("\"CANCELLED\"").unwrap();
        assert_eq!(parsed, OrderStatus::Cancelled);
    }

    #[test]
    fn order_wire_shape_uses_camel_case() {
        let now = Utc::now();
        let order = OrderWithItems {
            order: Order {
                id: Uuid::new_v4(),
                total_amount: Decimal::from(25),
                total_items: 3,
                status: OrderStatus::Pending,
                paid: false,
                paid_at: None,
                created_at: now,
                updated_at: now,
            },
            items: vec![OrderItem {
                product_id: 1,
                quantity: 2,
                price: Decimal::from(10),
            }],
        };

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["totalItems"], 3);
        assert_eq!(json["status"], "PENDING");
        assert_eq!(json["items"][0]["productId"], 1);
        assert!(json.get("paidAt").is_some());
    }

    #[test]
    fn pagination_defaults_to_first_page_of_ten() {
        let pagination = OrderPagination::default();
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.limit, 10);
        assert_eq!(pagination.status, None);
    }
}
