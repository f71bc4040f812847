use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One line of a payment session request: the catalog-resolved name plus
/// the captured price and quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentItem {
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

/// Request sent to the payment service to open a session for an
/// already-persisted order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSessionRequest {
    pub order_id: Uuid,
    pub currency: String,
    pub items: Vec<PaymentItem>,
}

/// Session descriptor issued by the payment service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSession {
    pub id: Uuid,
    pub order_id: Uuid,
    pub currency: String,
    pub amount: Decimal,
    pub url: String,
}
