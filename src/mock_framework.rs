//! # Mock Framework
//!
//! Utilities for testing clients and the orchestrator in isolation.
//!
//! Instead of spinning up a full service task, tests create a "mock
//! client": a real client whose channel ends in a receiver the test
//! controls. The test inspects the messages arriving on that receiver,
//! asserts they are correct, and answers them deterministically
//! (success, failure, silent omission).

use tokio::sync::{mpsc, oneshot};
use uuid::Uuid;

use crate::catalog::CatalogError;
use crate::clients::{CatalogClient, PaymentClient, StoreClient};
use crate::domain::{
    CatalogProduct, NewOrder, Order, OrderStatus, OrderWithItems, PaymentSession,
    PaymentSessionRequest,
};
use crate::messages::{CatalogRequest, PaymentRequest, StoreRequest};
use crate::payment::PaymentError;
use crate::store::StoreError;

pub fn mock_catalog_client(
    buffer_size: usize,
) -> (CatalogClient, mpsc::Receiver<CatalogRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CatalogClient::new(sender), receiver)
}

pub fn mock_store_client(buffer_size: usize) -> (StoreClient, mpsc::Receiver<StoreRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

pub fn mock_payment_client(
    buffer_size: usize,
    currency: &str,
) -> (PaymentClient, mpsc::Receiver<PaymentRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (PaymentClient::new(sender, currency.to_string()), receiver)
}

/// Helper to verify that the next catalog message is a validation request
pub async fn expect_validate_products(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<(
    Vec<u32>,
    oneshot::Sender<Result<Vec<CatalogProduct>, CatalogError>>,
)> {
    match receiver.recv().await {
        Some(CatalogRequest::ValidateProducts {
            product_ids,
            respond_to,
        }) => Some((product_ids, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next store message is an atomic create
pub async fn expect_create_order(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(NewOrder, oneshot::Sender<Result<OrderWithItems, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::CreateOrder { order, respond_to }) => Some((order, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next store message is a point read
pub async fn expect_find_one(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(
    Uuid,
    oneshot::Sender<Result<Option<OrderWithItems>, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::FindOne { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next store message is a filtered count
pub async fn expect_count(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(Option<OrderStatus>, oneshot::Sender<Result<u64, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Count { status, respond_to }) => Some((status, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next store message is a paged read
pub async fn expect_page(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(
    Option<OrderStatus>,
    u64,
    u64,
    oneshot::Sender<Result<Vec<Order>, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Page {
            status,
            skip,
            take,
            respond_to,
        }) => Some((status, skip, take, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next store message is a status update
pub async fn expect_update_status(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(
    Uuid,
    OrderStatus,
    oneshot::Sender<Result<Option<Order>, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::UpdateStatus {
            id,
            status,
            respond_to,
        }) => Some((id, status, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next payment message is a session request
pub async fn expect_create_session(
    receiver: &mut mpsc::Receiver<PaymentRequest>,
) -> Option<(
    PaymentSessionRequest,
    oneshot::Sender<Result<PaymentSession, PaymentError>>,
)> {
    match receiver.recv().await {
        Some(PaymentRequest::CreateSession {
            session,
            respond_to,
        }) => Some((session, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;

    use crate::domain::{NamedOrderItem, OrderWithProducts};

    #[tokio::test]
    async fn payment_client_builds_the_session_request_from_the_order() {
        let (client, mut receiver) = mock_payment_client(8, "eur");

        let now = Utc::now();
        let order = OrderWithProducts {
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
            items: vec![
                NamedOrderItem {
                    product_id: 1,
                    quantity: 2,
                    price: Decimal::from(10),
                    name: "A".to_string(),
                },
                NamedOrderItem {
                    product_id: 2,
                    quantity: 1,
                    price: Decimal::from(5),
                    name: "B".to_string(),
                },
            ],
        };
        let order_id = order.order.id;

        let task = tokio::spawn(async move { client.create_payment_session(&order).await });

        let (session, responder) = expect_create_session(&mut receiver)
            .await
            .expect("expected payment session request");
        assert_eq!(session.order_id, order_id);
        assert_eq!(session.currency, "eur");
        assert_eq!(session.items.len(), 2);
        assert_eq!(session.items[0].name, "A");
        assert_eq!(session.items[0].quantity, 2);

        let issued = PaymentSession {
            id: Uuid::new_v4(),
            order_id,
            currency: session.currency.clone(),
            amount: Decimal::from(25),
            url: "https://payments.example.com/session/test".to_string(),
        };
        responder.send(Ok(issued.clone())).unwrap();

        let result = task.await.unwrap().unwrap();
        assert_eq!(result, issued);
    }
}
