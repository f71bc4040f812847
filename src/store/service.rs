use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::clients::StoreClient;
use crate::domain::{NewOrder, Order, OrderStatus, OrderWithItems};
use crate::messages::StoreRequest;
use crate::store::StoreError;

/// Order aggregate store service.
///
/// Owns the order table and its item rows. Requests are processed one at
/// a time, so a header and its items always become visible together —
/// callers above this contract see no transaction boundaries.
///
/// Lifecycle is explicit: the task logs readiness on startup, answers
/// health checks while running, and releases its state when the last
/// client is dropped.
pub struct StoreService {
    receiver: mpsc::Receiver<StoreRequest>,
    orders: HashMap<Uuid, OrderWithItems>,
    // Listing order is insertion order.
    insertion: Vec<Uuid>,
}

impl StoreService {
    pub fn new(buffer_size: usize) -> (Self, StoreClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            orders: HashMap::new(),
            insertion: Vec::new(),
        };
        (service, StoreClient::new(sender))
    }

    #[instrument(name = "order_store", skip(self))]
    pub async fn run(mut self) {
        info!("Order store ready");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::CreateOrder { order, respond_to } => {
                    let _ = respond_to.send(self.handle_create(order));
                }
                StoreRequest::FindOne { id, respond_to } => {
                    let _ = respond_to.send(Ok(self.orders.get(&id).cloned()));
                }
                StoreRequest::Count { status, respond_to } => {
                    let _ = respond_to.send(Ok(self.handle_count(status)));
                }
                StoreRequest::Page {
                    status,
                    skip,
                    take,
                    respond_to,
                } => {
                    let _ = respond_to.send(Ok(self.handle_page(status, skip, take)));
                }
                StoreRequest::UpdateStatus {
                    id,
                    status,
                    respond_to,
                } => {
                    let _ = respond_to.send(Ok(self.handle_update_status(id, status)));
                }
                StoreRequest::HealthCheck { respond_to } => {
                    let _ = respond_to.send(Ok(()));
                }
            }
        }
        info!(orders = self.orders.len(), "Order store stopped");
    }

    #[instrument(skip(self, order), fields(total_items = order.total_items))]
    fn handle_create(&mut self, order: NewOrder) -> Result<OrderWithItems, StoreError> {
        if order.items.is_empty() {
            return Err(StoreError::Rejected(
                "an order must contain at least one item".to_string(),
            ));
        }

        let now = Utc::now();
        let header = Order {
            id: Uuid::new_v4(),
            total_amount: order.total_amount,
            total_items: order.total_items,
            status: OrderStatus::Pending,
            paid: false,
            paid_at: None,
            created_at: now,
            updated_at: now,
        };
        let record = OrderWithItems {
            order: header,
            items: order.items,
        };

        self.insertion.push(record.order.id);
        self.orders.insert(record.order.id, record.clone());
        info!(order_id = %record.order.id, "Order persisted");
        Ok(record)
    }

    fn matching<'a>(
        &'a self,
        status: Option<OrderStatus>,
    ) -> impl Iterator<Item = &'a OrderWithItems> + 'a {
        self.insertion
            .iter()
            .filter_map(move |id| self.orders.get(id))
            .filter(move |record| status.map_or(true, |s| record.order.status == s))
    }

    fn handle_count(&self, status: Option<OrderStatus>) -> u64 {
        self.matching(status).count() as u64
    }

    #[instrument(skip(self))]
    fn handle_page(&self, status: Option<OrderStatus>, skip: u64, take: u64) -> Vec<Order> {
        debug!("Processing page request");
        self.matching(status)
            .skip(skip as usize)
            .take(take as usize)
            .map(|record| record.order.clone())
            .collect()
    }

    #[instrument(skip(self))]
    fn handle_update_status(&mut self, id: Uuid, status: OrderStatus) -> Option<Order> {
        let record = self.orders.get_mut(&id)?;
        record.order.status = status;
        record.order.updated_at = Utc::now();
        info!(order_id = %id, status = %status, "Order status updated");
        Some(record.order.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use crate::domain::OrderItem;

    fn new_order(amount: i64, quantity: u32) -> NewOrder {
        NewOrder {
            total_amount: Decimal::from(amount),
            total_items: quantity,
            items: vec![OrderItem {
                product_id: 1,
                quantity,
                price: Decimal::from(amount) / Decimal::from(quantity),
            }],
        }
    }

    fn spawn_store() -> StoreClient {
        let (service, client) = StoreService::new(16);
        tokio::spawn(service.run());
        client
    }

    #[tokio::test]
    async fn create_assigns_identity_and_defaults() {
        let store = spawn_store();

        let record = store.create_order(new_order(30, 3)).await.unwrap();
        assert_eq!(record.order.status, OrderStatus::Pending);
        assert!(!record.order.paid);
        assert_eq!(record.order.paid_at, None);
        assert_eq!(record.order.total_amount, Decimal::from(30));
        assert_eq!(record.order.created_at, record.order.updated_at);
        assert_eq!(record.items.len(), 1);
    }

    #[tokio::test]
    async fn create_rejects_an_order_without_items() {
        let store = spawn_store();

        let err = store
            .create_order(NewOrder {
                total_amount: Decimal::ZERO,
                total_items: 0,
                items: vec![],
            })
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Rejected(_)));
        assert_eq!(store.count(None).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn find_one_reads_back_the_created_aggregate() {
        let store = spawn_store();

        let created = store.create_order(new_order(30, 3)).await.unwrap();
        let found = store.find_one(created.order.id).await.unwrap();
        assert_eq!(found, Some(created));

        let absent = store.find_one(Uuid::new_v4()).await.unwrap();
        assert_eq!(absent, None);
    }

    #[tokio::test]
    async fn update_status_touches_only_the_matched_row() {
        let store = spawn_store();

        let created = store.create_order(new_order(30, 3)).await.unwrap();
        let updated = store
            .update_status(created.order.id, OrderStatus::Delivered)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, OrderStatus::Delivered);
        assert!(updated.updated_at >= created.order.updated_at);

        let missing = store
            .update_status(Uuid::new_v4(), OrderStatus::Paid)
            .await
            .unwrap();
        assert_eq!(missing, None);
    }

    #[tokio::test]
    async fn count_and_page_respect_the_status_filter() {
        let store = spawn_store();

        let mut pending_ids = Vec::new();
        for _ in 0..3 {
            let record = store.create_order(new_order(10, 1)).await.unwrap();
            pending_ids.push(record.order.id);
        }
        for _ in 0..2 {
            let record = store.create_order(new_order(20, 2)).await.unwrap();
            store
                .update_status(record.order.id, OrderStatus::Paid)
                .await
                .unwrap();
        }

        assert_eq!(store.count(None).await.unwrap(), 5);
        assert_eq!(store.count(Some(OrderStatus::Pending)).await.unwrap(), 3);
        assert_eq!(store.count(Some(OrderStatus::Paid)).await.unwrap(), 2);

        let first_page = store
            .page(Some(OrderStatus::Pending), 0, 2)
            .await
            .unwrap();
        assert_eq!(first_page.len(), 2);
        assert_eq!(first_page[0].id, pending_ids[0]);
        assert!(first_page.iter().all(|o| o.status == OrderStatus::Pending));

        let out_of_range = store
            .page(Some(OrderStatus::Pending), 10, 2)
            .await
            .unwrap();
        assert!(out_of_range.is_empty());
    }

    #[tokio::test]
    async fn health_check_answers_while_running() {
        let store = spawn_store();
        assert_eq!(store.ready().await, Ok(()));
    }
}
