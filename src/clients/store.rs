use tokio::sync::mpsc;
use uuid::Uuid;

use crate::client_method;
use crate::domain::{NewOrder, Order, OrderStatus, OrderWithItems};
use crate::messages::StoreRequest;
use crate::store::StoreError;

/// Client for the order aggregate store.
///
/// The injected persistence capability: atomic create-with-children,
/// point reads with children, count/page with filter, single-field
/// status update, and a readiness probe.
#[derive(Clone)]
pub struct StoreClient {
    sender: mpsc::Sender<StoreRequest>,
}

impl StoreClient {
    pub(crate) fn new(sender: mpsc::Sender<StoreRequest>) -> Self {
        Self { sender }
    }
}

client_method!(StoreClient => fn create_order(order: NewOrder) -> OrderWithItems as StoreRequest::CreateOrder, Error = StoreError);
client_method!(StoreClient => fn find_one(id: Uuid) -> Option<OrderWithItems> as StoreRequest::FindOne, Error = StoreError);
client_method!(StoreClient => fn count(status: Option<OrderStatus>) -> u64 as StoreRequest::Count, Error = StoreError);
client_method!(StoreClient => fn page(status: Option<OrderStatus>, skip: u64, take: u64) -> Vec<Order> as StoreRequest::Page, Error = StoreError);
client_method!(StoreClient => fn update_status(id: Uuid, status: OrderStatus) -> Option<Order> as StoreRequest::UpdateStatus, Error = StoreError);
client_method!(StoreClient => fn ready() -> () as StoreRequest::HealthCheck, Error = StoreError);
