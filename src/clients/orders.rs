use tokio::sync::mpsc;
use uuid::Uuid;

use crate::client_method;
use crate::domain::{
    Order, OrderItemRequest, OrderPage, OrderPagination, OrderStatus, OrderWithProducts,
};
use crate::messages::OrderRequest;
use crate::orders::OrderError;

/// Client for the orders service: the command surface's view of the four
/// bus operations.
#[derive(Clone)]
pub struct OrdersClient {
    sender: mpsc::Sender<OrderRequest>,
}

impl OrdersClient {
    pub(crate) fn new(sender: mpsc::Sender<OrderRequest>) -> Self {
        Self { sender }
    }
}

client_method!(OrdersClient => fn create_order(items: Vec<OrderItemRequest>) -> OrderWithProducts as OrderRequest::Create, Error = OrderError);
client_method!(OrdersClient => fn find_all(query: OrderPagination) -> OrderPage as OrderRequest::FindAll, Error = OrderError);
client_method!(OrdersClient => fn find_one(id: Uuid) -> OrderWithProducts as OrderRequest::FindOne, Error = OrderError);
client_method!(OrdersClient => fn change_status(id: Uuid, status: OrderStatus) -> Order as OrderRequest::ChangeStatus, Error = OrderError);
