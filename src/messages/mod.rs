//! Typed message enums for service communication. Each variant carries
//! its parameters and a oneshot channel for the response.

use tokio::sync::oneshot;
use uuid::Uuid;

use crate::catalog::CatalogError;
use crate::domain::{
    CatalogProduct, NewOrder, Order, OrderItemRequest, OrderPage, OrderPagination, OrderStatus,
    OrderWithItems, OrderWithProducts, PaymentSession, PaymentSessionRequest,
};
use crate::orders::OrderError;
use crate::payment::PaymentError;
use crate::store::StoreError;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Requests handled by the product catalog service.
#[derive(Debug)]
pub enum CatalogRequest {
    /// Validate a batch of product ids and return the matched snapshots.
    /// Fails naming every id with no catalog match.
    ValidateProducts {
        product_ids: Vec<u32>,
        respond_to: ServiceResponse<Vec<CatalogProduct>, CatalogError>,
    },
}

/// Requests handled by the order aggregate store.
#[derive(Debug)]
pub enum StoreRequest {
    /// Atomic multi-row create: header and items become visible together
    /// or not at all.
    CreateOrder {
        order: NewOrder,
        respond_to: ServiceResponse<OrderWithItems, StoreError>,
    },
    FindOne {
        id: Uuid,
        respond_to: ServiceResponse<Option<OrderWithItems>, StoreError>,
    },
    Count {
        status: Option<OrderStatus>,
        respond_to: ServiceResponse<u64, StoreError>,
    },
    Page {
        status: Option<OrderStatus>,
        skip: u64,
        take: u64,
        respond_to: ServiceResponse<Vec<Order>, StoreError>,
    },
    /// Single-field status update. Responds with `None` when no row
    /// matched the id.
    UpdateStatus {
        id: Uuid,
        status: OrderStatus,
        respond_to: ServiceResponse<Option<Order>, StoreError>,
    },
    HealthCheck {
        respond_to: ServiceResponse<(), StoreError>,
    },
}

/// The four bus operations exposed by the orders service.
#[derive(Debug)]
pub enum OrderRequest {
    Create {
        items: Vec<OrderItemRequest>,
        respond_to: ServiceResponse<OrderWithProducts, OrderError>,
    },
    FindAll {
        query: OrderPagination,
        respond_to: ServiceResponse<OrderPage, OrderError>,
    },
    FindOne {
        id: Uuid,
        respond_to: ServiceResponse<OrderWithProducts, OrderError>,
    },
    ChangeStatus {
        id: Uuid,
        status: OrderStatus,
        respond_to: ServiceResponse<Order, OrderError>,
    },
}

/// Requests handled by the payment service.
#[derive(Debug)]
pub enum PaymentRequest {
    CreateSession {
        session: PaymentSessionRequest,
        respond_to: ServiceResponse<PaymentSession, PaymentError>,
    },
}
