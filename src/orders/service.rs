use std::collections::HashMap;

use rust_decimal::Decimal;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

use crate::clients::{CatalogClient, OrdersClient, StoreClient};
use crate::domain::{
    CatalogProduct, NamedOrderItem, NewOrder, Order, OrderItem, OrderItemRequest, OrderPage,
    OrderPagination, OrderStatus, OrderWithItems, OrderWithProducts,
};
use crate::messages::OrderRequest;
use crate::orders::OrderError;

/// Order orchestrator service.
///
/// Validates requested items against the catalog, computes derived
/// totals, persists the aggregate through the store, and reshapes
/// responses by joining stored line items with catalog names.
pub struct OrdersService {
    receiver: mpsc::Receiver<OrderRequest>,
    catalog: CatalogClient,
    store: StoreClient,
}

impl OrdersService {
    pub fn new(
        buffer_size: usize,
        catalog: CatalogClient,
        store: StoreClient,
    ) -> (Self, OrdersClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            catalog,
            store,
        };
        (service, OrdersClient::new(sender))
    }

    #[instrument(name = "orders_service", skip(self))]
    pub async fn run(mut self) {
        info!("Orders service starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                OrderRequest::Create { items, respond_to } => {
                    let _ = respond_to.send(self.handle_create(items).await);
                }
                OrderRequest::FindAll { query, respond_to } => {
                    let _ = respond_to.send(self.handle_find_all(query).await);
                }
                OrderRequest::FindOne { id, respond_to } => {
                    let _ = respond_to.send(self.handle_find_one(id).await);
                }
                OrderRequest::ChangeStatus {
                    id,
                    status,
                    respond_to,
                } => {
                    let _ = respond_to.send(self.handle_change_status(id, status).await);
                }
            }
        }
        info!("Orders service stopped");
    }

    /// Create an order: validate products, compute totals, persist the
    /// aggregate atomically, enrich the response with catalog names.
    ///
    /// No row is ever persisted without a fully resolved price: a
    /// product missing from the validation response fails the whole
    /// operation before the store is touched.
    #[instrument(skip(self, items), fields(item_count = items.len()))]
    async fn handle_create(
        &self,
        items: Vec<OrderItemRequest>,
    ) -> Result<OrderWithProducts, OrderError> {
        info!("Processing create_order request");

        if items.is_empty() {
            return Err(OrderError::Validation(
                "an order must contain at least one item".to_string(),
            ));
        }
        if let Some(item) = items.iter().find(|item| item.quantity == 0) {
            return Err(OrderError::Validation(format!(
                "quantity must be positive for product {}",
                item.product_id
            )));
        }

        // One entry per line item; duplicates are separate lines.
        let product_ids: Vec<u32> = items.iter().map(|item| item.product_id).collect();
        let products = self
            .catalog
            .validate_products(product_ids)
            .await
            .map_err(|e| {
                error!(error = %e, "Product validation failed");
                OrderError::CreationFailed(e)
            })?;
        let by_id: HashMap<u32, &CatalogProduct> =
            products.iter().map(|p| (p.id, p)).collect();

        let mut order_items = Vec::with_capacity(items.len());
        let mut total_amount = Decimal::ZERO;
        let mut total_items: u32 = 0;
        for item in &items {
            // Membership check: a silently omitted product must fail,
            // never price a line as zero.
            let product = by_id
                .get(&item.product_id)
                .ok_or(OrderError::ProductNotFound(item.product_id))?;
            total_items += item.quantity;
            total_amount += product.price * Decimal::from(item.quantity);
            order_items.push(OrderItem {
                product_id: item.product_id,
                quantity: item.quantity,
                price: product.price,
            });
        }

        let persisted = self
            .store
            .create_order(NewOrder {
                total_amount,
                total_items,
                items: order_items,
            })
            .await
            .map_err(|e| {
                error!(error = %e, "Order persistence failed");
                OrderError::Persistence(e)
            })?;

        info!(
            order_id = %persisted.order.id,
            total_amount = %persisted.order.total_amount,
            total_items = persisted.order.total_items,
            "Order created"
        );
        attach_names(persisted, &by_id)
    }

    #[instrument(skip(self))]
    async fn handle_find_all(&self, query: OrderPagination) -> Result<OrderPage, OrderError> {
        debug!("Processing find_all_orders request");

        if query.page == 0 || query.limit == 0 {
            return Err(OrderError::Validation(
                "page and limit must be positive".to_string(),
            ));
        }

        let total = self
            .store
            .count(query.status)
            .await
            .map_err(OrderError::Persistence)?;
        let skip = u64::from(query.page - 1) * u64::from(query.limit);
        let data = self
            .store
            .page(query.status, skip, u64::from(query.limit))
            .await
            .map_err(OrderError::Persistence)?;

        Ok(OrderPage {
            data,
            total,
            page: query.page,
            last_page: total.div_ceil(u64::from(query.limit)),
        })
    }

    /// Fetch one order and resolve its item names live from the catalog.
    /// If the catalog is down, the persisted order is unreadable and the
    /// failure surfaces as-is.
    #[instrument(skip(self))]
    async fn handle_find_one(&self, id: Uuid) -> Result<OrderWithProducts, OrderError> {
        debug!("Processing find_one_order request");

        let record = self
            .store
            .find_one(id)
            .await
            .map_err(OrderError::Persistence)?
            .ok_or(OrderError::OrderNotFound(id))?;

        let product_ids = record.items.iter().map(|item| item.product_id).collect();
        let products = self
            .catalog
            .validate_products(product_ids)
            .await
            .map_err(|e| {
                error!(error = %e, "Name resolution failed");
                OrderError::Unavailable(e.to_string())
            })?;
        let by_id: HashMap<u32, &CatalogProduct> =
            products.iter().map(|p| (p.id, p)).collect();

        attach_names(record, &by_id)
    }

    #[instrument(skip(self))]
    async fn handle_change_status(
        &self,
        id: Uuid,
        status: OrderStatus,
    ) -> Result<Order, OrderError> {
        info!("Processing change_order_status request");

        let order = self
            .store
            .update_status(id, status)
            .await
            .map_err(OrderError::Persistence)?
            .ok_or(OrderError::OrderNotFound(id))?;

        info!(order_id = %id, status = %order.status, "Order status changed");
        Ok(order)
    }
}

/// Join stored line items with catalog-resolved names. The name is never
/// stored, only returned.
fn attach_names(
    record: OrderWithItems,
    by_id: &HashMap<u32, &CatalogProduct>,
) -> Result<OrderWithProducts, OrderError> {
    let items = record
        .items
        .into_iter()
        .map(|item| {
            let product = by_id
                .get(&item.product_id)
                .ok_or(OrderError::ProductNotFound(item.product_id))?;
            Ok(NamedOrderItem {
                product_id: item.product_id,
                quantity: item.quantity,
                price: item.price,
                name: product.name.clone(),
            })
        })
        .collect::<Result<Vec<_>, OrderError>>()?;

    Ok(OrderWithProducts {
        order: record.order,
        items,
    })
}
