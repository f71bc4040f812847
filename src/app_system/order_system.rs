use tracing::{error, info};

use crate::catalog::CatalogService;
use crate::clients::{OrdersClient, PaymentClient, StoreClient};
use crate::config::ServiceConfig;
use crate::domain::CatalogProduct;
use crate::orders::OrdersService;
use crate::payment::PaymentService;
use crate::store::{StoreError, StoreService};

/// The main application system that wires all service tasks together.
///
/// Responsible for starting the tasks, injecting clients, and handling
/// shutdown.
pub struct OrdersSystem {
    pub orders_client: OrdersClient,
    pub payment_client: PaymentClient,
    store_client: StoreClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrdersSystem {
    /// Start every service task and wire the orchestrator to its
    /// collaborators. `products` seeds the catalog.
    pub fn new(config: &ServiceConfig, products: Vec<CatalogProduct>) -> Self {
        let capacity = config.channel_capacity;

        let (catalog_service, catalog_client) = CatalogService::new(capacity, products);
        let catalog_handle = tokio::spawn(catalog_service.run());

        let (store_service, store_client) = StoreService::new(capacity);
        let store_handle = tokio::spawn(store_service.run());

        let (payment_service, payment_client) =
            PaymentService::new(capacity, config.currency.clone());
        let payment_handle = tokio::spawn(payment_service.run());

        let (orders_service, orders_client) =
            OrdersService::new(capacity, catalog_client, store_client.clone());
        let orders_handle = tokio::spawn(orders_service.run());

        Self {
            orders_client,
            payment_client,
            store_client,
            handles: vec![orders_handle, store_handle, catalog_handle, payment_handle],
        }
    }

    /// Readiness of the persistence collaborator. The orchestrator is
    /// not usable before the store answers.
    pub async fn await_ready(&self) -> Result<(), StoreError> {
        self.store_client.ready().await
    }

    /// Close every request channel and wait for the tasks to drain.
    ///
    /// Dropping the orchestrator client ends the orders task, which in
    /// turn releases its catalog and store clients.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down order system");

        drop(self.orders_client);
        drop(self.payment_client);
        drop(self.store_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Service task failed: {:?}", e);
                return Err(format!("Service task failed: {e:?}"));
            }
        }

        info!("Order system shutdown complete");
        Ok(())
    }
}
