mod app_system;
mod catalog;
mod clients;
mod config;
mod domain;
mod messages;
mod orders;
mod payment;
mod store;

#[cfg(test)]
mod mock_framework;


use rust_decimal::Decimal;
use tracing::{info, Instrument};

use crate::app_system::{setup_tracing, OrdersSystem};
use crate::config::ServiceConfig;
use crate::domain::{CatalogProduct, OrderItemRequest, OrderPagination, OrderStatus};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = ServiceConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting order management service");

    // Catalog seed standing in for the separate products deployment.
    let products = vec![
        CatalogProduct::new(1, "Keyboard", Decimal::new(4999, 2)),
        CatalogProduct::new(2, "Mouse", Decimal::new(1950, 2)),
        CatalogProduct::new(3, "Monitor", Decimal::new(18900, 2)),
    ];

    let system = OrdersSystem::new(&config, products);
    system.await_ready().await.map_err(|e| e.to_string())?;
    info!("Order system ready");

    let span = tracing::info_span!("order_processing");
    let order = async {
        info!("Creating order");
        system
            .orders_client
            .create_order(vec![
                OrderItemRequest {
                    product_id: 1,
                    quantity: 2,
                },
                OrderItemRequest {
                    product_id: 2,
                    quantity: 1,
                },
            ])
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(
        order_id = %order.order.id,
        total_amount = %order.order.total_amount,
        total_items = order.order.total_items,
        "Order created successfully"
    );

    let fetched = system
        .orders_client
        .find_one(order.order.id)
        .await
        .map_err(|e| e.to_string())?;
    info!(items = fetched.items.len(), "Order read back with resolved names");

    let session = system
        .payment_client
        .create_payment_session(&fetched)
        .await
        .map_err(|e| e.to_string())?;
    info!(session_id = %session.id, url = %session.url, "Payment session opened");

    let updated = system
        .orders_client
        .change_status(order.order.id, OrderStatus::Paid)
        .await
        .map_err(|e| e.to_string())?;
    info!(status = %updated.status, "Order status changed");

    let page = system
        .orders_client
        .find_all(OrderPagination::default())
        .await
        .map_err(|e| e.to_string())?;
    info!(total = page.total, last_page = page.last_page, "Orders listed");

    let paid = system
        .orders_client
        .find_all(OrderPagination::with_status(OrderStatus::Paid))
        .await
        .map_err(|e| e.to_string())?;
    info!(total = paid.total, "Paid orders listed");

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
